use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hostel_core::error::CoreError;
use serde_json::json;
use validator::ValidationErrors;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"error", "code"}` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(validation_message(&errors)))
    }
}

/// Join field messages into one line, sorted by field for stable output.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                (field.clone(), message)
            })
        })
        .collect();
    messages.sort();
    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (23505) on a `uq_` constraint map to 409.
/// - Foreign key violations (23503) map to 400 `INVALID_REFERENCE`.
/// - Check violations (23514) map to 400 `VALIDATION_ERROR`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                ),
                Some("23503") => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_REFERENCE",
                    format!("Referenced record does not exist ({constraint})"),
                ),
                Some("23514") => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates check constraint: {constraint}"),
                ),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    internal()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_entity_and_id() {
        let (status, body) = render(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: 7,
        }))
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["error"], "Room with id 7 not found");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let (status, body) =
            render(CoreError::Validation("Month must be between 1 and 12".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn internal_errors_are_sanitized() {
        let (status, body) = render(AppError::InternalError("pool exhausted".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn row_not_found_maps_to_404() {
        let (status, _) = render(sqlx::Error::RowNotFound.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
        name: String,
        #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
        phone_number: String,
    }

    #[test]
    fn validation_errors_join_field_messages() {
        let errors = Sample {
            name: "A".into(),
            phone_number: "123".into(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from(errors);
        let AppError::Core(CoreError::Validation(msg)) = err else {
            panic!("expected validation error");
        };
        assert_eq!(
            msg,
            "Name must be at least 2 characters; Phone number must be at least 10 digits"
        );
    }
}
