//! Change events emitted after successful writes.

use std::fmt;

use chrono::{DateTime, Utc};
use hostel_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Tables whose changes are announced on the realtime channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Buildings,
    Blocks,
    Floors,
    Rooms,
    Students,
    Attendance,
}

impl Table {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buildings => "buildings",
            Self::Blocks => "blocks",
            Self::Floors => "floors",
            Self::Rooms => "rooms",
            Self::Students => "students",
            Self::Attendance => "attendance",
        }
    }

    /// Singular prefix used in event names, e.g. `floor` in `floor.updated`.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Buildings => "building",
            Self::Blocks => "block",
            Self::Floors => "floor",
            Self::Rooms => "room",
            Self::Students => "student",
            Self::Attendance => "attendance",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plain row-level changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

impl ChangeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// A data change that subscribers should react to, typically by refetching.
///
/// Serializes with a `"type": "change"` tag so clients can tell it apart
/// from other frames on the socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "change")]
pub struct ChangeEvent {
    /// Dot-separated event name, e.g. `"attendance.marked"`.
    pub event_type: String,
    pub table: Table,
    /// Id of the affected row; `None` for multi-row changes.
    pub entity_id: Option<DbId>,
    /// Event-specific data, usually the written row.
    pub payload: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    /// Create an event with an empty payload and no entity id.
    pub fn new(table: Table, event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            table,
            entity_id: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// `<entity>.<action>` event for a single row, e.g. `room.deleted`.
    pub fn row(table: Table, action: ChangeAction, id: DbId) -> Self {
        Self::new(table, format!("{}.{}", table.entity(), action.as_str())).with_entity(id)
    }

    pub fn with_entity(mut self, id: DbId) -> Self {
        self.entity_id = Some(id);
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Attach a serializable value as the payload. Values that fail to
    /// serialize leave the payload unchanged.
    pub fn with_data<T: Serialize>(self, data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(payload) => self.with_payload(payload),
            Err(e) => {
                tracing::warn!(error = %e, event_type = %self.event_type, "Unserializable event payload");
                self
            }
        }
    }
}
