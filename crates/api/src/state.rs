use std::sync::Arc;

use hostel_events::EventBus;

use crate::config::ServerConfig;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything non-trivial sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: hostel_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Realtime WebSocket connections.
    pub ws_manager: Arc<WsManager>,
    /// Change events published after successful writes.
    pub event_bus: Arc<EventBus>,
}
