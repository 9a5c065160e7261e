use std::sync::Arc;
use std::time::Duration;

use crate::ws::manager::WsManager;

const HEARTBEAT_INTERVAL_SECS: u64 = 30;

/// Spawn a task that pings every connected client periodically.
///
/// Runs until aborted through the returned handle.
pub fn start_heartbeat(ws_manager: Arc<WsManager>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(HEARTBEAT_INTERVAL_SECS));

        loop {
            interval.tick().await;
            let count = ws_manager.connection_count().await;
            if count > 0 {
                tracing::debug!(count, "WebSocket heartbeat ping");
                ws_manager.ping_all().await;
            }
        }
    })
}
