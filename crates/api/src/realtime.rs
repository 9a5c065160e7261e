//! Relays change events from the bus to every WebSocket client.

use std::sync::Arc;

use axum::extract::ws::Message;
use hostel_events::ChangeEvent;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Forwards each [`ChangeEvent`] to all sockets as a JSON text frame.
pub struct RealtimeRelay {
    ws_manager: Arc<WsManager>,
}

impl RealtimeRelay {
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run until the bus closes (every [`EventBus`](hostel_events::EventBus)
    /// handle dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<ChangeEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.relay(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Realtime relay lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, realtime relay shutting down");
                    break;
                }
            }
        }
    }

    async fn relay(&self, event: &ChangeEvent) {
        let text = match serde_json::to_string(event) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, event_type = %event.event_type, "Failed to encode change event");
                return;
            }
        };
        let delivered = self.ws_manager.broadcast(Message::Text(text.into())).await;
        tracing::debug!(event_type = %event.event_type, delivered, "Relayed change event");
    }
}
