use async_trait::async_trait;
use serde_json::Value;

use super::error::RpcError;
use super::packet::{InboundPacket, OutboundPacket};

/// A set of message patterns served by the transport.
#[async_trait]
pub trait MessageHandler: Send + Sync {
    /// Returns `None` when `command` is not one of this handler's patterns.
    async fn handle(&self, command: &str, data: Value) -> Option<Result<Value, RpcError>>;
}

/// Routes one decoded frame to its handler and builds the reply.
///
/// Events and undecodable frames get no reply.
pub async fn dispatch(handler: &dyn MessageHandler, frame: &[u8]) -> Option<OutboundPacket> {
    let packet: InboundPacket = match serde_json::from_slice(frame) {
        Ok(packet) => packet,
        Err(e) => {
            tracing::warn!(error = %e, "Dropping undecodable packet");
            return None;
        }
    };

    let command = packet.command();
    let result = match command.as_deref() {
        Some(command) => handler.handle(command, packet.data).await,
        None => None,
    }
    .unwrap_or_else(|| Err(RpcError::no_matching_handler()));

    match packet.id {
        Some(id) => {
            if let Err(err) = &result {
                tracing::debug!(id = %id, command = ?command, error = ?err, "Request failed");
            }
            Some(OutboundPacket::from_result(id, result))
        }
        None => {
            if let Err(err) = result {
                tracing::warn!(command = ?command, error = ?err, "Event handler failed");
            }
            None
        }
    }
}
