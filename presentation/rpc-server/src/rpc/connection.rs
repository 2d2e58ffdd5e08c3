use std::sync::Arc;

use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::Framed;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use super::codec::JsonSocketCodec;
use super::dispatcher::{MessageHandler, dispatch};

/// Replies queued per connection before request tasks wait on the writer.
const REPLY_BUFFER: usize = 64;

/// Serves one caller connection until it closes, a frame is corrupt, or
/// shutdown is requested.
///
/// Each inbound packet runs on its own task, so replies may leave in a
/// different order than requests arrived; callers match them by id. Packet
/// and writer tasks are spawned on `tracker`, so waiting on it covers
/// requests still in flight after shutdown stops the read loop.
pub async fn serve_connection(
    stream: TcpStream,
    handler: Arc<dyn MessageHandler>,
    shutdown: CancellationToken,
    tracker: TaskTracker,
) {
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    tracing::debug!(peer = %peer, "Connection opened");

    let (mut sink, mut stream) = Framed::new(stream, JsonSocketCodec::default()).split();
    let (reply_tx, mut reply_rx) = mpsc::channel::<Bytes>(REPLY_BUFFER);

    let writer_peer = peer.clone();
    let writer = tracker.spawn(async move {
        while let Some(reply) = reply_rx.recv().await {
            if let Err(e) = sink.send(reply).await {
                tracing::warn!(peer = %writer_peer, error = %e, "Failed to write reply");
                break;
            }
        }
    });

    loop {
        let frame = tokio::select! {
            _ = shutdown.cancelled() => break,
            frame = stream.next() => frame,
        };

        match frame {
            Some(Ok(frame)) => {
                let handler = handler.clone();
                let reply_tx = reply_tx.clone();
                tracker.spawn(async move {
                    let Some(reply) = dispatch(handler.as_ref(), &frame).await else {
                        return;
                    };
                    match serde_json::to_vec(&reply) {
                        Ok(encoded) => {
                            let _ = reply_tx.send(Bytes::from(encoded)).await;
                        }
                        Err(e) => tracing::error!(error = %e, "Failed to encode reply"),
                    }
                });
            }
            Some(Err(e)) => {
                tracing::warn!(peer = %peer, error = %e, "Closing connection on bad frame");
                break;
            }
            None => break,
        }
    }

    // The writer drains replies of requests still in flight, then stops.
    drop(reply_tx);
    let _ = writer.await;
    tracing::debug!(peer = %peer, "Connection closed");
}
