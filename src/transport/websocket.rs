//! WebSocket transport
//!
//! Accepts TCP connections, upgrades them to WebSocket and attaches each one
//! to the hub:
//! - on handshake the connection is subscribed, which queues the replay
//!   snapshot as its first frame
//! - a writer task drains the connection's channel onto the socket
//! - inbound `chat:message` events are published as-is
//! - on close, error, or a failed write the connection is unsubscribed
//!
//! Frames that do not decode as a client event are logged and ignored.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::spawn;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tracing::{debug, error, info, warn};
use tungstenite::protocol::Message as WsMessage;

use crate::client::{Connection, ConnectionId, Delivery};
use crate::hub::{SharedHub, lock_hub};
use crate::transport::message::{ClientEvent, ServerEvent};

/// Serve connections from `listener` until the task is dropped.
pub async fn start_websocket_server(listener: TcpListener, hub: SharedHub) {
    match listener.local_addr() {
        Ok(addr) => info!("WebSocket server listening on ws://{addr}"),
        Err(e) => warn!("WebSocket server listening on unknown address: {e}"),
    }

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                spawn(handle_connection(stream, peer, hub.clone()));
            }
            Err(e) => warn!("failed to accept connection: {e}"),
        }
    }
}

async fn handle_connection(stream: TcpStream, peer: SocketAddr, hub: SharedHub) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!(%peer, "WebSocket handshake error: {e}");
            return;
        }
    };
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Delivery>();

    let connection_id = lock_hub(&hub).subscribe(Connection::new(tx));
    info!(%peer, %connection_id, "client connected");

    {
        let hub = hub.clone();
        let connection_id = connection_id.clone();

        spawn(async move {
            while let Some(delivery) = rx.recv().await {
                let frame = match ServerEvent::from(delivery).to_frame() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("Failed to encode event for {connection_id}: {e}");
                        continue;
                    }
                };
                if let Err(e) = ws_sender.send(frame).await {
                    debug!("Failed to send message to {connection_id}: {e}");
                    break;
                }
            }

            lock_hub(&hub).unsubscribe(&connection_id);
            let _ = ws_sender.close().await;
            debug!("Send loop closed for {connection_id}");
        });
    }

    while let Some(frame) = ws_receiver.next().await {
        match frame {
            Ok(WsMessage::Text(text)) => handle_text(&hub, &connection_id, text.as_str()),
            Ok(WsMessage::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                debug!("Read error from {connection_id}: {e}");
                break;
            }
        }
    }

    lock_hub(&hub).unsubscribe(&connection_id);
    info!(%peer, %connection_id, "client disconnected");
}

fn handle_text(hub: &SharedHub, connection_id: &ConnectionId, text: &str) {
    match ClientEvent::from_frame(text) {
        Ok(ClientEvent::Message(message)) => {
            lock_hub(hub).publish(message);
            debug!("{connection_id} published a message");
        }
        Err(err) => {
            warn!(
                "Invalid client message from {connection_id}: {err} | {}",
                text.chars().take(100).collect::<String>()
            );
        }
    }
}
