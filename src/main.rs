//! CLI for roomcast
//!
//! Subcommands:
//! - `server`: run the relay
//! - `client`: connect, print the replay history, optionally say something
//!   (useful for smoke tests)

use chrono::{Local, TimeZone};
use clap::Parser;
use futures_util::{SinkExt, Stream, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{error, info};
use uuid::Uuid;

use roomcast::config::load_config;
use roomcast::hub::{Hub, Message};
use roomcast::transport::{ClientEvent, ServerEvent, start_websocket_server};
use roomcast::utils::error::{RelayError, Result};

#[derive(Parser)]
#[command(name = "roomcast")]
enum Command {
    /// Start the relay server
    Server {
        /// Interface to bind, overrides configuration
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides configuration and PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run a simple client against a running server
    Client {
        /// WebSocket server URL to connect to
        #[arg(long, default_value = "ws://127.0.0.1:3000")]
        url: String,
        /// Display name attached to published messages
        #[arg(long, default_value = "anonymous")]
        username: String,
        /// Publish this text once connected and exit after it is echoed back
        #[arg(long)]
        text: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    roomcast::utils::logging::init("info");

    match Command::parse() {
        Command::Server { host, port } => {
            if let Err(e) = run_server(host, port).await {
                error!("Server failed: {e}");
            }
        }
        Command::Client {
            url,
            username,
            text,
        } => {
            if let Err(e) = run_client(&url, &username, text.as_deref()).await {
                error!("Client failed: {e}");
            }
        }
    }
}

async fn run_server(host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = load_config()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let listener = TcpListener::bind(config.server.addr()).await?;
    let hub = Hub::with_capacity(config.hub.replay_capacity).into_shared();

    tokio::select! {
        _ = start_websocket_server(listener, hub) => {
            error!("WebSocket server exited unexpectedly.");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting gracefully.");
        }
    }

    Ok(())
}

async fn run_client(url: &str, username: &str, text: Option<&str>) -> Result<()> {
    let (mut ws_stream, _response) = connect_async(url).await?;

    // The server always opens with the replay history.
    match next_event(&mut ws_stream).await? {
        Some(ServerEvent::Buffer(history)) => {
            println!("--- {} earlier message(s) ---", history.len());
            for message in &history {
                println!("{}", render_line(message));
            }
        }
        Some(other) => {
            return Err(RelayError::Protocol(format!(
                "expected chat:buffer first, got {other:?}"
            )));
        }
        None => return Ok(()),
    }

    let sent_id = match text {
        Some(text) => {
            let id = Uuid::new_v4().to_string();
            let message = Message::new(
                &id,
                chrono::Utc::now().timestamp_millis(),
                &Uuid::new_v4().to_string(),
                username,
                text,
            );
            ws_stream
                .send(ClientEvent::Message(message).to_frame()?)
                .await?;
            Some(id)
        }
        None => None,
    };

    loop {
        let event = tokio::select! {
            event = next_event(&mut ws_stream) => event?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(ServerEvent::Message(message)) = event else {
            break;
        };
        println!("{}", render_line(&message));
        if sent_id.is_some() && message.id() == sent_id.as_deref() {
            break;
        }
    }

    let _ = ws_stream.close(None).await;
    Ok(())
}

async fn next_event<S>(ws_stream: &mut S) -> Result<Option<ServerEvent>>
where
    S: Stream<Item = std::result::Result<WsMessage, tungstenite::Error>> + Unpin,
{
    while let Some(frame) = ws_stream.next().await {
        if let WsMessage::Text(text) = frame? {
            return Ok(Some(ServerEvent::from_frame(text.as_str())?));
        }
    }
    Ok(None)
}

/// `[HH:MM] name: text`, with placeholders for anything missing.
fn render_line(message: &Message) -> String {
    let time = message
        .timestamp()
        .and_then(|ts| Local.timestamp_millis_opt(ts).single())
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "...".to_string());
    format!(
        "[{time}] {}: {}",
        message.username().unwrap_or("?"),
        message.text().unwrap_or("")
    )
}
