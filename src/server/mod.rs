//! Development server with live reload
//!
//! Serves the public directory and pushes a `reload` message over
//! `/__livereload` whenever the document or config changes and the output
//! has been regenerated.

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};
use tower_http::services::ServeDir;

use crate::ArtistPage;

const LIVERELOAD_PATH: &str = "/__livereload";
const RELOAD_MESSAGE: &str = "reload";

const NO_ARGS: &[&str] = &[];
// The empty argument is the window title `start` expects first
const WINDOWS_START: &[&str] = &["/c", "start", ""];

/// Server state
struct ServerState {
    reload_tx: broadcast::Sender<()>,
}

/// Start the development server
pub async fn start(site: &ArtistPage, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        reload_tx: reload_tx.clone(),
    });

    let app = Router::new()
        .route(LIVERELOAD_PATH, get(livereload_handler))
        .fallback_service(ServeDir::new(&site.public_dir))
        .with_state(state);

    // "localhost" does not parse as a socket address
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload on ws://{}:{}{}", ip, port, LIVERELOAD_PATH);
    }
    println!("Press Ctrl+C to stop.");

    if open {
        let model_url = format!("{}/{}", url, crate::generator::MODEL_FILE);
        if let Err(e) = open_in_browser(&model_url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let site = site.clone();
        tokio::spawn(async move {
            let regenerate = move |site: &ArtistPage| -> Result<()> {
                site.generate()?;
                tracing::info!("Regenerated successfully");
                // Errs only when no client is connected
                let _ = reload_tx.send(());
                Ok(())
            };
            if let Err(e) = crate::watcher::watch(&site, regenerate).await {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reloads = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| push_reloads(socket, reloads))
}

/// What one wake-up of the live-reload connection calls for
#[derive(Debug, PartialEq, Eq)]
enum Push {
    Reload,
    Idle,
    Stop,
}

/// Lagging behind the broadcast still means the output changed
fn push_for_broadcast(received: Result<(), RecvError>) -> Push {
    match received {
        Ok(()) | Err(RecvError::Lagged(_)) => Push::Reload,
        Err(RecvError::Closed) => Push::Stop,
    }
}

/// Clients only ever close; pings are answered by the socket itself
fn push_for_client<E>(incoming: Option<Result<Message, E>>) -> Push {
    match incoming {
        Some(Ok(Message::Close(_))) | Some(Err(_)) | None => Push::Stop,
        Some(Ok(_)) => Push::Idle,
    }
}

async fn push_reloads(mut socket: WebSocket, mut reloads: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        let push = tokio::select! {
            received = reloads.recv() => push_for_broadcast(received),
            incoming = socket.recv() => push_for_client(incoming),
        };

        match push {
            Push::Reload => {
                let message = Message::Text(RELOAD_MESSAGE.to_string());
                if socket.send(message).await.is_err() {
                    break;
                }
            }
            Push::Idle => {}
            Push::Stop => break,
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Program and leading arguments that hand a URL to the desktop
fn browser_opener() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Some(("open", NO_ARGS))
    } else if cfg!(target_os = "windows") {
        Some(("cmd", WINDOWS_START))
    } else if cfg!(unix) {
        Some(("xdg-open", NO_ARGS))
    } else {
        None
    }
}

fn open_in_browser(url: &str) -> Result<()> {
    let Some((program, args)) = browser_opener() else {
        anyhow::bail!("no known way to open a browser on this platform");
    };
    std::process::Command::new(program)
        .args(args)
        .arg(url)
        .spawn()?;
    Ok(())
}
