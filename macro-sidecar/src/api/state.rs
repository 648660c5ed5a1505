use dashmap::DashMap;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;
use tokio::sync::{broadcast, RwLock};

use crate::config::Config;
use crate::desktop::InputProbe;
use crate::models::Macro;
use crate::recording::CaptureSession;
use crate::replay::{BackendFactory, MacroPlayer, PlaybackEvent, PlayerTiming};

/// Activity log lines kept for `GET /logs`
const MAX_LOG_LINES: usize = 1000;

/// WebSocket event types broadcast to clients
#[derive(Debug, Clone)]
pub enum WsEvent {
    Log { line: String },
    Playback(PlaybackEvent),
    Pong,
}

/// Connected WebSocket client info
#[derive(Debug)]
pub struct ConnectedClient {
    pub connected_at: Instant,
}

/// Shared application state
pub struct AppState {
    pub config: Config,

    /// The macro being edited; playback works on a snapshot of it
    pub editor: RwLock<Macro>,

    pub player: MacroPlayer,

    /// Held keys and pointer position for capture sessions
    pub probe: Arc<dyn InputProbe>,

    /// Active capture sessions: session_id -> session
    pub captures: DashMap<String, CaptureSession>,

    /// Connected WebSocket clients: client_id -> client info
    pub connected_clients: DashMap<String, ConnectedClient>,

    /// Connections accepted since startup
    connection_count: AtomicUsize,

    activity: Mutex<VecDeque<String>>,

    /// Broadcast channel for WebSocket events
    pub ws_broadcast: broadcast::Sender<WsEvent>,
}

impl AppState {
    /// Build the state and start forwarding playback events into the
    /// activity log. Must be called from within a tokio runtime.
    pub fn new(
        config: Config,
        backend_factory: BackendFactory,
        probe: Arc<dyn InputProbe>,
    ) -> Arc<Self> {
        let (tx, _) = broadcast::channel(1024);
        let player = MacroPlayer::new(backend_factory, Arc::clone(&probe), PlayerTiming::from(&config));
        let playback_rx = player.subscribe();

        let state = Arc::new(Self {
            config,
            editor: RwLock::new(Macro::new()),
            player,
            probe,
            captures: DashMap::new(),
            connected_clients: DashMap::new(),
            connection_count: AtomicUsize::new(0),
            activity: Mutex::new(VecDeque::new()),
            ws_broadcast: tx,
        });

        tokio::spawn(forward_playback_events(Arc::downgrade(&state), playback_rx));

        state.log("Ready to add actions...");
        state
    }

    pub fn broadcast(&self, event: WsEvent) {
        // Ignore send errors (no receivers)
        let _ = self.ws_broadcast.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WsEvent> {
        self.ws_broadcast.subscribe()
    }

    fn activity(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.activity.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Append a line to the activity log and push it to clients
    pub fn log(&self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!("{}", line.trim_start());

        {
            let mut activity = self.activity();
            if activity.len() == MAX_LOG_LINES {
                activity.pop_front();
            }
            activity.push_back(line.clone());
        }

        self.broadcast(WsEvent::Log { line });
    }

    pub fn logs(&self) -> Vec<String> {
        self.activity().iter().cloned().collect()
    }

    pub fn clear_logs(&self) {
        self.activity().clear();
    }

    /// Register a WebSocket client connection
    pub fn client_connected(&self, client_id: &str) {
        self.connected_clients.insert(
            client_id.to_string(),
            ConnectedClient {
                connected_at: Instant::now(),
            },
        );
        let count = self.connection_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(
            "Client {} connected (total: {}, active: {})",
            client_id,
            count,
            self.connected_clients.len()
        );
    }

    /// Unregister a WebSocket client connection
    pub fn client_disconnected(&self, client_id: &str) {
        if let Some((_, client)) = self.connected_clients.remove(client_id) {
            let duration = client.connected_at.elapsed();
            tracing::debug!(
                "Client {} disconnected after {:?} (active: {})",
                client_id,
                duration,
                self.connected_clients.len()
            );
        }
    }

    /// Get the number of active WebSocket connections
    pub fn active_connection_count(&self) -> usize {
        self.connected_clients.len()
    }
}

async fn forward_playback_events(
    state: Weak<AppState>,
    mut rx: broadcast::Receiver<PlaybackEvent>,
) {
    loop {
        let event = match rx.recv().await {
            Ok(event) => event,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Activity log skipped {} playback events", skipped);
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        let Some(state) = state.upgrade() else { break };
        for line in event.log_lines() {
            state.log(line);
        }
        state.broadcast(WsEvent::Playback(event));
    }
}
