use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::config::Config;
use crate::desktop::input::{self, InputBackend, InputController};
use crate::desktop::{InputProbe, KeyCode};
use crate::models::{Action, ActionKind, Macro, PlaybackSession};

/// Creates the input backend on the playback worker thread
pub type BackendFactory = Arc<dyn Fn() -> anyhow::Result<Box<dyn InputBackend>> + Send + Sync>;

/// Factory for the real enigo-backed controller
pub fn enigo_backend() -> BackendFactory {
    Arc::new(|| Ok(Box::new(InputController::new()?) as Box<dyn InputBackend>))
}

pub const EMERGENCY_STOP_MESSAGE: &str = "Emergency Stop Triggered!";
pub const USER_STOP_MESSAGE: &str = "Stopped by user";
pub const LISTENER_DOWN_MESSAGE: &str =
    "Global key listener is not running; the emergency stop key will not be detected";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("A macro is already running")]
    AlreadyRunning,

    #[error("The macro has no actions")]
    EmptyMacro,

    #[error("Loops must be at least 1 (got {0})")]
    InvalidLoops(i64),

    #[error("Delay must not be negative (got {0} ms)")]
    InvalidDelay(i64),
}

/// Per-run settings chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackOptions {
    pub loops: u32,
    pub delay_ms: u64,
}

impl PlaybackOptions {
    /// Validate raw user input
    pub fn new(loops: i64, delay_ms: i64) -> Result<Self, PlaybackError> {
        let loops = u32::try_from(loops)
            .ok()
            .filter(|l| *l >= 1)
            .ok_or(PlaybackError::InvalidLoops(loops))?;
        let delay_ms = u64::try_from(delay_ms).map_err(|_| PlaybackError::InvalidDelay(delay_ms))?;
        Ok(Self { loops, delay_ms })
    }
}

/// Settings fixed for the lifetime of the player
#[derive(Debug, Clone, Copy)]
pub struct PlayerTiming {
    pub start_delay_ms: u64,
    pub drag_settle_ms: u64,
    pub stop_key: KeyCode,
}

impl From<&Config> for PlayerTiming {
    fn from(config: &Config) -> Self {
        Self {
            start_delay_ms: config.start_delay_ms,
            drag_settle_ms: config.drag_settle_ms,
            stop_key: config.stop_key,
        }
    }
}

/// Progress events broadcast while a macro plays
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlaybackEvent {
    Started {
        session_id: String,
        loops: u32,
        stop_key: String,
    },
    LoopStarted {
        session_id: String,
        loop_number: u32,
        loops: u32,
    },
    ActionExecuted {
        session_id: String,
        loop_number: u32,
        index: usize,
        description: String,
        hold_ms: u64,
    },
    Warning {
        session_id: String,
        message: String,
    },
    Completed {
        session_id: String,
    },
    Cancelled {
        session_id: String,
        reason: String,
    },
    Failed {
        session_id: String,
        error: String,
    },
}

impl PlaybackEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PlaybackEvent::Completed { .. }
                | PlaybackEvent::Cancelled { .. }
                | PlaybackEvent::Failed { .. }
        )
    }

    /// Lines for the activity log
    pub fn log_lines(&self) -> Vec<String> {
        match self {
            PlaybackEvent::Started {
                loops, stop_key, ..
            } => vec![
                format!("--- Starting Macro ({} Loops) ---", loops),
                format!("Press {} to Emergency Stop", stop_key),
            ],
            PlaybackEvent::LoopStarted {
                loop_number, loops, ..
            } => vec![format!("Loop {}/{}", loop_number, loops)],
            PlaybackEvent::ActionExecuted {
                description,
                hold_ms,
                ..
            } => vec![format!("  Executed: {} for {}ms", description, hold_ms)],
            PlaybackEvent::Warning { message, .. } => vec![format!("Warning: {}", message)],
            PlaybackEvent::Completed { .. } => vec!["--- Macro Finished ---".to_string()],
            PlaybackEvent::Cancelled { reason, .. } => vec![format!("Error: {}", reason)],
            PlaybackEvent::Failed { error, .. } => vec![format!("Error: {}", error)],
        }
    }
}

/// Why a playback ended early
enum Halt {
    Cancelled(String),
    Failed(String),
}

/// Plays a macro snapshot on a blocking worker, one playback at a time
pub struct MacroPlayer {
    backend_factory: BackendFactory,
    probe: Arc<dyn InputProbe>,
    timing: PlayerTiming,
    session: Arc<Mutex<Option<PlaybackSession>>>,
    stop_requested: Arc<AtomicBool>,
    event_sender: broadcast::Sender<PlaybackEvent>,
}

impl MacroPlayer {
    pub fn new(
        backend_factory: BackendFactory,
        probe: Arc<dyn InputProbe>,
        timing: PlayerTiming,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(256);

        Self {
            backend_factory,
            probe,
            timing,
            session: Arc::new(Mutex::new(None)),
            stop_requested: Arc::new(AtomicBool::new(false)),
            event_sender: event_tx,
        }
    }

    /// Start playing `snapshot`. Must be called from within a tokio runtime.
    pub fn start(
        &self,
        snapshot: Macro,
        options: PlaybackOptions,
    ) -> Result<PlaybackSession, PlaybackError> {
        if snapshot.is_empty() {
            return Err(PlaybackError::EmptyMacro);
        }

        let session = {
            let mut current = lock(&self.session);
            if current.as_ref().is_some_and(|s| !s.status.is_terminal()) {
                return Err(PlaybackError::AlreadyRunning);
            }
            self.stop_requested.store(false, Ordering::SeqCst);

            let mut session =
                PlaybackSession::new(options.loops, snapshot.len(), options.delay_ms);
            session.start();
            *current = Some(session.clone());
            session
        };

        let worker = Worker {
            session_id: session.id.clone(),
            backend_factory: Arc::clone(&self.backend_factory),
            probe: Arc::clone(&self.probe),
            timing: self.timing,
            options,
            session: Arc::clone(&self.session),
            stop_requested: Arc::clone(&self.stop_requested),
            event_sender: self.event_sender.clone(),
        };

        tracing::info!(
            "Starting playback {} ({} actions, {} loops)",
            session.id,
            snapshot.len(),
            options.loops
        );
        worker.emit(PlaybackEvent::Started {
            session_id: session.id.clone(),
            loops: options.loops,
            stop_key: self.timing.stop_key.name(),
        });
        if !self.probe.is_active() {
            tracing::warn!("Playback {}: {}", session.id, LISTENER_DOWN_MESSAGE);
            worker.emit(PlaybackEvent::Warning {
                session_id: session.id.clone(),
                message: LISTENER_DOWN_MESSAGE.to_string(),
            });
        }

        tokio::task::spawn_blocking(move || worker.run(snapshot.actions()));

        Ok(session)
    }

    /// Ask the running playback to stop before its next action
    pub fn stop(&self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.stop_requested.store(true, Ordering::SeqCst);
        tracing::info!("Playback stop requested");
        true
    }

    pub fn is_running(&self) -> bool {
        lock(&self.session)
            .as_ref()
            .is_some_and(|s| !s.status.is_terminal())
    }

    /// Latest session, running or finished
    pub fn session(&self) -> Option<PlaybackSession> {
        lock(&self.session).clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.event_sender.subscribe()
    }
}

fn lock(session: &Mutex<Option<PlaybackSession>>) -> MutexGuard<'_, Option<PlaybackSession>> {
    session.lock().unwrap_or_else(|e| e.into_inner())
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// State moved onto the blocking worker
struct Worker {
    session_id: String,
    backend_factory: BackendFactory,
    probe: Arc<dyn InputProbe>,
    timing: PlayerTiming,
    options: PlaybackOptions,
    session: Arc<Mutex<Option<PlaybackSession>>>,
    stop_requested: Arc<AtomicBool>,
    event_sender: broadcast::Sender<PlaybackEvent>,
}

impl Worker {
    fn emit(&self, event: PlaybackEvent) {
        // Ignore send errors (no receivers)
        let _ = self.event_sender.send(event);
    }

    fn update(&self, f: impl FnOnce(&mut PlaybackSession)) {
        if let Some(session) = lock(&self.session).as_mut() {
            f(session);
        }
    }

    fn run(&self, actions: &[Action]) {
        let session_id = self.session_id.clone();
        let outcome = self.play(actions);

        // The terminal status and its event are published under one lock
        let mut current = lock(&self.session);
        let terminal = match outcome {
            Ok(()) => {
                if let Some(s) = current.as_mut() {
                    s.complete();
                }
                tracing::info!("Playback {} finished", session_id);
                PlaybackEvent::Completed { session_id }
            }
            Err(Halt::Cancelled(reason)) => {
                if let Some(s) = current.as_mut() {
                    s.cancel(reason.clone());
                }
                tracing::warn!("Playback {} cancelled: {}", session_id, reason);
                PlaybackEvent::Cancelled { session_id, reason }
            }
            Err(Halt::Failed(error)) => {
                if let Some(s) = current.as_mut() {
                    s.fail(error.clone());
                }
                tracing::error!("Playback {} failed: {}", session_id, error);
                PlaybackEvent::Failed { session_id, error }
            }
        };
        self.emit(terminal);
    }

    fn check_stop(&self) -> Result<(), Halt> {
        if self.probe.is_pressed(self.timing.stop_key) {
            return Err(Halt::Cancelled(EMERGENCY_STOP_MESSAGE.to_string()));
        }
        if self.stop_requested.load(Ordering::SeqCst) {
            return Err(Halt::Cancelled(USER_STOP_MESSAGE.to_string()));
        }
        Ok(())
    }

    fn play(&self, actions: &[Action]) -> Result<(), Halt> {
        let mut backend = (self.backend_factory)().map_err(|e| Halt::Failed(e.to_string()))?;

        pause(self.timing.start_delay_ms);

        let loops = self.options.loops;
        for loop_number in 1..=loops {
            self.check_stop()?;

            self.update(|s| s.begin_loop(loop_number));
            tracing::debug!("Loop {}/{}", loop_number, loops);
            self.emit(PlaybackEvent::LoopStarted {
                session_id: self.session_id.clone(),
                loop_number,
                loops,
            });

            for (index, action) in actions.iter().enumerate() {
                self.check_stop()?;

                self.execute(backend.as_mut(), action)
                    .map_err(|e| Halt::Failed(e.to_string()))?;

                self.update(|s| s.advance());
                self.emit(PlaybackEvent::ActionExecuted {
                    session_id: self.session_id.clone(),
                    loop_number,
                    index,
                    description: action.describe(),
                    hold_ms: action.hold_ms,
                });

                if action.kind.waits_after() {
                    pause(self.options.delay_ms);
                }
            }
        }

        Ok(())
    }

    fn execute(&self, backend: &mut dyn InputBackend, action: &Action) -> anyhow::Result<()> {
        match &action.kind {
            ActionKind::MouseClick { x, y, button } => {
                input::click_hold(backend, *x, *y, *button, action.hold_ms)
            }
            ActionKind::MouseDrag {
                start_x,
                start_y,
                end_x,
                end_y,
                button,
            } => input::drag(
                backend,
                (*start_x, *start_y),
                (*end_x, *end_y),
                *button,
                self.timing.drag_settle_ms,
                action.hold_ms,
            ),
            ActionKind::MouseScroll { delta } => backend.scroll(*delta),
            ActionKind::KeyPress { key } => input::key_hold(backend, *key, action.hold_ms),
            ActionKind::KeyShortcut { keys } => input::shortcut(backend, keys, action.hold_ms),
        }
    }
}
