//! Global key state and pointer position
//!
//! The player polls it for the emergency-stop key and the capture
//! helpers poll it for held keys and the pointer position.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use super::keys::KeyCode;

/// Read-only view of what the user is currently holding
pub trait InputProbe: Send + Sync {
    /// Whether `key` is held right now
    fn is_pressed(&self, key: KeyCode) -> bool;

    /// Currently held keys, oldest press first
    fn pressed_keys(&self) -> Vec<KeyCode>;

    /// Last known pointer position in screen coordinates
    fn pointer_position(&self) -> (i32, i32);

    /// Whether input is being received at all
    fn is_active(&self) -> bool {
        true
    }
}

/// Raw listener keys are kept so that releasing one side of a modifier does
/// not drop the key while the other side is still held.
#[derive(Default)]
struct MonitorState {
    pressed: Mutex<Vec<rdev::Key>>,
    pointer_x: AtomicI32,
    pointer_y: AtomicI32,
    listening: AtomicBool,
}

impl MonitorState {
    fn raw(&self) -> std::sync::MutexGuard<'_, Vec<rdev::Key>> {
        self.pressed.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Held keys in press order, left/right variants merged
    fn pressed(&self) -> Vec<KeyCode> {
        let mut keys = Vec::new();
        for code in self.raw().iter().filter_map(|k| KeyCode::from_rdev(*k)) {
            if !keys.contains(&code) {
                keys.push(code);
            }
        }
        keys
    }

    fn handle(&self, event: rdev::EventType) {
        match event {
            rdev::EventType::KeyPress(key) => {
                let mut raw = self.raw();
                if !raw.contains(&key) {
                    raw.push(key);
                }
            }
            rdev::EventType::KeyRelease(key) => {
                self.raw().retain(|k| *k != key);
            }
            rdev::EventType::MouseMove { x, y } => {
                self.pointer_x.store(x as i32, Ordering::Relaxed);
                self.pointer_y.store(y as i32, Ordering::Relaxed);
            }
            _ => {}
        }
    }
}

/// Tracks held keys and the pointer through a global rdev listener
#[derive(Clone)]
pub struct InputMonitor {
    state: Arc<MonitorState>,
}

impl InputMonitor {
    /// Spawn the listener thread and return a handle to its state.
    ///
    /// A listener failure (e.g. missing accessibility permission) is logged;
    /// the monitor then reports no held keys.
    pub fn start() -> Self {
        let monitor = Self {
            state: Arc::new(MonitorState::default()),
        };

        let state = Arc::clone(&monitor.state);
        let spawned = thread::Builder::new()
            .name("input-monitor".to_string())
            .spawn(move || {
                state.listening.store(true, Ordering::SeqCst);
                tracing::info!("Global input listener started");

                let callback_state = Arc::clone(&state);
                if let Err(e) = rdev::listen(move |event: rdev::Event| {
                    callback_state.handle(event.event_type);
                }) {
                    tracing::error!("Global input listener failed: {:?}", e);
                }

                state.listening.store(false, Ordering::SeqCst);
            });

        if let Err(e) = spawned {
            tracing::error!("Failed to spawn input listener thread: {}", e);
        }

        monitor
    }
}

impl InputProbe for InputMonitor {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.state
            .raw()
            .iter()
            .any(|k| KeyCode::from_rdev(*k) == Some(key))
    }

    fn pressed_keys(&self) -> Vec<KeyCode> {
        self.state.pressed()
    }

    fn pointer_position(&self) -> (i32, i32) {
        (
            self.state.pointer_x.load(Ordering::Relaxed),
            self.state.pointer_y.load(Ordering::Relaxed),
        )
    }

    fn is_active(&self) -> bool {
        self.state.listening.load(Ordering::SeqCst)
    }
}
