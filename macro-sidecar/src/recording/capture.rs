//! Live capture helpers for the action editor
//!
//! A pointer capture follows the cursor while CTRL (start point) or SHIFT
//! (end point) is held; a key capture collects every key the user presses.
//! Both poll an [`InputProbe`] on a fixed interval until stopped.

use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::desktop::{InputProbe, KeyCode};
use crate::models::{KeyActionDraft, MouseActionDraft};

/// Key that copies the pointer into the start point
pub const START_POINT_KEY: KeyCode = KeyCode::Control;
/// Key that copies the pointer into the end point and turns on dragging
pub const END_POINT_KEY: KeyCode = KeyCode::Shift;

/// Fills the coordinates of a mouse form from the live pointer
#[derive(Debug, Clone)]
pub struct PointerCapture {
    draft: MouseActionDraft,
}

impl PointerCapture {
    pub fn new(draft: MouseActionDraft) -> Self {
        Self { draft }
    }

    pub fn poll(&mut self, probe: &dyn InputProbe) {
        if probe.is_pressed(START_POINT_KEY) {
            let (x, y) = probe.pointer_position();
            self.draft.x = x;
            self.draft.y = y;
        }

        if probe.is_pressed(END_POINT_KEY) {
            let (x, y) = probe.pointer_position();
            self.draft.end_x = x;
            self.draft.end_y = y;
            self.draft.drag = true;
        }
    }

    pub fn draft(&self) -> &MouseActionDraft {
        &self.draft
    }
}

/// Collects pressed keys in the order they were first seen
#[derive(Debug, Clone)]
pub struct KeyCapture {
    draft: KeyActionDraft,
}

impl KeyCapture {
    pub fn new(draft: KeyActionDraft) -> Self {
        Self { draft }
    }

    pub fn poll(&mut self, probe: &dyn InputProbe) {
        for key in probe.pressed_keys() {
            if !self.draft.keys.contains(&key) {
                tracing::debug!("Captured key {}", key);
                self.draft.keys.push(key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.draft.keys.clear();
    }

    pub fn draft(&self) -> &KeyActionDraft {
        &self.draft
    }
}

#[derive(Debug, Clone)]
pub enum Capture {
    Pointer(PointerCapture),
    Keys(KeyCapture),
}

impl Capture {
    fn poll(&mut self, probe: &dyn InputProbe) {
        match self {
            Capture::Pointer(c) => c.poll(probe),
            Capture::Keys(c) => c.poll(probe),
        }
    }

    fn snapshot(&self) -> CaptureSnapshot {
        match self {
            Capture::Pointer(c) => CaptureSnapshot::Pointer {
                draft: c.draft().clone(),
            },
            Capture::Keys(c) => CaptureSnapshot::Keys {
                display: c.draft().display(),
                draft: c.draft().clone(),
            },
        }
    }
}

/// What a capture has collected so far
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptureSnapshot {
    Pointer { draft: MouseActionDraft },
    Keys { draft: KeyActionDraft, display: String },
}

/// A capture polling in the background until stopped
pub struct CaptureSession {
    pub id: String,
    capture: Arc<Mutex<Capture>>,
    task: JoinHandle<()>,
}

impl CaptureSession {
    /// Spawn the polling task. Must be called from within a tokio runtime.
    pub fn spawn(capture: Capture, probe: Arc<dyn InputProbe>, poll_interval: Duration) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        let capture = Arc::new(Mutex::new(capture));

        let shared = Arc::clone(&capture);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            loop {
                ticker.tick().await;
                lock(&shared).poll(probe.as_ref());
            }
        });

        tracing::info!("Capture session {} started", id);
        Self { id, capture, task }
    }

    pub fn snapshot(&self) -> CaptureSnapshot {
        lock(&self.capture).snapshot()
    }

    /// Drop keys captured so far; pointer captures are unaffected
    pub fn clear(&self) {
        if let Capture::Keys(keys) = &mut *lock(&self.capture) {
            keys.clear();
        }
    }

    /// Stop polling and return the final state
    pub fn stop(self) -> CaptureSnapshot {
        self.task.abort();
        tracing::info!("Capture session {} stopped", self.id);
        self.snapshot()
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn lock(capture: &Mutex<Capture>) -> MutexGuard<'_, Capture> {
    capture.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::monitor::testing::ScriptedProbe;

    #[test]
    fn test_pointer_follows_start_and_end_keys() {
        let probe = ScriptedProbe::default();
        let mut capture = PointerCapture::new(MouseActionDraft::default());

        probe.move_to(100, 200);
        capture.poll(&probe);
        assert_eq!((capture.draft().x, capture.draft().y), (0, 0));

        probe.hold(KeyCode::Control);
        capture.poll(&probe);
        assert_eq!((capture.draft().x, capture.draft().y), (100, 200));
        assert!(!capture.draft().drag);

        probe.release(KeyCode::Control);
        probe.move_to(400, 500);
        probe.hold(KeyCode::Shift);
        capture.poll(&probe);

        let draft = capture.draft();
        assert_eq!((draft.x, draft.y), (100, 200));
        assert_eq!((draft.end_x, draft.end_y), (400, 500));
        assert!(draft.drag);
    }

    #[test]
    fn test_keys_collected_once_in_order() {
        let probe = ScriptedProbe::default();
        let mut capture = KeyCapture::new(KeyActionDraft::default());

        probe.hold(KeyCode::Control);
        capture.poll(&probe);
        probe.hold(KeyCode::Shift);
        capture.poll(&probe);
        probe.release(KeyCode::Control);
        probe.hold(KeyCode::S);
        capture.poll(&probe);
        probe.hold(KeyCode::Control);
        capture.poll(&probe);

        assert_eq!(
            capture.draft().keys,
            vec![KeyCode::Control, KeyCode::Shift, KeyCode::S]
        );
        assert_eq!(capture.draft().display(), "CTRL + SHIFT + S");

        capture.clear();
        assert!(capture.draft().keys.is_empty());
    }

    #[tokio::test]
    async fn test_session_polls_until_stopped() {
        let probe = ScriptedProbe::default();
        let session = CaptureSession::spawn(
            Capture::Keys(KeyCapture::new(KeyActionDraft::default())),
            Arc::new(probe.clone()),
            Duration::from_millis(5),
        );

        probe.hold(KeyCode::Enter);
        tokio::time::sleep(Duration::from_millis(50)).await;

        match session.stop() {
            CaptureSnapshot::Keys { draft, .. } => assert_eq!(draft.keys, vec![KeyCode::Enter]),
            other => panic!("expected key capture, got {:?}", other),
        }
    }
}
