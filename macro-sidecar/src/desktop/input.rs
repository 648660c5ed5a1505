//! Cross-platform mouse and keyboard input using enigo
//!
//! The player only talks to [`InputBackend`]; the compound gestures a macro
//! is made of (click with hold, drag, key hold, shortcut) are built on top of
//! its primitive down/up events so every backend replays them the same way.

use enigo::{Axis, Coordinate, Direction, Enigo, Keyboard, Mouse, Settings};
use std::thread;
use std::time::Duration;

use super::keys::{KeyCode, MouseButton};

/// One wheel notch in platform wheel-delta units
pub const WHEEL_DELTA: i32 = 120;

/// Primitive input events the OS injection facility has to provide
pub trait InputBackend {
    /// Move the pointer to absolute screen coordinates
    fn move_mouse(&mut self, x: i32, y: i32) -> anyhow::Result<()>;

    fn mouse_down(&mut self, button: MouseButton) -> anyhow::Result<()>;

    fn mouse_up(&mut self, button: MouseButton) -> anyhow::Result<()>;

    /// Scroll the vertical wheel. `delta` is in wheel units (±120 per notch),
    /// positive scrolls up.
    fn scroll(&mut self, delta: i32) -> anyhow::Result<()>;

    fn key_down(&mut self, key: KeyCode) -> anyhow::Result<()>;

    fn key_up(&mut self, key: KeyCode) -> anyhow::Result<()>;
}

/// Input controller for mouse and keyboard simulation
pub struct InputController {
    enigo: Enigo,
}

impl InputController {
    /// Create a new input controller
    pub fn new() -> anyhow::Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow::anyhow!("Failed to create input controller: {:?}", e))?;
        Ok(Self { enigo })
    }
}

impl InputBackend for InputController {
    fn move_mouse(&mut self, x: i32, y: i32) -> anyhow::Result<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| anyhow::anyhow!("Failed to move mouse: {:?}", e))
    }

    fn mouse_down(&mut self, button: MouseButton) -> anyhow::Result<()> {
        self.enigo
            .button(button.to_enigo(), Direction::Press)
            .map_err(|e| anyhow::anyhow!("Failed to press mouse button: {:?}", e))
    }

    fn mouse_up(&mut self, button: MouseButton) -> anyhow::Result<()> {
        self.enigo
            .button(button.to_enigo(), Direction::Release)
            .map_err(|e| anyhow::anyhow!("Failed to release mouse button: {:?}", e))
    }

    fn scroll(&mut self, delta: i32) -> anyhow::Result<()> {
        let notches = wheel_notches(delta);
        if notches == 0 {
            return Ok(());
        }
        self.enigo
            .scroll(notches, Axis::Vertical)
            .map_err(|e| anyhow::anyhow!("Failed to scroll: {:?}", e))
    }

    fn key_down(&mut self, key: KeyCode) -> anyhow::Result<()> {
        self.enigo
            .key(enigo_key(key)?, Direction::Press)
            .map_err(|e| anyhow::anyhow!("Failed to press key down: {:?}", e))
    }

    fn key_up(&mut self, key: KeyCode) -> anyhow::Result<()> {
        self.enigo
            .key(enigo_key(key)?, Direction::Release)
            .map_err(|e| anyhow::anyhow!("Failed to release key: {:?}", e))
    }
}

fn enigo_key(key: KeyCode) -> anyhow::Result<enigo::Key> {
    key.to_enigo()
        .ok_or_else(|| anyhow::anyhow!("Key {} is not available on this platform", key))
}

/// Convert a wheel delta to enigo scroll notches.
///
/// enigo scrolls down for positive lengths, so the sign is flipped. A
/// non-zero delta smaller than one notch still scrolls one notch.
pub fn wheel_notches(delta: i32) -> i32 {
    let notches = delta / WHEEL_DELTA;
    let notches = if notches == 0 { delta.signum() } else { notches };
    -notches
}

fn pause(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

// ============ Gestures ============

/// Move to `(x, y)`, press `button`, hold for `hold_ms`, release
pub fn click_hold<B: InputBackend + ?Sized>(
    backend: &mut B,
    x: i32,
    y: i32,
    button: MouseButton,
    hold_ms: u64,
) -> anyhow::Result<()> {
    backend.move_mouse(x, y)?;
    backend.mouse_down(button)?;
    pause(hold_ms);
    backend.mouse_up(button)
}

/// Press at `start`, wait `settle_ms`, move to `end`, hold for `hold_ms`,
/// release
pub fn drag<B: InputBackend + ?Sized>(
    backend: &mut B,
    start: (i32, i32),
    end: (i32, i32),
    button: MouseButton,
    settle_ms: u64,
    hold_ms: u64,
) -> anyhow::Result<()> {
    backend.move_mouse(start.0, start.1)?;
    backend.mouse_down(button)?;
    pause(settle_ms);

    // The button is released even when the move fails
    let moved = backend.move_mouse(end.0, end.1);
    if moved.is_ok() {
        pause(hold_ms);
    }
    let released = backend.mouse_up(button);
    moved.and(released)
}

/// Press `key`, hold for `hold_ms`, release
pub fn key_hold<B: InputBackend + ?Sized>(
    backend: &mut B,
    key: KeyCode,
    hold_ms: u64,
) -> anyhow::Result<()> {
    backend.key_down(key)?;
    pause(hold_ms);
    backend.key_up(key)
}

/// Press every key in order, hold, then release them in reverse order.
///
/// If a press or release fails, every key pressed so far is still released
/// and the first error is returned.
pub fn shortcut<B: InputBackend + ?Sized>(
    backend: &mut B,
    keys: &[KeyCode],
    hold_ms: u64,
) -> anyhow::Result<()> {
    let mut pressed = Vec::with_capacity(keys.len());
    let mut result = Ok(());

    for key in keys {
        if let Err(e) = backend.key_down(*key) {
            result = Err(e);
            break;
        }
        pressed.push(*key);
    }

    if result.is_ok() {
        pause(hold_ms);
    }

    for key in pressed.iter().rev() {
        let released = backend.key_up(*key);
        if result.is_ok() {
            result = released;
        }
    }

    result
}
