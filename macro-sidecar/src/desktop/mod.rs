//! Desktop input module
//!
//! OS-level input for macro playback and capture.
//!
//! ## Architecture
//!
//! - `InputBackend` / `InputController` - injects mouse and keyboard events (enigo)
//! - `InputProbe` / `InputMonitor` - reports held keys and the pointer (rdev)
//! - `KeyCode` / `MouseButton` - the key vocabulary both sides share
//!
//! ## Example
//!
//! ```rust,ignore
//! use macro_sidecar::desktop::{input, InputController, KeyCode};
//!
//! let mut controller = InputController::new()?;
//! input::shortcut(&mut controller, &[KeyCode::Control, KeyCode::S], 100)?;
//! ```

pub mod input;
pub mod keys;
pub mod monitor;

// Re-export main types
pub use input::{InputBackend, InputController};
pub use keys::{KeyCode, MouseButton, UnknownKey};
pub use monitor::{InputMonitor, InputProbe};
