//! Macro sidecar
//!
//! Records mouse/keyboard macros through a local HTTP editor API and replays
//! them with OS-level input injection.

pub mod api;
pub mod config;
pub mod desktop;
pub mod error;
pub mod models;
pub mod recording;
pub mod replay;
