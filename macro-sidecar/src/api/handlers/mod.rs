pub mod actions;
pub mod capture;
pub mod health;
pub mod logs;
pub mod playback;
