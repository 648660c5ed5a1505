pub mod capture;

pub use capture::{Capture, CaptureSession, CaptureSnapshot, KeyCapture, PointerCapture};
