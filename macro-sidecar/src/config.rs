use std::env;
use std::str::FromStr;

use crate::desktop::KeyCode;

/// Sidecar configuration, read from `MACRO_*` environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    /// Loops used when a playback request omits them
    pub default_loops: u32,
    /// Pause after every action when a playback request omits it
    pub default_delay_ms: u64,
    /// Grace period before the first action so the user can let go of the mouse
    pub start_delay_ms: u64,
    /// Wait between pressing at the drag start and moving to the end
    pub drag_settle_ms: u64,
    pub capture_poll_ms: u64,
    /// Holding this key aborts playback
    pub stop_key: KeyCode,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_or("MACRO_PORT", defaults.port),
            host: env::var("MACRO_HOST").unwrap_or(defaults.host),
            default_loops: env_or("MACRO_DEFAULT_LOOPS", defaults.default_loops),
            default_delay_ms: env_or("MACRO_DEFAULT_DELAY_MS", defaults.default_delay_ms),
            start_delay_ms: env_or("MACRO_START_DELAY_MS", defaults.start_delay_ms),
            drag_settle_ms: env_or("MACRO_DRAG_SETTLE_MS", defaults.drag_settle_ms),
            capture_poll_ms: env_or("MACRO_CAPTURE_POLL_MS", defaults.capture_poll_ms),
            stop_key: env_or("MACRO_STOP_KEY", defaults.stop_key),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8766,
            host: "127.0.0.1".to_string(),
            default_loops: 1,
            default_delay_ms: 300,
            start_delay_ms: 1000,
            drag_settle_ms: 100,
            capture_poll_ms: 50,
            stop_key: KeyCode::Pause,
        }
    }
}

fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using {:?}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_loops, 1);
        assert_eq!(config.default_delay_ms, 300);
        assert_eq!(config.stop_key, KeyCode::Pause);
        assert_eq!(config.addr(), "127.0.0.1:8766");
    }

    #[test]
    fn test_env_parsing_falls_back() {
        env::set_var("MACRO_TEST_LOOPS_OK", "7");
        env::set_var("MACRO_TEST_LOOPS_BAD", "seven");
        env::set_var("MACRO_TEST_KEY", "esc");

        assert_eq!(env_or("MACRO_TEST_LOOPS_OK", 1u32), 7);
        assert_eq!(env_or("MACRO_TEST_LOOPS_BAD", 1u32), 1);
        assert_eq!(env_or("MACRO_TEST_MISSING", 42u64), 42);
        assert_eq!(env_or("MACRO_TEST_KEY", KeyCode::Pause), KeyCode::Escape);
    }
}
