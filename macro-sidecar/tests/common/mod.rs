//! Shared fakes and request helpers for the API tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

use macro_sidecar::api::{routes::create_router, state::AppState};
use macro_sidecar::config::Config;
use macro_sidecar::desktop::{InputBackend, InputProbe, KeyCode, MouseButton};
use macro_sidecar::replay::BackendFactory;

/// Backend that writes each primitive event as a short string
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

impl InputBackend for FakeBackend {
    fn move_mouse(&mut self, x: i32, y: i32) -> anyhow::Result<()> {
        self.push(format!("move {},{}", x, y))
    }
    fn mouse_down(&mut self, button: MouseButton) -> anyhow::Result<()> {
        self.push(format!("down {}", button))
    }
    fn mouse_up(&mut self, button: MouseButton) -> anyhow::Result<()> {
        self.push(format!("up {}", button))
    }
    fn scroll(&mut self, delta: i32) -> anyhow::Result<()> {
        self.push(format!("scroll {}", delta))
    }
    fn key_down(&mut self, key: KeyCode) -> anyhow::Result<()> {
        self.push(format!("key_down {}", key))
    }
    fn key_up(&mut self, key: KeyCode) -> anyhow::Result<()> {
        self.push(format!("key_up {}", key))
    }
}

/// Held keys and pointer position the test controls
#[derive(Clone, Default)]
pub struct FakeProbe {
    pub keys: Arc<Mutex<Vec<KeyCode>>>,
    pub pointer: Arc<Mutex<(i32, i32)>>,
}

impl FakeProbe {
    pub fn hold(&self, key: KeyCode) {
        self.keys.lock().unwrap().push(key);
    }

    pub fn release_all(&self) {
        self.keys.lock().unwrap().clear();
    }

    pub fn move_to(&self, x: i32, y: i32) {
        *self.pointer.lock().unwrap() = (x, y);
    }
}

impl InputProbe for FakeProbe {
    fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.lock().unwrap().contains(&key)
    }

    fn pressed_keys(&self) -> Vec<KeyCode> {
        self.keys.lock().unwrap().clone()
    }

    fn pointer_position(&self) -> (i32, i32) {
        *self.pointer.lock().unwrap()
    }
}

pub struct TestApp {
    pub router: Router,
    pub backend: FakeBackend,
    pub probe: FakeProbe,
}

/// Router wired to fakes, with every playback delay set to zero
pub fn test_app() -> TestApp {
    let backend = FakeBackend::default();
    let probe = FakeProbe::default();

    let config = Config {
        default_delay_ms: 0,
        start_delay_ms: 0,
        drag_settle_ms: 0,
        capture_poll_ms: 5,
        ..Config::default()
    };

    let factory_backend = backend.clone();
    let factory: BackendFactory =
        Arc::new(move || Ok(Box::new(factory_backend.clone()) as Box<dyn InputBackend>));

    let state = AppState::new(config, factory, Arc::new(probe.clone()));

    TestApp {
        router: create_router(state),
        backend,
        probe,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.map(|b| b.to_string()).unwrap_or_default()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn logs(&self) -> Vec<String> {
        let (_, body) = self.get("/logs").await;
        serde_json::from_value(body["lines"].clone()).unwrap()
    }

    /// Poll the playback status until it reaches `expected`
    pub async fn wait_for_status(&self, expected: &str) -> Value {
        for _ in 0..200 {
            let (status, body) = self.get("/playback/status").await;
            if status == StatusCode::OK && body["status"] == expected {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        panic!("playback never reached status {}", expected);
    }

    /// Poll the activity log until it contains `line`
    pub async fn wait_for_log(&self, line: &str) -> Vec<String> {
        for _ in 0..200 {
            let logs = self.logs().await;
            if logs.iter().any(|l| l == line) {
                return logs;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        panic!("log line {:?} never appeared", line);
    }
}
