//! Playback and capture through the HTTP API, against fake input devices.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;

use common::test_app;
use macro_sidecar::desktop::KeyCode;

#[tokio::test]
async fn test_playback_runs_every_loop() {
    let app = test_app();
    app.post(
        "/actions/mouse",
        json!({ "button": "left", "x": 7, "y": 8, "duration_ms": 0 }),
    )
    .await;
    app.post(
        "/actions/key",
        json!({ "keys": ["control", "v"], "duration_ms": 0 }),
    )
    .await;

    let (status, body) = app.post("/playback/start", json!({ "loops": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    let session_id = body["session_id"].clone();

    let logs = app.wait_for_log("--- Macro Finished ---").await;
    let finished = app.wait_for_status("completed").await;
    assert_eq!(finished["id"], session_id);
    assert_eq!(finished["current_loop"], 2);
    assert_eq!(finished["total_actions"], 2);

    let one_loop = [
        "move 7,8",
        "down Left",
        "up Left",
        "key_down CTRL",
        "key_down V",
        "key_up V",
        "key_up CTRL",
    ];
    let expected: Vec<String> = one_loop
        .iter()
        .chain(one_loop.iter())
        .map(|s| s.to_string())
        .collect();
    assert_eq!(app.backend.events(), expected);

    let start = logs
        .iter()
        .position(|l| l == "--- Starting Macro (2 Loops) ---")
        .unwrap();
    assert_eq!(logs[start + 1], "Press PAUSE to Emergency Stop");
    assert_eq!(logs[start + 2], "Loop 1/2");
    assert_eq!(logs[start + 3], "  Executed: Click Left at (7, 8) for 0ms");
    assert!(logs.contains(&"Loop 2/2".to_string()));
}

#[tokio::test]
async fn test_playback_rejects_bad_requests() {
    let app = test_app();

    let (status, body) = app.post("/playback/start", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "The macro has no actions");

    app.post("/actions/key", json!({ "keys": ["a"], "duration_ms": 0 }))
        .await;

    let (status, _) = app.post("/playback/start", json!({ "loops": 0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/playback/start", json!({ "loops": 1, "delay_ms": -5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/playback/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stop_cancels_running_playback() {
    let app = test_app();
    app.post("/actions/key", json!({ "keys": ["a"], "duration_ms": 0 }))
        .await;

    let (status, _) = app
        .post("/playback/start", json!({ "loops": 50, "delay_ms": 100 }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.post("/playback/start", json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app.post("/playback/stop", json!({})).await;
    assert_eq!(body["status"], "stopping");

    let session = app.wait_for_status("cancelled").await;
    assert_eq!(session["error"], "Stopped by user");
    app.wait_for_log("Error: Stopped by user").await;

    let (_, body) = app.post("/playback/stop", json!({})).await;
    assert_eq!(body["status"], "idle");

    // The next run is accepted once the previous one has ended
    let (status, _) = app
        .post("/playback/start", json!({ "loops": 1, "delay_ms": 0 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    app.wait_for_status("completed").await;
}

#[tokio::test]
async fn test_emergency_key_aborts_before_input() {
    let app = test_app();
    app.post("/actions/mouse", json!({ "x": 1, "y": 1, "duration_ms": 0 }))
        .await;
    app.probe.hold(KeyCode::Pause);

    app.post("/playback/start", json!({ "loops": 3 })).await;

    let session = app.wait_for_status("cancelled").await;
    assert_eq!(session["error"], "Emergency Stop Triggered!");
    assert!(app.backend.events().is_empty());
    app.wait_for_log("Error: Emergency Stop Triggered!").await;
}

#[tokio::test]
async fn test_key_capture_collects_pressed_keys() {
    let app = test_app();

    let (status, body) = app.post("/capture/keys", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["capture"]["display"], "Click to set keys...");
    let id = body["session_id"].as_str().unwrap().to_string();

    app.probe.hold(KeyCode::Control);
    app.probe.hold(KeyCode::S);
    tokio::time::sleep(Duration::from_millis(60)).await;

    let (_, body) = app.get(&format!("/capture/{}", id)).await;
    assert_eq!(body["capture"]["display"], "CTRL + S");

    app.probe.release_all();
    let (_, body) = app.post(&format!("/capture/{}/clear", id), json!({})).await;
    assert_eq!(body["status"], "cleared");

    app.probe.hold(KeyCode::F5);
    tokio::time::sleep(Duration::from_millis(60)).await;

    let (status, body) = app.post(&format!("/capture/{}/stop", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["capture"]["kind"], "keys");
    assert_eq!(body["capture"]["draft"]["keys"], json!(["f5"]));

    let (status, _) = app.get(&format!("/capture/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pointer_capture_marks_drag_points() {
    let app = test_app();

    let (_, body) = app.post("/capture/pointer", json!({})).await;
    let id = body["session_id"].as_str().unwrap().to_string();

    app.probe.move_to(100, 200);
    app.probe.hold(KeyCode::Control);
    tokio::time::sleep(Duration::from_millis(60)).await;

    app.probe.release_all();
    app.probe.move_to(300, 400);
    app.probe.hold(KeyCode::Shift);
    tokio::time::sleep(Duration::from_millis(60)).await;

    let (_, body) = app.post(&format!("/capture/{}/stop", id), json!({})).await;
    let draft = &body["capture"]["draft"];
    assert_eq!(body["capture"]["kind"], "pointer");
    assert_eq!(draft["x"], 100);
    assert_eq!(draft["y"], 200);
    assert_eq!(draft["end_x"], 300);
    assert_eq!(draft["end_y"], 400);
    assert_eq!(draft["drag"], true);

    // The captured form is what the editor accepts
    let (status, added) = app.post("/actions/mouse", draft.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(added["action"]["type"], "mouse_drag");
}

#[tokio::test]
async fn test_new_capture_replaces_unfinished_one() {
    let app = test_app();

    let (_, body) = app.post("/capture/keys", json!({})).await;
    let first = body["session_id"].as_str().unwrap().to_string();
    let (_, body) = app.post("/capture/pointer", json!({})).await;
    let second = body["session_id"].as_str().unwrap().to_string();

    let (status, _) = app.get(&format!("/capture/{}", first)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get(&format!("/capture/{}", second)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["capture"]["kind"], "pointer");
}

#[tokio::test]
async fn test_health_reports_listener() {
    let app = test_app();
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    tokio_test::assert_ok!(chrono::DateTime::parse_from_rfc3339(
        body["timestamp"].as_str().unwrap()
    ));
    assert_eq!(body["input_listener"], true);
    assert_eq!(body["websocket_clients"], 0);
}
