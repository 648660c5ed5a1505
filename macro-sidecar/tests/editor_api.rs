//! Action list editing through the HTTP API.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::test_app;

#[tokio::test]
async fn test_add_and_list_actions() {
    let app = test_app();

    let (status, body) = app
        .post(
            "/actions/mouse",
            json!({ "button": "right", "x": 10, "y": 20, "duration_ms": 150 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["index"], 0);
    assert_eq!(body["action"]["type"], "mouse_click");

    app.post(
        "/actions/mouse",
        json!({ "button": "scroll", "scroll_amount": -240, "drag": true }),
    )
    .await;
    app.post(
        "/actions/key",
        json!({ "keys": ["control", "c"], "duration_ms": 80 }),
    )
    .await;
    app.post("/actions/key", json!({ "keys": ["enter"] })).await;

    let (status, body) = app.get("/actions").await;
    assert_eq!(status, StatusCode::OK);

    let rows = body["actions"].as_array().unwrap();
    let details: Vec<_> = rows.iter().map(|r| r["details"].as_str().unwrap()).collect();
    assert_eq!(
        details,
        vec![
            "Click Right at (10, 20)",
            "Scroll -240",
            "Shortcut CTRL + C",
            "Press ENTER"
        ]
    );

    let types: Vec<_> = rows.iter().map(|r| r["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["MOUSE", "MOUSE", "SHORTCUT", "KEY"]);
    assert_eq!(rows[0]["duration"], "150ms");
    assert_eq!(rows[3]["duration"], "100ms");

    let logs = app.logs().await;
    assert_eq!(logs[0], "Ready to add actions...");
    assert_eq!(logs[1], "Added: Mouse Click Right at (10, 20)");
    assert_eq!(logs[3], "Added: Shortcut CTRL + C for 80ms");
}

#[tokio::test]
async fn test_edit_keeps_identity_and_prefills_form() {
    let app = test_app();
    let (_, added) = app
        .post("/actions/mouse", json!({ "x": 1, "y": 2 }))
        .await;
    let id = added["action"]["id"].clone();

    let (status, edited) = app
        .send(
            "PUT",
            "/actions/0/mouse",
            Some(json!({ "x": 5, "y": 6, "end_x": 50, "end_y": 60, "drag": true, "duration_ms": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["action"]["id"], id);
    assert_eq!(edited["action"]["type"], "mouse_drag");

    let (_, detail) = app.get("/actions/0").await;
    assert_eq!(detail["mouse_draft"]["drag"], true);
    assert_eq!(detail["mouse_draft"]["end_x"], 50);
    assert!(detail.get("key_draft").is_none());

    // A mouse action can be turned into a key action in place
    let (status, edited) = app
        .send("PUT", "/actions/0/key", Some(json!({ "keys": ["f5"] })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(edited["action"]["id"], id);
    assert_eq!(edited["action"]["key"], "f5");
}

#[tokio::test]
async fn test_move_reorders_and_logs() {
    let app = test_app();
    for delta in [1, 2, 3, 4] {
        app.post(
            "/actions/mouse",
            json!({ "button": "scroll", "scroll_amount": delta }),
        )
        .await;
    }

    let (status, body) = app.post("/actions/move", json!({ "from": 0, "to": 2 })).await;
    assert_eq!(status, StatusCode::OK);

    let details: Vec<_> = body["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["details"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(details, vec!["Scroll 2", "Scroll 3", "Scroll 1", "Scroll 4"]);

    let logs = app.logs().await;
    assert_eq!(logs.last().unwrap(), "Moved action from 1 to 3");
}

#[tokio::test]
async fn test_out_of_range_index_is_bad_input() {
    let app = test_app();
    app.post("/actions/key", json!({ "keys": ["a"] })).await;

    let (status, body) = app.send("DELETE", "/actions/3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "Action index 3 out of bounds (macro has 1 actions)"
    );

    let (status, _) = app.post("/actions/move", json!({ "from": 0, "to": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/actions").await;
    assert_eq!(body["actions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_forms_are_rejected() {
    let app = test_app();

    let (status, body) = app.post("/actions/key", json!({ "keys": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "No keys captured.");

    let (status, _) = app
        .post("/actions/mouse", json!({ "x": "not a number" }))
        .await;
    assert!(status.is_client_error());

    let (status, _) = app
        .post("/actions/mouse", json!({ "duration_ms": -1 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/actions").await;
    assert!(body["actions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_and_clear() {
    let app = test_app();
    app.post("/actions/key", json!({ "keys": ["a"] })).await;
    app.post("/actions/key", json!({ "keys": ["b"] })).await;

    let (status, removed) = app.send("DELETE", "/actions/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["key"], "a");
    assert_eq!(app.logs().await.last().unwrap(), "Deleted action 1");

    let (status, _) = app.send("DELETE", "/actions", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/actions").await;
    assert!(body["actions"].as_array().unwrap().is_empty());
    assert_eq!(app.logs().await, vec!["Actions cleared."]);
}

#[tokio::test]
async fn test_import_replaces_macro() {
    let app = test_app();
    app.post("/actions/key", json!({ "keys": ["a"] })).await;

    let (status, _) = app
        .send(
            "PUT",
            "/macro",
            Some(json!({ "actions": [
                { "id": "x", "type": "key_shortcut", "keys": [], "hold_ms": 0 }
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send(
            "PUT",
            "/macro",
            Some(json!({ "actions": [
                { "id": "m1", "type": "mouse_click", "x": 3, "y": 4, "button": "middle", "hold_ms": 20 },
                { "id": "k1", "type": "key_press", "key": "tab", "hold_ms": 10 }
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, exported) = app.get("/macro").await;
    let ids: Vec<_> = exported["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["m1", "k1"]);
}
