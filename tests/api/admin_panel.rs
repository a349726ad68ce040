use std::sync::Arc;

use group_mailer::store::KeyValueStore;

use crate::helpers::{spawn_app, spawn_app_with, RecordingTransport, UnreachableStore};

#[tokio::test]
async fn admin_panel_renders_with_no_groups() {
    let app = spawn_app().await;

    let response = app.get_admin_panel().await;

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.unwrap();
    assert!(html.contains("No groups yet."));
    assert!(html.contains(r#"action="/create_group/""#));
    assert!(html.contains(r#"action="/broadcast/""#));
}

#[tokio::test]
async fn admin_panel_lists_stored_groups_and_members() {
    let app = spawn_app().await;
    app.create_group(
        "book-club",
        &["a@example.com", "b@example.com", "c@example.com", "d@example.com"],
    )
    .await;

    let html = app.get_admin_panel().await.text().await.unwrap();

    assert!(html.contains("book-club"));
    assert!(html.contains("(4 members)"));
    assert!(html.contains("d@example.com"));
    assert!(!html.contains("group:book-club"));
}

#[tokio::test]
async fn admin_panel_escapes_group_names() {
    let app = spawn_app().await;
    app.create_group(
        "<script>",
        &["a@example.com", "b@example.com", "c@example.com", "d@example.com"],
    )
    .await;

    let html = app.get_admin_panel().await.text().await.unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn admin_panel_returns_a_json_error_when_the_store_is_down() {
    let app = spawn_app_with(
        Arc::new(UnreachableStore),
        Arc::new(RecordingTransport::default()),
        None,
    )
    .await;

    let response = app.get_admin_panel().await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Something went wrong!");
}

#[tokio::test]
async fn admin_panel_returns_a_json_error_on_a_corrupt_record() {
    let app = spawn_app().await;
    app.store.set("group:broken", "not json").await.unwrap();

    let response = app.get_admin_panel().await;

    assert_eq!(response.status().as_u16(), 500);
}
