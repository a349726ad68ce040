use std::sync::Arc;

use crate::helpers::{
    assert_is_redirect_to_admin_panel, spawn_app, spawn_app_with, RecordingTransport,
    UnreachableStore,
};

#[tokio::test]
async fn create_group_stores_four_or_five_members() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("four", "a@example.com,b@example.com,c@example.com,d@example.com", 4),
        (
            "five",
            "a@example.com,b@example.com,c@example.com,d@example.com,e@example.com",
            5,
        ),
    ];

    for (name, emails, expected) in test_cases {
        let response = app
            .post_create_group(&[("name", name), ("emails", emails)])
            .await;

        assert_is_redirect_to_admin_panel(&response);
        let stored = app.stored_group(name).await.unwrap();
        assert_eq!(stored.len(), expected, "Group {name} was not stored.");
    }
}

#[tokio::test]
async fn create_group_trims_and_drops_empty_entries() {
    let app = spawn_app().await;

    let response = app
        .post_create_group(&[
            ("name", "club"),
            (
                "emails",
                " a@example.com , ,b@example.com,c@example.com ,, d@example.com",
            ),
        ])
        .await;

    assert_is_redirect_to_admin_panel(&response);
    assert_eq!(
        app.stored_group("club").await.unwrap(),
        vec!["a@example.com", "b@example.com", "c@example.com", "d@example.com"]
    );
}

#[tokio::test]
async fn create_group_stores_entries_without_checking_address_syntax() {
    let app = spawn_app().await;

    let response = app
        .post_create_group(&[("name", "club"), ("emails", "alice, bob, carol, dave")])
        .await;

    assert_is_redirect_to_admin_panel(&response);
    assert_eq!(
        app.stored_group("club").await.unwrap(),
        vec!["alice", "bob", "carol", "dave"]
    );
}

#[tokio::test]
async fn create_group_keys_on_the_name_as_submitted() {
    let app = spawn_app().await;
    let members = ["a@example.com", "b@example.com", "c@example.com", "d@example.com"];

    app.create_group(" club", &members).await;

    assert_eq!(app.stored_group(" club").await.unwrap(), members);
    assert!(app.stored_group("club").await.is_none());
}

#[tokio::test]
async fn create_group_rejects_three_or_six_members_but_still_redirects() {
    let app = spawn_app().await;
    let test_cases = vec![
        ("a@example.com,b@example.com,c@example.com", "three members"),
        (
            "a@example.com,b@example.com,c@example.com,d@example.com,e@example.com,f@example.com",
            "six members",
        ),
    ];

    for (emails, description) in test_cases {
        let response = app
            .post_create_group(&[("name", "club"), ("emails", emails)])
            .await;

        assert_is_redirect_to_admin_panel(&response);
        assert!(
            app.stored_group("club").await.is_none(),
            "A group with {description} was stored."
        );
    }
}

#[tokio::test]
async fn rejected_submission_keeps_the_existing_group() {
    let app = spawn_app().await;
    let original = ["a@example.com", "b@example.com", "c@example.com", "d@example.com"];
    app.create_group("club", &original).await;

    app.post_create_group(&[("name", "club"), ("emails", "x@example.com")])
        .await;

    assert_eq!(app.stored_group("club").await.unwrap(), original);
}

#[tokio::test]
async fn create_group_overwrites_existing_members() {
    let app = spawn_app().await;
    app.create_group(
        "club",
        &["a@example.com", "b@example.com", "c@example.com", "d@example.com"],
    )
    .await;

    let replacement = [
        "e@example.com",
        "f@example.com",
        "g@example.com",
        "h@example.com",
        "i@example.com",
    ];
    app.create_group("club", &replacement).await;

    assert_eq!(app.stored_group("club").await.unwrap(), replacement);
}

#[tokio::test]
async fn create_group_returns_a_422_when_data_is_missing() {
    let app = spawn_app().await;
    let test_cases = vec![
        (vec![("name", "club")], "missing the emails"),
        (vec![("emails", "a@example.com")], "missing the name"),
        (vec![], "missing both name and emails"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_create_group(&invalid_body).await;

        assert_eq!(
            422,
            response.status().as_u16(),
            "The API did not fail with 422 Unprocessable Entity when the payload was {error_message}."
        );
    }
}

#[tokio::test]
async fn create_group_redirects_when_the_store_is_down() {
    let app = spawn_app_with(
        Arc::new(UnreachableStore),
        Arc::new(RecordingTransport::default()),
        None,
    )
    .await;

    let response = app
        .post_create_group(&[
            ("name", "club"),
            (
                "emails",
                "a@example.com,b@example.com,c@example.com,d@example.com",
            ),
        ])
        .await;

    assert_is_redirect_to_admin_panel(&response);
}
