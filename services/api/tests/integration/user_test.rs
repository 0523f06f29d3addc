use axum::http::StatusCode;
use serde_json::{Value, json};

use holocron_api::domain::repository::UserRepository;
use holocron_api::domain::types::NewUser;
use holocron_api::error::ApiError;
use holocron_api::state::AppState;

use crate::helpers::{
    migrated_db, seed_character, seed_planet, seed_user, test_server, user_header, user_value,
};

#[tokio::test]
async fn should_create_user_without_exposing_password() {
    let server = test_server().await;

    let response = server
        .post("/users")
        .json(&json!({
            "username": "obiwan",
            "email": "ben@kenobi.org",
            "password": "hello-there",
            "first_name": "Obi-Wan",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["username"], "obiwan");
    assert_eq!(body["first_name"], "Obi-Wan");
    assert_eq!(body["last_name"], Value::Null);
    assert!(body.get("password").is_none());
    assert!(body.get("is_active").is_none());
}

#[tokio::test]
async fn should_check_required_user_fields_in_order() {
    let server = test_server().await;

    let response = server
        .post("/users")
        .json(&json!({ "first_name": "Padme" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required field: username");

    let response = server
        .post("/users")
        .json(&json!({ "username": "padme", "email": "padme@naboo.gov" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required field: password");
}

#[tokio::test]
async fn should_reject_taken_username_and_email() {
    let server = test_server().await;
    seed_user(&server, "vader").await;

    let response = server
        .post("/users")
        .json(&json!({
            "username": "vader",
            "email": "anakin@tatooine.org",
            "password": "pw",
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Username already exists");

    let response = server
        .post("/users")
        .json(&json!({
            "username": "anakin",
            "email": "vader@rebellion.org",
            "password": "pw",
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn should_list_and_update_users() {
    let server = test_server().await;
    let luke = seed_user(&server, "luke").await;
    seed_user(&server, "leia").await;

    let response = server
        .put(&format!("/users/{luke}"))
        .json(&json!({ "last_name": "Skywalker", "email": null }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["last_name"], "Skywalker");
    assert_eq!(body["email"], "luke@rebellion.org");

    let users: Value = server.get("/users").await.json();
    let usernames: Vec<&str> = users
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, vec!["luke", "leia"]);
}

#[tokio::test]
async fn should_reject_update_to_another_users_username() {
    let server = test_server().await;
    let luke = seed_user(&server, "luke").await;
    seed_user(&server, "leia").await;

    let response = server
        .put(&format!("/users/{luke}"))
        .json(&json!({ "username": "leia" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_delete_user_with_favorites() {
    let server = test_server().await;
    let luke = seed_user(&server, "luke").await;
    let planet = seed_planet(&server, "Dagobah").await;
    let character = seed_character(&server, "Yoda").await;
    server
        .post(&format!("/favorite/planet/{planet}"))
        .add_header(user_header(), user_value(luke))
        .await
        .assert_status(StatusCode::CREATED);
    server
        .post(&format!("/favorite/people/{character}"))
        .add_header(user_header(), user_value(luke))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete(&format!("/users/{luke}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "User deleted");
    server
        .get(&format!("/users/{luke}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    // The planet and character themselves survive.
    server
        .get(&format!("/planets/{planet}"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/people/{character}"))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn should_map_unique_index_violation_to_already_exists() {
    let state = AppState {
        db: migrated_db().await,
    };
    let users = state.user_repo();
    let new_user = |email: &str| NewUser {
        username: "rey".into(),
        email: email.into(),
        password: "pw".into(),
        first_name: None,
        last_name: None,
        is_active: true,
    };

    users.create(&new_user("rey@jakku.org")).await.unwrap();
    let second = users.create(&new_user("scavenger@jakku.org")).await;

    assert!(matches!(second, Err(ApiError::AlreadyExists("User"))));
    assert_eq!(users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_return_404_json_for_non_integer_user_id() {
    let server = test_server().await;

    let response = server.delete("/users/vader").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}
