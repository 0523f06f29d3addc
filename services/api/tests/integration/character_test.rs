use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{seed_character, seed_user, test_server};

#[tokio::test]
async fn should_create_and_fetch_character() {
    let server = test_server().await;

    let response = server
        .post("/people")
        .json(&json!({ "name": "Luke Skywalker", "height": "172", "eye_color": "blue" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["name"], "Luke Skywalker");
    assert_eq!(created["mass"], Value::Null);

    let id = created["id"].as_i64().unwrap();
    let fetched: Value = server.get(&format!("/people/{id}")).await.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_require_name_when_creating_character() {
    let server = test_server().await;

    let response = server
        .post("/people")
        .json(&json!({ "name": null, "mass": "77" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required field: name");
}

#[tokio::test]
async fn should_reject_wrong_field_type() {
    let server = test_server().await;

    let response = server.post("/people").json(&json!({ "name": 42 })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_keep_name_when_update_sends_null_name() {
    let server = test_server().await;
    let id = seed_character(&server, "Leia Organa").await;

    let response = server
        .put(&format!("/people/{id}"))
        .json(&json!({ "name": null, "hair_color": "brown" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Leia Organa");
    assert_eq!(body["hair_color"], "brown");
}

#[tokio::test]
async fn should_return_404_for_unknown_character() {
    let server = test_server().await;

    let response = server.get("/people/3").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Character not found");

    server
        .delete("/people/3")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_delete_character_and_its_favorites() {
    let server = test_server().await;
    seed_user(&server, "han").await;
    let id = seed_character(&server, "Chewbacca").await;
    server
        .post(&format!("/favorite/people/{id}"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete(&format!("/people/{id}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Character deleted");
    let favorites: Value = server.get("/users/favorites").await.json();
    assert_eq!(favorites["people"], json!([]));
    let people: Value = server.get("/people").await.json();
    assert_eq!(people, json!([]));
}
