use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{seed_planet, seed_user, test_server};

#[tokio::test]
async fn should_require_name_when_creating_planet() {
    let server = test_server().await;

    let response = server
        .post("/planets")
        .json(&json!({ "climate": "arid" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required field: name");
    assert_eq!(body["kind"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn should_create_planet_with_null_optional_fields() {
    let server = test_server().await;

    let response = server
        .post("/planets")
        .json(&json!({ "name": "Tatooine", "climate": "arid" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["name"], "Tatooine");
    assert_eq!(body["climate"], "arid");
    assert_eq!(body["population"], Value::Null);
    assert_eq!(body["terrain"], Value::Null);
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn should_reject_empty_body() {
    let server = test_server().await;

    let response = server.post("/planets").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No data provided");

    let response = server.post("/planets").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn should_reject_non_object_body() {
    let server = test_server().await;

    let response = server.post("/planets").json(&json!(["Hoth"])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_list_planets_in_id_order() {
    let server = test_server().await;
    seed_planet(&server, "Alderaan").await;
    seed_planet(&server, "Bespin").await;

    let response = server.get("/planets").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alderaan", "Bespin"]);
}

#[tokio::test]
async fn should_return_404_for_unknown_planet() {
    let server = test_server().await;

    let response = server.get("/planets/42").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Planet not found");
}

#[tokio::test]
async fn should_update_only_supplied_fields() {
    let server = test_server().await;
    let created: Value = server
        .post("/planets")
        .json(&json!({
            "name": "Hoth",
            "climate": "frozen",
            "population": "0",
            "terrain": "tundra",
        }))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .put(&format!("/planets/{id}"))
        .json(&json!({ "population": "5000", "terrain": null }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["name"], "Hoth");
    assert_eq!(body["climate"], "frozen");
    assert_eq!(body["population"], "5000");
    assert_eq!(body["terrain"], Value::Null);

    let fetched: Value = server.get(&format!("/planets/{id}")).await.json();
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn should_check_existence_before_body_on_update() {
    let server = test_server().await;

    let response = server.put("/planets/7").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let id = seed_planet(&server, "Endor").await;
    let response = server.put(&format!("/planets/{id}")).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn should_delete_planet_and_its_favorites() {
    let server = test_server().await;
    seed_user(&server, "luke").await;
    let id = seed_planet(&server, "Alderaan").await;
    server
        .post(&format!("/favorite/planet/{id}"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete(&format!("/planets/{id}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Planet deleted");

    server
        .get(&format!("/planets/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    let favorites: Value = server.get("/users/favorites").await.json();
    assert_eq!(favorites["planets"], json!([]));

    server
        .delete(&format!("/planets/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_404_json_for_unparsable_planet_id() {
    let server = test_server().await;

    for path in ["/planets/abc", "/planets/99999999999"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["kind"], "NOT_FOUND");
        assert_eq!(body["error"], "Planet not found");
    }

    server
        .put("/planets/abc")
        .json(&json!({ "name": "Scarif" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
