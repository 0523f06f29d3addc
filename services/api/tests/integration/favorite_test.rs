use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};

use holocron_api::domain::repository::FavoriteRepository;
use holocron_api::domain::types::{FavoriteTarget, Resource};
use holocron_api::error::ApiError;
use holocron_api::router::build_router;
use holocron_api::state::AppState;

use crate::helpers::{
    migrated_db, seed_character, seed_planet, seed_user, test_server, user_header, user_value,
};

#[tokio::test]
async fn should_report_no_users_on_empty_store() {
    let server = test_server().await;

    let response = server.get("/users/favorites").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "No users in the database");

    let planet = seed_planet(&server, "Kamino").await;
    server
        .post(&format!("/favorite/planet/{planet}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_list_favorite_planets_and_people() {
    let server = test_server().await;
    seed_user(&server, "luke").await;
    let planet = seed_planet(&server, "Tatooine").await;
    let character = seed_character(&server, "R2-D2").await;

    let response = server.post(&format!("/favorite/planet/{planet}")).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Planet added to favorites");

    let response = server.post(&format!("/favorite/people/{character}")).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Character added to favorites");

    let response = server.get("/users/favorites").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["planets"].as_array().unwrap().len(), 1);
    assert_eq!(body["planets"][0]["name"], "Tatooine");
    assert_eq!(body["people"].as_array().unwrap().len(), 1);
    assert_eq!(body["people"][0]["name"], "R2-D2");
}

#[tokio::test]
async fn should_reject_duplicate_favorite_and_keep_one_row() {
    let server = test_server().await;
    seed_user(&server, "luke").await;
    let planet = seed_planet(&server, "Yavin IV").await;

    server
        .post(&format!("/favorite/planet/{planet}"))
        .await
        .assert_status(StatusCode::CREATED);
    let response = server.post(&format!("/favorite/planet/{planet}")).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Planet is already a favorite");
    assert_eq!(body["kind"], "DUPLICATE_FAVORITE");

    let favorites: Value = server.get("/users/favorites").await.json();
    assert_eq!(favorites["planets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_return_404_when_target_is_missing() {
    let server = test_server().await;
    seed_user(&server, "luke").await;

    let response = server.post("/favorite/people/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Character not found");
}

#[tokio::test]
async fn should_report_missing_favorite_on_remove() {
    let server = test_server().await;
    seed_user(&server, "luke").await;
    let planet = seed_planet(&server, "Mustafar").await;

    let response = server.delete(&format!("/favorite/planet/{planet}")).await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Planet is not in favorites");
}

#[tokio::test]
async fn should_remove_favorite() {
    let server = test_server().await;
    seed_user(&server, "luke").await;
    let character = seed_character(&server, "Ben Kenobi").await;
    server
        .post(&format!("/favorite/people/{character}"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete(&format!("/favorite/people/{character}")).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Character removed from favorites");
    let favorites: Value = server.get("/users/favorites").await.json();
    assert_eq!(favorites["people"], json!([]));
}

#[tokio::test]
async fn should_act_for_user_named_in_header() {
    let server = test_server().await;
    let luke = seed_user(&server, "luke").await;
    let leia = seed_user(&server, "leia").await;
    let planet = seed_planet(&server, "Alderaan").await;

    server
        .post(&format!("/favorite/planet/{planet}"))
        .add_header(user_header(), user_value(leia))
        .await
        .assert_status(StatusCode::CREATED);

    let leias: Value = server
        .get("/users/favorites")
        .add_header(user_header(), user_value(leia))
        .await
        .json();
    assert_eq!(leias["planets"][0]["name"], "Alderaan");

    let lukes: Value = server
        .get("/users/favorites")
        .add_header(user_header(), user_value(luke))
        .await
        .json();
    assert_eq!(lukes["planets"], json!([]));

    // Without the header the lowest id user is used.
    let default: Value = server.get("/users/favorites").await.json();
    assert_eq!(default["planets"], json!([]));
}

#[tokio::test]
async fn should_reject_unknown_or_invalid_identity() {
    let server = test_server().await;
    seed_user(&server, "luke").await;

    let response = server
        .get("/users/favorites")
        .add_header(user_header(), user_value(404))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");

    let response = server
        .get("/users/favorites")
        .add_header(user_header(), HeaderValue::from_static("luke"))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_IDENTITY");
}

#[tokio::test]
async fn should_map_unique_index_violation_to_duplicate_favorite() {
    let state = AppState {
        db: migrated_db().await,
    };
    let server = TestServer::new(build_router(state.clone())).unwrap();
    let user = seed_user(&server, "luke").await;
    let planet = seed_planet(&server, "Crait").await;
    let favorites = state.favorite_repo();

    favorites
        .add(user, FavoriteTarget::Planet(planet))
        .await
        .unwrap();
    let second = favorites.add(user, FavoriteTarget::Planet(planet)).await;

    assert!(matches!(
        second,
        Err(ApiError::DuplicateFavorite(Resource::Planet))
    ));
    let listed = favorites.list_for_user(user).await.unwrap();
    assert_eq!(listed.planets.len(), 1);
}

#[tokio::test]
async fn should_return_404_json_for_non_integer_target_id() {
    let server = test_server().await;
    seed_user(&server, "luke").await;

    let response = server.post("/favorite/people/r2d2").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Character not found");
}
