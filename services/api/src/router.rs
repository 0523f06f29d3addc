use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use holocron_core::health::healthz;
use holocron_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    character::{
        create_character, delete_character, get_character, list_characters, update_character,
    },
    favorite::{
        add_favorite_character, add_favorite_planet, list_favorites, remove_favorite_character,
        remove_favorite_planet,
    },
    health::readyz,
    planet::{create_planet, delete_planet, get_planet, list_planets, update_planet},
    user::{create_user, delete_user, get_user, list_users, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Characters
        .route("/people", get(list_characters))
        .route("/people", post(create_character))
        .route("/people/{id}", get(get_character))
        .route("/people/{id}", put(update_character))
        .route("/people/{id}", delete(delete_character))
        // Planets
        .route("/planets", get(list_planets))
        .route("/planets", post(create_planet))
        .route("/planets/{id}", get(get_planet))
        .route("/planets/{id}", put(update_planet))
        .route("/planets/{id}", delete(delete_planet))
        // Users
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}", put(update_user))
        .route("/users/{id}", delete(delete_user))
        // Favorites
        .route("/users/favorites", get(list_favorites))
        .route("/favorite/planet/{id}", post(add_favorite_planet))
        .route("/favorite/planet/{id}", delete(remove_favorite_planet))
        .route("/favorite/people/{id}", post(add_favorite_character))
        .route("/favorite/people/{id}", delete(remove_favorite_character))
        .with_state(state)
}

/// The router with request ids, request tracing and trailing-slash trimming.
///
/// Path normalization has to wrap the router from the outside: routing has
/// already happened by the time a `Router::layer` middleware runs.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    let router = build_router(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
