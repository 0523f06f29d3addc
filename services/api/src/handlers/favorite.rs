use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::Serialize;

use crate::domain::types::{Character, FavoriteTarget, Planet};
use crate::error::ApiError;
use crate::extract::{CurrentUser, ResourceId};
use crate::handlers::MessageResponse;
use crate::handlers::character::CharacterResponse;
use crate::handlers::planet::PlanetResponse;
use crate::state::AppState;
use crate::usecase::favorite::{
    AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase,
};

// ── GET /users/favorites ─────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FavoritesResponse {
    pub planets: Vec<PlanetResponse>,
    /// Favorite characters, keyed the same way as the `/people` routes.
    pub people: Vec<CharacterResponse>,
}

pub async fn list_favorites(
    CurrentUser(identity): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let usecase = ListFavoritesUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let favorites = usecase.execute(identity).await?;
    Ok(Json(FavoritesResponse {
        planets: favorites
            .planets
            .into_iter()
            .map(PlanetResponse::from)
            .collect(),
        people: favorites
            .characters
            .into_iter()
            .map(CharacterResponse::from)
            .collect(),
    }))
}

// ── POST /favorite/{planet,people}/{id} ──────────────────────────────────────

pub async fn add_favorite_planet(
    identity: CurrentUser,
    State(state): State<AppState>,
    ResourceId(planet_id, _): ResourceId<Planet>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    add_favorite(identity, state, FavoriteTarget::Planet(planet_id)).await
}

pub async fn add_favorite_character(
    identity: CurrentUser,
    State(state): State<AppState>,
    ResourceId(character_id, _): ResourceId<Character>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    add_favorite(identity, state, FavoriteTarget::Character(character_id)).await
}

async fn add_favorite(
    CurrentUser(identity): CurrentUser,
    state: AppState,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let usecase = AddFavoriteUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    usecase.execute(identity, target).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "{} added to favorites",
            target.resource()
        ))),
    ))
}

// ── DELETE /favorite/{planet,people}/{id} ────────────────────────────────────

pub async fn remove_favorite_planet(
    identity: CurrentUser,
    State(state): State<AppState>,
    ResourceId(planet_id, _): ResourceId<Planet>,
) -> Result<Json<MessageResponse>, ApiError> {
    remove_favorite(identity, state, FavoriteTarget::Planet(planet_id)).await
}

pub async fn remove_favorite_character(
    identity: CurrentUser,
    State(state): State<AppState>,
    ResourceId(character_id, _): ResourceId<Character>,
) -> Result<Json<MessageResponse>, ApiError> {
    remove_favorite(identity, state, FavoriteTarget::Character(character_id)).await
}

async fn remove_favorite(
    CurrentUser(identity): CurrentUser,
    state: AppState,
    target: FavoriteTarget,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = RemoveFavoriteUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    usecase.execute(identity, target).await?;
    Ok(Json(MessageResponse::new(format!(
        "{} removed from favorites",
        target.resource()
    ))))
}
