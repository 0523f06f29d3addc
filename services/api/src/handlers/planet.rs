use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Planet, PlanetChanges};
use crate::error::ApiError;
use crate::extract::{JsonBody, ResourceId};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::planet::{
    CreatePlanetInput, CreatePlanetUseCase, DeletePlanetUseCase, GetPlanetUseCase,
    ListPlanetsUseCase, UpdatePlanetUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

impl From<Planet> for PlanetResponse {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            climate: p.climate,
            population: p.population,
            terrain: p.terrain,
        }
    }
}

// ── GET /planets ─────────────────────────────────────────────────────────────

pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let usecase = ListPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = usecase.execute().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planets/{id} ────────────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    ResourceId(id, _): ResourceId<Planet>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let usecase = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /planets ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<PlanetResponse>), ApiError> {
    let usecase = CreatePlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = usecase
        .execute(body.map(|b| CreatePlanetInput {
            name: b.name,
            climate: b.climate,
            population: b.population,
            terrain: b.terrain,
        }))
        .await?;
    Ok((StatusCode::CREATED, Json(planet.into())))
}

// ── PUT /planets/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePlanetRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "holocron_core::serde::double_option")]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "holocron_core::serde::double_option")]
    pub population: Option<Option<String>>,
    #[serde(default, deserialize_with = "holocron_core::serde::double_option")]
    pub terrain: Option<Option<String>>,
}

pub async fn update_planet(
    State(state): State<AppState>,
    ResourceId(id, _): ResourceId<Planet>,
    JsonBody(body): JsonBody<UpdatePlanetRequest>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let usecase = UpdatePlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = usecase
        .execute(
            id,
            body.map(|b| PlanetChanges {
                name: b.name,
                climate: b.climate,
                population: b.population,
                terrain: b.terrain,
            }),
        )
        .await?;
    Ok(Json(planet.into()))
}

// ── DELETE /planets/{id} ─────────────────────────────────────────────────────

pub async fn delete_planet(
    State(state): State<AppState>,
    ResourceId(id, _): ResourceId<Planet>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeletePlanetUseCase {
        repo: state.planet_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Planet deleted")))
}
