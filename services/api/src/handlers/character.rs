use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Character, CharacterChanges};
use crate::error::ApiError;
use crate::extract::{JsonBody, ResourceId};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::character::{
    CreateCharacterInput, CreateCharacterUseCase, DeleteCharacterUseCase, GetCharacterUseCase,
    ListCharactersUseCase, UpdateCharacterUseCase,
};

// Characters are served under `/people`.

#[derive(Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

impl From<Character> for CharacterResponse {
    fn from(c: Character) -> Self {
        Self {
            id: c.id,
            name: c.name,
            height: c.height,
            mass: c.mass,
            hair_color: c.hair_color,
            eye_color: c.eye_color,
        }
    }
}

// ── GET /people ──────────────────────────────────────────────────────────────

pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, ApiError> {
    let usecase = ListCharactersUseCase {
        repo: state.character_repo(),
    };
    let characters = usecase.execute().await?;
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}

// ── GET /people/{id} ─────────────────────────────────────────────────────────

pub async fn get_character(
    State(state): State<AppState>,
    ResourceId(id, _): ResourceId<Character>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let usecase = GetCharacterUseCase {
        repo: state.character_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /people ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCharacterRequest {
    pub name: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

pub async fn create_character(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<CharacterResponse>), ApiError> {
    let usecase = CreateCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = usecase
        .execute(body.map(|b| CreateCharacterInput {
            name: b.name,
            height: b.height,
            mass: b.mass,
            hair_color: b.hair_color,
            eye_color: b.eye_color,
        }))
        .await?;
    Ok((StatusCode::CREATED, Json(character.into())))
}

// ── PUT /people/{id} ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "holocron_core::serde::double_option")]
    pub height: Option<Option<String>>,
    #[serde(default, deserialize_with = "holocron_core::serde::double_option")]
    pub mass: Option<Option<String>>,
    #[serde(default, deserialize_with = "holocron_core::serde::double_option")]
    pub hair_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "holocron_core::serde::double_option")]
    pub eye_color: Option<Option<String>>,
}

pub async fn update_character(
    State(state): State<AppState>,
    ResourceId(id, _): ResourceId<Character>,
    JsonBody(body): JsonBody<UpdateCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let usecase = UpdateCharacterUseCase {
        repo: state.character_repo(),
    };
    let character = usecase
        .execute(
            id,
            body.map(|b| CharacterChanges {
                name: b.name,
                height: b.height,
                mass: b.mass,
                hair_color: b.hair_color,
                eye_color: b.eye_color,
            }),
        )
        .await?;
    Ok(Json(character.into()))
}

// ── DELETE /people/{id} ──────────────────────────────────────────────────────

pub async fn delete_character(
    State(state): State<AppState>,
    ResourceId(id, _): ResourceId<Character>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeleteCharacterUseCase {
        repo: state.character_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new("Character deleted")))
}
