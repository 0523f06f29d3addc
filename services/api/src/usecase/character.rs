use crate::domain::repository::CharacterRepository;
use crate::domain::types::{Character, CharacterChanges, NewCharacter, Resource};
use crate::error::ApiError;

// ── ListCharacters ───────────────────────────────────────────────────────────

pub struct ListCharactersUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> ListCharactersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Character>, ApiError> {
        self.repo.list().await
    }
}

// ── GetCharacter ─────────────────────────────────────────────────────────────

pub struct GetCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> GetCharacterUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Character, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(Resource::Character))
    }
}

// ── CreateCharacter ──────────────────────────────────────────────────────────

pub struct CreateCharacterInput {
    pub name: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub eye_color: Option<String>,
}

pub struct CreateCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> CreateCharacterUseCase<R> {
    pub async fn execute(
        &self,
        input: Option<CreateCharacterInput>,
    ) -> Result<Character, ApiError> {
        let input = input.ok_or(ApiError::MissingBody)?;
        let name = input.name.ok_or(ApiError::MissingRequiredField("name"))?;
        self.repo
            .create(&NewCharacter {
                name,
                height: input.height,
                mass: input.mass,
                hair_color: input.hair_color,
                eye_color: input.eye_color,
            })
            .await
    }
}

// ── UpdateCharacter ──────────────────────────────────────────────────────────

pub struct UpdateCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> UpdateCharacterUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        changes: Option<CharacterChanges>,
    ) -> Result<Character, ApiError> {
        let mut character = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(Resource::Character))?;
        let changes = changes.ok_or(ApiError::MissingBody)?;
        character.apply(changes);
        self.repo.update(&character).await
    }
}

// ── DeleteCharacter ──────────────────────────────────────────────────────────

pub struct DeleteCharacterUseCase<R: CharacterRepository> {
    pub repo: R,
}

impl<R: CharacterRepository> DeleteCharacterUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound(Resource::Character))
        }
    }
}
