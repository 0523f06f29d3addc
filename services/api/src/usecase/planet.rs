use crate::domain::repository::PlanetRepository;
use crate::domain::types::{NewPlanet, Planet, PlanetChanges, Resource};
use crate::error::ApiError;

// ── ListPlanets ──────────────────────────────────────────────────────────────

pub struct ListPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> ListPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, ApiError> {
        self.repo.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Planet, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(Resource::Planet))
    }
}

// ── CreatePlanet ─────────────────────────────────────────────────────────────

pub struct CreatePlanetInput {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<String>,
    pub terrain: Option<String>,
}

pub struct CreatePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> CreatePlanetUseCase<R> {
    pub async fn execute(&self, input: Option<CreatePlanetInput>) -> Result<Planet, ApiError> {
        let input = input.ok_or(ApiError::MissingBody)?;
        let name = input.name.ok_or(ApiError::MissingRequiredField("name"))?;
        self.repo
            .create(&NewPlanet {
                name,
                climate: input.climate,
                population: input.population,
                terrain: input.terrain,
            })
            .await
    }
}

// ── UpdatePlanet ─────────────────────────────────────────────────────────────

pub struct UpdatePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> UpdatePlanetUseCase<R> {
    /// The planet is looked up before the body is checked, so an unknown id
    /// reports 404 even when the body is missing.
    pub async fn execute(
        &self,
        id: i32,
        changes: Option<PlanetChanges>,
    ) -> Result<Planet, ApiError> {
        let mut planet = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(Resource::Planet))?;
        let changes = changes.ok_or(ApiError::MissingBody)?;
        planet.apply(changes);
        self.repo.update(&planet).await
    }
}

// ── DeletePlanet ─────────────────────────────────────────────────────────────

pub struct DeletePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> DeletePlanetUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound(Resource::Planet))
        }
    }
}
