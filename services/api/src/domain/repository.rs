#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Character, Favorite, FavoriteTarget, Favorites, NewCharacter, NewPlanet, NewUser, Planet,
    User,
};
use crate::error::ApiError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    /// The user with the lowest id, if any.
    async fn find_first(&self) -> Result<Option<User>, ApiError>;
    /// Whether another user (other than `except_id`) already holds the username.
    async fn username_taken(
        &self,
        username: &str,
        except_id: Option<i32>,
    ) -> Result<bool, ApiError>;
    /// Whether another user (other than `except_id`) already holds the email.
    async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, ApiError>;
    async fn create(&self, user: &NewUser) -> Result<User, ApiError>;
    async fn update(&self, user: &User) -> Result<User, ApiError>;
    /// Delete the user and every favorite they own. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for planets.
pub trait PlanetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError>;
    async fn create(&self, planet: &NewPlanet) -> Result<Planet, ApiError>;
    async fn update(&self, planet: &Planet) -> Result<Planet, ApiError>;
    /// Delete the planet and every favorite pointing at it, atomically.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for characters.
pub trait CharacterRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError>;
    async fn create(&self, character: &NewCharacter) -> Result<Character, ApiError>;
    async fn update(&self, character: &Character) -> Result<Character, ApiError>;
    /// Delete the character and every favorite pointing at it, atomically.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for the two favorite join tables.
pub trait FavoriteRepository: Send + Sync {
    /// Whether the planet or character the target names exists.
    async fn has_target(&self, target: FavoriteTarget) -> Result<bool, ApiError>;

    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, ApiError>;

    /// Insert a favorite. A `(user, target)` pair that already exists yields
    /// `ApiError::DuplicateFavorite`.
    async fn add(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, ApiError>;

    /// Delete a favorite. Returns `true` if a row was deleted.
    async fn remove(&self, user_id: i32, target: FavoriteTarget) -> Result<bool, ApiError>;

    /// All planets and characters the user has favorited, in favorite order.
    async fn list_for_user(&self, user_id: i32) -> Result<Favorites, ApiError>;
}
