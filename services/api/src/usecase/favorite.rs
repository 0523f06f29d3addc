use crate::domain::repository::{FavoriteRepository, UserRepository};
use crate::domain::types::{Favorite, FavoriteTarget, Favorites, Identity, Resource, User};
use crate::error::ApiError;

/// Resolve the user the favorites endpoints act for.
pub async fn resolve_current_user<U: UserRepository>(
    users: &U,
    identity: Identity,
) -> Result<User, ApiError> {
    match identity {
        Identity::Explicit(id) => users
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(Resource::User)),
        Identity::FirstUser => users.find_first().await?.ok_or(ApiError::NoUsersExist),
    }
}

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> ListFavoritesUseCase<U, F> {
    pub async fn execute(&self, identity: Identity) -> Result<Favorites, ApiError> {
        let user = resolve_current_user(&self.users, identity).await?;
        self.favorites.list_for_user(user.id).await
    }
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> AddFavoriteUseCase<U, F> {
    /// User, then target, then duplicate. Each failure short-circuits.
    pub async fn execute(
        &self,
        identity: Identity,
        target: FavoriteTarget,
    ) -> Result<Favorite, ApiError> {
        let user = resolve_current_user(&self.users, identity).await?;
        if !self.favorites.has_target(target).await? {
            return Err(ApiError::NotFound(target.resource()));
        }
        if self.favorites.find(user.id, target).await?.is_some() {
            return Err(ApiError::DuplicateFavorite(target.resource()));
        }
        self.favorites.add(user.id, target).await
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> RemoveFavoriteUseCase<U, F> {
    pub async fn execute(&self, identity: Identity, target: FavoriteTarget) -> Result<(), ApiError> {
        let user = resolve_current_user(&self.users, identity).await?;
        if self.favorites.remove(user.id, target).await? {
            Ok(())
        } else {
            Err(ApiError::FavoriteNotFound(target.resource()))
        }
    }
}
