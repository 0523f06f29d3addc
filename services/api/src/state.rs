use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCharacterRepository, DbFavoriteRepository, DbPlanetRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
///
/// Holds the connection pool; repositories are cheap per-request handles onto it.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn planet_repo(&self) -> DbPlanetRepository {
        DbPlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn character_repo(&self) -> DbCharacterRepository {
        DbCharacterRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }
}
