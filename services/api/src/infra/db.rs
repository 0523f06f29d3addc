use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use holocron_schema::{characters, favorite_characters, favorite_planets, planets, users};

use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{
    Character, Favorite, FavoriteTarget, Favorites, NewCharacter, NewPlanet, NewUser, Planet,
    User,
};
use crate::error::ApiError;

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_first(&self) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .one(&self.db)
            .await
            .context("find first user")?;
        Ok(model.map(user_from_model))
    }

    async fn username_taken(
        &self,
        username: &str,
        except_id: Option<i32>,
    ) -> Result<bool, ApiError> {
        let mut query = users::Entity::find().filter(users::Column::Username.eq(username));
        if let Some(id) = except_id {
            query = query.filter(users::Column::Id.ne(id));
        }
        let count = query.count(&self.db).await.context("count users by username")?;
        Ok(count > 0)
    }

    async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, ApiError> {
        let mut query = users::Entity::find().filter(users::Column::Email.eq(email));
        if let Some(id) = except_id {
            query = query.filter(users::Column::Id.ne(id));
        }
        let count = query.count(&self.db).await.context("count users by email")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let model = users::ActiveModel {
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            is_active: Set(user.is_active),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| user_write_error(e, "create user"))?;
        Ok(user_from_model(model))
    }

    async fn update(&self, user: &User) -> Result<User, ApiError> {
        let model = users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            is_active: Set(user.is_active),
        }
        .update(&self.db)
        .await
        .map_err(|e| user_write_error(e, "update user"))?;
        Ok(user_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(move |txn| {
                Box::pin(async move {
                    favorite_planets::Entity::delete_many()
                        .filter(favorite_planets::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    favorite_characters::Entity::delete_many()
                        .filter(favorite_characters::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = users::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete user")?;
        Ok(deleted)
    }
}

/// The username/email pre-checks can race; a unique violation here means one of them lost.
fn user_write_error(err: DbErr, action: &'static str) -> ApiError {
    if is_unique_violation(&err) {
        ApiError::AlreadyExists("User")
    } else {
        ApiError::Internal(anyhow::Error::new(err).context(action))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password: model.password,
        first_name: model.first_name,
        last_name: model.last_name,
        is_active: model.is_active,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, ApiError> {
        let models = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError> {
        let model = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        Ok(model.map(planet_from_model))
    }

    async fn create(&self, planet: &NewPlanet) -> Result<Planet, ApiError> {
        let model = planets::ActiveModel {
            name: Set(planet.name.clone()),
            climate: Set(planet.climate.clone()),
            population: Set(planet.population.clone()),
            terrain: Set(planet.terrain.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create planet")?;
        Ok(planet_from_model(model))
    }

    async fn update(&self, planet: &Planet) -> Result<Planet, ApiError> {
        let model = planets::ActiveModel {
            id: Set(planet.id),
            name: Set(planet.name.clone()),
            climate: Set(planet.climate.clone()),
            population: Set(planet.population.clone()),
            terrain: Set(planet.terrain.clone()),
        }
        .update(&self.db)
        .await
        .context("update planet")?;
        Ok(planet_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(move |txn| {
                Box::pin(async move {
                    favorite_planets::Entity::delete_many()
                        .filter(favorite_planets::Column::PlanetId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = planets::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete planet")?;
        Ok(deleted)
    }
}

fn planet_from_model(model: planets::Model) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
        climate: model.climate,
        population: model.population,
        terrain: model.terrain,
    }
}

// ── Character repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCharacterRepository {
    pub db: DatabaseConnection,
}

impl CharacterRepository for DbCharacterRepository {
    async fn list(&self) -> Result<Vec<Character>, ApiError> {
        let models = characters::Entity::find()
            .order_by_asc(characters::Column::Id)
            .all(&self.db)
            .await
            .context("list characters")?;
        Ok(models.into_iter().map(character_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError> {
        let model = characters::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find character by id")?;
        Ok(model.map(character_from_model))
    }

    async fn create(&self, character: &NewCharacter) -> Result<Character, ApiError> {
        let model = characters::ActiveModel {
            name: Set(character.name.clone()),
            height: Set(character.height.clone()),
            mass: Set(character.mass.clone()),
            hair_color: Set(character.hair_color.clone()),
            eye_color: Set(character.eye_color.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create character")?;
        Ok(character_from_model(model))
    }

    async fn update(&self, character: &Character) -> Result<Character, ApiError> {
        let model = characters::ActiveModel {
            id: Set(character.id),
            name: Set(character.name.clone()),
            height: Set(character.height.clone()),
            mass: Set(character.mass.clone()),
            hair_color: Set(character.hair_color.clone()),
            eye_color: Set(character.eye_color.clone()),
        }
        .update(&self.db)
        .await
        .context("update character")?;
        Ok(character_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(move |txn| {
                Box::pin(async move {
                    favorite_characters::Entity::delete_many()
                        .filter(favorite_characters::Column::CharacterId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = characters::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete character")?;
        Ok(deleted)
    }
}

fn character_from_model(model: characters::Model) -> Character {
    Character {
        id: model.id,
        name: model.name,
        height: model.height,
        mass: model.mass,
        hair_color: model.hair_color,
        eye_color: model.eye_color,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn has_target(&self, target: FavoriteTarget) -> Result<bool, ApiError> {
        let count = match target {
            FavoriteTarget::Planet(id) => planets::Entity::find_by_id(id)
                .count(&self.db)
                .await
                .context("count planet by id")?,
            FavoriteTarget::Character(id) => characters::Entity::find_by_id(id)
                .count(&self.db)
                .await
                .context("count character by id")?,
        };
        Ok(count > 0)
    }

    async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, ApiError> {
        let favorite = match target {
            FavoriteTarget::Planet(planet_id) => favorite_planets::Entity::find()
                .filter(favorite_planets::Column::UserId.eq(user_id))
                .filter(favorite_planets::Column::PlanetId.eq(planet_id))
                .one(&self.db)
                .await
                .context("find favorite planet")?
                .map(favorite_from_planet_model),
            FavoriteTarget::Character(character_id) => favorite_characters::Entity::find()
                .filter(favorite_characters::Column::UserId.eq(user_id))
                .filter(favorite_characters::Column::CharacterId.eq(character_id))
                .one(&self.db)
                .await
                .context("find favorite character")?
                .map(favorite_from_character_model),
        };
        Ok(favorite)
    }

    async fn add(&self, user_id: i32, target: FavoriteTarget) -> Result<Favorite, ApiError> {
        let result = match target {
            FavoriteTarget::Planet(planet_id) => favorite_planets::ActiveModel {
                user_id: Set(user_id),
                planet_id: Set(planet_id),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(favorite_from_planet_model),
            FavoriteTarget::Character(character_id) => favorite_characters::ActiveModel {
                user_id: Set(user_id),
                character_id: Set(character_id),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(favorite_from_character_model),
        };
        result.map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::DuplicateFavorite(target.resource())
            } else {
                ApiError::Internal(anyhow::Error::new(e).context("insert favorite"))
            }
        })
    }

    async fn remove(&self, user_id: i32, target: FavoriteTarget) -> Result<bool, ApiError> {
        let result = match target {
            FavoriteTarget::Planet(planet_id) => favorite_planets::Entity::delete_many()
                .filter(favorite_planets::Column::UserId.eq(user_id))
                .filter(favorite_planets::Column::PlanetId.eq(planet_id))
                .exec(&self.db)
                .await
                .context("delete favorite planet")?,
            FavoriteTarget::Character(character_id) => favorite_characters::Entity::delete_many()
                .filter(favorite_characters::Column::UserId.eq(user_id))
                .filter(favorite_characters::Column::CharacterId.eq(character_id))
                .exec(&self.db)
                .await
                .context("delete favorite character")?,
        };
        Ok(result.rows_affected > 0)
    }

    async fn list_for_user(&self, user_id: i32) -> Result<Favorites, ApiError> {
        let planets = favorite_planets::Entity::find()
            .filter(favorite_planets::Column::UserId.eq(user_id))
            .order_by_asc(favorite_planets::Column::Id)
            .find_also_related(planets::Entity)
            .all(&self.db)
            .await
            .context("list favorite planets")?
            .into_iter()
            .filter_map(|(_, planet)| planet.map(planet_from_model))
            .collect();
        let characters = favorite_characters::Entity::find()
            .filter(favorite_characters::Column::UserId.eq(user_id))
            .order_by_asc(favorite_characters::Column::Id)
            .find_also_related(characters::Entity)
            .all(&self.db)
            .await
            .context("list favorite characters")?
            .into_iter()
            .filter_map(|(_, character)| character.map(character_from_model))
            .collect();
        Ok(Favorites {
            planets,
            characters,
        })
    }
}

fn favorite_from_planet_model(model: favorite_planets::Model) -> Favorite {
    Favorite {
        id: model.id,
        user_id: model.user_id,
        target: FavoriteTarget::Planet(model.planet_id),
    }
}

fn favorite_from_character_model(model: favorite_characters::Model) -> Favorite {
    Favorite {
        id: model.id,
        user_id: model.user_id,
        target: FavoriteTarget::Character(model.character_id),
    }
}
