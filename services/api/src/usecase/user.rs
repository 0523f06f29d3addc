use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, Resource, User, UserChanges};
use crate::error::ApiError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<User, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(Resource::User))
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: Option<CreateUserInput>) -> Result<User, ApiError> {
        let input = input.ok_or(ApiError::MissingBody)?;
        let username = input
            .username
            .ok_or(ApiError::MissingRequiredField("username"))?;
        let email = input.email.ok_or(ApiError::MissingRequiredField("email"))?;
        let password = input
            .password
            .ok_or(ApiError::MissingRequiredField("password"))?;

        ensure_unique(&self.repo, Some(&username), Some(&email), None).await?;

        self.repo
            .create(&NewUser {
                username,
                email,
                password,
                first_name: input.first_name,
                last_name: input.last_name,
                is_active: input.is_active.unwrap_or(true),
            })
            .await
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(&self, id: i32, changes: Option<UserChanges>) -> Result<User, ApiError> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound(Resource::User))?;
        let changes = changes.ok_or(ApiError::MissingBody)?;

        let new_username = changes
            .username
            .as_deref()
            .filter(|username| *username != user.username);
        let new_email = changes
            .email
            .as_deref()
            .filter(|email| *email != user.email);
        ensure_unique(&self.repo, new_username, new_email, Some(id)).await?;

        user.apply(changes);
        self.repo.update(&user).await
    }
}

async fn ensure_unique<R: UserRepository>(
    repo: &R,
    username: Option<&str>,
    email: Option<&str>,
    except_id: Option<i32>,
) -> Result<(), ApiError> {
    if let Some(username) = username {
        if repo.username_taken(username, except_id).await? {
            return Err(ApiError::AlreadyExists("Username"));
        }
    }
    if let Some(email) = email {
        if repo.email_taken(email, except_id).await? {
            return Err(ApiError::AlreadyExists("Email"));
        }
    }
    Ok(())
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Removes the user together with their favorites.
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound(Resource::User))
        }
    }
}
