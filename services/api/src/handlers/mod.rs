use serde::Serialize;

pub mod character;
pub mod favorite;
pub mod health;
pub mod planet;
pub mod user;

/// `{"message": ...}` body returned by deletes and favorite changes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
