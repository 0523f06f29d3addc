//! Request extractors shared by the handlers.

use std::marker::PhantomData;

use axum::body::to_bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::types::{Character, Identity, Planet, Resource, User};
use crate::error::ApiError;

/// Largest request body accepted, matching axum's default limit.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Header naming the user the favorites endpoints act for.
pub const USER_ID_HEADER: &str = "x-holocron-user-id";

/// JSON object body that may be absent.
///
/// An empty body, `null` or `{}` yields `None` so use cases can decide when a
/// missing body is an error. Malformed JSON, non-object bodies and fields of
/// the wrong type are rejected with `ApiError::InvalidBody`.
#[derive(Debug)]
pub struct JsonBody<T>(pub Option<T>);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    fn from_request(
        req: Request,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let bytes = to_bytes(req.into_body(), BODY_LIMIT)
                .await
                .map_err(|e| ApiError::InvalidBody(e.to_string()))?;
            parse_body(&bytes).map(JsonBody)
        }
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    match &value {
        Value::Null => return Ok(None),
        Value::Object(fields) if fields.is_empty() => return Ok(None),
        Value::Object(_) => {}
        _ => return Err(ApiError::InvalidBody("expected a JSON object".to_owned())),
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// The identity the favorites endpoints act for.
///
/// A valid `x-holocron-user-id` header selects that user; without the header
/// the first user in the store is used. An unparsable header is a 400.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = match parts.headers.get(USER_ID_HEADER) {
            None => Ok(Identity::FirstUser),
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|s| s.trim().parse::<i32>().ok())
                .map(Identity::Explicit)
                .ok_or(ApiError::InvalidIdentity),
        };
        async move { identity.map(CurrentUser) }
    }
}

/// Row type addressed by an `{id}` path segment.
pub trait PathResource {
    const RESOURCE: Resource;
}

impl PathResource for Planet {
    const RESOURCE: Resource = Resource::Planet;
}

impl PathResource for Character {
    const RESOURCE: Resource = Resource::Character;
}

impl PathResource for User {
    const RESOURCE: Resource = Resource::User;
}

/// Integer id from the `{id}` path segment.
///
/// A segment that is not an `i32` cannot name a row, so it is reported as the
/// resource's JSON 404.
#[derive(Debug)]
pub struct ResourceId<R>(pub i32, pub PhantomData<fn() -> R>);

impl<R> ResourceId<R> {
    pub fn new(id: i32) -> Self {
        Self(id, PhantomData)
    }
}

impl<S, R> FromRequestParts<S> for ResourceId<R>
where
    S: Send + Sync,
    R: PathResource,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound(R::RESOURCE))?;
        raw.parse()
            .map(Self::new)
            .map_err(|_| ApiError::NotFound(R::RESOURCE))
    }
}
