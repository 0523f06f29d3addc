//! HTTP plumbing shared by Holocron services.
//!
//! Nothing in here knows about planets, characters or users; it only covers
//! liveness, request ids, log setup and a couple of serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
