//! Backend API
//!
//! The four calls against the `motorcycles` collection, and the HTTP
//! implementation used by the app.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Motorcycle;

pub use http::HttpApi;

/// Any failed call. Callers treat every variant the same way.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD calls for the motorcycle collection.
///
/// Futures are `?Send`: in the browser they run on the single
/// `spawn_local` executor.
#[async_trait(?Send)]
pub trait MotorcycleApi {
    /// GET the whole collection, in backend order
    async fn list(&self) -> ApiResult<Vec<Motorcycle>>;

    /// POST a new record; the response body is ignored
    async fn create(&self, motorcycle: &Motorcycle) -> ApiResult<()>;

    /// PUT a full replacement for `id`; the response body is ignored
    async fn update(&self, id: &str, motorcycle: &Motorcycle) -> ApiResult<()>;

    /// DELETE `id`; the response body is ignored
    async fn delete(&self, id: &str) -> ApiResult<()>;
}
