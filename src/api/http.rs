//! HTTP implementation of [`MotorcycleApi`] using reqwest (fetch on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response};

use super::{ApiError, ApiResult, MotorcycleApi};
use crate::config::ApiConfig;
use crate::models::Motorcycle;

/// Unreserved characters stay as-is in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const COLLECTION_PATH: &str = "/api/motorcycles";

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// `GET`/`POST` target
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.config.base_url(), COLLECTION_PATH)
    }

    /// `PUT`/`DELETE` target for one record
    pub fn item_url(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl MotorcycleApi for HttpApi {
    async fn list(&self) -> ApiResult<Vec<Motorcycle>> {
        let url = self.collection_url();
        tracing::debug!(%url, "GET motorcycles");
        let response = Self::send(self.client.get(&url)).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create(&self, motorcycle: &Motorcycle) -> ApiResult<()> {
        let url = self.collection_url();
        tracing::debug!(%url, name = %motorcycle.name, "POST motorcycle");
        Self::send(self.client.post(&url).json(motorcycle)).await?;
        Ok(())
    }

    async fn update(&self, id: &str, motorcycle: &Motorcycle) -> ApiResult<()> {
        let url = self.item_url(id);
        tracing::debug!(%url, "PUT motorcycle");
        Self::send(self.client.put(&url).json(motorcycle)).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE motorcycle");
        Self::send(self.client.delete(&url)).await?;
        Ok(())
    }
}
