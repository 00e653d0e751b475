use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::entity::EntityKind;

use super::envelope::{decode_list, RawResponse};
use super::error::ApiError;

const JSON: &str = "application/json";

/// Thin JSON client for the REST backend.
///
/// Every call is bounded by the configured request timeout; a timeout is
/// reported the same way as any other transport failure.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: config.request_timeout(),
        })
    }

    /// Issue one request. Non-2xx statuses are returned, not treated as errors.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse, ApiError> {
        match timeout(self.request_timeout, self.do_send(method.clone(), path, body)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    %method,
                    path,
                    timeout_secs = self.request_timeout.as_secs(),
                    "Request timed out"
                );
                Err(ApiError::NetworkUnavailable {
                    reason: format!("timed out after {}s", self.request_timeout.as_secs()),
                })
            }
        }
    }

    async fn do_send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON);

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Request failed");
            ApiError::NetworkUnavailable {
                reason: e.to_string(),
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::NetworkUnavailable {
                reason: format!("failed to read response body: {}", e),
            })?
            .to_vec();

        tracing::debug!(%method, %url, status, bytes = body.len(), "Response received");
        Ok(RawResponse { status, body })
    }

    /// Fetch every record of `kind` owned by `user_id`.
    pub async fn fetch_list(
        &self,
        kind: EntityKind,
        user_id: &str,
    ) -> Result<Vec<Value>, ApiError> {
        let response = self
            .send(Method::GET, &kind.list_path(user_id), None)
            .await?;
        decode_list(kind, &response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
