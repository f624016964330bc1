use reqwest::Client;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{api::types::*, config};

/// Thin HTTP layer shared by the panel repositories. Uses the browser fetch
/// backend on wasm32 and native sockets elsewhere, so host tests exercise
/// the same code path the UI runs.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<RawResponse, ApiError> {
        self.post_json("/login", &request).await
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<RawResponse, ApiError> {
        self.post_json("/signup", &request).await
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<RawResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .post(format!("{}{}", base_url, path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::transport)?;

        let captured = RawResponse::capture(response).await?;
        log::debug!("POST {} -> {}", path, captured.status);
        Ok(captured)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RawResponse {
    /// Capture status, headers, and body from a live response.
    pub(crate) async fn capture(response: reqwest::Response) -> Result<Self, ApiError> {
        let status = response.status().as_u16();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            headers.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        let body = response.text().await.map_err(ApiError::decode)?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }
}
