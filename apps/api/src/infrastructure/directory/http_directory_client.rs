use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::domain::directory::{DirectoryError, TeamDirectory, UserDirectory};
use crate::domain::team::Team;
use crate::domain::user::User;

/// HTTP client for the external user and team directory
///
/// Talks to `{base_url}/users[/{id}]` and `{base_url}/teams[/{id}]`. A 404,
/// an empty body or a JSON `null` body all mean the entity does not exist.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectoryClient {
    /// Creates a client with reqwest's default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DirectoryError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a client on top of an existing reqwest client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, DirectoryError> {
        let url = self.url(path);
        tracing::debug!(%url, "Fetching from directory");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Request(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::Request(format!("GET {}: {}", url, e)))?;

        if !status.is_success() {
            return Err(DirectoryError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str::<Option<T>>(&body)
            .map_err(|e| DirectoryError::InvalidResponse(format!("GET {}: {}", url, e)))
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, DirectoryError> {
        Ok(self.fetch_optional::<Vec<T>>(path).await?.unwrap_or_default())
    }
}

#[async_trait]
impl UserDirectory for HttpDirectoryClient {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DirectoryError> {
        self.fetch_optional(&format!("users/{}", id)).await
    }

    async fn get_all(&self) -> Result<Vec<User>, DirectoryError> {
        self.fetch_list("users").await
    }
}

#[async_trait]
impl TeamDirectory for HttpDirectoryClient {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Team>, DirectoryError> {
        self.fetch_optional(&format!("teams/{}", id)).await
    }

    async fn get_all(&self) -> Result<Vec<Team>, DirectoryError> {
        self.fetch_list("teams").await
    }
}
