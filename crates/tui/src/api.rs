//! REST client for the BrainLogger API.
//!
//! Wraps the log endpoints (append, open tasks) using
//! [`reqwest`]. Any non-2xx status is turned into [`ClientError::Api`].

use async_trait::async_trait;

use crate::types::{CreateLogRequest, LogEntry};

/// Errors from the API client layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// The operations the frontend needs from the server.
#[async_trait]
pub trait LogApi: Send + Sync {
    /// Append an entry, returning it as persisted.
    async fn create_log(&self, entry: &CreateLogRequest) -> Result<LogEntry, ClientError>;

    /// Fetch the open tasks, newest first.
    async fn get_open_tasks(&self) -> Result<Vec<LogEntry>, ClientError>;
}

/// HTTP client for a BrainLogger API server.
pub struct LogApiClient {
    client: reqwest::Client,
    api_url: String,
}

impl LogApiClient {
    /// Create a new client.
    ///
    /// * `api_url` - Base URL including the `/api` prefix, e.g.
    ///   `http://localhost:3000/api`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`ClientError::Api`] with the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl LogApi for LogApiClient {
    async fn create_log(&self, entry: &CreateLogRequest) -> Result<LogEntry, ClientError> {
        let response = self
            .client
            .post(format!("{}/log", self.api_url))
            .json(entry)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn get_open_tasks(&self) -> Result<Vec<LogEntry>, ClientError> {
        let response = self
            .client
            .get(format!("{}/tasks", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }
}
