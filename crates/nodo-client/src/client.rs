//! Nodo task service API client.

use tracing::instrument;

use crate::config::SyncConfig;
use crate::error::ClientError;
use crate::types::{Task, TaskListResponse, TaskWriteRequest};

const NODO_API_BASE: &str = "https://nodoappnodo.herokuapp.com";

/// Client for the remote task service.
///
/// Every operation is a single request/response round-trip; no retries, no
/// idempotency keys. Each endpoint returns the full current task list.
pub struct TasksClient {
    client: reqwest::Client,
    base_url: String,
}

impl TasksClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from a validated configuration.
    pub fn from_config(config: &SyncConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full task list.
    #[instrument(skip(self), level = "info")]
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let url = format!("{}/get", self.base_url);

        let response = self.client.get(&url).send().await?;

        let resp: TaskListResponse = self.handle_response(response).await?;
        Ok(resp.tasks)
    }

    /// Create a task. Returns the updated full list, not just the new item.
    #[instrument(skip(self), level = "info")]
    pub async fn create_task(&self, text: &str) -> Result<Vec<Task>, ClientError> {
        let url = format!("{}/add", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&TaskWriteRequest::new(text))
            .send()
            .await?;

        let resp: TaskListResponse = self.handle_response(response).await?;
        Ok(resp.tasks)
    }

    /// Replace a task's text. The server decides what an unknown id means;
    /// the client does not pre-validate.
    #[instrument(skip(self), level = "info")]
    pub async fn update_task(&self, id: &str, text: &str) -> Result<Vec<Task>, ClientError> {
        let url = format!("{}/update/{}", self.base_url, urlencoding::encode(id));

        let response = self
            .client
            .put(&url)
            .json(&TaskWriteRequest::new(text))
            .send()
            .await?;

        let resp: TaskListResponse = self.handle_response(response).await?;
        Ok(resp.tasks)
    }

    /// Delete a task by id.
    #[instrument(skip(self), level = "info")]
    pub async fn delete_task(&self, id: &str) -> Result<Vec<Task>, ClientError> {
        let url = format!("{}/delete/{}", self.base_url, urlencoding::encode(id));

        let response = self.client.delete(&url).send().await?;

        let resp: TaskListResponse = self.handle_response(response).await?;
        Ok(resp.tasks)
    }

    /// Helper to handle API responses and errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
        } else if status.as_u16() == 404 {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::TaskNotFound(text))
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

impl Default for TasksClient {
    fn default() -> Self {
        Self::new(NODO_API_BASE)
    }
}
