//! Repository boundary between the engine and the transport client.

use nodo_client::{Task, TasksClient};

use crate::error::SyncError;

/// Pass-through wrapper around [`TasksClient`].
///
/// Converts every transport failure into a [`SyncError`] so the engine never
/// sees the transport's native error representation. Adds no other policy:
/// no retry, no caching, no partial success.
pub struct TasksRepository {
    client: TasksClient,
}

impl TasksRepository {
    pub fn new(client: TasksClient) -> Self {
        Self { client }
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, SyncError> {
        Ok(self.client.list_tasks().await?)
    }

    pub async fn create_task(&self, text: &str) -> Result<Vec<Task>, SyncError> {
        Ok(self.client.create_task(text).await?)
    }

    pub async fn update_task(&self, id: &str, text: &str) -> Result<Vec<Task>, SyncError> {
        Ok(self.client.update_task(id, text).await?)
    }

    pub async fn delete_task(&self, id: &str) -> Result<Vec<Task>, SyncError> {
        Ok(self.client.delete_task(id).await?)
    }
}
