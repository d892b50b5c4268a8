//! The task sync engine: CRUD operations against the remote service with
//! full-list replacement on success.

use std::sync::Arc;

use nodo_client::Task;
use tokio::sync::Mutex;

use crate::error::SyncError;
use crate::repository::TasksRepository;
use crate::store::TaskStore;

/// Drives the four sync operations and owns the published state.
///
/// Overlapping calls are serialized through an internal single-flight lock:
/// they queue in arrival order and run one at a time, so completion order
/// equals start order and the published list is always the response of the
/// most recently started operation. The syncing flag is therefore a plain
/// boolean and never races.
///
/// Operations return nothing; outcomes surface only through the store. On
/// success the local list is replaced wholesale with the server's returned
/// list. On failure the list (and the draft) stay untouched, the error is
/// logged and published to `last_error`, and the syncing flag is cleared on
/// every path.
pub struct SyncEngine {
    repository: TasksRepository,
    store: Arc<TaskStore>,
    flight: Mutex<()>,
}

impl SyncEngine {
    pub fn new(repository: TasksRepository) -> Self {
        Self::with_store(repository, Arc::new(TaskStore::new()))
    }

    /// Build an engine around an externally owned store, so the caller can
    /// hold subscriptions that outlive the engine.
    pub fn with_store(repository: TasksRepository, store: Arc<TaskStore>) -> Self {
        Self {
            repository,
            store,
            flight: Mutex::new(()),
        }
    }

    pub fn store(&self) -> Arc<TaskStore> {
        Arc::clone(&self.store)
    }

    /// Re-fetch the full list from the server. Callable at any time
    /// (initial load, pull-to-refresh).
    pub async fn refresh(&self) {
        let _flight = self.flight.lock().await;
        self.store.begin_sync();
        let result = self.repository.list_tasks().await;
        self.settle("refresh", result, false);
    }

    /// Create a task from `text`. Empty text is a no-op: no request is made
    /// and no state changes. On success the draft is cleared; on failure it
    /// is preserved so the typed text survives for a retry.
    pub async fn create(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        let _flight = self.flight.lock().await;
        self.store.begin_sync();
        let result = self.repository.create_task(text).await;
        self.settle("create", result, true);
    }

    /// Replace the text of the task with the given id. Empty text is a
    /// no-op. The engine tracks no edit-mode state; leaving any editing UI
    /// is the caller's concern regardless of outcome.
    pub async fn rename(&self, id: &str, text: &str) {
        if text.is_empty() {
            return;
        }
        let _flight = self.flight.lock().await;
        self.store.begin_sync();
        let result = self.repository.update_task(id, text).await;
        self.settle("rename", result, false);
    }

    /// Delete the task with the given id.
    pub async fn remove(&self, id: &str) {
        let _flight = self.flight.lock().await;
        self.store.begin_sync();
        let result = self.repository.delete_task(id).await;
        self.settle("remove", result, false);
    }

    /// Commit one settled operation. List (or error) first, syncing flag
    /// last; see the ordering contract on [`TaskStore`].
    fn settle(&self, op: &str, result: Result<Vec<Task>, SyncError>, clear_draft: bool) {
        match result {
            Ok(tasks) => {
                tracing::debug!(op, count = tasks.len(), "sync committed");
                self.store.commit_tasks(tasks);
                if clear_draft {
                    self.store.clear_draft();
                }
            }
            Err(e) => {
                tracing::warn!(op, error = %e, "sync failed, keeping previous list");
                self.store.record_error(e.message);
            }
        }
        self.store.finish_sync();
    }
}
