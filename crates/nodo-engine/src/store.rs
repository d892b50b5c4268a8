//! Observable state store consumed by the presentation layer.

use nodo_client::Task;
use tokio::sync::watch;

/// Observable container for the engine's published state.
///
/// Four values: the task list, the syncing flag, the new-task draft, and the
/// last sync error. Observers subscribe with the `watch_*` methods; snapshot
/// getters read the current value without subscribing. The draft is the only
/// value writable from outside the engine.
///
/// Publish ordering on settlement: the list (or the error) is committed
/// before the syncing flag flips back to false, so an observer that wakes on
/// `syncing == false` always reads the settled outcome.
pub struct TaskStore {
    tasks: watch::Sender<Vec<Task>>,
    syncing: watch::Sender<bool>,
    draft: watch::Sender<String>,
    last_error: watch::Sender<Option<String>>,
}

impl TaskStore {
    pub fn new() -> Self {
        let (tasks, _) = watch::channel(Vec::new());
        let (syncing, _) = watch::channel(false);
        let (draft, _) = watch::channel(String::new());
        let (last_error, _) = watch::channel(None);

        Self {
            tasks,
            syncing,
            draft,
            last_error,
        }
    }

    /// Current task list: always exactly the last list a successful remote
    /// operation returned, or empty before the first load.
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// True while a sync operation is in flight.
    pub fn is_syncing(&self) -> bool {
        *self.syncing.borrow()
    }

    /// The new-task text being typed.
    pub fn draft(&self) -> String {
        self.draft.borrow().clone()
    }

    /// Message of the most recent failed operation, cleared when the next
    /// operation starts.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    pub fn watch_tasks(&self) -> watch::Receiver<Vec<Task>> {
        self.tasks.subscribe()
    }

    pub fn watch_syncing(&self) -> watch::Receiver<bool> {
        self.syncing.subscribe()
    }

    pub fn watch_draft(&self) -> watch::Receiver<String> {
        self.draft.subscribe()
    }

    pub fn watch_last_error(&self) -> watch::Receiver<Option<String>> {
        self.last_error.subscribe()
    }

    /// Replace the draft text. Called by the presentation layer on input.
    pub fn set_draft(&self, text: impl Into<String>) {
        self.draft.send_replace(text.into());
    }

    pub(crate) fn begin_sync(&self) {
        self.last_error.send_replace(None);
        self.syncing.send_replace(true);
    }

    pub(crate) fn commit_tasks(&self, tasks: Vec<Task>) {
        self.tasks.send_replace(tasks);
    }

    pub(crate) fn record_error(&self, message: String) {
        self.last_error.send_replace(Some(message));
    }

    pub(crate) fn finish_sync(&self) {
        self.syncing.send_replace(false);
    }

    pub(crate) fn clear_draft(&self) {
        self.draft.send_replace(String::new());
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, text: &str) -> Task {
        Task {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let store = TaskStore::new();
        assert!(store.tasks().is_empty());
        assert!(!store.is_syncing());
        assert_eq!(store.draft(), "");
        assert!(store.last_error().is_none());
    }

    #[test]
    fn test_begin_sync_clears_previous_error() {
        let store = TaskStore::new();
        store.record_error("boom".to_string());
        assert_eq!(store.last_error().as_deref(), Some("boom"));

        store.begin_sync();
        assert!(store.last_error().is_none());
        assert!(store.is_syncing());
    }

    #[test]
    fn test_commit_replaces_whole_list() {
        let store = TaskStore::new();
        store.commit_tasks(vec![task("1", "a"), task("2", "b")]);
        store.commit_tasks(vec![task("3", "c")]);

        let tasks = store.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "3");
    }

    #[test]
    fn test_draft_set_and_clear() {
        let store = TaskStore::new();
        store.set_draft("buy milk");
        assert_eq!(store.draft(), "buy milk");

        store.clear_draft();
        assert_eq!(store.draft(), "");
    }

    #[tokio::test]
    async fn test_watchers_see_updates() {
        let store = TaskStore::new();
        let mut tasks = store.watch_tasks();
        let mut draft = store.watch_draft();

        store.commit_tasks(vec![task("1", "a")]);
        tasks.changed().await.unwrap();
        assert_eq!(tasks.borrow().len(), 1);

        store.set_draft("typing");
        draft.changed().await.unwrap();
        assert_eq!(*draft.borrow(), "typing");
    }

    #[test]
    fn test_publishing_without_observers_is_fine() {
        let store = TaskStore::new();
        // No receivers subscribed; a late completion must not panic.
        store.begin_sync();
        store.commit_tasks(vec![task("1", "a")]);
        store.finish_sync();
        assert_eq!(store.tasks().len(), 1);
    }
}
