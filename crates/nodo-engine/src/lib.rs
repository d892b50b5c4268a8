//! Client-side sync engine for the Nodo task service.
//!
//! Owns the authoritative in-memory task list, the syncing flag, and the
//! new-task draft, all published through an observable [`TaskStore`]. Every
//! mutation calls the remote service and replaces the whole local list with
//! the server's response; a failed operation never touches the list.

pub mod engine;
pub mod error;
pub mod repository;
pub mod store;

pub use engine::SyncEngine;
pub use error::SyncError;
pub use repository::TasksRepository;
pub use store::TaskStore;

pub use nodo_client::Task;
