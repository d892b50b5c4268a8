//! HTTP client for the Nodo task service.
//!
//! Provides the wire model and the four remote operations (list, add,
//! update, delete) against the service's JSON API. Every endpoint returns
//! the full current task list.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::TasksClient;
pub use config::{SyncConfig, ValidationResult};
pub use error::{ClientError, ConfigError};
pub use types::{Task, TaskListResponse, TaskWriteRequest};
