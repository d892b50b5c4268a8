//! Wire model for the Nodo task service.

use serde::{Deserialize, Serialize};

/// A single to-do task as stored by the remote service.
///
/// `id` is assigned by the server and opaque to the client; the client never
/// constructs one locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "task")]
    pub text: String,
}

/// Envelope returned by every endpoint: the full current task list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// Request body for `add` and `update`. Both endpoints take the same shape.
#[derive(Debug, Clone, Serialize)]
pub struct TaskWriteRequest {
    pub task: String,
}

impl TaskWriteRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { task: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_wire_names() {
        let task: Task = serde_json::from_str(r#"{"_id":"abc123","task":"buy milk"}"#).unwrap();
        assert_eq!(task.id, "abc123");
        assert_eq!(task.text, "buy milk");
    }

    #[test]
    fn test_task_serializes_wire_names() {
        let task = Task {
            id: "abc123".to_string(),
            text: "buy milk".to_string(),
        };

        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"_id":"abc123","task":"buy milk"}"#);
    }

    #[test]
    fn test_write_request_serialization() {
        let req = TaskWriteRequest::new("buy oat milk");

        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"task":"buy oat milk"}"#);
    }

    #[test]
    fn test_list_response_envelope() {
        let resp: TaskListResponse =
            serde_json::from_str(r#"{"tasks":[{"_id":"1","task":"first"}]}"#).unwrap();
        assert_eq!(resp.tasks.len(), 1);
        assert_eq!(resp.tasks[0].text, "first");
    }

    #[test]
    fn test_list_response_empty() {
        let resp: TaskListResponse = serde_json::from_str(r#"{"tasks":[]}"#).unwrap();
        assert!(resp.tasks.is_empty());
    }
}
