//! Automation task model for asynchronous background processing.

use serde_json::Value;

/// A queued automation task.
///
/// Created by the automation handler and passed to the background worker via
/// a bounded channel, decoupling the HTTP response from task execution.
#[derive(Debug, Clone)]
pub struct AutomationTask {
    /// Generated as `task_<millis>` at enqueue time.
    pub id: String,
    pub task_type: String,
    pub payload: Option<Value>,
}

impl AutomationTask {
    pub fn new(id: String, task_type: String, payload: Option<Value>) -> Self {
        Self {
            id,
            task_type,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_creation() {
        let task = AutomationTask::new(
            "task_1700000000000".to_string(),
            "sync-certifications".to_string(),
            Some(json!({"workerId": "worker_001"})),
        );

        assert_eq!(task.id, "task_1700000000000");
        assert_eq!(task.task_type, "sync-certifications");
        assert!(task.payload.is_some());
    }

    #[test]
    fn test_task_without_payload() {
        let task = AutomationTask::new("task_1".to_string(), "noop".to_string(), None);
        assert!(task.payload.is_none());
    }
}
