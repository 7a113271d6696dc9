use serde::{Deserialize, Serialize};
use std::fmt;

use super::bucket::Bucket;

/// Display value for a task with no label (the "unlabeled" sentinel)
pub const NO_LABEL: &str = "none";

/// Stable task identifier: milliseconds at creation time, bumped past the
/// previous id when two tasks land in the same millisecond
/// (see `TaskStore::next_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single task on the board. Position in the canonical sequence is the
/// within-bucket display order; there is no separate sort index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Weak reference to a label by name. Deleting the label resets this
    /// to `None`; it never dangles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Missing or unrecognized stored values classify as `Low`
    #[serde(default)]
    pub bucket: Bucket,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// New tasks always start in the urgent & important quadrant, not done.
    pub fn new(id: TaskId, title: String, label: Option<String>) -> Self {
        Task {
            id,
            title,
            label,
            bucket: Bucket::UrgentImportant,
            done: false,
        }
    }

    pub fn label_display(&self) -> &str {
        self.label.as_deref().unwrap_or(NO_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip_preserves_fields() {
        let task = Task {
            id: TaskId(1716000000000),
            title: "Report".into(),
            label: Some("Work".into()),
            bucket: Bucket::Urgent,
            done: true,
        };
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let task: Task = serde_json::from_str(r#"{"id": 7, "title": "Buy milk"}"#).unwrap();
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.label, None);
        assert_eq!(task.bucket, Bucket::Low);
        assert!(!task.done);
    }

    #[test]
    fn unlabeled_task_omits_label_field() {
        let task = Task::new(TaskId(1), "t".into(), None);
        let json = serde_json::to_string(&task).unwrap();
        assert!(!json.contains("label"));
        assert_eq!(task.label_display(), NO_LABEL);
    }
}
