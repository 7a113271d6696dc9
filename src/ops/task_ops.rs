use std::collections::HashMap;

use chrono::Utc;

use crate::model::bucket::Bucket;
use crate::model::task::{Task, TaskId};

use super::placement::{self, MoveRequest};

/// Error type for task store operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("unknown label: {0}")]
    UnknownLabel(String),
    #[error("reorder is not a permutation of the current tasks")]
    InvalidPermutation,
}

/// Owns the canonical ordered task sequence. Every displayed bucket list is
/// derived from it by filtering; mutations either replace the sequence or
/// leave it untouched, never half-apply.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: i64,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        TaskStore { tasks, last_id }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks in the given bucket, in canonical order
    pub fn in_bucket(&self, bucket: Bucket) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.bucket == bucket).collect()
    }

    /// Milliseconds now, bumped past the last issued id so rapid creation
    /// in the same millisecond still yields unique ids.
    fn next_id(&mut self) -> TaskId {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        TaskId(self.last_id)
    }

    /// Append a new task at the end of the canonical sequence. New tasks
    /// always start in the urgent & important bucket.
    pub fn create(&mut self, title: &str, label: Option<&str>) -> Result<TaskId, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let id = self.next_id();
        self.tasks
            .push(Task::new(id, title.to_string(), label.map(str::to_string)));
        Ok(id)
    }

    /// Flip `done`. Unknown ids are a silent no-op (stale gesture); returns
    /// whether anything changed.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Apply a placement gesture. `Ok(true)` when the sequence changed, so
    /// callers can skip the persistence write on no-ops.
    pub fn apply(&mut self, request: MoveRequest) -> Result<bool, TaskError> {
        match request {
            MoveRequest::Reorder(ids) => self.reorder(&ids),
            MoveRequest::ToBucket { id, bucket } => Ok(self.place(id, bucket, None)),
            MoveRequest::ToPosition { id, bucket, index } => Ok(self.place(id, bucket, index)),
        }
    }

    fn place(&mut self, id: TaskId, bucket: Bucket, index: Option<usize>) -> bool {
        match placement::place(&self.tasks, id, bucket, index) {
            Some(seq) => {
                self.tasks = seq;
                true
            }
            None => false,
        }
    }

    /// Replace the canonical order wholesale. Rejected unless `ids` is
    /// exactly a permutation of the current id set; on rejection the
    /// previous sequence is kept.
    fn reorder(&mut self, ids: &[TaskId]) -> Result<bool, TaskError> {
        if ids.len() != self.tasks.len() {
            return Err(TaskError::InvalidPermutation);
        }
        let current: Vec<TaskId> = self.tasks.iter().map(|t| t.id).collect();
        let mut want = ids.to_vec();
        let mut have = current.clone();
        want.sort_unstable();
        have.sort_unstable();
        if want != have {
            return Err(TaskError::InvalidPermutation);
        }
        if ids == current {
            return Ok(false);
        }
        let mut by_id: HashMap<TaskId, Task> = self.tasks.drain(..).map(|t| (t.id, t)).collect();
        self.tasks = ids.iter().filter_map(|id| by_id.remove(id)).collect();
        Ok(true)
    }

    /// Label-deletion cascade: every task referencing `name` reverts to the
    /// unlabeled sentinel. Returns how many tasks changed.
    pub fn clear_label(&mut self, name: &str) -> usize {
        let mut cleared = 0;
        for task in &mut self.tasks {
            if task.label.as_deref() == Some(name) {
                task.label = None;
                cleared += 1;
            }
        }
        cleared
    }
}
