use crate::io::storage::{KEY_LABELS, KEY_TASKS, Storage};
use crate::model::label::Label;
use crate::model::task::{Task, TaskId};
use crate::ops::{LabelError, LabelStore, MoveRequest, TaskError, TaskStore};

/// Root controller: owns both stores and the storage handle. Every mutation
/// goes through a method here so the affected blob is re-serialized and
/// written after the store call. Writes are fire-and-forget; on failure the
/// in-memory state stays authoritative for the session.
pub struct Board {
    pub tasks: TaskStore,
    pub labels: LabelStore,
    storage: Box<dyn Storage>,
}

impl Board {
    /// Load both blobs. An absent or unparsable blob starts the
    /// corresponding store empty; loading never fails.
    pub fn load(storage: Box<dyn Storage>) -> Board {
        let tasks: Vec<Task> = read_blob(storage.as_ref(), KEY_TASKS);
        let labels: Vec<Label> = read_blob(storage.as_ref(), KEY_LABELS);
        Board {
            tasks: TaskStore::new(tasks),
            labels: LabelStore::new(labels),
            storage,
        }
    }

    /// Create a task. A label, when given, must name an existing label so
    /// the weak reference starts out resolvable.
    pub fn create_task(&mut self, title: &str, label: Option<&str>) -> Result<TaskId, TaskError> {
        if let Some(name) = label {
            if !self.labels.contains(name) {
                return Err(TaskError::UnknownLabel(name.to_string()));
            }
        }
        let id = self.tasks.create(title, label)?;
        self.save_tasks();
        Ok(id)
    }

    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let changed = self.tasks.toggle_done(id);
        if changed {
            self.save_tasks();
        }
        changed
    }

    /// Apply a placement gesture; saves only when the sequence changed
    pub fn apply(&mut self, request: MoveRequest) -> Result<bool, TaskError> {
        let changed = self.tasks.apply(request)?;
        if changed {
            self.save_tasks();
        }
        Ok(changed)
    }

    pub fn create_label(&mut self, name: &str, color: &str) -> Result<(), LabelError> {
        self.labels.create(name, color)?;
        self.save_labels();
        Ok(())
    }

    /// Delete a label and cascade: referencing tasks revert to unlabeled and
    /// the name leaves the hidden set. Returns how many tasks were updated,
    /// or `None` when no such label existed.
    pub fn delete_label(&mut self, name: &str) -> Option<usize> {
        if !self.labels.delete(name) {
            return None;
        }
        let cleared = self.tasks.clear_label(name);
        if cleared > 0 {
            self.save_tasks();
        }
        self.save_labels();
        Some(cleared)
    }

    /// Session-local visibility toggle; no persistence involved
    pub fn toggle_hidden(&mut self, name: &str) -> bool {
        self.labels.toggle_hidden(name)
    }

    fn save_tasks(&mut self) {
        if let Ok(blob) = serde_json::to_string_pretty(self.tasks.tasks()) {
            let _ = self.storage.set(KEY_TASKS, &blob);
        }
    }

    fn save_labels(&mut self) {
        if let Ok(blob) = serde_json::to_string_pretty(&self.labels.to_vec()) {
            let _ = self.storage.set(KEY_LABELS, &blob);
        }
    }
}

fn read_blob<T: serde::de::DeserializeOwned>(storage: &dyn Storage, key: &str) -> Vec<T> {
    storage
        .get(key)
        .and_then(|blob| serde_json::from_str(&blob).ok())
        .unwrap_or_default()
}
