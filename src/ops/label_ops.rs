use std::collections::HashSet;

use indexmap::IndexMap;

use crate::model::label::{Label, MAX_NAME_LEN, PALETTE};

/// Error type for label store operations
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("label name must not be empty")]
    EmptyName,
    #[error("label name must be at most {MAX_NAME_LEN} characters")]
    NameTooLong,
    #[error("label already exists: {0}")]
    Duplicate(String),
    #[error("color is not in the palette: {0}")]
    UnknownColor(String),
}

/// Owns the ordered set of labels, keyed by name, plus the session-local
/// set of label names hidden from the board. The hidden set is never
/// persisted.
#[derive(Debug, Default)]
pub struct LabelStore {
    labels: IndexMap<String, Label>,
    hidden: HashSet<String>,
}

impl LabelStore {
    pub fn new(labels: Vec<Label>) -> Self {
        let labels = labels.into_iter().map(|l| (l.name.clone(), l)).collect();
        LabelStore {
            labels,
            hidden: HashSet::new(),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.values()
    }

    pub fn to_vec(&self) -> Vec<Label> {
        self.labels.values().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<&Label> {
        self.labels.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.labels.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Create a label. Names are trimmed, must be 1 to `MAX_NAME_LEN`
    /// characters, and unique by exact match; duplicates are rejected rather
    /// than silently merged so two labels can never share a name with
    /// different colors. Colors must come from the palette.
    pub fn create(&mut self, name: &str, color: &str) -> Result<(), LabelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LabelError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(LabelError::NameTooLong);
        }
        if self.labels.contains_key(name) {
            return Err(LabelError::Duplicate(name.to_string()));
        }
        if !PALETTE.contains(&color) {
            return Err(LabelError::UnknownColor(color.to_string()));
        }
        self.labels.insert(
            name.to_string(),
            Label {
                name: name.to_string(),
                color: color.to_string(),
            },
        );
        Ok(())
    }

    /// Remove a label; the name also leaves the hidden set so it cannot go
    /// stale there. The task-side cascade is the caller's job
    /// (`TaskStore::clear_label`). Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> bool {
        self.hidden.remove(name);
        self.labels.shift_remove(name).is_some()
    }

    /// Toggle hidden-ness for a label name; returns the new state. Tolerates
    /// names with no matching label (a toggle for a since-deleted label is
    /// not an error).
    pub fn toggle_hidden(&mut self, name: &str) -> bool {
        if self.hidden.remove(name) {
            false
        } else {
            self.hidden.insert(name.to_string());
            true
        }
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden.contains(name)
    }
}
