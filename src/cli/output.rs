use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::bucket::Bucket;
use crate::model::label::Label;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub bucket: &'static str,
    pub done: bool,
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        TaskJson {
            id: task.id.0,
            title: task.title.clone(),
            label: task.label.clone(),
            bucket: task.bucket.key(),
            done: task.done,
        }
    }
}

#[derive(Serialize)]
pub struct QuadrantJson {
    pub bucket: &'static str,
    pub heading: &'static str,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct BoardJson {
    pub quadrants: Vec<QuadrantJson>,
}

#[derive(Serialize)]
pub struct LabelJson {
    pub label: String,
    pub color: String,
}

impl From<&Label> for LabelJson {
    fn from(label: &Label) -> Self {
        LabelJson {
            label: label.name.clone(),
            color: label.color.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Truncate to at most `width` display columns, ending in `…` when cut.
/// Display-only; stored titles are never touched.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut cols = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if cols + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        cols += w;
    }
    out.push('…');
    out
}

/// One task line: `[x] 1716000000000 Buy milk @Home`
pub fn task_line(task: &Task, title_width: usize) -> String {
    let check = if task.done { 'x' } else { ' ' };
    let mut line = format!("[{check}] {} {}", task.id, truncate(&task.title, title_width));
    if let Some(label) = &task.label {
        line.push_str(" @");
        line.push_str(label);
    }
    line
}

/// The whole board as text: four headed sections in display order
pub fn board_text(tasks_by_bucket: &[(Bucket, Vec<&Task>)], title_width: usize) -> String {
    let mut out = String::new();
    for (i, (bucket, tasks)) in tasks_by_bucket.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("── {} ──\n", bucket.heading()));
        if tasks.is_empty() {
            out.push_str("  (empty)\n");
        }
        for task in tasks {
            out.push_str("  ");
            out.push_str(&task_line(task, title_width));
            out.push('\n');
        }
    }
    out
}
