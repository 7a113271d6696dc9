use crate::model::bucket::Bucket;
use crate::model::task::{Task, TaskId};

/// A placement gesture. Variants are dispatched explicitly; nothing is
/// inferred from argument shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRequest {
    /// Wholesale replacement of the canonical order. Accepted only when the
    /// ids are exactly a permutation of the current task set.
    Reorder(Vec<TaskId>),
    /// Reassign a task's bucket, appending at the end of the target bucket
    ToBucket { id: TaskId, bucket: Bucket },
    /// Insert a task at a 0-based position within the target bucket's list.
    /// `None` means append.
    ToPosition {
        id: TaskId,
        bucket: Bucket,
        index: Option<usize>,
    },
}

/// Compute the canonical sequence that puts the task at `index` within
/// `target`, preserving every other task's relative order.
///
/// The moved task is spliced into the flat sequence immediately before the
/// target bucket's `index`-th member (append lands right after the bucket's
/// last member), so the flat positions of all other tasks interleave exactly
/// as before. Indices past the end of the bucket clamp to append.
///
/// Returns `None` when the gesture changes nothing: the id does not resolve
/// (stale gesture payload) or the drop lands back on the task's own slot.
pub fn place(
    tasks: &[Task],
    id: TaskId,
    target: Bucket,
    index: Option<usize>,
) -> Option<Vec<Task>> {
    let from_flat = tasks.iter().position(|t| t.id == id)?;
    let same_bucket = tasks[from_flat].bucket == target;

    // The task's position within its own bucket, before removal
    let from_idx = tasks[..from_flat]
        .iter()
        .filter(|t| t.bucket == target)
        .count();

    let mut seq: Vec<Task> = tasks.to_vec();
    let mut moved = seq.remove(from_flat);

    // Flat positions of the target bucket's remaining members
    let members: Vec<usize> = seq
        .iter()
        .enumerate()
        .filter(|(_, t)| t.bucket == target)
        .map(|(i, _)| i)
        .collect();

    let idx = if same_bucket {
        // Positions run over the pre-removal list, which had one more entry
        let mut idx = index.unwrap_or(members.len() + 1).min(members.len() + 1);
        // Removing the task shifted everything after it one slot left
        if from_idx < idx {
            idx -= 1;
        }
        if idx == from_idx {
            // Dropped on its own slot or the adjacent gap
            return None;
        }
        idx
    } else {
        moved.bucket = target;
        index.unwrap_or(members.len()).min(members.len())
    };

    let flat_insert = if idx < members.len() {
        members[idx]
    } else {
        members.last().map_or(seq.len(), |&last| last + 1)
    };
    seq.insert(flat_insert, moved);
    Some(seq)
}
