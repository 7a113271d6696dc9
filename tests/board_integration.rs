//! End-to-end scenarios over the `Board` controller with in-memory and
//! file-backed storage.

use pretty_assertions::assert_eq;

use quad::board::Board;
use quad::io::storage::{FileStorage, MemStorage, Storage};
use quad::model::bucket::Bucket;
use quad::model::label::PALETTE;
use quad::model::task::TaskId;
use quad::ops::{MoveRequest, TaskError};

fn mem_board() -> Board {
    Board::load(Box::new(MemStorage::default()))
}

#[test]
fn toggle_done_scenario() {
    let mut board = mem_board();
    let id = board.create_task("Buy milk", None).unwrap();
    assert!(!board.tasks.get(id).unwrap().done);

    board.toggle_done(id);
    assert!(board.tasks.get(id).unwrap().done);

    board.toggle_done(id);
    assert!(!board.tasks.get(id).unwrap().done);
}

#[test]
fn label_cascade_scenario() {
    let mut board = mem_board();
    board.create_label("Work", "#4dd0e1").unwrap();
    let id = board.create_task("Report", Some("Work")).unwrap();
    assert_eq!(board.tasks.get(id).unwrap().label.as_deref(), Some("Work"));

    board.delete_label("Work");

    assert_eq!(board.tasks.get(id).unwrap().label, None);
    assert!(!board.labels.contains("Work"));
}

#[test]
fn cross_bucket_move_preserves_everything_else() {
    let mut board = mem_board();
    let a = board.create_task("A", None).unwrap();
    let b = board.create_task("B", None).unwrap();
    let c = board.create_task("C", None).unwrap();
    board
        .apply(MoveRequest::ToBucket {
            id: c,
            bucket: Bucket::Low,
        })
        .unwrap();

    // Move A to the front of low
    board
        .apply(MoveRequest::ToPosition {
            id: a,
            bucket: Bucket::Low,
            index: Some(0),
        })
        .unwrap();

    let ui: Vec<TaskId> = board
        .tasks
        .in_bucket(Bucket::UrgentImportant)
        .iter()
        .map(|t| t.id)
        .collect();
    let low: Vec<TaskId> = board
        .tasks
        .in_bucket(Bucket::Low)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ui, vec![b]);
    assert_eq!(low, vec![a, c]);
    assert_eq!(board.tasks.len(), 3);
}

#[test]
fn degenerate_drop_changes_nothing() {
    let mut board = mem_board();
    let a = board.create_task("A", None).unwrap();
    let _b = board.create_task("B", None).unwrap();
    let before: Vec<_> = board.tasks.tasks().to_vec();

    // Own slot and the adjacent gap
    for index in [Some(0), Some(1)] {
        let changed = board
            .apply(MoveRequest::ToPosition {
                id: a,
                bucket: Bucket::UrgentImportant,
                index,
            })
            .unwrap();
        assert!(!changed);
        assert_eq!(board.tasks.tasks(), before.as_slice());
    }
}

#[test]
fn stale_gesture_is_not_an_error() {
    let mut board = mem_board();
    board.create_task("A", None).unwrap();
    let changed = board
        .apply(MoveRequest::ToBucket {
            id: TaskId(999),
            bucket: Bucket::Low,
        })
        .unwrap();
    assert!(!changed);
}

#[test]
fn rejected_reorder_keeps_previous_sequence() {
    let mut board = mem_board();
    let a = board.create_task("A", None).unwrap();
    let b = board.create_task("B", None).unwrap();

    let result = board.apply(MoveRequest::Reorder(vec![a, a]));
    assert!(matches!(result, Err(TaskError::InvalidPermutation)));

    let order: Vec<TaskId> = board.tasks.tasks().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![a, b]);

    // The valid permutation still goes through afterwards
    board.apply(MoveRequest::Reorder(vec![b, a])).unwrap();
    let order: Vec<TaskId> = board.tasks.tasks().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![b, a]);
}

#[test]
fn file_backed_board_survives_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_dir = dir.path().join(".quad");

    let id = {
        let mut board = Board::load(Box::new(FileStorage::new(data_dir.clone())));
        board.create_label("Home", PALETTE[2]).unwrap();
        let id = board.create_task("Water plants", Some("Home")).unwrap();
        board
            .apply(MoveRequest::ToBucket {
                id,
                bucket: Bucket::Urgent,
            })
            .unwrap();
        id
    };

    let board = Board::load(Box::new(FileStorage::new(data_dir)));
    let task = board.tasks.get(id).unwrap();
    assert_eq!(task.title, "Water plants");
    assert_eq!(task.bucket, Bucket::Urgent);
    assert_eq!(task.label.as_deref(), Some("Home"));
    assert_eq!(board.labels.get("Home").unwrap().color, PALETTE[2]);
}

#[test]
fn corrupt_blob_loads_as_empty_board() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_dir = dir.path().join(".quad");
    let mut storage = FileStorage::new(data_dir.clone());
    storage.set("tasks", "{{{ not json").unwrap();

    let board = Board::load(Box::new(FileStorage::new(data_dir)));
    assert!(board.tasks.is_empty());
}

#[test]
fn legacy_bucket_values_classify_to_low() {
    let dir = tempfile::TempDir::new().unwrap();
    let data_dir = dir.path().join(".quad");
    let mut storage = FileStorage::new(data_dir.clone());
    storage
        .set(
            "tasks",
            r#"[
                {"id": 1, "title": "old", "bucket": "someday", "done": false},
                {"id": 2, "title": "older", "bucket": null},
                {"id": 3, "title": "bare"}
            ]"#,
        )
        .unwrap();

    let board = Board::load(Box::new(FileStorage::new(data_dir)));
    assert_eq!(board.tasks.len(), 3);
    for task in board.tasks.tasks() {
        assert_eq!(task.bucket, Bucket::Low);
    }
}
