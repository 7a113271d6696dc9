pub mod label_ops;
pub mod placement;
pub mod task_ops;

pub use label_ops::{LabelError, LabelStore};
pub use placement::MoveRequest;
pub use task_ops::{TaskError, TaskStore};
