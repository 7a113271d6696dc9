pub mod bucket;
pub mod config;
pub mod label;
pub mod task;

pub use bucket::*;
pub use config::*;
pub use label::*;
pub use task::*;
