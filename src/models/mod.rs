//! Domain model module declarations.

pub mod filter;
pub mod stats;
pub mod task;

pub use filter::Filter;
pub use stats::Stats;
pub use task::{Category, Priority, Task, TaskId};
