#![forbid(unsafe_code)]

//! `nexus_task` — in-memory to-do list with priorities, categories, live
//! counters, and one-shot dictation.

pub mod config;
pub mod dictation;
pub mod errors;
pub mod models;
pub mod shell;
pub mod store;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
pub use store::TaskStore;
