//! Application services for task tracking.

mod config;
pub mod seed;
mod store;

pub use config::TaskStoreConfig;
pub use store::{
    NewTaskRequest, TaskStoreError, TaskStoreResult, TaskStoreService, TransitionTaskRequest,
};
