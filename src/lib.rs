//! Studyboard: task tracking engine for the StudyAI student dashboard.
//!
//! This crate provides the task model behind the task manager page: creating
//! tasks, moving them between statuses, and deriving the filtered list, kanban
//! board and headline counts a presentation layer renders.
//!
//! # Architecture
//!
//! Studyboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task logic with no storage dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task creation, status lifecycle, and board projections
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use mockable::DefaultClock;
//! use studyboard::task::{
//!     adapters::memory::InMemoryTaskRepository,
//!     domain::TaskStatus,
//!     services::{NewTaskRequest, TaskStoreService},
//! };
//!
//! let mut store = TaskStoreService::new(InMemoryTaskRepository::new(), DefaultClock);
//! let task = store
//!     .add(NewTaskRequest::new("Lab report", "Chemistry", Utc::now()))
//!     .expect("valid task");
//! store.set_status(task.id(), TaskStatus::Done).expect("known task");
//!
//! assert_eq!(store.board().column(TaskStatus::Done).len(), 1);
//! ```

pub mod task;
