//! Task tracking for the student task manager board.
//!
//! This module owns the task record, its permissive status lifecycle, and the
//! filtered list and kanban board views derived from the task collection. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
