//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task subject is empty.
    #[error("task subject must not be empty")]
    EmptySubject,

    /// The task title exceeds the configured limit.
    #[error("task title is {actual} characters, limit is {max}")]
    TitleTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },

    /// The task subject exceeds the configured limit.
    #[error("task subject is {actual} characters, limit is {max}")]
    SubjectTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },

    /// The task description exceeds the configured limit.
    #[error("task description is {actual} characters, limit is {max}")]
    DescriptionTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Submitted length in characters.
        actual: usize,
    },
}

/// Error returned while parsing task statuses from strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
