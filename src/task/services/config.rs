//! Configuration for task creation rules.

use crate::task::domain::{Priority, Subject, TaskDomainError, TaskTitle};

/// Limits and defaults applied when tasks are created.
///
/// The default configuration imposes no length limits, so only an empty
/// title or subject is rejected. Limits are opt-in through
/// [`TaskStoreConfig::strict`] or explicit field values.
///
/// # Examples
///
/// ```
/// use studyboard::task::domain::Priority;
/// use studyboard::task::services::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default();
/// assert_eq!(config.max_title_length, usize::MAX);
/// assert_eq!(config.default_priority, Priority::Medium);
///
/// let strict = TaskStoreConfig::strict();
/// assert_eq!(strict.max_title_length, 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Maximum subject length in characters.
    pub max_subject_length: usize,
    /// Maximum description length in characters.
    pub max_description_length: usize,
    /// Priority assigned when a request does not name one.
    pub default_priority: Priority,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            max_title_length: usize::MAX,
            max_subject_length: usize::MAX,
            max_description_length: usize::MAX,
            default_priority: Priority::Medium,
        }
    }
}

impl TaskStoreConfig {
    /// Creates a configuration with tight limits, suited to compact board
    /// cards.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 80,
            max_subject_length: 40,
            max_description_length: 500,
            default_priority: Priority::Medium,
        }
    }

    /// Checks validated creation fields against the configured limits.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskDomainError`] length violation found, checking
    /// title, subject, then description.
    pub fn check_limits(
        &self,
        title: &TaskTitle,
        subject: &Subject,
        description: Option<&str>,
    ) -> Result<(), TaskDomainError> {
        let title_length = title.char_count();
        if title_length > self.max_title_length {
            return Err(TaskDomainError::TitleTooLong {
                max: self.max_title_length,
                actual: title_length,
            });
        }

        let subject_length = subject.char_count();
        if subject_length > self.max_subject_length {
            return Err(TaskDomainError::SubjectTooLong {
                max: self.max_subject_length,
                actual: subject_length,
            });
        }

        let description_length = description.map_or(0, |text| text.chars().count());
        if description_length > self.max_description_length {
            return Err(TaskDomainError::DescriptionTooLong {
                max: self.max_description_length,
                actual: description_length,
            });
        }

        Ok(())
    }
}
