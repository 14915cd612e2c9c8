//! Learning progress entries.
//!
//! Progress entries are archived rather than soft deleted, so this type has
//! no deletion flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SATISFACTION_LEVEL, MAX_SATISFACTION_LEVEL, MIN_SATISFACTION_LEVEL};
use crate::error::{DomainError, DomainResult};

/// A user's learning progress entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningProgress {
    pub id: String,
    /// Id of the owning user
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_archived: bool,
    pub satisfaction_level: i32,
    pub created_at: DateTime<Utc>,
}

impl LearningProgress {
    /// Create a new, unarchived entry with the default satisfaction level
    pub fn new(user_id: String, title: String, description: String) -> Self {
        Self {
            id: String::new(),
            user_id,
            title,
            description,
            is_archived: false,
            satisfaction_level: DEFAULT_SATISFACTION_LEVEL,
            created_at: Utc::now(),
        }
    }

    /// Check the entry before it is stored.
    ///
    /// # Errors
    /// Validation error when the satisfaction level is outside 1..=5.
    pub fn validate(&self) -> DomainResult<()> {
        if !(MIN_SATISFACTION_LEVEL..=MAX_SATISFACTION_LEVEL).contains(&self.satisfaction_level) {
            return Err(DomainError::validation(format!(
                "Satisfaction level must be between {} and {}",
                MIN_SATISFACTION_LEVEL, MAX_SATISFACTION_LEVEL
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_defaults() {
        let progress = LearningProgress::new("u1".into(), "Knife skills".into(), String::new());
        assert!(!progress.is_archived);
        assert_eq!(progress.satisfaction_level, DEFAULT_SATISFACTION_LEVEL);
    }

    #[test]
    fn test_satisfaction_level_bounds() {
        let mut progress = LearningProgress::new("u1".into(), "Bread".into(), String::new());
        for level in [1, 3, 5] {
            progress.satisfaction_level = level;
            assert!(progress.validate().is_ok(), "level {level}");
        }
        for level in [0, 6, 99, -1] {
            progress.satisfaction_level = level;
            assert!(matches!(progress.validate(), Err(DomainError::Validation(_))), "level {level}");
        }
    }
}
