//! Tasks and their completions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SoftDelete;

/// A learning task. `task_type` is a free-form discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub delete_status: bool,
}

/// Record of a user completing a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCompletion {
    pub id: String,
    pub task_id: String,
    pub completed_by_id: String,
    pub completed_at: DateTime<Utc>,
    #[serde(default)]
    pub delete_status: bool,
}

impl SoftDelete for Task {
    fn delete_status(&self) -> bool {
        self.delete_status
    }
}

impl SoftDelete for TaskCompletion {
    fn delete_status(&self) -> bool {
        self.delete_status
    }
}
