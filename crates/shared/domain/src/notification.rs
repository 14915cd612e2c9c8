//! Notification domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SoftDelete;

/// A notification addressed to a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    /// Id of the receiving user
    pub receiver_id: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub delete_status: bool,
}

impl SoftDelete for Notification {
    fn delete_status(&self) -> bool {
        self.delete_status
    }
}
