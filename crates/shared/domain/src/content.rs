//! Cooking posts and the documents hanging off them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SoftDelete;

/// A cooking post created by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookingPost {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Id of the creating user
    pub created_by_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub delete_status: bool,
}

/// A comment left by a user on a cooking post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    /// Id of the post commented on
    pub commented_on_id: String,
    /// Id of the commenting user
    pub commented_by_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub delete_status: bool,
}

/// A media attachment (image or video) of a cooking post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub url: String,
    pub media_type: String,
    /// Id of the post the media belongs to
    pub related_post_id: String,
    #[serde(default)]
    pub delete_status: bool,
}

impl SoftDelete for CookingPost {
    fn delete_status(&self) -> bool {
        self.delete_status
    }
}

impl SoftDelete for Comment {
    fn delete_status(&self) -> bool {
        self.delete_status
    }
}

impl SoftDelete for Media {
    fn delete_status(&self) -> bool {
        self.delete_status
    }
}
