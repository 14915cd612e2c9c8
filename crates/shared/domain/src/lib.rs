//! Domain layer - Core entities and value objects of the skill-sharing backend.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Every persisted document type lives here together with the authentication
//! principal produced from a user document.

pub mod constants;
pub mod content;
pub mod error;
pub mod notification;
pub mod password;
pub mod principal;
pub mod progress;
pub mod report;
pub mod task;
pub mod user;

pub use constants::*;
pub use content::{Comment, CookingPost, Media};
pub use error::{DomainError, DomainResult};
pub use notification::Notification;
pub use password::Password;
pub use principal::Principal;
pub use progress::LearningProgress;
pub use report::{Report, ReportType};
pub use task::{Task, TaskCompletion};
pub use user::User;

/// Documents that carry a `delete_status` flag.
///
/// Soft deletion only ever moves a document from live to deleted.
pub trait SoftDelete {
    /// Current value of the deletion flag
    fn delete_status(&self) -> bool;

    /// Check if the document is soft deleted
    fn is_deleted(&self) -> bool {
        self.delete_status()
    }

    /// Check if the document is live (not deleted)
    fn is_active(&self) -> bool {
        !self.delete_status()
    }
}

/// Generate a fresh opaque document identifier.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
