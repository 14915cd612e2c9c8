//! Repository layer for data access.
//!
//! One repository per collection. Each exposes a fixed set of lookups plus
//! `save` (and `soft_delete` where the collection is soft-deletable).
//! Result ordering is whatever the store returns; callers must not rely on it.

pub mod base;
mod comment_repository;
mod cooking_post_repository;
pub mod entities;
mod learning_progress_repository;
mod media_repository;
mod notification_repository;
mod persistence;
mod report_repository;
mod task_completion_repository;
mod task_repository;
mod user_repository;

pub use base::{Collection, SoftDeleteCollection};
pub use comment_repository::{CommentRepository, CommentStore};
pub use cooking_post_repository::{CookingPostRepository, CookingPostStore};
pub use learning_progress_repository::{LearningProgressRepository, LearningProgressStore};
pub use media_repository::{MediaRepository, MediaStore};
pub use notification_repository::{NotificationRepository, NotificationStore};
pub use persistence::Persistence;
pub use report_repository::{ReportRepository, ReportStore};
pub use task_completion_repository::{TaskCompletionRepository, TaskCompletionStore};
pub use task_repository::{TaskRepository, TaskStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use cooking_post_repository::MockCookingPostRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use learning_progress_repository::MockLearningProgressRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use media_repository::MockMediaRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use notification_repository::MockNotificationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use report_repository::MockReportRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use task_completion_repository::MockTaskCompletionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use task_repository::MockTaskRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
