//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models. Each
//! entity also registers itself as a [`Collection`](super::base::Collection)
//! so the shared soft-delete helpers can address its id and deletion columns.

pub mod comment;
pub mod cooking_post;
pub mod learning_progress;
pub mod media;
pub mod notification;
pub mod report;
pub mod task;
pub mod task_completion;
pub mod user;
