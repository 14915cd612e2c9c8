//! Shared fixtures: an in-memory SQLite store with migrations applied.

#![allow(dead_code)]

use chrono::Utc;

use common::DatabaseConfig;
use domain::{
    Comment, CookingPost, LearningProgress, Media, Notification, Report, ReportType, Task,
    TaskCompletion, User,
};
use store_service_lib::infra::Database;
use store_service_lib::repository::Persistence;

/// Fresh, fully migrated in-memory store.
pub async fn setup() -> (Database, Persistence) {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    let repos = Persistence::new(db.get_connection());
    (db, repos)
}

pub fn user(id: &str, username: &str, email: &str, deleted: bool) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: format!("hash-of-{}", id),
        first_name: String::new(),
        last_name: String::new(),
        created_at: Utc::now(),
        delete_status: deleted,
    }
}

pub fn post(id: &str, created_by: &str, deleted: bool) -> CookingPost {
    CookingPost {
        id: id.to_string(),
        title: format!("Post {}", id),
        description: "Slow-cooked ragu".to_string(),
        created_by_id: created_by.to_string(),
        created_at: Utc::now(),
        delete_status: deleted,
    }
}

pub fn comment(id: &str, on: &str, by: &str, deleted: bool) -> Comment {
    Comment {
        id: id.to_string(),
        content: "Looks great".to_string(),
        commented_on_id: on.to_string(),
        commented_by_id: by.to_string(),
        created_at: Utc::now(),
        delete_status: deleted,
    }
}

pub fn media(id: &str, post_id: &str, deleted: bool) -> Media {
    Media {
        id: id.to_string(),
        url: format!("https://cdn.example.com/{}.jpg", id),
        media_type: "image".to_string(),
        related_post_id: post_id.to_string(),
        delete_status: deleted,
    }
}

pub fn notification(id: &str, receiver: &str, deleted: bool) -> Notification {
    Notification {
        id: id.to_string(),
        message: "Someone liked your post".to_string(),
        receiver_id: receiver.to_string(),
        is_read: false,
        created_at: Utc::now(),
        delete_status: deleted,
    }
}

pub fn task(id: &str, task_type: &str, deleted: bool) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        description: String::new(),
        task_type: task_type.to_string(),
        delete_status: deleted,
    }
}

pub fn completion(id: &str, task_id: &str, by: &str, deleted: bool) -> TaskCompletion {
    TaskCompletion {
        id: id.to_string(),
        task_id: task_id.to_string(),
        completed_by_id: by.to_string(),
        completed_at: Utc::now(),
        delete_status: deleted,
    }
}

pub fn progress(id: &str, user_id: &str, archived: bool) -> LearningProgress {
    LearningProgress {
        id: id.to_string(),
        user_id: user_id.to_string(),
        title: format!("Progress {}", id),
        description: String::new(),
        is_archived: archived,
        satisfaction_level: 3,
        created_at: Utc::now(),
    }
}

pub fn report(id: &str, report_type: ReportType, owner: &str, reporter: &str) -> Report {
    Report {
        id: id.to_string(),
        report_type,
        reported_content_id: format!("content-{}", id),
        reason: "spam".to_string(),
        content_owner_id: owner.to_string(),
        reported_by_id: reporter.to_string(),
        resolved: false,
        reported_at: Utc::now(),
    }
}

/// Sorted ids, since lookups make no ordering promise.
pub fn ids<T, F: Fn(&T) -> &str>(items: &[T], id: F) -> Vec<String> {
    let mut ids: Vec<String> = items.iter().map(|item| id(item).to_string()).collect();
    ids.sort();
    ids
}
