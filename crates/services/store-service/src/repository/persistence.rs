//! Central access point to every repository over one connection pool.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{
    CommentRepository, CommentStore, CookingPostRepository, CookingPostStore,
    LearningProgressRepository, LearningProgressStore, MediaRepository, MediaStore,
    NotificationRepository, NotificationStore, ReportRepository, ReportStore,
    TaskCompletionRepository, TaskCompletionStore, TaskRepository, TaskStore, UserRepository,
    UserStore,
};

/// Holds one store per collection, all sharing the same connection.
#[derive(Clone)]
pub struct Persistence {
    users: Arc<UserStore>,
    cooking_posts: Arc<CookingPostStore>,
    comments: Arc<CommentStore>,
    media: Arc<MediaStore>,
    notifications: Arc<NotificationStore>,
    tasks: Arc<TaskStore>,
    task_completions: Arc<TaskCompletionStore>,
    learning_progresses: Arc<LearningProgressStore>,
    reports: Arc<ReportStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            cooking_posts: Arc::new(CookingPostStore::new(db.clone())),
            comments: Arc::new(CommentStore::new(db.clone())),
            media: Arc::new(MediaStore::new(db.clone())),
            notifications: Arc::new(NotificationStore::new(db.clone())),
            tasks: Arc::new(TaskStore::new(db.clone())),
            task_completions: Arc::new(TaskCompletionStore::new(db.clone())),
            learning_progresses: Arc::new(LearningProgressStore::new(db.clone())),
            reports: Arc::new(ReportStore::new(db)),
        }
    }

    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    pub fn cooking_posts(&self) -> Arc<dyn CookingPostRepository> {
        self.cooking_posts.clone()
    }

    pub fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comments.clone()
    }

    pub fn media(&self) -> Arc<dyn MediaRepository> {
        self.media.clone()
    }

    pub fn notifications(&self) -> Arc<dyn NotificationRepository> {
        self.notifications.clone()
    }

    pub fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.tasks.clone()
    }

    pub fn task_completions(&self) -> Arc<dyn TaskCompletionRepository> {
        self.task_completions.clone()
    }

    pub fn learning_progresses(&self) -> Arc<dyn LearningProgressRepository> {
        self.learning_progresses.clone()
    }

    pub fn reports(&self) -> Arc<dyn ReportRepository> {
        self.reports.clone()
    }
}
