//! Report repository.
//!
//! Reports are resolved rather than deleted; no lookup filters on deletion.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Select};
use tracing::debug;

use super::base::{assign_id, malformed};
use super::entities::report::{self, ActiveModel, Entity as ReportEntity};
use common::AppResult;
use domain::{Report, ReportType};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// List reports of one type
    async fn find_by_report_type(&self, report_type: ReportType) -> AppResult<Vec<Report>>;

    /// List reports against content owned by a user
    async fn find_by_content_owner(&self, owner_id: &str) -> AppResult<Vec<Report>>;

    /// List reports raised by a user
    async fn find_by_reported_by(&self, reporter_id: &str) -> AppResult<Vec<Report>>;

    /// Persist a new report, assigning an id when it has none
    async fn save(&self, report: Report) -> AppResult<Report>;
}

/// SeaORM-backed [`ReportRepository`]
#[derive(Clone)]
pub struct ReportStore {
    db: DatabaseConnection,
}

impl ReportStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch(&self, query: Select<ReportEntity>) -> AppResult<Vec<Report>> {
        let models = query.all(&self.db).await?;
        models
            .into_iter()
            .map(|model| Report::try_from(model).map_err(malformed))
            .collect()
    }
}

#[async_trait]
impl ReportRepository for ReportStore {
    async fn find_by_report_type(&self, report_type: ReportType) -> AppResult<Vec<Report>> {
        debug!(report_type = report_type.as_str(), "reports by type");
        self.fetch(ReportEntity::find().filter(report::Column::ReportType.eq(report_type.as_str())))
            .await
    }

    async fn find_by_content_owner(&self, owner_id: &str) -> AppResult<Vec<Report>> {
        debug!(owner_id, "reports by content owner");
        self.fetch(ReportEntity::find().filter(report::Column::ContentOwnerId.eq(owner_id)))
            .await
    }

    async fn find_by_reported_by(&self, reporter_id: &str) -> AppResult<Vec<Report>> {
        debug!(reporter_id, "reports by reporter");
        self.fetch(ReportEntity::find().filter(report::Column::ReportedById.eq(reporter_id)))
            .await
    }

    async fn save(&self, mut report: Report) -> AppResult<Report> {
        assign_id(&mut report.id);
        let model = ActiveModel::from(report).insert(&self.db).await?;
        Report::try_from(model).map_err(malformed)
    }
}
