//! Report database entity for SeaORM.
//!
//! `report_type` is stored as its text form (`POST` / `COMMENT`); a row with
//! any other value is reported as a malformed document.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::repository::base::Collection;
use domain::{Report, ReportType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub report_type: String,
    pub reported_content_id: String,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub content_owner_id: String,
    pub reported_by_id: String,
    pub resolved: bool,
    pub reported_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Collection for Entity {
    const NAME: &'static str = "reports";

    fn id_column() -> Column {
        Column::Id
    }
}

impl TryFrom<Model> for Report {
    type Error = DbErr;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let report_type: ReportType = model.report_type.parse().map_err(|_| {
            DbErr::Type(format!(
                "report {} has unknown report_type {:?}",
                model.id, model.report_type
            ))
        })?;

        Ok(Report {
            id: model.id,
            report_type,
            reported_content_id: model.reported_content_id,
            reason: model.reason,
            content_owner_id: model.content_owner_id,
            reported_by_id: model.reported_by_id,
            resolved: model.resolved,
            reported_at: model.reported_at,
        })
    }
}

impl From<Report> for ActiveModel {
    fn from(report: Report) -> Self {
        ActiveModel {
            id: Set(report.id),
            report_type: Set(report.report_type.as_str().to_string()),
            reported_content_id: Set(report.reported_content_id),
            reason: Set(report.reason),
            content_owner_id: Set(report.content_owner_id),
            reported_by_id: Set(report.reported_by_id),
            resolved: Set(report.resolved),
            reported_at: Set(report.reported_at),
        }
    }
}
