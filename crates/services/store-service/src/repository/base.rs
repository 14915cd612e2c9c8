//! Collection descriptors and shared soft-delete query helpers.
//!
//! Every persistent entity is described by a [`Collection`] (table name and id
//! column). Entities that carry a `delete_status` flag additionally implement
//! [`SoftDeleteCollection`], which yields the "live" query shapes used by the
//! per-entity repositories: every live query is the raw query with
//! `delete_status = false` AND'd in.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Select};

use common::AppResult;

/// Describes a stored collection: its table and identifier column.
pub trait Collection: EntityTrait {
    /// Collection (table) name, used in log output
    const NAME: &'static str;

    /// Column holding the opaque document id
    fn id_column() -> Self::Column;
}

/// A collection whose documents are soft deleted through a boolean flag.
pub trait SoftDeleteCollection: Collection {
    /// Column holding the deletion flag
    fn delete_status_column() -> Self::Column;

    /// All live documents (`delete_status = false`)
    fn find_live() -> Select<Self> {
        Self::find().filter(Self::delete_status_column().eq(false))
    }

    /// Live point read by id
    fn find_live_by_id(id: &str) -> Select<Self> {
        Self::find_live().filter(Self::id_column().eq(id))
    }
}

/// Run a query and convert every row into its domain type.
pub(crate) async fn fetch_all<E, T, C>(query: Select<E>, db: &C) -> AppResult<Vec<T>>
where
    E: EntityTrait,
    T: From<E::Model>,
    C: ConnectionTrait,
{
    let models = query.all(db).await?;
    Ok(models.into_iter().map(T::from).collect())
}

/// Run a query and convert the first row, if any, into its domain type.
pub(crate) async fn fetch_one<E, T, C>(query: Select<E>, db: &C) -> AppResult<Option<T>>
where
    E: EntityTrait,
    T: From<E::Model>,
    C: ConnectionTrait,
{
    let model = query.one(db).await?;
    Ok(model.map(T::from))
}

/// Flip `delete_status` to true on a live document.
///
/// Returns `false` when no live document has that id. Already deleted
/// documents are left untouched, so deletion never reverses.
pub(crate) async fn soft_delete<E, C>(db: &C, id: &str) -> AppResult<bool>
where
    E: SoftDeleteCollection,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(E::delete_status_column(), Expr::value(true))
        .filter(E::id_column().eq(id))
        .filter(E::delete_status_column().eq(false))
        .exec(db)
        .await?;

    tracing::debug!(collection = E::NAME, id, deleted = result.rows_affected > 0, "soft delete");
    Ok(result.rows_affected > 0)
}

/// Give a new document an id if it has none yet.
pub(crate) fn assign_id(id: &mut String) {
    if id.is_empty() {
        *id = domain::new_document_id();
    }
}

/// Map a row conversion failure onto a store failure.
pub(crate) fn malformed(err: DbErr) -> common::AppError {
    tracing::warn!("Malformed document: {}", err);
    common::AppError::Database(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    use crate::repository::entities::{task_completion, user};

    #[test]
    fn test_live_query_filters_on_delete_status() {
        let sql = user::Entity::find_live()
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""delete_status""#), "{sql}");
        assert!(sql.to_uppercase().contains("FALSE"), "{sql}");
    }

    #[test]
    fn test_live_by_id_combines_both_predicates() {
        let sql = task_completion::Entity::find_live_by_id("abc")
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""delete_status""#), "{sql}");
        assert!(sql.contains("'abc'"), "{sql}");
    }

    #[test]
    fn test_assign_id_keeps_existing_id() {
        let mut existing = "fixed".to_string();
        assign_id(&mut existing);
        assert_eq!(existing, "fixed");

        let mut fresh = String::new();
        assign_id(&mut fresh);
        assert!(!fresh.is_empty());
    }
}
