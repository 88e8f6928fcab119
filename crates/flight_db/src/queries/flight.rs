//! Running catalog templates.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::models::{QueryParams, Record};
use crate::queries::QueryTemplate;

/// Bind `params` into `template` by name and fetch every matching row.
///
/// One connection is taken from the pool for the duration of the call and
/// handed back when it returns, on success or failure. Rows come back in
/// whatever order SQLite produces them.
pub async fn fetch_records(
    pool: &SqlitePool,
    template: &QueryTemplate,
    params: &QueryParams,
) -> DbResult<Vec<Record>> {
    let mut query = sqlx::query(template.sql);
    for &name in template.params {
        let value = params.get(name).ok_or(DbError::MissingParameter {
            query: template.name,
            name,
        })?;
        query = value.bind_to(query);
    }

    let mut conn = pool.acquire().await?;
    let rows = query.fetch_all(&mut *conn).await?;
    debug!(query = template.name, rows = rows.len(), "query complete");

    let records = rows
        .iter()
        .map(Record::from_row)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}
