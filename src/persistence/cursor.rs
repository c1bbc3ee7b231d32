//! Reading refcursor output parameters.
//!
//! A procedure opens a cursor under the name we pass it; the cursor lives
//! until the enclosing transaction ends, so the `CALL` and the `FETCH` must
//! share one transaction.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection};

pub(crate) const COMPANY_LIST_CURSOR: &str = "company_list_cursor";
pub(crate) const COMPANY_DETAIL_CURSOR: &str = "company_detail_cursor";
pub(crate) const PORTFOLIO_CURSOR: &str = "portfolio_cursor";

/// Drain every remaining row of `cursor`.
pub(crate) async fn fetch_all_from<T>(conn: &mut PgConnection, cursor: &str) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = format!("FETCH ALL FROM {cursor}");
    // The statement's shape depends on a portal that only exists in this transaction.
    sqlx::query_as::<_, T>(&sql)
        .persistent(false)
        .fetch_all(conn)
        .await
}
