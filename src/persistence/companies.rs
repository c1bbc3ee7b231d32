//! Company listing and lookup, both returned through cursors.

use log::debug;
use sqlx::{Connection, PgConnection};

use super::cursor::{fetch_all_from, COMPANY_DETAIL_CURSOR, COMPANY_LIST_CURSOR};
use crate::types::company::{CompanyDetail, CompanySummary};

/// All listed companies, in the order the procedure returns them.
pub async fn list_companies(conn: &mut PgConnection) -> Result<Vec<CompanySummary>, sqlx::Error> {
    debug!("CALL get_company_details");
    let mut tx = conn.begin().await?;
    sqlx::query(&format!("CALL get_company_details('{COMPANY_LIST_CURSOR}')"))
        .execute(&mut *tx)
        .await?;
    let rows = fetch_all_from::<CompanySummary>(&mut *tx, COMPANY_LIST_CURSOR).await?;
    tx.commit().await?;
    Ok(rows)
}

/// Details of one company, or `None` when the cursor comes back empty.
pub async fn get_company_by_id(
    conn: &mut PgConnection,
    company_id: i32,
) -> Result<Option<CompanyDetail>, sqlx::Error> {
    debug!("CALL get_company_details_by_id({company_id})");
    let mut tx = conn.begin().await?;
    sqlx::query(&format!(
        "CALL get_company_details_by_id($1, '{COMPANY_DETAIL_CURSOR}')"
    ))
    .bind(company_id)
    .execute(&mut *tx)
    .await?;
    let rows = fetch_all_from::<CompanyDetail>(&mut *tx, COMPANY_DETAIL_CURSOR).await?;
    tx.commit().await?;
    Ok(rows.into_iter().next())
}
