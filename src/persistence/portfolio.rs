//! Portfolio procedure: user fields joined with holdings.

use log::debug;
use sqlx::{Connection, PgConnection};

use super::cursor::{fetch_all_from, PORTFOLIO_CURSOR};
use crate::types::portfolio::PortfolioRow;

/// Rows for `user_id`; empty when the user does not exist.
pub async fn view_portfolio(
    conn: &mut PgConnection,
    user_id: i32,
) -> Result<Vec<PortfolioRow>, sqlx::Error> {
    debug!("CALL view_portfolio({user_id})");
    let mut tx = conn.begin().await?;
    sqlx::query(&format!("CALL view_portfolio($1, '{PORTFOLIO_CURSOR}')"))
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
    let rows = fetch_all_from::<PortfolioRow>(&mut *tx, PORTFOLIO_CURSOR).await?;
    tx.commit().await?;
    Ok(rows)
}
