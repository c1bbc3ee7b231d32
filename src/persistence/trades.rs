//! Buy and sell procedures. Pricing, balance and availability checks are
//! done by the procedures; a rejected trade surfaces as a database error.

use log::debug;
use sqlx::PgConnection;

/// Call `buy_stock`; the procedure debits the wallet and credits the holding.
pub async fn buy_stock(
    conn: &mut PgConnection,
    user_id: i32,
    company_id: i32,
    quantity: i32,
) -> Result<(), sqlx::Error> {
    debug!("CALL buy_stock({user_id}, {company_id}, {quantity})");
    sqlx::query("CALL buy_stock($1, $2, $3)")
        .bind(user_id)
        .bind(company_id)
        .bind(quantity)
        .execute(conn)
        .await?;
    Ok(())
}

/// Call `sell_stock`; the procedure reduces the holding and credits the wallet.
pub async fn sell_stock(
    conn: &mut PgConnection,
    user_id: i32,
    company_id: i32,
    quantity: i32,
) -> Result<(), sqlx::Error> {
    debug!("CALL sell_stock({user_id}, {company_id}, {quantity})");
    sqlx::query("CALL sell_stock($1, $2, $3)")
        .bind(user_id)
        .bind(company_id)
        .bind(quantity)
        .execute(conn)
        .await?;
    Ok(())
}
