//! Stored-procedure tests against a live PostgreSQL.
//!
//! Run with `DATABASE_URL` set: `cargo test -- --ignored`.

use digital_stock_market::persistence::{
    buy_stock, get_company_by_id, list_companies, login, sell_stock, signup, view_portfolio,
};
use digital_stock_market::types::user::Signup;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

fn alice() -> Signup {
    Signup {
        username: "alice".into(),
        password: "s3cret".into(),
        email: "alice@example.com".into(),
        bank_account: "GB00-1234".into(),
        contact_number: "555-0100".into(),
        wallet: 1000.0,
    }
}

async fn seed_companies(conn: &mut PgConnection) {
    sqlx::query(
        "INSERT INTO companies (company_name, stock_price, stock_quantity) \
         VALUES ('Acme', 10.0, 500), ('Globex', 750.0, 2)",
    )
    .execute(conn)
    .await
    .unwrap();
}

async fn company_id(conn: &mut PgConnection, name: &str) -> i32 {
    sqlx::query_scalar("SELECT company_id FROM companies WHERE company_name = $1")
        .bind(name)
        .fetch_one(conn)
        .await
        .unwrap()
}

fn db_message(err: &sqlx::Error) -> String {
    err.as_database_error()
        .map(|e| e.message().to_string())
        .unwrap_or_default()
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn login_matches_only_correct_password(mut conn: PoolConnection<Postgres>) {
    signup(&mut conn, &alice()).await.unwrap();

    let user_id = login(&mut conn, "alice", "s3cret").await.unwrap();
    assert!(user_id.is_some_and(|id| id > 0));
    assert_eq!(login(&mut conn, "alice", "wrong").await.unwrap(), None);
    assert_eq!(login(&mut conn, "nobody", "s3cret").await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn duplicate_signup_is_rejected(mut conn: PoolConnection<Postgres>) {
    signup(&mut conn, &alice()).await.unwrap();
    assert!(signup(&mut conn, &alice()).await.is_err());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn company_cursors_return_rows(mut conn: PoolConnection<Postgres>) {
    seed_companies(&mut conn).await;

    let companies = list_companies(&mut conn).await.unwrap();
    let names: Vec<_> = companies.iter().map(|c| c.company_name.as_str()).collect();
    assert_eq!(names, ["Acme", "Globex"]);

    let acme = get_company_by_id(&mut conn, companies[0].company_id).await.unwrap().unwrap();
    assert_eq!(acme.stock_price, 10.0);
    assert_eq!(acme.stock_quantity, 500);

    assert!(get_company_by_id(&mut conn, -1).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn buy_and_sell_update_portfolio(mut conn: PoolConnection<Postgres>) {
    seed_companies(&mut conn).await;
    signup(&mut conn, &alice()).await.unwrap();
    let user_id = login(&mut conn, "alice", "s3cret").await.unwrap().unwrap();
    let acme = company_id(&mut conn, "Acme").await;

    buy_stock(&mut conn, user_id, acme, 30).await.unwrap();
    sell_stock(&mut conn, user_id, acme, 10).await.unwrap();

    let rows = view_portfolio(&mut conn, user_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].wallet, 1000.0 - 300.0 + 100.0);
    let holding = rows[0].holding().unwrap();
    assert_eq!(holding.company_name, "Acme");
    assert_eq!(holding.quantity, 20);

    let detail = get_company_by_id(&mut conn, acme).await.unwrap().unwrap();
    assert_eq!(detail.stock_quantity, 480);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn rejected_trades_raise_database_errors(mut conn: PoolConnection<Postgres>) {
    seed_companies(&mut conn).await;
    signup(&mut conn, &alice()).await.unwrap();
    let user_id = login(&mut conn, "alice", "s3cret").await.unwrap().unwrap();
    let globex = company_id(&mut conn, "Globex").await;

    let err = buy_stock(&mut conn, user_id, globex, 2).await.unwrap_err();
    assert!(db_message(&err).starts_with("Insufficient wallet balance"));

    let err = buy_stock(&mut conn, user_id, globex, 3).await.unwrap_err();
    assert!(db_message(&err).starts_with("Only 2 stocks available"));

    let err = sell_stock(&mut conn, user_id, globex, 1).await.unwrap_err();
    assert!(db_message(&err).starts_with("Insufficient stocks"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn portfolio_without_holdings_has_header_row(mut conn: PoolConnection<Postgres>) {
    signup(&mut conn, &alice()).await.unwrap();
    let user_id = login(&mut conn, "alice", "s3cret").await.unwrap().unwrap();

    let rows = view_portfolio(&mut conn, user_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "alice");
    assert!(rows[0].holding().is_none());

    assert!(view_portfolio(&mut conn, user_id + 1000).await.unwrap().is_empty());
}
