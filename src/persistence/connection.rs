//! The single connection held for the life of a session.

use log::info;
use sqlx::{Connection, PgConnection};

use crate::gateway::MarketGateway;
use crate::types::company::{CompanyDetail, CompanySummary};
use crate::types::portfolio::PortfolioRow;
use crate::types::user::Signup;

/// Open one connection to `database_url`.
pub async fn connect(database_url: &str) -> Result<PgConnection, sqlx::Error> {
    let conn = PgConnection::connect(database_url).await?;
    info!("connected to database");
    Ok(conn)
}

/// Apply the embedded schema and procedures.
pub async fn run_migrations(conn: &mut PgConnection) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(conn).await?;
    info!("migrations applied");
    Ok(())
}

/// [`MarketGateway`] backed by a live PostgreSQL connection.
pub struct PgGateway {
    conn: PgConnection,
}

impl PgGateway {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Close the connection gracefully.
    pub async fn close(self) -> Result<(), sqlx::Error> {
        self.conn.close().await
    }
}

impl MarketGateway for PgGateway {
    async fn signup(&mut self, signup: &Signup) -> Result<(), sqlx::Error> {
        super::signup(&mut self.conn, signup).await
    }

    async fn login(&mut self, username: &str, password: &str) -> Result<Option<i32>, sqlx::Error> {
        super::login(&mut self.conn, username, password).await
    }

    async fn list_companies(&mut self) -> Result<Vec<CompanySummary>, sqlx::Error> {
        super::list_companies(&mut self.conn).await
    }

    async fn company_by_id(&mut self, company_id: i32) -> Result<Option<CompanyDetail>, sqlx::Error> {
        super::get_company_by_id(&mut self.conn, company_id).await
    }

    async fn buy_stock(&mut self, user_id: i32, company_id: i32, quantity: i32) -> Result<(), sqlx::Error> {
        super::buy_stock(&mut self.conn, user_id, company_id, quantity).await
    }

    async fn sell_stock(&mut self, user_id: i32, company_id: i32, quantity: i32) -> Result<(), sqlx::Error> {
        super::sell_stock(&mut self.conn, user_id, company_id, quantity).await
    }

    async fn portfolio(&mut self, user_id: i32) -> Result<Vec<PortfolioRow>, sqlx::Error> {
        super::view_portfolio(&mut self.conn, user_id).await
    }
}
