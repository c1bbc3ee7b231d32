//! The seam between the menu and the database.

use crate::types::company::{CompanyDetail, CompanySummary};
use crate::types::portfolio::PortfolioRow;
use crate::types::user::Signup;

/// One method per stored procedure the menu can invoke.
///
/// Implementations forward the request unchanged; balance checks, quantity
/// checks and pricing happen behind the call.
#[allow(async_fn_in_trait)]
pub trait MarketGateway {
    async fn signup(&mut self, signup: &Signup) -> Result<(), sqlx::Error>;

    /// `None` when the credentials match no user.
    async fn login(&mut self, username: &str, password: &str) -> Result<Option<i32>, sqlx::Error>;

    async fn list_companies(&mut self) -> Result<Vec<CompanySummary>, sqlx::Error>;

    async fn company_by_id(&mut self, company_id: i32) -> Result<Option<CompanyDetail>, sqlx::Error>;

    async fn buy_stock(&mut self, user_id: i32, company_id: i32, quantity: i32) -> Result<(), sqlx::Error>;

    async fn sell_stock(&mut self, user_id: i32, company_id: i32, quantity: i32) -> Result<(), sqlx::Error>;

    async fn portfolio(&mut self, user_id: i32) -> Result<Vec<PortfolioRow>, sqlx::Error>;
}
