use sqlx::FromRow;

/// Row of the portfolio cursor: user fields repeated on every row, joined
/// with at most one holding. The holding columns are null for a user who
/// owns nothing.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PortfolioRow {
    pub username: String,
    pub email: String,
    pub bank_account: String,
    pub contact_number: String,
    pub wallet: f64,
    pub company_id: Option<i32>,
    pub company_name: Option<String>,
    pub quantity: Option<i32>,
}

/// A single position borrowed out of a [`PortfolioRow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Holding<'a> {
    pub company_id: i32,
    pub company_name: &'a str,
    pub quantity: i32,
}

impl PortfolioRow {
    pub fn holding(&self) -> Option<Holding<'_>> {
        Some(Holding {
            company_id: self.company_id?,
            company_name: self.company_name.as_deref()?,
            quantity: self.quantity?,
        })
    }
}
