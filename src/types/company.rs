use sqlx::FromRow;

/// One row of the company listing cursor.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CompanySummary {
    pub company_id: i32,
    pub company_name: String,
}

/// Company detail cursor row. `stock_quantity` is the number of units still
/// available for purchase.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CompanyDetail {
    pub company_id: i32,
    pub company_name: String,
    pub stock_price: f64,
    pub stock_quantity: i32,
}
