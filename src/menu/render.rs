//! Text output for procedure results.

use std::io::{self, Write};

use crate::types::company::{CompanyDetail, CompanySummary};
use crate::types::portfolio::PortfolioRow;

const ID_COLUMN_WIDTH: usize = 50;

pub fn company_list(out: &mut impl Write, companies: &[CompanySummary]) -> io::Result<()> {
    writeln!(out, "{:<ID_COLUMN_WIDTH$}{}", "Company ID", "Company Name")?;
    for company in companies {
        writeln!(out, "{:<ID_COLUMN_WIDTH$}{}", company.company_id, company.company_name)?;
    }
    Ok(())
}

pub fn company_detail(
    out: &mut impl Write,
    company_id: i32,
    detail: Option<&CompanyDetail>,
) -> io::Result<()> {
    match detail {
        Some(company) => {
            writeln!(out, "Company ID: {}", company.company_id)?;
            writeln!(out, "Company Name: {}", company.company_name)?;
            writeln!(out, "Stock Price: {}", company.stock_price)?;
            writeln!(out, "Stock Quantity: {}", company.stock_quantity)
        }
        None => writeln!(out, "No company found with ID: {company_id}"),
    }
}

/// User header once (taken from the first row), then one block per holding.
pub fn portfolio(out: &mut impl Write, user_id: i32, rows: &[PortfolioRow]) -> io::Result<()> {
    let Some(first) = rows.first() else {
        return writeln!(out, "No portfolio found for user ID: {user_id}");
    };
    writeln!(out, "Username: {}", first.username)?;
    writeln!(out, "Email: {}", first.email)?;
    writeln!(out, "Bank Account: {}", first.bank_account)?;
    writeln!(out, "Contact Number: {}", first.contact_number)?;
    writeln!(out, "Wallet: {}", first.wallet)?;
    for holding in rows.iter().filter_map(PortfolioRow::holding) {
        writeln!(out, "Company ID: {}", holding.company_id)?;
        writeln!(out, "Company Name: {}", holding.company_name)?;
        writeln!(out, "Quantity: {}", holding.quantity)?;
        writeln!(out)?;
    }
    Ok(())
}
