//! Terminal menu: choice parsing, prompting, rendering and the session loop.

use crate::error::AppError;

mod prompt;
pub mod render;
mod session;

pub use prompt::Prompter;
pub use session::{Flow, Session};

pub const MENU_TEXT: &str = "Choose an option:
 1. Signup
 2. Login
 3. View Company List
 4. View Company Details
 5. Buy Stocks
 6. Sell Stocks
 7. View Portfolio
 8. Exit";

/// A line typed at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Signup,
    Login,
    ListCompanies,
    CompanyDetails,
    Buy,
    Sell,
    Portfolio,
    Exit,
    /// Anything that is not one of the eight codes.
    Invalid,
}

impl MenuChoice {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Signup,
            2 => Self::Login,
            3 => Self::ListCompanies,
            4 => Self::CompanyDetails,
            5 => Self::Buy,
            6 => Self::Sell,
            7 => Self::Portfolio,
            8 => Self::Exit,
            _ => Self::Invalid,
        }
    }

    /// Numbers outside 1-8 are `Invalid`; text that is not a number is an error.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        input
            .trim()
            .parse::<i64>()
            .map(Self::from_code)
            .map_err(|_| AppError::InvalidNumber {
                field: "menu choice",
                input: input.to_string(),
            })
    }
}
