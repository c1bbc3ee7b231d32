pub mod company;
pub mod portfolio;
pub mod user;
