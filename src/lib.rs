//! Terminal client for the Digital Stock Market database.
//!
//! The menu in [`menu`] collects input and hands each request to a
//! [`gateway::MarketGateway`]; the PostgreSQL implementation in
//! [`persistence`] forwards every request to a stored procedure.

pub mod config;
pub mod error;
pub mod gateway;
pub mod menu;
pub mod persistence;
pub mod types;
