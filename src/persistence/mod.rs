//! Database layer: connection, migrations, and one call per stored procedure.

mod companies;
mod connection;
mod cursor;
mod portfolio;
mod trades;
mod users;

pub use companies::{get_company_by_id, list_companies};
pub use connection::{connect, run_migrations, PgGateway};
pub use portfolio::view_portfolio;
pub use trades::{buy_stock, sell_stock};
pub use users::{login, signup};
