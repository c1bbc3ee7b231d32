use std::io;
use std::process::ExitCode;

use clap::Parser;
use digital_stock_market::config::Config;
use digital_stock_market::error::AppError;
use digital_stock_market::menu::Session;
use digital_stock_market::persistence::{self, PgGateway};
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("session aborted: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let mut conn = persistence::connect(&config.database_url).await?;
    if config.migrate {
        persistence::run_migrations(&mut conn).await?;
    }

    let mut session = Session::new(PgGateway::new(conn), io::stdin().lock(), io::stdout().lock());
    session.run().await?;

    let (gateway, _) = session.into_parts();
    gateway.close().await?;
    info!("connection closed");
    Ok(())
}
