use thiserror::Error;

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric field received text that does not parse.
    #[error("invalid {field}: {input:?} is not a number")]
    InvalidNumber { field: &'static str, input: String },

    #[error("input closed while reading {0}")]
    UnexpectedEof(&'static str),
}

/// Text shown to the user when a buy or sell call fails.
///
/// Database errors show only the server's message (what the procedure
/// raised); anything else falls back to the driver's description.
pub fn failure_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.message().to_string(),
        other => other.to_string(),
    }
}
