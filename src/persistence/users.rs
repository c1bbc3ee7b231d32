//! Signup and login procedures.

use log::debug;
use sqlx::PgConnection;

use crate::types::user::{Signup, LOGIN_NOT_FOUND};

/// Call `users_signup`. Constraint violations (duplicate username, negative
/// wallet) come back as database errors.
pub async fn signup(conn: &mut PgConnection, signup: &Signup) -> Result<(), sqlx::Error> {
    debug!("CALL users_signup for {}", signup.username);
    sqlx::query("CALL users_signup($1, $2, $3, $4, $5, $6)")
        .bind(&signup.username)
        .bind(&signup.password)
        .bind(&signup.email)
        .bind(&signup.bank_account)
        .bind(&signup.contact_number)
        .bind(signup.wallet)
        .execute(conn)
        .await?;
    Ok(())
}

/// Call `user_login` and read its output id. Returns `None` for the
/// not-found sentinel.
pub async fn login(
    conn: &mut PgConnection,
    username: &str,
    password: &str,
) -> Result<Option<i32>, sqlx::Error> {
    debug!("CALL user_login for {username}");
    let user_id = sqlx::query_scalar::<_, Option<i32>>("CALL user_login($1, $2, NULL)")
        .bind(username)
        .bind(password)
        .fetch_one(conn)
        .await?;
    Ok(user_id.filter(|&id| id != LOGIN_NOT_FOUND))
}
