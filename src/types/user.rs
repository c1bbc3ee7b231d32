/// Signup fields, bound positionally to `users_signup`.
#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub username: String,
    pub password: String,
    pub email: String,
    pub bank_account: String,
    pub contact_number: String,
    pub wallet: f64,
}

/// Id the login procedure writes when no user matches.
pub const LOGIN_NOT_FOUND: i32 = 0;
