//! Account service: credential hashing, sign-up, and sign-in.
//!
//! TRADE-OFFS
//! ==========
//! Sign-in reports a single `InvalidCredentials` error for unknown email and
//! wrong password alike, so the auth form never discloses which half failed.

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;

use rand::Rng;
use records::{SessionUser, SignupRole, UserRole};
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};

use super::session::bytes_to_hex;

const SALT_LEN: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    /// A stored role value no longer parses; indicates schema drift.
    #[error("corrupt account row: {0}")]
    Corrupt(#[from] records::UnknownVariant),
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Hash a password into `salt$digest` form with a fresh random salt.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::rng().random();
    let salt_hex = bytes_to_hex(&salt);
    format!("{salt_hex}${}", digest_with_salt(&salt_hex, password))
}

/// Check a password against a stored `salt$digest` hash.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest)) = stored.split_once('$') else {
        return false;
    };
    digest_with_salt(salt_hex, password) == digest
}

fn digest_with_salt(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Create an account and return it as a session user.
///
/// The sign-up role vocabulary is mapped onto the stored vocabulary here and
/// nowhere else; see [`SignupRole::stored_role`].
pub async fn sign_up(
    pool: &PgPool,
    email: &str,
    password: &str,
    username: &str,
    role: SignupRole,
) -> Result<SessionUser, AccountError> {
    let normalized = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
    let stored_role = role.stored_role();
    let password_hash = hash_password(password);

    let row = sqlx::query(
        r"INSERT INTO users (email, username, password_hash, role)
          VALUES ($1, $2, $3, $4::user_role_enum)
          ON CONFLICT (email) DO NOTHING
          RETURNING id",
    )
    .bind(&normalized)
    .bind(username)
    .bind(&password_hash)
    .bind(stored_role.as_str())
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(AccountError::EmailTaken);
    };

    Ok(SessionUser {
        id: row.get("id"),
        email: normalized,
        username: username.to_owned(),
        role: stored_role,
    })
}

/// Verify credentials and return the account as a session user.
pub async fn sign_in(pool: &PgPool, email: &str, password: &str) -> Result<SessionUser, AccountError> {
    let normalized = normalize_email(email).ok_or(AccountError::InvalidCredentials)?;

    let row = sqlx::query(
        r"SELECT id, email, username, password_hash, role::text AS role
          FROM users
          WHERE email = $1",
    )
    .bind(&normalized)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Err(AccountError::InvalidCredentials);
    };

    if !verify_password(password, &row.get::<String, _>("password_hash")) {
        return Err(AccountError::InvalidCredentials);
    }

    let role = UserRole::parse(&row.get::<String, _>("role"))?;
    Ok(SessionUser {
        id: row.get("id"),
        email: row.get("email"),
        username: row.get("username"),
        role,
    })
}
