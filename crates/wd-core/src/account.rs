//! Account domain types.
//!
//! Covers the root operator account created during setup and the
//! authenticated console session.

use chrono::{DateTime, Utc};

use crate::security::SecretString;

/// An authenticated console user.
///
/// 已登录的控制台用户。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_system_root: bool,
}

/// A login session issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Whether the session has expired relative to `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Form input for creating the root account.
///
/// The password is validated locally with the same rules the backend
/// enforces, then submitted once.
#[derive(Debug)]
pub struct RootAccountDraft {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

/// Credential artifact returned when the root account is created.
///
/// The PEM content is handed to the operator as a one-time download and is
/// never persisted by the console.
///
/// 创建根账户时返回的凭证文件，控制台不落盘。
#[derive(Debug)]
pub struct RootCredential {
    pub pem: SecretString,
    pub filename: String,
    pub algorithm: String,
    pub mode: String,
    pub message: String,
}

/// Validation failures for the root account form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootAccountError {
    #[error("username is required")]
    UsernameRequired,

    #[error("email address is invalid")]
    EmailInvalid,

    #[error("email must not exceed {max} characters")]
    EmailTooLong { max: usize },

    #[error(transparent)]
    Password(#[from] PasswordPolicyError),
}

/// Password rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    #[error("password must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("password must not exceed {max} characters")]
    TooLong { max: usize },

    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("password must contain at least one number")]
    MissingDigit,
}

impl RootAccountDraft {
    pub fn validate(&self) -> Result<(), RootAccountError> {
        if self.username.trim().is_empty() {
            return Err(RootAccountError::UsernameRequired);
        }
        validate_email(&self.email)?;
        validate_password(self.password.expose())?;
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), RootAccountError> {
    if email.len() > MAX_EMAIL_LEN {
        return Err(RootAccountError::EmailTooLong { max: MAX_EMAIL_LEN });
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(RootAccountError::EmailInvalid),
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(RootAccountError::EmailInvalid);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(RootAccountError::EmailInvalid);
    }
    Ok(())
}

/// Root account password policy: 8 to 128 characters with at least one
/// uppercase letter, one lowercase letter and one digit.
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(PasswordPolicyError::TooLong {
            max: MAX_PASSWORD_LEN,
        });
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }
    Ok(())
}

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;
const MAX_EMAIL_LEN: usize = 254;
