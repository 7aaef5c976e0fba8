use std::sync::LazyLock;

use regex::Regex;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,50}$").expect("valid username pattern"));

// Intentionally not RFC-5322: one `@`, a dot somewhere in the domain, no
// whitespace. The server re-validates on its side.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// User-correctable validation failure with its human-readable reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Username must be 3-50 characters (letters, numbers, underscore only)")]
    UsernameFormat,

    #[error("Please enter a valid email address")]
    EmailFormat,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Checks a username: 3-50 characters from `[A-Za-z0-9_]`, after trimming.
pub fn validate_username(value: &str) -> Result<(), FieldError> {
    if USERNAME_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::UsernameFormat)
    }
}

/// Checks an email address for a `local@domain.tld` shape, after trimming.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if EMAIL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldError::EmailFormat)
    }
}

/// Checks that the confirmation is non-empty and equal to the password.
pub fn validate_password_match(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() || password != confirm {
        Err(FieldError::PasswordMismatch)
    } else {
        Ok(())
    }
}

/// Checks the minimum password length, in characters, enforced at submit
/// time.
pub fn validate_password_length(password: &str, min_len: usize) -> Result<(), FieldError> {
    if password.chars().count() < min_len {
        Err(FieldError::PasswordTooShort)
    } else {
        Ok(())
    }
}

/// Advisory password strength score in `0..=5`.
///
/// One point each for: length >= 6, length >= 10, mixed case, a digit, a
/// non-alphanumeric character. Never blocks submission.
pub fn password_score(password: &str) -> u8 {
    let mut score = 0;
    let chars = password.chars().count();

    if chars >= 6 {
        score += 1;
    }
    if chars >= 10 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Visual tier for the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// Maps a `password_score` result onto a tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::None,
            1 | 2 => Self::Weak,
            3 => Self::Medium,
            _ => Self::Strong,
        }
    }

    /// CSS class applied to the strength bar.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::None => "strength-none",
            Self::Weak => "strength-weak",
            Self::Medium => "strength-medium",
            Self::Strong => "strength-strong",
        }
    }
}
