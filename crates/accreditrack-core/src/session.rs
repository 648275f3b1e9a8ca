//! # Session Issuer
//!
//! Derives a display session from an email and a role.
//!
//! No credential is checked. This is a naming convenience for the dashboard,
//! not an authentication boundary.

use crate::AccreditError;
use serde::{Deserialize, Serialize};

/// A logged-in user as shown by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub email: String,
    pub role: String,
    pub name: String,
}

/// Issue a session for `email` and `role`.
///
/// Both fields are required; an empty string counts as absent.
pub fn issue_session(email: Option<&str>, role: Option<&str>) -> Result<UserSession, AccreditError> {
    let (Some(email), Some(role)) = (
        email.filter(|e| !e.is_empty()),
        role.filter(|r| !r.is_empty()),
    ) else {
        return Err(AccreditError::ValidationError(
            "Email and role are required".to_string(),
        ));
    };

    Ok(UserSession {
        email: email.to_string(),
        role: role.to_string(),
        name: display_name(email),
    })
}

/// Local part of `email` with only its first character upper-cased.
///
/// Text without an `@` is used whole. The rest of the local part, including
/// punctuation and case, is left as-is.
#[must_use]
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
