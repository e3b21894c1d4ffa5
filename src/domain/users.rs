//! User directory aggregate: identifiers, emails and the `/api/users/{id}`
//! payload.

use derive_more::{Display, From, Into};
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, ParseResult};

/// Value Object - user identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize,
)]
pub struct UserId(u32);

impl UserId {
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse the raw text of a number input.
    pub fn parse(raw: &str) -> ParseResult<Self> {
        raw.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| AppError::ValidationError(format!("'{raw}' is not a user id")))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self(1)
    }
}

/// Value Object - email address as returned by the directory
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    data: UserRecord,
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    email: Email,
}

/// Extract `data.email` from a user response body. Every other field is
/// ignored.
pub fn parse_user_email(body: &str) -> ParseResult<Email> {
    serde_json::from_str::<UserEnvelope>(body)
        .map(|envelope| envelope.data.email)
        .map_err(|e| AppError::ParseError(format!("Failed to parse user JSON: {e}")))
}

/// Source of user emails
pub trait UserRepository {
    fn fetch_email(&self, id: UserId) -> LocalBoxFuture<'static, Result<Email, AppError>>;
}
