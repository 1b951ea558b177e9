//! Users, credentials, and the client session.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Profile of the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub role: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.role)
    }
}

#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Successful `/auth/login` payload. Unlike other endpoints it is not enveloped.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// Token plus the user it belongs to.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}
