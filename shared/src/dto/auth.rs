use serde::{Deserialize, Serialize};

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginArgs {
    pub name: String,
    pub password: String,
}

/// Authenticated user returned by a successful sign-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub token: String,
    pub id: String,
    pub name: String,
}
