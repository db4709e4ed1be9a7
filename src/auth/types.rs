//! Types for authentication and user accounts

use serde::{Deserialize, Serialize};

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Staff,
    TourGuide,
    TourOperator,
    Tourist,
}

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user id
    pub id: i64,

    /// First name
    #[serde(rename = "first_name")]
    pub first_name: Option<String>,

    /// Last name
    #[serde(rename = "last_name")]
    pub last_name: Option<String>,

    /// Email address
    pub email: String,

    /// Assigned role
    pub role: UserRole,

    /// Phone number
    #[serde(rename = "phone_number")]
    pub phone_number: Option<String>,

    /// Nationality
    pub nationality: Option<String>,

    /// Whether the account is active
    #[serde(rename = "is_active")]
    pub is_active: Option<bool>,

    /// Creation timestamp
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

/// Response from the login and signup endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user
    pub user: Option<User>,

    /// Bearer token issued alongside the cookie session, when the backend
    /// grants one (mobile-style clients)
    pub token: Option<String>,

    /// A human-readable result message
    pub message: Option<String>,
}

/// Credentials for password login
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Email address
    pub email: String,

    /// Password
    pub password: String,
}

/// Fields for creating a new account
#[derive(Debug, Clone, Serialize)]
pub struct SignupDraft {
    /// First name
    #[serde(rename = "first_name")]
    pub first_name: String,

    /// Last name
    #[serde(rename = "last_name")]
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Password
    pub password: String,

    /// Requested role; the backend defaults to `TOURIST` when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,

    /// Phone number
    #[serde(rename = "phone_number", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Nationality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
}
