//! User account administration

use reqwest::Client;
use serde::Serialize;

use crate::auth::{SharedToken, User, UserRole};
use crate::error::Error;
use crate::fetch::Fetch;

/// Account fields an administrator may change
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    /// First name
    #[serde(rename = "first_name", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name
    #[serde(rename = "last_name", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number
    #[serde(rename = "phone_number", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Whether the account is active
    #[serde(rename = "is_active", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Serialize)]
struct RoleChange {
    role: UserRole,
}

/// Client for user account operations
pub struct UsersClient {
    base: String,
    client: Client,
    token: SharedToken,
}

impl UsersClient {
    pub(crate) fn new(base: &str, client: Client, token: SharedToken) -> Self {
        Self {
            base: base.to_string(),
            client,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/users{}", self.base, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// List all user accounts
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        Fetch::get(&self.client, &self.url(""))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<Vec<User>>()
            .await
    }

    /// Get a single user by id
    pub async fn get(&self, id: i64) -> Result<User, Error> {
        Fetch::get(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute::<User>()
            .await
    }

    /// Update account fields
    pub async fn update(&self, id: i64, update: &UserUpdate) -> Result<User, Error> {
        Fetch::patch(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(update)?
            .execute::<User>()
            .await
    }

    /// Change a user's role
    pub async fn change_role(&self, id: i64, role: UserRole) -> Result<User, Error> {
        Fetch::put(&self.client, &self.url(&format!("/{}/role", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .json(&RoleChange { role })?
            .execute::<User>()
            .await
    }

    /// Delete a user account
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.url(&format!("/{}", id)))
            .maybe_bearer_auth(self.bearer().as_deref())
            .execute_unit()
            .await
    }
}
