use std::collections::HashMap;

use tracing::{info, warn};

use crate::model::{Role, User};

use super::AuthError;

/// Registered users, keyed by username.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, overwriting any existing entry with the same username.
    pub fn add(&mut self, user: User) {
        info!(username = %user.username, role = ?user.role, "user registered");
        self.users.insert(user.username.clone(), user);
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Look up the user and check password and role. The password comparison
    /// is exact and case-sensitive; no hashing, per the demo's scope.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<&User, AuthError> {
        match self.users.get(username) {
            Some(user) if user.password == password && user.role == role => {
                info!(username, ?role, "login successful");
                Ok(user)
            }
            _ => {
                warn!(username, ?role, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
