/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register and login handlers.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Credentials posted to `/register` and `/login`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    /// Username
    #[serde(default)]
    pub username: String,
    /// Plaintext password (hashed before storage, never logged)
    #[serde(default)]
    pub password: String,
}

/// Public view of a user
///
/// Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID
    pub id: Uuid,
    /// User's username
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}
