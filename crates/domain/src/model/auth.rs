//! Request bodies for login and password change.

use serde::{Deserialize, Serialize};

use super::FullUser;

/// Credentials posted to `/api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtAuthData {
    /// Login name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl JwtAuthData {
    /// Creates credentials from a username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<&FullUser> for JwtAuthData {
    fn from(user: &FullUser) -> Self {
        Self {
            username: user.login.clone(),
            password: user.pass.clone().unwrap_or_default(),
        }
    }
}

/// Body of `PUT /api/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    /// The new password.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_data_from_user() {
        let user = FullUser::new("demo", "secret");
        assert_eq!(JwtAuthData::from(&user), JwtAuthData::new("demo", "secret"));
    }

    #[test]
    fn test_auth_data_from_user_without_password() {
        let user = FullUser::new("demo", "x").with_pass(None);
        assert_eq!(JwtAuthData::from(&user).password, "");
    }
}
