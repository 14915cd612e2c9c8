//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::SoftDelete;

/// User document.
///
/// `email` doubles as the login name; `password` holds the stored hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub delete_status: bool,
}

impl User {
    /// Create a new live user with no id yet assigned
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: String::new(),
            username,
            email,
            password,
            first_name: String::new(),
            last_name: String::new(),
            created_at: Utc::now(),
            delete_status: false,
        }
    }
}

impl SoftDelete for User {
    fn delete_status(&self) -> bool {
        self.delete_status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_live() {
        let user = User::new("cook".into(), "cook@example.com".into(), "hash".into());
        assert!(user.is_active());
        assert!(!user.is_deleted());
        assert!(user.id.is_empty());
    }

    #[test]
    fn test_password_is_not_serialized() {
        let user = User::new("cook".into(), "cook@example.com".into(), "secret-hash".into());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("cook@example.com"));
    }
}
