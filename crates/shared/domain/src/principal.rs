//! Authentication principal.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::constants::ROLE_USER;
use crate::password::Password;
use crate::user::User;

/// Identity handed to the authentication layer: login name, stored secret
/// and granted roles.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub login_name: String,
    #[serde(skip_serializing)]
    pub secret: String,
    pub roles: BTreeSet<String>,
}

// Keep the stored hash out of logs
impl std::fmt::Debug for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Principal")
            .field("login_name", &self.login_name)
            .field("secret", &"[REDACTED]")
            .field("roles", &self.roles)
            .finish()
    }
}

impl Principal {
    /// Check if the principal was granted a role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Verify a candidate password against the stored secret
    pub fn verify_secret(&self, candidate: &str) -> bool {
        Password::from_hash(self.secret.as_str()).verify(candidate)
    }
}

/// Roles are fixed to [`ROLE_USER`]; no role data is read from the user.
impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            login_name: user.email,
            secret: user.password,
            roles: BTreeSet::from([ROLE_USER.to_string()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, password: &str) -> User {
        User::new("someone".into(), email.into(), password.into())
    }

    #[test]
    fn test_principal_projection() {
        let principal = Principal::from(user("a@b", "HASH"));

        assert_eq!(principal.login_name, "a@b");
        assert_eq!(principal.secret, "HASH");
        assert_eq!(principal.roles, BTreeSet::from(["USER".to_string()]));
        assert!(principal.has_role(ROLE_USER));
    }

    #[test]
    fn test_verify_secret() {
        let hash = Password::new("Correct-Horse-1").unwrap().into_string();
        let principal = Principal::from(user("a@b", &hash));

        assert!(principal.verify_secret("Correct-Horse-1"));
        assert!(!principal.verify_secret("wrong-password"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let principal = Principal::from(user("a@b", "TOP-SECRET-HASH"));
        assert!(!format!("{:?}", principal).contains("TOP-SECRET-HASH"));
    }
}
