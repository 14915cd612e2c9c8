//! Login identity resolution.

mod identity_resolver;

pub use identity_resolver::{DeletedUserPolicy, IdentityResolver, UserDetailsService};
