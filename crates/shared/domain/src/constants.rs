//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Roles
// =============================================================================

/// Role granted to every resolved principal
pub const ROLE_USER: &str = "USER";

// =============================================================================
// Report types
// =============================================================================

/// Report raised against a cooking post
pub const REPORT_TYPE_POST: &str = "POST";

/// Report raised against a comment
pub const REPORT_TYPE_COMMENT: &str = "COMMENT";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Lowest satisfaction level accepted on a learning progress entry
pub const MIN_SATISFACTION_LEVEL: i32 = 1;

/// Highest satisfaction level accepted on a learning progress entry
pub const MAX_SATISFACTION_LEVEL: i32 = 5;

/// Satisfaction level used when none is given
pub const DEFAULT_SATISFACTION_LEVEL: i32 = 3;
