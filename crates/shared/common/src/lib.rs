//! Common utilities shared across the skill-sharing services.
//!
//! This crate provides:
//! - Unified error handling
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
