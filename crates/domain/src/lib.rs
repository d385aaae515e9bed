//! # Hireflow Domain
//!
//! Business domain types and models for the interview scheduler.
//!
//! This crate contains:
//! - Domain data types (Interview, AccessToken, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Validation helpers
//!
//! ## Architecture
//! - No dependencies on other hireflow crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
