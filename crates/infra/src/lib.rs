//! # Hireflow Infrastructure
//!
//! Infrastructure layer - adapters for the ports defined in
//! `hireflow-core`.
//!
//! This crate contains:
//! - SQLite persistence (connection pool, schema, repositories)
//! - Configuration loading from environment or file
//! - The stub calendar provider
//! - SMTP notification dispatch

pub mod config;
pub mod database;
pub mod errors;
pub mod integrations;
pub mod notifications;

pub use database::{DbManager, SqliteInterviewRepository, SqliteTokenRepository};
pub use errors::InfraError;
pub use integrations::calendar::StubCalendarProvider;
pub use notifications::{NoopNotifier, SmtpNotifier};
