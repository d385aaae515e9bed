//! # Hireflow Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The interview scheduling workflow and the fake-auth flow
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `hireflow-domain`
//! - No database, HTTP, or SMTP code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;
pub mod scheduling;
pub mod utils;

// Infrastructure ports
pub mod calendar_ports;
pub mod notification_ports;

// Re-export specific items to avoid ambiguity
pub use auth::ports::TokenRepository;
pub use auth::AuthService;
pub use calendar_ports::{CalendarProvider, CreatedEvent, MeetingDetails};
pub use notification_ports::Notifier;
pub use scheduling::ports::InterviewRepository;
pub use scheduling::SchedulingService;
