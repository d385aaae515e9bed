//! Outbound notification dispatch.

mod noop;
mod smtp;

pub use noop::NoopNotifier;
pub use smtp::SmtpNotifier;
