//! Authentication workflows and ports.

pub mod ports;
pub mod service;

pub use service::AuthService;
