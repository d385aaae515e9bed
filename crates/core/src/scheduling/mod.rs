//! Interview scheduling workflow and its store-facing port.

pub mod ports;
pub mod service;

pub use service::SchedulingService;
