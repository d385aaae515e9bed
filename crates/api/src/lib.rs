//! # Hireflow App
//!
//! REST layer - axum routing over the core services.
//!
//! The binary (`hireflowd`) wires configuration, the SQLite pool, and the
//! calendar/notifier adapters into an [`context::AppContext`] and serves
//! the router built here.

pub mod context;
pub mod error;
pub mod routes;

pub use context::AppContext;
pub use routes::router;
