//! Calendar provider implementations.

mod stub;

pub use stub::StubCalendarProvider;
