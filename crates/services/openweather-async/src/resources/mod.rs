//! API resource implementations for the weather client

/// Current weather lookups
pub mod current;

pub use current::Current;
