//! Data models for a session
//!
//! This module contains the fixed data and classification types:
//! - Age brackets and their messages
//! - The fruit list printed during a session

pub mod enums;

// Re-exports for convenient access
pub use enums::AgeBracket;

/// Fruits listed during a session, in print order
pub const FRUITS: [&str; 3] = ["apple", "banana", "cherry"];
