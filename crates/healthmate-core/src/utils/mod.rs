//! Utility functions for string formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{capitalize, capitalized_list, numbered_steps, truncate_string};
