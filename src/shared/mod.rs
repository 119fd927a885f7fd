/// Shared kernel - Error types and result alias used across all layers
pub mod error;
pub mod result;

pub use result::Result;
