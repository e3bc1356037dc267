//! Typed decoding of HTTP Archive (HAR 1.2) documents.

pub mod error;
pub mod har;

pub use error::{Error, Result};
