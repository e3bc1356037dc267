//! Turn captured HAR requests back into sendable `http` requests.

pub mod error;
pub mod materializer;
pub mod options;

pub use error::{Error, Result};
pub use materializer::{RequestMaterializer, materialize};
pub use options::{MaterializeOptions, ParamJoin};
