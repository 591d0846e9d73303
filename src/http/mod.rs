//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from the
//! page-serving business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_page_response};
