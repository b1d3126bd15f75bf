//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as correlation and request logging.

pub mod correlation;

pub use correlation::Correlation;
