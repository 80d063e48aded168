//! Utility functions for code generation and URL checks.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Original URL validation

pub mod code_generator;
pub mod url_validator;
