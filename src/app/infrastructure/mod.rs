//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Command-line flags
//! - Text field seam over FLTK inputs
//! - Logging setup
//! - Error types

pub mod cli;
pub mod error;
pub mod field;
pub mod logging;
