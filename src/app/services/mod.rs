//! Services layer - business operations.
//!
//! This module contains the phone field formatter.

pub mod formatter;
