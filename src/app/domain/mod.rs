//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Phone number grouping
//! - Application settings
//! - Message types for the event system

pub mod messages;
pub mod phone;
pub mod settings;

pub use messages::Message;
pub use phone::{GroupingRule, digits_only, format_phone_number, group_digits};
pub use settings::{AppSettings, ThemeMode};
