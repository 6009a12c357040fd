//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (grouping rule, settings, messages)
//! - `controllers/` - Orchestration (FormController)
//! - `services/` - Business operations (PhoneFormatter)
//! - `infrastructure/` - External integrations (text fields, logging, error)

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::{FormController, Outcome};
pub use domain::{AppSettings, GroupingRule, Message, ThemeMode, format_phone_number};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::field::{FieldRegistry, TextField};
pub use services::formatter::PhoneFormatter;
