//! Controllers - orchestration between UI messages and services.

pub mod form;

pub use form::{FormController, Outcome};
