use std::collections::BTreeMap;

use fltk::{input::Input, prelude::*};

use super::error::{AppError, Result};

/// A widget (or stand-in) exposing a readable and writable text value.
pub trait TextField {
    fn text(&self) -> String;
    fn set_text(&mut self, value: &str);
}

impl TextField for Input {
    fn text(&self) -> String {
        self.value()
    }

    /// Replace the value and park the cursor after the last character,
    /// otherwise FLTK leaves it wherever the old text put it.
    fn set_text(&mut self, value: &str) {
        self.set_value(value);
        let end = end_position(value);
        if let Err(e) = self.set_position(end).and_then(|_| self.set_mark(end)) {
            tracing::debug!("Could not move cursor to {}: {}", end, e);
        }
    }
}

/// Byte offset just past the last character, as FLTK positions it.
pub fn end_position(value: &str) -> i32 {
    i32::try_from(value.len()).unwrap_or(i32::MAX)
}

impl TextField for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn set_text(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

/// Already-resolved field handles, keyed by element identifier.
#[derive(Debug)]
pub struct FieldRegistry<F: TextField> {
    fields: BTreeMap<String, F>,
}

impl<F: TextField> Default for FieldRegistry<F> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }
}

impl<F: TextField> FieldRegistry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `field` under `id`, returning the handle it replaces.
    pub fn register(&mut self, id: impl Into<String>, field: F) -> Option<F> {
        self.fields.insert(id.into(), field)
    }

    pub fn get(&self, id: &str) -> Result<&F> {
        self.fields
            .get(id)
            .ok_or_else(|| AppError::ElementNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut F> {
        self.fields
            .get_mut(id)
            .ok_or_else(|| AppError::ElementNotFound(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
