//! Structured validation reports.
//!
//! A failed validation is a recoverable result, not an exception: the
//! caller gets every violated constraint at once, keyed by the wire-level
//! field path, so UI layers can re-render per-field messages.

use serde::Serialize;
use std::fmt;

use crate::error::DomainError;

/// A single violated constraint on one field.
///
/// `field` uses wire names and index paths: `nickname`, `weapons[0].mod`,
/// `attributes.wisdom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Every violated constraint found by a validation pass.
///
/// Never empty when returned as an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a violation against a field path.
    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Record a domain error against a field path, keeping the bare
    /// message (without the error-variant prefix).
    pub(crate) fn push_domain(&mut self, field: impl Into<String>, err: &DomainError) {
        let message = match err {
            DomainError::Validation(msg)
            | DomainError::Constraint(msg)
            | DomainError::Parse(msg) => msg.clone(),
        };
        self.push(field, message);
    }

    /// Consume `self`: `Ok(value)` if no violations were recorded.
    pub(crate) fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All recorded violations, in discovery order.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Returns true if any violation targets the given field path.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
