//! Validator builder for fluent validation API.

use regex::Regex;

use super::result::{FieldError, ValidationResult};
use crate::field::FieldId;
use crate::values::FormValues;

/// A rule sees the field's own value and the whole snapshot.
type Rule = Box<dyn Fn(&str, &FormValues) -> bool + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    field: FieldId,
    rules: Vec<(Rule, String)>,
}

/// Reusable rule set for a form.
///
/// Every registered field is checked on each call to [`validate`](Self::validate).
/// Within a field, rules run in registration order and the first failure is
/// the one reported.
///
/// # Example
///
/// ```
/// use regform::FieldId;
/// use regform::validation::Validator;
///
/// let validator = Validator::new()
///     .field(FieldId::FullName)
///         .required("Name is required")
///     .field(FieldId::Email)
///         .required("Email is required")
///         .contains("@", "Invalid email format")
///     .build();
/// # let _ = validator;
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Start adding rules for a field.
    pub fn field(self, field: FieldId) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            field,
            rules: Vec::new(),
        }
    }

    /// Fields in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().map(|entry| entry.field)
    }

    /// Validate every field without stopping at the first failing one.
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        let errors = self
            .fields
            .iter()
            .filter_map(|entry| Self::check(entry, values))
            .collect();
        ValidationResult::from_errors(errors)
    }

    /// Validate a single field.
    pub fn validate_field(&self, field: FieldId, values: &FormValues) -> Option<FieldError> {
        self.fields
            .iter()
            .filter(|entry| entry.field == field)
            .find_map(|entry| Self::check(entry, values))
    }

    fn check(entry: &FieldEntry, values: &FormValues) -> Option<FieldError> {
        let value = values.get(entry.field);
        entry
            .rules
            .iter()
            .find(|(rule, _)| !rule(value, values))
            .map(|(_, msg)| FieldError::new(entry.field, msg.clone()))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("fields", &self.fields().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    field: FieldId,
    rules: Vec<(Rule, String)>,
}

impl FieldBuilder {
    /// Add a custom rule. The closure returns true when the value is valid.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str, &FormValues) -> bool + Send + Sync + 'static,
    {
        self.rules.push((Box::new(f), msg.into()));
        self
    }

    /// Require the field to be non-empty after trimming.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v, _| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v, _| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v, _| v.chars().count() <= max, msg)
    }

    /// Require the value to match a compiled pattern.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v, _| re.is_match(v), msg)
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        self.rule(move |v, _| v.contains(&substr), msg)
    }

    /// Require the value to equal another field's value exactly.
    pub fn equals_field(self, other: FieldId, msg: impl Into<String>) -> Self {
        self.rule(move |v, values| v == values.get(other), msg)
    }

    /// Continue to the next field.
    pub fn field(self, field: FieldId) -> FieldBuilder {
        self.build().field(field)
    }

    /// Finalize this field and return the validator.
    pub fn build(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            field: self.field,
            rules: self.rules,
        });
        validator
    }
}
