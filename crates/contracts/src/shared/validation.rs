//! Validation rules for form fields

use regex::Regex;
use std::collections::BTreeMap;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Regex the trimmed value must match; `message` replaces the generic error
    pub const fn pattern(mut self, pattern: &'static str, message: &'static str) -> Self {
        self.pattern = Some(pattern);
        self.custom_error = Some(message);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Empty optional fields are always valid; length is counted in chars.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(format!("{} is required", field_label))
            } else {
                Ok(())
            };
        }

        let length = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        if let Some(pattern) = self.pattern {
            let regex = Regex::new(pattern)
                .map_err(|e| format!("{}: invalid pattern ({})", field_label, e))?;
            if !regex.is_match(trimmed) {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} has an invalid format", field_label)));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

/// Kind of input a field holds. Only `Number` adds a check of its own,
/// the rest pick the input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    Password,
    Date,
    DateTime,
    Number,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: ValidationRules,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, rules: ValidationRules) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            rules,
        }
    }

    pub const fn number(name: &'static str, label: &'static str, rules: ValidationRules) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
            rules,
        }
    }

    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn validate(&self, raw: &str) -> Result<(), String> {
        self.rules.validate_string(raw, self.label)?;
        if self.kind == FieldKind::Number && !raw.trim().is_empty() {
            let value: f64 = raw
                .trim()
                .parse()
                .map_err(|_| format!("{} must be a number", self.label))?;
            if !value.is_finite() {
                return Err(format!("{} must be a number", self.label));
            }
            self.rules.validate_number(value, self.label)?;
        }
        Ok(())
    }
}

/// Per-field error messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Run every spec against the value `value_of` returns for its field name
pub fn validate_fields<'a>(
    specs: &[FieldSpec],
    value_of: impl Fn(&str) -> std::borrow::Cow<'a, str>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for spec in specs {
        if let Err(message) = spec.validate(&value_of(spec.name)) {
            errors.insert(spec.name, message);
        }
    }
    errors
}

/// Loose e-mail shape check shared by the manager and seller forms
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
/// 10 to 15 digits with an optional leading `+`
pub const PHONE_PATTERN: &str = r"^\+?[0-9]{10,15}$";
