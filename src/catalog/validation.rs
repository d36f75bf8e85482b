//! Client-side field validation for catalog records.
//!
//! Each field is checked on its own, so one bad field never hides the
//! findings for another. Within a field the first failing rule wins.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::catalog::types::{CatalogRecord, Price};

/// Minimum description length, in characters, after trimming.
pub const DESCRIPTION_MIN_CHARS: usize = 10;
/// Maximum description length, in characters, after trimming.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// A validated field, keyed by its wire name when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Field {
    #[serde(rename = "nombre")]
    Name,
    #[serde(rename = "precio")]
    Price,
    #[serde(rename = "descripcion")]
    Description,
}

impl Field {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Price => "precio",
            Field::Description => "descripcion",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    InvalidFormat,
    NotANumber,
    NotPositive,
    TooShort,
    TooLong,
}

impl Violation {
    /// True for the price rules that reject the input as a number at all.
    pub fn is_not_a_number(&self) -> bool {
        matches!(self, Violation::InvalidFormat | Violation::NotANumber)
    }
}

/// One failed field together with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match (self.field, self.violation) {
            (Field::Name, _) => "El nombre es obligatorio.",
            (Field::Price, Violation::Required) => "El precio es obligatorio.",
            (Field::Price, Violation::InvalidFormat) => "Solo números, puntos o comas.",
            (Field::Price, Violation::NotPositive) => "Debe ser mayor a 0.",
            (Field::Price, _) => "Precio no válido.",
            (Field::Description, Violation::TooShort) => "Mínimo 10 caracteres.",
            (Field::Description, Violation::TooLong) => "Máximo 200 caracteres.",
            (Field::Description, _) => "La descripción es obligatoria.",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Outcome of validating one record. `valid` holds iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    fn from_errors(errors: BTreeMap<Field, FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    pub fn violation(&self, field: Field) -> Option<Violation> {
        self.errors.get(&field).map(|e| e.violation)
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).map(FieldError::message)
    }

    /// Field name to message, the shape forms render next to their inputs.
    pub fn messages(&self) -> BTreeMap<&'static str, &'static str> {
        self.errors
            .values()
            .map(|e| (e.field.wire_name(), e.message()))
            .collect()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return f.write_str("valid");
        }
        let mut first = true;
        for error in self.errors.values() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error)?;
            first = false;
        }
        Ok(())
    }
}

/// Validates every field of `record` and collects the failures.
pub fn validate<R: CatalogRecord + ?Sized>(record: &R) -> ValidationResult {
    let checks = [
        (Field::Name, check_name(record.name())),
        (Field::Price, check_price(record.price())),
        (Field::Description, check_description(record.description())),
    ];

    let errors = checks
        .into_iter()
        .filter_map(|(field, outcome)| {
            outcome.map(|violation| (field, FieldError { field, violation }))
        })
        .collect();

    ValidationResult::from_errors(errors)
}

fn check_name(name: &str) -> Option<Violation> {
    name.trim().is_empty().then_some(Violation::Required)
}

fn check_price(price: &Price) -> Option<Violation> {
    let amount = match price {
        Price::Amount(value) if !value.is_finite() => return Some(Violation::NotANumber),
        Price::Amount(value) => *value,
        Price::Text(text) => match parse_price_text(text) {
            Ok(value) => value,
            Err(violation) => return Some(violation),
        },
    };

    (amount <= 0.0).then_some(Violation::NotPositive)
}

/// Parses a price typed with `.` as thousands separator and `,` as the
/// decimal mark, e.g. `"1.200,50"`.
fn parse_price_text(text: &str) -> Result<f64, Violation> {
    if text.trim().is_empty() {
        return Err(Violation::Required);
    }

    let stripped = text.replace('.', "");
    let well_formed =
        !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit() || c == ',');
    if !well_formed {
        return Err(Violation::InvalidFormat);
    }

    let normalized = stripped.replacen(',', ".", 1);
    leading_number(&normalized).ok_or(Violation::NotANumber)
}

/// Parses the longest numeric prefix of `text`; trailing garbage is ignored.
fn leading_number(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_point = false;
    let mut seen_digit = false;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}

fn check_description(description: &str) -> Option<Violation> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Some(Violation::Required);
    }

    let length = trimmed.chars().count();
    if length < DESCRIPTION_MIN_CHARS {
        Some(Violation::TooShort)
    } else if length > DESCRIPTION_MAX_CHARS {
        Some(Violation::TooLong)
    } else {
        None
    }
}
