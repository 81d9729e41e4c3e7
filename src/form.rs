// src/form.rs

//! Ingredient form schema
//!
//! Two editable fields, `name` and `price`. Binding copies a submitted
//! payload onto an [`Ingredient`]; validation checks the bound record and
//! reports every failing constraint with the field it belongs to.
//!
//! Constraints:
//! - `name`: not blank, 2 to 50 characters
//! - `price`: not null, strictly positive, strictly below 200

use crate::db::models::Ingredient;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Raw submitted field values, as decoded from a form body
pub type Payload = HashMap<String, String>;

pub const FIELD_NAME: &str = "name";
pub const FIELD_PRICE: &str = "price";

/// Constraint a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    NotBlank,
    NotNull,
    /// Value could not be read as the field's type
    Type,
    MinLength,
    MaxLength,
    Positive,
    LessThan,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::NotBlank => "not_blank",
            Rule::NotNull => "not_null",
            Rule::Type => "type",
            Rule::MinLength => "min_length",
            Rule::MaxLength => "max_length",
            Rule::Positive => "positive",
            Rule::LessThan => "less_than",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed constraint on one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, rule: Rule, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

/// Field bounds for the ingredient form
///
/// A name made only of whitespace counts as blank, so `"  "` is rejected
/// with `not_blank` rather than passing the length check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngredientForm {
    pub name_min_chars: usize,
    pub name_max_chars: usize,
    /// Exclusive upper bound on the price
    pub price_limit: f64,
}

impl Default for IngredientForm {
    fn default() -> Self {
        Self {
            name_min_chars: 2,
            name_max_chars: 50,
            price_limit: 200.0,
        }
    }
}

impl IngredientForm {
    /// Copy recognized fields from `payload` onto `target`
    ///
    /// Unknown keys are ignored and absent keys leave the target untouched.
    /// An empty value clears the field. A price that is not a finite number
    /// leaves the previous price in place and comes back as a `type`
    /// violation.
    pub fn bind(&self, payload: &Payload, target: &mut Ingredient) -> Vec<Violation> {
        let mut violations = Vec::new();

        if let Some(raw) = payload.get(FIELD_NAME) {
            target.name = if raw.is_empty() { None } else { Some(raw.clone()) };
        }

        if let Some(raw) = payload.get(FIELD_PRICE) {
            match parse_price(raw) {
                Ok(price) => target.price = price,
                Err(()) => violations.push(Violation::new(
                    FIELD_PRICE,
                    Rule::Type,
                    "Cette valeur n'est pas valide.",
                )),
            }
        }

        violations
    }

    /// Check every constraint, returning all failures
    pub fn validate(&self, ingredient: &Ingredient) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();
        self.check_name(ingredient.name.as_deref(), &mut violations);
        self.check_price(ingredient.price, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Bind then validate, the way a submitted form is processed
    ///
    /// A field that already failed to bind is not validated again, so the
    /// user sees one message for it.
    pub fn submit(&self, payload: &Payload, target: &mut Ingredient) -> Vec<Violation> {
        let mut violations = self.bind(payload, target);

        if let Err(found) = self.validate(target) {
            for violation in found {
                if !violations.iter().any(|v| v.field == violation.field) {
                    violations.push(violation);
                }
            }
        }

        violations
    }

    fn check_name(&self, name: Option<&str>, violations: &mut Vec<Violation>) {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => {
                violations.push(Violation::new(
                    FIELD_NAME,
                    Rule::NotBlank,
                    "Cette valeur ne doit pas être vide.",
                ));
                return;
            }
        };

        let chars = name.chars().count();
        if chars < self.name_min_chars {
            violations.push(Violation::new(
                FIELD_NAME,
                Rule::MinLength,
                format!(
                    "Cette chaîne est trop courte. Elle doit avoir au minimum {} caractères.",
                    self.name_min_chars
                ),
            ));
        } else if chars > self.name_max_chars {
            violations.push(Violation::new(
                FIELD_NAME,
                Rule::MaxLength,
                format!(
                    "Cette chaîne est trop longue. Elle doit avoir au maximum {} caractères.",
                    self.name_max_chars
                ),
            ));
        }
    }

    fn check_price(&self, price: Option<f64>, violations: &mut Vec<Violation>) {
        let Some(price) = price else {
            violations.push(Violation::new(
                FIELD_PRICE,
                Rule::NotNull,
                "Cette valeur ne doit pas être nulle.",
            ));
            return;
        };

        if price <= 0.0 {
            violations.push(Violation::new(
                FIELD_PRICE,
                Rule::Positive,
                "Cette valeur doit être strictement positive.",
            ));
        }
        if price >= self.price_limit {
            violations.push(Violation::new(
                FIELD_PRICE,
                Rule::LessThan,
                format!("Cette valeur doit être inférieure à {}.", self.price_limit),
            ));
        }
    }
}

/// Accepts both `12.5` and the French `12,5`; an empty string means no price
fn parse_price(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(()),
    }
}
