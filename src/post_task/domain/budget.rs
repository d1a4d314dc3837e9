//! Validated task budget.

use super::{PostTaskDomainError, WizardConfig};
use serde::{Serialize, Serializer};
use std::fmt;

/// Positive, finite budget offered for a task.
///
/// Whole amounts go on the wire as integers (`50`, not `50.0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Budget {
    value: f64,
    wire: WireAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(untagged)]
enum WireAmount {
    Whole(u64),
    Fractional(f64),
}

impl Budget {
    /// Parses raw budget text as typed into the budget field.
    ///
    /// Surrounding whitespace is ignored. Text that is not a number is
    /// rejected rather than read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`PostTaskDomainError::InvalidBudget`] when the text is blank,
    /// not numeric, not finite or not strictly positive;
    /// [`PostTaskDomainError::BudgetTooLarge`] or
    /// [`PostTaskDomainError::BudgetTooPrecise`] when `config` bounds are
    /// exceeded.
    pub fn parse(text: &str, config: &WizardConfig) -> Result<Self, PostTaskDomainError> {
        let trimmed = text.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| PostTaskDomainError::InvalidBudget(text.to_owned()))?;

        if !value.is_finite() || value <= 0.0 {
            return Err(PostTaskDomainError::InvalidBudget(text.to_owned()));
        }

        if config.max_budget.is_some_and(|max| value > max) {
            return Err(PostTaskDomainError::BudgetTooLarge(text.to_owned()));
        }

        if config
            .max_decimal_places
            .is_some_and(|max_places| decimal_places(trimmed) > u64::from(max_places))
        {
            return Err(PostTaskDomainError::BudgetTooPrecise(text.to_owned()));
        }

        // `f64` display never uses an exponent, so whole values round-trip.
        let wire = value
            .to_string()
            .parse::<u64>()
            .map_or(WireAmount::Fractional(value), WireAmount::Whole);

        Ok(Self { value, wire })
    }

    /// Returns the numeric amount.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }
}

impl Serialize for Budget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.wire.serialize(serializer)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Counts the fractional digits a numeric literal effectively carries.
///
/// An exponent shifts the decimal point, so `1.25e1` has one place.
fn decimal_places(literal: &str) -> u64 {
    let (mantissa, exponent) = literal
        .split_once(['e', 'E'])
        .map_or((literal, 0_i64), |(mantissa, exponent)| {
            (mantissa, exponent.parse::<i64>().unwrap_or(0))
        });
    let fraction_digits = mantissa
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.trim_end_matches('0').len());
    let digits = i64::try_from(fraction_digits).unwrap_or(i64::MAX);
    u64::try_from(digits.saturating_sub(exponent)).unwrap_or(0)
}
