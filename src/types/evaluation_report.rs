use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::outcome::DiscountOutcome;

/// How a single rule fared against an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleEvaluation {
    pub id: String,
    pub description: String,
    pub priority: i32,
    /// `None` if the rule's condition was not met.
    pub discount: Option<f64>,
}

impl RuleEvaluation {
    #[must_use]
    pub fn is_applicable(&self) -> bool {
        self.discount.is_some()
    }
}

/// Detailed selection report returned by
/// [`select_best_discount_detailed()`](crate::select_best_discount_detailed).
///
/// Contains the outcome, the evaluation of every rule in stored order, and
/// the wall-clock duration of the pass.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct SelectionReport {
    outcome: DiscountOutcome,
    evaluations: Vec<RuleEvaluation>,
    #[serde(serialize_with = "serialize_micros")]
    duration: Duration,
}

impl SelectionReport {
    pub(crate) fn new(
        outcome: DiscountOutcome,
        evaluations: Vec<RuleEvaluation>,
        duration: Duration,
    ) -> Self {
        Self {
            outcome,
            evaluations,
            duration,
        }
    }

    /// The outcome, same as [`select_best_discount()`](crate::select_best_discount).
    pub fn outcome(&self) -> &DiscountOutcome {
        &self.outcome
    }

    /// One entry per rule, in the order the rules were stored.
    #[must_use]
    pub fn evaluations(&self) -> &[RuleEvaluation] {
        &self.evaluations
    }

    /// Descriptions of the rules whose conditions were met, in rule order.
    #[must_use]
    pub fn applicable(&self) -> Vec<&str> {
        self.evaluations
            .iter()
            .filter(|e| e.is_applicable())
            .map(|e| e.description.as_str())
            .collect()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outcome)?;
        write!(f, ", applicable: [{}]", self.applicable().join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}

fn serialize_micros<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_micros())
}
