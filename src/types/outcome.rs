use std::fmt;

use serde::Serialize;

/// The result of selecting the best discount for an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct DiscountOutcome {
    discount: f64,
    final_total: f64,
    applied_rules: Vec<String>,
}

impl fmt::Display for DiscountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "discount {} -> total {} [{}]",
            self.discount,
            self.final_total,
            self.applied_rules.join(", ")
        )
    }
}

impl DiscountOutcome {
    pub(crate) fn new(order_amount: f64, discount: f64, applied_rules: Vec<String>) -> Self {
        Self {
            discount,
            final_total: order_amount - discount,
            applied_rules,
        }
    }

    /// The outcome when no rule applies: zero discount, total unchanged.
    pub fn none(order_amount: f64) -> Self {
        Self::new(order_amount, 0.0, Vec::new())
    }

    #[must_use]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// `order_amount - discount`. Not clamped, so it can go negative.
    #[must_use]
    pub fn final_total(&self) -> f64 {
        self.final_total
    }

    /// Descriptions of the rules tied for the winning discount, in rule order.
    #[must_use]
    pub fn applied_rules(&self) -> &[String] {
        &self.applied_rules
    }

    /// Consume the outcome into `(discount, final_total, applied_rules)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, f64, Vec<String>) {
        (self.discount, self.final_total, self.applied_rules)
    }
}
