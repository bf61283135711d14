use std::time::Instant;

use tracing::debug;

use crate::{DiscountOutcome, DiscountRule, RuleEvaluation, SelectionReport};

/// Select the best discount for an order.
///
/// Every rule is evaluated independently. Among the applicable ones, the
/// highest priority wins and, within that priority, the largest discount.
/// Rules matching the winner on both priority and discount are reported
/// alongside it, in the order they appear in `rules`.
///
/// # Example
///
/// ```
/// use rebate::{DiscountRule, select_best_discount};
///
/// let rules = vec![
///     DiscountRule::new("r1", "10% off").percentage(10.0).priority(1),
///     DiscountRule::new("r2", "15% off").percentage(15.0).priority(2),
/// ];
///
/// let outcome = select_best_discount(&rules, 150.0, "regular");
/// assert_eq!(outcome.discount(), 22.5);
/// assert_eq!(outcome.final_total(), 127.5);
/// assert_eq!(outcome.applied_rules(), &["15% off"]);
/// ```
pub fn select_best_discount(
    rules: &[DiscountRule],
    order_amount: f64,
    customer_type: &str,
) -> DiscountOutcome {
    let mut leader = Leader::default();
    for rule in rules {
        if let Some(discount) = rule.evaluate(order_amount, customer_type) {
            leader.offer(rule, discount);
        }
    }

    let outcome = leader.into_outcome(order_amount);
    debug!(
        order_amount,
        customer_type,
        discount = outcome.discount(),
        applied = ?outcome.applied_rules(),
        "selected discount"
    );
    outcome
}

/// Like [`select_best_discount()`], but also records how every rule fared
/// and how long the pass took.
pub fn select_best_discount_detailed(
    rules: &[DiscountRule],
    order_amount: f64,
    customer_type: &str,
) -> SelectionReport {
    let start = Instant::now();
    let mut leader = Leader::default();
    let mut evaluations = Vec::with_capacity(rules.len());

    for rule in rules {
        let discount = rule.evaluate(order_amount, customer_type);
        if let Some(discount) = discount {
            leader.offer(rule, discount);
        }
        evaluations.push(RuleEvaluation {
            id: rule.id.clone(),
            description: rule.description.clone(),
            priority: rule.priority,
            discount,
        });
    }

    let outcome = leader.into_outcome(order_amount);
    SelectionReport::new(outcome, evaluations, start.elapsed())
}

/// Running winner of the reduction: the winning `(priority, discount)` and
/// the descriptions tied at it. Seeded at priority 0 with a zero discount, so
/// rules below priority 0 never win.
#[derive(Debug, Default)]
struct Leader {
    priority: i32,
    best: f64,
    applied: Vec<String>,
}

impl Leader {
    fn offer(&mut self, rule: &DiscountRule, discount: f64) {
        let outranks = rule.priority > self.priority
            || (rule.priority == self.priority && discount > self.best);
        if outranks {
            self.priority = rule.priority;
            self.best = discount;
            self.applied.clear();
            self.applied.push(rule.description.clone());
        } else if rule.priority == self.priority && discount == self.best {
            self.applied.push(rule.description.clone());
        }
    }

    fn into_outcome(self, order_amount: f64) -> DiscountOutcome {
        DiscountOutcome::new(order_amount, self.best, self.applied)
    }
}
