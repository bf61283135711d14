use serde::{Deserialize, Serialize};

/// The circumstances under which a [`DiscountRule`] applies.
///
/// Both fields are optional. An empty condition matches every order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Orders below this amount do not qualify. Ignored unless positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,

    /// Only this customer type qualifies (exact, case-sensitive match).
    /// An empty string matches any customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
}

impl Condition {
    /// Returns `true` if an order of `order_amount` placed by `customer_type`
    /// satisfies this condition.
    #[must_use]
    pub fn matches(&self, order_amount: f64, customer_type: &str) -> bool {
        if let Some(min) = self.min_order_value
            && min > 0.0
            && order_amount < min
        {
            return false;
        }

        match self.customer_type.as_deref() {
            Some(required) if !required.is_empty() => required == customer_type,
            _ => true,
        }
    }
}

/// A single discount rule: a condition plus the discount it grants.
///
/// A percentage takes precedence over a fixed amount whenever it is positive.
/// A rule with neither is still applicable, it just contributes nothing.
///
/// # Example
///
/// ```
/// use rebate::DiscountRule;
///
/// let rule = DiscountRule::new("rule_1", "10% off orders over 100")
///     .min_order_value(100.0)
///     .percentage(10.0)
///     .priority(1);
///
/// assert_eq!(rule.evaluate(150.0, "regular"), Some(15.0));
/// assert_eq!(rule.evaluate(50.0, "regular"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRule {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_fixed: Option<f64>,
    /// Higher wins.
    #[serde(default, alias = "priiority")]
    pub priority: i32,
}

impl DiscountRule {
    /// Create a rule with no condition, no discount and priority `0`.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            condition: Condition::default(),
            discount_percentage: None,
            discount_fixed: None,
            priority: 0,
        }
    }

    #[must_use]
    pub fn min_order_value(mut self, value: f64) -> Self {
        self.condition.min_order_value = Some(value);
        self
    }

    #[must_use]
    pub fn customer_type(mut self, customer_type: impl Into<String>) -> Self {
        self.condition.customer_type = Some(customer_type.into());
        self
    }

    #[must_use]
    pub fn percentage(mut self, percentage: f64) -> Self {
        self.discount_percentage = Some(percentage);
        self
    }

    #[must_use]
    pub fn fixed(mut self, amount: f64) -> Self {
        self.discount_fixed = Some(amount);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Evaluate this rule against an order.
    ///
    /// Returns `None` if the condition is not met, otherwise the discount
    /// the rule would grant (possibly `0.0`).
    #[must_use]
    pub fn evaluate(&self, order_amount: f64, customer_type: &str) -> Option<f64> {
        if !self.condition.matches(order_amount, customer_type) {
            return None;
        }
        Some(self.discount_for(order_amount))
    }

    fn discount_for(&self, order_amount: f64) -> f64 {
        match (self.discount_percentage, self.discount_fixed) {
            (Some(pct), _) if pct > 0.0 => order_amount * pct / 100.0,
            (_, Some(fixed)) if fixed > 0.0 => fixed,
            _ => 0.0,
        }
    }
}
