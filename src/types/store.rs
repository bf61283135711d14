use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use super::error::LoadError;
use super::evaluation_report::SelectionReport;
use super::outcome::DiscountOutcome;
use super::rule::DiscountRule;

/// The ordered set of discount rules an engine selects from.
///
/// Rules are published as an immutable snapshot. Readers clone the current
/// `Arc` and evaluate against it without holding any lock, so a reload that
/// lands mid-evaluation is never observed by that evaluation. Loads replace
/// the whole list; there is no incremental update.
///
/// Designed to live behind `Arc` and be shared across threads.
///
/// # Example
///
/// ```
/// use rebate::{DiscountRule, RuleStore};
///
/// let store = RuleStore::new();
/// store.replace(vec![
///     DiscountRule::new("r1", "10% off over 100")
///         .min_order_value(100.0)
///         .percentage(10.0)
///         .priority(1),
/// ]);
///
/// let outcome = store.select_best_discount(150.0, "regular");
/// assert_eq!(outcome.discount(), 15.0);
/// assert_eq!(outcome.final_total(), 135.0);
/// ```
pub struct RuleStore {
    rules: RwLock<Arc<[DiscountRule]>>,
}

impl RuleStore {
    /// Create an empty store. Every selection returns no discount until
    /// rules are loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(Vec::new())
    }

    /// Create a store already holding `rules`.
    #[must_use]
    pub fn with_rules(rules: Vec<DiscountRule>) -> Self {
        Self {
            rules: RwLock::new(rules.into()),
        }
    }

    /// Read a JSON rule file and replace the current rules with its contents.
    ///
    /// Returns the number of rules loaded.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file cannot be read and
    /// [`LoadError::Malformed`] if it does not decode into a list of rules.
    /// Either way the previously loaded rules stay in place.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let result = std::fs::read(path)
            .map_err(|source| LoadError::NotFound {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|input| self.load_slice(&input));

        match &result {
            Ok(count) => info!(path = %path.display(), rules = count, "loaded discount rules"),
            Err(err) => warn!(path = %path.display(), error = %err, "keeping previous discount rules"),
        }
        result
    }

    /// Decode a JSON rule list and replace the current rules with it.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Malformed`] if `input` does not decode into a
    /// list of rules. The previously loaded rules stay in place.
    pub fn load_str(&self, input: &str) -> Result<usize, LoadError> {
        self.load_slice(input.as_bytes())
    }

    /// Decode a JSON rule list from raw bytes and replace the current rules
    /// with it. Invalid UTF-8 is a decoding failure like any other.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Malformed`] if `input` does not decode into a
    /// list of rules. The previously loaded rules stay in place.
    pub fn load_slice(&self, input: &[u8]) -> Result<usize, LoadError> {
        let rules: Vec<DiscountRule> = serde_json::from_slice(input)?;
        let count = rules.len();
        self.replace(rules);
        Ok(count)
    }

    /// Publish a new rule list, replacing the current one wholesale.
    pub fn replace(&self, rules: Vec<DiscountRule>) {
        let snapshot: Arc<[DiscountRule]> = rules.into();
        *self.rules.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    /// The current rule snapshot, in stored order.
    ///
    /// The returned list is immutable and unaffected by later loads.
    #[must_use]
    pub fn rules(&self) -> Arc<[DiscountRule]> {
        let rules = self.rules.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*rules)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules().is_empty()
    }

    /// Select the best discount for an order against one consistent snapshot.
    pub fn select_best_discount(&self, order_amount: f64, customer_type: &str) -> DiscountOutcome {
        crate::evaluate::select_best_discount(&self.rules(), order_amount, customer_type)
    }

    /// Like [`select_best_discount()`](Self::select_best_discount), but with
    /// per-rule diagnostics and timing.
    pub fn select_best_discount_detailed(
        &self,
        order_amount: f64,
        customer_type: &str,
    ) -> SelectionReport {
        crate::evaluate::select_best_discount_detailed(&self.rules(), order_amount, customer_type)
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<DiscountRule>> for RuleStore {
    fn from(rules: Vec<DiscountRule>) -> Self {
        Self::with_rules(rules)
    }
}

impl fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleStore")
            .field("rules", &self.len())
            .finish()
    }
}

impl fmt::Display for RuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleStore({} rules)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DiscountRule> {
        vec![
            DiscountRule::new("r1", "10% off").percentage(10.0).priority(1),
            DiscountRule::new("r2", "5 off").fixed(5.0).priority(1),
        ]
    }

    #[test]
    fn new_store_is_empty() {
        let store = RuleStore::new();
        assert!(store.is_empty());
        assert_eq!(store.select_best_discount(80.0, "regular"), DiscountOutcome::none(80.0));
    }

    #[test]
    fn replace_publishes_rules_in_order() {
        let store = RuleStore::new();
        store.replace(sample());
        let rules = store.rules();
        let ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn snapshot_survives_replace() {
        let store = RuleStore::with_rules(sample());
        let before = store.rules();
        store.replace(vec![]);
        assert_eq!(before.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn load_str_replaces_rules() {
        let store = RuleStore::with_rules(sample());
        let count = store
            .load_str(r#"[{"id": "only", "description": "only", "discount_fixed": 3}]"#)
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.rules()[0].id, "only");
    }

    #[test]
    fn malformed_load_keeps_previous_rules() {
        let store = RuleStore::with_rules(sample());
        let err = store.load_str(r#"{"id": "not a list"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert_eq!(store.rules().as_ref(), sample().as_slice());
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let store = RuleStore::with_rules(sample());
        let err = store
            .load_slice(b"[{\"id\": \"a\", \"description\": \"\xff\xfe\"}]")
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let store = RuleStore::new();
        let err = store
            .load_str(r#"[{"id": "a", "description": "a", "priority": "high"}]"#)
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn missing_file_keeps_previous_rules() {
        let store = RuleStore::with_rules(sample());
        let err = store.load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn display_and_debug() {
        let store = RuleStore::with_rules(sample());
        assert_eq!(store.to_string(), "RuleStore(2 rules)");
        assert_eq!(format!("{store:?}"), "RuleStore { rules: 2 }");
    }
}
