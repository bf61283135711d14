
use proptest::prelude::*;
use rebate::{DiscountRule, RuleStore, select_best_discount};
use strategies::{arb_order, arb_rules, reference_selection};

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// The same rules + order must always produce the same outcome.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn determinism(rules in arb_rules(), (amount, customer) in arb_order()) {
        let first = select_best_discount(&rules, amount, &customer);
        for _ in 0..5 {
            let again = select_best_discount(&rules, amount, &customer);
            prop_assert_eq!(&first, &again, "determinism violated on repeated selection");
        }
    }

    #[test]
    fn store_matches_free_function(rules in arb_rules(), (amount, customer) in arb_order()) {
        let store = RuleStore::with_rules(rules.clone());
        prop_assert_eq!(
            store.select_best_discount(amount, &customer),
            select_best_discount(&rules, amount, &customer)
        );
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Total identity
//
// final_total == order_amount - discount, including the no-discount case.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn final_total_is_amount_minus_discount(rules in arb_rules(), (amount, customer) in arb_order()) {
        let outcome = select_best_discount(&rules, amount, &customer);
        prop_assert_eq!(outcome.final_total(), amount - outcome.discount());
        if outcome.applied_rules().is_empty() {
            prop_assert_eq!(outcome.discount(), 0.0);
            prop_assert_eq!(outcome.final_total(), amount);
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Non-applicable rules never contribute
//
// Rules whose minimum exceeds the order, or whose customer type differs,
// can be removed without changing the outcome.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn non_applicable_rules_never_contribute(rules in arb_rules(), (amount, customer) in arb_order()) {
        let outcome = select_best_discount(&rules, amount, &customer);

        let applicable: Vec<DiscountRule> = rules
            .iter()
            .filter(|r| r.evaluate(amount, &customer).is_some())
            .cloned()
            .collect();

        for rule in &rules {
            let below_min = rule.condition.min_order_value.is_some_and(|m| m > 0.0 && amount < m);
            let wrong_customer = rule
                .condition
                .customer_type
                .as_deref()
                .is_some_and(|c| !c.is_empty() && c != customer);
            if below_min || wrong_customer {
                prop_assert!(
                    !outcome.applied_rules().contains(&rule.description),
                    "non-applicable rule {} was applied", rule.description
                );
            }
        }

        prop_assert_eq!(outcome, select_best_discount(&applicable, amount, &customer));
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Priority monotonicity
//
// Raising an applicable rule's priority above every other rule, and above 0,
// makes it the sole winner, whatever its discount.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn raised_priority_wins_alone(
        mut rules in arb_rules(),
        (amount, customer) in arb_order(),
        pick in any::<prop::sample::Index>(),
    ) {
        let applicable: Vec<usize> = (0..rules.len())
            .filter(|&i| rules[i].evaluate(amount, &customer).is_some())
            .collect();
        prop_assume!(!applicable.is_empty());

        let idx = applicable[pick.index(applicable.len())];
        let top = rules.iter().map(|r| r.priority).fold(0, i32::max);
        rules[idx].priority = top + 1;

        let outcome = select_best_discount(&rules, amount, &customer);
        prop_assert_eq!(outcome.applied_rules(), std::slice::from_ref(&rules[idx].description));
        prop_assert_eq!(Some(outcome.discount()), rules[idx].evaluate(amount, &customer));
    }
}

// ---------------------------------------------------------------------------
// Invariant 5: Tie law
//
// The applied rules are exactly the applicable rules at the winning priority
// whose discount equals the best one, in rule-list order.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn matches_reference_selection(rules in arb_rules(), (amount, customer) in arb_order()) {
        let outcome = select_best_discount(&rules, amount, &customer);
        let (discount, names) = reference_selection(&rules, amount, &customer);
        prop_assert_eq!(outcome.discount(), discount);
        prop_assert_eq!(outcome.applied_rules(), names.as_slice());
    }

    #[test]
    fn negative_priorities_never_win(rules in arb_rules(), (amount, customer) in arb_order()) {
        let outcome = select_best_discount(&rules, amount, &customer);
        for rule in rules.iter().filter(|r| r.priority < 0) {
            prop_assert!(
                !outcome.applied_rules().contains(&rule.description),
                "negative-priority rule {} was applied", rule.description
            );
        }
    }

    #[test]
    fn duplicated_winner_ties_with_itself(rules in arb_rules(), (amount, customer) in arb_order()) {
        let outcome = select_best_discount(&rules, amount, &customer);
        prop_assume!(!outcome.applied_rules().is_empty());

        let mut doubled = rules.clone();
        doubled.extend(rules.iter().cloned());
        let again = select_best_discount(&doubled, amount, &customer);

        let mut expected = outcome.applied_rules().to_vec();
        expected.extend(outcome.applied_rules().iter().cloned());
        prop_assert_eq!(again.discount(), outcome.discount());
        prop_assert_eq!(again.applied_rules(), expected.as_slice());
    }
}
