use rebate::RuleStore;

fn main() {
    // Define rules
    let store = RuleStore::new();
    let loaded = store
        .load_str(
            r#"[
                {
                    "id": "rules_1",
                    "description": "10% off for orders over $100",
                    "condition": { "min_order_value": 100 },
                    "discount_percentage": 10,
                    "priority": 1
                }
            ]"#,
        )
        .expect("failed to load rules");
    println!("loaded {loaded} rule(s)");

    println!("{store}");

    // Price a few orders
    for amount in [50.0, 150.0] {
        let outcome = store.select_best_discount(amount, "regular");
        println!("order {amount}: {outcome}");
    }
}
