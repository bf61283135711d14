use std::sync::Arc;
use std::thread;

use rebate::{DiscountRule, RuleStore};

fn main() {
    let store = Arc::new(RuleStore::with_rules(vec![
        DiscountRule::new("over_100", "10% off over $100")
            .min_order_value(100.0)
            .percentage(10.0)
            .priority(1),
        DiscountRule::new("premium", "15% off for premium")
            .customer_type("premium")
            .percentage(15.0)
            .priority(2),
    ]));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let amount = 80.0 + 20.0 * f64::from(i);
                let customer = if i % 2 == 0 { "regular" } else { "premium" };
                let outcome = store.select_best_discount(amount, customer);
                println!("Thread {i}: {customer} order {amount} -> {outcome}");
            })
        })
        .collect();

    // Swap in a new rule list while the readers run; each sees one whole list.
    store.replace(vec![
        DiscountRule::new("flash", "flash sale: $25 off")
            .fixed(25.0)
            .priority(10),
    ]);

    for h in handles {
        h.join().unwrap();
    }
}
