use rebate::{DiscountRule, select_best_discount_detailed};

fn main() {
    let rules = vec![
        DiscountRule::new("over_100", "10% off over $100")
            .min_order_value(100.0)
            .percentage(10.0)
            .priority(1),
        DiscountRule::new("staff", "50% staff discount")
            .customer_type("staff")
            .percentage(50.0)
            .priority(9),
        DiscountRule::new("flat", "$15 off")
            .fixed(15.0)
            .priority(1),
    ];

    let report = select_best_discount_detailed(&rules, 150.0, "regular");

    println!("{report}");
    println!();
    for evaluation in report.evaluations() {
        match evaluation.discount {
            Some(discount) => println!(
                "  {} (priority {}): {discount}",
                evaluation.description, evaluation.priority
            ),
            None => println!("  {}: not applicable", evaluation.description),
        }
    }
    println!("Duration: {:?}", report.duration());
}
