use rebate::{DiscountRule, select_best_discount};

fn main() {
    // Higher priority always wins, even with a smaller discount.
    // Within one priority the larger discount wins, and exact ties are all reported.
    let rules = vec![
        DiscountRule::new("sitewide", "5% off everything")
            .percentage(5.0)
            .priority(1),
        DiscountRule::new("big_basket", "$10 off orders over $200")
            .min_order_value(200.0)
            .fixed(10.0)
            .priority(1),
        DiscountRule::new("premium", "$8 off for premium members")
            .customer_type("premium")
            .fixed(8.0)
            .priority(5), // highest priority: checked against everything else
    ];

    // Premium member: priority 5 wins despite the smaller discount
    let outcome = select_best_discount(&rules, 300.0, "premium");
    println!("Premium member: {outcome}");

    // Regular customer, $200 basket: 5% of 200 ties with $10 off
    let outcome = select_best_discount(&rules, 200.0, "regular");
    println!("Regular, tie: {outcome}");

    // Regular customer, $100 basket: only the sitewide rule applies
    let outcome = select_best_discount(&rules, 100.0, "regular");
    println!("Regular, small basket: {outcome}");
}
