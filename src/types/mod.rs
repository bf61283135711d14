mod error;
mod evaluation_report;
mod outcome;
mod rule;
mod store;

pub use error::LoadError;
pub use evaluation_report::{RuleEvaluation, SelectionReport};
pub use outcome::DiscountOutcome;
pub use rule::{Condition, DiscountRule};
pub use store::RuleStore;
