mod error;
mod evaluate;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;
mod types;

pub use error::RebateError;
pub use evaluate::{select_best_discount, select_best_discount_detailed};
pub use types::{
    Condition, DiscountOutcome, DiscountRule, LoadError, RuleEvaluation, RuleStore,
    SelectionReport,
};
