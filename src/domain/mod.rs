//! Fare evaluation and the session state that feeds it.

pub mod app_state;
pub mod driver_rate;
pub mod fare;
pub mod format;
pub mod profit_cue;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use driver_rate::{update_driver_rate, DriverRate, RateError};
#[allow(unused_imports)]
pub use fare::{evaluate, evaluate_amounts, parse_amount, FareEvaluation, ProfitTier};
#[allow(unused_imports)]
pub use format::format_currency;
#[allow(unused_imports)]
pub use profit_cue::{CueTransition, ProfitCue, PROFIT_CUE_DURATION};
