//! Class and icon helpers shared by the calculator components.

use crate::domain::{FareEvaluation, ProfitTier};
use crate::ui::components::toast::ToastKind;

pub const ICON_TRUCK: &str = "🚚";
pub const ICON_CALCULATOR: &str = "🧮";
pub const ICON_DOLLAR: &str = "💲";
pub const ICON_SETTINGS: &str = "⚙️";
pub const ICON_TRENDING: &str = "📈";

/// Border/background for the cost-per-mile card, plus the bounce while the
/// profit cue is live.
pub fn result_class(evaluation: &FareEvaluation, cue_active: bool) -> String {
    let mut class = String::from("result");
    if evaluation.is_profitable {
        class.push_str(" profitable");
    }
    if cue_active {
        class.push_str(" profit-bounce");
    }
    class
}

pub fn tier_attr(tier: ProfitTier) -> &'static str {
    match tier {
        ProfitTier::None => "none",
        ProfitTier::Profitable => "profitable",
        ProfitTier::Great => "great",
        ProfitTier::Excellent => "excellent",
    }
}

pub fn toast_style(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Success => ("toast success", "✅"),
        ToastKind::Error => ("toast error", "⛔"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{evaluate, DriverRate};

    #[test]
    fn unprofitable_result_has_plain_class() {
        let eval = evaluate("100", "140", DriverRate::default());
        assert_eq!(result_class(&eval, false), "result");
    }

    #[test]
    fn profitable_result_glows_and_bounces() {
        let eval = evaluate("100", "200", DriverRate::default());
        assert_eq!(result_class(&eval, true), "result profitable profit-bounce");
        assert_eq!(tier_attr(eval.tier), "great");
    }
}
