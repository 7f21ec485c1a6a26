use dioxus::prelude::*;

use crate::domain::{format_currency, FareEvaluation};
use crate::ui::theme;

/// Customer cost per mile, with the tier banner once the offer beats the
/// driver's rate. Renders nothing until both fields hold usable numbers.
#[component]
pub fn ProfitIndicator(evaluation: FareEvaluation, cue_active: bool) -> Element {
    if !evaluation.is_computed() {
        return rsx! { Fragment {} };
    }

    let class = theme::result_class(&evaluation, cue_active);
    let tier = theme::tier_attr(evaluation.tier);
    let cost_display = format_currency(evaluation.customer_cost_per_mile);
    let banner = evaluation
        .tier
        .message()
        .zip(evaluation.margin())
        .map(|(message, margin)| {
            (
                format!("{} {message}", theme::ICON_TRENDING),
                format!("Profit: {} per mile", format_currency(margin)),
            )
        });
    let badge = evaluation.tier.icon();

    rsx! {
        div {
            class: "{class}",
            "data-tier": "{tier}",
            div {
                class: "result-row",
                span { "Customer Cost/Mile:" }
                span {
                    class: "result-value",
                    "{cost_display}"
                    if let Some(icon) = badge {
                        span { class: "tier-badge", " {icon}" }
                    }
                }
            }
            if let Some((headline, margin_line)) = banner {
                div {
                    class: "profit-banner",
                    strong { "{headline}" }
                    p { "{margin_line}" }
                }
            }
        }
    }
}
