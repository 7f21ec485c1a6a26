use super::driver_rate::DriverRate;

/// Margin (per mile) at or above which an offer counts as an excellent deal.
pub const EXCELLENT_MARGIN: f64 = 1.0;
/// Margin (per mile) at or above which an offer counts as a great deal.
pub const GREAT_MARGIN: f64 = 0.5;

/// Profitability bucket for a trip offer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfitTier {
    #[default]
    None,
    Profitable,
    Great,
    Excellent,
}

impl ProfitTier {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ProfitTier::None => None,
            ProfitTier::Profitable => Some("✅ Profitable Deal!"),
            ProfitTier::Great => Some("💰 Great Deal! Good profit!"),
            ProfitTier::Excellent => Some("🚀 Excellent Deal! High profit margin!"),
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            ProfitTier::None => None,
            ProfitTier::Profitable => Some("✅"),
            ProfitTier::Great => Some("💰"),
            ProfitTier::Excellent => Some("🚀"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfitTier::None => "None",
            ProfitTier::Profitable => "Profitable",
            ProfitTier::Great => "Great",
            ProfitTier::Excellent => "Excellent",
        }
    }
}

/// Everything derived from one snapshot of the trip inputs and the driver rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FareEvaluation {
    pub customer_cost_per_mile: f64,
    pub is_profitable: bool,
    pub profit_margin: f64,
    pub tier: ProfitTier,
}

impl FareEvaluation {
    /// A zero cost per mile means there is nothing to show yet.
    pub fn is_computed(&self) -> bool {
        self.customer_cost_per_mile > 0.0
    }

    pub fn margin(&self) -> Option<f64> {
        self.is_profitable.then_some(self.profit_margin)
    }
}

/// Parses a raw numeric field. Empty, unparsable, non-finite and negative
/// entries are all treated as "not entered".
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

pub fn evaluate(miles: &str, price: &str, driver_rate: DriverRate) -> FareEvaluation {
    evaluate_amounts(parse_amount(miles), parse_amount(price), driver_rate)
}

pub fn evaluate_amounts(
    miles: Option<f64>,
    price: Option<f64>,
    driver_rate: DriverRate,
) -> FareEvaluation {
    let (Some(miles), Some(price)) = (miles, price) else {
        return FareEvaluation::default();
    };
    if miles <= 0.0 {
        return FareEvaluation::default();
    }

    let customer_cost_per_mile = price / miles;
    // Tiny miles against a huge price can overflow to infinity.
    if customer_cost_per_mile == 0.0 || !customer_cost_per_mile.is_finite() {
        return FareEvaluation::default();
    }

    let rate = driver_rate.per_mile();
    let profit_margin = customer_cost_per_mile - rate;
    let is_profitable = customer_cost_per_mile > rate && customer_cost_per_mile > 0.0;

    // First match wins; both thresholds are inclusive.
    let tier = if !is_profitable {
        ProfitTier::None
    } else if profit_margin >= EXCELLENT_MARGIN {
        ProfitTier::Excellent
    } else if profit_margin >= GREAT_MARGIN {
        ProfitTier::Great
    } else {
        ProfitTier::Profitable
    };

    FareEvaluation {
        customer_cost_per_mile,
        is_profitable,
        profit_margin,
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn baseline() -> DriverRate {
        DriverRate::default()
    }

    #[test]
    fn below_baseline_is_not_profitable() {
        let eval = evaluate("100", "140", baseline());
        assert_relative_eq!(eval.customer_cost_per_mile, 1.40, epsilon = 1e-12);
        assert!(eval.is_computed());
        assert!(!eval.is_profitable);
        assert_eq!(eval.tier, ProfitTier::None);
        assert_eq!(eval.margin(), None);
        assert_eq!(eval.tier.message(), None);
    }

    #[test]
    fn equal_to_baseline_is_not_profitable() {
        let eval = evaluate("100", "150", baseline());
        assert!(!eval.is_profitable);
        assert_eq!(eval.tier, ProfitTier::None);
    }

    #[test]
    fn just_above_baseline_is_profitable() {
        let eval = evaluate("100", "151", baseline());
        assert_relative_eq!(eval.customer_cost_per_mile, 1.51, epsilon = 1e-12);
        assert!(eval.is_profitable);
        assert_relative_eq!(eval.profit_margin, 0.01, epsilon = 1e-9);
        assert_eq!(eval.tier, ProfitTier::Profitable);
        assert_eq!(eval.tier.message(), Some("✅ Profitable Deal!"));
    }

    #[test]
    fn half_dollar_margin_is_great() {
        let eval = evaluate("100", "200", baseline());
        assert_relative_eq!(eval.customer_cost_per_mile, 2.0);
        assert_relative_eq!(eval.profit_margin, 0.5);
        assert_eq!(eval.tier, ProfitTier::Great);
    }

    #[test]
    fn dollar_margin_is_excellent() {
        let eval = evaluate("100", "250", baseline());
        assert_relative_eq!(eval.profit_margin, 1.0);
        assert_eq!(eval.tier, ProfitTier::Excellent);
        assert_eq!(
            eval.tier.message(),
            Some("🚀 Excellent Deal! High profit margin!")
        );
    }

    #[test]
    fn missing_or_garbage_fields_mean_not_computed() {
        for (miles, price) in [("", ""), ("100", ""), ("", "250"), ("abc", "250"), ("100", "1e")] {
            let eval = evaluate(miles, price, baseline());
            assert_eq!(eval, FareEvaluation::default(), "{miles:?}/{price:?}");
            assert!(!eval.is_computed());
        }
    }

    #[test]
    fn zero_miles_or_zero_price_is_not_computed() {
        assert!(!evaluate("0", "250", baseline()).is_computed());
        assert!(!evaluate("100", "0", baseline()).is_computed());
    }

    #[test]
    fn negative_inputs_are_treated_as_absent() {
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(evaluate("100", "-250", baseline()), FareEvaluation::default());
        assert_eq!(evaluate("-100", "250", baseline()), FareEvaluation::default());
    }

    #[test]
    fn overflowing_cost_is_not_computed() {
        let eval = evaluate("1e-300", "1e300", baseline());
        assert_eq!(eval, FareEvaluation::default());
        assert!(!eval.is_computed());
        assert_eq!(eval.tier, ProfitTier::None);
    }

    #[test]
    fn tier_icons_lead_their_messages() {
        for tier in [ProfitTier::Profitable, ProfitTier::Great, ProfitTier::Excellent] {
            let icon = tier.icon().expect("profitable tiers carry an icon");
            let message = tier.message().expect("profitable tiers carry a message");
            assert!(message.starts_with(icon), "{tier:?}");
        }
        assert_eq!(ProfitTier::None.icon(), None);
    }

    #[test]
    fn parse_amount_accepts_padded_decimals() {
        assert_eq!(parse_amount("  12.5 "), Some(12.5));
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn cost_per_mile_is_price_over_miles() {
        for (miles, price) in [(1.0, 0.5), (3.0, 10.0), (250.0, 612.75), (0.25, 1.0)] {
            let eval = evaluate_amounts(Some(miles), Some(price), baseline());
            assert_relative_eq!(eval.customer_cost_per_mile, price / miles);
        }
    }

    #[test]
    fn evaluation_is_repeatable() {
        let first = evaluate("420", "777", baseline());
        let second = evaluate("420", "777", baseline());
        assert_eq!(first, second);
    }

    #[test]
    fn custom_rate_shifts_the_tiers() {
        let rate = DriverRate::new(2.75).expect("valid rate");
        let eval = evaluate("100", "250", rate);
        assert!(!eval.is_profitable);
        assert_eq!(eval.tier, ProfitTier::None);

        let eval = evaluate("100", "380", rate);
        assert_eq!(eval.tier, ProfitTier::Excellent);
    }
}
