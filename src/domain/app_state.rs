use super::{
    driver_rate::{parse_proposal, update_driver_rate, DriverRate, RateError},
    fare::{evaluate, FareEvaluation},
};

/// Session state for the calculator screen. Lives only as long as the process.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Raw text of the miles field, exactly as typed.
    pub miles: String,
    /// Raw text of the total price field, exactly as typed.
    pub price: String,
    driver_rate: DriverRate,
    /// Text of the last confirmed rate, kept verbatim so reopening the dialog
    /// and saving untouched never rounds the rate.
    confirmed_rate_text: String,
    /// Unconfirmed text in the rate dialog.
    pub rate_draft: String,
    pub rate_dialog_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let driver_rate = DriverRate::default();
        Self {
            miles: String::new(),
            price: String::new(),
            rate_draft: driver_rate.draft_text(),
            confirmed_rate_text: driver_rate.draft_text(),
            driver_rate,
            rate_dialog_open: false,
        }
    }
}

impl AppState {
    pub fn driver_rate(&self) -> DriverRate {
        self.driver_rate
    }

    pub fn set_miles(&mut self, raw: impl Into<String>) {
        self.miles = raw.into();
    }

    pub fn set_price(&mut self, raw: impl Into<String>) {
        self.price = raw.into();
    }

    pub fn evaluation(&self) -> FareEvaluation {
        evaluate(&self.miles, &self.price, self.driver_rate)
    }

    pub fn open_rate_dialog(&mut self) {
        self.rate_draft = self.confirmed_rate_text.clone();
        self.rate_dialog_open = true;
    }

    pub fn set_rate_draft(&mut self, raw: impl Into<String>) {
        self.rate_draft = raw.into();
    }

    /// Applies the dialog draft. On success the dialog closes; on failure the
    /// confirmed rate is kept and the dialog stays open for another try.
    pub fn confirm_rate_draft(&mut self) -> Result<DriverRate, RateError> {
        let rate = update_driver_rate(parse_proposal(&self.rate_draft)?, self.driver_rate)?;
        self.driver_rate = rate;
        self.confirmed_rate_text = self.rate_draft.trim().to_string();
        self.rate_draft = self.confirmed_rate_text.clone();
        self.rate_dialog_open = false;
        Ok(rate)
    }

    pub fn cancel_rate_dialog(&mut self) {
        self.rate_draft = self.confirmed_rate_text.clone();
        self.rate_dialog_open = false;
    }
}
