pub mod profit_indicator;
pub mod rate_dialog;
pub mod splash;
pub mod toast;
