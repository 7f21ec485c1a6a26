//! Packaging configuration: identity, build output and launch splash.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::assets;

/// Development preview override for the app's remote-load URL.
pub const SERVER_URL_ENV: &str = "TRIP_CALCULATOR_SERVER_URL";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingConfig {
    pub app_id: String,
    pub app_name: String,
    pub web_dir: String,
    #[serde(default)]
    pub server_url: Option<Url>,
    #[serde(default)]
    pub splash: SplashConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplashConfig {
    pub launch_show_duration_ms: u64,
    pub background_color: String,
    pub show_spinner: bool,
    pub spinner_color: String,
    pub full_screen: bool,
    pub immersive: bool,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            launch_show_duration_ms: 2000,
            background_color: "#1e3a8a".to_string(),
            show_spinner: false,
            spinner_color: "#ffffff".to_string(),
            full_screen: true,
            immersive: true,
        }
    }
}

impl SplashConfig {
    pub fn show_duration(&self) -> Duration {
        Duration::from_millis(self.launch_show_duration_ms)
    }

    pub fn overlay_style(&self) -> String {
        let mut style = format!("background-color: {};", self.background_color);
        if !self.full_screen {
            style.push_str(" inset: 10%; border-radius: 1rem;");
        }
        if self.immersive {
            style.push_str(" z-index: 100;");
        }
        style
    }

    pub fn spinner_style(&self) -> String {
        format!("border-top-color: {};", self.spinner_color)
    }
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            app_id: "app.lovable.d9b1bbcd94494926bf4403200cc411c9".to_string(),
            app_name: "Truck Driver Calculator".to_string(),
            web_dir: "dist".to_string(),
            server_url: None,
            splash: SplashConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to decode packaging config: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid {SERVER_URL_ENV} value {value:?}: {source}")]
    ServerUrl {
        value: String,
        source: url::ParseError,
    },
    #[error("packaging config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

impl PackagingConfig {
    /// Loads the embedded `app.config.json` and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_json(assets::app_config_json())?;
        if let Ok(raw) = std::env::var(SERVER_URL_ENV) {
            config.apply_server_url(&raw)?;
        }
        Ok(config)
    }

    /// Falls back to the built-in defaults when the config cannot be used.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "using default packaging config");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_server_url(&mut self, raw: &str) -> Result<(), ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        let url = Url::parse(trimmed).map_err(|source| ConfigError::ServerUrl {
            value: trimmed.to_string(),
            source,
        })?;
        self.server_url = Some(url);
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::EmptyField("appId"));
        }
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("appName"));
        }
        if self.web_dir.trim().is_empty() {
            return Err(ConfigError::EmptyField("webDir"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        let config =
            PackagingConfig::from_json(assets::app_config_json()).expect("embedded config");
        assert_eq!(config, PackagingConfig::default());
    }

    #[test]
    fn missing_splash_uses_default_splash() {
        let config = PackagingConfig::from_json(
            r#"{ "appId": "com.example.trips", "appName": "Trips", "webDir": "out" }"#,
        )
        .expect("minimal config");
        assert_eq!(config.web_dir, "out");
        assert_eq!(config.server_url, None);
        assert_eq!(config.splash, SplashConfig::default());
    }

    #[test]
    fn partial_splash_keeps_other_defaults() {
        let config = PackagingConfig::from_json(
            r##"{
                "appId": "com.example.trips",
                "appName": "Trips",
                "webDir": "dist",
                "splash": { "launchShowDurationMs": 500, "showSpinner": true }
            }"##,
        )
        .expect("partial splash");
        assert_eq!(config.splash.launch_show_duration_ms, 500);
        assert!(config.splash.show_spinner);
        assert_eq!(config.splash.background_color, "#1e3a8a");
    }

    #[test]
    fn splash_styles_follow_config() {
        let mut splash = SplashConfig::default();
        assert_eq!(splash.show_duration(), Duration::from_secs(2));
        assert_eq!(
            splash.overlay_style(),
            "background-color: #1e3a8a; z-index: 100;"
        );
        assert_eq!(splash.spinner_style(), "border-top-color: #ffffff;");

        splash.full_screen = false;
        assert!(splash.overlay_style().contains("inset: 10%"));
    }

    #[test]
    fn empty_identity_is_rejected() {
        let err = PackagingConfig::from_json(
            r#"{ "appId": " ", "appName": "Trips", "webDir": "dist" }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("appId")));
    }

    #[test]
    fn server_url_override_is_validated() {
        let mut config = PackagingConfig::default();
        config
            .apply_server_url("http://192.168.1.20:8080")
            .expect("valid url");
        assert_eq!(
            config.server_url.as_ref().map(Url::as_str),
            Some("http://192.168.1.20:8080/")
        );

        let err = config.apply_server_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::ServerUrl { .. }));

        config.apply_server_url("   ").expect("blank is ignored");
        assert!(config.server_url.is_some());
    }
}
