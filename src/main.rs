#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::{config::PackagingConfig, version::version_label};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trip_calculator=info")),
        )
        .init();

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    let config = PackagingConfig::load_or_default();
    tracing::info!(
        app_id = %config.app_id,
        app_name = %config.app_name,
        version = %version_label(),
        "starting"
    );
    if let Some(url) = &config.server_url {
        tracing::info!(%url, web_dir = %config.web_dir, "development preview override active");
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let desktop = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(config.app_name.clone())
                    .with_inner_size(LogicalSize::new(420.0, 820.0))
            )
        };
        builder.with_cfg(desktop)
    };

    builder.with_context(config).launch(app::App);
}
