use dioxus::prelude::*;

use crate::util::{config::PackagingConfig, version::version_label};

#[component]
pub fn Shell(children: Element) -> Element {
    let config = use_context::<PackagingConfig>();
    let footer = footer_text(&config, &version_label());

    rsx! {
        main {
            {children}
        }
        footer { class: "footer", "{footer}" }
    }
}

fn footer_text(config: &PackagingConfig, version: &str) -> String {
    match &config.server_url {
        Some(url) => format!("{} {version} · preview from {url}", config.app_name),
        None => format!("{} {version}", config.app_name),
    }
}
