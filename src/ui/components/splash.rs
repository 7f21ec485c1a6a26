use dioxus::prelude::*;

use crate::util::config::PackagingConfig;

/// Launch overlay painted from the packaging splash settings; hides itself
/// once the configured duration has passed.
#[component]
pub fn Splash() -> Element {
    let config = use_context::<PackagingConfig>();
    let duration = config.splash.show_duration();
    let mut visible = use_signal(|| !duration.is_zero());

    let _hide = use_future(move || async move {
        tokio::time::sleep(duration).await;
        visible.set(false);
    });

    if !visible() {
        return rsx! { Fragment {} };
    }

    let style = config.splash.overlay_style();
    let spinner_style = config.splash.spinner_style();
    let app_name = config.app_name.clone();
    rsx! {
        div {
            class: "splash",
            style: "{style}",
            span { "{app_name}" }
            if config.splash.show_spinner {
                div { class: "splash-spinner", style: "{spinner_style}" }
            }
        }
    }
}
