use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::{
            splash::Splash,
            toast::{Toast, ToastMessage},
        },
        pages::CalculatorPage,
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
}

#[component]
pub fn App() -> Element {
    // Session only; the driver rate resets to its default on every launch.
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
        Splash {}
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}
