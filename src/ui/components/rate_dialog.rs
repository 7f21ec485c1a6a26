use dioxus::prelude::*;

/// Modal for editing the driver's cost per mile. The draft text lives in
/// `AppState`; this component only renders it and forwards the actions.
#[component]
pub fn RateDialog(
    draft: String,
    on_input: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                "role": "dialog",
                onclick: move |evt| evt.stop_propagation(),
                h2 { "Update Your Cost Per Mile" }
                div {
                    class: "field",
                    label { r#for: "driver-cost", "Cost Per Mile ($)" }
                    input {
                        id: "driver-cost",
                        class: "input-large",
                        r#type: "number",
                        step: "0.01",
                        "inputmode": "decimal",
                        value: "{draft}",
                        oninput: move |evt| on_input.call(evt.value()),
                    }
                }
                div {
                    class: "btn-row",
                    button { class: "btn btn-accent", onclick: move |_| on_save.call(()), "Save Changes" }
                    button { class: "btn", onclick: move |_| on_cancel.call(()), "Cancel" }
                }
            }
        }
    }
}
