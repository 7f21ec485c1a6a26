use dioxus::{core::Task, prelude::*};

use crate::{
    domain::{AppState, CueTransition, ProfitCue},
    ui::{
        components::{
            profit_indicator::ProfitIndicator,
            rate_dialog::RateDialog,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{ICON_CALCULATOR, ICON_DOLLAR, ICON_SETTINGS, ICON_TRUCK},
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let cue = use_signal(ProfitCue::default);
    let pending = use_signal(|| None::<Task>);

    use_drop(move || {
        let mut pending = pending;
        let mut cue = cue;
        if let Ok(mut slot) = pending.try_write() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
        if let Ok(mut cue) = cue.try_write() {
            cue.teardown();
        };
    });

    let (miles, price, evaluation, rate, draft, dialog_open) = state.with(|st| {
        (
            st.miles.clone(),
            st.price.clone(),
            st.evaluation(),
            st.driver_rate(),
            st.rate_draft.clone(),
            st.rate_dialog_open,
        )
    });
    let cue_active = cue.with(|c| c.is_active());
    let rate_display = rate.to_string();

    let on_save = move |_: ()| {
        let result = state.with_mut(|st| st.confirm_rate_draft());
        match result {
            Ok(rate) => {
                tracing::info!(rate = rate.per_mile(), "driver cost per mile updated");
                push_toast(
                    toasts,
                    ToastKind::Success,
                    "Updated successfully!",
                    format!("Your cost per mile is now {rate}"),
                );
                sync_profit_cue(state, cue, pending);
            }
            Err(err) => {
                tracing::warn!(%err, "rejected driver cost per mile");
                push_toast(
                    toasts,
                    ToastKind::Error,
                    "Invalid amount",
                    "Please enter a valid cost per mile",
                );
            }
        }
    };

    rsx! {
        div { class: "screen",
            header { class: "header",
                div { class: "header-title",
                    span { class: "header-icon", "{ICON_TRUCK}" }
                    h1 { "Trip Calculator" }
                }
                p { "Calculate your cost per mile and check profitability" }
            }

            section { class: "card",
                h2 { class: "card-title primary", "{ICON_CALCULATOR} Customer Offer" }
                div { class: "field",
                    label { r#for: "miles", "Miles" }
                    input {
                        id: "miles",
                        class: "input-large",
                        r#type: "number",
                        "inputmode": "decimal",
                        placeholder: "Enter miles",
                        value: "{miles}",
                        oninput: move |evt| {
                            state.with_mut(|st| st.set_miles(evt.value()));
                            sync_profit_cue(state, cue, pending);
                        },
                    }
                }
                div { class: "field",
                    label { r#for: "price", "Total Price ($)" }
                    input {
                        id: "price",
                        class: "input-large",
                        r#type: "number",
                        "inputmode": "decimal",
                        placeholder: "Enter total price",
                        value: "{price}",
                        oninput: move |evt| {
                            state.with_mut(|st| st.set_price(evt.value()));
                            sync_profit_cue(state, cue, pending);
                        },
                    }
                }
                ProfitIndicator { evaluation, cue_active }
            }

            section { class: "card",
                h2 { class: "card-title accent", "{ICON_DOLLAR} Your Cost Per Mile" }
                div { class: "rate-panel",
                    div {
                        p { class: "rate-caption", "Current Rate" }
                        p { class: "rate-value", "{rate_display}" }
                    }
                    button {
                        class: "btn",
                        onclick: move |_| state.with_mut(|st| st.open_rate_dialog()),
                        "{ICON_SETTINGS} Update"
                    }
                }
            }

            if dialog_open {
                RateDialog {
                    draft,
                    on_input: move |value: String| state.with_mut(|st| st.set_rate_draft(value)),
                    on_save,
                    on_cancel: move |_| state.with_mut(|st| st.cancel_rate_dialog()),
                }
            }
        }
    }
}

/// Feeds the latest evaluation to the profit cue and reschedules its clear.
/// Any pending clear is cancelled before a new one is spawned.
fn sync_profit_cue(
    state: Signal<AppState>,
    mut cue: Signal<ProfitCue>,
    mut pending: Signal<Option<Task>>,
) {
    let evaluation = state.with(|st| st.evaluation());
    match cue.with_mut(|c| c.observe(&evaluation)) {
        CueTransition::Unchanged => {}
        CueTransition::Cancel => cancel_pending(&mut pending),
        CueTransition::Schedule { generation, after } => {
            cancel_pending(&mut pending);
            tracing::debug!(generation, tier = evaluation.tier.label(), "profit cue armed");
            let task = spawn(async move {
                tokio::time::sleep(after).await;
                if !cue.with_mut(|c| c.expire(generation)) {
                    tracing::trace!(generation, "stale profit cue clear ignored");
                }
            });
            pending.set(Some(task));
        }
    }
}

fn cancel_pending(pending: &mut Signal<Option<Task>>) {
    if let Some(task) = pending.with_mut(Option::take) {
        task.cancel();
    }
}
