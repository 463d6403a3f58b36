use api::{HttpLeadSink, LeadConfig, LeadSink};
use dioxus::prelude::*;

use super::icons::CloseIcon;
use crate::core::lead_form::{
    FieldChange, FormField, InterestState, ModalView, SubmitAttempt, SubmitOutcome,
};
use crate::t;

/// Submit handler body: validate, then send once and record the outcome.
///
/// Must run inside a Dioxus scope; the request is a spawned task that is
/// never cancelled. An outcome for a session that has since been closed is
/// dropped by `finish_submit`.
pub fn submit_lead<S>(mut state: Signal<InterestState>, sink: S)
where
    S: LeadSink + 'static,
{
    let SubmitAttempt::Send(ticket) = state.with_mut(|s| s.begin_submit()) else {
        return;
    };
    spawn(async move {
        let result = sink.submit(&ticket.lead).await;
        let outcome = SubmitOutcome::from_result(&result);
        state.with_mut(|s| s.finish_submit(ticket.session, outcome));
    });
}

/// Dismiss icon and "Close" button.
pub fn dismiss(mut state: Signal<InterestState>) {
    state.with_mut(|s| s.close());
}

/// Overlay with either the lead form or the thank-you note.
///
/// The owner keeps the `InterestState` signal; this component only renders it
/// and forwards events. Submissions go to the endpoint in the `LeadConfig`
/// context (a missing context behaves like an unconfigured endpoint).
#[component]
pub fn InterestModal(state: Signal<InterestState>) -> Element {
    let mut state = state;
    let config = try_use_context::<LeadConfig>().unwrap_or_default();
    let sink = use_hook(move || HttpLeadSink::new(&config));

    let current = state();
    let view = current.view();
    if view == ModalView::Closed {
        return rsx! {};
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_lead(state, sink.clone());
    };

    let form = current.form().clone();
    let in_flight = current.in_flight();
    let error = current.error();

    rsx! {
        div { class: "interest-modal",
            div {
                class: "interest-modal__dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "interest-modal-title",

                button {
                    r#type: "button",
                    class: "interest-modal__dismiss",
                    aria_label: t!("modal-close-label"),
                    onclick: move |_| dismiss(state),
                    CloseIcon { size: 20 }
                }

                if view == ModalView::Submitted {
                    div { class: "interest-modal__thanks",
                        h2 { id: "interest-modal-title", class: "interest-modal__title",
                            {t!("thanks-title")}
                        }
                        p { class: "interest-modal__text", {t!("thanks-body")} }
                        button {
                            r#type: "button",
                            class: "button button--primary button--block",
                            onclick: move |_| dismiss(state),
                            {t!("thanks-close")}
                        }
                    }
                } else {
                    h2 { id: "interest-modal-title", class: "interest-modal__title",
                        {t!("modal-title")}
                    }
                    if let Some(err) = error {
                        p { class: "interest-modal__error", role: "alert", {err.message()} }
                    }
                    form { class: "interest-modal__form", onsubmit: onsubmit,
                        input {
                            class: "interest-modal__input",
                            r#type: "text",
                            name: FormField::Name.input_name(),
                            placeholder: t!("form-name"),
                            value: "{form.name}",
                            oninput: move |evt: FormEvent| {
                                state.with_mut(|s| s.change(FieldChange::Text(FormField::Name, evt.value())))
                            },
                        }
                        input {
                            class: "interest-modal__input",
                            r#type: "tel",
                            name: FormField::Phone.input_name(),
                            placeholder: t!("form-phone"),
                            value: "{form.phone}",
                            oninput: move |evt: FormEvent| {
                                state.with_mut(|s| s.change(FieldChange::Text(FormField::Phone, evt.value())))
                            },
                        }
                        input {
                            class: "interest-modal__input",
                            r#type: "text",
                            name: FormField::Pincode.input_name(),
                            placeholder: t!("form-pincode"),
                            value: "{form.pincode}",
                            oninput: move |evt: FormEvent| {
                                state.with_mut(|s| s.change(FieldChange::Text(FormField::Pincode, evt.value())))
                            },
                        }
                        label { class: "interest-modal__opt-in",
                            input {
                                r#type: "checkbox",
                                name: "whatsappUpdates",
                                checked: form.whatsapp_updates,
                                onchange: move |evt: FormEvent| {
                                    state.with_mut(|s| s.change(FieldChange::WhatsappUpdates(evt.checked())))
                                },
                            }
                            span { {t!("form-whatsapp")} }
                        }
                        button {
                            r#type: "submit",
                            class: "button button--primary button--block",
                            disabled: in_flight,
                            if in_flight {
                                {t!("form-sending")}
                            } else {
                                {t!("form-submit")}
                            }
                        }
                    }
                }
            }
        }
    }
}
