//! Contact form with submit lifecycle projection.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::contact::REVERT_DELAY_MS;
use crate::state::contact::{ContactState, Feedback, SubmitEvent};

/// Name, email, and message fields posted to `action`.
///
/// Submission policy: the submit event only acts while the form is
/// idle, so an in-flight request is never duplicated or cancelled.
#[component]
pub fn ContactForm(#[prop(into)] action: String) -> impl IntoView {
    let state = RwSignal::new(ContactState::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let form_action = action.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.get_untracked().phase.can_submit() {
            return;
        }
        state.update(|s| s.apply(SubmitEvent::Submitted));

        #[cfg(feature = "hydrate")]
        {
            let action = action.clone();
            let submission = crate::net::api::ContactSubmission {
                name: name.get_untracked(),
                email: email.get_untracked(),
                message: message.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_contact(&action, &submission).await {
                    Ok(()) => {
                        state.update(|s| s.apply(SubmitEvent::Succeeded));
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("contact submission failed: {err}");
                        state.update(|s| s.apply(SubmitEvent::Failed));
                    }
                }
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    REVERT_DELAY_MS,
                )))
                .await;
                state.update(|s| s.apply(SubmitEvent::RevertElapsed));
            });
        }
    };

    let button_class = move || match state.get().phase.button_class() {
        Some(accent) => format!("btn btn--primary {accent}"),
        None => "btn btn--primary".to_owned(),
    };
    let feedback_class = move || match state.get().feedback {
        Some(feedback) => format!("form-feedback {}", feedback.css_class()),
        None => "form-feedback".to_owned(),
    };

    view! {
        <form
            id="contactForm"
            class="contact-form__fields"
            action=form_action
            method="POST"
            on:submit=on_submit
        >
            <label class="contact-form__label">
                "Name"
                <input
                    type="text"
                    name="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Email"
                <input
                    type="email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Message"
                <textarea
                    name="message"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>

            <button
                type="submit"
                class=button_class
                disabled=move || state.get().phase.button_disabled()
            >
                {move || state.get().phase.button_label()}
            </button>

            <p id="formFeedback" class=feedback_class>
                {move || state.get().feedback.map(Feedback::message)}
            </p>
        </form>
    }
}
