//! Contact form with email or Nostr DM delivery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts to `contact/` or `nostr-contact/`. Validation failures come back as
//! a field map and are shown under the matching inputs.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::{ApiError, FieldErrors};
use crate::net::types::ContactSubmission;

pub const SENT_MESSAGE: &str = "Thanks! Your message has been sent.";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const INCOMPLETE_MESSAGE: &str = "Please fill in every field.";
pub const INVALID_MESSAGE: &str = "Please correct the highlighted fields.";

/// Submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SendStatus {
    /// Outcome of a submission plus the field errors to display.
    #[must_use]
    pub fn from_outcome(outcome: &Result<(), ApiError>) -> (Self, FieldErrors) {
        match outcome {
            Ok(()) => (Self::Sent, FieldErrors::default()),
            Err(err) => {
                let fields = err.field_errors();
                let message = if fields.is_empty() { FAILED_MESSAGE.to_owned() } else { INVALID_MESSAGE.to_owned() };
                (Self::Failed(message), fields)
            }
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactSubmission::default());
    let via_nostr = RwSignal::new(false);
    let status = RwSignal::new(SendStatus::Idle);
    let errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }
        let submission = form.get_untracked();
        if !submission.is_complete() {
            status.set(SendStatus::Failed(INCOMPLETE_MESSAGE.to_owned()));
            return;
        }
        status.set(SendStatus::Sending);
        errors.set(FieldErrors::default());
        let nostr = via_nostr.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = api::submit_contact(&submission, nostr).await;
            if let Err(err) = &outcome {
                leptos::logging::warn!("contact submit failed: {err}");
            }
            let (next, fields) = SendStatus::from_outcome(&outcome);
            if next == SendStatus::Sent {
                form.set(ContactSubmission::default());
            }
            errors.set(fields);
            status.set(next);
        });
    };

    let field_error = move |name: &'static str| {
        move || errors.with(|e| e.get(name)).map(|msg| view! { <span class="contact__field-error">{msg}</span> })
    };

    view! {
        <section class="contact">
            <h2 class="contact__title">"Get in touch"</h2>
            <form class="contact__form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {field_error("name")}
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    {field_error("email")}
                </label>
                <label>
                    "Subject"
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.subject.clone())
                        on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    />
                    {field_error("subject")}
                </label>
                <label>
                    "Message"
                    <textarea
                        required
                        rows="5"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>
                    {field_error("message")}
                </label>
                <label class="contact__nostr">
                    <input
                        type="checkbox"
                        prop:checked=move || via_nostr.get()
                        on:change=move |ev| via_nostr.set(event_target_checked(&ev))
                    />
                    "Send as an encrypted Nostr DM"
                </label>
                <button class="btn contact__submit" type="submit" disabled=move || status.get().is_sending()>
                    {move || if status.get().is_sending() { "Sending..." } else { "Send" }}
                </button>
            </form>
            {move || match status.get() {
                SendStatus::Sent => Some(view! { <p class="contact__success">{SENT_MESSAGE}</p> }.into_any()),
                SendStatus::Failed(message) => Some(view! { <p class="contact__error">{message}</p> }.into_any()),
                SendStatus::Idle | SendStatus::Sending => None,
            }}
        </section>
    }
}
