use futures::future::{Aborted, abortable};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::{Arc, Mutex, PoisonError};
use touchstone_core::config::SiteConfig;
use touchstone_core::contact::{ContactFormState, Field, SubmitStatus};
use touchstone_core::relay::FormRelay;

use crate::relay::FetchRelay;

type InFlight = Arc<Mutex<Option<futures::future::AbortHandle>>>;

fn abort_in_flight(in_flight: &InFlight) {
    let handle = in_flight
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    if let Some(handle) = handle {
        handle.abort();
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let relay_config = StoredValue::new(expect_context::<SiteConfig>().relay);

    // A request still running when the page goes away must not touch the
    // (by then disposed) form.
    let in_flight = InFlight::default();
    on_cleanup({
        let in_flight = in_flight.clone();
        move || abort_in_flight(&in_flight)
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let begun = form.try_update(|state| {
            relay_config.with_value(|config| state.begin_submit(config))
        });
        let Some(Ok(request)) = begun else {
            return;
        };

        let (task, handle) = abortable(async move { FetchRelay.post(&request).await });
        *in_flight.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
        let in_flight = in_flight.clone();
        spawn_local(async move {
            match task.await {
                Ok(outcome) => {
                    form.try_update(|state| state.finish_submit(outcome));
                }
                Err(Aborted) => tracing::debug!("contact submission abandoned"),
            }
            in_flight.lock().unwrap_or_else(PoisonError::into_inner).take();
        });
    };

    let submitting = move || form.with(ContactFormState::is_submitting);

    view! {
        {move || match form.with(ContactFormState::status) {
            SubmitStatus::Success => Some(
                view! {
                    <div class="form-banner form-banner-success" role="status">
                        <p>
                            "Your message has been sent successfully! We'll get back to you soon."
                        </p>
                    </div>
                }
                .into_any(),
            ),
            SubmitStatus::Error => Some(
                view! {
                    <div class="form-banner form-banner-error" role="alert">
                        <p>"There was an error sending your message. Please try again later."</p>
                    </div>
                }
                .into_any(),
            ),
            SubmitStatus::Idle => None,
        }}
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-row">
                <FieldInput form field=Field::Name />
                <FieldInput form field=Field::Email />
            </div>
            <FieldInput form field=Field::Subject />
            <FieldInput form field=Field::Message />
            <button type="submit" class="btn btn-primary btn-block" disabled=submitting>
                {move || {
                    if submitting() {
                        view! {
                            <span class="spinner" aria-hidden="true"></span>
                            "Sending..."
                        }
                            .into_any()
                    } else {
                        view! { "Send Message" }.into_any()
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn FieldInput(form: RwSignal<ContactFormState>, field: Field) -> impl IntoView {
    let id = format!("contact-{}", field.key());
    let value = move || form.with(|state| state.value(field).to_string());
    let error = move || form.with(|state| state.error(field).map(ToString::to_string));
    let on_input = move |ev: Event| {
        let value = event_target_value(&ev);
        form.update(|state| state.set_field(field, value));
    };

    let control = match field {
        Field::Message => view! {
            <textarea
                id=id.clone()
                name=field.key()
                rows="6"
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        Field::Email => view! {
            <input
                id=id.clone()
                name=field.key()
                type="email"
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        Field::Name | Field::Subject => view! {
            <input
                id=id.clone()
                name=field.key()
                type="text"
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label for=id>{field.label()}</label>
            {control}
            {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}
