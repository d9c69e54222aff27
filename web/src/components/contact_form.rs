use leptos::prelude::*;
use shared_types::NewContactRequest;
use thaw::*;

use crate::booking::slots::SERVICE_OPTIONS;
use crate::booking::validate::validate_contact;
use crate::booking::FieldError;
use crate::server::submit_contact_request;

#[component]
pub fn ContactForm() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let service_interest = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let submit_error = RwSignal::new(None::<String>);
    let is_submitting = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    let submit = Action::new(move |request: &NewContactRequest| {
        let request = request.clone();
        async move { submit_contact_request(request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            is_submitting.set(false);
            match result {
                Ok(_) => submitted.set(true),
                Err(e) => submit_error.set(Some(e.to_string())),
            }
        }
    });

    let handle_submit = move |_| {
        if is_submitting.get() {
            return;
        }

        let optional = |s: String| {
            if s.trim().is_empty() {
                None
            } else {
                Some(s)
            }
        };
        let request = NewContactRequest {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            phone: optional(phone.get()),
            service_interest: optional(service_interest.get()),
            message: message.get(),
        };

        let errors = validate_contact(&request);
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }

        field_errors.set(Vec::new());
        submit_error.set(None);
        is_submitting.set(true);
        submit.dispatch(request);
    };

    let field_error = move |field: &'static str| {
        move || {
            field_errors
                .with(|errors| {
                    errors
                        .iter()
                        .find(|e| e.field == field)
                        .map(|e| e.message.clone())
                })
                .map(|m| view! { <p class="form-field__error">{m}</p> })
        }
    };

    view! {
        <div class="contact-form">
            {move || {
                if submitted.get() {
                    view! {
                        <div class="contact-form__success">
                            <div class="contact-form__success-icon">"✓"</div>
                            <h3>"Message Sent!"</h3>
                            <p>"Thank you for reaching out. We will get back to you shortly."</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="contact-form__body">
                            <div class="form-row">
                                <div class="form-field">
                                    <label>"First Name"</label>
                                    <Input value=first_name/>
                                    {field_error("firstName")}
                                </div>
                                <div class="form-field">
                                    <label>"Last Name"</label>
                                    <Input value=last_name/>
                                    {field_error("lastName")}
                                </div>
                            </div>

                            <div class="form-row">
                                <div class="form-field">
                                    <label>"Email"</label>
                                    <Input value=email/>
                                    {field_error("email")}
                                </div>
                                <div class="form-field">
                                    <label>"Phone (optional)"</label>
                                    <Input value=phone/>
                                </div>
                            </div>

                            <div class="form-field">
                                <label>"Service of Interest (optional)"</label>
                                <select
                                    class="contact-form__select"
                                    on:change=move |ev| {
                                        service_interest.set(event_target_value(&ev));
                                    }
                                >
                                    <option value="">"Select a service..."</option>
                                    {SERVICE_OPTIONS
                                        .iter()
                                        .map(|option| {
                                            view! {
                                                <option value=option.label>{option.label}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </div>

                            <div class="form-field">
                                <label>"Message"</label>
                                <Textarea value=message/>
                                {field_error("message")}
                            </div>

                            {move || {
                                submit_error
                                    .get()
                                    .map(|m| {
                                        view! { <div class="contact-form__error">{m}</div> }
                                    })
                            }}

                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=MaybeSignal::derive(move || is_submitting.get())
                                on_click=handle_submit
                            >
                                {move || {
                                    if is_submitting.get() { "Sending..." } else { "Send Message" }
                                }}
                            </Button>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
