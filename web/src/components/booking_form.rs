use leptos::prelude::*;
use shared_types::NewBooking;
use thaw::*;

use crate::booking::slots::{
    display_date, display_time, service_label, PROPERTY_TYPES, SERVICE_OPTIONS,
};
use crate::booking::{BookingWizard, WizardNotice, WizardStep};
use crate::components::{BookingCalendar, ServiceCard, TimeSlotPicker};
use crate::server::submit_booking;

#[component]
pub fn BookingForm() -> impl IntoView {
    let wizard = RwSignal::new(BookingWizard::new());
    // Step-gate rejections surfaced as a banner above the form.
    let notice = RwSignal::new(None::<String>);

    // Form state
    let service_type = RwSignal::new(String::new());
    let property_type = RwSignal::new(String::new());
    let selected_date = RwSignal::new(String::new());
    let selected_time = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let zip_code = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let terms_accepted = RwSignal::new(false);

    let sync_draft = move || {
        wizard.update(|w| {
            w.draft.service_type = service_type.get();
            w.draft.property_type = property_type.get();
            w.draft.date = selected_date.get();
            w.draft.time = selected_time.get();
            w.draft.first_name = first_name.get();
            w.draft.last_name = last_name.get();
            w.draft.email = email.get();
            w.draft.phone = phone.get();
            w.draft.address = address.get();
            w.draft.city = city.get();
            w.draft.state = state.get();
            w.draft.zip_code = zip_code.get();
            w.draft.notes = notes.get();
            w.draft.terms_accepted = terms_accepted.get();
        });
    };

    let submit = Action::new(move |payload: &NewBooking| {
        let payload = payload.clone();
        async move { submit_booking(payload).await }
    });

    // Handle submission result
    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(_) => wizard.update(|w| w.submission_succeeded()),
                Err(e) => wizard.update(|w| w.submission_failed(e.to_string())),
            }
        }
    });

    // Keep the step heading in view when the form is longer than the screen.
    let scroll_to_top = || {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    let handle_next = move |_| {
        sync_draft();
        wizard.update(|w| match w.try_advance() {
            Ok(_) => {
                notice.set(None);
                scroll_to_top();
            }
            Err(n) => notice.set(Some(n.message().to_string())),
        });
    };

    let handle_back = move |_| {
        notice.set(None);
        wizard.update(|w| w.back());
        scroll_to_top();
    };

    let handle_submit = move |_| {
        sync_draft();
        let mut payload = None;
        wizard.update(|w| match w.begin_submission() {
            Ok(p) => {
                notice.set(None);
                payload = Some(p);
            }
            // Field errors render inline; the other notices get the banner.
            Err(WizardNotice::InvalidFields) => notice.set(None),
            Err(n) => notice.set(Some(n.message().to_string())),
        });
        if let Some(p) = payload {
            submit.dispatch(p);
        }
    };

    let field_error = move |field: &'static str| {
        move || {
            wizard
                .with(|w| w.field_error(field).map(|m| m.to_string()))
                .map(|m| view! { <p class="form-field__error">{m}</p> })
        }
    };

    let is_submitting = Memo::new(move |_| wizard.with(|w| w.is_submitting()));

    let progress = move || {
        let (number, title) = match wizard.with(|w| w.step()) {
            WizardStep::Service => (1, "Service Details"),
            WizardStep::DateTime => (2, "Date & Time"),
            WizardStep::Contact => (3, "Your Information"),
            WizardStep::Success => return None,
        };
        Some(view! {
            <div class="booking-form__progress">
                <p class="booking-form__step">
                    {format!("Step {} of 3: {}", number, title)}
                </p>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style:width=format!("{}%", number * 100 / 3)
                    ></div>
                </div>
            </div>
        })
    };

    view! {
        <div class="booking-form">
            {progress}

            {move || {
                notice
                    .get()
                    .map(|msg| view! { <div class="booking-form__notice">{msg}</div> })
            }}

            {move || match wizard.with(|w| w.step()) {
                WizardStep::Service => view! {
                    <div class="booking-form__body">
                        <h3>"Select Service Type"</h3>
                        <div class="booking-form__services">
                            {SERVICE_OPTIONS
                                .iter()
                                .map(|option| {
                                    let id = option.id;
                                    view! {
                                        <ServiceCard
                                            title=option.label
                                            description=option.description
                                            selected=Signal::derive(move || {
                                                service_type.get() == id
                                            })
                                            on_select=Callback::new(move |_| {
                                                service_type.set(id.to_string())
                                            })
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        <h3>"Property Type"</h3>
                        <div class="booking-form__property-types">
                            {PROPERTY_TYPES
                                .iter()
                                .map(|(value, label)| {
                                    let value = *value;
                                    view! {
                                        <Button
                                            appearance=MaybeSignal::derive(move || {
                                                if property_type.get() == value {
                                                    ButtonAppearance::Primary
                                                } else {
                                                    ButtonAppearance::Secondary
                                                }
                                            })
                                            on_click=move |_| {
                                                property_type.set(value.to_string())
                                            }
                                        >
                                            {*label}
                                        </Button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>

                        <div class="booking-form__nav">
                            <span></span>
                            <Button appearance=ButtonAppearance::Primary on_click=handle_next>
                                "Next"
                            </Button>
                        </div>
                    </div>
                }.into_any(),

                WizardStep::DateTime => view! {
                    <div class="booking-form__body">
                        <h3>"Select a Date"</h3>
                        <BookingCalendar selected_date=selected_date/>

                        <h3>"Select a Time"</h3>
                        <TimeSlotPicker selected_time=selected_time/>

                        {move || {
                            let date = selected_date.get();
                            let time = selected_time.get();
                            (!date.is_empty() && !time.is_empty())
                                .then(|| {
                                    view! {
                                        <p class="booking-form__selection">
                                            {format!(
                                                "Selected: {} at {}",
                                                display_date(&date),
                                                display_time(&time),
                                            )}
                                        </p>
                                    }
                                })
                        }}

                        <div class="booking-form__nav">
                            <Button appearance=ButtonAppearance::Secondary on_click=handle_back>
                                "Back"
                            </Button>
                            <Button appearance=ButtonAppearance::Primary on_click=handle_next>
                                "Next"
                            </Button>
                        </div>
                    </div>
                }.into_any(),

                WizardStep::Contact => view! {
                    <div class="booking-form__body">
                        <h3>"Your Information"</h3>

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
                                <label>"Phone"</label>
                                <Input value=phone/>
                                {field_error("phone")}
                            </div>
                        </div>

                        <div class="form-field">
                            <label>"Street Address"</label>
                            <Input value=address/>
                            {field_error("address")}
                        </div>

                        <div class="form-row">
                            <div class="form-field">
                                <label>"City"</label>
                                <Input value=city/>
                                {field_error("city")}
                            </div>
                            <div class="form-field">
                                <label>"State"</label>
                                <Input value=state/>
                                {field_error("state")}
                            </div>
                            <div class="form-field">
                                <label>"ZIP Code"</label>
                                <Input value=zip_code/>
                                {field_error("zipCode")}
                            </div>
                        </div>

                        <div class="form-field">
                            <label>"Additional Notes (optional)"</label>
                            <Textarea value=notes/>
                        </div>

                        <div class="form-field">
                            <Checkbox
                                checked=terms_accepted
                                label="I agree to the terms of service and privacy policy"
                            />
                            {field_error("terms")}
                        </div>

                        {move || {
                            wizard
                                .with(|w| w.submit_error().map(|m| m.to_string()))
                                .map(|m| {
                                    view! { <div class="booking-form__notice">{m}</div> }
                                })
                        }}

                        <div class="booking-form__nav">
                            <Button appearance=ButtonAppearance::Secondary on_click=handle_back>
                                "Back"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=MaybeSignal::derive(move || is_submitting.get())
                                on_click=handle_submit
                            >
                                {move || {
                                    if is_submitting.get() {
                                        "Submitting..."
                                    } else {
                                        "Confirm Booking"
                                    }
                                }}
                            </Button>
                        </div>
                    </div>
                }.into_any(),

                WizardStep::Success => {
                    let draft = wizard.with(|w| w.draft.clone());
                    let service = service_label(&draft.service_type)
                        .unwrap_or("Fire Safety Service")
                        .to_string();
                    view! {
                        <div class="booking-form__success">
                            <div class="booking-form__success-icon">"✓"</div>
                            <h3>"Booking Confirmed!"</h3>
                            <p>
                                {format!(
                                    "Your {} appointment is scheduled for {} at {}.",
                                    service,
                                    display_date(&draft.date),
                                    display_time(&draft.time),
                                )}
                            </p>
                            <p class="booking-form__success-note">
                                {format!(
                                    "A confirmation has been sent to {}.",
                                    draft.email,
                                )}
                            </p>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
