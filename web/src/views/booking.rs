use leptos::prelude::*;

use crate::components::BookingForm;

#[component]
pub fn BookingPage() -> impl IntoView {
    view! {
        <div class="page page--booking">
            <h1>"Book an Appointment"</h1>
            <p class="page__lead">
                "Choose a service, pick a time that works for you, and we take care \
                 of the rest."
            </p>
            <BookingForm/>
        </div>
    }
}
