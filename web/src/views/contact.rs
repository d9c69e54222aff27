use leptos::prelude::*;

use crate::components::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page page--contact">
            <h1>"Contact Us"</h1>
            <p class="page__lead">
                "Questions about inspections, compliance, or equipment? Send us a \
                 message and we will respond within one business day."
            </p>
            <ContactForm/>
        </div>
    }
}
