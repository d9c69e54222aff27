use leptos::prelude::*;
use leptos_router::components::A;

use crate::booking::slots::SERVICE_OPTIONS;
use crate::components::ServiceCard;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="page page--services">
            <h1>"Our Services"</h1>
            <p class="page__lead">
                "Certified technicians, transparent pricing, and same-week scheduling."
            </p>

            <div class="services__grid">
                {SERVICE_OPTIONS
                    .iter()
                    .map(|option| {
                        view! {
                            <ServiceCard
                                title=option.label
                                description=option.description
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="services__cta">
                <A href="/booking">
                    <button class="btn-primary">"Book an Appointment"</button>
                </A>
            </div>
        </div>
    }
}
