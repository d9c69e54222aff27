use leptos::prelude::*;
use leptos_router::components::A;

use crate::booking::slots::SERVICE_OPTIONS;
use crate::components::ServiceCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <section class="hero">
                <h1>"Protect What Matters Most"</h1>
                <p class="hero__subtitle">
                    "Professional fire safety inspections, equipment, and maintenance \
                     for homes and businesses."
                </p>
                <div class="hero__actions">
                    <A href="/booking">
                        <button class="btn-primary">"Book an Appointment"</button>
                    </A>
                    <A href="/services">
                        <button class="btn-outlined">"Our Services"</button>
                    </A>
                </div>
            </section>

            <section class="home-services">
                <h2>"What We Do"</h2>
                <div class="home-services__grid">
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
            </section>

            <section class="home-cta">
                <h2>"Ready to get started?"</h2>
                <p>"Schedule an inspection today or get in touch with our team."</p>
                <div class="hero__actions">
                    <A href="/booking">
                        <button class="btn-primary">"Book Now"</button>
                    </A>
                    <A href="/contact">
                        <button class="btn-outlined">"Contact Us"</button>
                    </A>
                </div>
            </section>
        </div>
    }
}
