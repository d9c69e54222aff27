use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "ABC Fire Security"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/services" attr:class="navbar__link">
                        "Services"
                    </A>
                    <A href="/contact" attr:class="navbar__link">
                        "Contact"
                    </A>
                    <A href="/booking" attr:class="navbar__link navbar__link--cta">
                        "Book Now"
                    </A>
                </div>
            </div>
        </nav>
    }
}
