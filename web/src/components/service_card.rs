use leptos::prelude::*;

#[component]
pub fn ServiceCard(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] selected: Option<Signal<bool>>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let class = move || {
        let is_selected = selected.map(|s| s.get()).unwrap_or(false);
        if is_selected {
            "service-card service-card--selected"
        } else {
            "service-card"
        }
    };

    view! {
        <div
            class=class
            role="button"
            on:click=move |_| {
                if let Some(cb) = on_select {
                    cb.run(());
                }
            }
        >
            <h3 class="service-card__title">{title}</h3>
            <p class="service-card__description">{description}</p>
        </div>
    }
}
