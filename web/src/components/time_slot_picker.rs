use leptos::prelude::*;
use thaw::*;

use crate::booking::slots::{TimeSlot, AFTERNOON_SLOTS, MORNING_SLOTS};

#[component]
fn SlotGroup(
    title: &'static str,
    slots: &'static [TimeSlot],
    selected_time: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="time-slots__group">
            <h4 class="time-slots__group-title">{title}</h4>
            <div class="time-slots__buttons">
                {slots
                    .iter()
                    .map(|slot| {
                        let value = slot.value;
                        view! {
                            <Button
                                appearance=MaybeSignal::derive(move || {
                                    if selected_time.get() == value {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                })
                                on_click=move |_| selected_time.set(value.to_string())
                            >
                                {slot.label}
                            </Button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
pub fn TimeSlotPicker(selected_time: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="time-slots">
            <SlotGroup title="Morning" slots=&MORNING_SLOTS selected_time=selected_time/>
            <SlotGroup title="Afternoon" slots=&AFTERNOON_SLOTS selected_time=selected_time/>
        </div>
    }
}
