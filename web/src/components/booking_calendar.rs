use chrono::NaiveDate;
use leptos::prelude::*;
use thaw::*;

use crate::booking::MonthView;

/// Today in the viewer's timezone on the client, the server's during SSR.
/// The grid is recomputed on hydration so any drift is corrected.
fn today() -> NaiveDate {
    #[cfg(feature = "ssr")]
    {
        chrono::Local::now().date_naive()
    }
    #[cfg(not(feature = "ssr"))]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
    }
}

#[component]
pub fn BookingCalendar(selected_date: RwSignal<String>) -> impl IntoView {
    let month = RwSignal::new(MonthView::containing(today()));

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| month.update(|m| *m = m.prev())
                >
                    "‹"
                </Button>
                <span class="calendar__label">{move || month.get().label()}</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| month.update(|m| *m = m.next())
                >
                    "›"
                </Button>
            </div>

            <div class="calendar__weekdays">
                {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                    .into_iter()
                    .map(|name| view! { <span class="calendar__weekday">{name}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="calendar__grid">
                {move || {
                    let view_month = month.get();
                    let selected = selected_date.get();
                    view_month
                        .grid(today())
                        .into_iter()
                        .map(|cell| {
                            let date = view_month.date_string(cell.day);
                            let mut class = String::from("calendar__day");
                            if !cell.current_month {
                                class.push_str(" calendar__day--outside");
                            }
                            if cell.current_month && selected == date {
                                class.push_str(" calendar__day--selected");
                            }
                            view! {
                                <button
                                    class=class
                                    disabled=cell.disabled
                                    on:click=move |_| {
                                        if !cell.disabled {
                                            selected_date.set(date.clone());
                                        }
                                    }
                                >
                                    {cell.day}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
