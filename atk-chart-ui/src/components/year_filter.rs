//! Dropdown selector for the year filter.

use crate::dom;
use crate::state::AppState;
use atk_core::filters::FilterParam;
use dioxus::prelude::*;

/// Year dropdown. Mirrors its selection into the `year` URL parameter;
/// "All Years" deletes the parameter.
#[component]
pub fn YearFilter() -> Element {
    let state = use_context::<AppState>();
    let years = state.years.read().clone();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        if let Err(err) = dom::apply_filter(FilterParam::Year, &evt.value()) {
            log::warn!("year filter navigation failed: {err:#}");
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year",
                style: "font-weight: bold; margin-right: 8px;",
                "Year: "
            }
            select {
                id: "year",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All Years"
                }
                for year in years.iter() {
                    option {
                        value: "{year}",
                        selected: *year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
