//! Dropdown selector for the site filter.

use crate::dom;
use crate::state::AppState;
use atk_core::filters::FilterParam;
use dioxus::prelude::*;

/// Site dropdown. Mirrors its selection into the `site_id` URL parameter,
/// which reloads the page with the new filter applied server-side.
/// The "All Sites" option carries an empty value and deletes the parameter.
#[component]
pub fn SiteFilter() -> Element {
    let state = use_context::<AppState>();
    let sites = state.sites.read().clone();
    let selected = (state.selected_site)();

    let on_change = move |evt: Event<FormData>| {
        if let Err(err) = dom::apply_filter(FilterParam::Site, &evt.value()) {
            log::warn!("site filter navigation failed: {err:#}");
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site_filter",
                style: "font-weight: bold; margin-right: 8px;",
                "Site: "
            }
            select {
                id: "site_filter",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All Sites"
                }
                for site in sites.iter() {
                    option {
                        value: "{site.id}",
                        selected: site.id == selected,
                        "{site.name}"
                    }
                }
            }
        }
    }
}
