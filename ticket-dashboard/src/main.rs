//! AssistIT ticket dashboard.
//!
//! Two independent pieces on one page:
//! 1. Filter sync: site/year dropdowns mirrored into the URL query string
//!    (`site_id`, `year`). A change navigates to the rewritten URL so the
//!    server re-renders with the new filter state. "All" deletes the
//!    parameter instead of writing an empty value.
//! 2. Chart rendering: monthly ticket counts as a Chart.js line chart and
//!    per-weekday counts as a bar chart, configured once per page load from
//!    the data arrays the page embeds as globals.

use atk_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SiteFilter, YearFilter,
};
use atk_chart_ui::page_data::DashboardData;
use atk_chart_ui::state::AppState;
use atk_chart_ui::{dom, js_bridge, page_data};
use atk_core::chart_config;
use atk_core::filters::FilterParam;
use dioxus::prelude::*;

/// DOM id of the line chart canvas.
const LINE_CANVAS_ID: &str = "chart-line";
/// DOM id of the bar chart canvas.
const BAR_CANVAS_ID: &str = "chart-bars";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut data: Signal<Option<DashboardData>> = use_signal(|| None);
    let mut primary_color: Signal<String> = use_signal(String::new);

    // ─── Effect 1: Read page globals and URL filter state once on mount ───
    use_effect(move || {
        js_bridge::init_charts();

        state.sites.set(page_data::read_site_options());
        state.years.set(page_data::read_year_options());
        state.selected_site.set(dom::filter_value(FilterParam::Site));
        state.selected_year.set(dom::filter_value(FilterParam::Year));

        match (DashboardData::from_page(), dom::theme_primary_color()) {
            (Ok(page), Ok(color)) => {
                data.set(Some(page));
                primary_color.set(color);
            }
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("dashboard setup failed: {err:#}");
                state.error_msg.set(Some(format!("{err:#}")));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Configure both charts once data and color are in place ───
    use_effect(move || {
        let loading = (state.loading)();
        let color = primary_color();
        // Clone out of the signal so the read borrow doesn't interfere
        // with Dioxus signal tracking.
        let page: Option<DashboardData> = data.read().clone();

        let Some(page) = page else { return };
        if loading || color.is_empty() {
            return;
        }

        let line_data = chart_config::monthly_line_data(&page.monthly, &color);
        let line_options = chart_config::monthly_line_options();
        js_bridge::render_line_chart(
            LINE_CANVAS_ID,
            &line_data.to_string(),
            &line_options.to_string(),
        );

        let bar_data = chart_config::weekday_bar_data(&page.weekly, &color);
        let bar_options = chart_config::weekday_bar_options();
        js_bridge::render_bar_chart(
            BAR_CANVAS_ID,
            &bar_data.to_string(),
            &bar_options.to_string(),
        );
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                FilterRow {}

                ChartHeader {
                    title: "Tickets per Month".to_string(),
                    subtitle: "Tickets opened each month for the selected site and year".to_string(),
                }
                ChartContainer {
                    id: LINE_CANVAS_ID.to_string(),
                    min_height: 300,
                }

                ChartHeader {
                    title: "Tickets per Weekday".to_string(),
                }
                ChartContainer {
                    id: BAR_CANVAS_ID.to_string(),
                    min_height: 300,
                }
            }
        }
    }
}

/// Filter dropdowns row above the charts.
#[component]
fn FilterRow() -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; padding-bottom: 8px; border-bottom: 1px solid #e0e0e0;",
            SiteFilter {}
            YearFilter {}
        }
    }
}
