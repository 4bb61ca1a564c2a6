//! Reusable Dioxus RSX components for the AssistIT dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod site_filter;
mod year_filter;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use site_filter::SiteFilter;
pub use year_filter::YearFilter;
