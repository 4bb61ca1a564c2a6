//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::page_data::SiteOption;
use dioxus::prelude::*;

/// Shared dashboard state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still reading page data
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected site id ("" = All Sites)
    pub selected_site: Signal<String>,
    /// Currently selected year ("" = All Years)
    pub selected_year: Signal<String>,
    /// Available site filter options
    pub sites: Signal<Vec<SiteOption>>,
    /// Available year filter options
    pub years: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(String::new()),
            selected_year: Signal::new(String::new()),
            sites: Signal::new(Vec::new()),
            years: Signal::new(Vec::new()),
        }
    }
}
