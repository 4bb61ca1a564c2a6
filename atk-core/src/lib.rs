//! Browser-free core logic for the AssistIT ticket dashboard.
//!
//! Everything in this crate is pure and unit-testable without a browser:
//! - `filters`: URL query rewriting backing the site/year dropdowns
//! - `series`: parallel label/value arrays feeding the charts
//! - `chart_config`: Chart.js `data`/`options` payload builders
//!
//! The WASM side effects (reading page globals, computed styles, navigation)
//! live in `atk-chart-ui`, which consumes these functions.

pub mod chart_config;
pub mod filters;
pub mod series;
