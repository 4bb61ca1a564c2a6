//! Shared Dioxus components and Chart.js bridge for the AssistIT dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Chart.js helpers via `js_sys::eval()`
//! - `page_data`: typed readers for the globals the dashboard page embeds
//! - `dom`: theme color lookup and URL/navigation adapters
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (filters, containers, etc.)

pub mod components;
pub mod dom;
pub mod js_bridge;
pub mod page_data;
pub mod state;
