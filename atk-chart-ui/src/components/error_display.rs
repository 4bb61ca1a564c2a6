//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a dashboard setup error in a styled box. Shown when the page
/// did not supply the expected data globals or theme variable.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FDECEA; color: #B71C1C; border: 1px solid #F5C6CB; border-radius: 4px;",
            strong { "Dashboard error: " }
            "{props.message}"
        }
    }
}
