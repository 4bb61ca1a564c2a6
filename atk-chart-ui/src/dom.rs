//! Thin adapters around the browser side effects: theme color lookup,
//! reading the current URL, and full-page navigation.
//!
//! The URL rewrite itself is `atk_core::filters::with_query_param`; this
//! module only supplies the current URL and performs the navigation.

use anyhow::{anyhow, bail, Context, Result};
use atk_core::filters::{with_query_param, FilterParam};
use url::Url;

/// CSS custom property holding the dashboard theme color.
const PRIMARY_COLOR_PROPERTY: &str = "--bs-main-color-primary";

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow!("no window in this context"))
}

/// Resolve the theme color from the document element's computed style.
///
/// An unset property is an error so the app can surface it instead of
/// handing Chart.js an empty color string.
pub fn theme_primary_color() -> Result<String> {
    let window = window()?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow!("document has no root element"))?;
    let style = window
        .get_computed_style(&root)
        .map_err(|_| anyhow!("getComputedStyle failed"))?
        .ok_or_else(|| anyhow!("document root has no computed style"))?;
    let color = style
        .get_property_value(PRIMARY_COLOR_PROPERTY)
        .map_err(|_| anyhow!("could not read {PRIMARY_COLOR_PROPERTY}"))?
        .trim()
        .to_string();
    if color.is_empty() {
        bail!("{PRIMARY_COLOR_PROPERTY} is not set on the document element");
    }
    Ok(color)
}

/// Current page URL parsed from `location.href`.
pub fn current_url() -> Result<Url> {
    let href = window()?
        .location()
        .href()
        .map_err(|_| anyhow!("could not read location.href"))?;
    Url::parse(&href).context("current location is not a valid URL")
}

/// Navigate with a full page load; the server re-renders for the new filters.
pub fn navigate_to(url: &Url) -> Result<()> {
    window()?
        .location()
        .set_href(url.as_str())
        .map_err(|_| anyhow!("navigation to {url} failed"))
}

/// Rewrite one filter parameter on the current URL and navigate there.
/// An empty value selects "All" and deletes the parameter.
pub fn apply_filter(param: FilterParam, value: &str) -> Result<()> {
    let next = with_query_param(&current_url()?, param.name(), value);
    navigate_to(&next)
}

/// Current value of one filter parameter in the page URL ("" when absent,
/// which the dropdowns show as "All").
pub fn filter_value(param: FilterParam) -> String {
    current_url()
        .ok()
        .and_then(|url| {
            url.query_pairs()
                .find(|(name, _)| name.as_ref() == param.name())
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default()
}
