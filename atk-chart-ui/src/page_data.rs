//! Typed readers for the data the surrounding page supplies as JS globals.
//!
//! The server renders the dashboard page with inline `<script>` bindings
//! (`months`, `counts`, `weekdays`, `weekday_counts`, plus optional `sites`
//! and `years` for the filter dropdowns). Everything is converted into owned
//! Rust values up front so the chart setup takes explicit parameters instead
//! of reaching for ambient globals.

use anyhow::{anyhow, bail, Context, Result};
use atk_core::series::ChartSeries;
use wasm_bindgen::JsValue;

fn global(name: &str) -> Result<JsValue> {
    let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map_err(|_| anyhow!("failed to read global `{name}`"))?;
    if value.is_undefined() || value.is_null() {
        bail!("page did not supply the `{name}` global");
    }
    Ok(value)
}

fn global_array(name: &str) -> Result<js_sys::Array> {
    let value = global(name)?;
    if !js_sys::Array::is_array(&value) {
        bail!("global `{name}` is not an array");
    }
    Ok(js_sys::Array::from(&value))
}

/// Read a global holding an array of string labels.
pub fn read_labels(name: &str) -> Result<Vec<String>> {
    global_array(name)?
        .iter()
        .map(|v| {
            v.as_string()
                .ok_or_else(|| anyhow!("global `{name}` holds a non-string label"))
        })
        .collect()
}

/// Read a global holding an array of numeric counts.
pub fn read_values(name: &str) -> Result<Vec<f64>> {
    global_array(name)?
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| anyhow!("global `{name}` holds a non-numeric value"))
        })
        .collect()
}

/// Accept either a string or a number for option values (the server emits
/// site ids and years as integers).
fn as_option_value(value: &JsValue) -> Option<String> {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| (n as i64).to_string()))
}

/// The two data series the dashboard page embeds for the charts.
#[derive(Clone, Debug)]
pub struct DashboardData {
    /// Monthly ticket counts (line chart)
    pub monthly: ChartSeries,
    /// Per-weekday ticket counts (bar chart)
    pub weekly: ChartSeries,
}

impl DashboardData {
    /// Read and validate all four chart globals.
    pub fn from_page() -> Result<Self> {
        let monthly = ChartSeries::new(read_labels("months")?, read_values("counts")?)
            .context("monthly series")?;
        let weekly = ChartSeries::new(read_labels("weekdays")?, read_values("weekday_counts")?)
            .context("weekly series")?;
        Ok(Self { monthly, weekly })
    }
}

/// One entry of the site filter dropdown.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteOption {
    pub id: String,
    pub name: String,
}

/// Read the optional `sites` global (array of `{id, name}` objects).
///
/// An absent global yields an empty list, not an error: site-locked users
/// get a page without the site filter options.
pub fn read_site_options() -> Vec<SiteOption> {
    let Ok(array) = global_array("sites") else {
        return Vec::new();
    };
    array
        .iter()
        .filter_map(|entry| {
            let id = js_sys::Reflect::get(&entry, &JsValue::from_str("id")).ok()?;
            let name = js_sys::Reflect::get(&entry, &JsValue::from_str("name")).ok()?;
            Some(SiteOption {
                id: as_option_value(&id)?,
                name: name.as_string()?,
            })
        })
        .collect()
}

/// Read the optional `years` global (array of years with ticket data).
pub fn read_year_options() -> Vec<String> {
    let Ok(array) = global_array("years") else {
        return Vec::new();
    };
    array.iter().filter_map(|v| as_option_value(&v)).collect()
}
