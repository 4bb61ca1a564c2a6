//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Chart.js itself is loaded by the surrounding page; the helper functions in
//! `assets/js/*.js` are embedded at compile time, evaluated as globals once
//! Chart.js is available, and exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize chart payloads and call those globals.

// Embed the chart helper JS files at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('ATK JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart helper scripts with a wait-for-Chart.js polling loop.
///
/// The helper files define `renderLineChart(...)` etc. via `function`
/// declarations. To ensure they become globally accessible (not block-scoped
/// inside the setInterval callback), they are evaluated at global scope via
/// indirect eval once the `Chart` global exists, then promoted to `window.*`.
pub fn init_charts() {
    let all_js = [LINE_CHART_JS, BAR_CHART_JS].join("\n");

    // Stash the scripts on window so the polling callback can eval them
    // at global scope.
    let store_js = format!(
        "window.__atkChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForChartJs = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChartJs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__atkChartScripts);
                    delete window.__atkChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof destroyChart !== 'undefined') window.destroyChart = destroyChart;
                    window.__atkChartsReady = true;
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
    log::info!("chart helper scripts scheduled for initialization");
}

fn escape_payload(json: &str) -> String {
    json.replace('\'', "\\'").replace('\n', "")
}

/// Render the monthly line chart onto the canvas with the given id.
///
/// Polls until Chart.js has loaded, the helper scripts are initialized, and
/// the canvas element exists, then renders once.
pub fn render_line_chart(canvas_id: &str, data_json: &str, options_json: &str) {
    let escaped_data = escape_payload(data_json);
    let escaped_options = escape_payload(options_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__atkChartsReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderLineChart('{canvas_id}', '{escaped_data}', '{escaped_options}');
                    }} catch(e) {{ console.error('[ATK] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the weekday bar chart onto the canvas with the given id.
///
/// Same polling contract as [`render_line_chart`].
pub fn render_bar_chart(canvas_id: &str, data_json: &str, options_json: &str) {
    let escaped_data = escape_payload(data_json);
    let escaped_options = escape_payload(options_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__atkChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{canvas_id}', '{escaped_data}', '{escaped_options}');
                    }} catch(e) {{ console.error('[ATK] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart instance bound to the given canvas, if any.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyChart !== 'undefined') window.destroyChart('{}');",
        canvas_id
    ));
}
