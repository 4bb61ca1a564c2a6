//! Chart.js `data` and `options` payload builders.
//!
//! Chart.js is an opaque collaborator: the app hands it `{type, data, options}`
//! and it draws onto a canvas. These builders produce the `data` and `options`
//! halves as `serde_json::Value`, serialized across the JS bridge. Tooltip
//! titles cannot cross the boundary as a callback, so the line chart options
//! carry them under `plugins.tooltip.tooltipTitles` and the bridge JS installs
//! the `title` callback that indexes into them.

use serde_json::{json, Value};

use crate::series::{ChartSeries, FULL_MONTH_NAMES};

/// Tick styling shared by both charts' axes.
fn axis_ticks(font_size: u32) -> Value {
    json!({
        "display": true,
        "color": "#737373",
        "padding": 10,
        "font": {
            "size": font_size,
            "lineHeight": 2
        }
    })
}

/// Hidden grid used on both charts' x-axes.
fn hidden_grid() -> Value {
    json!({
        "drawBorder": false,
        "display": false,
        "drawOnChartArea": false,
        "drawTicks": false,
        "borderDash": [5, 5]
    })
}

/// Dataset for the monthly ticket count line chart.
pub fn monthly_line_data(series: &ChartSeries, primary_color: &str) -> Value {
    json!({
        "labels": series.labels,
        "datasets": [{
            "label": "Tickets",
            "tension": 0,
            "borderWidth": 2,
            "pointRadius": 3,
            "pointBackgroundColor": primary_color,
            "pointBorderColor": "transparent",
            "borderColor": primary_color,
            "backgroundColor": "transparent",
            "fill": true,
            "data": series.values,
            "maxBarThickness": 6
        }]
    })
}

/// Options for the monthly line chart: legend hidden, index-mode hover,
/// dashed horizontal grid lines only, full month names as tooltip titles.
pub fn monthly_line_options() -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "display": false
            },
            "tooltip": {
                "tooltipTitles": FULL_MONTH_NAMES
            }
        },
        "interaction": {
            "intersect": false,
            "mode": "index"
        },
        "scales": {
            "y": {
                "grid": {
                    "drawBorder": false,
                    "display": true,
                    "drawOnChartArea": true,
                    "drawTicks": false,
                    "borderDash": [4, 4],
                    "color": "#e5e5e5"
                },
                "ticks": axis_ticks(12)
            },
            "x": {
                "grid": hidden_grid(),
                "ticks": axis_ticks(12)
            }
        }
    })
}

/// Dataset for the per-weekday ticket count bar chart.
pub fn weekday_bar_data(series: &ChartSeries, primary_color: &str) -> Value {
    json!({
        "labels": series.labels,
        "datasets": [{
            "label": "Views",
            "tension": 0.4,
            "borderWidth": 0,
            "borderRadius": 4,
            "borderSkipped": false,
            "backgroundColor": primary_color,
            "data": series.values,
            "barThickness": "flex"
        }]
    })
}

/// Options for the weekday bar chart: legend hidden, y-axis anchored at zero.
pub fn weekday_bar_options() -> Value {
    let mut y_ticks = axis_ticks(14);
    y_ticks["suggestedMin"] = json!(0);
    y_ticks["suggestedMax"] = json!(500);
    y_ticks["beginAtZero"] = json!(true);

    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "display": false
            }
        },
        "interaction": {
            "intersect": false,
            "mode": "index"
        },
        "scales": {
            "y": {
                "grid": {
                    "drawBorder": false,
                    "display": true,
                    "drawOnChartArea": true,
                    "drawTicks": false,
                    "borderDash": [5, 5],
                    "color": "#e5e5e5"
                },
                "ticks": y_ticks
            },
            "x": {
                "grid": hidden_grid(),
                "ticks": axis_ticks(14)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{
        monthly_line_data, monthly_line_options, weekday_bar_data, weekday_bar_options,
    };
    use crate::series::{ChartSeries, MONTH_ABBREVS};

    fn weekday_series() -> ChartSeries {
        ChartSeries::new(
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .map(String::from)
                .to_vec(),
            vec![5.0, 3.0, 8.0, 2.0, 4.0, 1.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn test_tooltip_titles_cover_the_year() {
        let opts = monthly_line_options();
        let titles = &opts["plugins"]["tooltip"]["tooltipTitles"];
        assert_eq!(titles.as_array().unwrap().len(), 12);
        assert_eq!(titles[0], "January");
        assert_eq!(titles[11], "December");
    }

    #[test]
    fn test_legend_is_hidden_on_both_charts() {
        assert_eq!(monthly_line_options()["plugins"]["legend"]["display"], false);
        assert_eq!(weekday_bar_options()["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn test_bar_chart_has_one_point_per_weekday() {
        let data = weekday_bar_data(&weekday_series(), "#5e72e4");
        assert_eq!(data["labels"].as_array().unwrap().len(), 7);
        assert_eq!(data["datasets"][0]["data"].as_array().unwrap().len(), 7);
        assert_eq!(data["datasets"][0]["backgroundColor"], "#5e72e4");
    }

    #[test]
    fn test_line_dataset_uses_theme_color() {
        let series = ChartSeries::new(
            MONTH_ABBREVS.map(String::from).to_vec(),
            vec![0.0; 12],
        )
        .unwrap();
        let data = monthly_line_data(&series, "#5e72e4");
        let dataset = &data["datasets"][0];
        assert_eq!(dataset["borderColor"], "#5e72e4");
        assert_eq!(dataset["pointBackgroundColor"], "#5e72e4");
        assert_eq!(dataset["backgroundColor"], "transparent");
        assert_eq!(dataset["data"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn test_bar_y_axis_is_anchored_at_zero() {
        let opts = weekday_bar_options();
        let ticks = &opts["scales"]["y"]["ticks"];
        assert_eq!(ticks["beginAtZero"], true);
        assert_eq!(ticks["suggestedMin"], 0);
        assert_eq!(ticks["suggestedMax"], 500);
    }
}
