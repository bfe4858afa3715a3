//! ECharts option for the dual-axis bar + line chart.
//!
//! The option is built as JSON and handed to the chart bridge unchanged,
//! except for `axisLabel.labelMaxChars`, which the bridge turns into a
//! truncating label formatter (functions cannot travel through JSON).

use mk_model::ChartSeriesBundle;
use serde_json::{json, Value};

/// Series colours: bar, (unused), line axis.
pub const PALETTE: [&str; 3] = ["#5070dd", "#b6d634", "#505372"];

/// Category labels longer than this are shown truncated with `...`.
pub const MAX_LABEL_CHARS: usize = 8;

/// Rotate x-axis labels once there are more categories than this.
pub const ROTATE_AFTER: usize = 8;

/// Enlarge the bottom margin once there are more categories than this.
pub const WIDE_GRID_AFTER: usize = 10;

/// Build the full option for `bundle`.
///
/// The bar series sits on the right-hand axis (index 0) and the line on the
/// left-hand axis (index 1); both axes align their ticks.
pub fn chart_option(bundle: &ChartSeriesBundle) -> Value {
    let count = bundle.len();
    let [bar_name, line_name] = bundle.names();
    let rotate = if count > ROTATE_AFTER { 45 } else { 0 };
    let bottom = if count > WIDE_GRID_AFTER { "15%" } else { "10%" };

    json!({
        "color": PALETTE,
        "tooltip": {
            "trigger": "axis",
            "axisPointer": { "type": "cross" }
        },
        "grid": {
            "left": "3%",
            "right": "4%",
            "bottom": bottom,
            "containLabel": true
        },
        "toolbox": {
            "feature": {
                "dataView": { "show": true, "readOnly": false },
                "restore": { "show": true },
                "saveAsImage": { "show": true }
            }
        },
        "legend": {
            "data": [bar_name, line_name],
            "top": "top"
        },
        "xAxis": [{
            "type": "category",
            "axisTick": { "alignWithLabel": true },
            "data": bundle.categories(),
            "axisLabel": {
                "interval": 0,
                "rotate": rotate,
                "margin": 8,
                "fontSize": 12,
                "color": "#666",
                "labelMaxChars": MAX_LABEL_CHARS
            },
            "axisLine": { "lineStyle": { "color": "#ccc" } }
        }],
        "yAxis": [
            value_axis(bar_name, "right", PALETTE[0]),
            value_axis(line_name, "left", PALETTE[2])
        ],
        "series": [
            {
                "name": bar_name,
                "type": "bar",
                "data": bundle.bar(),
                "label": { "show": true, "position": "top", "formatter": "{c}" },
                "barWidth": "60%"
            },
            {
                "name": line_name,
                "type": "line",
                "yAxisIndex": 1,
                "data": bundle.line(),
                "label": { "show": true, "position": "top", "formatter": "{c}" },
                "symbol": "circle",
                "symbolSize": 6,
                "lineStyle": { "width": 3 }
            }
        ]
    })
}

fn value_axis(name: &str, position: &str, color: &str) -> Value {
    json!({
        "type": "value",
        "name": name,
        "position": position,
        "alignTicks": true,
        "axisLine": { "show": true, "lineStyle": { "color": color } },
        "axisLabel": { "formatter": "{value} " }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(n: usize) -> ChartSeriesBundle {
        ChartSeriesBundle::new(
            (0..n).map(|i| format!("Department {i}")).collect(),
            (0..n).map(|i| i as f64).collect(),
            (0..n).map(|i| i as f64 / 10.0).collect(),
            ["Orders".into(), "Rate".into()],
        )
        .unwrap()
    }

    #[test]
    fn series_and_axes_are_wired() {
        let option = chart_option(&bundle(3));
        assert_eq!(option["series"][0]["type"], "bar");
        assert_eq!(option["series"][0]["name"], "Orders");
        assert_eq!(option["series"][0]["data"], json!([0.0, 1.0, 2.0]));
        assert_eq!(option["series"][0]["barWidth"], "60%");
        assert_eq!(option["series"][1]["type"], "line");
        assert_eq!(option["series"][1]["yAxisIndex"], 1);
        assert_eq!(option["series"][1]["symbolSize"], 6);
        assert_eq!(option["yAxis"][0]["position"], "right");
        assert_eq!(option["yAxis"][1]["position"], "left");
        assert_eq!(option["yAxis"][1]["alignTicks"], true);
        assert_eq!(option["legend"]["data"], json!(["Orders", "Rate"]));
        assert_eq!(option["color"], json!(PALETTE));
    }

    #[test]
    fn few_categories_stay_flat() {
        let option = chart_option(&bundle(8));
        assert_eq!(option["xAxis"][0]["axisLabel"]["rotate"], 0);
        assert_eq!(option["grid"]["bottom"], "10%");
        assert_eq!(option["xAxis"][0]["axisLabel"]["labelMaxChars"], 8);
    }

    #[test]
    fn many_categories_rotate_and_widen_grid() {
        let nine = chart_option(&bundle(9));
        assert_eq!(nine["xAxis"][0]["axisLabel"]["rotate"], 45);
        assert_eq!(nine["grid"]["bottom"], "10%");

        let eleven = chart_option(&bundle(11));
        assert_eq!(eleven["grid"]["bottom"], "15%");
    }

    #[test]
    fn empty_bundle_still_builds() {
        let option = chart_option(&ChartSeriesBundle::empty(["A".into(), "B".into()]));
        assert_eq!(option["xAxis"][0]["data"], json!([]));
        assert_eq!(option["series"][1]["data"], json!([]));
    }
}
