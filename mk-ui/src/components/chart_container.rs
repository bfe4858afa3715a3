//! Chart container component with loading and empty overlays.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (ECharts renders into this)
    pub id: String,
    /// Whether a fetch is in flight
    #[props(default = false)]
    pub loading: bool,
    /// Whether the current data has no categories
    #[props(default = false)]
    pub empty: bool,
    /// Height in pixels; ECharts needs a sized element
    #[props(default = 380)]
    pub height: u32,
}

/// A sized div for an ECharts instance with loading/empty overlays.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);
    let overlay = if props.loading {
        Some("Loading chart...")
    } else if props.empty {
        Some("No data")
    } else {
        None
    };

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
            if let Some(text) = overlay {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; pointer-events: none;",
                    "{text}"
                }
            }
        }
    }
}
