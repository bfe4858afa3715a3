//! Chart header component with title and active-filter summary.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// What the chart is currently filtered by (e.g., "Departments: 2 | Time range set")
    #[props(!optional)]
    pub summary: Option<String>,
}

/// Header for chart sections showing title and optional filter summary.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if let Some(summary) = props.summary {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Filtered by {summary}"
                }
            }
        }
    }
}
