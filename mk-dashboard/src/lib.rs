//! State for the EHS metrics dashboard.
//!
//! This crate provides:
//! - `filter_panel`: per-panel filter inputs, option lists and snapshots
//! - `metrics`: the three chart panels, their endpoints and fetch sequencing
//! - `option`: the ECharts option for a dual-axis bar + line chart
//! - `renderer`: one-instance-per-container chart lifecycle
//! - `catalog`: hazardous-chemicals catalog search

pub mod catalog;
pub mod filter_panel;
pub mod metrics;
pub mod option;
pub mod renderer;

pub use catalog::{fetch_catalog, CatalogSearch};
pub use filter_panel::{FilterField, FilterPanel, OptionList, OptionSource};
pub use metrics::{
    fetch_metrics, fetch_options, MetricsError, MetricsPanel, MetricsRequest, PanelState,
};
pub use option::chart_option;
pub use renderer::{ChartRenderer, ChartSurface, RenderError};
