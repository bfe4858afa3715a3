//! Shared Dioxus components and ECharts bridge for the review-table and
//! metrics-dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: ECharts registry wrappers via `js_sys::eval()` and a window resize listener
//! - `state`: the toast queue every app provides through context
//! - `page`: URL parameters and origin of the hosting page
//! - `components`: Reusable RSX components (tables, modals, filters, charts)

pub mod components;
pub mod js_bridge;
pub mod page;
pub mod state;
