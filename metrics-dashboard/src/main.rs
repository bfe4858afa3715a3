//! EHS Metrics Dashboard
//!
//! Three dual-axis charts (bars on the right axis, a line on the left), each
//! with its own filter panel, followed by the hazardous-chemicals catalog
//! search.
//!
//! Data flow:
//! 1. On mount each panel POSTs the first-page body `{"page":1,"size":10}`
//!    to its endpoint and loads its option lists.
//! 2. Search or reset in a filter panel sends that panel's snapshot to the
//!    same endpoint. Only the newest response per panel is applied.
//! 3. `EchartPanel` re-renders its single ECharts instance whenever the
//!    panel's series bundle changes.

use dioxus::prelude::*;
use log::info;
use mk_dashboard::{fetch_metrics, MetricsPanel, MetricsRequest, PanelState};
use mk_gateway::Gateway;
use mk_model::FilterSnapshot;
use mk_ui::components::{
    CatalogSearchView, ChartHeader, EchartPanel, FilterPanelView, NoticeBanner, ToastHost,
};
use mk_ui::js_bridge;
use mk_ui::page;
use mk_ui::state::ToastQueue;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("metrics-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ToastQueue::new);
    // Start loading ECharts before the first panel mounts
    use_hook(js_bridge::init_echarts);
    let gateway = use_hook(|| {
        Gateway::new(&page::gateway_config()).map_err(|e| {
            log::error!("failed to create gateway: {e}");
            e.notice()
        })
    });

    match gateway {
        Ok(gateway) => rsx! {
            ToastHost {}
            Dashboard { gateway: gateway }
        },
        Err(notice) => rsx! {
            div {
                style: "padding: 16px;",
                NoticeBanner { notice: notice }
            }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct DashboardProps {
    gateway: Gateway,
}

#[component]
fn Dashboard(props: DashboardProps) -> Element {
    let gateway = use_context_provider(|| props.gateway.clone());
    use_hook(|| info!("metrics dashboard using {}", gateway.base_url()));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; font-size: 14px; max-width: 1280px; margin: 0 auto;",
            h2 { style: "margin: 0 0 16px 0;", "EHS Metrics" }
            for panel in MetricsPanel::ALL {
                {
                    let id = panel.container_id();
                    rsx! {
                        MetricsSection { key: "{id}", panel: panel }
                    }
                }
            }
            CatalogSearchView {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MetricsSectionProps {
    panel: MetricsPanel,
}

/// Filter panel plus chart for one dashboard panel.
#[component]
fn MetricsSection(props: MetricsSectionProps) -> Element {
    let panel = props.panel;
    let gateway = use_context::<Gateway>();
    let gateway = use_signal(move || gateway);
    let toasts = use_context::<ToastQueue>();
    let mut state = use_signal(|| PanelState::new(panel));
    let mut summary = use_signal(|| None::<String>);
    let bundle = use_memo(move || state.read().bundle().clone());

    let mut load = move |request: MetricsRequest| {
        let ticket = state.write().issue();
        let gateway = (*gateway.peek()).clone();
        spawn(async move {
            let result = fetch_metrics(&gateway, panel, &request).await;
            state.write().complete(ticket, result, &toasts);
        });
    };

    use_effect(move || load(MetricsRequest::initial()));

    let on_search = move |snapshot: FilterSnapshot| {
        let parts = snapshot.summary();
        summary.set((!parts.is_empty()).then(|| parts.join(" | ")));
        load(MetricsRequest::Filtered(snapshot));
    };

    let loading = state.read().is_loading();

    rsx! {
        section {
            style: "margin-bottom: 32px; padding: 16px; border: 1px solid #f0f0f0; border-radius: 8px;",
            ChartHeader { title: panel.title().to_string(), summary: summary() }
            FilterPanelView {
                panel: panel,
                loading: loading,
                on_search: on_search,
            }
            EchartPanel {
                container_id: panel.container_id().to_string(),
                bundle: bundle,
                loading: loading,
            }
        }
    }
}
