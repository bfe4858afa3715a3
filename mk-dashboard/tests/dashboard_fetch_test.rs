// Dashboard fetches against a wiremock EHS backend.

use mk_dashboard::catalog::CATALOG_PATH;
use mk_dashboard::{
    fetch_catalog, fetch_metrics, fetch_options, CatalogSearch, FilterPanel, MetricsError,
    MetricsPanel, MetricsRequest, OptionSource, PanelState,
};
use mk_gateway::{Gateway, MSG_UNAUTHORIZED};
use mk_model::{NoticeLevel, NoticeLog};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Gateway) {
    let server = MockServer::start().await;
    let gateway = Gateway::with_client(&server.uri(), reqwest::Client::new());
    (server, gateway)
}

fn payload() -> serde_json::Value {
    json!({
        "status": 0,
        "data": {
            "fdLegend": ["2024"],
            "fdType": ["Safety", "Logistics", "IT"],
            "fdDate": [0.9, 0.5, 0.75],
            "fdDate2": [12, 4, 8]
        }
    })
}

// ── Metrics ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_initial_training_orders_load() {
    let (server, gateway) = setup().await;
    Mock::given(method("POST"))
        .and(path("/Optimize/PhaseIIofEHS/Echart/"))
        .and(body_json(json!({"page": 1, "size": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload()))
        .expect(1)
        .mount(&server)
        .await;

    let bundle = fetch_metrics(&gateway, MetricsPanel::TrainingOrders, &MetricsRequest::initial())
        .await
        .unwrap();

    // orders (fdDate2) on the bar, completion rate (fdDate) on the line
    assert_eq!(bundle.bar(), &[12.0, 4.0, 8.0]);
    assert_eq!(bundle.line(), &[0.9, 0.5, 0.75]);
    assert_eq!(bundle.names()[0], "Department orders");
}

#[tokio::test]
async fn test_course_panel_sends_snapshot() {
    let (server, gateway) = setup().await;
    Mock::given(method("POST"))
        .and(path("/Optimize/PhaseIIofEHS/getEchartCouser/"))
        .and(body_json(json!({"fdName": ["C-1"], "fdDeptList": ["D-9"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload()))
        .mount(&server)
        .await;

    let log = NoticeLog::new();
    let mut panel = FilterPanel::new(MetricsPanel::CourseCompletion.filter_fields());
    panel.toggle_course("C-1");
    panel.toggle_department("D-9");
    let snapshot = panel.search(&log);

    let bundle = fetch_metrics(
        &gateway,
        MetricsPanel::CourseCompletion,
        &MetricsRequest::Filtered(snapshot),
    )
    .await
    .unwrap();
    assert_eq!(bundle.bar(), &[0.9, 0.5, 0.75]);
    assert_eq!(bundle.line(), &[12.0, 4.0, 8.0]);
}

#[tokio::test]
async fn test_mismatched_arrays_never_reach_the_chart() {
    let (server, gateway) = setup().await;
    Mock::given(method("POST"))
        .and(path("/Optimize/PhaseIIofEHS/getCousorDeptDate/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": {"fdType": ["A", "B"], "fdDate": [1], "fdDate2": [1, 2]}
        })))
        .mount(&server)
        .await;

    let log = NoticeLog::new();
    let mut state = PanelState::new(MetricsPanel::CourseByDepartment);
    let ticket = state.issue();
    let result = fetch_metrics(
        &gateway,
        MetricsPanel::CourseByDepartment,
        &MetricsRequest::initial(),
    )
    .await;
    assert!(matches!(result, Err(MetricsError::Data(_))));

    state.complete(ticket, result, &log);
    assert!(state.bundle().is_empty());
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn test_unauthorized_panel_fetch() {
    let (server, gateway) = setup().await;
    Mock::given(method("POST"))
        .and(path("/Optimize/PhaseIIofEHS/Echart/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = fetch_metrics(&gateway, MetricsPanel::TrainingOrders, &MetricsRequest::initial())
        .await
        .unwrap_err();
    assert_eq!(err.notice().message, MSG_UNAUTHORIZED);
}

// ── Option lists ────────────────────────────────────────────────────

#[tokio::test]
async fn test_option_lists_load_per_panel() {
    let (server, gateway) = setup().await;
    Mock::given(method("GET"))
        .and(path("/Optimize/PhaseIIofEHS/User/getDept/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": [{"value": "Safety", "label": "Safety", "deptId": "D-1"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/Optimize/PhaseIIofEHS/getCouorAll/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 2,
            "msg": "course service offline"
        })))
        .mount(&server)
        .await;

    let log = NoticeLog::new();
    let panel_kind = MetricsPanel::CourseByDepartment;
    let mut panel = FilterPanel::new(panel_kind.filter_fields());
    for &source in panel_kind.option_sources() {
        panel.begin_loading(source);
        let result = fetch_options(&gateway, panel_kind, source).await;
        panel.options_loaded(source, result, &log);
    }

    assert_eq!(panel.options(OptionSource::Departments).items[0].id, "D-1");
    assert!(panel.options(OptionSource::Courses).items.is_empty());
    assert_eq!(log.len(), 1);
    assert_eq!(log.notices()[0].level, NoticeLevel::Warning);
    assert_eq!(log.notices()[0].message, "Failed to load courses");
}

// ── Catalog ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_catalog_search() {
    let (server, gateway) = setup().await;
    Mock::given(method("GET"))
        .and(path("/Optimize/PhaseIIofEHS/getDangerousGoods/all"))
        .and(query_param("fdValue", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": [
                {"ID": "1", "TITLE": "Acetone", "url": "", "DESCRIPTION": "", "FDNAME": "Flammable liquid"},
                {"ID": "2", "TITLE": "Ammonia", "url": "", "DESCRIPTION": "", "FDNAME": "Toxic gas"}
            ]
        })))
        .mount(&server)
        .await;
    assert!(CATALOG_PATH.ends_with("fdValue="));

    let log = NoticeLog::new();
    let mut search = CatalogSearch::new();
    search.loaded(fetch_catalog(&gateway).await, &log);
    assert_eq!(search.entry_count(), 2);

    assert!(search.search("flammable"));
    assert_eq!(search.results()[0].title, "Acetone");
    assert!(log.is_empty());
}
