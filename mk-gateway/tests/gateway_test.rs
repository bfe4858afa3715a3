// Gateway tests against a wiremock server.

use mk_gateway::{
    Gateway, GatewayError, MSG_FORBIDDEN, MSG_GENERIC, MSG_NETWORK, MSG_NOT_FOUND, MSG_SERVER,
    MSG_UNAUTHORIZED,
};
use mk_model::{MetricsPayload, NoticeLevel, OptionItem, Record};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Gateway) {
    let server = MockServer::start().await;
    let gateway = Gateway::with_client(&server.uri(), reqwest::Client::new());
    (server, gateway)
}

async fn respond_with_status(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/km-review/gettempId/page/date"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

async fn post_records(gateway: &Gateway) -> Result<Vec<Record>, GatewayError> {
    gateway
        .post("/km-review/gettempId/page/date", &json!({"current": 1, "pageSize": 10}))
        .await
}

// ── Happy path ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_post_unwraps_envelope_data() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/km-review/gettempId/page/date"))
        .and(body_json(json!({"current": 1, "pageSize": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": [
                {"FD_ID": "a1", "FD_SUBJECT": "Boiler check", "FD_NUMBER": "R-1",
                 "FD_PROCESS_STATUS": "20", "FD_CREATE_TIME": "2024-01-01 08:00:00",
                 "FD_LAST_MODIFIED_TIME": "2024-01-02 08:00:00"},
                {"FD_ID": "a2", "FD_SUBJECT": "Crane audit", "FD_NUMBER": "R-2",
                 "FD_PROCESS_STATUS": "30", "FD_CREATE_TIME": null,
                 "FD_LAST_MODIFIED_TIME": null}
            ]
        })))
        .mount(&server)
        .await;

    let records = post_records(&gateway).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].subject, "Boiler check");
    assert_eq!(records[1].status.label(), "Pending");
}

#[tokio::test]
async fn test_get_option_list() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Optimize/PhaseIIofEHS/getDept/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": [{"value": "v1", "label": "Safety", "deptId": "D-1"}]
        })))
        .mount(&server)
        .await;

    let options: Vec<OptionItem> = gateway.get("/Optimize/PhaseIIofEHS/getDept/").await.unwrap();
    assert_eq!(options[0].id, "D-1");
}

#[tokio::test]
async fn test_get_with_query_string() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Optimize/PhaseIIofEHS/getDangerousGoods/all"))
        .and(query_param("fdValue", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": 0, "data": []})))
        .mount(&server)
        .await;

    let entries: Vec<serde_json::Value> = gateway
        .get("/Optimize/PhaseIIofEHS/getDangerousGoods/all?fdValue=")
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_metrics_payload_decodes() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/Optimize/PhaseIIofEHS/Echart/"))
        .and(body_json(json!({"page": 1, "size": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 0,
            "data": {"fdLegend": [], "fdType": ["A", "B"], "fdDate": [0.5, 0.8], "fdDate2": [3, 4]}
        })))
        .mount(&server)
        .await;

    let payload: MetricsPayload = gateway
        .post("/Optimize/PhaseIIofEHS/Echart/", &json!({"page": 1, "size": 10}))
        .await
        .unwrap();
    assert_eq!(payload.categories, vec!["A", "B"]);
    assert_eq!(payload.secondary, vec![3.0, 4.0]);
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn test_business_status_uses_msg() {
    let (server, gateway) = setup().await;
    respond_with_status(&server, 200, json!({"status": 1, "msg": "Template not found"})).await;

    let err = post_records(&gateway).await.unwrap_err();
    assert!(matches!(err, GatewayError::Business { status: 1, .. }));
    let notice = err.notice();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Template not found");
}

#[tokio::test]
async fn test_business_status_without_msg() {
    let (server, gateway) = setup().await;
    respond_with_status(&server, 200, json!({"status": 7, "data": null})).await;

    let err = post_records(&gateway).await.unwrap_err();
    assert_eq!(err.user_message(), MSG_GENERIC);
}

#[tokio::test]
async fn test_401_maps_to_sign_in_message() {
    let (server, gateway) = setup().await;
    respond_with_status(&server, 401, json!({"msg": "token expired"})).await;

    let err = post_records(&gateway).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), MSG_UNAUTHORIZED);
}

#[tokio::test]
async fn test_403_404_500_messages() {
    for (status, expected) in [(403, MSG_FORBIDDEN), (404, MSG_NOT_FOUND), (500, MSG_SERVER)] {
        let (server, gateway) = setup().await;
        respond_with_status(&server, status, json!({})).await;

        let err = post_records(&gateway).await.unwrap_err();
        assert_eq!(err.user_message(), expected, "status {status}");
    }
}

#[tokio::test]
async fn test_other_status_uses_body_msg() {
    let (server, gateway) = setup().await;
    respond_with_status(&server, 502, json!({"msg": "Upstream unavailable"})).await;

    let err = post_records(&gateway).await.unwrap_err();
    assert_eq!(err.user_message(), "Upstream unavailable");
}

#[tokio::test]
async fn test_other_status_without_body() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/km-review/gettempId/page/date"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = post_records(&gateway).await.unwrap_err();
    assert_eq!(err.user_message(), MSG_GENERIC);
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/km-review/gettempId/page/date"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = post_records(&gateway).await.unwrap_err();
    assert!(matches!(err, GatewayError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Port 9 (discard) is not listening on test hosts.
    let gateway = Gateway::with_client("http://127.0.0.1:9", reqwest::Client::new());

    let err = post_records(&gateway).await.unwrap_err();
    assert!(matches!(err, GatewayError::Network(_)), "got {err:?}");
    assert_eq!(err.user_message(), MSG_NETWORK);
}
