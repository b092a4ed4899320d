/*
[INPUT]:  Mock console responses for the fcluns resource
[OUTPUT]: Verified add/list/get/remove flows and 400 rejections
[POS]:    Integration tests - fcluns endpoints
[UPDATE]: When the fcluns resource changes
*/

mod common;

use common::mock_console;
use gingers390x_adapter::{AddFcLunRequest, GingerClient};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn lun_body(configured: &str) -> serde_json::Value {
    serde_json::json!({
        "status": "online",
        "product": "2107900",
        "vendor": "IBM",
        "configured": configured,
        "hbaId": "0.0.7100",
        "remoteWwpn": "0x500507680b244ac1",
        "controllerSN": "75BXYG1",
        "lunId": "0xc101000000000000",
        "type": "disk",
    })
}

fn add_request() -> AddFcLunRequest {
    AddFcLunRequest {
        hba_id: "0.0.7100".to_string(),
        remote_wwpn: "0x500507680b244ac1".to_string(),
        lun_id: "0xc101000000000000".to_string(),
    }
}

#[tokio::test]
async fn add_then_get_then_remove_lun() {
    let server = mock_console().await;
    let request = add_request();
    let resource = request.resource_id();

    Mock::given(method("POST"))
        .and(path("/plugins/gingers390x/fcluns"))
        .and(body_json(serde_json::json!({
            "hbaId": "0.0.7100",
            "remoteWwpn": "0x500507680b244ac1",
            "lunId": "0xc101000000000000",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/plugins/gingers390x/fcluns/{resource}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(lun_body("true")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/plugins/gingers390x/fcluns/{resource}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    client.add_fc_lun(&request).await.unwrap();

    let lun = client.get_fc_lun(&resource).await.unwrap();
    assert!(lun.is_configured());
    assert_eq!(lun.resource_id(), resource);

    client.remove_fc_lun(&resource).await.unwrap();
}

#[tokio::test]
async fn list_luns() {
    let server = mock_console().await;
    Mock::given(method("GET"))
        .and(path("/plugins/gingers390x/fcluns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            lun_body("true"),
            lun_body("false"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    let luns = assert_ok!(client.list_fc_luns().await);
    assert_eq!(luns.len(), 2);
    assert!(luns[0].is_configured());
    assert!(!luns[1].is_configured());
}

#[tokio::test]
async fn add_with_missing_field_is_rejected_with_400() {
    let server = mock_console().await;
    Mock::given(method("POST"))
        .and(path("/plugins/gingers390x/fcluns"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "reason": "Missing parameter: remoteWwpn",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    let mut request = add_request();
    request.remote_wwpn = String::new();

    let err = client.add_fc_lun(&request).await.unwrap_err();
    assert_eq!(err.api_status(), Some(400));
}

#[tokio::test]
async fn removing_unknown_lun_is_rejected_with_400() {
    let server = mock_console().await;
    Mock::given(method("DELETE"))
        .and(path("/plugins/gingers390x/fcluns/bad:lun:id"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "reason": "LUN bad:lun:id does not exist",
        })))
        .mount(&server)
        .await;

    let client = GingerClient::new(&server.uri()).unwrap();
    let err = client.remove_fc_lun("bad:lun:id").await.unwrap_err();
    assert_eq!(err.api_status(), Some(400));
}
