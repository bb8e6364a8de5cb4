//! Façade integration tests against a mocked Prefab server

use mockito::Matcher;
use prefab_api::model::{UpdateAccessoryInput, UpdateGroupInput};
use prefab_api::{ApiError, ClientConfig, PrefabClient};

const POWER_STATE: &str = "00000025-0000-1000-8000-0026BB765291";
const LIGHTBULB: &str = "00000043-0000-1000-8000-0026BB765291";

fn client_for(server: &mockito::ServerGuard) -> PrefabClient {
    PrefabClient::with_config(ClientConfig::for_server(server.url()))
}

fn lamp_detail_body() -> String {
    format!(
        r#"{{
            "home": "Home1", "room": "Room1", "name": "Lamp",
            "category": "Lightbulb", "isReachable": true,
            "services": [
                {{
                    "uniqueIdentifier": "svc-1",
                    "name": "Lamp", "typeName": "Lightbulb", "type": "{LIGHTBULB}",
                    "isPrimary": true, "isUserInteractive": true,
                    "characteristics": [
                        {{
                            "uniqueIdentifier": "char-1",
                            "description": "Power State",
                            "properties": ["read", "write"],
                            "typeName": "Power State", "type": "{POWER_STATE}",
                            "metadata": {{"format": "bool"}},
                            "value": "0"
                        }}
                    ]
                }}
            ]
        }}"#
    )
}

#[test]
fn test_list_then_detail_then_update_by_type() {
    let mut server = mockito::Server::new();

    let list = server
        .mock("GET", "/accessories/Home1/Room1")
        .with_status(200)
        .with_body(r#"[{"home":"Home1","room":"Room1","name":"Lamp"}]"#)
        .create();
    let detail = server
        .mock("GET", "/accessories/Home1/Room1/Lamp")
        .with_status(200)
        .with_body(lamp_detail_body())
        .create();
    let update = server
        .mock("PUT", "/accessories/Home1/Room1/Lamp")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(
            r#"{"serviceId":"svc-1","characteristicId":"char-1","value":"1"}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create();

    let client = client_for(&server);

    // Summary view: services stay absent, not defaulted
    let accessories = client.get_accessories("Home1", "Room1").unwrap();
    assert_eq!(accessories.len(), 1);
    assert_eq!(accessories[0].name, "Lamp");
    assert!(accessories[0].services.is_none());

    // Type-based update resolves the id pair from the detail view
    let response = client
        .update_characteristic_by_type("Home1", "Room1", "Lamp", POWER_STATE, "1")
        .unwrap();
    assert_eq!(response, r#"{"success":true}"#);

    list.assert();
    detail.assert();
    update.assert();
}

#[test]
fn test_update_by_type_selects_first_match_across_services() {
    let mut server = mockito::Server::new();

    let body = format!(
        r#"{{
            "home": "Home1", "room": "Room1", "name": "Strip",
            "services": [
                {{
                    "uniqueIdentifier": "svc-a",
                    "name": "A", "typeName": "Lightbulb", "type": "{LIGHTBULB}",
                    "isPrimary": true, "isUserInteractive": true,
                    "characteristics": [
                        {{
                            "uniqueIdentifier": "char-a",
                            "description": "Power State",
                            "properties": [],
                            "typeName": "Power State", "type": "{POWER_STATE}",
                            "metadata": {{}},
                            "value": "0"
                        }}
                    ]
                }},
                {{
                    "uniqueIdentifier": "svc-b",
                    "name": "B", "typeName": "Lightbulb", "type": "{LIGHTBULB}",
                    "isPrimary": false, "isUserInteractive": true,
                    "characteristics": [
                        {{
                            "uniqueIdentifier": "char-b",
                            "description": "Power State",
                            "properties": [],
                            "typeName": "Power State", "type": "{POWER_STATE}",
                            "metadata": {{}},
                            "value": "0"
                        }}
                    ]
                }}
            ]
        }}"#
    );

    let _detail = server
        .mock("GET", "/accessories/Home1/Room1/Strip")
        .with_status(200)
        .with_body(body)
        .create();
    let update = server
        .mock("PUT", "/accessories/Home1/Room1/Strip")
        .match_body(Matcher::JsonString(
            r#"{"serviceId":"svc-a","characteristicId":"char-a","value":"1"}"#.to_string(),
        ))
        .with_status(200)
        .with_body("{}")
        .create();

    let client = client_for(&server);
    client
        .update_characteristic_by_type("Home1", "Room1", "Strip", POWER_STATE, "1")
        .unwrap();

    update.assert();
}

#[test]
fn test_update_by_type_miss_issues_no_update() {
    let mut server = mockito::Server::new();

    let _detail = server
        .mock("GET", "/accessories/Home1/Room1/Lamp")
        .with_status(200)
        .with_body(lamp_detail_body())
        .create();
    let update = server
        .mock("PUT", "/accessories/Home1/Room1/Lamp")
        .expect(0)
        .create();

    let client = client_for(&server);
    let err = client
        .update_characteristic_by_type("Home1", "Room1", "Lamp", "no-such-type", "1")
        .unwrap_err();

    match err {
        ApiError::NotFound(msg) => assert!(msg.contains("no-such-type")),
        other => panic!("expected not-found error, got {:?}", other),
    }
    update.assert();
}

#[test]
fn test_update_by_type_without_services_collection() {
    let mut server = mockito::Server::new();

    let _detail = server
        .mock("GET", "/accessories/Home1/Room1/Lamp")
        .with_status(200)
        .with_body(r#"{"home":"Home1","room":"Room1","name":"Lamp"}"#)
        .create();
    let update = server
        .mock("PUT", "/accessories/Home1/Room1/Lamp")
        .expect(0)
        .create();

    let client = client_for(&server);
    let err = client
        .update_characteristic_by_type("Home1", "Room1", "Lamp", POWER_STATE, "1")
        .unwrap_err();

    match err {
        ApiError::NotFound(msg) => assert!(msg.contains("no services")),
        other => panic!("expected not-found error, got {:?}", other),
    }
    update.assert();
}

#[test]
fn test_update_by_type_with_empty_services_collection() {
    let mut server = mockito::Server::new();

    let _detail = server
        .mock("GET", "/accessories/Home1/Room1/Lamp")
        .with_status(200)
        .with_body(r#"{"home":"Home1","room":"Room1","name":"Lamp","services":[]}"#)
        .create();

    let client = client_for(&server);
    let err = client
        .update_characteristic_by_type("Home1", "Room1", "Lamp", POWER_STATE, "1")
        .unwrap_err();

    // Empty services is a valid state; the characteristic is simply missing
    match err {
        ApiError::NotFound(msg) => assert!(msg.contains(POWER_STATE)),
        other => panic!("expected not-found error, got {:?}", other),
    }
}

#[test]
fn test_path_segments_are_percent_encoded() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/rooms/My%20Home/Living%20Room")
        .with_status(200)
        .with_body(r#"{"home":"My Home","name":"Living Room"}"#)
        .create();

    let client = client_for(&server);
    let room = client.get_room("My Home", "Living Room").unwrap();

    assert_eq!(room.name, "Living Room");
    mock.assert();
}

#[test]
fn test_http_rejection_surfaces_code_and_body() {
    let mut server = mockito::Server::new();

    let _mock = server
        .mock("GET", "/homes/Nowhere")
        .with_status(404)
        .with_body("no such home")
        .create();

    let client = client_for(&server);
    let err = client.get_home("Nowhere").unwrap_err();

    match err {
        ApiError::Status { code, body } => {
            assert_eq!(code, 404);
            assert_eq!(body, "no such home");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[test]
fn test_malformed_payload_is_a_mapping_failure() {
    let mut server = mockito::Server::new();

    let _mock = server
        .mock("GET", "/homes")
        .with_status(200)
        .with_body(r#"[{"title":"missing name field"}]"#)
        .create();

    let client = client_for(&server);
    let err = client.get_homes().unwrap_err();

    assert!(matches!(err, ApiError::Mapping(_)));
}

#[test]
fn test_unreachable_server_is_a_transport_failure() {
    let client = PrefabClient::with_config(ClientConfig::for_server("http://127.0.0.1:1"));
    let err = client.get_homes().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn test_connectivity_probe_never_errors() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/homes")
        .with_status(200)
        .with_body("[]")
        .create();

    assert!(client_for(&server).test_connection());

    let dead = PrefabClient::with_config(ClientConfig::for_server("http://127.0.0.1:1"));
    assert!(!dead.test_connection());
}

#[test]
fn test_scene_listing_and_execution() {
    let mut server = mockito::Server::new();

    let _list = server
        .mock("GET", "/scenes/Home1")
        .with_status(200)
        .with_body(
            r#"[{"home":"Home1","uniqueIdentifier":"A1","name":"Movie Night","isBuiltIn":false}]"#,
        )
        .create();
    let execute = server
        .mock("POST", "/scenes/Home1/A1/execute")
        .with_status(200)
        .with_body(r#"{"success":true,"scene":"Movie Night"}"#)
        .create();

    let client = client_for(&server);

    let scenes = client.get_scenes("Home1").unwrap();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].name, "Movie Night");

    let response = client.execute_scene("Home1", "A1").unwrap();
    assert!(response.contains("success"));
    execute.assert();
}

#[test]
fn test_group_detail_and_update() {
    let mut server = mockito::Server::new();

    let _detail = server
        .mock("GET", "/groups/Home1/G1")
        .with_status(200)
        .with_body(format!(
            r#"{{
                "home": "Home1", "uniqueIdentifier": "G1", "name": "Downstairs",
                "services": [
                    {{"accessoryName": "Lamp", "serviceName": "Lamp",
                      "serviceType": "{LIGHTBULB}", "uniqueIdentifier": "svc-1"}}
                ]
            }}"#
        ))
        .create();
    let update = server
        .mock("PUT", "/groups/Home1/G1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(format!(
            r#"{{"characteristicType":"{POWER_STATE}","value":"1"}}"#
        )))
        .with_status(200)
        .with_body(r#"{"success":true,"updated":1,"failed":0}"#)
        .create();

    let client = client_for(&server);

    let group = client.get_group("Home1", "G1").unwrap();
    assert_eq!(group.services.len(), 1);

    let input = UpdateGroupInput {
        characteristic_type: POWER_STATE.to_string(),
        value: "1".to_string(),
    };
    client.update_group("Home1", "G1", &input).unwrap();
    update.assert();
}

#[test]
fn test_direct_accessory_update_sends_body_verbatim() {
    let mut server = mockito::Server::new();

    let update = server
        .mock("PUT", "/accessories/Home1/Room1/Lamp")
        .match_body(Matcher::JsonString(
            r#"{"serviceId":"svc-1","characteristicId":"char-1","value":"1"}"#.to_string(),
        ))
        .with_status(200)
        .with_body("{}")
        .create();

    let client = client_for(&server);
    let input = UpdateAccessoryInput {
        service_id: "svc-1".to_string(),
        characteristic_id: "char-1".to_string(),
        value: "1".to_string(),
    };
    client
        .update_accessory("Home1", "Room1", "Lamp", &input)
        .unwrap();
    update.assert();
}

#[test]
fn test_manual_reconfiguration_moves_the_client() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/homes")
        .with_status(200)
        .with_body(r#"[{"name":"Home1"}]"#)
        .create();

    let mut client = PrefabClient::with_config(ClientConfig::for_server("http://127.0.0.1:1"));
    assert!(!client.test_connection());

    client.set_base_url(server.url());
    assert_eq!(client.base_url(), server.url());
    assert_eq!(client.get_homes().unwrap()[0].name, "Home1");
}
