//! End-to-end tool dispatch tests: JSON in, shaped result out.

use nso_mcp_server::datastore::SyncOutcome;
use nso_mcp_server::{
    DeviceRecord, InMemoryDatastore, NsoMcpServer, NsoOperationHandler, Principal,
};
use serde_json::json;

fn server_over(store: &InMemoryDatastore) -> NsoMcpServer<InMemoryDatastore> {
    let principal = Principal {
        user: "nsoadmin".to_string(),
        context: "system".to_string(),
    };
    NsoMcpServer::new(NsoOperationHandler::new(store.clone(), principal))
}

fn seeded_store() -> InMemoryDatastore {
    let store = InMemoryDatastore::new();
    store.add_device(
        DeviceRecord::new("r1", "10.0.0.1")
            .with_platform("ios-xr", "7.2", "NCS5500")
            .with_netconf_ned("ned:iosxr"),
    );
    store.add_device(
        DeviceRecord::new("r2", "10.0.0.2")
            .with_platform("ios-xr", "7.1", "NCS540")
            .with_netconf_ned("ned:iosxr"),
    );
    store.add_device(
        DeviceRecord::new("r3", "10.0.0.3")
            .with_platform("ios-xr", "7.4", "NCS540")
            .with_netconf_ned("ned:iosxr"),
    );
    store.add_device_group("core", &["r1", "r2", "r3"]);
    store
}

#[tokio::test]
async fn list_devices_reports_names_and_count() {
    let store = seeded_store();
    let result = server_over(&store)
        .execute_tool("nso_list_devices", json!({}))
        .await;
    assert!(result.success);
    assert_eq!(result.content["devices"], json!(["r1", "r2", "r3"]));
    assert_eq!(result.content["count"], json!(3));
    assert_eq!(result.metadata.unwrap()["operation"], json!("list_devices"));
}

#[tokio::test]
async fn model_filter_arguments_are_trimmed_and_case_folded() {
    let store = seeded_store();
    let result = server_over(&store)
        .execute_tool("nso_list_devices_by_model", json!({"model": " IOS-XR "}))
        .await;
    assert!(result.success);
    assert_eq!(result.content["count"], json!(3));
}

#[tokio::test]
async fn group_sync_dispatch_passes_member_outcomes_through() {
    let store = seeded_store();
    store.set_sync_outcome("r2", SyncOutcome::Fail("device unreachable".to_string()));

    let result = server_over(&store)
        .execute_tool("nso_sync_device_group", json!({"device_group_name": "core"}))
        .await;
    assert!(result.success);
    let results = result.content["results"].as_array().unwrap().clone();
    assert_eq!(results.len(), 3);
    assert_eq!(results[1]["name"], json!("r2"));
    assert_eq!(results[1]["result"], json!("device unreachable"));
    assert_eq!(results[0]["result"], json!("true"));
    assert_eq!(results[2]["result"], json!("true"));
}

#[tokio::test]
async fn check_service_sync_reports_store_label() {
    let store = seeded_store();
    store.add_device_service("r1", "/ncs:services/l3vpn:l3vpn{cust-a}");
    store.set_service_sync("/ncs:services/l3vpn:l3vpn{cust-a}", "false");
    let server = server_over(&store);

    let listed = server
        .execute_tool("nso_get_device_services", json!({"device_name": "r1"}))
        .await;
    assert!(listed.success);
    let keypath = listed.content["services"][0].as_str().unwrap().to_string();

    let checked = server
        .execute_tool("nso_check_service_sync", json!({"keypath": keypath}))
        .await;
    assert!(checked.success);
    assert_eq!(checked.content["in_sync"], json!("false"));
}

#[tokio::test]
async fn upstream_failure_carries_its_error_code() {
    let store = seeded_store();
    store.set_unavailable(true);
    let result = server_over(&store)
        .execute_tool("nso_check_device_sync", json!({"device_name": "r1"}))
        .await;
    assert!(!result.success);
    assert_eq!(result.content["error_code"], json!("UPSTREAM_FAILURE"));
}
