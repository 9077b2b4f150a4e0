//! Integration tests for the operation handler over the in-memory datastore.

use nso_mcp_server::datastore::SyncOutcome;
use nso_mcp_server::{
    DeviceRecord, EntityKind, InMemoryDatastore, NedType, NsoError, NsoOperationHandler, Principal,
};

fn principal() -> Principal {
    Principal {
        user: "nsoadmin".to_string(),
        context: "system".to_string(),
    }
}

fn seeded_store() -> InMemoryDatastore {
    let store = InMemoryDatastore::new();

    store.add_ned_id("ned:lsa-netconf");
    store.add_ned_id("ned:netconf");
    store.add_ned_id("ned:snmp");
    store.add_ned_id("cisco-iosxr-nc-7.4:cisco-iosxr-nc-7.4");
    store.add_ned_id("juniper-junos-nc-4.6:juniper-junos-nc-4.6");

    store.add_device(
        DeviceRecord::new("r1", "10.0.0.1")
            .with_platform("ios-xr", "7.2", "NCS5500")
            .with_netconf_ned("ned:iosxr"),
    );
    store.add_device(
        DeviceRecord::new("r2", "10.0.0.2")
            .with_platform("Cisco-IOS-XR", "7.1", "NCS540")
            .with_netconf_ned("cisco-iosxr-nc-7.4:cisco-iosxr-nc-7.4"),
    );
    store.add_device(
        DeviceRecord::new("sw1", "10.0.1.1")
            .with_platform("ios", "15.2", "C3650")
            .with_cli_ned("cisco-ios-cli-6.91:cisco-ios-cli-6.91"),
    );

    store.add_device_group("core", &["r1", "r2", "sw1"]);

    store.add_service_type("l3vpn:l3vpn");
    store.add_service_type("base-config-day1-xr:base-config-day1-xr");
    store.add_service_type("standalone-day1-service");

    store.add_device_service("r1", "/ncs:services/l3vpn:l3vpn{cust-a}");
    store.set_service_sync("/ncs:services/l3vpn:l3vpn{cust-a}", "true");

    store
}

fn handler(store: &InMemoryDatastore) -> NsoOperationHandler<InMemoryDatastore> {
    NsoOperationHandler::new(store.clone(), principal())
}

#[test]
fn ned_listing_excludes_builtins_and_strips_prefixes() {
    let store = seeded_store();
    let neds = handler(&store).ned_ids().unwrap();
    assert_eq!(
        neds,
        vec!["cisco-iosxr-nc-7.4".to_string(), "juniper-junos-nc-4.6".to_string()]
    );
}

#[test]
fn ned_exclusion_ignores_case_and_whitespace() {
    let store = InMemoryDatastore::new();
    store.add_ned_id("  NED:SNMP  ");
    store.add_ned_id("Ned:Lsa-Netconf");
    store.add_ned_id("vendor:thing");
    let neds = handler(&store).ned_ids().unwrap();
    assert_eq!(neds, vec!["thing".to_string()]);
}

#[test]
fn device_info_round_trip() {
    let store = seeded_store();
    let info = handler(&store).device_info("r1").unwrap();
    assert_eq!(info.name, "r1");
    assert_eq!(info.address, "10.0.0.1");
    assert_eq!(info.platform_version, "7.2");
    assert_eq!(info.platform_name, "ios-xr");
    assert_eq!(info.platform_model, "NCS5500");
    assert_eq!(info.ned_type, NedType::Netconf);
    assert_eq!(info.ned, "iosxr");
}

#[test]
fn device_keys_are_trimmed_before_lookup() {
    let store = seeded_store();
    let ops = handler(&store);
    assert_eq!(ops.device_info(" r1 ").unwrap(), ops.device_info("r1").unwrap());
}

#[test]
fn missing_device_is_not_found_with_key_in_message() {
    let store = seeded_store();
    let err = handler(&store).device_info("ghost").unwrap_err();
    match &err {
        NsoError::NotFound { kind, key } => {
            assert_eq!(*kind, EntityKind::Device);
            assert_eq!(key, "ghost");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn model_filter_is_case_insensitive_substring() {
    let store = seeded_store();
    let devices = handler(&store).devices_by_model("ios-xr").unwrap();
    let names: Vec<&str> = devices.iter().map(|d| d.name.as_str()).collect();
    // "Cisco-IOS-XR" matches "ios-xr" case-insensitively; plain "ios" does not.
    assert_eq!(names, vec!["r1", "r2"]);
}

#[test]
fn model_and_version_both_must_match() {
    let store = seeded_store();
    let devices = handler(&store)
        .devices_by_model_and_version("ios-xr", "7.2")
        .unwrap();
    let names: Vec<&str> = devices.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["r1"]);
}

#[test]
fn excluding_version_filter_drops_matching_versions() {
    let store = seeded_store();
    let ops = handler(&store);

    let excluded_72 = ops
        .devices_by_model_excluding_version("ios-xr", "7.2")
        .unwrap();
    let names: Vec<&str> = excluded_72.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["r2"]);

    let excluded_73 = ops
        .devices_by_model_excluding_version("ios-xr", "7.3")
        .unwrap();
    let names: Vec<&str> = excluded_73.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["r1", "r2"]);
}

#[test]
fn group_listing_and_membership() {
    let store = seeded_store();
    let ops = handler(&store);
    assert_eq!(ops.device_group_names().unwrap(), vec!["core".to_string()]);
    assert_eq!(
        ops.group_device_names("core").unwrap(),
        vec!["r1".to_string(), "r2".to_string(), "sw1".to_string()]
    );
}

#[test]
fn missing_group_is_not_found_and_leaks_no_transaction() {
    let store = seeded_store();
    let ops = handler(&store);

    let err = ops.group_device_names("ghost-group").unwrap_err();
    assert!(err.to_string().contains("ghost-group"));

    let err = ops.sync_device_group("ghost-group").unwrap_err();
    assert!(matches!(
        err,
        NsoError::NotFound {
            kind: EntityKind::DeviceGroup,
            ..
        }
    ));

    let open = store.open_handles();
    assert_eq!(open.read_transactions, 0);
    assert_eq!(open.sessions, 0);
    assert_eq!(open.write_transactions, 0);
}

#[test]
fn check_sync_is_idempotent() {
    let store = seeded_store();
    store.set_sync_state("r1", "out-of-sync");
    let ops = handler(&store);
    let first = ops.check_device_sync("r1").unwrap();
    let second = ops.check_device_sync("r1").unwrap();
    assert_eq!(first, "out-of-sync");
    assert_eq!(first, second);
}

#[test]
fn unsupported_check_sync_label_passes_through() {
    let store = seeded_store();
    store.set_sync_state("sw1", "unsupported");
    assert_eq!(handler(&store).check_device_sync("sw1").unwrap(), "unsupported");
}

#[test]
fn sync_device_wraps_store_outcome() {
    let store = seeded_store();
    let result = handler(&store).sync_device(" r1 ").unwrap();
    assert_eq!(result.name, "r1");
    assert_eq!(result.result, "true");
}

#[test]
fn sync_device_propagates_store_failure_and_releases_session() {
    let store = seeded_store();
    store.set_sync_outcome("r1", SyncOutcome::Fail("connection refused".to_string()));
    let err = handler(&store).sync_device("r1").unwrap_err();
    assert!(matches!(err, NsoError::Upstream(_)));

    let open = store.open_handles();
    assert_eq!(open.sessions, 0);
    assert_eq!(open.write_transactions, 0);
}

#[test]
fn group_sync_reports_every_member_even_when_one_fails() {
    let store = seeded_store();
    store.set_sync_outcome("r2", SyncOutcome::Fail("timeout talking to device".to_string()));
    let results = handler(&store).sync_device_group("core").unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].name, "r1");
    assert_eq!(results[0].result, "true");
    assert_eq!(results[1].name, "r2");
    assert_eq!(results[1].result, "timeout talking to device");
    assert_eq!(results[2].name, "sw1");
    assert_eq!(results[2].result, "true");
}

#[test]
fn day1_listing_keeps_only_marker_types_and_strips_prefixes() {
    let store = seeded_store();
    let day1 = handler(&store).day1_services().unwrap();
    assert_eq!(
        day1,
        vec![
            "base-config-day1-xr".to_string(),
            "standalone-day1-service".to_string()
        ]
    );
}

#[test]
fn all_services_strips_prefixes() {
    let store = seeded_store();
    let services = handler(&store).all_services().unwrap();
    assert_eq!(
        services,
        vec![
            "l3vpn".to_string(),
            "base-config-day1-xr".to_string(),
            "standalone-day1-service".to_string()
        ]
    );
}

#[test]
fn device_services_are_raw_keypaths() {
    let store = seeded_store();
    let services = handler(&store).device_services("r1").unwrap();
    assert_eq!(services, vec!["/ncs:services/l3vpn:l3vpn{cust-a}".to_string()]);

    let err = handler(&store).device_services("ghost").unwrap_err();
    assert!(matches!(err, NsoError::NotFound { .. }));
}

#[test]
fn service_check_sync_by_keypath() {
    let store = seeded_store();
    let ops = handler(&store);
    assert_eq!(
        ops.check_service_sync("/ncs:services/l3vpn:l3vpn{cust-a}")
            .unwrap(),
        "true"
    );
    assert!(matches!(
        ops.check_service_sync("/ncs:services/nope"),
        Err(NsoError::Upstream(_))
    ));
}

#[test]
fn acquisition_failure_surfaces_as_upstream() {
    let store = seeded_store();
    store.set_unavailable(true);
    let ops = handler(&store);
    assert!(matches!(ops.device_names(), Err(NsoError::Upstream(_))));
    assert!(matches!(ops.sync_device("r1"), Err(NsoError::Upstream(_))));
    assert_eq!(store.open_handles().read_transactions, 0);
}
