//! Demo MCP server over a seeded in-memory datastore.
//!
//! Serves the full tool set on stdio, one JSON request per line:
//!
//! ```text
//! {"tool": "nso_list_devices", "arguments": {}}
//! {"tool": "nso_get_device_info", "arguments": {"device_name": "xr-pe1"}}
//! ```
//!
//! Configuration comes from the environment (`NSO_USER`, `NSO_CONTEXT`,
//! `API_PORT`, `LOG_DIRECTORY`); a production deployment swaps the in-memory
//! backend for a real store client implementing the `Datastore` trait.

use log::info;
use nso_mcp_server::{
    DeviceRecord, InMemoryDatastore, NsoMcpServer, NsoOperationHandler, ServerConfig,
};

fn seed_demo_inventory(store: &InMemoryDatastore) {
    store.add_ned_id("ned:lsa-netconf");
    store.add_ned_id("ned:netconf");
    store.add_ned_id("ned:snmp");
    store.add_ned_id("cisco-iosxr-nc-7.4:cisco-iosxr-nc-7.4");
    store.add_ned_id("juniper-junos-nc-4.6:juniper-junos-nc-4.6");

    store.add_device(
        DeviceRecord::new("xr-pe1", "10.1.0.1")
            .with_platform("Cisco-IOS-XR", "7.2", "NCS5500")
            .with_netconf_ned("cisco-iosxr-nc-7.4:cisco-iosxr-nc-7.4"),
    );
    store.add_device(
        DeviceRecord::new("xr-pe2", "10.1.0.2")
            .with_platform("Cisco-IOS-XR", "7.4", "NCS5500")
            .with_netconf_ned("cisco-iosxr-nc-7.4:cisco-iosxr-nc-7.4"),
    );
    store.add_device(
        DeviceRecord::new("junos-p1", "10.2.0.1")
            .with_platform("junos", "21.4R3", "MX480")
            .with_netconf_ned("juniper-junos-nc-4.6:juniper-junos-nc-4.6"),
    );

    store.add_device_group("pe-routers", &["xr-pe1", "xr-pe2"]);
    store.add_device_group("all", &["xr-pe1", "xr-pe2", "junos-p1"]);

    store.add_service_type("l3vpn:l3vpn");
    store.add_service_type("base-config-day1-xr:base-config-day1-xr");
    store.add_device_service("xr-pe1", "/ncs:services/l3vpn:l3vpn{cust-a}");
    store.set_service_sync("/ncs:services/l3vpn:l3vpn{cust-a}", "true");
    store.set_sync_state("junos-p1", "out-of-sync");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let config = ServerConfig::from_env()?;
    info!(
        "starting NSO MCP server as {}/{} (port {}, logs under {})",
        config.principal.user,
        config.principal.context,
        config.port,
        config.log_directory.display()
    );

    let store = InMemoryDatastore::new();
    seed_demo_inventory(&store);

    let handler = NsoOperationHandler::new(store, config.principal);
    NsoMcpServer::new(handler).run_stdio().await
}
