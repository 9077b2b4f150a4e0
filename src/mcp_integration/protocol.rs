//! MCP protocol layer: tool discovery, dispatch, and stdio transport.

use super::core::{NsoMcpServer, NsoToolResult};
use super::handlers::{inventory, services, sync, system_info};
use super::tools::{inventory_schemas, service_schemas, sync_schemas, system_schemas};
use crate::datastore::Datastore;
use log::{debug, info, warn};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

impl<D: Datastore + 'static> NsoMcpServer<D> {
    /// All tool definitions AI agents can discover and execute.
    pub fn get_tools(&self) -> Vec<Value> {
        vec![
            inventory_schemas::list_neds_tool(),
            inventory_schemas::list_devices_tool(),
            inventory_schemas::list_device_groups_tool(),
            inventory_schemas::get_device_info_tool(),
            inventory_schemas::list_group_devices_tool(),
            inventory_schemas::list_devices_by_model_tool(),
            inventory_schemas::list_devices_by_model_and_version_tool(),
            inventory_schemas::list_devices_by_model_excluding_version_tool(),
            sync_schemas::check_device_sync_tool(),
            sync_schemas::sync_device_tool(),
            sync_schemas::sync_device_group_tool(),
            sync_schemas::check_service_sync_tool(),
            service_schemas::list_day1_services_tool(),
            service_schemas::list_services_tool(),
            service_schemas::get_device_services_tool(),
            system_schemas::server_info_tool(),
        ]
    }

    /// Execute a tool by name, routing to the matching handler.
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> NsoToolResult {
        debug!("executing MCP tool {tool_name} with args {arguments}");

        match tool_name {
            "nso_list_neds" => inventory::handle_list_neds(self, arguments).await,
            "nso_list_devices" => inventory::handle_list_devices(self, arguments).await,
            "nso_list_device_groups" => {
                inventory::handle_list_device_groups(self, arguments).await
            }
            "nso_get_device_info" => inventory::handle_get_device_info(self, arguments).await,
            "nso_list_group_devices" => {
                inventory::handle_list_group_devices(self, arguments).await
            }
            "nso_list_devices_by_model" => {
                inventory::handle_list_devices_by_model(self, arguments).await
            }
            "nso_list_devices_by_model_and_version" => {
                inventory::handle_list_devices_by_model_and_version(self, arguments).await
            }
            "nso_list_devices_by_model_excluding_version" => {
                inventory::handle_list_devices_by_model_excluding_version(self, arguments).await
            }

            "nso_check_device_sync" => sync::handle_check_device_sync(self, arguments).await,
            "nso_sync_device" => sync::handle_sync_device(self, arguments).await,
            "nso_sync_device_group" => sync::handle_sync_device_group(self, arguments).await,
            "nso_check_service_sync" => sync::handle_check_service_sync(self, arguments).await,

            "nso_list_day1_services" => services::handle_list_day1_services(self, arguments).await,
            "nso_list_services" => services::handle_list_services(self, arguments).await,
            "nso_get_device_services" => {
                services::handle_get_device_services(self, arguments).await
            }

            "nso_server_info" => system_info::handle_server_info(self, arguments).await,

            _ => NsoToolResult {
                success: false,
                content: json!({
                    "error": "Unknown tool",
                    "tool_name": tool_name
                }),
                metadata: None,
            },
        }
    }

    /// Serve tool calls over stdio, one JSON object per line.
    ///
    /// Requests look like `{"tool": "nso_list_devices", "arguments": {}}`;
    /// each response line carries `success`, `content`, and `metadata`.
    /// Returns when stdin reaches end of file.
    pub async fn run_stdio(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "NSO MCP server ready on stdio, tools: {:?}",
            self.get_tools()
                .iter()
                .filter_map(|t| t.get("name").and_then(Value::as_str))
                .collect::<Vec<_>>()
        );

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = match serde_json::from_str::<Value>(&line) {
                Ok(request) => {
                    let tool = request
                        .get("tool")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    let arguments = request.get("arguments").cloned().unwrap_or(json!({}));
                    let result = self.execute_tool(&tool, arguments).await;
                    json!({
                        "success": result.success,
                        "content": result.content,
                        "metadata": result.metadata,
                    })
                }
                Err(err) => {
                    warn!("discarding malformed request line: {err}");
                    json!({
                        "success": false,
                        "content": {"error": format!("malformed request: {err}")},
                        "metadata": Value::Null,
                    })
                }
            };
            stdout.write_all(response.to_string().as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }
}
