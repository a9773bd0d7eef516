//! MCP handler exposing the temperature alert tool.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use weather_alert_core::TemperatureAlertService;

pub const SERVER_NAME: &str = "weather";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AlertRequest {
    /// Name of the city (e.g., Delhi, Mumbai, Chennai)
    pub city: String,
}

/// Cheap to clone: the HTTP transports build one handler per session.
#[derive(Clone)]
pub struct AlertServer {
    service: Arc<TemperatureAlertService>,
    tool_router: ToolRouter<AlertServer>,
}

#[tool_router]
impl AlertServer {
    pub fn new(service: Arc<TemperatureAlertService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get a temperature alert for a city. Reports a heat alert at 40°C or above, \
                       a cold alert at 5°C or below, plus feels-like, humidity and conditions."
    )]
    async fn get_temperature_alert(
        &self,
        Parameters(AlertRequest { city }): Parameters<AlertRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(city = %city, "get_temperature_alert called");
        let text = self.service.get_temperature_alert(&city).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for AlertServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Temperature alerts for a named city. Call `get_temperature_alert` with `city`; \
                 the result is plain text and reads \"Unable to fetch weather data.\" when the \
                 weather provider is unavailable."
                    .to_string(),
            ),
        }
    }
}
