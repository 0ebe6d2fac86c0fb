//! Ingredient Row MCP Server Implementation
//!
//! Exposes the row session's event handlers as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::RowConfig;
use crate::models::{FieldValue, Ingredient, IngredientField};
use crate::tools::row_session::RowSession;
use crate::tools::status::StatusTracker;

/// Ingredient Row MCP Service
#[derive(Clone)]
pub struct IngredientRowService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    session: Arc<std::sync::Mutex<RowSession>>,
    tool_router: ToolRouter<IngredientRowService>,
}

impl IngredientRowService {
    pub fn new(config: RowConfig) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            session: Arc::new(std::sync::Mutex::new(RowSession::new(config))),
            tool_router: Self::tool_router(),
        }
    }

    fn with_session<T, F>(&self, f: F) -> Result<T, McpError>
    where
        F: FnOnce(&mut RowSession) -> Result<T, McpError>,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|e| McpError::internal_error(format!("Session lock poisoned: {}", e), None))?;
        f(&mut session)
    }
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn parse_field(name: &str) -> Result<IngredientField, McpError> {
    name.parse::<IngredientField>()
        .map_err(|e: crate::row::RowError| McpError::invalid_params(e.to_string(), None))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ChangeFieldParams {
    /// One of: name, calories100g, protein100g, fat100g, carbs100g, grams
    pub field: String,
    /// Raw input: text as typed, a number, or null for an empty box
    pub value: serde_json::Value,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConfirmFieldParams {
    /// Field to confirm; defaults to the field being edited
    pub field: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl IngredientRowService {
    // --- Status ---

    #[tool(description = "Get the current status of the ingredient row service including build info, session counters, and process information")]
    async fn row_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = self.with_session(|session| Ok(tracker.get_status(session)))?;
        to_json_result(&status)
    }

    #[tool(description = "Get step-by-step instructions for editing an ingredient row. Call this before using the row tools.")]
    fn row_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::ROW_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(ROW_INSTRUCTIONS)]))
    }

    // --- Row Events ---

    #[tool(description = "Load an ingredient into the row. Replaces the current ingredient and discards any unconfirmed edits.")]
    fn row_load(&self, Parameters(record): Parameters<Ingredient>) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|session| Ok(session.load(record)))?;
        to_json_result(&result)
    }

    #[tool(description = "Type a raw value into a row field. The value is buffered as-is; typing into a different field confirms the previous one.")]
    fn row_change_field(&self, Parameters(p): Parameters<ChangeFieldParams>) -> Result<CallToolResult, McpError> {
        let field = parse_field(&p.field)?;
        let value = FieldValue::from_json(&p.value)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let result = self.with_session(|session| {
            session.change_field(field, value).map_err(|e| McpError::internal_error(e.to_string(), None))
        })?;
        to_json_result(&result)
    }

    #[tool(description = "Confirm (blur) a row field: normalizes the buffered value and merges it into the ingredient")]
    fn row_confirm_field(&self, Parameters(p): Parameters<ConfirmFieldParams>) -> Result<CallToolResult, McpError> {
        let field = p.field.as_deref().map(parse_field).transpose()?;
        let result = self.with_session(|session| {
            session.confirm_field(field).map_err(|e| McpError::internal_error(e.to_string(), None))
        })?;
        to_json_result(&result)
    }

    #[tool(description = "Remove the ingredient row")]
    fn row_remove(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|session| {
            session.remove().map_err(|e| McpError::internal_error(e.to_string(), None))
        })?;
        to_json_result(&result)
    }

    #[tool(description = "Get the row's inputs, derived calorie/protein/fat/carb totals, and visual state")]
    fn row_view(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|session| {
            session.view().map_err(|e| McpError::internal_error(e.to_string(), None))
        })?;
        to_json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for IngredientRowService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ingredient-row".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Ingredient Row Editor".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Ingredient Row Editor - edit one recipe ingredient and see its calories and macros. \
                 IMPORTANT: Call row_instructions first. \
                 Editing: row_load, row_change_field, row_confirm_field, row_remove. \
                 Display: row_view. Service: row_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("grams").unwrap(), IngredientField::Grams);
        assert!(parse_field("sodium").is_err());
    }

    #[test]
    fn test_service_session_round() {
        let service = IngredientRowService::new(RowConfig::default());
        service
            .with_session(|session| {
                session.load(Ingredient::new("Rice"));
                Ok(())
            })
            .unwrap();
        let loaded = service.with_session(|session| Ok(session.is_loaded())).unwrap();
        assert!(loaded);
    }
}
