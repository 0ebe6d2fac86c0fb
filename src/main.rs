//! Ingredient Row Editor
//!
//! An MCP server that drives a single recipe ingredient row.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use ingredient_row::build_info;
use ingredient_row::config::RowConfig;
use ingredient_row::mcp::IngredientRowService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ingredient_row=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{}", build_info::startup_banner());

    let config = RowConfig::from_env();
    tracing::info!("Negative numbers: {}", config.negative_policy.as_str());

    let service = IngredientRowService::new(config);

    tracing::info!("Serving MCP on stdio");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
