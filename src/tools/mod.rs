//! MCP Tools
//!
//! Tool implementations behind the row service.

pub mod row_session;
pub mod status;
