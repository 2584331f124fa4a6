//! Strategio: a guided wizard for writing a marketing strategy.
//!
//! The [`store`] owns the strategy document and the active wizard section;
//! [`api`] and [`mcp`] expose it over HTTP and MCP, and [`export`] renders the
//! finished document.

pub mod api;
pub mod config;
pub mod export;
pub mod mcp;
pub mod models;
pub mod store;
