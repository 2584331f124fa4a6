//! Rendering the strategy into an exportable document.
//!
//! The store only hands out a read-only document; what the output looks like
//! is up to the [`DocumentRenderer`] the host picks.

mod print;

pub use print::*;

use crate::models::StrategyDocument;

/// Turns a strategy document into a finished text document.
pub trait DocumentRenderer {
    fn render(&self, document: &StrategyDocument) -> anyhow::Result<String>;
}

/// Pretty-printed JSON snapshot of the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExport;

impl DocumentRenderer for JsonExport {
    fn render(&self, document: &StrategyDocument) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}

/// Output formats offered by the CLI, HTTP and MCP export entry points.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    schemars::JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Print,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "print" => Some(Self::Print),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Render with today's date for the print layout.
    pub fn render(&self, document: &StrategyDocument) -> anyhow::Result<String> {
        match self {
            Self::Print => PrintLayout::today().render(document),
            Self::Json => JsonExport.render(document),
        }
    }
}
