//! Request types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::Deserialize;

use crate::models::DocumentPatch;
use crate::store::Edit;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetSectionRequest {
    #[schemars(
        description = "Section id: 'intro', 'external', 'internal', 'swot', 'strategy' or 'action_plan'"
    )]
    pub section: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PatchSectionRequest {
    #[schemars(
        description = "Section id: 'intro', 'external', 'internal', 'swot', 'strategy' or 'action_plan'"
    )]
    pub section: String,
    #[schemars(
        description = "Partial record of the section's own fields, e.g. {\"mission\": \"...\"} for intro. Each given field replaces its whole value: nested records such as 'pest' or 'audit4P' and lists are replaced, not merged. For action_plan pass the complete list of rows."
    )]
    pub patch: serde_json::Value,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PatchDocumentRequest {
    #[schemars(
        description = "Root-level keys to replace, e.g. {\"projectName\": \"...\"}. Each given key replaces the whole section."
    )]
    pub patch: DocumentPatch,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ApplyEditRequest {
    #[schemars(
        description = "A single form edit tagged by 'op', e.g. {\"op\": \"update_competitor\", \"index\": 0, \"field\": \"share\", \"value\": \"15%\"}"
    )]
    pub edit: Edit,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetCurrentSectionRequest {
    #[schemars(
        description = "Section id: 'intro', 'external', 'internal', 'swot', 'strategy' or 'action_plan'"
    )]
    pub section: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExportDocumentRequest {
    #[schemars(description = "Output format: 'print' (default, Markdown) or 'json'")]
    #[serde(default)]
    pub format: Option<String>,
}
