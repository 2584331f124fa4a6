//! MCP server for filling in the strategy from an AI agent.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;

use crate::export::ExportFormat;
use crate::models::*;
use crate::store::{parse_section, Edit, ProgressReport, SharedStore, StoreError};

#[derive(Clone)]
pub struct McpServer {
    store: SharedStore,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    fn parse_section(s: &str) -> Result<SectionId, McpError> {
        parse_section(s).map_err(Self::store_err)
    }

    fn store_err(e: StoreError) -> McpError {
        tracing::warn!("Rejected tool call: {}", e);
        McpError::invalid_params(e.to_string(), None)
    }

    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // ============================================================
    // Tool logic, shared by the tools and the tests
    // ============================================================

    pub fn document(&self) -> StrategyDocument {
        self.store.read(|s| s.document().clone())
    }

    pub fn section(&self, section: &str) -> Result<SectionView, McpError> {
        let id = Self::parse_section(section)?;
        Ok(self.store.read(|s| s.section_view(id)))
    }

    pub fn patch_section_value(
        &self,
        section: &str,
        patch: serde_json::Value,
    ) -> Result<SectionView, McpError> {
        let id = Self::parse_section(section)?;
        self.store
            .update(|s| -> Result<SectionView, StoreError> {
                s.patch_section_json(id, patch)?;
                Ok(s.section_view(id))
            })
            .map_err(Self::store_err)
    }

    pub fn patch_document_value(&self, patch: DocumentPatch) -> StrategyDocument {
        self.store.update(|s| {
            s.patch_document(patch);
            s.document().clone()
        })
    }

    pub fn edit(&self, edit: Edit) -> Result<SectionView, McpError> {
        self.store
            .update(|s| -> Result<SectionView, StoreError> {
                let id = s.apply_edit(edit)?;
                Ok(s.section_view(id))
            })
            .map_err(Self::store_err)
    }

    pub fn navigate(&self, section: &str) -> Result<NavigationState, McpError> {
        let id = Self::parse_section(section)?;
        Ok(self.store.update(|s| {
            s.set_current_section(id);
            s.navigation()
        }))
    }

    pub fn progress(&self) -> ProgressReport {
        self.store.read(|s| s.progress_report())
    }

    pub fn export(&self, format: Option<&str>) -> Result<String, McpError> {
        let format = match format {
            None => ExportFormat::default(),
            Some(name) => ExportFormat::from_str(name).ok_or_else(|| {
                McpError::invalid_params(format!("Unknown export format: {}", name), None)
            })?,
        };
        format
            .render(&self.document())
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }
}

#[tool_router]
impl McpServer {
    // ============================================================
    // Reading
    // ============================================================

    #[tool(
        description = "Get the whole marketing strategy document: projectName, intro, external, internal, swot, strategy and actionPlan."
    )]
    async fn get_document(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.document())
    }

    #[tool(
        description = "Get one section of the strategy with its label and current content. Use this before patching so you can send back complete nested records."
    )]
    async fn get_section(
        &self,
        params: Parameters<GetSectionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let view = self.section(&params.0.section)?;
        Self::json_result(&view)
    }

    #[tool(
        description = "Get completion progress: overall percentage (intro, external, internal, swot and strategy; a list counts as filled once it has an entry) plus filled/total counts per section."
    )]
    async fn get_progress(&self) -> Result<CallToolResult, McpError> {
        Self::json_result(&self.progress())
    }

    #[tool(
        description = "Render the strategy as a finished document. 'print' gives the Markdown print layout, 'json' the raw document."
    )]
    async fn export_document(
        &self,
        params: Parameters<ExportDocumentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.export(params.0.format.as_deref())?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    // ============================================================
    // Writing
    // ============================================================

    #[tool(
        description = "Patch one section. Fields in the patch replace the current values one level deep: sending {\"pest\": {\"political\": \"x\"}} to 'external' clears the other PEST factors, so include every field of a nested record you want to keep. Returns the updated section."
    )]
    async fn patch_section(
        &self,
        params: Parameters<PatchSectionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let view = self.patch_section_value(&req.section, req.patch)?;
        Self::json_result(&view)
    }

    #[tool(
        description = "Replace root-level keys of the document, e.g. the projectName. Each key given replaces that whole value. Returns the updated document."
    )]
    async fn patch_document(
        &self,
        params: Parameters<PatchDocumentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let document = self.patch_document_value(params.0.patch);
        Self::json_result(&document)
    }

    #[tool(
        description = "Apply a single form edit: set a PEST or 4P field, or add, update or remove a competitor, SWOT item or action-plan row by index. Indices are positional; removing a row shifts the ones after it. Returns the updated section."
    )]
    async fn apply_edit(
        &self,
        params: Parameters<ApplyEditRequest>,
    ) -> Result<CallToolResult, McpError> {
        let view = self.edit(params.0.edit)?;
        Self::json_result(&view)
    }

    #[tool(description = "Switch the wizard to another section.")]
    async fn set_current_section(
        &self,
        params: Parameters<SetCurrentSectionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let state = self.navigate(&params.0.section)?;
        Self::json_result(&state)
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "strategio".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Strategio holds one marketing strategy document that is filled in section by section.

SECTIONS (in wizard order):
1. intro       - mission, vision, smartGoal
2. external    - pest {political, economic, social, tech}, marketSize, competitors [{name, share, strength, weakness}]
3. internal    - audit4P {product, price, place, promotion}, abcAnalysis
4. swot        - strengths, weaknesses, opportunities, threats (lists of strings)
5. strategy    - ansoff (pick from ansoffOptions in get_section("strategy")), targetAudience, positioning
6. action_plan - rows of {activity, deadline, owner, budget}
The project name sits at the root of the document (patch_document).

UPDATING:
- patch_section merges ONE level deep. Nested records (pest, audit4P) and lists are replaced whole.
  Read the section first, copy the nested record, change the field, send it all back.
- apply_edit does that copy for you for single-field and single-row changes.
- Rows have no ids; they are addressed by position.

PROGRESS:
- get_progress counts every text field and every list under intro, external, internal, swot and strategy.
- The project name and the action plan are not counted.

EXPORT:
- export_document renders the print layout (Markdown) or raw JSON."#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(store: SharedStore) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(store);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
