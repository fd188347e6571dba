use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::config::load_config;
use crate::core::{ScanOptions, find_dependants, scanner::discover_files};
use crate::project::resolve_project;

use super::types::{
    ConfigDto, ConfigValues, DependantFile, GetConfigParams, ScanDependencyParams,
    ScanDependencyResult,
};

#[derive(Clone)]
pub struct DepscanMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DepscanMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Find files that depend on a package
    #[tool(
        description = "Find which files in a project import a given package, and on which lines. Understands JS/TS/JSX/TSX/CJS/MJS as well as Vue, Svelte and Astro components."
    )]
    async fn scan_dependency(
        &self,
        params: Parameters<ScanDependencyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let root = PathBuf::from(&params.project_root_path);

        let config = load_config(&root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let tolerant = params.silent.unwrap_or(config.silent);
        let patterns = params.files.unwrap_or_else(|| config.files.clone());

        let declared_version = if config.precheck {
            let project = resolve_project(&root).map_err(|e| {
                McpError::internal_error(format!("Failed to inspect project: {}", e), None)
            })?;
            if !project.is_declared(&params.package) {
                return Err(McpError::invalid_params(
                    format!(
                        "'{}' is not declared in this project's package.json",
                        params.package
                    ),
                    None,
                ));
            }
            project.declared_version(&params.package)
        } else {
            None
        };

        let files = discover_files(&root, &patterns, &config.ignores, tolerant, false)
            .map_err(|e| McpError::internal_error(format!("Failed to read files: {}", e), None))?;
        let files_scanned = files.len();

        let options = ScanOptions {
            tolerant,
            force_mode: None,
        };
        let matches = find_dependants(&files, &params.package, options)
            .map_err(|e| McpError::internal_error(format!("Scan failed: {}", e), None))?;

        let result = ScanDependencyResult {
            dependency: params.package,
            declared_version,
            total_count: matches.len(),
            files_scanned,
            files: matches.into_iter().map(DependantFile::from).collect(),
        };

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Get the current depscan configuration
    #[tool(description = "Get the current depscan configuration.")]
    async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        let json_str = serde_json::to_string_pretty(&config_dto).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

impl Default for DepscanMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for DepscanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Depscan MCP locates dependency usage in JavaScript and TypeScript projects.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_dependency - Find which files import a package and on which lines\n\n\
                 Typical workflow: call scan_dependency with the project root and a package\n\
                 name before upgrading or removing that package, to see every usage site."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = DepscanMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
