use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strategio::config::ServerConfig;
use strategio::export::ExportFormat;
use strategio::models::{SectionId, StrategyDocument};
use strategio::store::{parse_section, SharedStore, Store};
use strategio::{api, mcp};

#[derive(Parser)]
#[command(name = "strategio")]
#[command(about = "Guided marketing strategy wizard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API on the sample strategy
    Serve {
        /// Port for HTTP API (defaults to STRATEGIO_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Start MCP server via stdio
    Mcp,
    /// Print a section, or the whole document, as JSON
    Show {
        /// Section id (intro, external, internal, swot, strategy, action_plan)
        #[arg(value_parser = parse_section)]
        section: Option<SectionId>,

        /// Read the document from a JSON file instead of the sample
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print completion progress
    Progress {
        /// Read the document from a JSON file instead of the sample
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Render the document for printing
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Print)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Read the document from a JSON file instead of the sample
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Initialize tracing with output to stderr (for MCP mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "strategio=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // MCP mode: log to stderr so stdout is clean for protocol
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Load a document snapshot, or the sample strategy when no file is given.
fn load_store(input: Option<&Path>) -> anyhow::Result<Store> {
    match input {
        None => Ok(Store::seeded()),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let document: StrategyDocument = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid strategy document in {}", path.display()))?;
            Ok(Store::new(document))
        }
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Strategio server on port {}", config.port);

    let app = api::create_router_with_config(SharedStore::seeded(), &config);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port)).await?;
    tracing::info!(
        "Strategio server listening on http://127.0.0.1:{}",
        config.port
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // MCP mode needs stderr for logging since stdout is the protocol channel.
    // One-shot commands also log to stderr so their stdout can be piped.
    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port }) => {
            let config = ServerConfig::from_env();
            let config = match port {
                Some(port) => config.with_port(port),
                None => config,
            };
            serve(config).await?;
        }
        Some(Commands::Mcp) => {
            mcp::run_stdio_server(SharedStore::seeded()).await?;
        }
        Some(Commands::Show { section, input }) => {
            let store = load_store(input.as_deref())?;
            let json = match section {
                Some(id) => serde_json::to_string_pretty(&store.section_view(id))?,
                None => serde_json::to_string_pretty(store.document())?,
            };
            println!("{}", json);
        }
        Some(Commands::Progress { input }) => {
            let store = load_store(input.as_deref())?;
            let report = store.progress_report();
            println!("Завершено на {}%", report.percent);
            for section in &report.sections {
                let note = if section.counted { "" } else { " (не учитывается)" };
                println!(
                    "{}. {:<18} {}/{}{}",
                    section.id.number(),
                    section.label,
                    section.filled,
                    section.total,
                    note
                );
            }
        }
        Some(Commands::Export {
            format,
            output,
            input,
        }) => {
            let store = load_store(input.as_deref())?;
            let rendered = format.render(store.document())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Exported {} to {}", format.as_str(), path.display());
                }
                None => print!("{}", rendered),
            }
        }
        None => {
            serve(ServerConfig::from_env()).await?;
        }
    }

    Ok(())
}
