mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "toolboard",
    about = "Status board for MCP server tool testing — parse status documents, report coverage",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from status documents or .git/)
    #[arg(long, global = true, env = "TOOLBOARD_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overall testing progress: counts, coverage, per-category breakdown
    Summary,

    /// List catalog tools with their current status
    Tools {
        /// Only tools in this category
        #[arg(long)]
        category: Option<String>,

        /// Only tools with this status (verified, partial, issue, untested)
        #[arg(long)]
        status: Option<String>,

        /// Only tools whose name contains this substring
        #[arg(long)]
        search: Option<String>,
    },

    /// Show everything known about one tool
    Show {
        /// Tool name
        name: String,
    },

    /// Print the tool taxonomy
    Catalog,

    /// Source-document sizes and freshness
    Docs,

    /// Serve the status API over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3030")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Summary => cmd::summary::run(&root, cli.json),
        Commands::Tools {
            category,
            status,
            search,
        } => cmd::tools::run(
            &root,
            category.as_deref(),
            status.as_deref(),
            search.as_deref(),
            cli.json,
        ),
        Commands::Show { name } => cmd::show::run(&root, &name, cli.json),
        Commands::Catalog => cmd::catalog::run(cli.json),
        Commands::Docs => cmd::docs::run(&root, cli.json),
        Commands::Serve { port } => cmd::serve::run(&root, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
