// Docshell CLI
//
// Composes the shell's pages into single self-contained HTML documents and
// resolves the record sets those pages display.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kodegen_tools_docshell::{
    AdminPage, Advisory, DataSourceResolver, DocumentComposer, ProfileKind, RuntimeConfig,
    SelectionSession, ShellConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "kodegen-docshell")]
#[command(about = "Compose single-file app pages and resolve their records")]
struct Cli {
    /// Content root holding templates, styles, scripts and data
    #[arg(long, global = true, env = "DOCSHELL_ROOT", default_value = ".")]
    root: PathBuf,

    /// Freshness window for remote records, in seconds
    #[arg(long, global = true, default_value_t = kodegen_tools_docshell::utils::DEFAULT_CACHE_TTL_SECS)]
    cache_ttl_secs: u64,

    /// Keep images larger than this as external references
    #[arg(long, global = true)]
    max_inline_image_bytes: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a page into one HTML document
    Compose {
        /// primary or admin
        #[arg(short, long, default_value = "primary")]
        profile: ProfileKind,
        /// Administration sub-page: dashboard or cms
        #[arg(long, default_value = "dashboard")]
        page: AdminPage,
        /// Write the document here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Print the render frame description to stderr
        #[arg(long)]
        frame: bool,
    },
    /// Resolve a record set and print it as JSON
    Records {
        /// Query key (defaults to the configured records key)
        key: Option<String>,
    },
    /// Show remote connection status and startup advisories
    Status,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = ShellConfig::builder()
        .content_root(&cli.root)
        .cache_ttl_secs(cli.cache_ttl_secs)
        .max_inline_image_size_bytes(cli.max_inline_image_bytes)
        .build()
        .context("Invalid shell configuration")?;
    let (runtime, env_advisories) = RuntimeConfig::from_env();
    let runtime = Arc::new(runtime);

    match cli.command {
        Commands::Compose {
            profile,
            page,
            out,
            frame,
        } => {
            let mut session = SelectionSession::new();
            session.select(profile);
            session.select_admin_page(page);

            print_advisories(&env_advisories);
            let composer = DocumentComposer::new(&config, runtime);
            let outcome = composer.render(session.current_profile());
            print_advisories(&outcome.advisories);

            let Some(document) = outcome.document else {
                return Ok(ExitCode::FAILURE);
            };
            if frame {
                eprintln!("{}", serde_json::to_string(&document.frame)?);
            }

            match out {
                Some(path) => std::fs::write(&path, document.as_str())
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{}", document.as_str()),
            }
        }
        Commands::Records { key } => {
            let resolver = DataSourceResolver::from_config(&config, &runtime);
            print_advisories(&env_advisories);
            print_advisories(resolver.startup_advisories());

            let resolved = match key {
                Some(key) => resolver.query(&key).await,
                None => resolver.query_default().await,
            };
            if let Some(advisory) = &resolved.advisory {
                eprintln!("{advisory}");
            }

            let output = serde_json::json!({
                "source": resolved.source,
                "records": resolved.records.as_slice(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Status => {
            let resolver = DataSourceResolver::from_config(&config, &runtime);
            let advisories: Vec<&Advisory> = env_advisories
                .iter()
                .chain(resolver.startup_advisories())
                .collect();
            let output = serde_json::json!({
                "remote_enabled": resolver.is_remote_enabled(),
                "content_root": config.content_root(),
                "fallback_file": config.fallback_file(),
                "cache_ttl_secs": config.cache_ttl().as_secs(),
                "advisories": advisories,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        eprintln!("{advisory}");
    }
}
