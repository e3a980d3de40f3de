//! Command-line interface

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use exchange_router::{Location, Resolution};

use crate::config::SiteConfig;
use crate::routes::{self, ROUTE_TABLE};

#[derive(Debug, Parser)]
#[command(name = "exchange-site")]
#[command(version, about = "Exchange site route table and page server", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./exchange-site.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the page server (default)
    Serve {
        /// Host to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the route table in declaration order
    Routes,

    /// Show which view a URL resolves to
    Resolve {
        /// URL path, optionally with query and fragment
        url: String,
    },
}

impl Cli {
    /// Loads config from `--config`, the default file, or defaults, then env overrides
    pub fn load_config(&self) -> Result<SiteConfig> {
        let config = match &self.config {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::load_default().unwrap_or_else(|e| {
                tracing::warn!("Failed to load config: {:#}, using defaults", e);
                SiteConfig::default()
            }),
        };
        config.with_env()
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    routes::build_registry().context("route table failed validation")?;
    let config = cli.load_config()?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            crate::server::serve(config).await
        }
        Command::Routes => {
            print!("{}", format_routes());
            Ok(())
        }
        Command::Resolve { url } => {
            println!("{}", describe(&url, &config));
            Ok(())
        }
    }
}

/// Route table as aligned text, one route per line
pub fn format_routes() -> String {
    let width = ROUTE_TABLE.iter().map(|(path, _)| path.len()).max().unwrap_or(0);
    ROUTE_TABLE
        .iter()
        .map(|(path, view)| format!("{:<width$}  {}\n", path, view.title(), width = width))
        .collect()
}

/// One-line description of what `url` resolves to
pub fn describe(url: &str, config: &SiteConfig) -> String {
    let location = Location::parse(url);
    match routes::matcher(config.routing.case_insensitive).resolve(&location.path) {
        Resolution::Matched(m) => {
            let mut params: Vec<String> =
                m.params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            params.sort();
            if params.is_empty() {
                format!("{} -> {}", location.path, m.route.view.title())
            } else {
                format!(
                    "{} -> {} ({})",
                    location.path,
                    m.route.view.title(),
                    params.join(", ")
                )
            }
        }
        Resolution::NotFound { path } => format!("{} -> not found", path),
    }
}
