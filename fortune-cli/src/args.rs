use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fortune_service::ServiceOptions;

/// Command line arguments for the fortune checker
#[derive(Parser, Debug)]
#[command(name = "fortune", author, version, about = "Daily horoscope for your birthdate")]
pub struct Cli {
    /// What to do; without a command the last sign is shown again
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output raw JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable verbose debug output
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// Horoscope API endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Directory for cached fortunes
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Keep nothing on disk for this run
    #[arg(long, global = true, default_value_t = false)]
    pub no_cache: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show today's fortune for a birthdate (YYYY-MM-DD)
    Check { birthdate: String },

    /// Show today's fortune for a sign picked by name
    Sign { key: String },

    /// Fetch the last sign again, ignoring the cache
    Refresh,

    /// Show the last sign again
    Last,

    /// List all signs and their date ranges
    Signs,

    /// Remove cached fortunes
    ClearCache {
        /// Only clear this sign
        #[arg(long)]
        sign: Option<String>,
    },
}

impl Cli {
    /// Layer command line flags over the file and environment options.
    pub fn service_options(&self, base: ServiceOptions) -> ServiceOptions {
        let mut options = base;
        if let Some(endpoint) = &self.endpoint {
            options.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            options.timeout_ms = timeout_ms;
        }
        if let Some(dir) = &self.cache_dir {
            options.cache_dir = Some(dir.clone());
        }
        options
    }
}
