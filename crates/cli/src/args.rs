//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Translate connection flags into `ConfigLoader` overrides.
//!
//! Non-responsibilities:
//! - Does not read environment variables (see `splunk_query_config::ConfigLoader::from_env`).
//! - Does not resolve the query text (see `query` module).

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use splunk_query_config::ConfigLoader;

use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "splunk-query")]
#[command(about = "Run a Splunk search and write the results as JSON, CSV or a console table", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk-query -q 'index=main earliest=-1h | head 10'\n  splunk-query --query-file query.spl --format csv -f out/results.csv\n  echo 'index=_internal | stats count by sourcetype' | splunk-query --format console\n"
)]
pub struct Cli {
    /// Search query (a leading `search` keyword is optional)
    #[arg(short, long, conflicts_with = "query_file")]
    pub query: Option<String>,

    /// Read the query from a file instead of --query or stdin
    #[arg(long, value_name = "PATH")]
    pub query_file: Option<PathBuf>,

    /// Output file path (writes to stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Base URL of the Splunk server (e.g., https://localhost:8089)
    #[arg(long)]
    pub url: Option<String>,

    /// API token (preferred over username/password)
    #[arg(long)]
    pub token: Option<String>,

    /// Username for management API authentication
    #[arg(long)]
    pub user: Option<String>,

    /// Password for management API authentication
    #[arg(long)]
    pub password: Option<String>,

    /// Management API port, used when the URL has none and for the retry
    #[arg(long, value_name = "PORT")]
    pub mgmt_port: Option<u16>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Exchange username/password for a session key instead of sending Basic auth
    #[arg(long)]
    pub session_login: bool,

    /// Skip TLS certificate verification (development only)
    #[arg(long)]
    pub insecure: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output.
    ///
    /// Note: Progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Apply connection flags on top of whatever the loader already holds.
    ///
    /// Flags win over environment variables; unset flags leave the loader untouched.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(url) = &self.url {
            loader = loader.with_base_url(url.clone());
        }
        if let Some(token) = &self.token {
            loader = loader.with_token(token.clone());
        }
        if let Some(user) = &self.user {
            loader = loader.with_username(user.clone());
        }
        if let Some(password) = &self.password {
            loader = loader.with_password(password.clone());
        }
        if let Some(port) = self.mgmt_port {
            loader = loader.with_management_port(port);
        }
        if let Some(secs) = self.timeout {
            loader = loader.with_timeout(Duration::from_secs(secs));
        }
        if self.session_login {
            loader = loader.with_session_login(true);
        }
        if self.insecure {
            loader = loader.with_insecure_tls(true);
        }
        loader
    }
}
