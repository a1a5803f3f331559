//! Command-line and environment configuration for the server.

use clap::Parser;

/// Serves the table wizard and its generation endpoints.
#[derive(Debug, Clone, Parser)]
#[command(name = "tablegen", version, about)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "TABLEGEN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "TABLEGEN_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Do not open the wizard in a browser on start.
    #[arg(long, env = "TABLEGEN_NO_BROWSER")]
    pub no_browser: bool,

    /// Maximum accepted JSON body, in bytes.
    #[arg(long, env = "TABLEGEN_JSON_LIMIT", default_value_t = 1024 * 1024)]
    pub json_limit: usize,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
