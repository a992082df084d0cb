//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for ims-assistant
#[derive(Parser, Debug)]
#[command(name = "ims-assistant")]
#[command(author, version, about = "Inventory assistant backed by Gemini function calling")]
#[command(long_about = r#"
The IMS assistant answers questions about inventory, vendors, borrowers and
loans. The model may call read-only inventory queries up to a fixed number of
rounds before it has to answer.

Configuration files are loaded from (in priority order):
1. IMS_* environment variables (e.g. IMS_GEMINI__API_URL)
2. --config <path>     Explicit config file
3. ./ims.toml          Project-level config
4. ~/.config/ims-assistant/config.toml   Global config

The API key is read from GEMINI_API_KEY unless [gemini] says otherwise.

Example:
  ims-assistant serve --bind 0.0.0.0:8080
  ims-assistant ask "Which items are running low?"
  ims-assistant tools
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP chat endpoint
    Serve {
        /// Address to listen on (overrides [server] bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// The message to send
        message: String,
    },

    /// List the tools offered to the model
    Tools,
}
