use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::config::Config;
use crate::logging::LogTarget;

#[derive(Parser)]
#[command(name = "docjump")]
#[command(about = "Search Clojars as you type and jump to the library's docs")]
#[command(version)]
pub struct Cli {
    /// Log debug output (to the log file while the widget is open)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive search widget (default)
    #[command(visible_alias = "j")]
    Jump {
        /// Text to start with in the search input
        #[arg(short, long)]
        query: Option<String>,

        /// Print the documentation URL instead of opening a browser
        #[arg(long)]
        print: bool,
    },

    /// Search once and print the results with their documentation URLs
    #[command(visible_alias = "s")]
    Search {
        /// Search terms, joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Show at most this many results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (search_url, docs_url, debounce_ms, blur_grace_ms,
        /// request_timeout_secs, connect_timeout_secs, log_file)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
}

impl Cli {
    /// Whether the command takes over the terminal.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Jump { .. }))
    }

    /// Where this invocation should log. The widget logs to a file; if no
    /// log file location can be determined it logs nowhere.
    pub fn log_target(&self) -> Option<LogTarget> {
        if !self.is_interactive() {
            return Some(LogTarget::Stderr);
        }
        let path = match Config::load() {
            Ok(config) => config.log_path(),
            Err(_) => Config::default_log_path(),
        };
        path.ok().map(LogTarget::File)
    }

    /// Execute the selected command; no subcommand means `jump`.
    pub async fn run(self) -> crate::error::Result<()> {
        let command = self.command.unwrap_or(Commands::Jump {
            query: None,
            print: false,
        });
        command.run().await
    }
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, cmd_jump,
            cmd_search,
        };

        match self {
            Commands::Jump { query, print } => cmd_jump(query, print).await,

            Commands::Search { query, limit, json } => cmd_search(&query, limit, json).await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Path => cmd_config_path(),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "docjump", &mut io::stdout());
}
