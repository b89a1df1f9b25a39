mod commands;
mod common;
mod completions;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::RemoveRequest;
use crate::common::config::AppConfig;
use crate::common::logging;
use crate::common::package::Source;
use crate::completions::SupportedShell;
use crate::ui::prelude::*;

/// AppWatch - list and remove installed packages across package managers
#[derive(Parser, Debug)]
#[command(name = "appwatch", author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    /// Output format for messages and listings
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use this config file instead of ~/.config/appwatch/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print installed packages as `source<TAB>name<TAB>version`
    List {
        /// Only show packages whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Render a table instead of tab-separated lines
        #[arg(long)]
        table: bool,
    },

    /// Uninstall a package
    Remove {
        /// Package name as shown by `appwatch list`
        name: String,
        /// Package manager the package was installed with (detected when omitted)
        #[arg(short, long, value_enum)]
        source: Option<Source>,
        /// Show the command that would run without running it
        #[arg(long)]
        dry_run: bool,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show detected distro, package manager binaries and elevation method
    Info,

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: SupportedShell,
    },
}

pub(crate) fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    let cli = Cli::parse();

    ui::init(cli.output, !cli.no_color);
    ui::set_debug_mode(cli.debug);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("appwatch failed: {err:#}");
            emit(
                Level::Error,
                "appwatch.error",
                &format!("{} Error: {err:#}", char::from(NerdFont::Cross)),
                None,
            );
            1
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let command = match cli.command {
        Commands::Completions { shell } => {
            print!("{}", completions::generate(shell)?);
            return Ok(0);
        }
        command => command,
    };

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(&config, cli.debug);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "appwatch starting");

    match command {
        Commands::List { search, table } => commands::run_list(&config, search.as_deref(), table),
        Commands::Remove {
            name,
            source,
            dry_run,
            yes,
        } => commands::run_remove(
            &config,
            &RemoveRequest {
                name: &name,
                source,
                dry_run,
                assume_yes: yes,
            },
        ),
        Commands::Info => commands::run_info(&config),
        Commands::Completions { .. } => Ok(0),
    }
}

fn init_logging(config: &AppConfig, debug: bool) {
    let result = config
        .log_path()
        .and_then(|path| logging::init_file_logging(&path, debug));

    if let Err(err) = result {
        logging::init_stderr_logging();
        emit(
            Level::Debug,
            "appwatch.log_unavailable",
            &format!("{} Log file unavailable: {err:#}", char::from(NerdFont::Bug)),
            None,
        );
    }
}
