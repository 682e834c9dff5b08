// Rust guideline compliant 2026-10-16

//! modsched CLI Application
//!
//! Command-line interface for validating scheduled moderation state changes.

use anyhow::Context;
use clap::Parser;
use modsched_cli::{commands, create_formatter, logging, should_use_color, OutputFormatter};
use modsched_core::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "modsched",
    version,
    about = "modsched: validate scheduled moderation state transitions",
    long_about = "modsched checks that the moderation state changes scheduled for content entities only follow transitions permitted by their workflow.",
    after_help = "Examples:\n  modsched check site.json\n  modsched check site.json --entity 42 --json\n  modsched timeline site.json 42\n  modsched fields site.json node article\n  modsched transitions site.json editorial\n  modsched init-config .\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Validate scheduled transitions of site entities
    Check {
        /// Path to the site JSON document
        site: PathBuf,

        /// Entity IDs to check (default: every moderated entity)
        #[arg(long = "entity", value_delimiter = ',')]
        entities: Vec<String>,
    },

    /// Show the sorted moderation timeline of an entity
    Timeline {
        /// Path to the site JSON document
        site: PathBuf,

        /// Entity ID
        entity: String,
    },

    /// List fields referencing scheduled updates
    Fields {
        /// Path to the site JSON document
        site: PathBuf,

        /// Entity type ID
        entity_type: String,

        /// Bundle name
        bundle: String,
    },

    /// List the transitions a workflow permits
    Transitions {
        /// Path to the site JSON document
        site: PathBuf,

        /// Workflow ID
        workflow: String,
    },

    /// Write a default modsched.toml
    InitConfig {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Exit status when `check` finds disallowed transitions.
const EXIT_VIOLATIONS: u8 = 1;
/// Exit status for every other failure, including startup errors.
const EXIT_ERROR: u8 = 2;

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_file(path),
        None => Config::load(&std::env::current_dir()?),
    };
    config.context("Failed to load configuration")
}

/// Returns the output format named on the command line, if any.
fn requested_format(cli: &Cli) -> Option<&'static str> {
    match cli.format {
        Some(OutputFormat::Json) => Some("json"),
        Some(OutputFormat::Table) => Some("table"),
        Some(OutputFormat::Plain) => Some("plain"),
        None if cli.json => Some("json"),
        None => None,
    }
}

fn fail(formatter: &dyn OutputFormatter, err: &anyhow::Error) -> ExitCode {
    eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
    ExitCode::from(EXIT_ERROR)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && should_use_color();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(err) => {
            let formatter = create_formatter(requested_format(&cli).unwrap_or("table"), use_color);
            return fail(formatter.as_ref(), &err);
        }
    };

    let format = requested_format(&cli).unwrap_or(match config.output_format {
        modsched_core::OutputFormat::Json => "json",
        modsched_core::OutputFormat::Table => "table",
        modsched_core::OutputFormat::Plain => "plain",
    });
    let formatter = create_formatter(format, use_color);

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _guard = match logging::init_tracing(log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => return fail(formatter.as_ref(), &err),
    };

    let result = match cli.command {
        Some(Commands::Check { site, entities }) => {
            commands::check::execute(&site, &entities, &config, formatter.as_ref()).map(|valid| {
                if valid {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(EXIT_VIOLATIONS)
                }
            })
        }
        Some(Commands::Timeline { site, entity }) => {
            commands::timeline::execute(&site, &entity, &config, formatter.as_ref())
                .map(|()| ExitCode::SUCCESS)
        }
        Some(Commands::Fields {
            site,
            entity_type,
            bundle,
        }) => commands::fields::execute(&site, &entity_type, &bundle, formatter.as_ref())
            .map(|()| ExitCode::SUCCESS),
        Some(Commands::Transitions { site, workflow }) => {
            commands::transitions::execute(&site, &workflow, formatter.as_ref())
                .map(|()| ExitCode::SUCCESS)
        }
        Some(Commands::InitConfig { dir, force }) => {
            commands::init_config::execute(&dir, force).map(|()| ExitCode::SUCCESS)
        }
        None => {
            println!("Use --help for usage information");
            Ok(ExitCode::SUCCESS)
        }
    };

    result.unwrap_or_else(|err| fail(formatter.as_ref(), &err))
}
