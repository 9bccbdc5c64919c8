#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use output::{CliError, OutputMode, render_error, select_output_mode};
use showcase_core::config::resolve_config;
use showcase_core::error::ErrorCode;
use showcase_core::ingest::IngestError;
use showcase_core::model::ParseCategoryError;
use showcase_core::recruit::RecruitError;
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "showcase",
    author,
    version,
    about = "showcase: project gallery for the club portfolio site",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output (shorthand for `--format json`).
    #[arg(long, global = true)]
    json: bool,

    /// Output format: pretty, text, or json.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Directory holding the project manifests, relative to the site root.
    #[arg(long, global = true, default_value = "projects")]
    projects: PathBuf,

    /// Site root (defaults to the current directory).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Gallery",
        about = "List projects for a category",
        long_about = "Filter projects by category, newest generation first, and show the current page.",
        after_help = "EXAMPLES:\n    # First page of every project\n    showcase list\n\n    # Machine learning projects after two \"show more\" presses\n    showcase list --category ml --reveal 2\n\n    # Emit machine-readable output\n    showcase list --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Gallery",
        about = "Show the category tabs",
        long_about = "Show every category tab with the number of projects it matches.",
        after_help = "EXAMPLES:\n    # Tab bar with counts\n    showcase categories\n\n    # Mark the web tab as selected\n    showcase categories --selected web"
    )]
    Categories(cmd::categories::CategoriesArgs),

    #[command(
        next_help_heading = "Gallery",
        about = "Replay gallery interactions",
        long_about = "Replay tab selections and \"show more\" presses and report the state and scroll command after each one.",
        after_help = "EXAMPLES:\n    # Reveal once, then switch to android\n    showcase session more select:android\n\n    # Include visible titles per step\n    showcase session more more --show-projects --json"
    )]
    Session(cmd::session::SessionArgs),

    #[command(
        next_help_heading = "Recruit",
        about = "Show the recruiting field explainer",
        long_about = "Show the cohort tabs and the field explanation for the selected cohort.",
        after_help = "EXAMPLES:\n    # First cohort\n    showcase recruit\n\n    # A specific cohort from a custom catalog\n    showcase recruit --cohort 3기 --catalog recruit.json"
    )]
    Recruit(cmd::recruit::RecruitArgs),

    #[command(
        next_help_heading = "Shell",
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Bash completions\n    showcase completions bash > /etc/bash_completion.d/showcase"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SHOWCASE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "showcase=debug,info"
        } else {
            "showcase=info,warn"
        })
    });

    let format = env::var("SHOWCASE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Find the first typed error in the chain that carries an error code.
fn error_code_for(err: &anyhow::Error) -> Option<ErrorCode> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<IngestError>()
            .map(IngestError::error_code)
            .or_else(|| {
                cause
                    .downcast_ref::<RecruitError>()
                    .map(RecruitError::error_code)
            })
    })
}

/// Category typos on the command line get the invalid-category code instead
/// of clap's generic usage report.
fn usage_error_code(err: &clap::Error) -> Option<ErrorCode> {
    let source = std::error::Error::source(err)?;
    let bad_category = source.downcast_ref::<ParseCategoryError>().is_some()
        || matches!(
            source.downcast_ref::<cmd::session::ParseEventError>(),
            Some(cmd::session::ParseEventError::Category(_))
        );
    bad_category.then_some(ErrorCode::InvalidCategory)
}

/// Output mode for errors raised before config is resolved: `--format`
/// wins, then `--json`, otherwise text.
fn early_output_mode(format: Option<OutputMode>, json: bool) -> OutputMode {
    format.unwrap_or(if json {
        OutputMode::Json
    } else {
        OutputMode::Text
    })
}

/// Recover `--json` / `--format` from raw arguments clap refused to parse.
fn output_mode_from_args<I, S>(args: I) -> OutputMode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parse = |value: &str| <OutputMode as ValueEnum>::from_str(value, true).ok();
    let mut format = None;
    let mut json = false;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        if arg == "--json" {
            json = true;
        } else if arg == "--format" {
            format = args.next().and_then(|value| parse(value.as_ref()));
        } else if let Some(value) = arg.strip_prefix("--format=") {
            format = parse(value);
        }
    }
    early_output_mode(format, json)
}

fn to_cli_error(err: &anyhow::Error) -> CliError {
    let message = format!("{err:#}");
    error_code_for(err).map_or_else(
        || CliError::new(message.clone()),
        |code| CliError::with_code(message.clone(), code),
    )
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = match cli.root {
        Some(ref root) => root.clone(),
        None => env::current_dir()?,
    };

    let config = match resolve_config(&root, cli.json) {
        Ok(config) => config,
        Err(err) => {
            let mode = early_output_mode(cli.format, cli.json);
            let error = CliError::with_code(format!("{err:#}"), ErrorCode::ConfigParseError);
            render_error(mode, &error)?;
            std::process::exit(1);
        }
    };
    let output = select_output_mode(cli.format, &config.resolved_output);
    debug!(root = %root.display(), ?output, "configuration resolved");

    let ctx = cmd::SiteContext::new(&root, &cli.projects, config.site);

    let result = match cli.command {
        Commands::List(ref args) => cmd::list::run_list(args, &ctx, output),
        Commands::Categories(ref args) => cmd::categories::run_categories(args, &ctx, output),
        Commands::Session(ref args) => cmd::session::run_session(args, &ctx, output),
        Commands::Recruit(ref args) => cmd::recruit::run_recruit(args, &ctx, output),
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args, &mut command)
        }
    };

    if let Err(err) = result {
        render_error(output, &to_cli_error(&err))?;
        std::process::exit(1);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if let Some(code) = usage_error_code(&err) {
                let message = std::error::Error::source(&err)
                    .map_or_else(|| err.to_string(), ToString::to_string);
                let mode = output_mode_from_args(env::args().skip(1));
                render_error(mode, &CliError::with_code(message, code))?;
                std::process::exit(2);
            }
            err.exit();
        }
    };
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    run(cli)
}
