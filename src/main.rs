use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use recipelint::config::{LintConfig, OutputFormat};
use recipelint::recipe::display;
use recipelint::recipe::parsing;
use recipelint::recipe::types::RuleOptions;
use recipelint::{lint_directory, validate_document_with};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate every recipe under the recipes directory
    Lint {
        #[clap(short, long, value_parser)]
        path: Option<PathBuf>,
        #[clap(short, long, value_parser)]
        config: Option<PathBuf>,
        /// Also check ingredient and result shapes of filling, emptying, pressing and deploying recipes
        #[clap(long)]
        strict: bool,
        #[clap(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show which rule-set applies to a recipe file and check it
    Show {
        #[clap(short, long, value_parser)]
        file: PathBuf,
        #[clap(short, long, value_parser)]
        config: Option<PathBuf>,
        #[clap(long)]
        strict: bool,
    },
    /// List the known recipe types and their required fields
    Types,
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Lint {
            path,
            config,
            strict,
            format,
        } => {
            let mut config = LintConfig::discover(config.as_deref())?;
            if let Some(path) = path {
                config.recipes_path = path;
            }
            if strict {
                config.strict_processing = true;
            }
            if let Some(format) = format {
                config.format = format;
            }

            tracing::debug!(?config, "resolved configuration");

            let report = lint_directory(&config.recipes_path, &config.rule_options());

            match config.format {
                OutputFormat::Text => display::print_report(&report),
                OutputFormat::Json => {
                    display::print_json(&report).context("Unable to serialize report")?
                }
            }

            Ok(match report.passed() {
                true => ExitCode::SUCCESS,
                false => ExitCode::from(1),
            })
        }

        Commands::Show {
            file,
            config,
            strict,
        } => {
            let mut config = LintConfig::discover(config.as_deref())?;
            if strict {
                config.strict_processing = true;
            }

            show(&file, &config.rule_options())
        }

        Commands::Types => {
            display::print_types();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show(file: &Path, options: &RuleOptions) -> anyhow::Result<ExitCode> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Unable to open file {}", file.display()))?;
    let document = parsing::parse_recipe(&content)
        .with_context(|| format!("Unable to parse {}", file.display()))?;

    let path = file.display().to_string();
    display::print_outline(&path, &document);

    let findings = validate_document_with(&path, &document, options);
    if !findings.is_empty() {
        println!();
        findings.iter().for_each(|finding| println!("{}", finding));
    }

    Ok(match findings.iter().any(|finding| finding.is_error()) {
        true => ExitCode::from(1),
        false => ExitCode::SUCCESS,
    })
}
