use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use innumerati::logging;
use innumerati::menu::MenuCommand;
use innumerati::session::Session;
use innumerati::settings::{OutputFormat, Settings};
use innumerati::NumeralConverter;

#[derive(Parser)]
#[command(name = "innumerati")]
#[command(author = "Innumerati Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Innumerati - Roman numeral converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "Read settings from this file",
        global = true
    )]
    config: Option<PathBuf>,

    #[arg(long, help = "Print numerals in lowercase", global = true)]
    lowercase: bool,

    #[arg(
        long,
        help = "Print numerals in uppercase, overriding the settings file",
        global = true,
        conflicts_with = "lowercase"
    )]
    uppercase: bool,

    #[arg(long, value_enum, help = "Output format", global = true)]
    format: Option<OutputFormat>,
}

impl Cli {
    /// `Some` only when a case flag was given on the command line.
    fn case_override(&self) -> Option<bool> {
        match (self.lowercase, self.uppercase) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Convert a number to a numeral")]
    ToNumeral {
        #[arg(help = "Number from 1 to 3999", allow_hyphen_values = true)]
        value: String,
    },

    #[command(about = "Convert a numeral to a number")]
    ToInt {
        #[arg(help = "Numeral to convert, in any case")]
        numeral: String,
    },

    #[command(about = "Check whether a numeral is well formed")]
    Check {
        #[arg(help = "Numeral to check")]
        numeral: String,
    },

    #[command(about = "List every number from 1 to 3999 with its numeral")]
    List,

    #[command(about = "Start the interactive menu (default)")]
    Menu,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }
    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{} {}", "⚠".yellow(), e);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let (settings, source) = Settings::load(cli.config.as_deref())?;
    logging::log_settings_loaded(source.as_deref());
    let settings = settings.with_overrides(cli.case_override(), cli.format);

    let converter = NumeralConverter::new();
    let session = Session::new(&converter, settings);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::ToNumeral { value } => {
            println!("{}", session.to_numeral(&value)?);
        }
        Commands::ToInt { numeral } => {
            println!("{}", session.to_int(&numeral)?);
        }
        Commands::Check { numeral } => {
            let validity = session.check(&numeral);
            println!("{}", session.render_check(&validity)?);
            if !validity.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::List => {
            println!("{}", session.list()?);
        }
        Commands::Menu => {
            MenuCommand::new(session).execute()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
