//! Sonic CLI - a command-line collaborator for the Sonic lexer.
//!
//! This is the main entry point. It uses clap for argument parsing,
//! reads source from a file or stdin, invokes `sonic_lex::lex`, and
//! renders either the resulting token stream or a diagnostic for the
//! first lexical error.

mod config;
mod diagnostic;
mod error;
mod render;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{OutputFormat as ConfigOutputFormat, SonicConfig};
use diagnostic::Diagnostic;
use error::{CliError, Result};

/// Sonic - a lexical analyzer for the Sonic language.
#[derive(Parser, Debug)]
#[command(name = "sonic")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the Sonic language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "SONIC_VERBOSE")]
    verbose: bool,

    /// Disable ANSI color in log output.
    #[arg(long, global = true, env = "SONIC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lex a source file (or stdin) and print its token stream.
    Lex(LexCommand),
}

#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to lex. Omit (and pass --stdin) to read from stdin.
    file: Option<PathBuf>,

    /// Read source from stdin instead of a file.
    #[arg(long)]
    stdin: bool,

    /// Output format.
    #[arg(long, value_enum)]
    format: Option<CliOutputFormat>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CliOutputFormat {
    Human,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;
    let config = SonicConfig::load()?;

    match cli.command {
        Commands::Lex(args) => run_lex(args, &config),
    }
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn run_lex(args: LexCommand, config: &SonicConfig) -> Result<()> {
    let source = read_source(&args)?;

    let format = args
        .format
        .map(|f| match f {
            CliOutputFormat::Human => ConfigOutputFormat::Human,
            CliOutputFormat::Json => ConfigOutputFormat::Json,
        })
        .unwrap_or(config.format);

    match sonic_lex::lex(&source) {
        Ok(tokens) => {
            let rendered = match format {
                ConfigOutputFormat::Human => render::render_human(&tokens),
                ConfigOutputFormat::Json => render::render_json(&tokens)?,
            };
            println!("{rendered}");
            Ok(())
        }
        Err(err) => {
            let diagnostic = Diagnostic::new(&source, &err);
            eprintln!("{diagnostic}");
            std::process::exit(1);
        }
    }
}

fn read_source(args: &LexCommand) -> Result<String> {
    if args.stdin || args.file.is_none() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        let path = args.file.as_ref().expect("checked by the branch above");
        Ok(std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex_with_file() {
        let cli = Cli::parse_from(["sonic", "lex", "source.sonic"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("source.sonic")));
            assert!(!args.stdin);
        } else {
            panic!("expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_stdin_flag() {
        let cli = Cli::parse_from(["sonic", "lex", "--stdin"]);
        if let Commands::Lex(args) = cli.command {
            assert!(args.stdin);
            assert_eq!(args.file, None);
        } else {
            panic!("expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_json_format() {
        let cli = Cli::parse_from(["sonic", "lex", "--format", "json", "a.sonic"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.format, Some(CliOutputFormat::Json));
        } else {
            panic!("expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose_and_no_color() {
        let cli = Cli::parse_from(["sonic", "--verbose", "--no-color", "lex", "--stdin"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }
}
