//! Lintel CLI: inspect message control for the lintel static analyzer.
//!
//! Provides `lintel list-msgs` to show which message kinds are enabled,
//! `lintel pragmas` to show what a file's `# lintel:` comments do, and
//! `lintel explain` to show why a kind is or is not reported on a line.

#![warn(missing_docs)]

mod explain;
mod list;
mod pragmas;
mod session;

use std::process;
use std::sync::Once;

use clap::{Parser, Subcommand, ValueEnum};

/// Lintel: message control for static analysis.
#[derive(Parser, Debug)]
#[command(name = "lintel", version, about = "Lintel message control")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `lintel.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Identifiers to enable after the configuration file is applied.
    #[arg(long, global = true, value_delimiter = ',')]
    pub enable: Vec<String>,

    /// Identifiers to disable after the configuration file is applied.
    #[arg(long, global = true, value_delimiter = ',')]
    pub disable: Vec<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered message kinds and whether they are enabled.
    ListMsgs(ListArgs),
    /// Show the pragmas of a file and what they did.
    Pragmas(PragmasArgs),
    /// Explain whether a message kind is reported on a line.
    Explain(ExplainArgs),
}

/// Arguments for `lintel list-msgs`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list enabled kinds.
    #[arg(long, conflicts_with = "disabled")]
    pub enabled: bool,

    /// Only list disabled kinds.
    #[arg(long)]
    pub disabled: bool,
}

/// Arguments for `lintel pragmas`.
#[derive(Parser, Debug)]
pub struct PragmasArgs {
    /// The source file to inspect.
    pub file: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for `lintel explain`.
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// The source file whose pragmas apply.
    pub file: String,

    /// A message symbol, id, or old name.
    pub message: String,

    /// The 1-indexed line to ask about.
    pub line: u32,

    /// The confidence the finding would carry.
    #[arg(long)]
    pub confidence: Option<String>,
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
    /// Command-line enables.
    pub enable: Vec<String>,
    /// Command-line disables.
    pub disable: Vec<String>,
}

static TRACING_INIT: Once = Once::new();

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output for
/// the lintel crates and everything else stays at warnings.
fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = match std::env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) if verbose => EnvFilter::new("warn,lintel_lint=debug,lintel_diagnostics=debug"),
            Err(_) => EnvFilter::new("warn"),
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
        enable: cli.enable,
        disable: cli.disable,
    };

    let result = match cli.command {
        Command::ListMsgs(ref args) => list::run(args, &global),
        Command::Pragmas(ref args) => pragmas::run(args, &global),
        Command::Explain(ref args) => explain::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_list_msgs() {
        let cli = Cli::parse_from(["lintel", "list-msgs", "--enabled"]);
        match cli.command {
            Command::ListMsgs(ref args) => {
                assert!(args.enabled);
                assert!(!args.disabled);
            }
            _ => panic!("expected ListMsgs command"),
        }
    }

    #[test]
    fn list_filters_conflict() {
        let result = Cli::try_parse_from(["lintel", "list-msgs", "--enabled", "--disabled"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_pragmas_json() {
        let cli = Cli::parse_from(["lintel", "pragmas", "src/app.py", "--format", "json"]);
        match cli.command {
            Command::Pragmas(ref args) => {
                assert_eq!(args.file, "src/app.py");
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Pragmas command"),
        }
    }

    #[test]
    fn parse_explain() {
        let cli = Cli::parse_from([
            "lintel",
            "explain",
            "app.py",
            "unused-argument",
            "12",
            "--confidence",
            "HIGH",
        ]);
        match cli.command {
            Command::Explain(ref args) => {
                assert_eq!(args.message, "unused-argument");
                assert_eq!(args.line, 12);
                assert_eq!(args.confidence.as_deref(), Some("HIGH"));
            }
            _ => panic!("expected Explain command"),
        }
    }

    #[test]
    fn parse_global_overrides() {
        let cli = Cli::parse_from([
            "lintel",
            "--disable",
            "C0301,W0613",
            "--enable",
            "python3",
            "-v",
            "list-msgs",
        ]);
        assert_eq!(cli.disable, vec!["C0301", "W0613"]);
        assert_eq!(cli.enable, vec!["python3"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
