//! Command-line interface for belgianlake.
//!
//! With no subcommand the interactive editor is launched on the record store.
//! The remaining commands are small utilities:
//! - `run`: launch the editor (same as no subcommand)
//! - `version`: print name and version
//! - `config`: inspect or create the configuration file
//! - `completions`: generate shell completion scripts

mod commands;

pub use commands::*;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{LakeError, Result};

/// Interactive editor for the print flags of a JSON lines file list.
#[derive(Debug, Parser)]
#[command(name = "belgianlake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run (default: run).
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record store file (default: data.jsonl).
    #[arg(short = 'f', long, global = true, env = "BELGIANLAKE_FILE")]
    pub file: Option<PathBuf>,

    /// Path to custom configuration file.
    #[arg(long, global = true, env = "BELGIANLAKE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (debug logging).
    #[arg(short = 'v', long, global = true, env = "BELGIANLAKE_VERBOSE")]
    pub verbose: bool,

    /// Output as JSON where supported.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn", env = "BELGIANLAKE_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format (text, json, compact, pretty).
    #[arg(long, global = true, default_value = "text", env = "BELGIANLAKE_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Log output file (default: stderr).
    ///
    /// The editor owns the terminal while it runs, so use this to keep logs.
    #[arg(long, global = true, env = "BELGIANLAKE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug messages.
    Debug,
    /// Trace messages (very verbose).
    Trace,
}

/// Log output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format for log aggregation.
    Json,
    /// Compact single-line format.
    Compact,
    /// Pretty format with colors and indentation.
    Pretty,
}

impl LogLevel {
    /// Convert to tracing filter string.
    #[must_use]
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Cli {
    /// Log level after applying `--verbose`.
    ///
    /// `--verbose` raises the default level to debug; an explicit
    /// `--log-level` other than the default wins.
    #[must_use]
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose && self.log_level == LogLevel::Warn {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive editor.
    #[command(alias = "edit")]
    Run(RunArgs),

    /// Print version information.
    Version,

    /// View or create the configuration file.
    #[command(alias = "cfg")]
    Config(ConfigArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

/// Arguments for the run command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Color theme (dark, light, high-contrast).
    #[arg(long)]
    pub theme: Option<String>,

    /// Maximum undo steps kept (0 = unbounded).
    #[arg(long)]
    pub undo_limit: Option<usize>,

    /// Hide the key help footer.
    #[arg(long)]
    pub no_help: bool,
}

/// Arguments for the config command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Config action to perform.
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Show configuration file path.
    Path,

    /// Write a configuration file with defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for the completions command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    Powershell,
    /// Elvish shell.
    Elvish,
}

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::Powershell => Shell::PowerShell,
            CompletionShell::Elvish => Shell::Elvish,
        }
    }
}

/// Generate shell completions and print to stdout.
pub fn generate_completions(shell: CompletionShell) {
    let mut cmd = Cli::command();
    let shell: Shell = shell.into();
    generate(shell, &mut cmd, "belgianlake", &mut io::stdout());
}

/// Initialize logging based on CLI options.
fn init_logging(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{
        fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
        layer::SubscriberExt,
        util::SubscriberInitExt,
        EnvFilter,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.effective_log_level().to_filter_string()));

    let (writer, ansi) = match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    LakeError::io(format!("Failed to open log file: {}", path.display()), e)
                })?;
            (BoxMakeWriter::new(std::sync::Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    // Build subscriber based on log format
    let result = match cli.log_format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(ansi)
                .with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_ansi(ansi).with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };

    if let Err(e) = result {
        eprintln!("Warning: Could not initialize logging: {e}");
    }
    Ok(())
}

/// Load configuration from `--config` or the default location.
///
/// A configuration that cannot be read is reported and replaced by defaults.
pub fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        eprintln!("Warning: {e}; using default configuration");
        Config::default()
    })
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli)?;

    let mut config = load_config(&cli);
    if let Some(file) = &cli.file {
        config.store.path = file.clone();
    }
    debug!(store = %config.store.path.display(), "Configuration resolved");

    match &cli.command {
        None => commands::run::run(&cli, &RunArgs::default(), config),
        Some(Commands::Run(args)) => commands::run::run(&cli, args, config),
        Some(Commands::Version) => commands::version::run(&cli),
        Some(Commands::Config(args)) => commands::config::run(&cli, args, &config),
        Some(Commands::Completions(args)) => {
            generate_completions(args.shell);
            Ok(())
        }
    }
}
