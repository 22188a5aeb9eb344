// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::loader::default_graph_path;
use crate::types::OutputFormat;

/// Command-line arguments for `prereqs`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "prereqs",
    version,
    about = "Order items so that every item comes after everything it depends on.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the graph document (`.toml` or `.json`).
    ///
    /// Default: `Prereqs.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_graph_path())]
    pub graph: PathBuf,

    /// Use the built-in course catalog instead of reading `--graph`.
    #[arg(long)]
    pub builtin: bool,

    /// Resolve only what this item needs. May be repeated.
    ///
    /// Overrides `[config].roots` from the graph document. Without any roots
    /// every declared item is resolved.
    #[arg(long = "root", value_name = "NAME")]
    pub roots: Vec<String>,

    /// Output format. Overrides `[config].format`.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PREREQS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the graph, but don't print an order.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name the way the CLI does, ignoring case and padding.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true).ok()
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
