use crate::types::{ColorMode, DumpFormat, ListStyle, ReadableKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "boxlog")]
#[command(about = "Print boxed status messages and readable data dumps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $BOXLOG_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Hide the timestamp line
    #[arg(long, global = true)]
    pub no_timestamp: bool,

    /// Spaces between border and text, clamped to 1..=64
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub padding: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Yellow box
    Warning(LogArgs),
    /// Blue box
    Message(LogArgs),
    /// Box in the default terminal color
    Info(LogArgs),
    /// Red box
    Error(LogArgs),
    /// Green box
    Success(LogArgs),
    /// Orange-ish box for work in progress
    Ongoing(LogArgs),

    /// Pretty-print a JSON document
    Dump {
        /// JSON file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        #[arg(long, default_value = "tree")]
        format: DumpFormat,

        /// Base indent for tree, spaces per level for json (rejected with flat)
        #[arg(long)]
        indent: Option<usize>,

        /// Text placed before flat output (rejected with tree and json)
        #[arg(long)]
        before: Option<String>,
    },

    /// Render a list of strings
    List {
        #[arg(required = true)]
        items: Vec<String>,

        #[arg(long, default_value = "quoted")]
        style: ListStyle,

        /// Text placed before quoted/indexed output (rejected with lines)
        #[arg(long)]
        before: Option<String>,
    },

    /// Convert a raw number into a human-readable string
    Readable {
        kind: ReadableKind,

        #[arg(allow_negative_numbers = true)]
        value: String,
    },
}

#[derive(Args)]
pub struct LogArgs {
    /// Message text; `-` reads it from stdin
    pub message: String,

    #[arg(long, short)]
    pub tag: Option<String>,
}
