//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here: script types,
//! API versions, and module names are collected as free-form strings and
//! resolved by the core's normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "suitegen",
    bin_name = "suitegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} SuiteScript skeleton generator",
    long_about = "Suitegen emits a SuiteScript skeleton file with a license \
                  header, script-type and API-version annotations, and an AMD \
                  dependency preamble for the requested N/* modules.",
    after_help = "EXAMPLES:\n\
        \x20 suitegen new -f basic.js\n\
        \x20 suitegen new -f mr.js -s MapReduce -m record -m search\n\
        \x20 suitegen list modules\n\
        \x20 suitegen completions bash > /usr/share/bash-completion/completions/suitegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new SuiteScript skeleton file.
    #[command(
        visible_alias = "n",
        about = "Generate a skeleton file",
        after_help = "EXAMPLES:\n\
            \x20 suitegen new -f basic.js\n\
            \x20 suitegen new -f ue.js -s UserEvent -a 2.0\n\
            \x20 suitegen new -f mr.js -s mapreduce -m record -m search -c copyright.txt"
    )]
    New(NewArgs),

    /// List known script types, API versions, and modules.
    #[command(
        visible_alias = "ls",
        about = "List known enumeration values",
        after_help = "EXAMPLES:\n\
            \x20 suitegen list\n\
            \x20 suitegen list modules\n\
            \x20 suitegen list types --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 suitegen completions bash > ~/.local/share/bash-completion/completions/suitegen\n\
            \x20 suitegen completions zsh  > ~/.zfunc/_suitegen\n\
            \x20 suitegen completions fish > ~/.config/fish/completions/suitegen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `suitegen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Output file name; must end in `.js`.
    #[arg(
        short = 'f',
        long = "filename",
        value_name = "FILE",
        help = "The name of the JavaScript file to be created"
    )]
    pub filename: String,

    /// Path to a `.txt` file whose contents become the copyright header.
    #[arg(
        short = 'c',
        long = "copyright",
        value_name = "TXT",
        help = "Copyright text file to embed as a header comment"
    )]
    pub copyright: Option<PathBuf>,

    /// Script type (free-form; matched case-insensitively by the core).
    #[arg(
        short = 's',
        long = "scripttype",
        alias = "stype",
        short_alias = 't',
        value_name = "TYPE",
        help = "The type of SuiteScript to create (e.g. MapReduce, Suitelet)"
    )]
    pub script_type: Option<String>,

    /// SuiteScript API version.
    #[arg(
        short = 'a',
        long = "apiversion",
        short_alias = 'v',
        value_name = "VERSION",
        help = "The SuiteScript API version to use [default: 2.1]"
    )]
    pub api_version: Option<String>,

    /// Framework modules to import, in the order they should appear.
    #[arg(
        short = 'm',
        long = "modules",
        value_name = "MODULE",
        num_args = 1..,
        action = clap::ArgAction::Append,
        help = "The SuiteScript API modules (N/*) to import into the project"
    )]
    pub modules: Vec<String>,

    /// Overwrite an existing file (destructive).
    #[arg(long = "force", help = "Overwrite existing file")]
    pub force: bool,

    /// Print the generated skeleton without writing any file.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `suitegen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which enumeration to list.
    #[arg(
        value_enum,
        default_value = "all",
        help = "Enumeration to list"
    )]
    pub category: ListCategory,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// The enumeration tables that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListCategory {
    /// Everything.
    All,
    /// Script types.
    Types,
    /// API versions.
    Versions,
    /// Importable N/* modules.
    Modules,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `suitegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────
