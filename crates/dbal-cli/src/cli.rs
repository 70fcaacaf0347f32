use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Parse and inspect DBAL schema files.
///
/// DBAL describes tables, columns, constraints and notes in a DBML-like
/// notation. This tool checks files against the grammar, shows their
/// structure, and prints them back in canonical form.
#[derive(Parser)]
#[command(
    name = "dbal",
    version,
    about = "Parse and inspect DBAL schema files",
    after_help = "Use 'dbal <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: DBAL_CONFIG]
    #[arg(short = 'c', long = "config", global = true, env = "DBAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate .dbal files
    Parse(ParseArgs),

    /// Show tables, columns and references of .dbal files
    Inspect(InspectArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `dbal parse`.
#[derive(Args)]
pub struct ParseArgs {
    /// Schema files or directories to parse (default: from config, schemas/)
    pub paths: Vec<PathBuf>,

    /// Print the parsed AST back as DBAL (round-trip output)
    #[arg(long = "print")]
    pub print_ast: bool,

    /// Dump the token stream of each file
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

/// Arguments for `dbal inspect`.
#[derive(Args)]
pub struct InspectArgs {
    /// Schema files or directories to inspect (default: from config, schemas/)
    pub paths: Vec<PathBuf>,

    /// Show a single table in detail
    #[arg(short = 't', long = "table")]
    pub table: Option<String>,
}

/// Arguments for `dbal completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_parser = ["bash", "zsh", "fish", "powershell", "elvish"])]
    pub shell: String,
}
