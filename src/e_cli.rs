use clap::Parser;
use std::path::PathBuf;

use crate::e_reports::ReportFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "diag-e is for Errors. Extracts compiler errors from a build log, grouped by file.", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version and feature flags in JSON format.
    #[arg(
        long,
        short = 'v',
        help = "Print version and feature flags in JSON format."
    )]
    pub version: bool,

    #[arg(
        help = "Build log to scan; '-' reads stdin. Defaults to build_errors.txt, then $TEMP/build_output.txt."
    )]
    pub log: Option<PathBuf>,

    #[arg(long, short = 'c', help = "TOML file with extra diagnostic patterns.")]
    pub config: Option<PathBuf>,

    #[arg(
        long = "builtin",
        short = 'b',
        help = "Built-in grammar to register (repeatable; replaces the default msbuild)."
    )]
    pub builtins: Vec<String>,

    #[arg(
        long = "no-builtin",
        default_value_t = false,
        conflicts_with = "builtins",
        help = "Register no built-in grammars."
    )]
    pub no_builtin: bool,

    #[arg(
        long = "pattern",
        short = 'p',
        help = "Extra regex with named groups path, line, code, msg (and optionally col). Repeatable."
    )]
    pub patterns: Vec<String>,

    #[arg(
        long,
        short = 'f',
        value_enum,
        default_value_t = ReportFormat::Text,
        help = "Report layout."
    )]
    pub format: ReportFormat,

    #[arg(long = "list-patterns", help = "Print the registered patterns and exit.")]
    pub list_patterns: bool,
}

/// Print the version and the JSON array of feature flags.
pub fn print_version_and_features() {
    let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    println!("diag-e {}", version);
    println!("{}", crate::e_features::get_feature_flags_json());
}
