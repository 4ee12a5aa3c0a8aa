#![doc = include_str!("../README.md")]

// Re-export std common modules
pub mod prelude {
    pub use std::env;
    pub use std::io;
    pub use std::path::{Path, PathBuf};
    pub use std::process::exit;
    pub use log::{debug, error, info, log_enabled, Level};
}

pub mod e_types;
pub use e_types::{Diagnostic, DiagnosticLevel};
pub mod e_pattern;
pub use e_pattern::DiagnosticPattern;
pub mod e_matcher;
pub use e_matcher::DiagnosticMatcher;
pub mod e_aggregator;
pub use e_aggregator::{DiagnosticAggregator, DiagnosticSummary, FileDiagnostics};
pub mod e_reports;
pub use e_reports::{render, render_text, ReportFormat};
pub mod e_parser;
pub use e_parser::scan_reader;
pub mod e_config;
pub use e_config::PatternConfig;
pub mod e_locate;
pub use e_locate::{locate_log, LogSource};
pub mod e_cli;
pub use e_cli::Cli;
pub mod e_features;
