//! # diag-e
//!
//! `diag-e` scans a build log for compiler error diagnostics and prints them
//! grouped by source file.
//!
//! ## Quick Start
//! ```sh
//! dotnet build > build_errors.txt
//! diag-e
//! ```

use anyhow::{Context, Result};
use clap::Parser;

use diag_e::prelude::*;
use diag_e::{e_reports, scan_reader, Cli, DiagnosticAggregator, PatternConfig};

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    if cli.version {
        diag_e::e_cli::print_version_and_features();
        exit(0);
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PatternConfig::load(path)?,
        None => PatternConfig::default(),
    };
    if cli.no_builtin {
        config.set_builtins(Vec::new());
    } else if !cli.builtins.is_empty() {
        config.set_builtins(cli.builtins.clone());
    }
    for (i, regex) in cli.patterns.iter().enumerate() {
        config.push_regex(format!("cli-{}", i + 1), regex.as_str());
    }
    let matcher = config.build_matcher()?;

    if cli.list_patterns {
        for pattern in matcher.patterns() {
            println!(
                "{} [{}{}] {}",
                pattern.name(),
                pattern.level(),
                if pattern.has_column() { ", col" } else { "" },
                pattern.regex().as_str()
            );
        }
        return Ok(());
    }

    let source = diag_e::locate_log(cli.log.as_deref())?;
    debug!("scanning {}", source);
    let reader = source.open()?;

    let mut aggregator = DiagnosticAggregator::new();
    scan_reader(reader, &matcher, &mut aggregator)
        .with_context(|| format!("failed reading {}", source))?;

    let report = e_reports::render(&aggregator.finalize(), cli.format)?;
    print!("{}", report);
    Ok(())
}
