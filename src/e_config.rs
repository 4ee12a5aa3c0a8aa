//! Pattern configuration: which grammars a scan recognizes.
//!
//! A config file is TOML:
//!
//! ```toml
//! use_builtin = ["msbuild", "tsc"]
//!
//! [[pattern]]
//! name = "fsc"
//! regex = '^(?P<path>.+?)\((?P<line>\d+),(?P<col>\d+)\): error (?P<code>FS\d+): (?P<msg>.+)$'
//! ```
//!
//! Built-ins are registered first, then file patterns in file order, then
//! patterns given on the command line.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::e_matcher::DiagnosticMatcher;
use crate::e_pattern::{DiagnosticPattern, DEFAULT_BUILTIN};
use crate::e_types::DiagnosticLevel;

/// One user-defined grammar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternEntry {
    pub name: String,
    pub regex: String,
    #[serde(default)]
    pub level: DiagnosticLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternConfig {
    /// Built-in grammars to register; `None` means just the default.
    #[serde(default)]
    pub use_builtin: Option<Vec<String>>,
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternEntry>,
}

impl PatternConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: PatternConfig =
            toml::from_str(contents).context("invalid pattern configuration")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("in config {}", path.display()))
    }

    /// Replace the built-in list. An empty list disables built-ins.
    pub fn set_builtins(&mut self, names: Vec<String>) {
        self.use_builtin = Some(names);
    }

    /// Append an ad-hoc error-class grammar.
    pub fn push_regex(&mut self, name: impl Into<String>, regex: impl Into<String>) {
        self.patterns.push(PatternEntry {
            name: name.into(),
            regex: regex.into(),
            level: DiagnosticLevel::Error,
        });
    }

    /// Compile everything into a matcher, in registration order.
    ///
    /// # Example
    /// ```
    /// use diag_e::e_config::PatternConfig;
    ///
    /// let config = PatternConfig::from_toml_str(r#"
    /// use_builtin = ["tsc"]
    /// [[pattern]]
    /// name = "fsc"
    /// regex = '^(?P<path>.+?)\((?P<line>\d+),(?P<col>\d+)\): error (?P<code>FS\d+): (?P<msg>.+)$'
    /// "#).unwrap();
    ///
    /// let matcher = config.build_matcher().unwrap();
    /// let names: Vec<&str> = matcher.patterns().iter().map(|p| p.name()).collect();
    /// assert_eq!(names, ["tsc", "fsc"]);
    /// ```
    pub fn build_matcher(&self) -> Result<DiagnosticMatcher> {
        let default_builtins = vec![DEFAULT_BUILTIN.to_string()];
        let builtins = self.use_builtin.as_ref().unwrap_or(&default_builtins);

        let mut matcher = DiagnosticMatcher::new(Vec::new());
        let mut seen = HashSet::new();
        for name in builtins {
            let pattern = DiagnosticPattern::builtin(name)?;
            if !seen.insert(pattern.name().to_string()) {
                warn!("built-in pattern '{}' listed more than once", name);
            }
            matcher.add_pattern(pattern);
        }
        for entry in &self.patterns {
            let pattern = DiagnosticPattern::new(entry.name.as_str(), &entry.regex, entry.level)?;
            if !seen.insert(entry.name.clone()) {
                warn!("pattern name '{}' is used more than once", entry.name);
            }
            matcher.add_pattern(pattern);
        }

        if matcher.is_empty() {
            bail!("no diagnostic patterns configured");
        }
        Ok(matcher)
    }
}
