//! Diagnostic grammars: one [`DiagnosticPattern`] per recognizable line shape.
//!
//! A grammar is a regex with the named groups `path`, `line`, `code` and `msg`.
//! The group `col` is optional; when present its capture must be a positive
//! integer for the line to count as a match, and it is then thrown away.

use anyhow::{anyhow, bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::e_types::DiagnosticLevel;

/// Named groups every grammar has to define, in capture order.
pub const REQUIRED_GROUPS: [&str; 4] = ["path", "line", "code", "msg"];

/// Optional column group, validated then discarded.
pub const COLUMN_GROUP: &str = "col";

/// Name of the grammar registered when nothing else is configured.
pub const DEFAULT_BUILTIN: &str = "msbuild";

/// `Program.cs(10,5): error CS0103: message [Project.csproj]`
///
/// Leading `N>` node prefixes from parallel msbuild runs are skipped.
/// The trailing bracketed project context is optional and may directly
/// follow the `:` after the code, leaving an empty message.
pub const MSBUILD_GRAMMAR: &str = r"^\s*(?:\d+>)?(?P<path>.+?)\((?P<line>\d+),(?P<col>\d+)\): error (?P<code>[A-Za-z]+\d+):(?P<msg>.*?)(?:\s+\[[^\]]*\])?\s*$";

/// `src/app.ts(3,7): error TS2322: message` as printed by `tsc --pretty false`.
pub const TSC_GRAMMAR: &str =
    r"^\s*(?P<path>.+?)\((?P<line>\d+),(?P<col>\d+)\): error (?P<code>TS\d+): (?P<msg>.*?)\s*$";

static BUILTINS: Lazy<Vec<DiagnosticPattern>> = Lazy::new(|| {
    [("msbuild", MSBUILD_GRAMMAR), ("tsc", TSC_GRAMMAR)]
        .iter()
        .map(|(name, grammar)| {
            DiagnosticPattern::new(*name, grammar, DiagnosticLevel::Error)
                .expect("built-in grammars are valid")
        })
        .collect()
});

/// One recognizable diagnostic grammar.
///
/// Patterns are built once while configuring a matcher and never change
/// afterwards.
#[derive(Clone)]
pub struct DiagnosticPattern {
    name: String,
    regex: Regex,
    level: DiagnosticLevel,
    has_column: bool,
}

impl fmt::Debug for DiagnosticPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticPattern")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .field("level", &self.level)
            .finish()
    }
}

impl DiagnosticPattern {
    /// Compile a grammar.
    ///
    /// Fails when the regex does not compile or when any of
    /// [`REQUIRED_GROUPS`] is missing.
    ///
    /// # Example
    /// ```
    /// use diag_e::{DiagnosticLevel, DiagnosticPattern};
    ///
    /// let ok = DiagnosticPattern::new(
    ///     "fsc",
    ///     r"^(?P<path>.+?)\((?P<line>\d+),(?P<col>\d+)\): error (?P<code>FS\d+): (?P<msg>.+)$",
    ///     DiagnosticLevel::Error,
    /// );
    /// assert!(ok.is_ok());
    ///
    /// let missing_code = DiagnosticPattern::new("bad", r"(?P<path>.+):(?P<line>\d+): (?P<msg>.+)", DiagnosticLevel::Error);
    /// assert!(missing_code.is_err());
    /// ```
    pub fn new(name: impl Into<String>, grammar: &str, level: DiagnosticLevel) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(grammar)
            .with_context(|| format!("pattern '{}' is not a valid regex", name))?;

        let groups: Vec<&str> = regex.capture_names().flatten().collect();
        let missing: Vec<&str> = REQUIRED_GROUPS
            .iter()
            .copied()
            .filter(|g| !groups.contains(g))
            .collect();
        if !missing.is_empty() {
            bail!(
                "pattern '{}' is missing named group(s): {}",
                name,
                missing.join(", ")
            );
        }
        let has_column = groups.contains(&COLUMN_GROUP);

        log::debug!("compiled pattern '{}': {}", name, regex.as_str());
        Ok(DiagnosticPattern {
            name,
            regex,
            level,
            has_column,
        })
    }

    /// Look up a built-in grammar by name (`msbuild`, `tsc`).
    pub fn builtin(name: &str) -> Result<Self> {
        BUILTINS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "unknown built-in pattern '{}' (available: {})",
                    name,
                    Self::builtin_names().join(", ")
                )
            })
    }

    /// Names of all built-in grammars in catalogue order.
    pub fn builtin_names() -> Vec<&'static str> {
        vec!["msbuild", "tsc"]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn level(&self) -> DiagnosticLevel {
        self.level
    }

    /// Whether the grammar captures a column that must validate.
    pub fn has_column(&self) -> bool {
        self.has_column
    }
}

impl Default for DiagnosticPattern {
    fn default() -> Self {
        BUILTINS[0].clone()
    }
}
