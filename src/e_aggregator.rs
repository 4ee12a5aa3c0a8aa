//! Groups recognized diagnostics by source file.
//!
//! Both the file order and the order inside each file are the order in which
//! diagnostics were first observed. Nothing is deduplicated or re-sorted.

use std::collections::HashMap;

use serde::Serialize;

use crate::e_matcher::DiagnosticMatcher;
use crate::e_types::Diagnostic;

/// All diagnostics reported against one file, in observation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiagnostics {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// The finalized, read-only result of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticSummary {
    /// Nothing was ever observed.
    Clean,
    Errors {
        total: usize,
        files: Vec<FileDiagnostics>,
    },
}

impl DiagnosticSummary {
    pub fn is_clean(&self) -> bool {
        matches!(self, DiagnosticSummary::Clean)
    }

    pub fn total(&self) -> usize {
        match self {
            DiagnosticSummary::Clean => 0,
            DiagnosticSummary::Errors { total, .. } => *total,
        }
    }

    pub fn file_count(&self) -> usize {
        self.files().len()
    }

    pub fn files(&self) -> &[FileDiagnostics] {
        match self {
            DiagnosticSummary::Clean => &[],
            DiagnosticSummary::Errors { files, .. } => files.as_slice(),
        }
    }
}

/// Working state of one scan.
///
/// File groups live in a `Vec` so insertion order is explicit; `index` maps
/// a file name to its slot.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticAggregator {
    groups: Vec<FileDiagnostics>,
    index: HashMap<String, usize>,
    total: usize,
}

impl DiagnosticAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic to its file's group, creating the group on first
    /// sight.
    pub fn observe(&mut self, diagnostic: Diagnostic) {
        let slot = match self.index.get(&diagnostic.file) {
            Some(slot) => *slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(diagnostic.file.clone(), slot);
                self.groups.push(FileDiagnostics {
                    file: diagnostic.file.clone(),
                    diagnostics: Vec::new(),
                });
                slot
            }
        };
        self.groups[slot].diagnostics.push(diagnostic);
        self.total += 1;
    }

    /// Run `line` through `matcher` and observe the result, if any.
    ///
    /// Returns whether the line produced a diagnostic.
    pub fn observe_line(&mut self, matcher: &DiagnosticMatcher, line: &str) -> bool {
        match matcher.match_line(line) {
            Some(diagnostic) => {
                self.observe(diagnostic);
                true
            }
            None => false,
        }
    }

    /// Feed a whole sequence of lines, returning how many were recognized.
    ///
    /// # Example
    /// ```
    /// use diag_e::{DiagnosticAggregator, DiagnosticMatcher};
    ///
    /// let log = "\
    /// A.cs(1,1): error CS0001: first [P]
    /// Build FAILED.
    /// B.cs(2,2): error CS0002: second [P]
    /// A.cs(3,3): error CS0003: third [P]";
    ///
    /// let mut aggregator = DiagnosticAggregator::new();
    /// let matched = aggregator.scan_lines(&DiagnosticMatcher::default(), log.lines());
    /// assert_eq!(matched, 3);
    ///
    /// let summary = aggregator.finalize();
    /// let files: Vec<&str> = summary.files().iter().map(|f| f.file.as_str()).collect();
    /// assert_eq!(files, ["A.cs", "B.cs"]);
    /// ```
    pub fn scan_lines<I, S>(&mut self, matcher: &DiagnosticMatcher, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter(|line| self.observe_line(matcher, line.as_ref()))
            .count()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn file_count(&self) -> usize {
        self.groups.len()
    }

    /// Snapshot the current state. Does not reset anything, so calling it
    /// again without new observations yields an equal summary.
    pub fn finalize(&self) -> DiagnosticSummary {
        if self.total == 0 {
            return DiagnosticSummary::Clean;
        }
        log::debug!(
            "finalized {} diagnostic(s) across {} file(s)",
            self.total,
            self.groups.len()
        );
        DiagnosticSummary::Errors {
            total: self.total,
            files: self.groups.clone(),
        }
    }
}
