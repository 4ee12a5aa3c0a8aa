use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity class a diagnostic grammar recognizes.
///
/// Only error-class diagnostics are extracted; warnings and informational
/// lines never produce a [`Diagnostic`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    #[default]
    Error,
}

impl DiagnosticLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticLevel::Error => "error",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single compiler finding recognized from one line of build output.
///
/// # Fields
/// - `file`: base name of the reported source path (directories stripped).
/// - `line`: 1-based line number, always at least 1.
/// - `code`: the tool's diagnostic identifier, e.g. `"CS0103"`.
/// - `message`: the trimmed free text, trailing bracketed context removed.
/// - `level`: the severity class, currently always [`DiagnosticLevel::Error`].
///
/// # Example
/// ```
/// use diag_e::{Diagnostic, DiagnosticLevel};
///
/// let diag = Diagnostic {
///     file: "Program.cs".to_string(),
///     line: 10,
///     code: "CS0103".to_string(),
///     message: "The name 'foo' does not exist in the current context".to_string(),
///     level: DiagnosticLevel::Error,
/// };
///
/// assert_eq!(diag.to_string(), "Program.cs:10: error CS0103: The name 'foo' does not exist in the current context");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    pub code: String,
    pub message: String,
    pub level: DiagnosticLevel,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} {}: {}",
            self.file, self.line, self.level, self.code, self.message
        )
    }
}
