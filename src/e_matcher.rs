use crate::e_pattern::{DiagnosticPattern, COLUMN_GROUP};
use crate::e_types::Diagnostic;

/// Recognizes single lines of build output as [`Diagnostic`]s.
///
/// Grammars are tried in registration order and the first one whose
/// captures all validate wins. A line that matches nothing is simply "no
/// match"; the matcher never fails on content.
#[derive(Clone, Debug)]
pub struct DiagnosticMatcher {
    patterns: Vec<DiagnosticPattern>,
}

impl Default for DiagnosticMatcher {
    /// A matcher with only the `msbuild` grammar registered.
    fn default() -> Self {
        DiagnosticMatcher {
            patterns: vec![DiagnosticPattern::default()],
        }
    }
}

impl DiagnosticMatcher {
    pub fn new(patterns: Vec<DiagnosticPattern>) -> Self {
        DiagnosticMatcher { patterns }
    }

    /// Register another grammar after the existing ones.
    pub fn add_pattern(&mut self, pattern: DiagnosticPattern) {
        log::debug!(
            "registering pattern #{} '{}'",
            self.patterns.len(),
            pattern.name()
        );
        self.patterns.push(pattern);
    }

    pub fn patterns(&self) -> &[DiagnosticPattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Try every registered grammar against `line`.
    ///
    /// # Example
    /// ```
    /// use diag_e::DiagnosticMatcher;
    ///
    /// let matcher = DiagnosticMatcher::default();
    /// let diag = matcher
    ///     .match_line(r"C:\src\App\Program.cs(10,5): error CS0103: The name 'foo' does not exist in the current context [C:\src\App\App.csproj]")
    ///     .unwrap();
    /// assert_eq!(diag.file, "Program.cs");
    /// assert_eq!(diag.line, 10);
    /// assert_eq!(diag.code, "CS0103");
    /// assert_eq!(diag.message, "The name 'foo' does not exist in the current context");
    ///
    /// assert!(matcher.match_line("Build succeeded.").is_none());
    /// ```
    pub fn match_line(&self, line: &str) -> Option<Diagnostic> {
        let line = line.trim_end_matches(['\r', '\n']);
        for pattern in &self.patterns {
            if let Some(diag) = extract(pattern, line) {
                log::trace!("[{}] matched: {}", pattern.name(), line);
                return Some(diag);
            }
        }
        None
    }
}

/// Apply one grammar. Any capture that fails validation rejects the line.
fn extract(pattern: &DiagnosticPattern, line: &str) -> Option<Diagnostic> {
    let caps = pattern.regex().captures(line)?;

    let path = caps.name("path")?.as_str().trim();
    let line_number = parse_positive(caps.name("line")?.as_str())?;
    if let Some(col) = caps.name(COLUMN_GROUP) {
        parse_positive(col.as_str())?;
    }
    let code = caps.name("code")?.as_str().trim();
    let message = caps.name("msg")?.as_str().trim();
    if code.is_empty() || message.is_empty() {
        log::trace!("[{}] empty code or message: {}", pattern.name(), line);
        return None;
    }

    Some(Diagnostic {
        file: base_name(path)?.to_string(),
        line: line_number,
        code: code.to_string(),
        message: message.to_string(),
        level: pattern.level(),
    })
}

fn parse_positive(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|n| *n >= 1)
}

/// Final segment of a path written with either `/` or `\` separators.
///
/// Returns `None` when the final segment is blank, e.g. a trailing separator.
///
/// ```
/// use diag_e::e_matcher::base_name;
///
/// assert_eq!(base_name(r"C:\work\App\Program.cs"), Some("Program.cs"));
/// assert_eq!(base_name("/home/dev/app/src/main.ts"), Some("main.ts"));
/// assert_eq!(base_name("Program.cs"), Some("Program.cs"));
/// assert_eq!(base_name("  "), None);
/// assert_eq!(base_name("src/"), None);
/// ```
pub fn base_name(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}
