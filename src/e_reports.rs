use anyhow::Result;

use crate::e_aggregator::DiagnosticSummary;

/// Printed instead of a report when nothing was found.
pub const CLEAN_MESSAGE: &str = "no diagnostics found";

/// Width of the separator under the header line.
pub const SEPARATOR_WIDTH: usize = 50;

/// Output layouts the command line can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Color,
    Json,
}

/// Render `summary` in the requested layout.
pub fn render(summary: &DiagnosticSummary, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(summary)),
        ReportFormat::Color => Ok(render_colored(summary)),
        ReportFormat::Json => render_json(summary),
    }
}

#[derive(Clone, Copy)]
enum Part {
    Clean,
    Header,
    File,
    Code,
}

fn render_with(summary: &DiagnosticSummary, paint: impl Fn(Part, &str) -> String) -> String {
    let files = match summary {
        DiagnosticSummary::Clean => return format!("{}\n", paint(Part::Clean, CLEAN_MESSAGE)),
        DiagnosticSummary::Errors { files, .. } => files,
    };

    let header = format!(
        "ERRORS: {} in {} file(s)",
        summary.total(),
        summary.file_count()
    );
    let mut report = paint(Part::Header, &header);
    report.push('\n');
    report.push_str(&"-".repeat(SEPARATOR_WIDTH));
    report.push('\n');

    for group in files {
        report.push('\n');
        report.push_str(&paint(Part::File, &format!("{}:", group.file)));
        report.push('\n');
        for diag in &group.diagnostics {
            report.push_str(&format!(
                "  line {}: {} - {}\n",
                diag.line,
                paint(Part::Code, &diag.code),
                diag.message
            ));
        }
    }
    report
}

/// Plain text in the canonical layout.
///
/// # Example
/// ```
/// use diag_e::{e_reports::render_text, DiagnosticAggregator, DiagnosticMatcher};
///
/// let mut aggregator = DiagnosticAggregator::new();
/// aggregator.observe_line(&DiagnosticMatcher::default(), "src/A.cs(4,2): error CS1002: ; expected [App]");
///
/// let text = render_text(&aggregator.finalize());
/// assert!(text.starts_with("ERRORS: 1 in 1 file(s)\n"));
/// assert!(text.contains("\nA.cs:\n  line 4: CS1002 - ; expected\n"));
///
/// assert_eq!(render_text(&DiagnosticAggregator::new().finalize()), "no diagnostics found\n");
/// ```
pub fn render_text(summary: &DiagnosticSummary) -> String {
    render_with(summary, |_, s| s.to_string())
}

/// Same layout as [`render_text`], painted for a terminal.
#[cfg(feature = "color")]
pub fn render_colored(summary: &DiagnosticSummary) -> String {
    use nu_ansi_term::{Color, Style};

    render_with(summary, |part, s| match part {
        Part::Clean => Color::Green.paint(s).to_string(),
        Part::Header => Color::Red.bold().paint(s).to_string(),
        Part::File => Style::new().bold().paint(s).to_string(),
        Part::Code => Color::Yellow.paint(s).to_string(),
    })
}

#[cfg(not(feature = "color"))]
pub fn render_colored(summary: &DiagnosticSummary) -> String {
    render_text(summary)
}

#[cfg(feature = "uses_serde")]
#[derive(serde::Serialize)]
struct JsonReport<'a> {
    clean: bool,
    total: usize,
    file_count: usize,
    files: &'a [crate::e_aggregator::FileDiagnostics],
}

/// Machine-readable summary.
#[cfg(feature = "uses_serde")]
pub fn render_json(summary: &DiagnosticSummary) -> Result<String> {
    let report = JsonReport {
        clean: summary.is_clean(),
        total: summary.total(),
        file_count: summary.file_count(),
        files: summary.files(),
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

#[cfg(not(feature = "uses_serde"))]
pub fn render_json(_summary: &DiagnosticSummary) -> Result<String> {
    anyhow::bail!("JSON output requires the `uses_serde` feature")
}
