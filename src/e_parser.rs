use std::io::{self, BufRead};

use crate::e_aggregator::DiagnosticAggregator;
use crate::e_matcher::DiagnosticMatcher;

/// Streams raw build output from `reader` into `aggregator`, one line at a
/// time.
///
/// Lines are decoded as UTF-8 with invalid sequences replaced, so a log with
/// stray bytes (e.g. a console code page) is still scanned end to end. Only
/// genuine read errors are returned. The result is the number of lines read.
///
/// # Example
/// ```
/// use diag_e::{e_parser::scan_reader, DiagnosticAggregator, DiagnosticMatcher};
///
/// let raw: &[u8] = b"A.cs(1,1): error CS0001: caf\xe9 [P]\r\nBuild FAILED.\r\n";
/// let mut aggregator = DiagnosticAggregator::new();
/// let lines = scan_reader(raw, &DiagnosticMatcher::default(), &mut aggregator).unwrap();
/// assert_eq!(lines, 2);
/// assert_eq!(aggregator.total(), 1);
/// ```
pub fn scan_reader<R: BufRead>(
    mut reader: R,
    matcher: &DiagnosticMatcher,
    aggregator: &mut DiagnosticAggregator,
) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut lines = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        let line = String::from_utf8_lossy(&buf);
        if !aggregator.observe_line(matcher, &line) {
            log::trace!("skipped line {}", lines);
        }
    }
    log::debug!(
        "scanned {} line(s), {} diagnostic(s) recognized",
        lines,
        aggregator.total()
    );
    Ok(lines)
}
