use std::env;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Log file looked for in the working directory when no path is given.
pub const DEFAULT_LOG_NAME: &str = "build_errors.txt";

/// Log file looked for in the temp directory as a last resort.
pub const TEMP_LOG_NAME: &str = "build_output.txt";

/// Where the build output comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    File(PathBuf),
    Stdin,
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::File(path) => write!(f, "{}", path.display()),
            LogSource::Stdin => f.write_str("<stdin>"),
        }
    }
}

impl LogSource {
    /// Open the source for line-oriented reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            LogSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open log {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            LogSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Candidate log paths in lookup order: explicit path, `build_errors.txt`
/// in `cwd`, then `build_output.txt` in the temp directory.
pub fn candidates(explicit: Option<&Path>, cwd: &Path) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }
    vec![cwd.join(DEFAULT_LOG_NAME), temp_dir().join(TEMP_LOG_NAME)]
}

/// `$TEMP` (as set on Windows), then `$TMPDIR`, then the platform default.
fn temp_dir() -> PathBuf {
    ["TEMP", "TMPDIR"]
        .iter()
        .filter_map(|var| env::var_os(var))
        .find(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(env::temp_dir)
}

/// Resolve the build log to scan.
///
/// An explicit `-` means stdin. An explicit path has to exist; there is no
/// fallback once the caller names a file.
pub fn locate_log(explicit: Option<&Path>) -> Result<LogSource> {
    if explicit == Some(Path::new("-")) {
        return Ok(LogSource::Stdin);
    }
    let cwd = env::current_dir().context("cannot determine current directory")?;
    locate_log_in(explicit, &cwd)
}

pub fn locate_log_in(explicit: Option<&Path>, cwd: &Path) -> Result<LogSource> {
    let searched = candidates(explicit, cwd);
    for candidate in &searched {
        log::debug!("checking {}", candidate.display());
        if candidate.is_file() {
            return Ok(LogSource::File(candidate.clone()));
        }
    }
    bail!(
        "no build log found (looked for: {})",
        searched
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("my.log");
        fs::write(&explicit, "").unwrap();
        fs::write(dir.path().join(DEFAULT_LOG_NAME), "").unwrap();

        let source = locate_log_in(Some(&explicit), dir.path()).unwrap();
        assert_eq!(source, LogSource::File(explicit));
    }

    #[test]
    fn test_missing_explicit_path_does_not_fall_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_LOG_NAME), "").unwrap();
        let missing = dir.path().join("missing.log");

        let err = locate_log_in(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("missing.log"));
    }

    #[test]
    fn test_default_name_in_working_directory() {
        let dir = TempDir::new().unwrap();
        let default = dir.path().join(DEFAULT_LOG_NAME);
        fs::write(&default, "").unwrap();

        assert_eq!(
            locate_log_in(None, dir.path()).unwrap(),
            LogSource::File(default)
        );
    }

    #[test]
    fn test_candidates_without_explicit_path() {
        let dir = TempDir::new().unwrap();
        let searched = candidates(None, dir.path());
        assert_eq!(searched.len(), 2);
        assert_eq!(searched[0], dir.path().join(DEFAULT_LOG_NAME));
        assert!(searched[1].ends_with(TEMP_LOG_NAME));
    }

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(locate_log(Some(Path::new("-"))).unwrap(), LogSource::Stdin);
        assert_eq!(LogSource::Stdin.to_string(), "<stdin>");
    }
}
