#![allow(dead_code)]
use std::fs;
use std::io::Result as IoResult;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// A captured build log living in a temporary directory.
pub struct TestLog {
    /// The temporary directory. When this is dropped, the directory and its contents are removed.
    pub temp_dir: TempDir,
    /// Full path of the log file.
    pub path: PathBuf,
}

impl TestLog {
    /// Write `contents` to `file_name` inside a fresh temporary directory.
    pub fn new(file_name: &str, contents: &[u8]) -> IoResult<Self> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join(file_name);
        fs::write(&path, contents)?;
        Ok(TestLog { temp_dir, path })
    }

    /// The directory holding the log, usable as a working directory.
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A `dotnet build` log with two errors in `A.cs` and one in `B.cs`,
/// interleaved A, B, A, surrounded by the usual msbuild chatter.
pub const INTERLEAVED_LOG: &str = r"MSBuild version 17.8.3+195e7f5a3 for .NET
  Determining projects to restore...
  All projects are up-to-date for restore.
C:\src\App\Services\A.cs(12,9): error CS0103: The name 'foo' does not exist in the current context [C:\src\App\App.csproj]
C:\src\App\Views\B.cs(3,1): error CS1002: ; expected [C:\src\App\App.csproj]
C:\src\App\Services\A.cs(40,17): warning CS0168: The variable 'ex' is declared but never used [C:\src\App\App.csproj]
C:\src\App\Services\A.cs(7,5): error CS0246: The type or namespace name 'Widget' could not be found (are you missing a using directive or an assembly reference?) [C:\src\App\App.csproj]

Build FAILED.
";

/// A log that built cleanly.
pub const CLEAN_LOG: &str = "  Restored C:\\src\\App\\App.csproj (in 120 ms).\n  App -> C:\\src\\App\\bin\\Debug\\net8.0\\App.dll\n\nBuild succeeded.\n    0 Warning(s)\n    0 Error(s)\n";

/// Build a log with `count` errors spread round-robin over `files` source files.
pub fn generated_log(count: usize, files: usize) -> String {
    let mut log = String::new();
    for i in 0..count {
        log.push_str(&format!(
            "src/F{}.cs({},1): error CS{:04}: generated {} [Gen.csproj]\n",
            i % files,
            i + 1,
            i,
            i
        ));
        log.push_str("  noise line\n");
    }
    log
}
