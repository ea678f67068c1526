mod balance;
mod result;

pub use balance::BraceScanner;
pub use result::{CheckOutcome, CheckResult};

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{BraceGuardError, Result};

/// Checks brace balance for files on disk.
///
/// Each file is read fully into memory before scanning. A nonexistent path
/// is a reportable outcome (`CheckResult::Missing`); any other read failure
/// propagates as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceChecker {
    scanner: BraceScanner,
}

impl BraceChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scanner: BraceScanner,
        }
    }

    /// Check one file path and produce its result.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read (permissions,
    /// invalid encoding).
    pub fn check_path(&self, path: &Path) -> Result<CheckResult> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(CheckResult::Missing {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(BraceGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let outcome = self.scanner.scan(&source);
        Ok(CheckResult::from_outcome(path.to_path_buf(), outcome))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
