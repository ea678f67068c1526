use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{BraceGuardError, Result};

/// Decides whether a discovered file should be checked.
pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Extension allow-list combined with glob-based excludes.
///
/// An empty extension list matches every file. Explicit file arguments on the
/// command line never pass through a filter; this only applies to files found
/// by walking a directory.
#[derive(Debug)]
pub struct GlobFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with the given extensions and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is not a valid glob.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| BraceGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let excludes = builder.build().map_err(|e| BraceGuardError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            extensions,
            excludes,
        })
    }

    fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.matches_extension(path) && !self.excludes.is_match(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
