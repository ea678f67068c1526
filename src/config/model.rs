use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,

    #[serde(default)]
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultConfig {
    /// File extensions checked when a directory is scanned.
    /// Explicit file arguments bypass this filter.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directories to scan when no paths are given on the command line.
    #[serde(default)]
    pub include_paths: Vec<String>,

    /// Respect .gitignore rules when walking directories (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            include_paths: Vec::new(),
            gitignore: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
    /// Glob patterns for files and directories to skip during scans.
    #[serde(default)]
    pub patterns: Vec<String>,
}

const fn default_true() -> bool {
    true
}

/// Languages with C-style `//` and `/* */` comments and brace-delimited scopes.
fn default_extensions() -> Vec<String> {
    [
        "c", "h", "cc", "cpp", "hpp", "cs", "java", "js", "jsx", "ts", "tsx", "go", "rs", "swift",
        "kt", "scala", "m", "mm",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
