use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    results: Vec<FileResult>,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    missing_braces: Option<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let output = JsonOutput {
            results: results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> FileResult {
    let path = result.path().display().to_string();

    match result {
        CheckResult::Balanced { .. } => FileResult {
            path,
            status: "balanced".to_string(),
            line: None,
            missing_braces: None,
        },
        CheckResult::ExtraneousClose { line, .. } => FileResult {
            path,
            status: "extraneous_close".to_string(),
            line: Some(*line),
            missing_braces: None,
        },
        CheckResult::UnclosedOpen { missing, .. } => FileResult {
            path,
            status: "unclosed_open".to_string(),
            line: None,
            missing_braces: Some(*missing),
        },
        CheckResult::Missing { .. } => FileResult {
            path,
            status: "file_not_found".to_string(),
            line: None,
            missing_braces: None,
        },
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
