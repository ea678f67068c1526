use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use brace_guard::checker::CheckResult;
use brace_guard::cli::CheckArgs;
use brace_guard::config::Config;
use brace_guard::output::{ColorMode, OutputFormat};
use brace_guard::scanner::{DirectoryScanner, GlobFilter};
use brace_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_UNBALANCED};

use crate::{
    collect_files, config_template, format_output, get_scan_paths, load_config,
    validate_config_semantics, write_output,
};

fn check_args(paths: &[&str]) -> CheckArgs {
    CheckArgs {
        paths: paths.iter().map(PathBuf::from).collect(),
        config: None,
        ext: None,
        exclude: Vec::new(),
        include: Vec::new(),
        no_gitignore: false,
        format: OutputFormat::Text,
        output: None,
        warn_only: false,
    }
}

fn open_scanner() -> DirectoryScanner<GlobFilter> {
    DirectoryScanner::new(GlobFilter::new(Vec::new(), &[]).unwrap())
}

#[test]
fn exit_codes_documented() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_UNBALANCED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn load_config_no_config_returns_default() {
    let config = load_config(None, true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_config_with_nonexistent_path_returns_error() {
    let result = load_config(Some(std::path::Path::new("nonexistent.toml")), false);
    assert!(result.is_err());
}

#[test]
fn get_scan_paths_cli_include_wins() {
    let mut args = check_args(&["src"]);
    args.include = vec!["lib".to_string()];

    let mut config = Config::default();
    config.default.include_paths = vec!["other".to_string()];

    assert_eq!(get_scan_paths(&args, &config), vec![PathBuf::from("lib")]);
}

#[test]
fn get_scan_paths_explicit_paths_win_over_config() {
    let args = check_args(&["src", "include"]);

    let mut config = Config::default();
    config.default.include_paths = vec!["other".to_string()];

    assert_eq!(
        get_scan_paths(&args, &config),
        vec![PathBuf::from("src"), PathBuf::from("include")]
    );
}

#[test]
fn get_scan_paths_uses_config_include_paths_on_default() {
    let args = check_args(&["."]);

    let mut config = Config::default();
    config.default.include_paths = vec!["src".to_string(), "lib".to_string()];

    assert_eq!(
        get_scan_paths(&args, &config),
        vec![PathBuf::from("src"), PathBuf::from("lib")]
    );
}

#[test]
fn get_scan_paths_defaults_to_current_dir() {
    let args = check_args(&["."]);
    let config = Config::default();

    assert_eq!(get_scan_paths(&args, &config), vec![PathBuf::from(".")]);
}

#[test]
fn collect_files_keeps_nonexistent_explicit_file() {
    // The checker reports it as missing; collection must not drop it.
    let paths = vec![PathBuf::from("no/such/file.c")];

    let files = collect_files(&paths, &open_scanner()).unwrap();

    assert_eq!(files, paths);
}

#[test]
fn collect_files_expands_directories() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.c"), "").unwrap();
    fs::write(dir.path().join("b.c"), "").unwrap();

    let files = collect_files(&[dir.path().to_path_buf()], &open_scanner()).unwrap();

    assert_eq!(files.len(), 2);
}

#[test]
fn collect_files_mixes_files_and_directories() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in_dir.c"), "").unwrap();
    let explicit = PathBuf::from("explicit.c");

    let paths = vec![explicit.clone(), dir.path().to_path_buf()];
    let files = collect_files(&paths, &open_scanner()).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0], explicit);
}

#[test]
fn format_output_text_contains_status() {
    let results = vec![CheckResult::Balanced {
        path: PathBuf::from("ok.c"),
    }];

    let output = format_output(OutputFormat::Text, &results, ColorMode::Never).unwrap();

    assert!(output.contains("Structure OK. Balanced."));
}

#[test]
fn format_output_json_parses() {
    let results = vec![CheckResult::UnclosedOpen {
        path: PathBuf::from("open.c"),
        missing: 1,
    }];

    let output = format_output(OutputFormat::Json, &results, ColorMode::Never).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["results"][0]["status"], "unclosed_open");
}

#[test]
fn write_output_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");

    write_output(Some(&path), "hello\n", false).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
}

#[test]
fn write_output_quiet_writes_nothing() {
    write_output(None, "ignored", true).unwrap();
}

#[test]
fn config_template_parses_and_validates() {
    let config: Config = toml::from_str(config_template()).unwrap();

    assert!(!config.default.extensions.is_empty());
    assert!(!config.exclude.patterns.is_empty());
    validate_config_semantics(&config).unwrap();
}

#[test]
fn validate_config_semantics_rejects_bad_glob() {
    let mut config = Config::default();
    config.exclude.patterns.push("[".to_string());

    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn validate_config_semantics_rejects_dotted_extension() {
    let mut config = Config::default();
    config.default.extensions.push(".c".to_string());

    let err = validate_config_semantics(&config).unwrap_err();

    assert!(err.to_string().contains(".c"));
}
