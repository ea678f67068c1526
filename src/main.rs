use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use brace_guard::checker::{BraceChecker, CheckResult};
use brace_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, ConfigAction, ConfigArgs, InitArgs};
use brace_guard::config::{Config, ConfigLoader, FileConfigLoader};
use brace_guard::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use brace_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use brace_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_UNBALANCED};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> brace_guard::Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Build the file filter for directory scans
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.default.extensions.clone());
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;

    // 3. Determine paths to check
    let paths_to_check = get_scan_paths(args, &config);

    // 4. Collect files: explicit files verbatim, directories expanded
    let use_gitignore = config.default.gitignore && !args.no_gitignore;
    let scanner = DirectoryScanner::with_gitignore(filter, use_gitignore);
    let all_files = collect_files(&paths_to_check, &scanner)?;

    // 5. Check each file in order, one at a time
    let checker = BraceChecker::new();
    let mut results = Vec::with_capacity(all_files.len());
    for file_path in &all_files {
        results.push(checker.check_path(file_path)?);
    }

    // 6. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &results, color_mode)?;

    // 7. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Determine exit code. Missing files are reported but never fatal.
    let has_unbalanced = results.iter().any(CheckResult::is_unbalanced);

    if args.warn_only || !has_unbalanced {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_UNBALANCED)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> brace_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn get_scan_paths(args: &CheckArgs, config: &Config) -> Vec<PathBuf> {
    // CLI --include overrides config include_paths
    if !args.include.is_empty() {
        return args.include.iter().map(PathBuf::from).collect();
    }

    // If CLI paths provided (other than default "."), use them
    let default_path = PathBuf::from(".");
    if args.paths.len() != 1 || args.paths[0] != default_path {
        return args.paths.clone();
    }

    // Use config include_paths if available
    if !config.default.include_paths.is_empty() {
        return config
            .default
            .include_paths
            .iter()
            .map(PathBuf::from)
            .collect();
    }

    // Default to current directory
    args.paths.clone()
}

fn collect_files<S: FileScanner>(
    paths: &[PathBuf],
    scanner: &S,
) -> brace_guard::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else {
            // Explicit file paths skip the filter; a nonexistent one is
            // reported by the checker, not dropped here.
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn format_output(
    format: OutputFormat,
    results: &[CheckResult],
    color_mode: ColorMode,
) -> brace_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> brace_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> brace_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(brace_guard::BraceGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

const fn config_template() -> &'static str {
    r#"# brace-guard configuration file

[default]
# File extensions checked when a directory is scanned.
# Explicit file arguments are always checked, whatever their extension.
extensions = ["c", "h", "cc", "cpp", "hpp", "cs", "java", "js", "jsx", "ts", "tsx", "go", "rs", "swift", "kt", "scala", "m", "mm"]

# Directories to scan when no paths are given on the command line
# include_paths = ["src", "lib"]

# Respect .gitignore rules when walking directories (default: true)
gitignore = true

# Exclude patterns (glob syntax)
[exclude]
patterns = [
    "**/target/**",
    "**/node_modules/**",
    "**/.git/**",
    "**/vendor/**",
]
"#
}

fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> brace_guard::Result<()> {
    if !config_path.exists() {
        return Err(brace_guard::BraceGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)
}

fn validate_config_semantics(config: &Config) -> brace_guard::Result<()> {
    // Validate exclude patterns are valid globs
    for pattern in &config.exclude.patterns {
        globset::Glob::new(pattern).map_err(|e| brace_guard::BraceGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    // Extensions are matched against Path::extension, which has no dot
    for ext in &config.default.extensions {
        if ext.starts_with('.') {
            return Err(brace_guard::BraceGuardError::Config(format!(
                "extensions entries must not start with '.': write \"{}\" instead of \"{ext}\"",
                ext.trim_start_matches('.')
            )));
        }
    }

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> brace_guard::Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[default]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.default.extensions);
    if !config.default.include_paths.is_empty() {
        let _ = writeln!(
            output,
            "  include_paths = {:?}",
            config.default.include_paths
        );
    }
    let _ = writeln!(output, "  gitignore = {}", config.default.gitignore);

    if !config.exclude.patterns.is_empty() {
        output.push_str("\n[exclude]\n");
        output.push_str("  patterns = [\n");
        for pattern in &config.exclude.patterns {
            let _ = writeln!(output, "    \"{pattern}\",");
        }
        output.push_str("  ]\n");
    }

    output
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
