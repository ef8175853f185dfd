//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::format::{FormatConfig, format_diff, format_source_with_config};
use crate::frontend::script::Script;
use crate::frontend::{diagnostics, lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size accepted by the CLI (10 MB).
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// File extensions treated as Lingo scripts.
const SCRIPT_EXTENSIONS: [&str; 2] = ["ls", "lingo"];

/// Read a source file with size validation.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE`
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let display = file_path.display();
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            display,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
}

/// Lex and display tokens.
pub fn lex_file(file_path: &Path, json: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for tok in lexer::lex(&source) {
        if json {
            let line = json!({
                "kind": tok.kind.to_string(),
                "lexeme": tok.lexeme,
                "line": tok.line,
            });
            println!("{line}");
        } else {
            println!("{:?}", tok);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    match parser::parse(&source) {
        Ok(ast) => {
            println!("{:#?}", ast);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let msg = diagnostics::render_parse_error(&file_path.display().to_string(), &source, &err);
            Err(CliError::failure(msg.trim_end()))
        }
    }
}

/// List handlers with their arguments and declared globals.
pub fn list_handlers(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let name = file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let script = Script::new(name, source);
    let file_name = file_path.display().to_string();

    match script.declarations() {
        Ok(declarations) => {
            if !declarations.globals.is_empty() {
                println!("globals: {}", declarations.globals.join(", "));
            }
            if !declarations.properties.is_empty() {
                println!("properties: {}", declarations.properties.join(", "));
            }
        }
        Err(err) => tracing::debug!(line = err.line(), "script-level declarations unavailable"),
    }

    let mut failed = false;
    for handler in script.handlers() {
        let globals = match handler.globals() {
            Ok(globals) => globals.join(", "),
            Err(err) => {
                let msg = diagnostics::render_parse_error(&file_name, script.source(), &err);
                eprintln!("{}", msg.trim_end());
                failed = true;
                continue;
            }
        };
        println!(
            "{:>5}  {}({})  globals: [{}]",
            handler.first_line(),
            handler.name(),
            handler.arguments().join(", "),
            globals
        );
    }

    if failed {
        return Err(CliError::new("", ExitCode::FAILURE));
    }
    Ok(ExitCode::SUCCESS)
}

/// Format Lingo source files.
pub fn format_files(path: &Path, config: &FormatConfig, check_mode: bool, diff_mode: bool) -> CliResult<ExitCode> {
    let files = collect_script_files(path);

    if files.is_empty() {
        return Err(CliError::failure("No .ls or .lingo files found"));
    }

    let mut needs_formatting = false;
    let mut formatted_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match fs::read_to_string(file_path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %file_path.display(), error = %e, "skipping unreadable file");
                eprintln!("Error reading {}: {}", file_path.display(), e);
                error_count += 1;
                continue;
            }
        };

        match format_source_with_config(&source, config) {
            Ok(formatted) => {
                let changed = source != formatted;

                if diff_mode && changed {
                    println!("--- {}", file_path.display());
                    if let Ok(Some(diff)) = format_diff(&source, config) {
                        print!("{}", diff);
                    }
                    println!();
                }

                if check_mode {
                    if changed {
                        println!("Would reformat: {}", file_path.display());
                        needs_formatting = true;
                    }
                } else if diff_mode {
                    if changed {
                        needs_formatting = true;
                    }
                } else if changed {
                    if let Err(e) = fs::write(file_path, &formatted) {
                        eprintln!("Error writing {}: {}", file_path.display(), e);
                        error_count += 1;
                    } else {
                        println!("Formatted: {}", file_path.display());
                        formatted_count += 1;
                    }
                }
            }
            Err(err) => {
                tracing::warn!(path = %file_path.display(), line = err.line(), "skipping file that does not parse");
                let msg = diagnostics::render_parse_error(&file_path.display().to_string(), &source, &err);
                eprintln!("{}", msg.trim_end());
                error_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if needs_formatting {
            let msg = if diff_mode {
                "need formatting"
            } else {
                "would be reformatted"
            };
            return Err(CliError::failure(format!("\n{} file(s) {}", files.len(), msg)));
        } else {
            println!("✓ {} file(s) already formatted", files.len());
        }
    } else {
        println!("\n✓ {} file(s) formatted, {} error(s)", formatted_count, error_count);
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

fn is_script_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

/// Collect script files under `path` (recursively), skipping hidden and build directories.
fn collect_script_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        if is_script_file(path) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                let entry_path = entry.path();
                if entry_path.is_dir() {
                    let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                    if !name.starts_with('.') && name != "target" {
                        files.extend(collect_script_files(&entry_path));
                    }
                } else if is_script_file(&entry_path) {
                    files.push(entry_path);
                }
            }
        }
    }

    files.sort();
    files
}
