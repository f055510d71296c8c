//! Implementation of the `parla check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::Report;
use owo_colors::OwoColorize;
use parla::{lint_catalog, Catalog};
use serde::Serialize;

use crate::output::CatalogDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any lint warning is found
    #[arg(long)]
    pub deny_warnings: bool,
}

/// JSON output for a single checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    entries: usize,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                reports.push(FileReport {
                    file: path.display().to_string(),
                    entries: 0,
                    error: Some(format!("cannot read file: {e}")),
                    warnings: Vec::new(),
                });
                continue;
            }
        };

        let report = match Catalog::from_json_str(&content) {
            Ok(catalog) => FileReport {
                file: path.display().to_string(),
                entries: catalog.len(),
                error: None,
                warnings: lint_catalog(&catalog)
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            },
            Err(e) => {
                if !args.json {
                    if let Some(diagnostic) = CatalogDiagnostic::from_load_error(path, &content, &e) {
                        eprintln!("{:?}", Report::new(diagnostic));
                    }
                }
                FileReport {
                    file: path.display().to_string(),
                    entries: 0,
                    error: Some(e.to_string()),
                    warnings: Vec::new(),
                }
            }
        };
        reports.push(report);
    }

    let has_errors = reports.iter().any(|r| r.error.is_some());
    let has_warnings = reports.iter().any(|r| !r.warnings.is_empty());

    if args.json {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if has_errors || (args.deny_warnings && has_warnings) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn print_report(report: &FileReport) {
    match &report.error {
        Some(error) => println!("{} {}: {}", "error".red().bold(), report.file, error),
        None if report.warnings.is_empty() => println!(
            "{} {} ({} entries)",
            "ok".green().bold(),
            report.file,
            report.entries
        ),
        None => {
            println!(
                "{} {} ({} entries, {} warning(s))",
                "warn".yellow().bold(),
                report.file,
                report.entries,
                report.warnings.len()
            );
            for warning in &report.warnings {
                println!("  - {}", warning);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn check(files: &[&Path], deny_warnings: bool) -> i32 {
        run_check(CheckArgs {
            files: files.iter().map(|p| p.to_path_buf()).collect(),
            json: true,
            deny_warnings,
        })
        .unwrap()
    }

    #[test]
    fn clean_catalog_passes() {
        let dir = TempDir::new().unwrap();
        let en = write(&dir, "en.json", r#"{ "items": { "1": "one item", "n": "{n} items" } }"#);
        assert_eq!(check(&[&en], true), exitcode::OK);
    }

    #[test]
    fn load_errors_fail() {
        let dir = TempDir::new().unwrap();
        let en = write(&dir, "en.json", r#"{ "a": "A" }"#);
        let broken = write(&dir, "de.json", "{ \"a\": ");
        assert_eq!(check(&[&en, &broken], false), exitcode::DATAERR);
    }

    #[test]
    fn unreadable_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(check(&[&missing], false), exitcode::DATAERR);
    }

    #[test]
    fn warnings_fail_only_when_denied() {
        let dir = TempDir::new().unwrap();
        let en = write(&dir, "en.json", r#"{ "items": { "1": "one item" }, "count": 3 }"#);
        assert_eq!(check(&[&en], false), exitcode::OK);
        assert_eq!(check(&[&en], true), exitcode::DATAERR);
    }
}
