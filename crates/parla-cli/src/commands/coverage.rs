//! Coverage command implementation.

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{miette, Report, Result};
use parla::Catalog;
use serde::Serialize;

use crate::output::table::{format_coverage_table, LanguageCoverage};
use crate::output::CatalogDiagnostic;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language catalog (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation catalogs. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
    extra: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source = load_catalog(&args.source)?;
    let source_count = source.len();

    // Determine base directory for translation catalogs
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{}.json", lang));

        // A missing file means every key is missing
        let translation = if lang_file.exists() {
            load_catalog(&lang_file)?
        } else {
            Catalog::new()
        };

        coverage_data.push(compare_keys(lang, &source, &translation));
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
                extra: c.extra.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data)
            .map_err(|e| miette!("JSON serialization failed: {}", e))?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for key in &lang_coverage.missing {
                    println!("  - {}", key);
                }
            }
            if !lang_coverage.extra.is_empty() {
                println!("\nNot in source ({}):", lang_coverage.language);
                for key in &lang_coverage.extra {
                    println!("  - {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Compare a translation's keys against the source catalog.
fn compare_keys(lang: &str, source: &Catalog, translation: &Catalog) -> LanguageCoverage {
    let source_keys: HashSet<&str> = source.keys().collect();

    let mut missing: Vec<String> = source
        .keys()
        .filter(|key| !translation.contains_key(key))
        .map(str::to_string)
        .collect();
    missing.sort();

    let mut extra: Vec<String> = translation
        .keys()
        .filter(|key| !source_keys.contains(key))
        .map(str::to_string)
        .collect();
    extra.sort();

    LanguageCoverage {
        language: lang.to_string(),
        translated: source_keys.len() - missing.len(),
        missing,
        extra,
    }
}

/// Load a catalog, rendering JSON errors with their source location.
fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = read_to_string(path)
        .map_err(|e| miette!("Failed to read catalog {}: {}", path.display(), e))?;
    Catalog::from_json_str(&content).map_err(|e| {
        match CatalogDiagnostic::from_load_error(path, &content, &e) {
            Some(diagnostic) => Report::new(diagnostic),
            None => miette!("Failed to parse catalog {}: {}", path.display(), e),
        }
    })
}
