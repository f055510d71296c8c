//! Implementation of the `parla eval` command.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use parla::{cldr_pluralizer, Catalog, Options, Replacements, Translator, Value};
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Catalog file (.json)
    #[arg(long, required = true)]
    pub catalog: PathBuf,

    /// Translation key to resolve
    #[arg(long, required = true)]
    pub key: String,

    /// Quantity used for plural selection and `{n}`
    #[arg(long, allow_hyphen_values = true)]
    pub count: Option<i64>,

    /// Replacement values in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Language for CLDR plural categories (e.g., en, ru)
    #[arg(long)]
    pub lang: Option<String>,

    /// Enable debug mode: mark fallbacks and report diagnostics
    #[arg(long)]
    pub debug: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
    pub diagnostics: Vec<String>,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Convert a command-line value, preferring integers, then floats.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let catalog = Catalog::from_json_file(&args.catalog)
        .map_err(|e| miette::miette!("Failed to load catalog: {}", e))?;

    let options = Options::builder()
        .debug(args.debug)
        .maybe_pluralize(args.lang.as_deref().map(cldr_pluralizer))
        .build();

    let translator = Translator::builder()
        .options(options)
        .catalog(catalog)
        .build();

    let replacements: Option<Replacements> = if args.params.is_empty() {
        None
    } else {
        Some(
            args.params
                .into_iter()
                .map(|(k, v)| (k, parse_value(v)))
                .collect(),
        )
    };

    let (result, diagnostics) =
        translator.resolve_with_diagnostics(&args.key, args.count, replacements.as_ref());

    if args.json {
        let output = EvalResult {
            result,
            diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        println!("{}", result);
        for diagnostic in &diagnostics {
            eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
        }
    }

    if diagnostics.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
