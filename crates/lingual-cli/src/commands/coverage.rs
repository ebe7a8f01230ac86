//! Coverage command implementation.

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use lingual::{Value, flatten};
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

use crate::output::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language file (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
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
}

/// Load a translation file and return its flat key set.
fn flat_keys(path: &Path) -> Result<HashSet<String>> {
    let content = read_to_string(path)
        .map_err(|e| miette!("failed to read translation file {:?}: {}", path, e))?;
    let tree: Value = serde_json::from_str(&content)
        .map_err(|e| miette!("{}: invalid JSON: {}", path.display(), e))?;
    Ok(flatten(&tree).into_keys().collect())
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_keys = flat_keys(&args.source)?;
    let source_count = source_keys.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    // Collect coverage data for each language
    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{}.json", lang));

        let translated_keys = if lang_file.exists() {
            flat_keys(&lang_file)?
        } else {
            // File doesn't exist - every key is missing
            HashSet::new()
        };

        let mut missing: Vec<String> = source_keys
            .iter()
            .filter(|key| !translated_keys.contains(*key))
            .cloned()
            .collect();
        missing.sort();

        let translated = source_count - missing.len();

        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated,
            missing,
        });
    }

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    // Output results
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        // Print ASCII table
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        // Print missing keys per language
        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for key in &lang_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
