//! Implementation of the `lingual check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use lingual::{LintWarning, Value, flatten, lint_template};
use miette::{IntoDiagnostic, miette};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Translation files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One lint finding, located by file and flat key.
#[derive(Debug, Serialize)]
struct Finding {
    file: String,
    key: String,
    warning: String,
    suggestions: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut findings: Vec<Finding> = Vec::new();

    for file in &args.files {
        let content = read_to_string(file)
            .map_err(|e| miette!("cannot read {}: {}", file.display(), e))?;
        let tree: Value = serde_json::from_str(&content)
            .map_err(|e| miette!("{}: invalid JSON: {}", file.display(), e))?;

        let flat = flatten(&tree);
        let mut keys: Vec<&String> = flat.keys().collect();
        keys.sort();

        for key in keys {
            for warning in lint_template(&flat[key.as_str()]) {
                let suggestions = match &warning {
                    LintWarning::UnknownFunction { suggestions, .. } => suggestions.clone(),
                    _ => Vec::new(),
                };
                findings.push(Finding {
                    file: file.display().to_string(),
                    key: (*key).clone(),
                    warning: warning.to_string(),
                    suggestions,
                });
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&findings).into_diagnostic()?
        );
    } else if findings.is_empty() {
        println!("{}", "no problems found".green());
    } else {
        for finding in &findings {
            println!(
                "{}: {}: {}",
                finding.file,
                finding.key.yellow(),
                finding.warning
            );
            if !finding.suggestions.is_empty() {
                println!("  did you mean: {}", finding.suggestions.join(", "));
            }
        }
        println!("\n{} warning(s)", findings.len());
    }

    if findings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
