//! Implementation of the `lingual eval` command.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use lingual::{Translator, Value};
use miette::IntoDiagnostic;
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Translation key to resolve (e.g. common.greeting)
    pub key: String,

    /// Language code to resolve under
    #[arg(long)]
    pub lang: Option<String>,

    /// Translation files (.json); each file's stem is its language code
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Fallback language code
    #[arg(long, default_value = "en")]
    pub fallback: String,

    /// Options in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Parse a parameter value: integer, float, boolean, then string.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::Int(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::Float(f)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::Bool(b)
    } else {
        Value::String(raw)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut translator = Translator::builder()
        .fallback_language(args.fallback.as_str())
        .build();

    for file in &args.files {
        let code = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| miette::miette!("cannot derive a language code from {:?}", file))?;
        let content = read_to_string(file)
            .map_err(|e| miette::miette!("cannot read {}: {}", file.display(), e))?;
        let tree: Value = serde_json::from_str(&content)
            .map_err(|e| miette::miette!("{}: invalid JSON: {}", file.display(), e))?;
        translator.register(code, &tree);
    }

    let mut options: HashMap<String, Value> = args
        .params
        .into_iter()
        .map(|(name, raw)| (name, parse_value(raw)))
        .collect();
    if let Some(lang) = args.lang {
        options.insert("lang".to_string(), Value::String(lang));
    }

    let result = translator.resolve(&args.key, &options);

    if args.json {
        let output = EvalResult { result };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!("{}", result);
    }

    Ok(exitcode::OK)
}
