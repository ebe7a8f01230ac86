//! Language store and translation entry point.

use std::collections::{HashMap, HashSet};

use bon::Builder;

use crate::flatten::flatten;
use crate::interpreter::render;
use crate::types::Value;

/// Sentinel returned by the raw template lookup when the fallback chain is
/// exhausted.
pub const NOT_FOUND: &str = "__NOT_FOUND__";

/// The translation store and entry point.
///
/// A `Translator` owns one flattened translation map per language code plus
/// the fallback configuration; it is constructed once by the host process
/// and shared by reference into resolve/register call sites. There is no
/// global instance.
///
/// Resolution favors graceful degradation: missing keys, missing languages,
/// and malformed DSL syntax all produce defined marker strings or fallback
/// lookups, never an error.
///
/// # Example
///
/// ```
/// use lingual::{Translator, options};
///
/// let mut translator = Translator::builder().build();
/// let tree = serde_json::from_str(r#"{"common": {"test": "Hello {{name}}"}}"#).unwrap();
/// translator.register("en", &tree);
///
/// let text = translator.resolve("common.test", &options! { "name" => "John Doe" });
/// assert_eq!(text, "Hello John Doe");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Language used when the requested language is absent or unsupported.
    #[builder(default = "en".to_string())]
    fallback_language: String,

    /// Key consulted when the requested key is absent from a language.
    #[builder(default = "error.unknown".to_string())]
    fallback_key: String,

    /// Flat translation map per language code.
    #[builder(skip)]
    languages: HashMap<String, HashMap<String, String>>,

    /// Language codes that have received a post-initialization merge.
    /// Grows monotonically.
    #[builder(skip)]
    hydrated: HashSet<String>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builder().build()
    }
}

impl Translator {
    /// Create a new Translator with default settings (English fallback,
    /// `error.unknown` fallback key).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The configured fallback language code.
    pub fn fallback_language(&self) -> &str {
        &self.fallback_language
    }

    /// The configured fallback key.
    pub fn fallback_key(&self) -> &str {
        &self.fallback_key
    }

    // =========================================================================
    // Language Registration
    // =========================================================================

    /// Register a language: flatten `tree` and **replace** any previously
    /// stored map for `code`. Returns the number of flat entries stored.
    pub fn register(&mut self, code: &str, tree: &Value) -> usize {
        let flat = flatten(tree);
        let count = flat.len();
        self.languages.insert(code.to_string(), flat);
        count
    }

    /// Hydrate a language: flatten `tree` and shallow-merge it into the
    /// existing map for `code` (new keys win on conflict), then mark the
    /// language hydrated. Returns the merged map's entry count.
    pub fn hydrate(&mut self, code: &str, tree: &Value) -> usize {
        let entry = self.languages.entry(code.to_string()).or_default();
        entry.extend(flatten(tree));
        let count = entry.len();
        self.hydrated.insert(code.to_string());
        count
    }

    /// Whether a language has a non-empty translation map.
    pub fn is_supported(&self, code: &str) -> bool {
        self.languages.get(code).is_some_and(|map| !map.is_empty())
    }

    /// Whether a language has received a hydration merge.
    pub fn is_hydrated(&self, code: &str) -> bool {
        self.hydrated.contains(code)
    }

    /// All supported language codes, sorted.
    pub fn supported_languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .languages
            .iter()
            .filter(|(_, map)| !map.is_empty())
            .map(|(code, _)| code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Raw template lookup through the fallback chain, first hit wins:
    /// (language, key), (language, fallback key), (fallback language, key),
    /// (fallback language, fallback key), then the `__NOT_FOUND__` sentinel.
    ///
    /// An unsupported `language` silently falls back before the chain runs.
    pub fn template(&self, language: &str, key: &str) -> &str {
        let language = if self.is_supported(language) {
            language
        } else {
            &self.fallback_language
        };

        self.entry(language, key)
            .or_else(|| self.entry(language, &self.fallback_key))
            .or_else(|| self.entry(&self.fallback_language, key))
            .or_else(|| self.entry(&self.fallback_language, &self.fallback_key))
            .unwrap_or(NOT_FOUND)
    }

    /// Resolve a translation key to a final rendered string.
    ///
    /// The effective language is `options["lang"]` when supplied and
    /// supported, else the fallback language. The raw template runs through
    /// conditional resolution and then interpolation against `options`,
    /// with `lang` defaulted to the effective language if absent from the
    /// bag. Marker strings in the output are valid results, not failures.
    pub fn resolve(&self, key: &str, options: &HashMap<String, Value>) -> String {
        let requested = options.get("lang").map(ToString::to_string);
        let language = match requested {
            Some(code) if self.is_supported(&code) => code,
            _ => self.fallback_language.clone(),
        };

        let template = self.template(&language, key).to_string();

        let mut options = options.clone();
        options
            .entry("lang".to_string())
            .or_insert_with(|| Value::String(language));

        render(&template, &options)
    }

    /// One (language, key) probe.
    fn entry(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|map| map.get(key))
            .map(String::as_str)
    }
}
