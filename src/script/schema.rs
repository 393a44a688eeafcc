//! Raw serde mirror of the script data file.
//!
//! These types carry no invariants beyond what serde enforces (`rank` is
//! `u32`, so negative ranks are rejected at deserialization). Everything else
//! is validated in `compile.rs`.

use serde::Deserialize;
use std::collections::BTreeMap;

// BTreeMap keeps compilation order (and therefore rule/class ids) stable
// across runs regardless of document key order.

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawScript {
    /// Bound of the memory queue. Oldest entries are dropped on overflow.
    #[serde(default = "default_memory_capacity")]
    pub memory_capacity: usize,
    /// Canonical keyword -> surface forms treated as that keyword.
    #[serde(default)]
    pub synonyms: BTreeMap<String, Vec<String>>,
    /// Class name -> canonical member tokens, referenced as `@name` in
    /// decomposition patterns.
    #[serde(default)]
    pub classes: BTreeMap<String, Vec<String>>,
    /// Token -> swapped token, applied to captured text before substitution.
    #[serde(default)]
    pub reflections: BTreeMap<String, String>,
    /// Rotating fallback replies. Must be non-empty.
    pub defaults: Vec<String>,
    pub keywords: Vec<RawKeyword>,
}

fn default_memory_capacity() -> usize {
    4
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawKeyword {
    pub word: String,
    #[serde(default)]
    pub rank: u32,
    pub decompositions: Vec<RawDecomposition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDecomposition {
    /// Whitespace-separated pattern: `*` is a wildcard, `@name` a class
    /// reference, anything else a literal token.
    pub pattern: String,
    pub reassemblies: Vec<RawReassembly>,
}

/// A reassembly entry: a plain string replies, an object with a `defer` key
/// enqueues the formatted text into memory instead.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawReassembly {
    Literal(String),
    Defer { defer: String },
}
