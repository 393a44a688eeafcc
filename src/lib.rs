extern crate self as doctor;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod script;

pub use api::{ReplyOutcome, ReplyPath, ReplyTrace};
pub use engine::Responder;
pub use error::ScriptError;
pub use script::Script;

// --- Internal script data model ---------------------------------------------
//
// These are the *compiled* forms: `script/schema.rs` holds the raw serde
// mirror of the data file, and `script/compile.rs` turns that into the types
// below after validation. Everything here is immutable once a `Script` is
// built; the only mutable state in the crate lives in `engine::Responder`.

/// Identifier of a keyword rule (index into `Script::rules`).
pub(crate) type RuleId = usize;

/// Identifier of a synonym class (index into `Script::classes`).
pub(crate) type ClassId = usize;

/// One element of a decomposition pattern.
///
/// `Wild` and `Class` items produce captures (numbered left to right across
/// the pattern); `Literal` items only constrain the alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternItem {
    /// A literal token, compared against the canonical (synonym-resolved)
    /// form of the input token.
    Literal(String),
    /// A synonym-class reference (`@family` in the data file). Matches any
    /// token whose canonical form belongs to the class, and captures it.
    Class(ClassId),
    /// Absorbs zero or more tokens and captures them.
    Wild,
}

/// One segment of a compiled reassembly template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Text(String),
    /// 0-based capture index, validated against the owning pattern at
    /// compile time.
    Capture(usize),
}

/// A reassembly template, parsed from its `(N)` placeholder form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    pub segments: Vec<Segment>,
}

/// A reassembly: either a reply template or a defer-to-memory directive.
///
/// A defer carries its own template used to format the enqueued memory entry
/// ("Earlier you said your (2).").
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reassembly {
    Literal(Template),
    Defer(Template),
}

/// A decomposition: a pattern plus its ordered reassembly variants.
///
/// The rotation cursor the engine advances over `reassemblies` is *not*
/// stored here; it lives in `Responder` so that the compiled script can be
/// shared read-only across conversations.
#[derive(Debug, Clone)]
pub(crate) struct Decomposition {
    pub pattern: Vec<PatternItem>,
    /// Number of capturing items (`Wild` + `Class`) in `pattern`.
    pub captures: usize,
    pub reassemblies: Vec<Reassembly>,
}

/// A keyword rule: the trigger word, its rank, and its decompositions.
#[derive(Debug, Clone)]
pub(crate) struct KeywordRule {
    pub word: String,
    pub rank: u32,
    pub decompositions: Vec<Decomposition>,
}

/// A synonym class referenced by `@name` pattern items.
#[derive(Debug, Clone)]
pub(crate) struct SynonymClass {
    pub name: String,
    /// Canonical member tokens. Membership is tested on the canonical form
    /// of the input token, so surface synonyms resolve into the class too.
    pub members: Vec<String>,
}
