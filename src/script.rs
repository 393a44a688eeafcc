//! Script loading, validation, and compilation.
//!
//! A *script* is the rule database the responder runs: keyword rules with
//! their decomposition/reassembly grammars, synonym classes, the reflection
//! table, and the default replies. Loading is split into two phases:
//!
//! ```text
//! JSON document ── schema.rs ──> RawScript        (serde, untrusted shape)
//!                                   │
//!                                   │  Script::compile   (compile.rs)
//!                                   v
//!                               Script             (validated, immutable)
//! ```
//!
//! `compile` is where every configuration error is caught: placeholder
//! references are checked against their pattern's capture count, patterns
//! must be non-empty, every decomposition needs at least one reassembly, and
//! `@class` references must resolve. A malformed document never yields a
//! usable `Script`, so the respond path can assume the table is well formed.
//!
//! The compiled `Script` is shared read-only (typically behind an `Arc`)
//! across conversations; all per-conversation mutable state lives in
//! `engine::Responder`.
//!
//! `builtin.rs` embeds the default script (`assets/doctor.json`) and compiles
//! it once behind a `Lazy`.

#[path = "script/builtin.rs"]
mod builtin;
#[path = "script/compile.rs"]
mod compile;
#[path = "script/schema.rs"]
mod schema;

pub use compile::Script;
