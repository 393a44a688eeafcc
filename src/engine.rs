//! The responder engine.
//!
//! This module is the operational core of the crate. Responding to an input
//! is a fixed pipeline over in-memory structures; no step blocks, sleeps, or
//! performs I/O:
//!
//! ```text
//! input ── normalize ──> tokens                (normalize.rs)
//!              │
//!              v
//!        keyword scan ──> best keyword rule    (keyword_scan.rs)
//!              │             rank desc, leftmost tie-break
//!              v
//!        decomposition match ──> captures      (matcher.rs)
//!              │             first matching pattern wins
//!              v
//!        reassembly rotation + reflection      (responder.rs, reflect.rs)
//!              │             defer directives feed the memory queue
//!              v
//!            reply   (memory pop / default rotation when nothing matched)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: lowercasing, contraction expansion, punctuation
//!   stripping, tokenization.
//! - `keyword_scan.rs`: collects keyword occurrences (through synonym
//!   resolution) and selects the winning rule.
//! - `matcher.rs`: aligns decomposition patterns against the token sequence
//!   and extracts wildcard/class captures.
//! - `reflect.rs`: first/second person swapping over captured tokens.
//! - `memory.rs`: the bounded FIFO of deferred replies.
//! - `responder.rs`: per-conversation state (rotation cursors, memory,
//!   default-reply cursor) and the `respond` orchestration.
//!
//! ## State model
//!
//! The compiled [`crate::Script`] is immutable and shared; a [`Responder`]
//! owns every piece of mutable state and takes `&mut self`, so one instance
//! per conversation is the whole concurrency story.
//!
//! ## Debugging
//!
//! Set `DOCTOR_DEBUG_RULES=1` to print keyword-scan and match traces.

#[path = "engine/keyword_scan.rs"]
mod keyword_scan;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/memory.rs"]
mod memory;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/reflect.rs"]
mod reflect;
#[path = "engine/responder.rs"]
mod responder;

pub use responder::Responder;
