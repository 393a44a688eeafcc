//! The per-conversation responder.
//!
//! `Responder` owns every piece of mutable engine state: the rotation cursor
//! of each decomposition, the memory queue, and the default-reply cursor. The
//! compiled script is shared read-only behind an `Arc`, so a multi-session
//! deployment clones the `Arc` into one `Responder` per conversation and
//! needs no locking.
//!
//! `respond` is total: every input, including empty or punctuation-only
//! text, resolves to a non-empty reply through the keyword, memory, or
//! default path.

use super::keyword_scan;
use super::matcher::{self, Captures};
use super::memory::MemoryQueue;
use super::normalize;
use super::reflect;
use crate::api::{ReplyOutcome, ReplyPath, ReplyTrace};
use crate::{Reassembly, Script, Segment, Template};
use std::sync::Arc;
use std::time::Instant;

/// A stateful conversation over a shared [`Script`].
///
/// # Example
/// ```
/// use doctor::Responder;
///
/// let mut responder = Responder::builtin();
/// let reply = responder.respond("my mother is strict");
/// assert_eq!(reply, "Tell me more about your family.");
/// ```
#[derive(Debug)]
pub struct Responder {
    script: Arc<Script>,
    /// Next-reassembly cursor per `[rule][decomposition]`.
    cursors: Vec<Vec<usize>>,
    memory: MemoryQueue,
    default_cursor: usize,
}

impl Responder {
    /// Create a responder over a shared compiled script.
    pub fn new(script: Arc<Script>) -> Self {
        let cursors = script.rules.iter().map(|r| vec![0; r.decompositions.len()]).collect();
        let memory = MemoryQueue::new(script.memory_capacity);
        Responder { script, cursors, memory, default_cursor: 0 }
    }

    /// Create a responder over the embedded default script.
    pub fn builtin() -> Self {
        Self::new(Script::builtin())
    }

    /// The script this responder runs.
    pub fn script(&self) -> &Arc<Script> {
        &self.script
    }

    /// Produce a reply for `input`.
    pub fn respond(&mut self, input: &str) -> String {
        self.respond_verbose(input).reply
    }

    /// Produce a reply together with a trace of the path taken.
    pub fn respond_verbose(&mut self, input: &str) -> ReplyOutcome {
        let start = Instant::now();
        let script = Arc::clone(&self.script);
        let tokens = normalize::tokenize(input);

        let Some(hit) = keyword_scan::select(&script, &tokens) else {
            return self.fallback(false, start);
        };

        let rule = &script.rules[hit.rule];
        for (di, decomposition) in rule.decompositions.iter().enumerate() {
            let Some(captures) = matcher::match_pattern(&script, &decomposition.pattern, &tokens) else {
                continue;
            };
            if std::env::var_os("DOCTOR_DEBUG_RULES").is_some() {
                eprintln!(
                    "[decomposition] keyword=\"{}\" index={} captures={:?}",
                    rule.word, di, captures
                );
            }

            // First matching decomposition wins; rotate through its
            // reassemblies, feeding memory on defer directives.
            let count = decomposition.reassemblies.len();
            let mut deferred = false;
            for _ in 0..count {
                let index = self.cursors[hit.rule][di];
                self.cursors[hit.rule][di] = (index + 1) % count;
                match &decomposition.reassemblies[index] {
                    Reassembly::Literal(template) => {
                        let reply = render(&script, template, &captures);
                        let path = ReplyPath::Keyword {
                            word: rule.word.clone(),
                            rank: hit.rank,
                            decomposition: di,
                            reassembly: index,
                            captures: captures.len(),
                        };
                        return ReplyOutcome { reply, trace: ReplyTrace { path, deferred, elapsed: start.elapsed() } };
                    }
                    Reassembly::Defer(template) => {
                        // At most one memory push per turn.
                        if !deferred {
                            self.memory.push(render(&script, template, &captures));
                            deferred = true;
                        }
                    }
                }
            }
            // A full lap found only defer directives.
            return self.fallback(deferred, start);
        }

        // The keyword matched no decomposition.
        self.fallback(false, start)
    }

    /// The no-match path: drain one memory entry (oldest first) or rotate
    /// through the default replies. A turn that just deferred skips the
    /// drain so it cannot answer itself with its own memory entry.
    fn fallback(&mut self, deferred: bool, start: Instant) -> ReplyOutcome {
        if !deferred {
            if let Some(entry) = self.memory.pop() {
                return ReplyOutcome {
                    reply: entry,
                    trace: ReplyTrace { path: ReplyPath::Memory, deferred, elapsed: start.elapsed() },
                };
            }
        }
        let index = self.default_cursor;
        self.default_cursor = (index + 1) % self.script.defaults.len();
        ReplyOutcome {
            reply: self.script.defaults[index].clone(),
            trace: ReplyTrace { path: ReplyPath::Default { index }, deferred, elapsed: start.elapsed() },
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Splice reflected captures into a template.
fn render(script: &Script, template: &Template, captures: &Captures) -> String {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Capture(index) => out.push_str(&reflect::reflect(script, &captures[*index])),
        }
    }
    out
}
