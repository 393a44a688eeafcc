//! Public reply types.
//!
//! The crate's surface is intentionally small: build a [`crate::Script`]
//! (embedded or from a file), wrap it in a [`crate::Responder`] per
//! conversation, and call `respond`. `respond_verbose` returns the same reply
//! plus a [`ReplyTrace`] for rule debugging and profiling.

use std::time::Duration;

/// A reply together with the trace of how it was produced.
#[derive(Debug, Clone)]
pub struct ReplyOutcome {
    /// The reply text. Never empty.
    pub reply: String,
    pub trace: ReplyTrace,
}

/// Debug/profiling details for one `respond` call.
#[derive(Debug, Clone)]
pub struct ReplyTrace {
    /// Which path produced the reply.
    pub path: ReplyPath,
    /// Whether this turn pushed a deferred entry into memory.
    pub deferred: bool,
    /// Elapsed time for the whole call.
    pub elapsed: Duration,
}

/// The path a reply came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyPath {
    /// A keyword rule matched and a reassembly was rendered.
    Keyword {
        /// Canonical keyword of the winning rule.
        word: String,
        rank: u32,
        /// Index of the matching decomposition within the rule.
        decomposition: usize,
        /// Index of the reassembly the rotation cursor selected.
        reassembly: usize,
        /// Number of captures the decomposition produced.
        captures: usize,
    },
    /// No keyword matched; the oldest memory entry was drained.
    Memory,
    /// No keyword matched and memory was empty; a default reply was used.
    Default { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Responder;

    #[test]
    fn respond_is_total_over_arbitrary_input() {
        let mut responder = Responder::builtin();
        for input in ["", "   ", "?!...", "zzz qqq xxx", "my mother is strict", "\u{2603} snowman"] {
            let reply = responder.respond(input);
            assert!(!reply.is_empty(), "empty reply for {input:?}");
        }
    }

    #[test]
    fn fresh_responders_are_deterministic() {
        let inputs = [
            "hello there",
            "I am sad",
            "my dog died",
            "nothing matches here zzz",
            "do computers scare you",
            "zzz again",
        ];
        let run = |inputs: &[&str]| -> Vec<String> {
            let mut responder = Responder::builtin();
            inputs.iter().map(|i| responder.respond(i)).collect()
        };
        assert_eq!(run(&inputs), run(&inputs));
    }

    #[test]
    fn family_scenario_returns_the_exact_reassembly() {
        let mut responder = Responder::builtin();
        assert_eq!(responder.respond("my mother is strict"), "Tell me more about your family.");
    }

    #[test]
    fn reflection_restates_the_speaker() {
        let mut responder = Responder::builtin();
        let reply = responder.respond("I am sad");
        assert!(reply.contains("you are sad"), "unexpected reply: {reply}");
        assert!(!reply.contains("I am sad"));
    }

    #[test]
    fn higher_rank_keyword_wins_in_the_builtin_script() {
        // "computer" (rank 50) outranks "my" (rank 2) wherever it appears.
        let mut responder = Responder::builtin();
        let outcome = responder.respond_verbose("my computer broke");
        assert!(
            matches!(outcome.trace.path, ReplyPath::Keyword { ref word, rank: 50, .. } if word == "computer"),
            "unexpected path: {:?}",
            outcome.trace.path
        );
    }

    #[test]
    fn consecutive_matches_rotate_variants() {
        let mut responder = Responder::builtin();
        let first = responder.respond("I dreamed about the sea");
        let second = responder.respond("the dream came back");
        assert_ne!(first, second);
    }

    #[test]
    fn verbose_trace_is_consistent_with_the_reply() {
        let mut responder = Responder::builtin();
        let outcome = responder.respond_verbose("xyzzy plugh");
        assert!(matches!(outcome.trace.path, ReplyPath::Default { .. }));
        assert!(!outcome.trace.deferred);
        assert!(outcome.trace.elapsed >= Duration::ZERO);
        assert!(!outcome.reply.is_empty());
    }
}
