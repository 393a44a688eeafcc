//! Decomposition pattern matching.
//!
//! A decomposition pattern is a sequence of literal tokens, class references,
//! and wildcards that must align with the *entire* token sequence. Matching is
//! a depth-first expansion of partial matches over a stack, exploring
//! wildcard absorptions shortest-first; branches are pushed in reverse so the
//! stack pops them in forward order, and the first complete alignment wins.
//! This keeps matching deterministic for any pattern/input pair.
//!
//! ```text
//! pattern: [*, "i", "am", @sad, *]
//! tokens:  ["well", "i", "am", "sad"]
//!
//! [m0: * ↦ "well"] -> [m1: "i"] -> [m2: "am"] -> [m3: @sad ↦ "sad"] -> [m4: * ↦ ε]
//!                                                 │
//!                                                 └─ complete: captures
//!                                                    ["well"], ["sad"], []
//! ```
//!
//! Wildcards and class items both capture: wildcards a (possibly empty) token
//! run, class items the single token they matched.

use crate::{PatternItem, Script};

/// Captured token runs, one entry per capturing pattern item, in pattern
/// order.
pub(crate) type Captures = Vec<Vec<String>>;

/// A partially aligned pattern: `next_idx` points at the pattern item to
/// consume next, `position` at the first unconsumed token.
struct PartialMatch {
    next_idx: usize,
    position: usize,
    captures: Captures,
}

/// Align `pattern` against `tokens` and return the captures of the first
/// complete alignment, or `None`.
pub(crate) fn match_pattern(script: &Script, pattern: &[PatternItem], tokens: &[String]) -> Option<Captures> {
    let mut stack = vec![PartialMatch { next_idx: 0, position: 0, captures: Vec::new() }];

    while let Some(m) = stack.pop() {
        if m.next_idx >= pattern.len() {
            // Pattern exhausted; a match also requires the whole input to be
            // consumed.
            if m.position == tokens.len() {
                return Some(m.captures);
            }
            continue;
        }

        match &pattern[m.next_idx] {
            PatternItem::Literal(literal) => {
                if let Some(token) = tokens.get(m.position) {
                    if script.canonical(token) == literal {
                        stack.push(PartialMatch {
                            next_idx: m.next_idx + 1,
                            position: m.position + 1,
                            captures: m.captures,
                        });
                    }
                }
            }
            PatternItem::Class(id) => {
                if let Some(token) = tokens.get(m.position) {
                    if script.in_class(*id, token) {
                        let mut captures = m.captures;
                        captures.push(vec![token.clone()]);
                        stack.push(PartialMatch {
                            next_idx: m.next_idx + 1,
                            position: m.position + 1,
                            captures,
                        });
                    }
                }
            }
            PatternItem::Wild => {
                // Push longest absorption first so the LIFO stack explores
                // shortest-first.
                for absorbed in (0..=tokens.len() - m.position).rev() {
                    let mut captures = m.captures.clone();
                    captures.push(tokens[m.position..m.position + absorbed].to_vec());
                    stack.push(PartialMatch {
                        next_idx: m.next_idx + 1,
                        position: m.position + absorbed,
                        captures,
                    });
                }
            }
        }
    }

    None
}
