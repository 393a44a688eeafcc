//! Keyword ranking scan.
//!
//! Walks the normalized token sequence, resolves each token to its canonical
//! keyword through the synonym table, and selects the winning rule. Higher
//! rank wins; equal ranks break to the leftmost occurrence. The tie-break is
//! part of the engine's determinism contract, so the scan only replaces the
//! current best on a *strictly* greater rank.

use crate::{RuleId, Script};

/// The selected keyword occurrence for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeywordHit {
    pub rule: RuleId,
    pub rank: u32,
    /// Token index of the occurrence that won selection.
    pub position: usize,
}

/// Scan `tokens` and pick the highest-ranked keyword occurrence, if any.
pub(crate) fn select(script: &Script, tokens: &[String]) -> Option<KeywordHit> {
    let debug = std::env::var_os("DOCTOR_DEBUG_RULES").is_some();
    let mut best: Option<KeywordHit> = None;

    for (position, token) in tokens.iter().enumerate() {
        let canonical = script.canonical(token);
        let Some(&rule) = script.by_keyword.get(canonical) else {
            continue;
        };
        let rank = script.rules[rule].rank;
        if debug {
            eprintln!("[keyword_scan] token=\"{token}\" keyword=\"{canonical}\" rank={rank} position={position}");
        }
        if best.map(|b| rank > b.rank).unwrap_or(true) {
            best = Some(KeywordHit { rule, rank, position });
        }
    }

    if debug {
        match best {
            Some(hit) => eprintln!(
                "[keyword_scan] selected=\"{}\" rank={} position={}",
                script.rules[hit.rule].word, hit.rank, hit.position
            ),
            None => eprintln!("[keyword_scan] no keyword matched"),
        }
    }
    best
}
