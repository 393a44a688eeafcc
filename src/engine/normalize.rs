//! Input normalization.
//!
//! The engine tokenizes its own lowercased copy of the input so that
//! decomposition patterns only ever see canonical forms: contractions are
//! expanded ("don't" -> "do not") before punctuation is stripped, and
//! whitespace collapses during tokenization. The caller is expected to trim,
//! but nothing here assumes it did.

use once_cell::sync::Lazy;
use regex::Regex;

/// Contraction expansions, applied in order (specific forms before the
/// generic suffix rules).
static CONTRACTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\bwon't\b", "will not"),
        (r"\bcan't\b", "cannot"),
        (r"\bshan't\b", "shall not"),
        (r"\blet's\b", "let us"),
        (r"n't\b", " not"),
        (r"'m\b", " am"),
        (r"'re\b", " are"),
        (r"'ve\b", " have"),
        (r"'ll\b", " will"),
        (r"'d\b", " would"),
        (r"'s\b", " is"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Normalize `input` into the token sequence the engine matches against.
///
/// Steps: lowercase, expand contractions, replace every remaining
/// non-alphanumeric character with a space, split on whitespace.
pub(crate) fn tokenize(input: &str) -> Vec<String> {
    let mut text = input.to_lowercase();
    for (pattern, replacement) in CONTRACTIONS.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, *replacement).into_owned();
        }
    }
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(input: &str) -> Vec<String> {
        tokenize(input)
    }

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(toks("My Mother IS strict"), ["my", "mother", "is", "strict"]);
    }

    #[test]
    fn strips_terminal_and_inner_punctuation() {
        assert_eq!(toks("Well, I am sad..."), ["well", "i", "am", "sad"]);
        assert_eq!(toks("what?!"), ["what"]);
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(toks("  i \t am\n\nhappy "), ["i", "am", "happy"]);
    }

    #[test]
    fn expands_contractions() {
        assert_eq!(toks("I don't know"), ["i", "do", "not", "know"]);
        assert_eq!(toks("I can't sleep"), ["i", "cannot", "sleep"]);
        assert_eq!(toks("won't you help"), ["will", "not", "you", "help"]);
        assert_eq!(toks("I'm tired"), ["i", "am", "tired"]);
        assert_eq!(toks("you're wrong"), ["you", "are", "wrong"]);
        assert_eq!(toks("that's odd"), ["that", "is", "odd"]);
        assert_eq!(toks("I'd rather not"), ["i", "would", "rather", "not"]);
    }

    #[test]
    fn empty_and_punctuation_only_inputs_yield_no_tokens() {
        assert!(toks("").is_empty());
        assert!(toks("   ").is_empty());
        assert!(toks("?!... --").is_empty());
    }
}
