//! Pronoun reflection.
//!
//! Captured text is restated from the responder's voice before it is spliced
//! into a reply ("my job" -> "your job"). The swap is a single forward pass
//! over the tokens: each token is looked up in the script's reflection table
//! at most once, so `i -> you` cannot ping-pong back to `i`.

use crate::Script;

/// Reflect a captured token run and join it with single spaces.
pub(crate) fn reflect(script: &Script, tokens: &[String]) -> String {
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(script.reflections.get(token).map(String::as_str).unwrap_or(token));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Script;

    fn script() -> Script {
        Script::from_json_str(
            r#"{
                "reflections": { "i": "you", "me": "you", "my": "your", "am": "are", "you": "me", "your": "my" },
                "defaults": ["Go on."],
                "keywords": []
            }"#,
        )
        .unwrap()
    }

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn swaps_first_and_second_person() {
        let s = script();
        assert_eq!(reflect(&s, &toks(&["i", "am", "sad"])), "you are sad");
        assert_eq!(reflect(&s, &toks(&["my", "job"])), "your job");
        assert_eq!(reflect(&s, &toks(&["you", "hate", "me"])), "me hate you");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let s = script();
        assert_eq!(reflect(&s, &toks(&["the", "weather"])), "the weather");
    }

    #[test]
    fn single_pass_does_not_reapply() {
        let s = script();
        // "i" becomes "you" and stays there; it is not re-reflected to "me".
        assert_eq!(reflect(&s, &toks(&["i"])), "you");
    }

    #[test]
    fn empty_capture_reflects_to_empty() {
        let s = script();
        assert_eq!(reflect(&s, &[]), "");
    }
}
