//! Validation and compilation of a raw script into the immutable [`Script`].

use super::schema::{RawDecomposition, RawKeyword, RawReassembly, RawScript};
use crate::error::ScriptError;
use crate::{ClassId, Decomposition, KeywordRule, PatternItem, Reassembly, RuleId, Segment, SynonymClass, Template};
use std::collections::HashMap;
use std::path::Path;

/// A compiled, validated rule database.
///
/// A `Script` is immutable and `Send + Sync`; share one behind an `Arc`
/// across as many conversations as needed. Rotation cursors and the memory
/// queue live in [`crate::Responder`], one per conversation.
#[derive(Debug)]
pub struct Script {
    pub(crate) rules: Vec<KeywordRule>,
    /// Canonical keyword -> rule id.
    pub(crate) by_keyword: HashMap<String, RuleId>,
    /// Surface form -> canonical keyword.
    pub(crate) synonyms: HashMap<String, String>,
    pub(crate) classes: Vec<SynonymClass>,
    pub(crate) reflections: HashMap<String, String>,
    pub(crate) defaults: Vec<String>,
    pub(crate) memory_capacity: usize,
}

impl Script {
    /// Load and compile a script from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Compile a script from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ScriptError> {
        let raw: RawScript = serde_json::from_str(text)?;
        Self::compile(raw)
    }

    /// Number of keyword rules in the script.
    pub fn keyword_count(&self) -> usize {
        self.rules.len()
    }

    /// Map a token to its canonical keyword form, or return it unchanged.
    pub(crate) fn canonical<'a>(&'a self, token: &'a str) -> &'a str {
        self.synonyms.get(token).map(String::as_str).unwrap_or(token)
    }

    /// True if `token` (canonicalized) belongs to the given class.
    pub(crate) fn in_class(&self, class: ClassId, token: &str) -> bool {
        let canon = self.canonical(token);
        let class = &self.classes[class];
        class.name == canon || class.members.iter().any(|m| m == canon)
    }

    fn compile(raw: RawScript) -> Result<Self, ScriptError> {
        if raw.defaults.is_empty() {
            return Err(ScriptError::EmptyDefaults);
        }
        if raw.memory_capacity == 0 {
            return Err(ScriptError::ZeroMemoryCapacity);
        }

        let mut synonyms: HashMap<String, String> = HashMap::new();
        for (canonical, surfaces) in &raw.synonyms {
            for surface in surfaces {
                let surface = surface.to_lowercase();
                if synonyms.insert(surface.clone(), canonical.to_lowercase()).is_some() {
                    return Err(ScriptError::DuplicateSynonym { surface });
                }
            }
        }

        let mut classes: Vec<SynonymClass> = Vec::new();
        let mut class_ids: HashMap<String, ClassId> = HashMap::new();
        for (name, members) in &raw.classes {
            class_ids.insert(name.to_lowercase(), classes.len());
            classes.push(SynonymClass {
                name: name.to_lowercase(),
                members: members.iter().map(|m| m.to_lowercase()).collect(),
            });
        }

        let mut rules: Vec<KeywordRule> = Vec::new();
        let mut by_keyword: HashMap<String, RuleId> = HashMap::new();
        for keyword in &raw.keywords {
            let word = keyword.word.to_lowercase();
            if by_keyword.contains_key(&word) {
                return Err(ScriptError::DuplicateKeyword { word });
            }
            by_keyword.insert(word.clone(), rules.len());
            rules.push(compile_keyword(keyword, &word, &class_ids)?);
        }

        Ok(Script {
            rules,
            by_keyword,
            synonyms,
            classes,
            reflections: raw
                .reflections
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect(),
            defaults: raw.defaults,
            memory_capacity: raw.memory_capacity,
        })
    }
}

fn compile_keyword(
    raw: &RawKeyword,
    word: &str,
    class_ids: &HashMap<String, ClassId>,
) -> Result<KeywordRule, ScriptError> {
    let mut decompositions = Vec::new();
    for decomposition in &raw.decompositions {
        decompositions.push(compile_decomposition(decomposition, word, class_ids)?);
    }
    Ok(KeywordRule { word: word.to_string(), rank: raw.rank, decompositions })
}

fn compile_decomposition(
    raw: &RawDecomposition,
    keyword: &str,
    class_ids: &HashMap<String, ClassId>,
) -> Result<Decomposition, ScriptError> {
    let mut pattern = Vec::new();
    for item in raw.pattern.split_whitespace() {
        if item == "*" {
            pattern.push(PatternItem::Wild);
        } else if let Some(name) = item.strip_prefix('@') {
            let name = name.to_lowercase();
            let id = class_ids.get(&name).copied().ok_or_else(|| ScriptError::UnknownClass {
                keyword: keyword.to_string(),
                class: name.clone(),
            })?;
            pattern.push(PatternItem::Class(id));
        } else {
            pattern.push(PatternItem::Literal(item.to_lowercase()));
        }
    }
    if pattern.is_empty() {
        return Err(ScriptError::EmptyPattern { keyword: keyword.to_string() });
    }

    let captures = pattern.iter().filter(|i| !matches!(i, PatternItem::Literal(_))).count();

    if raw.reassemblies.is_empty() {
        return Err(ScriptError::NoReassemblies { keyword: keyword.to_string(), pattern: raw.pattern.clone() });
    }
    let mut reassemblies = Vec::new();
    for reassembly in &raw.reassemblies {
        let compiled = match reassembly {
            RawReassembly::Literal(text) => {
                Reassembly::Literal(compile_template(text, captures, keyword, &raw.pattern)?)
            }
            RawReassembly::Defer { defer } => {
                Reassembly::Defer(compile_template(defer, captures, keyword, &raw.pattern)?)
            }
        };
        reassemblies.push(compiled);
    }

    Ok(Decomposition { pattern, captures, reassemblies })
}

/// Parse a template's `(N)` placeholders into segments, validating every
/// reference against the pattern's capture count.
fn compile_template(
    text: &str,
    captures: usize,
    keyword: &str,
    pattern: &str,
) -> Result<Template, ScriptError> {
    let placeholder = regex!(r"\((\d+)\)");
    let mut segments = Vec::new();
    let mut last = 0;
    for m in placeholder.captures_iter(text) {
        let whole = m.get(0).unwrap();
        let index: usize = m[1].parse().unwrap_or(usize::MAX);
        if index == 0 || index > captures {
            return Err(ScriptError::CaptureOutOfRange {
                keyword: keyword.to_string(),
                pattern: pattern.to_string(),
                index,
                captures,
            });
        }
        if whole.start() > last {
            segments.push(Segment::Text(text[last..whole.start()].to_string()));
        }
        segments.push(Segment::Capture(index - 1));
        last = whole.end();
    }
    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }
    Ok(Template { segments })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(keywords: &str) -> String {
        format!(
            r#"{{
                "classes": {{ "sad": ["sad", "unhappy"] }},
                "defaults": ["Please go on."],
                "keywords": [{keywords}]
            }}"#
        )
    }

    #[test]
    fn compiles_minimal_script() {
        let doc = minimal(
            r#"{ "word": "mother", "rank": 3, "decompositions": [
                { "pattern": "* mother *", "reassemblies": ["Tell me more about your family."] }
            ]}"#,
        );
        let script = Script::from_json_str(&doc).unwrap();
        assert_eq!(script.keyword_count(), 1);
        let rule = &script.rules[0];
        assert_eq!(rule.rank, 3);
        assert_eq!(rule.decompositions[0].captures, 2);
        assert_eq!(
            rule.decompositions[0].pattern,
            vec![PatternItem::Wild, PatternItem::Literal("mother".into()), PatternItem::Wild]
        );
    }

    #[test]
    fn template_split_into_segments() {
        let template = compile_template("Why do you say (1)?", 1, "k", "*").unwrap();
        assert_eq!(
            template.segments,
            vec![
                Segment::Text("Why do you say ".into()),
                Segment::Capture(0),
                Segment::Text("?".into())
            ]
        );
    }

    #[test]
    fn rejects_capture_out_of_range() {
        let doc = minimal(
            r#"{ "word": "x", "decompositions": [
                { "pattern": "* x", "reassemblies": ["You said (2)."] }
            ]}"#,
        );
        let err = Script::from_json_str(&doc).unwrap_err();
        assert!(matches!(err, ScriptError::CaptureOutOfRange { index: 2, captures: 1, .. }));
    }

    #[test]
    fn rejects_zero_placeholder() {
        let doc = minimal(
            r#"{ "word": "x", "decompositions": [
                { "pattern": "* x", "reassemblies": ["You said (0)."] }
            ]}"#,
        );
        assert!(matches!(Script::from_json_str(&doc).unwrap_err(), ScriptError::CaptureOutOfRange { index: 0, .. }));
    }

    #[test]
    fn rejects_empty_pattern() {
        let doc = minimal(
            r#"{ "word": "x", "decompositions": [
                { "pattern": "   ", "reassemblies": ["Hm."] }
            ]}"#,
        );
        assert!(matches!(Script::from_json_str(&doc).unwrap_err(), ScriptError::EmptyPattern { .. }));
    }

    #[test]
    fn rejects_missing_reassemblies() {
        let doc = minimal(
            r#"{ "word": "x", "decompositions": [
                { "pattern": "* x *", "reassemblies": [] }
            ]}"#,
        );
        assert!(matches!(Script::from_json_str(&doc).unwrap_err(), ScriptError::NoReassemblies { .. }));
    }

    #[test]
    fn rejects_unknown_class() {
        let doc = minimal(
            r#"{ "word": "x", "decompositions": [
                { "pattern": "* @nosuch *", "reassemblies": ["Hm."] }
            ]}"#,
        );
        let err = Script::from_json_str(&doc).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownClass { class, .. } if class == "nosuch"));
    }

    #[test]
    fn rejects_duplicate_keyword() {
        let doc = minimal(
            r#"{ "word": "x", "decompositions": [{ "pattern": "*", "reassemblies": ["A."] }]},
               { "word": "X", "decompositions": [{ "pattern": "*", "reassemblies": ["B."] }]}"#,
        );
        assert!(matches!(Script::from_json_str(&doc).unwrap_err(), ScriptError::DuplicateKeyword { word } if word == "x"));
    }

    #[test]
    fn rejects_duplicate_synonym() {
        let doc = r#"{
            "synonyms": { "mother": ["mom"], "father": ["mom"] },
            "defaults": ["Go on."],
            "keywords": []
        }"#;
        assert!(matches!(Script::from_json_str(doc).unwrap_err(), ScriptError::DuplicateSynonym { surface } if surface == "mom"));
    }

    #[test]
    fn rejects_empty_defaults() {
        let doc = r#"{ "defaults": [], "keywords": [] }"#;
        assert!(matches!(Script::from_json_str(doc).unwrap_err(), ScriptError::EmptyDefaults));
    }

    #[test]
    fn rejects_zero_memory_capacity() {
        let doc = r#"{ "memory_capacity": 0, "defaults": ["Go on."], "keywords": [] }"#;
        assert!(matches!(Script::from_json_str(doc).unwrap_err(), ScriptError::ZeroMemoryCapacity));
    }

    #[test]
    fn rejects_negative_rank_at_parse_time() {
        let doc = minimal(r#"{ "word": "x", "rank": -1, "decompositions": [{ "pattern": "*", "reassemblies": ["A."] }]}"#);
        assert!(matches!(Script::from_json_str(&doc).unwrap_err(), ScriptError::Parse(_)));
    }

    #[test]
    fn synonym_resolution_and_class_membership() {
        let doc = r#"{
            "synonyms": { "sad": ["unhappy", "depressed"] },
            "classes": { "sad": ["sad"] },
            "defaults": ["Go on."],
            "keywords": []
        }"#;
        let script = Script::from_json_str(doc).unwrap();
        assert_eq!(script.canonical("unhappy"), "sad");
        assert_eq!(script.canonical("table"), "table");
        assert!(script.in_class(0, "depressed"));
        assert!(script.in_class(0, "sad"));
        assert!(!script.in_class(0, "happy"));
    }
}
