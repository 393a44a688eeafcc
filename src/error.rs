use thiserror::Error;

/// Failures raised while loading or compiling a script.
///
/// These are configuration-time errors: a `Script` that fails compilation is
/// never constructed, so the respond path cannot observe a malformed rule
/// table. Runtime conditions (no keyword match, empty memory, empty input)
/// are not errors; they resolve through the default-reply path.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse script document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate keyword '{word}'")]
    DuplicateKeyword { word: String },

    #[error("synonym '{surface}' is listed under more than one canonical keyword")]
    DuplicateSynonym { surface: String },

    #[error("keyword '{keyword}': decomposition pattern is empty")]
    EmptyPattern { keyword: String },

    #[error("keyword '{keyword}': pattern '{pattern}' has no reassemblies")]
    NoReassemblies { keyword: String, pattern: String },

    #[error(
        "keyword '{keyword}': pattern '{pattern}' defines {captures} capture(s) \
         but a reassembly references ({index})"
    )]
    CaptureOutOfRange { keyword: String, pattern: String, index: usize, captures: usize },

    #[error("keyword '{keyword}': pattern references unknown class '@{class}'")]
    UnknownClass { keyword: String, class: String },

    #[error("default reply list must not be empty")]
    EmptyDefaults,

    #[error("memory capacity must be at least 1")]
    ZeroMemoryCapacity,
}
