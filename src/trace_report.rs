use doctor::{ReplyPath, ReplyTrace};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print a one-line trace of how the last reply was produced.
pub fn print_trace(trace: &ReplyTrace, color: bool) {
    let palette = ansi::Palette::new(color);

    let path = match &trace.path {
        ReplyPath::Keyword { word, rank, decomposition, reassembly, captures } => palette.paint(
            format!(
                "keyword \"{word}\" (rank {rank}) decomposition #{decomposition} reassembly #{reassembly} captures={captures}"
            ),
            ansi::GREEN,
        ),
        ReplyPath::Memory => palette.paint("memory (deferred entry drained)", ansi::YELLOW),
        ReplyPath::Default { index } => palette.paint(format!("default reply #{index}"), ansi::CYAN),
    };

    let deferred = if trace.deferred { " [pushed to memory]" } else { "" };
    eprintln!("{}", palette.dim(format!("  ↳ {path}{deferred} in {:?}", trace.elapsed)));
}
