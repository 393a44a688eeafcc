mod trace_report;

use doctor::{Responder, Script};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;

const GREETING: &str = "Hello! I'm here to chat with you. How can I help you today?";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let script = match load_script(config.script.as_deref()) {
        Ok(script) => script,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut responder = Responder::new(script);

    match &config.input {
        Some(input) => {
            let outcome = responder.respond_verbose(input);
            println!("{}", outcome.reply);
            if config.trace {
                trace_report::print_trace(&outcome.trace, config.color);
            }
        }
        None => repl(&mut responder, &config),
    }
}

fn repl(responder: &mut Responder, config: &CliConfig) {
    let interactive = io::stdin().is_terminal();
    println!("{GREETING}");

    let stdin = io::stdin();
    loop {
        if interactive {
            print!("you> ");
            let _ = io::stdout().flush();
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: failed to read stdin: {err}");
                std::process::exit(1);
            }
        }
        let message = line.trim();
        // Empty submissions are ignored, not answered.
        if message.is_empty() {
            continue;
        }
        let outcome = responder.respond_verbose(message);
        println!("{}", outcome.reply);
        if config.trace {
            trace_report::print_trace(&outcome.trace, config.color);
        }
    }
}

fn load_script(path: Option<&std::path::Path>) -> Result<Arc<Script>, doctor::ScriptError> {
    match path {
        Some(path) => Ok(Arc::new(Script::from_path(path)?)),
        None => Ok(Script::builtin()),
    }
}

struct CliConfig {
    input: Option<String>,
    script: Option<PathBuf>,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut script: Option<PathBuf> = None;
    let mut trace = false;
    let mut color = io::stderr().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("doctor {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--trace" => trace = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--script" => {
                let value = args.next().ok_or_else(|| "error: --script expects a path".to_string())?;
                script = Some(PathBuf::from(value));
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--script=") => {
                script = Some(PathBuf::from(arg.trim_start_matches("--script=")));
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    Ok(CliConfig { input, script, trace, color })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "doctor {version}

Deterministic ELIZA-style responder CLI.

Usage:
  doctor [OPTIONS] [--] <input...>
  doctor [OPTIONS] --input <text>
  doctor [OPTIONS]

With input, prints one reply and exits. Without input, starts an
interactive session reading messages line by line from stdin.

Options:
  -i, --input <text>     Message to respond to.
  --script <path>        Load the rule script from a JSON file instead of
                         the embedded default.
  --trace                Print a per-reply trace (keyword, decomposition,
                         reassembly, timing) to stderr.
  --color                Force ANSI color in traces.
  --no-color             Disable ANSI color in traces.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Exit codes:
  0  Success.
  1  Script failed to load or compile.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
