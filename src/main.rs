//! PEK Lite CLI
//!
//! Usage:
//!   pek --text "first answer" --text "second answer"   # One response per --text
//!   pek --input answers.json                             # {"responses": [...]}
//!   pek --interactive                                    # One response per line
//!   pek --serve                                          # HTTP API server
//!   pek --text "..." --json                              # JSON output

use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pek_lite::config::ServerConfig;
use pek_lite::core::{render_html, render_terminal, run_server, PersonalityEngine};
use pek_lite::types::RawInput;
use pek_lite::{Error, Result, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "pek",
    version = VERSION,
    about = "PEK Lite - deterministic personality snapshot from free-text answers",
    long_about = "PEK Lite reads free-text answers, scores a fixed catalog of behavioral\n\
                  signals, picks a dominant mode and assembles an observational snapshot.\n\
                  The same answers always produce the same report.\n\n\
                  Modes:\n  \
                  --text         One or more responses on the command line\n  \
                  --input        Responses from a JSON file\n  \
                  --interactive  One response per stdin line, 'done' to finish\n  \
                  --serve        HTTP API server"
)]
struct Args {
    /// A response to analyze (repeat for several)
    #[arg(short, long)]
    text: Vec<String>,

    /// JSON file with {"responses": [...]} or {"raw_input": {"responses": [...]}}
    #[arg(short = 'f', long)]
    input: Option<PathBuf>,

    /// Read responses from stdin, one per line
    #[arg(short, long, conflicts_with_all = ["text", "input"])]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (overrides config)
    #[arg(long)]
    addr: Option<String>,

    /// Config file (default: ./pek.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Output as a standalone HTML page
    #[arg(long)]
    html: bool,

    /// Include signal and mode diagnostics
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = if args.serve {
        run_serve(&args).await
    } else {
        init_tracing(if args.verbose { "debug" } else { "warn" });
        run_analyze(&args)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber; RUST_LOG wins over `fallback`
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// Gather responses from whichever source was given, analyze, print
fn run_analyze(args: &Args) -> Result<()> {
    let input = match input_source(args) {
        InputSource::Interactive => read_interactive()?,
        InputSource::File(path) => read_input_file(path)?,
        InputSource::Text(text) => RawInput::new(text.iter().cloned()),
    };

    let engine = PersonalityEngine::new();
    let report = if args.verbose {
        engine.analyze_with_diagnostics(&input)
    } else {
        engine.analyze(&input)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.html {
        print!("{}", render_html(&report));
    } else {
        let color = !args.no_color && io::stdout().is_terminal();
        print!("{}", render_terminal(&report, color));
    }
    Ok(())
}

/// Where the responses come from
#[derive(Debug, PartialEq)]
enum InputSource<'a> {
    Interactive,
    File(&'a Path),
    Text(&'a [String]),
}

fn input_source(args: &Args) -> InputSource<'_> {
    if args.interactive {
        InputSource::Interactive
    } else if let Some(path) = &args.input {
        InputSource::File(path)
    } else if !args.text.is_empty() {
        InputSource::Text(&args.text)
    } else {
        // Default to interactive if no source given
        InputSource::Interactive
    }
}

/// Accepts `{"responses": [...]}` or a simulation template `{"raw_input": {"responses": [...]}}`
fn read_input_file(path: &Path) -> Result<RawInput> {
    let contents = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;

    let responses = value
        .get("responses")
        .or_else(|| value.get("raw_input").and_then(|raw| raw.get("responses")))
        .and_then(|r| r.as_array())
        .ok_or_else(|| {
            Error::Input(format!(
                "{} has no 'responses' array (top level or under 'raw_input')",
                path.display()
            ))
        })?;

    Ok(RawInput::from_values(responses))
}

/// One response per line until EOF or 'done'
fn read_interactive() -> Result<RawInput> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stderr = io::stderr();

    if prompt {
        eprintln!("PEK Lite v{}", VERSION);
        eprintln!("Type one answer per line. Type 'done' (or Ctrl-D) to see your snapshot.");
        eprintln!();
    }

    let mut responses = Vec::new();
    let mut lines = stdin.lock();
    loop {
        if prompt {
            eprint!("[{}] > ", responses.len() + 1);
            stderr.flush()?;
        }

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("done") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        responses.push(line.to_string());
    }

    if prompt {
        eprintln!();
    }
    Ok(RawInput::new(responses))
}

/// Run HTTP API server
async fn run_serve(args: &Args) -> Result<()> {
    let (mut config, config_path) = ServerConfig::load(args.config.clone())?;
    if let Some(addr) = &args.addr {
        config.addr = addr.clone();
        config.validate()?;
    }
    if args.verbose {
        config.diagnostics = true;
    }

    init_tracing(&config.log_filter);
    match config_path.filter(|p| p.exists()) {
        Some(path) => tracing::info!(path = %path.display(), "config loaded"),
        None => tracing::info!("no config file, using defaults"),
    }

    run_server(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("pek").chain(argv.iter().copied()))
    }

    #[test]
    fn test_interactive_flag_selects_stdin() {
        let args = parse(&["-i"]).unwrap();
        assert_eq!(input_source(&args), InputSource::Interactive);
    }

    #[test]
    fn test_interactive_conflicts_with_other_sources() {
        assert!(parse(&["-i", "-t", "I vent."]).is_err());
        assert!(parse(&["--interactive", "--input", "answers.json"]).is_err());
    }

    #[test]
    fn test_text_and_file_sources() {
        let args = parse(&["-t", "first.", "-t", "second."]).unwrap();
        assert_eq!(
            input_source(&args),
            InputSource::Text(&["first.".to_string(), "second.".to_string()])
        );

        let args = parse(&["-f", "answers.json", "-t", "ignored."]).unwrap();
        assert_eq!(input_source(&args), InputSource::File(Path::new("answers.json")));
    }

    #[test]
    fn test_no_source_defaults_to_stdin() {
        let args = parse(&[]).unwrap();
        assert_eq!(input_source(&args), InputSource::Interactive);
    }
}
