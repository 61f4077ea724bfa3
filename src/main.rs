use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use sciculate::{evaluate, keypad::Keypad, util::format::format_outcome};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// sciculate evaluates calculator expressions such as `(3+4)*2` or `sin30`.
///
/// Without an argument, expressions are read from standard input, one per
/// line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the argument as a file with one expression per line.
    #[arg(short, long)]
    file: bool,

    /// Treats the argument as whitespace separated keypad labels, e.g.
    /// "3 + 4 =", and prints the final display.
    #[arg(short, long, conflicts_with = "file")]
    keys: bool,

    /// Logs evaluation details to stderr. Repeat for more detail. `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(2)
        },
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

/// Runs the requested mode and reports whether every evaluation succeeded.
fn run(args: &Args) -> Result<bool> {
    match (&args.contents, args.keys, args.file) {
        (Some(labels), true, _) => Ok(run_keys(labels)),
        (Some(path), _, true) => {
            let script = fs::read_to_string(path).with_context(|| {
                format!("Failed to read the input file '{path}'. Perhaps this file does not exist?")
            })?;
            Ok(run_lines(script.lines()))
        },
        (Some(expression), ..) => Ok(run_lines([expression.as_str()])),
        (None, ..) => {
            let lines = io::stdin().lock()
                                   .lines()
                                   .collect::<io::Result<Vec<_>>>()
                                   .context("Failed to read expressions from stdin")?;
            Ok(run_lines(lines.iter().map(String::as_str)))
        },
    }
}

fn run_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
    let mut all_ok = true;

    for line in lines.into_iter().map(str::trim).filter(|l| !l.is_empty()) {
        let outcome = evaluate(line);
        if let Err(e) = &outcome {
            warn!(expression = line, "{e}");
            all_ok = false;
        }
        println!("{}", format_outcome(&outcome));
    }

    all_ok
}

fn run_keys(labels: &str) -> bool {
    let mut keypad = Keypad::new();
    let mut all_ok = true;

    for label in labels.split_whitespace() {
        match keypad.press_label(label) {
            Ok(Some(Err(e))) => {
                warn!(%label, "{e}");
                all_ok = false;
            },
            Ok(_) => {},
            Err(e) => {
                warn!("{e}");
                all_ok = false;
            },
        }
    }

    println!("{}", keypad.display());
    all_ok
}
