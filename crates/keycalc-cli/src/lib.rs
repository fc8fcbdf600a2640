//! Terminal front-end for KeyCalc
//!
//! Reads key presses from stdin, one line at a time, and prints the display
//! after each line:
//!
//! ```text
//! $ keycalc
//! 0
//! 10/2+3=
//! 8
//! h
//! 10.0 ÷ 2.0 + 3.0 = 8.0
//! 8
//! ```
//!
//! Keypad symbols (`+ − × ÷`) are accepted as well as their ASCII stand-ins
//! (`- * x /`). `c` clears, `h` lists the history, `q` quits.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use keycalc_core::prelude::*;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "Keypad calculator with persisted history")]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(long, env = "KEYCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preferences file holding the history, overrides the configuration
    #[arg(long, env = "KEYCALC_STORE")]
    pub store: Option<PathBuf>,

    /// Keep history in memory for this run only
    #[arg(long, conflicts_with = "store")]
    pub memory: bool,

    /// Print the calculation history and exit
    #[arg(long)]
    pub history: bool,
}

/// A terminal keystroke after translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    History,
    Quit,
}

/// Translate one typed character
pub fn translate(ch: char) -> Option<Input> {
    let input = match ch {
        'c' => Input::Key(Key::Clear),
        'h' | 'H' => Input::History,
        'q' | 'Q' => Input::Quit,
        '-' => Input::Key(Key::Operator(Operator::Subtract)),
        '*' | 'x' | 'X' => Input::Key(Key::Operator(Operator::Multiply)),
        '/' => Input::Key(Key::Operator(Operator::Divide)),
        _ => Input::Key(Key::from_char(ch)?),
    };
    Some(input)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn open_store(cli: &Cli, config: &CalculatorConfig) -> Result<Box<dyn KeyValueStore>> {
    if cli.memory {
        return Ok(Box::new(MemoryStore::new()));
    }

    let path = config
        .store_path()
        .context("Could not resolve preferences file")?;
    let store = FileStore::open(&path)
        .with_context(|| format!("Failed to open preferences file {}", path.display()))?;
    Ok(Box::new(store))
}

fn print_history<S: KeyValueStore, W: Write>(session: &Session<S>, out: &mut W) -> io::Result<()> {
    let history = session.history();
    if history.is_empty() {
        writeln!(out, "(no history)")?;
    }
    for entry in history {
        writeln!(out, "{} = {}", entry.expression, entry.result)?;
    }
    Ok(())
}

/// Feed `input` to `session` line by line, echoing the display to `out`
///
/// Returns when the input ends or a quit key is read.
pub fn drive<S, R, W>(session: &mut Session<S>, input: R, out: &mut W) -> io::Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", session.display())?;

    for line in input.lines() {
        let line = line?;

        for ch in line.chars().filter(|c| !c.is_whitespace()) {
            match translate(ch) {
                Some(Input::Key(key)) => {
                    if let Err(e) = session.press_key(key) {
                        debug!("{e}");
                    }
                }
                Some(Input::History) => print_history(session, out)?,
                Some(Input::Quit) => return Ok(()),
                None => warn!(%ch, "unrecognised key"),
            }
        }

        writeln!(out, "{}", session.display())?;
    }

    Ok(())
}

/// Entry point for the `keycalc` binary
pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let Some(store) = &cli.store {
        config.store_path = Some(store.clone());
    }

    let store = open_store(&cli, &config)?;
    let mut session = Session::with_config(store, &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.history {
        print_history(&session, &mut out)?;
        return Ok(());
    }

    drive(&mut session, io::stdin().lock(), &mut out)?;
    Ok(())
}
