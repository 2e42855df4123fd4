//! deskcalc: a keypad calculator for the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Press keys given as arguments, one frame per argument
//! deskcalc 12+3= =
//!
//! # Interactive: one line of keys per frame
//! deskcalc
//!
//! # JSON frames and copy the final value
//! deskcalc --json --copy "2^10="
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use deskcalc::calculator::copy_to_clipboard;
use deskcalc::config::Config;
use deskcalc::display::{OutputFormat, TerminalDisplay};
use deskcalc::panel;
use deskcalc::widget::Calculator;

/// Keypad calculator
///
/// Keys: digits, `.`, `+ - × ÷ ^` (or `* x /`), `=`, `C`/`AC` to clear,
/// `⌫`/`BS`/`<` for backspace.
#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lines of key presses; read from stdin when omitted
    #[arg(value_name = "KEYS")]
    keys: Vec<String>,

    /// Print each frame as a JSON object
    #[arg(long)]
    json: bool,

    /// Hide the pending-operation label
    #[arg(long)]
    no_operation: bool,

    /// Copy the final value to the clipboard
    #[arg(long)]
    copy: bool,

    /// Print the keypad layout and exit
    #[arg(long)]
    keypad: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

type Widget<'a> = Calculator<TerminalDisplay<io::StdoutLock<'a>>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.log_level.0);

    if cli.keypad {
        let mut stdout = io::stdout().lock();
        stdout.write_all(panel::render_keypad().as_bytes())?;
        return Ok(());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.display.format
    };
    let show_operation = config.display.show_operation && !cli.no_operation;

    let display = TerminalDisplay::new(io::stdout().lock(), format, show_operation);
    let mut calculator = Calculator::new(display)?;

    if cli.keys.is_empty() {
        info!("reading key presses from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            if let Err(e) = run_line(&mut calculator, &line) {
                eprintln!("Error: {e:#}");
            }
        }
    } else {
        for keys in &cli.keys {
            run_line(&mut calculator, keys)?;
        }
    }

    if cli.copy || config.clipboard.copy_result {
        let text = calculator.display().primary().to_string();
        match copy_to_clipboard(&text) {
            Ok(()) => info!(%text, "copied result to clipboard"),
            Err(e) => warn!(error = %e, "could not copy result"),
        }
    }

    Ok(())
}

fn run_line(calculator: &mut Widget<'_>, line: &str) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    let events =
        panel::tokenize(line).with_context(|| format!("Invalid key sequence `{}`", line))?;
    calculator.press_all(events)?;
    calculator.display_mut().present()?;
    Ok(())
}

fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
