//! Calcpad host simulator: main entry point
//!
//! Drives a [`KeypadSession`] from stdin and draws the simulated 16x2
//! display on stdout after every line.
//!
//! ```text
//!   stdin ──▶ (Keymap) ──▶ KeypadSession ──▶ TextDisplay ──▶ stdout
//!                               │
//!                               └──▶ LogEventSink ──▶ stderr
//! ```
//!
//! Usage: `calcpad [--matrix] [CONFIG]` (see `calcpad --help`)
//!
//! By default every non-space character is one key (`C` clears, `=`
//! evaluates, `s`/`c`/`t` are sin/cos/tan).  With `--matrix`, input is
//! whitespace-separated `row,col` pairs fed through the 4x4 key map.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{info, warn};

use calcpad::adapters::console::TextDisplay;
use calcpad::adapters::log_sink::LogEventSink;
use calcpad::adapters::logging::init_logging;
use calcpad::app::service::KeypadSession;
use calcpad::config::CalcConfig;
use calcpad::keymap::Keymap;

#[derive(Parser, Debug)]
#[command(name = "calcpad", version)]
#[command(about = "Keypad calculator simulator reading keys from stdin")]
struct Args {
    /// Read `row,col` matrix positions instead of key characters
    #[arg(long)]
    matrix: bool,

    /// JSON configuration file; defaults apply when omitted or unusable
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging()?;
    info!("Calcpad v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => load_config(path).unwrap_or_else(|e| {
            warn!("config {} unusable ({:#}), using defaults", path.display(), e);
            CalcConfig::default()
        }),
        None => CalcConfig::default(),
    };

    let mut display = TextDisplay::new(&config);
    let mut sink = LogEventSink::new();
    let mut keymap = Keymap::new(config.ignore_key);
    let mut session = KeypadSession::new(config);
    session.start(&mut display);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;

        if args.matrix {
            for pair in line.split_whitespace() {
                match parse_position(pair) {
                    Some((row, col)) => {
                        if let Some(key) = keymap.press(row, col) {
                            session.handle_key(key, &mut display, &mut sink);
                        }
                    }
                    None => warn!("ignoring matrix input {:?}", pair),
                }
            }
        } else {
            for key in line.chars().filter(|c| !c.is_whitespace()) {
                session.handle_key(key, &mut display, &mut sink);
            }
        }

        display.render(&mut stdout).context("writing display")?;
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<CalcConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: CalcConfig = serde_json::from_str(&text)
        .map_err(|e| anyhow!("parsing {}: {e}", path.display()))?;
    config.validate().map_err(|e| anyhow!("{e}"))?;
    Ok(config)
}

/// Parse `row,col`.
fn parse_position(pair: &str) -> Option<(usize, usize)> {
    let (row, col) = pair.split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}
