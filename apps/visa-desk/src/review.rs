//! Interactive checklist review over any line-based input
//!
//! Commands: `<n>` toggles item n (1-based), `a` checks all, `r` clears all,
//! `q` quits. The checklist panel is redrawn after every command.

use crate::report::ChecklistPanel;
use crate::session::ChecklistSession;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle(usize),
    CheckAll,
    Clear,
    Quit,
    Help,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" | "all" => Some(Self::CheckAll),
            "r" | "reset" => Some(Self::Clear),
            "q" | "quit" | "exit" => Some(Self::Quit),
            "?" | "h" | "help" => Some(Self::Help),
            other => other
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(|n| Self::Toggle(n - 1)),
        }
    }
}

const HELP: &str = "Komutlar: <no> işaretle/kaldır, a tümü, r sıfırla, q çıkış";

/// Run the review loop until `q` or end of input
pub fn run_review<R: BufRead, W: Write>(
    session: &mut ChecklistSession,
    input: R,
    mut output: W,
) -> io::Result<()> {
    write!(output, "{}", ChecklistPanel(session))?;
    writeln!(output, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Some(Command::CheckAll) => session.check_all(),
            Some(Command::Clear) => session.clear(),
            Some(Command::Toggle(index)) => {
                if let Err(e) = session.toggle(index) {
                    tracing::debug!(index, "Rejected toggle");
                    writeln!(output, "⚠️  {}", e)?;
                    continue;
                }
            }
            None => {
                writeln!(output, "Bilinmeyen komut: {}", line.trim())?;
                writeln!(output, "{}", HELP)?;
                continue;
            }
        }

        write!(output, "{}", ChecklistPanel(session))?;
    }

    tracing::info!(
        checked = session.checked_count(),
        total = session.items().len(),
        "Checklist review finished"
    );
    Ok(())
}
