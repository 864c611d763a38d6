//! # Console
//!
//! Prompting and plain-text presentation for the interactive menu.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console<S: LineSource, W: Write>                                      │
//! │                                                                         │
//! │  LineSource ──► ask / choose / confirm ──► answers                     │
//! │   (rustyline in the binary, a scripted queue in tests)                 │
//! │                                                                         │
//! │  rule / panel / say / table ──► W (stdout in the binary)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every prompt returns `AppError::cancelled()` once input is exhausted, so
//! Ctrl-D backs out of any flow and ends the menu loop.

use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::io::Write;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::table::Table;

/// Width of rules and panels.
pub const WIDTH: usize = 72;

// =============================================================================
// Line Sources
// =============================================================================

/// Where answers come from.
pub trait LineSource {
    /// Reads one line, or `None` when input has ended.
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>>;
}

/// Interactive terminal input with line editing and history.
pub struct Terminal {
    editor: Editor<(), DefaultHistory>,
}

impl Terminal {
    pub fn new() -> AppResult<Self> {
        Ok(Terminal {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> AppResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!(error = %e, "Could not add prompt history entry");
                    }
                }
                Ok(Some(line))
            }
            Err(rustyline::error::ReadlineError::Eof) | Err(rustyline::error::ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Pre-recorded answers, for tests.
#[cfg(test)]
pub(crate) struct Scripted {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Scripted {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl LineSource for Scripted {
    fn read_line(&mut self, _prompt: &str) -> AppResult<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

// =============================================================================
// Console
// =============================================================================

/// Prompts plus an output sink.
pub struct Console<S, W> {
    input: S,
    out: W,
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(input: S, out: W) -> Self {
        Console { input, out }
    }

    /// The output sink, for flows that render straight into it.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.out
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Prints one line.
    pub fn say(&mut self, text: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        Ok(())
    }

    /// Prints a horizontal rule with a centered title.
    pub fn rule(&mut self, title: &str) -> AppResult<()> {
        let label = format!(" {} ", title);
        let remaining = WIDTH.saturating_sub(label.chars().count());
        let left = remaining / 2;
        writeln!(
            self.out,
            "{}{}{}",
            "─".repeat(left),
            label,
            "─".repeat(remaining - left)
        )?;
        Ok(())
    }

    /// Prints lines inside a box.
    pub fn panel(&mut self, lines: &[String]) -> AppResult<()> {
        writeln!(self.out, "{}", render_panel(lines))?;
        Ok(())
    }

    /// Prints a rendered table.
    pub fn table(&mut self, table: &Table) -> AppResult<()> {
        write!(self.out, "{}", table.render())?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Prompts
    // -------------------------------------------------------------------------

    fn read(&mut self, prompt: &str) -> AppResult<String> {
        self.out.flush()?;
        match self.input.read_line(prompt)? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(AppError::cancelled()),
        }
    }

    /// Asks a free-text question. Empty input takes `default` when given.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> AppResult<String> {
        let prompt = match default {
            Some(value) => format!("{} [{}]: ", question, value),
            None => format!("{}: ", question),
        };
        let answer = self.read(&prompt)?;
        match default {
            Some(value) if answer.is_empty() => Ok(value.to_string()),
            _ => Ok(answer),
        }
    }

    /// Asks until the answer is one of `choices`.
    pub fn choose(&mut self, question: &str, choices: &[String]) -> AppResult<String> {
        let prompt = format!("{} [{}]: ", question, choices.join("/"));
        loop {
            let answer = self.read(&prompt)?;
            if let Some(choice) = choices.iter().find(|c| **c == answer) {
                return Ok(choice.clone());
            }
            self.say("Please select one of the available options")?;
        }
    }

    /// Asks a yes/no question until answered.
    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let prompt = format!("{} [y/n]: ", question);
        loop {
            match self.read(&prompt)?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter y or n")?,
            }
        }
    }
}

/// Draws `lines` inside a box sized to the longest line.
pub fn render_panel(lines: &[String]) -> String {
    let inner = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(20);

    let mut out = String::new();
    out.push_str(&format!("╭{}╮\n", "─".repeat(inner + 2)));
    for line in lines {
        let pad = inner - line.chars().count();
        out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╰{}╯", "─".repeat(inner + 2)));
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn console(lines: &[&str]) -> Console<Scripted, Vec<u8>> {
        Console::new(Scripted::new(lines), Vec::new())
    }

    fn output(console: Console<Scripted, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_ask_uses_default_on_empty() {
        let mut c = console(&["", " 9500 "]);
        assert_eq!(c.ask("Purchase price", Some("9000")).unwrap(), "9000");
        assert_eq!(c.ask("Purchase price", Some("9000")).unwrap(), "9500");
    }

    #[test]
    fn test_choose_reasks_until_valid() {
        let mut c = console(&["Solar", "pertamax", "Pertamax"]);
        let choices = vec!["Pertamax".to_string(), "Pertalite".to_string()];

        assert_eq!(c.choose("Fuel", &choices).unwrap(), "Pertamax");
        let text = output(c);
        assert_eq!(text.matches("Please select one of the available options").count(), 2);
    }

    #[test]
    fn test_confirm() {
        let mut c = console(&["maybe", "Y", "no"]);
        assert!(c.confirm("Confirm sale?").unwrap());
        assert!(!c.confirm("Confirm sale?").unwrap());
    }

    #[test]
    fn test_exhausted_input_is_cancelled() {
        let mut c = console(&[]);
        assert!(c.ask("Liters", None).unwrap_err().is_cancelled());
    }

    #[test]
    fn test_rule_width() {
        let mut c = console(&[]);
        c.rule("Main Menu").unwrap();
        let text = output(c);
        assert_eq!(text.trim_end().chars().count(), WIDTH);
        assert!(text.contains(" Main Menu "));
    }

    #[test]
    fn test_panel() {
        let panel = render_panel(&["Fuel: Pertamax".to_string(), "Total: Rp 2.000.000".to_string()]);
        let lines: Vec<&str> = panel.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("│ Fuel: Pertamax"));
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }
}
