//! `Prompter` over the process terminal.
//!
//! Uses `dialoguer` on stdout when both stdin and stdout are TTYs. Otherwise the
//! prompt is written verbatim and one line is read, so answers can be piped.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use dialoguer::Input;
use dialoguer::console::Term;

use crate::domain::AppError;
use crate::ports::Prompter;

pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
    interactive: bool,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        Self { reader: io::stdin().lock(), writer: io::stdout(), interactive }
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Line-mode prompter over arbitrary streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer, interactive: false }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended before an answer to '{prompt}'"),
            )));
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        if !self.interactive {
            return self.read_line(prompt);
        }

        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&Term::stdout())
            .map_err(|e| AppError::Prompt(format!("Failed to read '{prompt}': {e}")))
    }
}
