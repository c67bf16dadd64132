use crate::catalog::Catalog;
use crate::command::Command;
use crate::constants::{INPUT_PROMPT, WARNING_PREFIX};
use crate::error::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Print the input prompt before reading each line
    pub prompt: bool,
}

impl SessionOptions {
    pub fn new(prompt: bool) -> Self {
        Self { prompt }
    }

    pub fn interactive() -> Self {
        Self::new(true)
    }

    pub fn script() -> Self {
        Self::new(false)
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::script()
    }
}

/// Whether input should keep being read after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Outcome counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub applied: usize,
    pub rejected: usize,
    pub quit: bool,
}

/// Feeds parsed commands into a catalog
///
/// A rejected line leaves the catalog untouched and the session keeps reading.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            catalog: Catalog::new(),
            options,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    pub fn apply(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::AddImage {
                format,
                width,
                height,
            } => {
                self.catalog.add_image(format, width, height);
            }
            Command::AddStack(ids) => self.catalog.add_stack(&ids)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse and apply a single line. `None` when the line holds no command.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Flow>> {
        match Command::parse(line)? {
            Some(command) => self.apply(command).map(Some),
            None => Ok(None),
        }
    }

    /// Read commands until `Q` or end of input.
    ///
    /// Prompts go to `output`, rejected lines to `diagnostics`. Only I/O
    /// failures abort the run.
    pub fn run<R, W, D>(
        &mut self,
        input: R,
        output: &mut W,
        diagnostics: &mut D,
    ) -> Result<SessionSummary>
    where
        R: BufRead,
        W: Write,
        D: Write,
    {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        loop {
            if self.options.prompt {
                write!(output, "{}", INPUT_PROMPT)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute_line(&line) {
                Ok(Some(Flow::Quit)) => {
                    summary.quit = true;
                    break;
                }
                Ok(Some(Flow::Continue)) => summary.applied += 1,
                Ok(None) => {}
                Err(err) => {
                    summary.rejected += 1;
                    writeln!(
                        diagnostics,
                        "{} [{}] rejected: {}",
                        WARNING_PREFIX,
                        line.trim(),
                        err
                    )?;
                }
            }
        }

        if self.options.prompt && !summary.quit {
            writeln!(output)?;
        }

        Ok(summary)
    }
}
