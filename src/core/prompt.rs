use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};

/// Line-oriented console dialog over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question`, read one line and return it trimmed and lower-cased.
    /// End of input is reported as `AppError::InputClosed`.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Err(AppError::InputClosed);
        }
        Ok(answer.trim().to_lowercase())
    }

    pub fn say(&mut self, line: &str) -> AppResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
