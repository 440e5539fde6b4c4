//! Interactive sensitivity prompt.

use std::io::{self, BufRead, Write};

use sensfix_core::Sensitivity;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for the sensitivity a replay was played with.
    ///
    /// An empty answer (or end of input) skips the replay. Invalid numbers
    /// are reported and asked again.
    pub fn ask(&mut self, file_name: &str) -> io::Result<Option<Sensitivity>> {
        loop {
            write!(
                self.output,
                "Enter in-game sensitivity for '{}' (empty to skip): ",
                file_name
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let answer = line.trim();
            if answer.is_empty() {
                return Ok(None);
            }

            match answer.parse::<Sensitivity>() {
                Ok(sens) => return Ok(Some(sens)),
                Err(_) => writeln!(
                    self.output,
                    "Invalid sensitivity. Please enter a positive number (e.g. 0.8, 1.0)."
                )?,
            }
        }
    }
}
