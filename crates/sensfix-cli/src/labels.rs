//! Deciding which sensitivity a replay belongs to.

use std::io::{BufRead, Write};

use anyhow::Result;
use sensfix_core::{Sensitivity, SensitivityTable, sensitivity_from_file_name};
use tracing::debug;

use crate::prompter::Prompter;

/// Sources are tried in order: fixed value, config table, file name, prompt.
pub struct SensitivityResolver<R, W> {
    fixed: Option<Sensitivity>,
    table: SensitivityTable,
    from_name: bool,
    prompter: Option<Prompter<R, W>>,
}

impl<R: BufRead, W: Write> SensitivityResolver<R, W> {
    pub fn new(
        fixed: Option<Sensitivity>,
        table: SensitivityTable,
        from_name: bool,
        prompter: Option<Prompter<R, W>>,
    ) -> Self {
        Self {
            fixed,
            table,
            from_name,
            prompter,
        }
    }

    pub fn resolve(&mut self, file_name: &str) -> Result<Option<Sensitivity>> {
        if let Some(sens) = self.fixed {
            return Ok(Some(sens));
        }
        if let Some(sens) = self.table.get(file_name) {
            debug!("{}: sensitivity {} from config", file_name, sens);
            return Ok(Some(sens));
        }
        if self.from_name {
            if let Some(sens) = sensitivity_from_file_name(file_name) {
                debug!("{}: sensitivity {} from file name", file_name, sens);
                return Ok(Some(sens));
            }
        }
        match self.prompter.as_mut() {
            Some(prompter) => Ok(prompter.ask(file_name)?),
            None => Ok(None),
        }
    }
}
