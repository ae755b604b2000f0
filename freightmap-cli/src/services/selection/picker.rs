//! Column pickers for interactive mapping

use anyhow::{Context, Result};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

/// Chooses, for one template field, which source column supplies it
pub trait ColumnPicker {
    /// Return the index into `columns` of the chosen column
    fn pick(&mut self, field: &str, columns: &[String]) -> Result<usize>;
}

/// Arrow-key selection on the terminal, defaulting to the first column
#[derive(Debug, Default)]
pub struct TerminalPicker;

impl ColumnPicker for TerminalPicker {
    fn pick(&mut self, field: &str, columns: &[String]) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Select column for {}", field))
            .items(columns)
            .default(0)
            .interact()
            .with_context(|| format!("Column selection for '{}' was interrupted", field))
    }
}

/// Answers picks from a fixed list of column names, in order
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    answers: Vec<String>,
    next: usize,
}

#[cfg(test)]
impl ScriptedPicker {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl ColumnPicker for ScriptedPicker {
    fn pick(&mut self, field: &str, columns: &[String]) -> Result<usize> {
        let answer = self
            .answers
            .get(self.next)
            .with_context(|| format!("No scripted answer left for '{}'", field))?;
        self.next += 1;

        match columns.iter().position(|c| c == answer) {
            Some(idx) => Ok(idx),
            None => anyhow::bail!("Scripted column '{}' for '{}' is not a source column", answer, field),
        }
    }
}
