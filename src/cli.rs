pub mod command;
pub mod run;
pub mod shell;

use crate::errors::AppError;
use std::io::{BufRead, Write};

pub use run::run_app;

// INPUT FUNCTIONS

/// Reads one trimmed line. `None` means the input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn get_input_to_lower<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    Ok(get_input(input)?.map(|line| line.to_lowercase()))
}

// OUTPUT FUNCTIONS

pub fn prompt<W: Write>(output: &mut W, label: &str) -> Result<(), AppError> {
    write!(output, "{label}\n> ")?;
    output.flush()?;
    Ok(())
}

pub fn confirm_action<W: Write>(output: &mut W, action: &str) -> Result<(), AppError> {
    write!(output, "\nAre you sure you want to {action}? (y/n)\n> ")?;
    output.flush()?;
    Ok(())
}
