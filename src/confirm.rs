//! Confirmation gating for mutating operations
//!
//! The dispatcher calls this before a mutating request is constructed;
//! declining means no request is ever issued. `--force` bypasses the
//! prompt.

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Ask the operator to confirm a mutating operation
///
/// Returns `Ok(true)` when the operation may proceed. The prompt goes
/// to stderr so piped stdout stays clean.
pub fn confirm_proceed(force: bool, target: &str, action: &str) -> Result<bool> {
    if force {
        return Ok(true);
    }
    confirm_with(&mut io::stdin().lock(), &mut io::stderr(), target, action)
}

/// Render the target identifiers shown in the prompt
pub fn describe_target(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn confirm_with(
    input: &mut impl BufRead,
    output: &mut impl Write,
    target: &str,
    action: &str,
) -> Result<bool> {
    if target.is_empty() {
        write!(output, "{action}\nProceed? [y/N]: ")?;
    } else {
        write!(output, "{action} on {target}\nProceed? [y/N]: ")?;
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
