pub mod output;

use anyhow::{Context, Result};
use std::io::BufRead;

/// Read one input per line, skipping blank lines.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}
