use crate::{Conversion, Guess};
use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Text rendering knobs shared by all printers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    pub colored: bool,
    pub show_input: bool,
}

pub fn write_conversions<W: Write>(
    out: &mut W,
    conversions: &[Conversion],
    options: TextOptions,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for conversion in conversions {
                let line = format_pair(&conversion.input, &conversion.output, options);
                writeln!(out, "{}", line).context("Failed to write output")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, conversions),
    }
}

pub fn write_guesses<W: Write>(
    out: &mut W,
    guesses: &[Guess],
    options: TextOptions,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for guess in guesses {
                let line = format_pair(&guess.input, guess.style.name(), options);
                writeln!(out, "{}", line).context("Failed to write output")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, guesses),
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, items: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, items).context("Failed to serialize output")?;
    writeln!(out).context("Failed to write output")?;
    Ok(())
}

fn format_pair(input: &str, result: &str, options: TextOptions) -> String {
    match (options.show_input, options.colored) {
        (true, true) => format!("{} {} {}", input.dimmed(), "→".dimmed(), result.green().bold()),
        (true, false) => format!("{} → {}", input, result),
        (false, true) => result.green().to_string(),
        (false, false) => result.to_string(),
    }
}
