use crate::case::{self, Source, Style};
use crate::{Config, Conversion, Guess};
use rayon::prelude::*;

/// Converts batches of identifiers with a fixed source rule and target style.
#[derive(Debug, Clone)]
pub struct Converter {
    source: Source,
    style: Style,
    parallel_threshold: usize,
}

impl Converter {
    pub fn new(config: &Config) -> Self {
        Self {
            source: config.source(),
            style: config.style,
            parallel_threshold: config.parallel_threshold.max(1),
        }
    }

    pub fn with_style(source: Source, style: Style) -> Self {
        Self {
            source,
            style,
            ..Self::new(&Config::default())
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn convert(&self, input: &str) -> String {
        case::convert(input, self.source, self.style)
    }

    /// Convert every input, keeping input order in the result.
    pub fn convert_all<S>(&self, inputs: &[S]) -> Vec<Conversion>
    where
        S: AsRef<str> + Sync,
    {
        self.map_batch(inputs, |input| Conversion {
            input: input.to_string(),
            output: self.convert(input),
            style: self.style,
        })
    }

    /// Guess the style of every input, keeping input order in the result.
    pub fn guess_all<S>(&self, inputs: &[S]) -> Vec<Guess>
    where
        S: AsRef<str> + Sync,
    {
        self.map_batch(inputs, |input| Guess {
            input: input.to_string(),
            style: case::guess(input),
        })
    }

    fn map_batch<S, T, F>(&self, inputs: &[S], f: F) -> Vec<T>
    where
        S: AsRef<str> + Sync,
        T: Send,
        F: Fn(&str) -> T + Sync + Send,
    {
        if inputs.len() >= self.parallel_threshold {
            log::debug!("processing {} inputs in parallel", inputs.len());
            inputs.par_iter().map(|input| f(input.as_ref())).collect()
        } else {
            inputs.iter().map(|input| f(input.as_ref())).collect()
        }
    }
}
