use crate::{Source, Style};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".caseconv.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target style when none is given on the command line
    pub style: Style,

    /// Treat every input as written in this style instead of guessing word
    /// boundaries from a mix of delimiters and case changes.
    pub from: Option<Style>,

    /// Batches at least this large are converted on the rayon pool
    pub parallel_threshold: usize,
}

/// One config file. Every key is optional, and any key that is present
/// overrides the layers below it, even when it repeats a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub style: Option<Style>,
    pub from: Option<Style>,
    pub parallel_threshold: Option<usize>,
}

fn default_parallel_threshold() -> usize {
    256
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::default(),
            from: None,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(style: Option<Style>, from: Option<Style>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                log::debug!("loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            log::debug!("loading local config from {}", local_path.display());
            config = config.merge(Self::from_file(&local_path)?);
        }

        if let Some(style) = style {
            config.style = style;
        }
        if from.is_some() {
            config.from = from;
        }

        if config.parallel_threshold == 0 {
            log::warn!("parallel_threshold must be at least 1, using 1");
            config.parallel_threshold = 1;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(style) = file.style {
            self.style = style;
        }
        if file.from.is_some() {
            self.from = file.from;
        }
        if let Some(threshold) = file.parallel_threshold {
            self.parallel_threshold = threshold;
        }
        self
    }

    pub fn source(&self) -> Source {
        self.from.into()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.style, Style::Camel);
        assert_eq!(config.from, None);
        assert_eq!(config.source(), Source::Jumbled);
        assert_eq!(config.parallel_threshold, 256);
    }

    fn parse(contents: &str) -> ConfigFile {
        toml::from_str(contents).unwrap()
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            from: Some(Style::Snake),
            ..Default::default()
        };

        let merged = base.merge(parse("style = \"kebab\""));
        assert_eq!(merged.style, Style::Kebab);
        assert_eq!(merged.from, Some(Style::Snake));
        assert_eq!(merged.source(), Source::Exact(Style::Snake));
    }

    #[test]
    fn test_local_values_equal_to_defaults_still_override() {
        let global = parse("style = \"snake\"\nparallel_threshold = 8");
        let local = parse("style = \"camel\"\nparallel_threshold = 256");

        let merged = Config::default().merge(global).merge(local);
        assert_eq!(merged.style, Style::Camel);
        assert_eq!(merged.parallel_threshold, 256);
    }

    #[test]
    fn test_missing_keys_keep_lower_layers() {
        let global = parse("style = \"kebab\"\nfrom = \"snake\"");
        let merged = Config::default().merge(global).merge(parse(""));
        assert_eq!(merged.style, Style::Kebab);
        assert_eq!(merged.from, Some(Style::Snake));
        assert_eq!(merged.parallel_threshold, 256);
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "style = \"SNAKE\"\nparallel_threshold = 8\n").unwrap();

        let file = Config::from_file(&path).unwrap();
        assert_eq!(file.style, Some(Style::Snake));
        assert_eq!(file.from, None);
        assert_eq!(file.parallel_threshold, Some(8));
    }

    #[test]
    fn test_from_file_rejects_unknown_style() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "style = \"pascal\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse config file"));
        assert!(message.contains("invalid case name: pascal"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempdir().unwrap();
        assert!(Config::from_file(&dir.path().join("absent.toml")).is_err());
    }
}
