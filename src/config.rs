use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lokalrc.json";

/// How the hook-injection variant is chosen for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncMode {
    /// A file-level `"use client"` directive forces the synchronous hook;
    /// otherwise the component function's own `async` flag decides.
    #[default]
    Directive,
    /// Every component gets the synchronous hook.
    AllSync,
    /// Every component gets the awaited hook and is forced async.
    AllAsync,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for files the pipeline must leave untouched.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    /// When true, files without a `"use i18n"` directive are not modified.
    #[serde(default)]
    pub directive_required: bool,
    #[serde(default)]
    pub sync_mode: SyncMode,
    /// Root directory the caller strips to produce relative file paths.
    #[serde(default = "default_source_root")]
    pub source_root: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_patterns: Vec::new(),
            directive_required: false,
            sync_mode: SyncMode::default(),
            source_root: default_source_root(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `skipPatterns` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.skip_patterns {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'skipPatterns': \"{}\"", pattern)
            })?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
