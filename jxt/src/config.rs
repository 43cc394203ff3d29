//! Configuration module for the jxt CLI.
//!
//! This module handles loading and managing configuration
//! settings for jxt: the colour theme used by `highlight`, the default
//! dump format of `tokens`, and the worker count for multi-file runs.

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use jsonata_lex::TokenKind;
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{JxtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "jxt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Number of inputs processed in parallel.
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Highlight-specific configuration.
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Colour for each token category.
    #[serde(default)]
    pub theme: Theme,

    /// Tokens-specific configuration.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Highlight-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightConfig {
    /// Emit ANSI colour sequences.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Tokens-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Default dump format.
    #[serde(default)]
    pub format: TokenFormat,
}

/// Output format of the `tokens` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    /// One tab-separated token per line.
    #[default]
    Text,
    /// A JSON array of token records.
    Json,
}

/// Terminal colours a theme can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    /// Leave the lexeme uncoloured.
    None,
    /// Standard black.
    Black,
    /// Standard red.
    Red,
    /// Standard green.
    Green,
    /// Standard yellow.
    Yellow,
    /// Standard blue.
    Blue,
    /// Standard magenta.
    Magenta,
    /// Standard cyan.
    Cyan,
    /// Standard white.
    White,
    /// Bright black.
    BrightBlack,
    /// Bright red.
    BrightRed,
    /// Bright green.
    BrightGreen,
    /// Bright yellow.
    BrightYellow,
    /// Bright blue.
    BrightBlue,
    /// Bright magenta.
    BrightMagenta,
    /// Bright cyan.
    BrightCyan,
    /// Bright white.
    BrightWhite,
}

impl Color {
    /// Returns the SGR foreground parameter, or `None` for no colour.
    pub fn sgr(self) -> Option<&'static str> {
        let code = match self {
            Color::None => return None,
            Color::Black => "30",
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::Cyan => "36",
            Color::White => "37",
            Color::BrightBlack => "90",
            Color::BrightRed => "91",
            Color::BrightGreen => "92",
            Color::BrightYellow => "93",
            Color::BrightBlue => "94",
            Color::BrightMagenta => "95",
            Color::BrightCyan => "96",
            Color::BrightWhite => "97",
        };
        Some(code)
    }
}

/// Colour per token category.
///
/// Error-qualified literals (`string error`, `number error`) use the
/// colour of their base category and are underlined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Theme {
    /// `true`, `false` and `null`.
    pub keyword: Color,
    /// Number literals.
    pub number: Color,
    /// `$name` variables.
    pub variable: Color,
    /// Symbolic and word operators.
    pub operator: Color,
    /// String literals and quoted names.
    pub string: Color,
    /// `$`, `$$` and built-in functions.
    pub builtin: Color,
    /// Bare field names.
    pub attribute: Color,
    /// Unrecognized characters.
    pub error: Color,
}

impl Theme {
    /// Returns the colour for a token category.
    pub fn color_for(&self, kind: TokenKind) -> Color {
        match kind.base() {
            TokenKind::Keyword => self.keyword,
            TokenKind::Number => self.number,
            TokenKind::Variable => self.variable,
            TokenKind::Operator => self.operator,
            TokenKind::String => self.string,
            TokenKind::Builtin => self.builtin,
            TokenKind::Attribute => self.attribute,
            _ => self.error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: Color::Magenta,
            number: Color::Cyan,
            variable: Color::Blue,
            operator: Color::Yellow,
            string: Color::Green,
            builtin: Color::BrightCyan,
            attribute: Color::None,
            error: Color::Red,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Number of parallel jobs, from the CPU count.
fn default_jobs() -> usize {
    get_num_cpus().max(1)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            jobs: default_jobs(),
            highlight: HighlightConfig::default(),
            theme: Theme::default(),
            tokens: TokensConfig::default(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JxtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| JxtError::Config(format!("Failed to parse configuration: {}", e)))?;

        if config.jobs == 0 {
            return Err(JxtError::Config("jobs must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("jxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("jxt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
