//! Runtime configuration.
//!
//! Configuration is grouped by concern. Every field has a default, so a TOML
//! file only needs the keys it changes:
//!
//! ```toml
//! [evolution]
//! max_generations = 64
//!
//! [arithmetic]
//! max_iterations = 4096
//!
//! [display]
//! show_evolving = true
//! delay_ms = 250
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bound on each arithmetic loop's remaining-operand counter.
pub const DEFAULT_MAX_ITERATIONS: usize = 1 << 16;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutomataConfig {
    /// Evolution loop settings.
    pub evolution: EvolutionConfig,
    /// Arithmetic layer settings.
    pub arithmetic: ArithmeticConfig,
    /// Presentation settings for the binaries.
    pub display: DisplayConfig,
}

/// Evolution loop settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Generation cap per automaton run. `None` uses
    /// [`default_generation_cap`](crate::default_generation_cap).
    pub max_generations: Option<usize>,
}

/// Arithmetic layer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArithmeticConfig {
    /// Maximum iterations of any single `add` / `prod` / `exp` loop.
    pub max_iterations: usize,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Presentation settings, read only by the binaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Print every generation, not just the final one.
    pub show_evolving: bool,
    /// Pause between printed generations, in milliseconds.
    pub delay_ms: u64,
}

/// Failure to load a configuration file.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for [`AutomataConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(feature = "serde")]
impl AutomataConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document does not match.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it does not parse.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}
