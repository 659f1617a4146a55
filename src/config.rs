//! Configuration for the `blochsim` binary.
//!
//! ```toml
//! qubits = 3
//!
//! [notation]
//! tolerance = 1e-6
//! ket_decimals = 2
//! vector_decimals = 3
//! ```
//!
//! Every key is optional; missing keys take their defaults.
use crate::core::state::MAX_QUBITS;
use crate::error::{Error, Result};
use crate::notation::NotationStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Register size for `demo` when no script is given.
    pub qubits: usize,
    pub notation: NotationStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self { qubits: 2, notation: NotationStyle::default() }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// `from_file` when a path is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_QUBITS).contains(&self.qubits) {
            return Err(Error::Config(format!(
                "qubits = {} is outside 1..={MAX_QUBITS}",
                self.qubits
            )));
        }
        let tol = self.notation.tolerance;
        if !(tol.is_finite() && tol > 0.0) {
            return Err(Error::Config(format!("notation.tolerance = {tol} must be positive")));
        }
        if self.notation.ket_decimals > 12 || self.notation.vector_decimals > 12 {
            return Err(Error::Config("notation decimals must be at most 12".into()));
        }
        Ok(())
    }
}
