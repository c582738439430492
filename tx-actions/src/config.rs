//! Read-only chain configuration consulted while rendering.

use std::{fs, path::Path};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::models::Chain;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read chain config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse chain config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Chain settings the renderer needs.
///
/// Only the native currency symbol is used: it names pool sides the decoder reports as
/// `"Ether"`. Without it those sides stay unnamed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainConfig {
    native_currency_symbol: Option<String>,
}

/// On-disk layout, e.g.
///
/// ```yaml
/// chain: bsc
/// native_currency_symbol: tBNB
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChainConfigFile {
    #[serde(default)]
    chain: Option<Chain>,
    #[serde(default)]
    native_currency_symbol: Option<String>,
}

impl From<ChainConfigFile> for ChainConfig {
    fn from(value: ChainConfigFile) -> Self {
        let symbol = value
            .native_currency_symbol
            .filter(|symbol| !symbol.is_empty())
            .or_else(|| {
                value
                    .chain
                    .map(|chain| chain.native_currency_symbol().to_string())
            });
        Self { native_currency_symbol: symbol }
    }
}

impl<'de> Deserialize<'de> for ChainConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ChainConfigFile::deserialize(deserializer).map(Into::into)
    }
}

impl ChainConfig {
    pub fn new(native_currency_symbol: Option<&str>) -> Self {
        Self {
            native_currency_symbol: native_currency_symbol
                .filter(|symbol| !symbol.is_empty())
                .map(str::to_string),
        }
    }

    pub fn for_chain(chain: Chain) -> Self {
        Self::new(Some(chain.native_currency_symbol()))
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn native_currency_symbol(&self) -> Option<&str> {
        self.native_currency_symbol.as_deref()
    }
}
