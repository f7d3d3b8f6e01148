//! Parser configuration

use crate::error::Result;
use crate::grammar::DEFAULT_SIZE_LIMIT;
use crate::lexicon::Lexicons;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options applied when a parser is built
///
/// Everything here is consumed before the grammar is compiled; a built
/// parser cannot be reconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Additional street suffix spellings, mapped to their canonical form
    pub extra_suffixes: BTreeMap<String, String>,

    /// Size budget for each compiled grammar, in bytes
    pub size_limit: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            extra_suffixes: BTreeMap::new(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

impl ParserConfig {
    /// Decode configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register an extra suffix spelling
    #[must_use]
    pub fn with_suffix(mut self, spelling: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.extra_suffixes.insert(spelling.into(), canonical.into());
        self
    }

    /// Standard lexicons extended with the configured suffixes
    pub fn lexicons(&self) -> Result<Lexicons> {
        self.extra_suffixes
            .iter()
            .try_fold(Lexicons::standard(), |lexicons, (spelling, canonical)| {
                lexicons.with_suffix(spelling, canonical)
            })
    }
}
