//! Address parser and normalization

use crate::config::ParserConfig;
use crate::error::Result;
use crate::grammar::Grammar;
use crate::lexicon::Lexicons;
use crate::types::{AddressParseResult, Field, FieldSet};
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, trace};

// Anything that is not a word character, whitespace, / - # or &
static STRAY_PUNCTUATION: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"[^\w\s/\-\#&]").unwrap());

static DEFAULT_PARSER: std::sync::LazyLock<AddressParser> =
    std::sync::LazyLock::new(|| AddressParser::new().unwrap());

/// Parse a full address line with the default parser, normalizing the result
#[must_use]
pub fn parse_address(input: &str) -> Option<AddressParseResult> {
    DEFAULT_PARSER.parse_address(input)
}

/// Parse a full address line with the default parser
#[must_use]
pub fn parse_address_with(input: &str, normalize: bool) -> Option<AddressParseResult> {
    DEFAULT_PARSER.parse_address_with(input, normalize)
}

/// Parse a street line (no city, state or ZIP) with the default parser
#[must_use]
pub fn parse_address_line(input: &str, normalize: bool) -> Option<AddressParseResult> {
    DEFAULT_PARSER.parse_address_line(input, normalize)
}

/// Parses US addresses against a fixed vocabulary
///
/// Both grammars are compiled when the parser is built, so a parser can be
/// shared across threads and reused without further setup.
#[derive(Debug, Clone)]
pub struct AddressParser {
    lexicons: Lexicons,
    address: Grammar,
    street_line: Grammar,
}

impl AddressParser {
    /// Parser over the standard USPS vocabulary
    pub fn new() -> Result<Self> {
        Self::with_config(&ParserConfig::default())
    }

    /// Parser built from configuration
    pub fn with_config(config: &ParserConfig) -> Result<Self> {
        Self::with_lexicons(config.lexicons()?, config.size_limit)
    }

    /// Parser over caller-supplied lexicons
    pub fn with_lexicons(lexicons: Lexicons, size_limit: usize) -> Result<Self> {
        let address = Grammar::address(&lexicons, size_limit)?;
        let street_line = Grammar::street_line(&lexicons, size_limit)?;
        Ok(Self {
            lexicons,
            address,
            street_line,
        })
    }

    /// Vocabulary used to build the grammars and normalize captures
    #[must_use]
    pub const fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Compiled full-address grammar
    #[must_use]
    pub const fn address_grammar(&self) -> &Grammar {
        &self.address
    }

    /// Compiled street-line grammar
    #[must_use]
    pub const fn street_line_grammar(&self) -> &Grammar {
        &self.street_line
    }

    /// Parse a full address, normalizing the result
    #[must_use]
    pub fn parse_address(&self, input: &str) -> Option<AddressParseResult> {
        self.parse_with(&self.address, input, true)
    }

    /// Parse a full address
    ///
    /// With `normalize` set the input is upper-cased and every captured
    /// value is canonicalized; otherwise captures are returned verbatim.
    #[must_use]
    pub fn parse_address_with(&self, input: &str, normalize: bool) -> Option<AddressParseResult> {
        self.parse_with(&self.address, input, normalize)
    }

    /// Parse a street line that has already been separated from the place
    #[must_use]
    pub fn parse_address_line(&self, input: &str, normalize: bool) -> Option<AddressParseResult> {
        self.parse_with(&self.street_line, input, normalize)
    }

    /// Parse with any grammar, using this parser's vocabulary to normalize
    #[must_use]
    pub fn parse_with(
        &self,
        grammar: &Grammar,
        input: &str,
        normalize: bool,
    ) -> Option<AddressParseResult> {
        if input.trim().is_empty() {
            debug!("Rejected blank address input");
            return None;
        }

        let subject = if normalize {
            Cow::Owned(input.to_uppercase())
        } else {
            Cow::Borrowed(input)
        };

        let Some((fields, branch)) = grammar.capture(&subject) else {
            debug!("No {} match for: {}", grammar.kind(), input);
            return None;
        };

        debug!(
            "Parsed {} via {} branch, {} fields",
            grammar.kind(),
            branch.unwrap_or("unlabeled"),
            fields.len()
        );

        let fields = if normalize {
            normalize_fields(fields, &self.lexicons)
        } else {
            fields
        };

        Some(AddressParseResult::from_fields(fields))
    }
}

/// Canonicalize one captured value
///
/// Stray punctuation is dropped and the value trimmed; directionals, suffixes,
/// states and unit designators are then mapped to their USPS abbreviations.
/// Values with no mapping pass through.
#[must_use]
pub fn normalize_value(field: Field, raw: &str, lexicons: &Lexicons) -> String {
    let cleaned = STRAY_PUNCTUATION.replace_all(raw, "");
    let cleaned = cleaned.trim();

    match field {
        Field::Predirectional | Field::Postdirectional => lexicons
            .directionals()
            .lookup(cleaned)
            .unwrap_or(cleaned)
            .to_string(),
        Field::Suffix => lexicons
            .suffixes()
            .lookup(cleaned)
            .unwrap_or(cleaned)
            .to_string(),
        Field::State => lexicons
            .states()
            .lookup(cleaned)
            .unwrap_or(cleaned)
            .to_string(),
        Field::SecondaryUnit => lexicons
            .lookup_unit(cleaned)
            .unwrap_or(cleaned)
            .to_string(),
        // grid numbers lose their inner space, fractions keep it
        Field::Number if !cleaned.contains('/') => cleaned.split_whitespace().collect(),
        _ => cleaned.to_string(),
    }
}

/// Canonicalize every captured value
///
/// A unit number with no designator (`403D`) is taken to be an apartment.
#[must_use]
pub fn normalize_fields(fields: FieldSet, lexicons: &Lexicons) -> FieldSet {
    let mut normalized: FieldSet = fields
        .into_iter()
        .map(|(field, raw)| {
            let value = normalize_value(field, &raw, lexicons);
            if value != raw {
                trace!("Normalized {}: {:?} -> {:?}", field, raw, value);
            }
            (field, value)
        })
        .collect();

    let unit_missing = normalized
        .get(Field::SecondaryUnit)
        .is_none_or(|unit| unit.trim().is_empty());
    if normalized.contains(Field::SecondaryNumber) && unit_missing {
        trace!("Assumed APT for unit number without designator");
        normalized.insert(Field::SecondaryUnit, "APT");
    }

    normalized
}
