//! Core types for parsed addresses

use crate::error::AddressError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// One component of a US postal address
///
/// The variant names double as the capture-group names used inside the
/// grammar; [`Field::as_str`] is the only place that spelling lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Number,
    Predirectional,
    Street,
    StreetLine,
    Suffix,
    Postdirectional,
    City,
    State,
    Zip,
    SecondaryUnit,
    SecondaryNumber,
}

impl Field {
    /// Every field, in the order a street line is assembled followed by the place
    pub const ALL: [Self; 11] = [
        Self::Number,
        Self::Predirectional,
        Self::Street,
        Self::Suffix,
        Self::Postdirectional,
        Self::SecondaryUnit,
        Self::SecondaryNumber,
        Self::StreetLine,
        Self::City,
        Self::State,
        Self::Zip,
    ];

    /// Fields joined, in this order, to synthesize a street line
    pub const STREET_LINE_PARTS: [Self; 7] = [
        Self::Number,
        Self::Predirectional,
        Self::Street,
        Self::Suffix,
        Self::Postdirectional,
        Self::SecondaryUnit,
        Self::SecondaryNumber,
    ];

    /// Capture name used at the grammar boundary
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Predirectional => "Predirectional",
            Self::Street => "Street",
            Self::StreetLine => "StreetLine",
            Self::Suffix => "Suffix",
            Self::Postdirectional => "Postdirectional",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "Zip",
            Self::SecondaryUnit => "SecondaryUnit",
            Self::SecondaryNumber => "SecondaryNumber",
        }
    }

    /// Resolve a capture-group name, accepting the `<Field>_<n>` form the
    /// grammar builder uses to keep group names unique.
    #[must_use]
    pub fn from_group_name(name: &str) -> Option<Self> {
        let base = match name.rsplit_once('_') {
            Some((base, ordinal))
                if !ordinal.is_empty() && ordinal.bytes().all(|b| b.is_ascii_digit()) =>
            {
                base
            }
            _ => name,
        };
        base.parse().ok()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| AddressError::InvalidArgument(format!("unknown address field: {s}")))
    }
}

/// Captured values keyed by field
///
/// A field that did not take part in a match is absent, not present with an
/// empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet(BTreeMap<Field, String>);

impl FieldSet {
    /// Empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a field, returning the previous value if there was one
    pub fn insert(&mut self, field: Field, value: impl Into<String>) -> Option<String> {
        self.0.insert(field, value.into())
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of captured fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl FromIterator<(Field, String)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldSet {
    type Item = (Field, String);
    type IntoIter = std::collections::btree_map::IntoIter<Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A successfully parsed address
///
/// Every accessor returns an empty string for a component that was not
/// captured. The street line is derived from the components on first use
/// unless the grammar captured it directly (military and PO box addresses).
#[derive(Debug, Clone, Default)]
pub struct AddressParseResult {
    number: String,
    predirectional: String,
    street: String,
    suffix: String,
    postdirectional: String,
    secondary_unit: String,
    secondary_number: String,
    city: String,
    state: String,
    zip: String,
    captured_street_line: Option<String>,
    street_line: OnceLock<String>,
}

impl AddressParseResult {
    /// Build a result from captured (usually normalized) fields
    #[must_use]
    pub fn from_fields(fields: FieldSet) -> Self {
        let mut result = Self::default();
        for (field, value) in fields {
            let slot = match field {
                Field::Number => &mut result.number,
                Field::Predirectional => &mut result.predirectional,
                Field::Street => &mut result.street,
                Field::Suffix => &mut result.suffix,
                Field::Postdirectional => &mut result.postdirectional,
                Field::SecondaryUnit => &mut result.secondary_unit,
                Field::SecondaryNumber => &mut result.secondary_number,
                Field::City => &mut result.city,
                Field::State => &mut result.state,
                Field::Zip => &mut result.zip,
                Field::StreetLine => {
                    if !value.trim().is_empty() {
                        result.captured_street_line = Some(value);
                    }
                    continue;
                }
            };
            *slot = value;
        }
        result
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub fn predirectional(&self) -> &str {
        &self.predirectional
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn postdirectional(&self) -> &str {
        &self.postdirectional
    }

    #[must_use]
    pub fn secondary_unit(&self) -> &str {
        &self.secondary_unit
    }

    #[must_use]
    pub fn secondary_number(&self) -> &str {
        &self.secondary_number
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }

    /// First line of the mailing address
    ///
    /// Computed once and cached for the life of the result.
    #[must_use]
    pub fn street_line(&self) -> &str {
        self.street_line.get_or_init(|| {
            self.captured_street_line.as_ref().map_or_else(
                || {
                    Field::STREET_LINE_PARTS
                        .iter()
                        .flat_map(|field| self.get(*field).split_whitespace())
                        .collect::<Vec<_>>()
                        .join(" ")
                },
                Clone::clone,
            )
        })
    }

    /// Value of any field by tag
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Number => &self.number,
            Field::Predirectional => &self.predirectional,
            Field::Street => &self.street,
            Field::Suffix => &self.suffix,
            Field::Postdirectional => &self.postdirectional,
            Field::SecondaryUnit => &self.secondary_unit,
            Field::SecondaryNumber => &self.secondary_number,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Zip => &self.zip,
            Field::StreetLine => self.street_line(),
        }
    }

    /// Non-empty components as a field set
    ///
    /// `StreetLine` is included only when it was captured directly.
    #[must_use]
    pub fn fields(&self) -> FieldSet {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    Field::StreetLine => self.captured_street_line.as_deref()?,
                    other => self.get(other),
                };
                (!value.is_empty()).then(|| (field, value.to_string()))
            })
            .collect()
    }

    /// True when the match captured nothing at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

impl PartialEq for AddressParseResult {
    fn eq(&self, other: &Self) -> bool {
        Field::ALL
            .iter()
            .all(|field| self.get(*field) == other.get(*field))
    }
}

impl Eq for AddressParseResult {}

impl fmt::Display for AddressParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}, {}  {}",
            self.street_line(),
            self.city,
            self.state,
            self.zip
        )
    }
}

impl Serialize for AddressParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AddressParseResult", Field::ALL.len())?;
        for field in Field::ALL {
            state.serialize_field(field.as_str(), self.get(field))?;
        }
        state.end()
    }
}
