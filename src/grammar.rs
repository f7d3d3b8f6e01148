//! Address grammar construction
//!
//! The grammar is one free-spacing pattern assembled from the lexical tables.
//! Every capture group is named `<Field>_<n>`: the same field is captured in
//! several alternatives and group names have to be unique, so the ordinal is
//! stripped again when the match is read back.

use crate::error::{AddressError, Result};
use crate::lexicon::{Lexicons, alternation};
use crate::types::{Field, FieldSet};
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// Compiled-pattern budget used unless configured otherwise
pub const DEFAULT_SIZE_LIMIT: usize = 64 * (1 << 20);

const ZIP: &str = r"\d{5}(?:-?\d{4})?";

/// Which pattern a grammar was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarKind {
    /// Street line, city, state and ZIP
    Address,
    /// Street line only
    StreetLine,
    /// Caller-supplied pattern
    Custom,
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => write!(f, "address"),
            Self::StreetLine => write!(f, "street-line"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Default)]
struct GroupNamer {
    next: BTreeMap<Field, usize>,
}

impl GroupNamer {
    fn group(&mut self, field: Field, body: &str) -> String {
        let ordinal = self.next.entry(field).or_insert(0);
        *ordinal += 1;
        format!("(?<{field}_{ordinal}>{body})")
    }
}

/// Composes the sub-patterns of the address grammar
///
/// Each call hands out fresh group names, so one builder can produce both
/// the full-address and the street-line pattern.
#[derive(Debug)]
pub struct GrammarBuilder {
    directional: String,
    suffix: String,
    state: String,
    ranged_unit: String,
    rangeless_unit: String,
    names: GroupNamer,
}

impl GrammarBuilder {
    /// Precompute the lexicon alternations the sub-patterns share
    #[must_use]
    pub fn new(lexicons: &Lexicons) -> Self {
        let directionals = lexicons.directionals();
        // N.E. is matched as N.E so the closing dot falls outside the word
        // boundary and is skipped like any other punctuation
        let dotted = directionals.canonicals().into_iter().map(|abbr| {
            abbr.chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(".")
        });
        let directional_forms: Vec<String> = directionals
            .surface_forms()
            .into_iter()
            .map(str::to_string)
            .chain(dotted)
            .collect();

        Self {
            directional: alternation(directional_forms),
            suffix: lexicons.suffixes().alternation(),
            state: format!(r"\b(?:{})\b", lexicons.states().alternation()),
            ranged_unit: lexicons.ranged_units().alternation(),
            rangeless_unit: lexicons.rangeless_units().alternation(),
            names: GroupNamer::default(),
        }
    }

    fn group(&mut self, field: Field, body: &str) -> String {
        self.names.group(field, body)
    }

    /// House number, tried as unit-attached, fractional, plain, then grid
    pub fn number(&mut self) -> String {
        let attached_number = self.group(Field::Number, r"\d+");
        let attached_unit = self.group(Field::SecondaryNumber, r"-[0-9]|-?[A-Z]");
        let fractional = self.group(Field::Number, r"\d+[\-\ ]?\d+/\d+");
        let plain = self.group(Field::Number, r"\d+-?\d*");
        let grid = self.group(Field::Number, r"[NSWE]\ ?\d+\ ?[NSWE]\ ?\d+");

        format!(
            r"
            (?:
                # 403D: unit letter attached to the number
                (?: {attached_number} {attached_unit} \b )
              | # 123 1/2
                {fractional}
              | # 123, or Queens-style 72-10
                {plain}
              | # Wisconsin/Illinois grid: N6W23001, N645 W23001
                {grid}
            )
            "
        )
    }

    /// Street name with its directionals and suffix
    ///
    /// Alternatives are tried in order and the order decides ambiguous
    /// input such as `SOUTH ST` (a street named South, not a predirectional).
    pub fn street(&mut self) -> String {
        let dir = self.directional.clone();
        let suffix = self.suffix.clone();

        let named_direction = self.group(Field::Street, &dir);
        let named_direction_suffix = self.group(Field::Suffix, &suffix);

        let route_pre = self.group(Field::Predirectional, &dir);
        let route_name = self.group(
            Field::Street,
            r"(?:
                COUNTY\ (?:ROAD|RD|HIGHWAY|HWY|ROUTE|RTE)\ (?:\d+[A-Z]?|[A-Z]{1,2})
              | STATE\ (?:ROAD|RD|HIGHWAY|HWY|ROUTE|RTE)\ \d+[A-Z]?
              | (?:US\ )?(?:HIGHWAY|HWY|ROUTE|RTE)\ \d+[A-Z]?
              | AVE(?:NUE)?\ (?:\d+|[A-Z])
            )\b",
        );
        let route_post = self.group(Field::Postdirectional, &dir);

        let pre = self.group(Field::Predirectional, &dir);

        let grid_name = self.group(Field::Street, r"[^,]*\d");
        let grid_post = self.group(Field::Postdirectional, &dir);

        let suffixed_name = self.group(Field::Street, r"[^,]+");
        let suffixed_suffix = self.group(Field::Suffix, &suffix);
        let suffixed_post = self.group(Field::Postdirectional, &dir);

        let loose_name = self.group(Field::Street, r"[^,]+?");
        let loose_suffix = self.group(Field::Suffix, &suffix);
        let loose_post = self.group(Field::Postdirectional, &dir);

        format!(
            r"
            (?:
                # 100 SOUTH STREET: the direction is the name
                (?: {named_direction} \W+ {named_direction_suffix} \b )
              | # COUNTY ROAD 12, HIGHWAY 9, AVENUE B: suffix word leads the name
                (?:
                    (?: {route_pre} \W+ )?
                    {route_name}
                    (?: [^\w,]+ {route_post} \b )?
                )
              | (?: {pre} \W+ )?
                (?:
                    # grid street: 1700 S
                    {grid_name}
                    (?: [^\w,]* {grid_post} \b )
                  |
                    {suffixed_name}
                    (?: [^\w,]+ {suffixed_suffix} \b )
                    (?: [^\w,]+ {suffixed_post} \b )?
                  | # anything else, suffix optional
                    {loose_name}
                    (?: [^\w,]+ {loose_suffix} \b )?
                    (?: [^\w,]+ {loose_post} \b )?
                )
            )
            "
        )
    }

    /// Secondary unit designator and number
    pub fn secondary_unit(&mut self) -> String {
        let ranged = self.ranged_unit.clone();
        let rangeless = self.rangeless_unit.clone();

        let ranged_unit = self.group(Field::SecondaryUnit, &ranged);
        let separated_number = self.group(Field::SecondaryNumber, r"[\w-]+");
        let joined_number = self.group(Field::SecondaryNumber, r"[0-9][\w-]*");
        let hash_unit = self.group(Field::SecondaryUnit, r"\#");
        let hash_number = self.group(Field::SecondaryNumber, r"[\w-]+");
        let rangeless_unit = self.group(Field::SecondaryUnit, &rangeless);

        format!(
            r"
            (?:
                # APT 4, STE-200, RM12; never the start of a longer word
                (?: {ranged_unit} (?: \W+ {separated_number} | {joined_number} ) )
              | (?: {hash_unit} \W* {hash_number} )
              | (?: {rangeless_unit} \b )
            ),?
            "
        )
    }

    /// Optional city and state followed by an optional ZIP
    pub fn place(&mut self) -> String {
        let state = self.state.clone();
        let city = self.group(Field::City, r"[^\d,]+?");
        let state = self.group(Field::State, &state);
        let zip = self.group(Field::Zip, ZIP);

        format!(
            r"
            (?: {city} \W+ {state} \W* )?
            (?: {zip} )?
            "
        )
    }

    fn po_box(&mut self) -> String {
        self.group(
            Field::StreetLine,
            r"(?:P[\.\ ]?O[\.\ ]?\ )?BOX\ [0-9]+",
        )
    }

    /// Full address: military, PO box, then general street address
    pub fn address_pattern(&mut self) -> String {
        let military_line = self.group(Field::StreetLine, ".+?");
        let military_city = self.group(Field::City, "[AFD]PO");
        let military_state = self.group(Field::State, "A[AEP]");
        let military_zip = self.group(Field::Zip, ZIP);

        let po_box = self.po_box();
        let po_box_place = self.place();

        let number = self.number();
        let street = self.street();
        let secondary = self.secondary_unit();
        let place = self.place();

        format!(
            r"
            ^
            (?:
                # APO/FPO/DPO: everything before the city is the street line
                (?<Military>
                    [^\w\#]*
                    {military_line}
                    {military_city} \W+
                    {military_state} \W+
                    {military_zip}
                    \W*
                )
              |
                (?<PostOfficeBox>
                    \W*
                    {po_box} \W+
                    {po_box_place}
                    \W*
                )
              |
                (?<StreetAddress>
                    [^\w\#]*    # skip leading punctuation, but not a unit hash
                    {number} \W*
                    {street} \W+
                    (?: {secondary} \W+ )?
                    {place}
                    \W*
                )
            )
            $
            "
        )
    }

    /// Street line only: PO box, or number, street and secondary unit
    pub fn street_line_pattern(&mut self) -> String {
        let po_box = self.po_box();
        let number = self.number();
        let street = self.street();
        let secondary = self.secondary_unit();

        format!(
            r"
            ^
            (?:
                (?<PostOfficeBox>
                    \W*
                    {po_box}
                    \W*
                )
              |
                (?<StreetAddress>
                    [^\w\#]*
                    {number} \W*
                    {street}
                    (?: \W+ {secondary} )?
                    \W*
                )
            )
            $
            "
        )
    }
}

/// A compiled pattern plus the fields its groups capture
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Grammar {
    kind: GrammarKind,
    regex: Regex,
    slots: Vec<(usize, Field)>,
    branches: Vec<(usize, String)>,
}

impl Grammar {
    /// Full-address grammar over the given vocabulary
    pub fn address(lexicons: &Lexicons, size_limit: usize) -> Result<Self> {
        let pattern = GrammarBuilder::new(lexicons).address_pattern();
        Self::compile(GrammarKind::Address, &pattern, size_limit)
    }

    /// Street-line-only grammar over the given vocabulary
    pub fn street_line(lexicons: &Lexicons, size_limit: usize) -> Result<Self> {
        let pattern = GrammarBuilder::new(lexicons).street_line_pattern();
        Self::compile(GrammarKind::StreetLine, &pattern, size_limit)
    }

    /// Compile a caller-supplied pattern
    ///
    /// Named groups are read as fields (`Street` or `Street_2`); other named
    /// groups only label the branch that matched.
    pub fn custom(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(AddressError::InvalidArgument(
                "grammar pattern must not be blank".into(),
            ));
        }
        let grammar = Self::compile(GrammarKind::Custom, pattern, DEFAULT_SIZE_LIMIT)?;
        if grammar.slots.is_empty() {
            return Err(AddressError::InvalidArgument(
                "grammar pattern captures no address fields".into(),
            ));
        }
        Ok(grammar)
    }

    fn compile(kind: GrammarKind, pattern: &str, size_limit: usize) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .ignore_whitespace(true)
            .dot_matches_new_line(true)
            .size_limit(size_limit)
            .dfa_size_limit(size_limit)
            .build()?;

        let mut slots = Vec::new();
        let mut branches = Vec::new();
        for (index, name) in regex.capture_names().enumerate() {
            let Some(name) = name else { continue };
            match Field::from_group_name(name) {
                Some(field) => slots.push((index, field)),
                None => branches.push((index, name.to_string())),
            }
        }

        debug!(
            "Compiled {} grammar: {} pattern bytes, {} field captures",
            kind,
            pattern.len(),
            slots.len()
        );

        Ok(Self {
            kind,
            regex,
            slots,
            branches,
        })
    }

    /// Which pattern this grammar was built from
    #[must_use]
    pub const fn kind(&self) -> GrammarKind {
        self.kind
    }

    /// Pattern source the grammar was compiled from
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Fields this grammar can capture
    #[must_use]
    pub fn fields(&self) -> BTreeSet<Field> {
        self.slots.iter().map(|(_, field)| *field).collect()
    }

    /// Run the grammar and collect the fields that took part in the match
    ///
    /// Returns `None` when the input does not match. The label of the
    /// top-level branch that matched is returned alongside, when the pattern
    /// names one.
    #[must_use]
    pub fn capture(&self, input: &str) -> Option<(FieldSet, Option<&str>)> {
        let caps = self.regex.captures(input)?;

        let mut fields = FieldSet::new();
        for (index, field) in &self.slots {
            if let Some(m) = caps.get(*index)
                && !fields.contains(*field)
            {
                fields.insert(*field, m.as_str());
            }
        }

        let branch = self
            .branches
            .iter()
            .find(|(index, _)| caps.get(*index).is_some())
            .map(|(_, name)| name.as_str());

        Some((fields, branch))
    }
}
