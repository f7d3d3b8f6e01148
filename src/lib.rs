// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! US Address Parser
//!
//! Parses a single-line, free-form United States postal address into
//! normalized components: house number, directionals, street name, suffix,
//! secondary unit, city, state and ZIP.
//!
//! Parsing is purely pattern driven. There is no street database, so the
//! result is a convenience parse, not a validated delivery point.
//!
//! # Features
//!
//! - One grammar covering street, PO box and military (APO/FPO/DPO) addresses
//! - Grid-style, fractional, hyphenated and unit-attached house numbers
//! - USPS abbreviations for suffixes, directionals, states and unit designators
//! - Street-line-only parsing for callers that already split the address
//!
//! # Example
//!
//! ```rust
//! use us_address_parser::parse_address;
//!
//! let address = parse_address("1005 N Gravenstein Highway, Sebastopol, CA 95472").unwrap();
//!
//! assert_eq!(address.number(), "1005");
//! assert_eq!(address.suffix(), "HWY");
//! assert_eq!(address.street_line(), "1005 N GRAVENSTEIN HWY");
//! println!("{address}");
//! ```

mod config;
mod error;
mod grammar;
mod lexicon;
mod parser;
mod types;

pub use config::ParserConfig;
pub use error::{AddressError, Result};
pub use grammar::{DEFAULT_SIZE_LIMIT, Grammar, GrammarBuilder, GrammarKind};
pub use lexicon::{Lexicon, Lexicons, UnitLexicon, alternation, escape_literal};
pub use parser::{
    AddressParser, normalize_fields, normalize_value, parse_address, parse_address_line,
    parse_address_with,
};
pub use types::{AddressParseResult, Field, FieldSet};
