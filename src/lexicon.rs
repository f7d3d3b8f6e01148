//! Lexical tables: directionals, states, street suffixes and secondary units
//!
//! Each table maps the spellings found in the wild to the USPS abbreviation.
//! Tables are built once and only read afterwards; the one extension point
//! ([`Lexicons::with_suffix`]) consumes the value, so it can only run before a
//! grammar is compiled from it.

use crate::error::{AddressError, Result};
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};

const DIRECTIONALS: &[(&str, &str)] = &[
    ("NORTH", "N"),
    ("NORTHEAST", "NE"),
    ("EAST", "E"),
    ("SOUTHEAST", "SE"),
    ("SOUTH", "S"),
    ("SOUTHWEST", "SW"),
    ("WEST", "W"),
    ("NORTHWEST", "NW"),
];

const STATES: &[(&str, &str)] = &[
    ("ALABAMA", "AL"),
    ("ALASKA", "AK"),
    ("AMERICAN SAMOA", "AS"),
    ("ARIZONA", "AZ"),
    ("ARKANSAS", "AR"),
    ("CALIFORNIA", "CA"),
    ("COLORADO", "CO"),
    ("CONNECTICUT", "CT"),
    ("DELAWARE", "DE"),
    ("DISTRICT OF COLUMBIA", "DC"),
    ("FEDERATED STATES OF MICRONESIA", "FM"),
    ("FLORIDA", "FL"),
    ("GEORGIA", "GA"),
    ("GUAM", "GU"),
    ("HAWAII", "HI"),
    ("IDAHO", "ID"),
    ("ILLINOIS", "IL"),
    ("INDIANA", "IN"),
    ("IOWA", "IA"),
    ("KANSAS", "KS"),
    ("KENTUCKY", "KY"),
    ("LOUISIANA", "LA"),
    ("MAINE", "ME"),
    ("MARSHALL ISLANDS", "MH"),
    ("MARYLAND", "MD"),
    ("MASSACHUSETTS", "MA"),
    ("MICHIGAN", "MI"),
    ("MINNESOTA", "MN"),
    ("MISSISSIPPI", "MS"),
    ("MISSOURI", "MO"),
    ("MONTANA", "MT"),
    ("NEBRASKA", "NE"),
    ("NEVADA", "NV"),
    ("NEW HAMPSHIRE", "NH"),
    ("NEW JERSEY", "NJ"),
    ("NEW MEXICO", "NM"),
    ("NEW YORK", "NY"),
    ("NORTH CAROLINA", "NC"),
    ("NORTH DAKOTA", "ND"),
    ("NORTHERN MARIANA ISLANDS", "MP"),
    ("OHIO", "OH"),
    ("OKLAHOMA", "OK"),
    ("OREGON", "OR"),
    ("PALAU", "PW"),
    ("PENNSYLVANIA", "PA"),
    ("PUERTO RICO", "PR"),
    ("RHODE ISLAND", "RI"),
    ("SOUTH CAROLINA", "SC"),
    ("SOUTH DAKOTA", "SD"),
    ("TENNESSEE", "TN"),
    ("TEXAS", "TX"),
    ("UTAH", "UT"),
    ("VERMONT", "VT"),
    ("VIRGIN ISLANDS", "VI"),
    ("VIRGINIA", "VA"),
    ("WASHINGTON", "WA"),
    ("WEST VIRGINIA", "WV"),
    ("WISCONSIN", "WI"),
    ("WYOMING", "WY"),
];

// USPS Publication 28, Appendix C1: canonical abbreviation, then every
// spelling that maps to it.
const STREET_SUFFIXES: &[(&str, &[&str])] = &[
    ("ALY", &["ALLEE", "ALLEY", "ALLY", "ALY"]),
    ("ANX", &["ANEX", "ANNEX", "ANNX", "ANX"]),
    ("ARC", &["ARC", "ARCADE"]),
    ("AVE", &["AV", "AVE", "AVEN", "AVENU", "AVENUE", "AVN", "AVNUE"]),
    ("BYU", &["BAYOO", "BAYOU"]),
    ("BCH", &["BCH", "BEACH"]),
    ("BND", &["BEND", "BND"]),
    ("BLF", &["BLF", "BLUF", "BLUFF"]),
    ("BLFS", &["BLUFFS"]),
    ("BTM", &["BOT", "BTM", "BOTTM", "BOTTOM"]),
    ("BLVD", &["BLVD", "BOUL", "BOULEVARD", "BOULV"]),
    ("BR", &["BR", "BRNCH", "BRANCH"]),
    ("BRG", &["BRDGE", "BRG", "BRIDGE"]),
    ("BRK", &["BRK", "BROOK"]),
    ("BRKS", &["BROOKS"]),
    ("BG", &["BURG"]),
    ("BGS", &["BURGS"]),
    ("BYP", &["BYP", "BYPA", "BYPAS", "BYPASS", "BYPS"]),
    ("CP", &["CAMP", "CP", "CMP"]),
    ("CYN", &["CANYN", "CANYON", "CNYN"]),
    ("CPE", &["CAPE", "CPE"]),
    ("CSWY", &["CAUSEWAY", "CAUSWA", "CSWY"]),
    ("CTR", &["CEN", "CENT", "CENTER", "CENTR", "CENTRE", "CNTER", "CNTR", "CTR"]),
    ("CTRS", &["CENTERS"]),
    ("CIR", &["CIR", "CIRC", "CIRCL", "CIRCLE", "CRCL", "CRCLE"]),
    ("CIRS", &["CIRCLES"]),
    ("CLF", &["CLF", "CLIFF"]),
    ("CLFS", &["CLFS", "CLIFFS"]),
    ("CLB", &["CLB", "CLUB"]),
    ("CMN", &["COMMON"]),
    ("CMNS", &["COMMONS"]),
    ("COR", &["COR", "CORNER"]),
    ("CORS", &["CORNERS", "CORS"]),
    ("CRSE", &["COURSE", "CRSE"]),
    ("CT", &["COURT", "CT"]),
    ("CTS", &["COURTS", "CTS"]),
    ("CV", &["COVE", "CV"]),
    ("CVS", &["COVES"]),
    ("CRK", &["CREEK", "CRK"]),
    ("CRES", &["CRESCENT", "CRES", "CRSENT", "CRSNT"]),
    ("CRST", &["CREST"]),
    ("XING", &["CROSSING", "CRSSNG", "XING"]),
    ("XRD", &["CROSSROAD"]),
    ("XRDS", &["CROSSROADS"]),
    ("CURV", &["CURVE"]),
    ("DL", &["DALE", "DL"]),
    ("DM", &["DAM", "DM"]),
    ("DV", &["DIV", "DIVIDE", "DV", "DVD"]),
    ("DR", &["DR", "DRIV", "DRIVE", "DRV"]),
    ("DRS", &["DRIVES"]),
    ("EST", &["EST", "ESTATE"]),
    ("ESTS", &["ESTATES", "ESTS"]),
    ("EXPY", &["EXP", "EXPR", "EXPRESS", "EXPRESSWAY", "EXPW", "EXPY"]),
    ("EXT", &["EXT", "EXTENSION", "EXTN", "EXTNSN"]),
    ("EXTS", &["EXTENSIONS"]),
    ("FALL", &["FALL"]),
    ("FLS", &["FALLS", "FLS"]),
    ("FRY", &["FERRY", "FRRY", "FRY"]),
    ("FLD", &["FIELD", "FLD"]),
    ("FLDS", &["FIELDS", "FLDS"]),
    ("FLT", &["FLAT", "FLT"]),
    ("FLTS", &["FLATS", "FLTS"]),
    ("FRD", &["FORD", "FRD"]),
    ("FRDS", &["FORDS"]),
    ("FRST", &["FOREST", "FORESTS", "FRST"]),
    ("FRG", &["FORG", "FORGE", "FRG"]),
    ("FRGS", &["FORGES"]),
    ("FRK", &["FORK", "FRK"]),
    ("FRKS", &["FORKS", "FRKS"]),
    ("FT", &["FORT", "FRT", "FT"]),
    ("FWY", &["FREEWAY", "FREEWY", "FRWAY", "FRWY", "FWY"]),
    ("GDN", &["GARDEN", "GARDN", "GRDEN", "GRDN"]),
    ("GDNS", &["GARDENS", "GDNS", "GRDNS"]),
    ("GTWY", &["GATEWAY", "GATEWY", "GATWAY", "GTWAY", "GTWY"]),
    ("GLN", &["GLEN", "GLN"]),
    ("GLNS", &["GLENS"]),
    ("GRN", &["GREEN", "GRN"]),
    ("GRNS", &["GREENS"]),
    ("GRV", &["GROV", "GROVE", "GRV"]),
    ("GRVS", &["GROVES"]),
    ("HBR", &["HARB", "HARBOR", "HARBR", "HBR", "HRBOR"]),
    ("HBRS", &["HARBORS"]),
    ("HVN", &["HAVEN", "HVN"]),
    ("HTS", &["HT", "HTS"]),
    ("HWY", &["HIGHWAY", "HIGHWY", "HIWAY", "HIWY", "HWAY", "HWY"]),
    ("HL", &["HILL", "HL"]),
    ("HLS", &["HILLS", "HLS"]),
    ("HOLW", &["HLLW", "HOLLOW", "HOLLOWS", "HOLW", "HOLWS"]),
    ("INLT", &["INLT"]),
    ("IS", &["IS", "ISLAND", "ISLND"]),
    ("ISS", &["ISLANDS", "ISLNDS", "ISS"]),
    ("ISLE", &["ISLE", "ISLES"]),
    ("JCT", &["JCT", "JCTION", "JCTN", "JUNCTION", "JUNCTN", "JUNCTON"]),
    ("JCTS", &["JCTNS", "JCTS", "JUNCTIONS"]),
    ("KY", &["KEY", "KY"]),
    ("KYS", &["KEYS", "KYS"]),
    ("KNL", &["KNL", "KNOL", "KNOLL"]),
    ("KNLS", &["KNLS", "KNOLLS"]),
    ("LK", &["LK", "LAKE"]),
    ("LKS", &["LKS", "LAKES"]),
    ("LAND", &["LAND"]),
    ("LNDG", &["LANDING", "LNDG", "LNDNG"]),
    ("LN", &["LANE", "LN"]),
    ("LGT", &["LGT", "LIGHT"]),
    ("LGTS", &["LIGHTS"]),
    ("LF", &["LF", "LOAF"]),
    ("LCK", &["LCK", "LOCK"]),
    ("LCKS", &["LCKS", "LOCKS"]),
    ("LDG", &["LDG", "LDGE", "LODG", "LODGE"]),
    ("LOOP", &["LOOP", "LOOPS"]),
    ("MALL", &["MALL"]),
    ("MNR", &["MNR", "MANOR"]),
    ("MNRS", &["MANORS", "MNRS"]),
    ("MDW", &["MEADOW"]),
    ("MDWS", &["MDWS", "MEADOWS", "MEDOWS"]),
    ("MEWS", &["MEWS"]),
    ("ML", &["MILL"]),
    ("MLS", &["MILLS"]),
    ("MSN", &["MISSN", "MSSN"]),
    ("MTWY", &["MOTORWAY"]),
    ("MT", &["MNT", "MT", "MOUNT"]),
    ("MTN", &["MNTAIN", "MNTN", "MOUNTAIN", "MOUNTIN", "MTIN", "MTN"]),
    ("MTNS", &["MNTNS", "MOUNTAINS"]),
    ("NCK", &["NCK", "NECK"]),
    ("ORCH", &["ORCH", "ORCHARD", "ORCHRD"]),
    ("OVAL", &["OVAL", "OVL"]),
    ("OPAS", &["OVERPASS"]),
    ("PARK", &["PARK", "PRK", "PARKS"]),
    ("PKWY", &["PARKWAY", "PARKWY", "PKWAY", "PKWY", "PKY", "PARKWAYS", "PKWYS"]),
    ("PASS", &["PASS"]),
    ("PSGE", &["PASSAGE"]),
    ("PATH", &["PATH", "PATHS"]),
    ("PIKE", &["PIKE", "PIKES"]),
    ("PNE", &["PINE"]),
    ("PNES", &["PINES", "PNES"]),
    ("PL", &["PL", "PLACE"]),
    ("PLN", &["PLAIN", "PLN"]),
    ("PLNS", &["PLAINS", "PLNS"]),
    ("PLZ", &["PLAZA", "PLZ", "PLZA"]),
    ("PT", &["POINT", "PT"]),
    ("PTS", &["POINTS", "PTS"]),
    ("PRT", &["PORT", "PRT"]),
    ("PRTS", &["PORTS", "PRTS"]),
    ("PR", &["PR", "PRAIRIE", "PRR"]),
    ("RADL", &["RAD", "RADIAL", "RADIEL", "RADL"]),
    ("RAMP", &["RAMP"]),
    ("RNCH", &["RANCH", "RANCHES", "RNCH", "RNCHS"]),
    ("RPD", &["RAPID", "RPD"]),
    ("RPDS", &["RAPIDS", "RPDS"]),
    ("RST", &["REST", "RST"]),
    ("RDG", &["RDG", "RDGE", "RIDGE"]),
    ("RDGS", &["RDGS", "RIDGES"]),
    ("RIV", &["RIV", "RIVER", "RVR", "RIVR"]),
    ("RD", &["RD", "ROAD"]),
    ("RDS", &["ROADS", "RDS"]),
    ("RTE", &["ROUTE"]),
    ("ROW", &["ROW"]),
    ("RUE", &["RUE"]),
    ("RUN", &["RUN"]),
    ("SHL", &["SHL", "SHOAL"]),
    ("SHLS", &["SHLS", "SHOALS"]),
    ("SHR", &["SHOAR", "SHORE", "SHR"]),
    ("SHRS", &["SHOARS", "SHORES", "SHRS"]),
    ("SKWY", &["SKYWAY"]),
    ("SPG", &["SPG", "SPNG", "SPRING", "SPRNG"]),
    ("SPGS", &["SPGS", "SPNGS", "SPRINGS", "SPRNGS"]),
    ("SPUR", &["SPUR", "SPURS"]),
    ("SQ", &["SQ", "SQR", "SQRE", "SQU", "SQUARE"]),
    ("SQS", &["SQRS", "SQUARES"]),
    ("STA", &["STA", "STATION", "STATN", "STN"]),
    ("STRA", &["STRA", "STRAV", "STRAVEN", "STRAVENUE", "STRAVN", "STRVN", "STRVNUE"]),
    ("STRM", &["STREAM", "STREME", "STRM"]),
    ("ST", &["STREET", "STRT", "ST", "STR"]),
    ("STS", &["STREETS"]),
    ("SMT", &["SMT", "SUMIT", "SUMITT", "SUMMIT"]),
    ("TER", &["TER", "TERR", "TERRACE"]),
    ("TRWY", &["THROUGHWAY"]),
    ("TRCE", &["TRACE", "TRACES", "TRCE"]),
    ("TRAK", &["TRACK", "TRACKS", "TRAK", "TRK", "TRKS"]),
    ("TRFY", &["TRAFFICWAY"]),
    ("TRL", &["TRAIL", "TRAILS", "TRL", "TRLS"]),
    ("TRLR", &["TRAILER", "TRLR", "TRLRS"]),
    ("TUNL", &["TUNEL", "TUNL", "TUNLS", "TUNNEL", "TUNNELS", "TUNNL"]),
    ("TPKE", &["TRNPK", "TURNPIKE", "TURNPK"]),
    ("UPAS", &["UNDERPASS"]),
    ("UN", &["UN", "UNION"]),
    ("UNS", &["UNIONS"]),
    ("VLY", &["VALLEY", "VALLY", "VLLY", "VLY"]),
    ("VLYS", &["VALLEYS", "VLYS"]),
    ("VIA", &["VDCT", "VIA", "VIADCT", "VIADUCT"]),
    ("VW", &["VIEW", "VW"]),
    ("VWS", &["VIEWS", "VWS"]),
    ("VLG", &["VILL", "VILLAG", "VILLAGE", "VILLG", "VILLIAGE", "VLG"]),
    ("VLGS", &["VILLAGES"]),
    ("VL", &["VILLE", "VL"]),
    ("VIS", &["VIS", "VIST", "VISTA", "VST", "VSTA"]),
    ("WALK", &["WALK", "WALKS"]),
    ("WALL", &["WALL"]),
    ("WAY", &["WY", "WAY"]),
    ("WAYS", &["WAYS"]),
    ("WL", &["WELL"]),
    ("WLS", &["WELLS", "WLS"]),
];

// Secondary unit designators that take a number (APT 3).
const RANGED_UNITS: &[(&str, &str)] = &[
    (r"SU?I?TE", "STE"),
    (r"(?:AP)(?:AR)?T(?:ME?NT)?", "APT"),
    (r"(?:DEP)(?:AR)?T(?:ME?NT)?", "DEPT"),
    (r"R(?:OO)?M", "RM"),
    (r"FL(?:OO)?R?", "FL"),
    (r"BU?I?LDI?N?G", "BLDG"),
    (r"HA?NGA?R", "HNGR"),
    (r"KEY", "KEY"),
    (r"LO?T", "LOT"),
    (r"PIER", "PIER"),
    (r"SLIP", "SLIP"),
    (r"SPA?CE?", "SPC"),
    (r"STOP", "STOP"),
    (r"TRA?I?LE?R", "TRLR"),
    (r"BOX", "BOX"),
    (r"UNIT", "UNIT"),
];

// Secondary unit designators that stand alone (BSMT).
const RANGELESS_UNITS: &[(&str, &str)] = &[
    (r"BA?SE?M?E?N?T", "BSMT"),
    (r"FRO?NT", "FRNT"),
    (r"LO?BBY", "LBBY"),
    (r"LOWE?R", "LOWR"),
    (r"OFF?I?CE?", "OFC"),
    (r"PE?N?T?HO?U?S?E?", "PH"),
    (r"REAR", "REAR"),
    (r"SIDE", "SIDE"),
    (r"UPPE?R", "UPPR"),
];

static RANGED: std::sync::LazyLock<UnitLexicon> =
    std::sync::LazyLock::new(|| UnitLexicon::from_table(RANGED_UNITS));

static RANGELESS: std::sync::LazyLock<UnitLexicon> =
    std::sync::LazyLock::new(|| UnitLexicon::from_table(RANGELESS_UNITS));

/// Escape a literal for a free-spacing pattern, where bare spaces are ignored
#[must_use]
pub fn escape_literal(literal: &str) -> String {
    regex::escape(literal).replace(' ', r"\ ")
}

/// Join literal spellings into one alternation, longest first
///
/// Ties are broken alphabetically so the output is stable. Putting the
/// longer spelling first keeps `AVENUE` from being shadowed by `AV`.
pub fn alternation<I, S>(forms: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique: Vec<String> = forms
        .into_iter()
        .map(|form| form.as_ref().to_string())
        .filter(|form| !form.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    unique.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    unique
        .iter()
        .map(|form| escape_literal(form))
        .collect::<Vec<_>>()
        .join("|")
}

/// A literal vocabulary: spelling to canonical abbreviation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    entries: BTreeMap<String, String>,
}

impl Lexicon {
    /// Build from `(spelling, canonical)` pairs
    ///
    /// Both sides are trimmed and upper-cased to match normalized input.
    /// Pairs with a blank side are skipped.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(spelling, canonical)| {
                    (spelling.trim().to_uppercase(), canonical.trim().to_uppercase())
                })
                .filter(|(spelling, canonical)| !spelling.is_empty() && !canonical.is_empty())
                .collect(),
        }
    }

    fn from_groups(groups: &[(&str, &[&str])]) -> Self {
        Self::from_pairs(groups.iter().flat_map(|(canonical, spellings)| {
            spellings.iter().map(move |spelling| (*spelling, *canonical))
        }))
    }

    /// The eight compass directions
    #[must_use]
    pub fn directionals() -> Self {
        Self::from_pairs(DIRECTIONALS.iter().copied())
    }

    /// States, DC, territories and freely associated states
    #[must_use]
    pub fn states() -> Self {
        Self::from_pairs(STATES.iter().copied())
    }

    /// USPS street suffixes
    #[must_use]
    pub fn street_suffixes() -> Self {
        Self::from_groups(STREET_SUFFIXES)
    }

    /// Exact-match lookup of a spelling
    #[must_use]
    pub fn lookup(&self, spelling: &str) -> Option<&str> {
        self.entries.get(spelling).map(String::as_str)
    }

    /// Every recognized spelling
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Distinct canonical abbreviations
    #[must_use]
    pub fn canonicals(&self) -> BTreeSet<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    /// Spellings and canonical forms together, as matched by the grammar
    #[must_use]
    pub fn surface_forms(&self) -> BTreeSet<&str> {
        self.spellings().chain(self.canonicals()).collect()
    }

    /// Alternation over [`Lexicon::surface_forms`]
    #[must_use]
    pub fn alternation(&self) -> String {
        alternation(self.surface_forms())
    }

    /// Number of spellings
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no spellings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, spelling: &str, canonical: &str) -> Result<()> {
        let spelling = spelling.trim().to_uppercase();
        let canonical = canonical.trim().to_uppercase();
        if spelling.is_empty() || canonical.is_empty() {
            return Err(AddressError::InvalidArgument(
                "lexicon entries need both a spelling and a canonical form".into(),
            ));
        }
        self.entries.insert(spelling, canonical);
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct UnitEntry {
    pattern: &'static str,
    canonical: &'static str,
    matcher: Regex,
}

/// Secondary unit designators, keyed by sub-pattern rather than literal
#[derive(Debug, Clone)]
pub struct UnitLexicon {
    entries: Vec<UnitEntry>,
}

impl UnitLexicon {
    fn from_table(table: &[(&'static str, &'static str)]) -> Self {
        let entries = table
            .iter()
            .map(|&(pattern, canonical)| UnitEntry {
                pattern,
                canonical,
                matcher: RegexBuilder::new(&format!("^(?:{pattern})$"))
                    .case_insensitive(true)
                    .build()
                    .unwrap(),
            })
            .collect();
        Self { entries }
    }

    /// Units that require a following number
    #[must_use]
    pub fn ranged() -> Self {
        RANGED.clone()
    }

    /// Units that stand alone
    #[must_use]
    pub fn rangeless() -> Self {
        RANGELESS.clone()
    }

    /// Canonical form of the first unit whose pattern matches the whole value
    #[must_use]
    pub fn lookup(&self, value: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.matcher.is_match(value))
            .map(|entry| entry.canonical)
    }

    /// `(pattern, canonical)` pairs in table order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.pattern, entry.canonical))
    }

    /// Alternation over the unit sub-patterns, longest pattern first
    #[must_use]
    pub fn alternation(&self) -> String {
        let mut patterns: Vec<&str> = self.entries.iter().map(|entry| entry.pattern).collect();
        patterns.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        patterns.join("|")
    }

    /// Number of unit patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no unit patterns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full vocabulary a grammar is built from
#[derive(Debug, Clone)]
pub struct Lexicons {
    directionals: Lexicon,
    states: Lexicon,
    suffixes: Lexicon,
    ranged_units: UnitLexicon,
    rangeless_units: UnitLexicon,
}

impl Default for Lexicons {
    fn default() -> Self {
        Self::standard()
    }
}

impl Lexicons {
    /// USPS vocabulary
    #[must_use]
    pub fn standard() -> Self {
        Self {
            directionals: Lexicon::directionals(),
            states: Lexicon::states(),
            suffixes: Lexicon::street_suffixes(),
            ranged_units: UnitLexicon::ranged(),
            rangeless_units: UnitLexicon::rangeless(),
        }
    }

    /// Add a street suffix spelling
    ///
    /// Consumes the tables, so extension happens before a grammar exists.
    pub fn with_suffix(mut self, spelling: &str, canonical: &str) -> Result<Self> {
        self.suffixes.insert(spelling, canonical)?;
        Ok(self)
    }

    /// Compass directions
    #[must_use]
    pub const fn directionals(&self) -> &Lexicon {
        &self.directionals
    }

    /// States and territories
    #[must_use]
    pub const fn states(&self) -> &Lexicon {
        &self.states
    }

    /// Street suffixes, including any added with [`Lexicons::with_suffix`]
    #[must_use]
    pub const fn suffixes(&self) -> &Lexicon {
        &self.suffixes
    }

    /// Unit designators that take a number
    #[must_use]
    pub const fn ranged_units(&self) -> &UnitLexicon {
        &self.ranged_units
    }

    /// Unit designators that stand alone
    #[must_use]
    pub const fn rangeless_units(&self) -> &UnitLexicon {
        &self.rangeless_units
    }

    /// Canonical unit designator, trying ranged units before rangeless ones
    #[must_use]
    pub fn lookup_unit(&self, value: &str) -> Option<&'static str> {
        self.ranged_units
            .lookup(value)
            .or_else(|| self.rangeless_units.lookup(value))
    }
}
