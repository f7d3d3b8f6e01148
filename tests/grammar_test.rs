use us_address_parser::*;

#[test]
fn test_address_grammar_fields() {
    let grammar = Grammar::address(&Lexicons::standard(), DEFAULT_SIZE_LIMIT).unwrap();

    assert_eq!(grammar.kind(), GrammarKind::Address);
    assert_eq!(grammar.fields().len(), Field::ALL.len());
}

#[test]
fn test_street_line_grammar_has_no_place() {
    let grammar = Grammar::street_line(&Lexicons::standard(), DEFAULT_SIZE_LIMIT).unwrap();
    let fields = grammar.fields();

    assert_eq!(grammar.kind(), GrammarKind::StreetLine);
    assert!(fields.contains(&Field::Street));
    assert!(fields.contains(&Field::StreetLine));
    assert!(!fields.contains(&Field::City));
    assert!(!fields.contains(&Field::State));
    assert!(!fields.contains(&Field::Zip));
}

#[test]
fn test_builder_is_deterministic() {
    let lexicons = Lexicons::standard();
    let first = GrammarBuilder::new(&lexicons).address_pattern();
    let second = GrammarBuilder::new(&lexicons).address_pattern();

    assert_eq!(first, second);
}

#[test]
fn test_builder_names_groups_uniquely() {
    let mut builder = GrammarBuilder::new(&Lexicons::standard());
    let number = builder.number();

    assert!(number.contains("(?<Number_1>"));
    assert!(number.contains("(?<SecondaryNumber_1>"));
    assert!(number.contains("(?<Number_4>"));

    let again = builder.number();
    assert!(again.contains("(?<Number_5>"));
}

#[test]
fn test_builder_anchors_every_branch() {
    let pattern = GrammarBuilder::new(&Lexicons::standard()).address_pattern();
    let trimmed = pattern.trim();

    assert!(trimmed.starts_with('^'));
    assert!(trimmed.ends_with('$'));
    assert!(pattern.contains("(?<Military>"));
    assert!(pattern.contains("(?<PostOfficeBox>"));
    assert!(pattern.contains("(?<StreetAddress>"));
}

#[test]
fn test_capture_reports_branch() {
    let grammar = Grammar::address(&Lexicons::standard(), DEFAULT_SIZE_LIMIT).unwrap();

    let (fields, branch) = grammar.capture("PSC BOX 453, APO AE 99969").unwrap();
    assert_eq!(branch, Some("Military"));
    assert_eq!(fields.get(Field::StreetLine), Some("PSC BOX 453, "));

    let (_, branch) = grammar.capture("PO BOX 1, NEW YORK, NY 10001").unwrap();
    assert_eq!(branch, Some("PostOfficeBox"));

    let (fields, branch) = grammar.capture("1 MAIN ST, SPRINGFIELD, IL 62701").unwrap();
    assert_eq!(branch, Some("StreetAddress"));
    assert!(!fields.contains(Field::Predirectional));
    assert!(!fields.contains(Field::StreetLine));

    assert!(grammar.capture("not an address").is_none());
}

#[test]
fn test_custom_grammar() {
    let grammar = Grammar::custom(
        r"
        ^ (?<Number>\d+) \s+ (?<Street>[A-Z]+) \s+ (?<Suffix_1>[A-Z]+) $
        ",
    )
    .unwrap();

    assert_eq!(grammar.kind(), GrammarKind::Custom);
    assert_eq!(grammar.fields().len(), 3);

    let parser = AddressParser::new().unwrap();
    let address = parser.parse_with(&grammar, "9 elm avenue", true).unwrap();
    assert_eq!(address.number(), "9");
    assert_eq!(address.street(), "ELM");
    assert_eq!(address.suffix(), "AVE");
    assert!(parser.parse_with(&grammar, "9 elm", true).is_none());
}

#[test]
fn test_custom_grammar_rejects_blank_pattern() {
    let err = Grammar::custom("   ").unwrap_err();
    assert!(matches!(err, AddressError::InvalidArgument(_)));
}

#[test]
fn test_custom_grammar_needs_field_captures() {
    let err = Grammar::custom(r"(?<Anything>\d+)").unwrap_err();
    assert!(matches!(err, AddressError::InvalidArgument(_)));
}

#[test]
fn test_custom_grammar_invalid_pattern() {
    let err = Grammar::custom(r"(?<Number>\d+").unwrap_err();
    assert!(matches!(err, AddressError::Grammar(_)));
}

#[test]
fn test_too_small_size_limit() {
    let err = Grammar::address(&Lexicons::standard(), 1024).unwrap_err();
    assert!(matches!(err, AddressError::Grammar(_)));
}
