use us_address_parser::*;

#[test]
fn test_default_config() {
    let config = ParserConfig::default();

    assert!(config.extra_suffixes.is_empty());
    assert_eq!(config.size_limit, DEFAULT_SIZE_LIMIT);
}

#[test]
fn test_config_from_json() {
    let config = ParserConfig::from_json(r#"{"extra_suffixes": {"PROMENADE": "PROM"}}"#).unwrap();

    assert_eq!(config.extra_suffixes.get("PROMENADE").map(String::as_str), Some("PROM"));
    assert_eq!(config.size_limit, DEFAULT_SIZE_LIMIT);
}

#[test]
fn test_config_from_empty_json() {
    let config = ParserConfig::from_json("{}").unwrap();
    assert_eq!(config, ParserConfig::default());
}

#[test]
fn test_config_invalid_json() {
    let err = ParserConfig::from_json("{\"size_limit\": \"big\"}").unwrap_err();
    assert!(matches!(err, AddressError::Config(_)));
}

#[test]
fn test_extra_suffix_is_parsed_and_normalized() {
    let config = ParserConfig::default().with_suffix("PROMENADE", "PROM");
    let parser = AddressParser::with_config(&config).unwrap();

    let address = parser
        .parse_address("12 Harbor Promenade, Stamford, CT 06902")
        .unwrap();
    assert_eq!(address.street(), "HARBOR");
    assert_eq!(address.suffix(), "PROM");

    let standard = parse_address("12 Harbor Promenade, Stamford, CT 06902").unwrap();
    assert_eq!(standard.street(), "HARBOR PROMENADE");
    assert_eq!(standard.suffix(), "");
}

#[test]
fn test_blank_extra_suffix_is_rejected() {
    let config = ParserConfig::default().with_suffix("", "PROM");
    let err = AddressParser::with_config(&config).unwrap_err();

    assert!(matches!(err, AddressError::InvalidArgument(_)));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ParserConfig::default().with_suffix("ESPLANADE", "ESPL");
    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(ParserConfig::from_json(&json).unwrap(), config);
}
