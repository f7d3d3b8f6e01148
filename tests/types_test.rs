use us_address_parser::*;

fn fields(pairs: &[(Field, &str)]) -> FieldSet {
    pairs
        .iter()
        .map(|(field, value)| (*field, (*value).to_string()))
        .collect()
}

// --- Field ---

#[test]
fn test_field_wire_names() {
    assert_eq!(Field::Number.as_str(), "Number");
    assert_eq!(Field::SecondaryNumber.to_string(), "SecondaryNumber");
    assert_eq!("StreetLine".parse::<Field>().unwrap(), Field::StreetLine);
}

#[test]
fn test_field_round_trips_every_name() {
    for field in Field::ALL {
        assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
    }
}

#[test]
fn test_field_unknown_name() {
    let err = "Zipcode".parse::<Field>().unwrap_err();
    assert!(matches!(err, AddressError::InvalidArgument(_)));
}

#[test]
fn test_field_from_group_name() {
    assert_eq!(Field::from_group_name("Street_3"), Some(Field::Street));
    assert_eq!(Field::from_group_name("Zip"), Some(Field::Zip));
    assert_eq!(Field::from_group_name("Military"), None);
    assert_eq!(Field::from_group_name("Street_"), None);
    assert_eq!(Field::from_group_name("Street_x"), None);
}

#[test]
fn test_field_serde_name() {
    let json = serde_json::to_string(&Field::Predirectional).unwrap();
    assert_eq!(json, "\"Predirectional\"");
}

// --- FieldSet ---

#[test]
fn test_field_set_absent_is_not_empty_string() {
    let mut set = FieldSet::new();
    assert!(set.is_empty());

    set.insert(Field::Street, "");
    assert!(set.contains(Field::Street));
    assert_eq!(set.get(Field::Street), Some(""));
    assert_eq!(set.get(Field::Suffix), None);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_field_set_insert_replaces() {
    let mut set = FieldSet::new();
    assert_eq!(set.insert(Field::Zip, "95472"), None);
    assert_eq!(set.insert(Field::Zip, "10001"), Some("95472".to_string()));
    assert_eq!(set.get(Field::Zip), Some("10001"));
}

// --- AddressParseResult ---

#[test]
fn test_result_missing_fields_are_empty() {
    let result = AddressParseResult::from_fields(fields(&[(Field::Zip, "95472")]));

    assert_eq!(result.zip(), "95472");
    assert_eq!(result.city(), "");
    assert_eq!(result.number(), "");
    assert_eq!(result.street_line(), "");
    assert!(!result.is_empty());
}

#[test]
fn test_result_empty() {
    let result = AddressParseResult::from_fields(FieldSet::new());
    assert!(result.is_empty());
    assert_eq!(result.to_string(), "; ,   ");
}

#[test]
fn test_result_synthesizes_street_line() {
    let result = AddressParseResult::from_fields(fields(&[
        (Field::Number, "842"),
        (Field::Predirectional, "E"),
        (Field::Street, " 1700 "),
        (Field::Postdirectional, "S"),
        (Field::SecondaryUnit, "STE"),
        (Field::SecondaryNumber, "4"),
    ]));

    assert_eq!(result.street_line(), "842 E 1700 S STE 4");
    assert_eq!(result.get(Field::StreetLine), "842 E 1700 S STE 4");
}

#[test]
fn test_result_captured_street_line_wins() {
    let result = AddressParseResult::from_fields(fields(&[
        (Field::StreetLine, "PSC BOX 453"),
        (Field::Number, "999"),
    ]));

    assert_eq!(result.street_line(), "PSC BOX 453");
}

#[test]
fn test_result_blank_captured_street_line_is_ignored() {
    let result = AddressParseResult::from_fields(fields(&[
        (Field::StreetLine, "  "),
        (Field::Number, "12"),
        (Field::Street, "ELM"),
    ]));

    assert_eq!(result.street_line(), "12 ELM");
}

#[test]
fn test_result_street_line_does_not_mutate_fields() {
    let result = AddressParseResult::from_fields(fields(&[
        (Field::Number, "1"),
        (Field::Street, "MAIN"),
    ]));
    let before = result.fields();

    let _ = result.street_line();

    assert_eq!(result.fields(), before);
    assert!(!result.fields().contains(Field::StreetLine));
}

#[test]
fn test_result_get_matches_accessors() {
    let result = parse_address("123 Main St Apt 4, Springfield, IL 62701").unwrap();

    assert_eq!(result.get(Field::Number), result.number());
    assert_eq!(result.get(Field::Street), result.street());
    assert_eq!(result.get(Field::Suffix), result.suffix());
    assert_eq!(result.get(Field::SecondaryUnit), result.secondary_unit());
    assert_eq!(result.get(Field::SecondaryNumber), result.secondary_number());
    assert_eq!(result.get(Field::City), result.city());
    assert_eq!(result.get(Field::State), result.state());
    assert_eq!(result.get(Field::Zip), result.zip());
}

#[test]
fn test_result_equality_ignores_cache() {
    let input = fields(&[(Field::Number, "1"), (Field::Street, "MAIN")]);
    let a = AddressParseResult::from_fields(input.clone());
    let b = AddressParseResult::from_fields(input);

    let _ = a.street_line();
    assert_eq!(a, b);
}

#[test]
fn test_result_display() {
    let result = AddressParseResult::from_fields(fields(&[
        (Field::StreetLine, "PO BOX 4857"),
        (Field::City, "NEW YORK"),
        (Field::State, "NY"),
        (Field::Zip, "10001"),
    ]));

    assert_eq!(result.to_string(), "PO BOX 4857; NEW YORK, NY  10001");
}

#[test]
fn test_result_serialize() {
    let result = parse_address("PSC BOX 453, APO AE 99969").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["StreetLine"], "PSC BOX 453");
    assert_eq!(json["City"], "APO");
    assert_eq!(json["State"], "AE");
    assert_eq!(json["Zip"], "99969");
    assert_eq!(json["Number"], "");
    assert_eq!(json.as_object().unwrap().len(), Field::ALL.len());
}
