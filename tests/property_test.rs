use proptest::prelude::*;
use us_address_parser::*;

fn arb_address() -> impl Strategy<Value = String> {
    let directional = prop_oneof![
        Just(""),
        Just("N "),
        Just("South "),
        Just("NW "),
    ];
    let suffix = prop_oneof![
        Just("St"),
        Just("Avenue"),
        Just("Blvd"),
        Just("Highway"),
        Just("Lane"),
    ];
    let unit = prop_oneof![Just(""), Just(" Apt 4"), Just(" Suite 200"), Just(" # 7")];
    (
        1u32..99_999,
        directional,
        "[A-Z][a-z]{2,10}",
        suffix,
        unit,
        "[A-Z][a-z]{3,10}",
        prop_oneof![Just("CA"), Just("New York"), Just("TX"), Just("Virginia")],
        10_000u32..99_999,
    )
        .prop_map(|(number, dir, street, suffix, unit, city, state, zip)| {
            format!("{number} {dir}{street} {suffix}{unit}, {city}, {state} {zip}")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn parse_is_deterministic(input in arb_address()) {
        let first = parse_address(&input);
        let second = parse_address(&input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn generated_addresses_parse(input in arb_address()) {
        let address = parse_address(&input);
        prop_assert!(address.is_some(), "no match for {}", input);
        let address = address.unwrap();
        prop_assert!(!address.number().is_empty());
        prop_assert!(!address.zip().is_empty());
    }

    #[test]
    fn normalization_is_idempotent(input in arb_address()) {
        let lexicons = Lexicons::standard();
        if let Some(address) = parse_address(&input) {
            for (field, value) in address.fields().iter() {
                prop_assert_eq!(normalize_value(field, value, &lexicons), value);
            }
            let renormalized = normalize_fields(address.fields(), &lexicons);
            prop_assert_eq!(renormalized, address.fields());
        }
    }

    #[test]
    fn blank_input_never_matches(input in "[ \t\r\n]*") {
        prop_assert!(parse_address(&input).is_none());
        prop_assert!(parse_address_line(&input, true).is_none());
    }
}
