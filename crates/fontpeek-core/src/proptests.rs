// this_file: crates/fontpeek-core/src/proptests.rs

use crate::params::{validate_param, RenderParams, PARAM_NAMES};
use proptest::prelude::*;

// Property: the hex codec round-trips every text, including empty and
// non-ASCII content
proptest! {
    #[test]
    fn prop_hex_round_trip(s in "\\PC*") {
        let params = RenderParams {
            text: Some(s.clone()),
            ..RenderParams::default()
        };
        let decoded = RenderParams::decode(&params.encode()).unwrap();
        prop_assert_eq!(decoded.text.as_deref(), Some(s.as_str()));
    }
}

// Property: the encoded form only ever contains lowercase hex digits
proptest! {
    #[test]
    fn prop_encoded_form_is_hex(s in "\\PC*") {
        let params = RenderParams {
            text: Some(s),
            ..RenderParams::default()
        };
        let encoded = params.encode();
        prop_assert!(encoded.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        prop_assert_eq!(encoded.len() % 2, 0);
    }
}

// Property: names outside the recognized set never validate, whatever
// the value
proptest! {
    #[test]
    fn prop_unknown_names_never_validate(name in "[a-z_]{1,16}", value in ".*") {
        prop_assume!(!PARAM_NAMES.contains(&name.as_str()));
        prop_assert!(!validate_param(&name, &value));
    }
}
