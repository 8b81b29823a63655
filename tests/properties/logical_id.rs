//! Property tests for construct id to logical id conversion.

use proptest::prelude::*;

use appconfig_synth::domain::value_objects::LogicalId;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Conversion never panics, and any accepted id is 1..=255 ASCII alphanumerics.
    #[test]
    fn property_logical_id_is_alphanumeric(construct_id in any::<String>()) {
        if let Ok(id) = LogicalId::from_construct_id(&construct_id) {
            prop_assert!(!id.as_str().is_empty());
            prop_assert!(id.as_str().len() <= LogicalId::MAX_LEN);
            prop_assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    /// PROPERTY: Conversion keeps the alphanumerics in order and drops everything else.
    #[test]
    fn property_logical_id_preserves_alphanumerics(
        construct_id in "[a-z]{1,8}(-[a-z0-9]{1,8}){0,4}"
    ) {
        let id = LogicalId::from_construct_id(&construct_id).unwrap();
        prop_assert_eq!(id.as_str(), construct_id.replace('-', ""));
    }

    /// PROPERTY: Ids with no alphanumerics are always rejected.
    #[test]
    fn property_symbol_only_ids_rejected(construct_id in "[-_./ ]{0,16}") {
        prop_assert!(LogicalId::from_construct_id(&construct_id).is_err());
    }
}
