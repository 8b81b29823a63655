//! Property tests for stack synthesis.

use proptest::prelude::*;

use appconfig_synth::domain::services::{build_stack, StackDefinition};
use appconfig_synth::{ContentSource, ContentSources};

fn sources(initial: &str, updated: &str) -> ContentSources {
    ContentSources {
        initial: ContentSource::new("config-v1.json", initial),
        updated: ContentSource::new("config-v2.json", updated),
    }
}

fn json_document() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(|b| b.to_string()),
        any::<i64>().prop_map(|n| n.to_string()),
        "[a-zA-Z0-9 ]{0,12}".prop_map(|s| format!("\"{}\"", s)),
    ];
    proptest::collection::btree_map("[a-z]{1,8}", leaf, 0..6).prop_map(|fields| {
        let body: Vec<String> = fields
            .into_iter()
            .map(|(k, v)| format!("\"{}\": {}", k, v))
            .collect();
        format!("{{{}}}", body.join(", "))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any readable pair yields six resources and three outputs.
    #[test]
    fn property_every_pair_declares_full_stack(
        initial in json_document(),
        updated in json_document()
    ) {
        let stack = build_stack(&StackDefinition::default(), &sources(&initial, &updated)).unwrap();

        prop_assert_eq!(stack.template.resources().len(), 6);
        prop_assert_eq!(stack.template.outputs().len(), 3);
        prop_assert!(stack.template.validate().is_ok());
    }

    /// PROPERTY: Identical inputs render byte-identical templates.
    #[test]
    fn property_synthesis_is_deterministic(
        initial in json_document(),
        updated in json_document()
    ) {
        let definition = StackDefinition::default();
        let first = build_stack(&definition, &sources(&initial, &updated)).unwrap();
        let second = build_stack(&definition, &sources(&initial, &updated)).unwrap();

        prop_assert_eq!(
            first.template.to_json_pretty().unwrap(),
            second.template.to_json_pretty().unwrap()
        );
    }

    /// PROPERTY: Hosted content is the initial text verbatim; updated content never changes the template.
    #[test]
    fn property_only_initial_content_is_hosted(
        initial in any::<String>(),
        updated_a in any::<String>(),
        updated_b in any::<String>()
    ) {
        let definition = StackDefinition::default();
        let a = build_stack(&definition, &sources(&initial, &updated_a)).unwrap();
        let b = build_stack(&definition, &sources(&initial, &updated_b)).unwrap();

        let rendered = a.template.to_json_pretty().unwrap();
        prop_assert_eq!(&rendered, &b.template.to_json_pretty().unwrap());

        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        prop_assert_eq!(
            parsed["Resources"]["achcvv1"]["Properties"]["Content"].as_str(),
            Some(initial.as_str())
        );
    }
}
