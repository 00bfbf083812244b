use flowdeck_catalog::{
    CategorizedData, FilterOptions, FilterPipeline, ItemRecord, LegacyFlag, apply_legacy_filter,
    decode_catalog, encode_catalog_pretty, item_count,
};
use flowdeck_test_support::fixtures::{REGISTRY_ITEM_COUNT, REGISTRY_LEGACY_COUNT, registry_catalog};
use serde_json::{Value, json};

fn typed_registry() -> CategorizedData<ItemRecord> {
    decode_catalog(&registry_catalog().to_string()).expect("registry fixture should decode")
}

#[test]
fn legacy_filter_keeps_every_category_and_drops_only_legacy_items() {
    let data = typed_registry();
    let filtered = apply_legacy_filter(&data);

    assert_eq!(
        filtered.keys().collect::<Vec<_>>(),
        data.keys().collect::<Vec<_>>()
    );
    for (category, items) in &data {
        for (key, record) in items {
            assert_eq!(
                filtered[category].contains_key(key),
                !record.is_legacy(),
                "{category}/{key}"
            );
        }
    }
    assert_eq!(
        item_count(&filtered),
        REGISTRY_ITEM_COUNT - REGISTRY_LEGACY_COUNT
    );
    assert!(filtered["deprecated"].is_empty());
}

#[test]
fn typed_and_untyped_filters_agree_on_the_wire() {
    let typed = apply_legacy_filter(&typed_registry());
    let untyped: CategorizedData<Value> =
        decode_catalog(&registry_catalog().to_string()).expect("untyped decode");
    let untyped = apply_legacy_filter(&untyped);

    assert_eq!(
        serde_json::to_value(&typed).unwrap(),
        serde_json::to_value(&untyped).unwrap()
    );
}

#[test]
fn passthrough_fields_survive_filtering() {
    let filtered = apply_legacy_filter(&typed_registry());
    let chat = serde_json::to_value(&filtered["inputs"]["ChatInput"]).unwrap();
    assert_eq!(chat["icon"], json!("MessagesSquare"));
    assert_eq!(chat["legacy"], json!(false));
}

#[test]
fn explicit_nulls_survive_decode_filter_encode() {
    let payload = r#"{"c":{"a":{"legacy":null,"description":null,"icon":"x"},"b":{"legacy":true}}}"#;
    let data: CategorizedData<ItemRecord> = decode_catalog(payload).expect("decode");
    let encoded = encode_catalog_pretty(&apply_legacy_filter(&data)).expect("encode");

    let reparsed: Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(
        reparsed,
        json!({ "c": { "a": { "legacy": null, "description": null, "icon": "x" } } })
    );
}

#[test]
fn non_boolean_beta_does_not_reject_the_catalog() {
    let data: CategorizedData<ItemRecord> =
        decode_catalog(r#"{"c":{"a":{"legacy":false,"beta":"experimental"}}}"#)
            .expect("registry-owned fields are not type checked");
    let outcome = FilterPipeline::new(FilterOptions {
        show_beta: false,
        ..FilterOptions::default()
    })
    .run(&data);
    assert!(outcome.data["c"].is_empty());
    assert_eq!(apply_legacy_filter(&data), data);
}

#[test]
fn pipeline_with_every_stage_enabled() {
    let pipeline = FilterPipeline::new(FilterOptions {
        show_legacy: false,
        show_beta: false,
        search: Some("Playground".into()),
        hide_empty_categories: true,
    });
    let outcome = pipeline.run(&typed_registry());

    assert_eq!(outcome.data.len(), 1);
    let inputs: Vec<_> = outcome.data["inputs"].keys().map(String::as_str).collect();
    assert_eq!(inputs, ["ChatInput", "TextInput"]);
    assert_eq!(outcome.summary.items_in, REGISTRY_ITEM_COUNT);
    assert_eq!(outcome.summary.items_out, 2);
}
