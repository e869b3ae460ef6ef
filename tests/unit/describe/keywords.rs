use super::*;

#[test]
fn default_scan_order_is_canonical() {
    let table = KeywordTable::default();
    assert_eq!(
        table.scan_order().collect::<Vec<_>>(),
        MovementKind::ALL.to_vec()
    );
}

#[test]
fn easing_display_matches_css() {
    assert_eq!(Easing::Ease.to_string(), "ease");
    assert_eq!(Easing::Linear.to_string(), "linear");
    assert_eq!(
        Easing::ELASTIC.to_string(),
        "cubic-bezier(0.68, -0.55, 0.265, 1.55)"
    );
}

#[test]
fn easing_parses_named_and_bezier_forms() {
    assert_eq!("ease-in-out".parse::<Easing>().unwrap(), Easing::EaseInOut);
    assert_eq!(
        "cubic-bezier(0.68, -0.55, 0.265, 1.55)"
            .parse::<Easing>()
            .unwrap(),
        Easing::ELASTIC
    );
    assert!("cubic-bezier(1, 2, 3)".parse::<Easing>().is_err());
    assert!("cubic-bezier(1, 2, 3, 4, 5)".parse::<Easing>().is_err());
    assert!("steps(4)".parse::<Easing>().is_err());
}

#[test]
fn timing_serializes_as_css_time() {
    assert_eq!(serde_json::to_string(&Timing::Slow).unwrap(), "\"3s\"");
    let t: Timing = serde_json::from_str("\"1s\"").unwrap();
    assert_eq!(t, Timing::Fast);
    assert!(serde_json::from_str::<Timing>("\"5s\"").is_err());
}

#[test]
fn json_table_is_lowercased_and_partial_lists_default_empty() {
    let json = r#"{
        "movements": [
            { "kind": "rotate", "keywords": ["SPIN"] },
            { "kind": "fade", "keywords": ["Ghost"] }
        ],
        "fast": ["Zoom"]
    }"#;
    let table = KeywordTable::from_reader(json.as_bytes()).unwrap();
    assert_eq!(table.movements[0].keywords, vec!["spin".to_string()]);
    assert_eq!(table.fast, vec!["zoom".to_string()]);
    assert!(table.slow.is_empty());
    assert!(table.infinite.is_empty());
}

#[test]
fn json_table_rejects_duplicate_kinds_and_empty_keywords() {
    let dup = r#"{ "movements": [
        { "kind": "slide", "keywords": ["a"] },
        { "kind": "slide", "keywords": ["b"] }
    ] }"#;
    let err = KeywordTable::from_reader(dup.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("more than once"));

    let empty = r#"{ "movements": [ { "kind": "fade", "keywords": ["  "] } ] }"#;
    let err = KeywordTable::from_reader(empty.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("empty keyword"));

    let broken = KeywordTable::from_reader("{".as_bytes()).unwrap_err();
    assert!(broken.to_string().contains("config error:"));
}

#[test]
fn json_table_rejects_unknown_categories_and_fields() {
    let misspelled = r#"{
        "movements": [ { "kind": "rotate", "keywords": ["spin"] } ],
        "fsat": ["zoom"]
    }"#;
    let err = KeywordTable::from_reader(misspelled.as_bytes()).unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));
    assert!(err.to_string().contains("fsat"));

    let stray = r#"{ "movements": [ { "kind": "rotate", "keywords": ["spin"], "speed": 2 } ] }"#;
    let err = KeywordTable::from_reader(stray.as_bytes()).unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));

    let unknown_kind = r#"{ "movements": [ { "kind": "wobble", "keywords": ["w"] } ] }"#;
    let err = KeywordTable::from_reader(unknown_kind.as_bytes()).unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));

    let missing = r#"{ "fast": ["zoom"] }"#;
    let err = KeywordTable::from_reader(missing.as_bytes()).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}

#[test]
fn with_scan_order_permutes_and_validates() {
    let table = KeywordTable::default();
    let mut order = MovementKind::ALL.to_vec();
    order.reverse();
    let reversed = table.with_scan_order(&order).unwrap();
    assert_eq!(reversed.scan_order().collect::<Vec<_>>(), order);
    assert_eq!(reversed.fast, table.fast);

    assert!(table.with_scan_order(&[MovementKind::Slide]).is_err());
    let twice = [
        MovementKind::Slide,
        MovementKind::Slide,
        MovementKind::Fade,
        MovementKind::Rotate,
        MovementKind::Scale,
        MovementKind::Pulse,
    ];
    assert!(table.with_scan_order(&twice).is_err());
}

#[test]
fn any_match_is_plain_substring_search() {
    let keys = vec!["move".to_string()];
    assert!(any_match("remove the title", &keys));
    assert!(!any_match("mov", &keys));
    assert!(!any_match("", &keys));
}
