use super::*;

#[test]
fn set_overwrites_in_place_and_keeps_declaration_order() {
    let mut tl = KeyframeTimeline::new();
    tl.set(0, "transform", "translateX(-100px)");
    tl.set(0, "opacity", "0");
    tl.set(0, "transform", "scale(0.5)");
    assert_eq!(
        tl.properties(0).collect::<Vec<_>>(),
        vec![("transform", "scale(0.5)"), ("opacity", "0")]
    );
    assert_eq!(tl.get(0, "transform"), Some("scale(0.5)"));
    assert_eq!(tl.get(50, "transform"), None);
}

#[test]
fn percentages_are_ascending() {
    let tl = KeyframeTimeline::from_triples(&[
        (100, "opacity", "1"),
        (20, "opacity", "0.5"),
        (0, "opacity", "0"),
    ]);
    assert_eq!(tl.percentages().collect::<Vec<_>>(), vec![0, 20, 100]);
}

#[test]
fn writes_past_the_end_are_dropped() {
    let mut tl = KeyframeTimeline::from_triples(&[(100, "opacity", "1")]);
    tl.set(250, "opacity", "0.9");
    tl.set(101, "transform", "scale(2)");
    assert_eq!(tl.get(100, "opacity"), Some("1"));
    assert_eq!(tl.get(100, "transform"), None);
    assert_eq!(tl.percentages().collect::<Vec<_>>(), vec![100]);

    let mut only_bad = KeyframeTimeline::new();
    only_bad.set(200, "opacity", "0");
    assert!(only_bad.is_empty());
    assert_eq!(only_bad.render_keyframes("x"), "@keyframes x {}");
}

#[test]
fn renders_one_line_per_percentage() {
    let tl = KeyframeTimeline::from_triples(&[
        (0, "opacity", "0"),
        (0, "transform", "rotate(0deg)"),
        (100, "opacity", "1"),
    ]);
    assert_eq!(
        tl.render_keyframes("demo"),
        "@keyframes demo {\n    0% { opacity: 0; transform: rotate(0deg); }\n    100% { opacity: 1; }\n}"
    );
}

#[test]
fn empty_timeline_renders_empty_block() {
    let tl = KeyframeTimeline::new();
    assert!(tl.is_empty());
    assert_eq!(tl.render_keyframes("custom_"), "@keyframes custom_ {}");
    assert_eq!(tl.properties(0).count(), 0);
}

#[test]
fn animation_rule_wraps_shorthand() {
    assert_eq!(
        render_animation_rule("spin", "spin 2s linear infinite"),
        ".animation-spin {\n    animation: spin 2s linear infinite;\n}"
    );
}
