use super::*;
use crate::describe::keywords::{Easing, Effect, Timing};

fn features(movements: &[MovementKind]) -> FeatureSet {
    FeatureSet {
        movements: movements.to_vec(),
        ..FeatureSet::default()
    }
}

#[test]
fn every_kind_contributes_within_bounds() {
    for kind in MovementKind::ALL {
        let triples = movement_contributions(kind);
        assert!(!triples.is_empty(), "{kind}");
        assert!(triples.iter().all(|(p, _, _)| *p <= 100));
    }
}

#[test]
fn properties_from_different_movements_coexist() {
    let tl = build_timeline(&[MovementKind::Fade, MovementKind::Rotate]);
    assert_eq!(tl.get(0, "opacity"), Some("0"));
    assert_eq!(tl.get(0, "transform"), Some("rotate(0deg)"));
    assert_eq!(tl.get(100, "opacity"), Some("1"));
    assert_eq!(tl.get(100, "transform"), Some("rotate(360deg)"));
}

#[test]
fn later_movement_wins_on_shared_property() {
    let tl = build_timeline(&[MovementKind::Rotate, MovementKind::Scale]);
    assert_eq!(tl.get(0, "transform"), Some("scale(0.5)"));
    assert_eq!(tl.get(50, "transform"), Some("scale(1.2)"));
    assert_eq!(tl.get(100, "transform"), Some("scale(1)"));

    let css = synthesize(features(&[MovementKind::Rotate, MovementKind::Scale])).css;
    assert!(css.contains("    0% { transform: scale(0.5); }"));
    assert!(!css.contains("rotate(0deg)"));
}

#[test]
fn slide_bounce_fills_intermediate_frames() {
    let tl = build_timeline(&[MovementKind::Slide, MovementKind::Bounce]);
    assert_eq!(
        tl.percentages().collect::<Vec<_>>(),
        vec![0, 20, 40, 60, 80, 100]
    );
}

#[test]
fn name_joins_movements() {
    assert_eq!(animation_name(&[MovementKind::Rotate]), "custom_rotate");
    assert_eq!(
        animation_name(&[MovementKind::Slide, MovementKind::Fade]),
        "custom_slide_fade"
    );
    assert_eq!(animation_name(&[]), "custom_");
}

#[test]
fn shorthand_omits_trailing_space_without_effects() {
    let f = features(&[MovementKind::Fade]);
    assert_eq!(animation_shorthand("custom_fade", &f), "custom_fade 2s ease");

    let f = FeatureSet {
        movements: vec![MovementKind::Fade],
        timing: Timing::Fast,
        easing: Easing::Linear,
        effects: vec![Effect::Infinite, Effect::Alternate],
    };
    assert_eq!(
        animation_shorthand("custom_fade", &f),
        "custom_fade 1s linear infinite alternate"
    );
}

#[test]
fn full_css_for_single_rotation() {
    let f = FeatureSet {
        movements: vec![MovementKind::Rotate],
        timing: Timing::Slow,
        easing: Easing::Ease,
        effects: vec![Effect::Infinite],
    };
    let art = synthesize(f.clone());
    assert_eq!(art.name, "custom_rotate");
    assert_eq!(art.class_name(), "animation-custom_rotate");
    assert_eq!(art.features, f);
    assert_eq!(
        art.css,
        "@keyframes custom_rotate {\n    0% { transform: rotate(0deg); }\n    100% { transform: rotate(360deg); }\n}\n.animation-custom_rotate {\n    animation: custom_rotate 3s ease infinite;\n}"
    );
}

#[test]
fn empty_movements_produce_degenerate_but_valid_css() {
    let art = synthesize(FeatureSet::default());
    assert_eq!(art.name, "custom_");
    assert!(art.css.starts_with("@keyframes custom_ {}\n"));
    assert!(art.css.contains("animation: custom_ 2s ease;"));
    assert!(!art.css.contains('%'));
}

#[test]
fn compile_description_matches_examples() {
    let table = KeywordTable::default();
    let art = compile_description(&table, "慢速旋转，无限循环");
    assert_eq!(art.name, "custom_rotate");
    assert!(art.css.contains("animation: custom_rotate 3s ease infinite;"));

    let art = compile_description(&table, "fast elastic bounce");
    assert_eq!(art.name, "custom_bounce");
    assert!(art.css.contains(
        "animation: custom_bounce 1s cubic-bezier(0.68, -0.55, 0.265, 1.55);"
    ));
}

#[test]
fn compile_is_idempotent() {
    let table = KeywordTable::default();
    let d = "slow elastic bounce with slide-in, infinite";
    let a = compile_description(&table, d);
    let b = compile_description(&table, d);
    assert_eq!(a.name, b.name);
    assert_eq!(a.css, b.css);
    assert_eq!(a.name, "custom_slide_bounce");
}

#[test]
fn no_empty_keyframe_entries() {
    let table = KeywordTable::default();
    let art = compile_description(&table, "scale and pulse and fade");
    assert!(!art.css.contains("{ }"));
    assert!(!art.css.contains("{ ; }"));
}

#[test]
fn artifact_serializes_with_keywords_field() {
    let art = synthesize(features(&[MovementKind::Pulse]));
    let v = serde_json::to_value(&art).unwrap();
    assert_eq!(v["name"], "custom_pulse");
    assert_eq!(v["keywords"]["movement"][0], "pulse");
}

#[test]
fn artifact_json_uses_keywords_field() {
    let artifact = synthesize(features(&[MovementKind::Fade]));
    let json = artifact.to_json_pretty().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["name"], "custom_fade");
    assert_eq!(v["keywords"]["movement"][0], "fade");
    assert!(v["css"].as_str().unwrap().starts_with("@keyframes custom_fade {"));
}
