use super::*;

#[test]
fn lookup_is_case_insensitive_and_rejects_unknown() {
    assert_eq!(PresetAnimation::from_name("Pulse"), Some(PresetAnimation::Pulse));
    assert_eq!(PresetAnimation::from_name(" rotate "), Some(PresetAnimation::Rotate));
    assert_eq!(PresetAnimation::from_name("wobble"), None);
    for preset in PresetAnimation::ALL {
        assert_eq!(PresetAnimation::from_name(preset.name()), Some(preset));
    }
}

#[test]
fn declarations_carry_durations() {
    assert_eq!(
        PresetAnimation::Rotate.declaration(),
        "animation: rotate 10s infinite linear;"
    );
    assert_eq!(
        PresetAnimation::Slide.declaration(),
        "animation: slide 3s infinite;"
    );
}

#[test]
fn bounce_rests_on_shared_frames() {
    let tl = PresetAnimation::Bounce.timeline();
    for p in [0, 20, 50, 80, 100] {
        assert_eq!(tl.get(p, "transform"), Some("translateY(0)"), "{p}%");
    }
    assert_eq!(tl.get(40, "transform"), Some("translateY(-10px)"));
    assert_eq!(tl.get(60, "transform"), Some("translateY(-5px)"));
}

#[test]
fn keyframes_are_named_after_preset() {
    let css = PresetAnimation::Fade.keyframes_css();
    assert!(css.starts_with("@keyframes fade {"));
    assert!(css.contains("    50% { opacity: 1; }"));
}

#[test]
fn templates_render_keyframes_and_rule() {
    let t = AnimationTemplate::from_name("SLIDE_BOUNCE").unwrap();
    assert_eq!(t.name(), "slide_bounce");
    let css = t.css();
    assert!(css.contains(
        "    0% { transform: translateX(-100px) scale(0.8); opacity: 0; }"
    ));
    assert!(css.contains("    80% { transform: translateX(-10px) scale(1.05); }"));
    assert!(css.ends_with(
        ".animation-slide_bounce {\n    animation: slide_bounce 1.5s ease-out;\n}"
    ));

    let t = AnimationTemplate::from_name("fade_scale").unwrap();
    assert_eq!(t.easing(), Easing::EaseInOut);
    assert_eq!(t.shorthand(), "fade_scale 2s ease-in-out");
    assert!(t.css().contains("animation: fade_scale 2s ease-in-out;"));
    assert!(AnimationTemplate::from_name("pulse").is_none());
}
