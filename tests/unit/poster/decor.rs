use super::*;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn decoration_count_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let picked = pick_decorations(&mut rng);
        assert!((2..=5).contains(&picked.len()));
        assert!(picked.iter().all(|g| DECORATIONS.contains(g)));
    }
}

#[test]
fn same_seed_same_decorations() {
    let a = pick_decorations(&mut StdRng::seed_from_u64(42));
    let b = pick_decorations(&mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn short_content_gets_a_tagline() {
    let mut rng = StdRng::seed_from_u64(1);
    let out = enhance_content("新品发布", &mut rng);
    assert!(out.starts_with("新品发布 "));
    assert!(TAGLINES.iter().any(|t| out.ends_with(t)));
}

#[test]
fn long_content_is_untouched() {
    let mut rng = StdRng::seed_from_u64(1);
    let long = "探索无限可能，创造独特价值，让您的想法成为现实";
    assert!(long.chars().count() >= SHORT_CONTENT_CHARS);
    assert_eq!(enhance_content(long, &mut rng), long);

    // exactly at the threshold counts as long
    let edge = "a".repeat(SHORT_CONTENT_CHARS);
    assert_eq!(enhance_content(&edge, &mut rng), edge);
}
