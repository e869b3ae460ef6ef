use rand::Rng;

/// Glyph palette for floating decorations.
pub const DECORATIONS: [&str; 20] = [
    "✨", "🌟", "💫", "🎯", "🎨", "🎭", "🎪", "🎨", "⭐", "🌈", "🔥", "⚡", "💎", "💡", "🚀", "🌙",
    "☀️", "🌺", "🦋", "🐉",
];

/// Taglines appended to short content.
pub const TAGLINES: [&str; 5] = [
    "🌟 精彩内容，不容错过！",
    "🎯 专为您的需求定制",
    "✨ 独特设计，彰显个性",
    "🚀 创新理念，引领未来",
    "💡 智慧之选，品质保证",
];

/// Content shorter than this many characters gets a tagline.
pub const SHORT_CONTENT_CHARS: usize = 20;

/// Pick 2 to 5 decoration glyphs (with replacement).
pub fn pick_decorations<R: Rng>(rng: &mut R) -> Vec<&'static str> {
    let count = rng.random_range(2..=5);
    (0..count)
        .map(|_| DECORATIONS[rng.random_range(0..DECORATIONS.len())])
        .collect()
}

/// Append a random tagline to content shorter than [`SHORT_CONTENT_CHARS`] characters.
pub fn enhance_content<R: Rng>(content: &str, rng: &mut R) -> String {
    if content.chars().count() >= SHORT_CONTENT_CHARS {
        return content.to_string();
    }
    let tagline = TAGLINES[rng.random_range(0..TAGLINES.len())];
    format!("{content} {tagline}")
}

#[cfg(test)]
#[path = "../../tests/unit/poster/decor.rs"]
mod tests;
