use crate::describe::keywords::{Easing, Effect, KeywordTable, MovementKind, Timing, any_match};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Structured animation intent recovered from a free-text description.
pub struct FeatureSet {
    /// Requested movements, deduplicated, in keyword-table scan order.
    #[serde(rename = "movement")]
    pub movements: Vec<MovementKind>,
    /// Duration bucket.
    pub timing: Timing,
    /// Easing curve.
    pub easing: Easing,
    /// Shorthand modifiers; `infinite` always precedes `alternate`.
    pub effects: Vec<Effect>,
}

impl FeatureSet {
    /// True when no movement keyword matched.
    pub fn is_static(&self) -> bool {
        self.movements.is_empty()
    }
}

/// Scan `description` against `table` and return the recognised features.
///
/// Matching is case-insensitive substring search; anything unrecognised is ignored, so every
/// input (including the empty string) yields a well-formed [`FeatureSet`].
#[tracing::instrument(level = "debug", skip(table))]
pub fn extract(table: &KeywordTable, description: &str) -> FeatureSet {
    let text = description.to_lowercase();

    let mut movements = Vec::<MovementKind>::new();
    for entry in &table.movements {
        if !movements.contains(&entry.kind) && any_match(&text, &entry.keywords) {
            movements.push(entry.kind);
        }
    }

    // fast wins when both match
    let timing = if any_match(&text, &table.fast) {
        Timing::Fast
    } else if any_match(&text, &table.slow) {
        Timing::Slow
    } else {
        Timing::Normal
    };

    let easing = if any_match(&text, &table.linear) {
        Easing::Linear
    } else if any_match(&text, &table.elastic) || any_match(&text, &table.bounce_easing) {
        Easing::ELASTIC
    } else {
        Easing::Ease
    };

    let mut effects = Vec::with_capacity(2);
    if any_match(&text, &table.infinite) {
        effects.push(Effect::Infinite);
    }
    if any_match(&text, &table.alternate) {
        effects.push(Effect::Alternate);
    }

    let features = FeatureSet {
        movements,
        timing,
        easing,
        effects,
    };
    tracing::debug!(?features, "extracted animation features");
    features
}

#[cfg(test)]
#[path = "../../tests/unit/describe/extract.rs"]
mod tests;
