use crate::{
    describe::extract::{FeatureSet, extract},
    describe::keywords::{KeywordTable, MovementKind},
    foundation::error::{PosterError, PosterResult},
    keyframes::timeline::{KeyframeTimeline, render_animation_rule},
};

/// Fixed `(percent, property, value)` writes contributed by one movement kind.
pub fn movement_contributions(kind: MovementKind) -> &'static [(u8, &'static str, &'static str)] {
    match kind {
        MovementKind::Slide => &[
            (0, "transform", "translateX(-100px)"),
            (0, "opacity", "0"),
            (100, "transform", "translateX(0)"),
            (100, "opacity", "1"),
        ],
        MovementKind::Bounce => &[
            (20, "transform", "translateY(-10px)"),
            (40, "transform", "translateY(0)"),
            (60, "transform", "translateY(-5px)"),
            (80, "transform", "translateY(0)"),
        ],
        MovementKind::Fade => &[(0, "opacity", "0"), (100, "opacity", "1")],
        MovementKind::Rotate => &[
            (0, "transform", "rotate(0deg)"),
            (100, "transform", "rotate(360deg)"),
        ],
        MovementKind::Scale => &[
            (0, "transform", "scale(0.5)"),
            (50, "transform", "scale(1.2)"),
            (100, "transform", "scale(1)"),
        ],
        MovementKind::Pulse => &[
            (0, "transform", "scale(1)"),
            (50, "transform", "scale(1.1)"),
            (100, "transform", "scale(1)"),
        ],
    }
}

/// Merge the contributions of `movements` in order; later movements overwrite earlier ones
/// at the same `(percent, property)`.
pub fn build_timeline(movements: &[MovementKind]) -> KeyframeTimeline {
    let mut timeline = KeyframeTimeline::new();
    for kind in movements {
        timeline.apply(movement_contributions(*kind));
    }
    timeline
}

/// `custom_` followed by the movement tags joined with `_`.
pub fn animation_name(movements: &[MovementKind]) -> String {
    let tags = movements
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("_");
    format!("custom_{tags}")
}

/// `<name> <timing> <easing>[ <effect>...]`.
pub fn animation_shorthand(name: &str, features: &FeatureSet) -> String {
    let mut out = format!("{name} {} {}", features.timing, features.easing);
    for effect in &features.effects {
        out.push(' ');
        out.push_str(effect.as_str());
    }
    out
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Generated custom animation, ready to splice into a page.
pub struct AnimationArtifact {
    /// Animation name (also the suffix of the applying class).
    pub name: String,
    /// `@keyframes` block followed by the `.animation-<name>` rule.
    pub css: String,
    /// Features the animation was built from.
    #[serde(rename = "keywords")]
    pub features: FeatureSet,
}

impl AnimationArtifact {
    /// Class that applies this animation to an element.
    pub fn class_name(&self) -> String {
        format!("animation-{}", self.name)
    }

    /// Pretty-printed JSON of `name`, `css` and `keywords`.
    pub fn to_json_pretty(&self) -> PosterResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PosterError::serde(format!("serialize animation artifact: {e}")))
    }
}

/// Turn a feature set into a named keyframe animation.
///
/// Total over its input: an empty movement list yields the name `custom_` with an empty
/// keyframes block, which callers are expected to accept.
#[tracing::instrument(level = "debug", skip_all, fields(movements = ?features.movements))]
pub fn synthesize(features: FeatureSet) -> AnimationArtifact {
    let name = animation_name(&features.movements);
    if features.is_static() {
        tracing::warn!(%name, "no movement recognised, emitting an empty keyframes block");
    }

    let timeline = build_timeline(&features.movements);
    let css = format!(
        "{}\n{}",
        timeline.render_keyframes(&name),
        render_animation_rule(&name, &animation_shorthand(&name, &features)),
    );
    tracing::debug!(%name, frames = timeline.percentages().count(), "synthesized keyframes");

    AnimationArtifact {
        name,
        css,
        features,
    }
}

/// Extract features from `description` and synthesize the matching animation.
pub fn compile_description(table: &KeywordTable, description: &str) -> AnimationArtifact {
    synthesize(extract(table, description))
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/synth.rs"]
mod tests;
