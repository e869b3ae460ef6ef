use crate::{
    describe::keywords::Easing,
    keyframes::timeline::{KeyframeTimeline, render_animation_rule},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Built-in container animation selectable by name.
pub enum PresetAnimation {
    /// Slight breathing scale.
    Pulse,
    /// Damped vertical hop.
    Bounce,
    /// Opacity shimmer.
    Fade,
    /// Side-to-side sway.
    Slide,
    /// Slow continuous spin.
    Rotate,
}

impl PresetAnimation {
    /// All presets in catalogue order.
    pub const ALL: [Self; 5] = [
        Self::Pulse,
        Self::Bounce,
        Self::Fade,
        Self::Slide,
        Self::Rotate,
    ];

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Catalogue name, also used as the `@keyframes` name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Bounce => "bounce",
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Rotate => "rotate",
        }
    }

    /// Animation shorthand applied to the poster container.
    pub fn shorthand(self) -> &'static str {
        match self {
            Self::Pulse => "pulse 2s infinite",
            Self::Bounce => "bounce 2s infinite",
            Self::Fade => "fade 2s infinite",
            Self::Slide => "slide 3s infinite",
            Self::Rotate => "rotate 10s infinite linear",
        }
    }

    /// `animation: ...;` declaration for the container rule.
    pub fn declaration(self) -> String {
        format!("animation: {};", self.shorthand())
    }

    fn frames(self) -> &'static [(u8, &'static str, &'static str)] {
        match self {
            Self::Pulse => &[
                (0, "transform", "scale(1)"),
                (50, "transform", "scale(1.05)"),
                (100, "transform", "scale(1)"),
            ],
            Self::Bounce => &[
                (0, "transform", "translateY(0)"),
                (20, "transform", "translateY(0)"),
                (40, "transform", "translateY(-10px)"),
                (50, "transform", "translateY(0)"),
                (60, "transform", "translateY(-5px)"),
                (80, "transform", "translateY(0)"),
                (100, "transform", "translateY(0)"),
            ],
            Self::Fade => &[
                (0, "opacity", "0.8"),
                (50, "opacity", "1"),
                (100, "opacity", "0.8"),
            ],
            Self::Slide => &[
                (0, "transform", "translateX(-10px)"),
                (50, "transform", "translateX(10px)"),
                (100, "transform", "translateX(-10px)"),
            ],
            Self::Rotate => &[
                (0, "transform", "rotate(0deg)"),
                (100, "transform", "rotate(360deg)"),
            ],
        }
    }

    /// Keyframe timeline of this preset.
    pub fn timeline(self) -> KeyframeTimeline {
        KeyframeTimeline::from_triples(self.frames())
    }

    /// `@keyframes` block for this preset.
    pub fn keyframes_css(self) -> String {
        self.timeline().render_keyframes(self.name())
    }
}

/// Canned compound animation shipped alongside the presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTemplate {
    name: &'static str,
    duration: &'static str,
    easing: Easing,
    frames: &'static [(u8, &'static str, &'static str)],
}

/// Ready-made compound animations.
pub static TEMPLATES: [AnimationTemplate; 2] = [
    AnimationTemplate {
        name: "slide_bounce",
        duration: "1.5s",
        easing: Easing::EaseOut,
        frames: &[
            (0, "transform", "translateX(-100px) scale(0.8)"),
            (0, "opacity", "0"),
            (60, "transform", "translateX(20px) scale(1.1)"),
            (60, "opacity", "1"),
            (80, "transform", "translateX(-10px) scale(1.05)"),
            (100, "transform", "translateX(0) scale(1)"),
            (100, "opacity", "1"),
        ],
    },
    AnimationTemplate {
        name: "fade_scale",
        duration: "2s",
        easing: Easing::EaseInOut,
        frames: &[
            (0, "transform", "scale(0.5)"),
            (0, "opacity", "0"),
            (50, "transform", "scale(1.1)"),
            (50, "opacity", "0.8"),
            (100, "transform", "scale(1)"),
            (100, "opacity", "1"),
        ],
    },
];

impl AnimationTemplate {
    /// Look up a template by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<&'static Self> {
        let name = name.trim().to_ascii_lowercase();
        TEMPLATES.iter().find(|t| t.name == name)
    }

    /// Template name, also the `@keyframes` name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Easing curve of this template.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// `<name> <duration> <easing>` animation shorthand.
    pub fn shorthand(&self) -> String {
        format!("{} {} {}", self.name, self.duration, self.easing)
    }

    /// Keyframe timeline of this template.
    pub fn timeline(&self) -> KeyframeTimeline {
        KeyframeTimeline::from_triples(self.frames)
    }

    /// `@keyframes` block followed by the `.animation-<name>` rule.
    pub fn css(&self) -> String {
        format!(
            "{}\n{}",
            self.timeline().render_keyframes(self.name),
            render_animation_rule(self.name, &self.shorthand())
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poster/preset.rs"]
mod tests;
