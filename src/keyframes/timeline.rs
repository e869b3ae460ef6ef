use std::collections::BTreeMap;

/// Percentage-indexed CSS property assignments for one `@keyframes` block.
///
/// Percentages are kept in ascending order. Within a percentage each property appears once;
/// writing an existing property replaces its value in place, so declaration order is the order
/// in which properties were first written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyframeTimeline {
    frames: BTreeMap<u8, Vec<(String, String)>>,
}

impl KeyframeTimeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a timeline from `(percent, property, value)` triples applied in order.
    pub fn from_triples(triples: &[(u8, &str, &str)]) -> Self {
        let mut out = Self::new();
        out.apply(triples);
        out
    }

    /// Write `property: value` at `percent`, last write wins.
    ///
    /// Writes past 100% are dropped; they never reach the 100% frame.
    pub fn set(&mut self, percent: u8, property: &str, value: &str) {
        if percent > 100 {
            tracing::warn!(percent, property, "ignoring keyframe write past 100%");
            return;
        }
        let props = self.frames.entry(percent).or_default();
        match props.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(value);
            }
            None => props.push((property.to_string(), value.to_string())),
        }
    }

    /// Apply a batch of `(percent, property, value)` writes in order.
    pub fn apply(&mut self, triples: &[(u8, &str, &str)]) {
        for (percent, property, value) in triples {
            self.set(*percent, property, value);
        }
    }

    /// Value of `property` at `percent`, if any write touched it.
    pub fn get(&self, percent: u8, property: &str) -> Option<&str> {
        self.frames
            .get(&percent)?
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Declarations at `percent` in declaration order.
    pub fn properties(&self, percent: u8) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.frames
            .get(&percent)
            .into_iter()
            .flatten()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Percentages that carry at least one declaration, ascending.
    pub fn percentages(&self) -> impl Iterator<Item = u8> + '_ {
        self.frames
            .iter()
            .filter(|(_, props)| !props.is_empty())
            .map(|(percent, _)| *percent)
    }

    /// True when no percentage carries a declaration.
    pub fn is_empty(&self) -> bool {
        self.percentages().next().is_none()
    }

    /// Render as `@keyframes <name> { ... }`.
    ///
    /// One line per non-empty percentage; an empty timeline renders as `@keyframes <name> {}`.
    pub fn render_keyframes(&self, name: &str) -> String {
        let lines = self
            .frames
            .iter()
            .filter(|(_, props)| !props.is_empty())
            .map(|(percent, props)| {
                let decls = props
                    .iter()
                    .map(|(property, value)| format!("{property}: {value}"))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("    {percent}% {{ {decls}; }}")
            })
            .collect::<Vec<_>>();

        if lines.is_empty() {
            format!("@keyframes {name} {{}}")
        } else {
            format!("@keyframes {name} {{\n{}\n}}", lines.join("\n"))
        }
    }
}

/// Render the `.animation-<name>` class rule that applies an animation shorthand.
pub fn render_animation_rule(name: &str, shorthand: &str) -> String {
    format!(".animation-{name} {{\n    animation: {shorthand};\n}}")
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/timeline.rs"]
mod tests;
