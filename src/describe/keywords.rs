use std::{fmt, fs::File, io::BufReader, path::Path, str::FromStr};

use crate::foundation::error::{PosterError, PosterResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
/// Canonical motion primitive that a description can ask for.
pub enum MovementKind {
    /// Horizontal slide-in.
    Slide,
    /// Vertical hop.
    Bounce,
    /// Opacity ramp.
    Fade,
    /// Full turn.
    Rotate,
    /// Grow with overshoot.
    Scale,
    /// Gentle throb.
    Pulse,
}

impl MovementKind {
    /// All movement kinds in their canonical (default scan) order.
    pub const ALL: [Self; 6] = [
        Self::Slide,
        Self::Bounce,
        Self::Fade,
        Self::Rotate,
        Self::Scale,
        Self::Pulse,
    ];

    /// Lowercase tag used in animation names and serialized feature sets.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Bounce => "bounce",
            Self::Fade => "fade",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::Pulse => "pulse",
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
/// Duration bucket selected by timing keywords.
pub enum Timing {
    /// `1s`.
    Fast,
    /// `2s`.
    #[default]
    Normal,
    /// `3s`.
    Slow,
}

impl Timing {
    /// CSS `<time>` value for this bucket.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Fast => "1s",
            Self::Normal => "2s",
            Self::Slow => "3s",
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl From<Timing> for String {
    fn from(value: Timing) -> Self {
        value.as_css().to_string()
    }
}

impl TryFrom<String> for Timing {
    type Error = PosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim() {
            "1s" => Ok(Self::Fast),
            "2s" => Ok(Self::Normal),
            "3s" => Ok(Self::Slow),
            other => Err(PosterError::validation(format!(
                "unknown timing '{other}' (expected 1s, 2s or 3s)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
/// CSS easing function applied to a generated animation.
pub enum Easing {
    /// `ease`.
    #[default]
    Ease,
    /// `linear`.
    Linear,
    /// `ease-out`.
    EaseOut,
    /// `ease-in-out`.
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier([f64; 4]),
}

impl Easing {
    /// Overshooting curve shared by the elastic and bounce easing keywords.
    pub const ELASTIC: Self = Self::CubicBezier([0.68, -0.55, 0.265, 1.55]);
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ease => f.write_str("ease"),
            Self::Linear => f.write_str("linear"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier([x1, y1, x2, y2]) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl FromStr for Easing {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "ease" => return Ok(Self::Ease),
            "linear" => return Ok(Self::Linear),
            "ease-out" => return Ok(Self::EaseOut),
            "ease-in-out" => return Ok(Self::EaseInOut),
            _ => {}
        }

        let args = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| PosterError::validation(format!("unknown easing '{s}'")))?;

        let mut points = [0.0f64; 4];
        let mut count = 0usize;
        for part in args.split(',') {
            if count == points.len() {
                return Err(PosterError::validation(
                    "cubic-bezier takes exactly 4 numbers",
                ));
            }
            points[count] = part.trim().parse::<f64>().map_err(|e| {
                PosterError::validation(format!("cubic-bezier argument '{}': {e}", part.trim()))
            })?;
            count += 1;
        }
        if count != points.len() {
            return Err(PosterError::validation(
                "cubic-bezier takes exactly 4 numbers",
            ));
        }
        if points.iter().any(|v| !v.is_finite()) {
            return Err(PosterError::validation(
                "cubic-bezier arguments must be finite",
            ));
        }
        Ok(Self::CubicBezier(points))
    }
}

impl From<Easing> for String {
    fn from(value: Easing) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Easing {
    type Error = PosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Modifier appended verbatim to the animation shorthand.
pub enum Effect {
    /// `infinite` iteration count.
    Infinite,
    /// `alternate` direction.
    Alternate,
}

impl Effect {
    /// CSS keyword for this modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Infinite => "infinite",
            Self::Alternate => "alternate",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Keyword variants that map onto one movement kind.
pub struct MovementKeywords {
    /// Canonical kind produced when any keyword matches.
    pub kind: MovementKind,
    /// Literal substrings (any language) that select this kind.
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
/// Immutable keyword lookup table driving feature extraction.
///
/// The order of [`KeywordTable::movements`] is the scan order: extracted movements come out in
/// this order, regardless of where their keywords appear in the description. Reordering the
/// table therefore changes the generated animation name and the keyframe merge order.
///
/// All keywords are stored lowercased; matching lowercases the description and looks for plain
/// substrings. Loading rejects categories other than the ones below.
pub struct KeywordTable {
    pub(crate) movements: Vec<MovementKeywords>,
    #[serde(default)]
    pub(crate) fast: Vec<String>,
    #[serde(default)]
    pub(crate) slow: Vec<String>,
    #[serde(default)]
    pub(crate) linear: Vec<String>,
    #[serde(default)]
    pub(crate) elastic: Vec<String>,
    #[serde(default)]
    pub(crate) bounce_easing: Vec<String>,
    #[serde(default)]
    pub(crate) infinite: Vec<String>,
    #[serde(default)]
    pub(crate) alternate: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

impl Default for KeywordTable {
    /// Built-in Chinese + English vocabulary.
    fn default() -> Self {
        let movement = |kind, list: &[&str]| MovementKeywords {
            kind,
            keywords: words(list),
        };
        Self {
            movements: vec![
                movement(MovementKind::Slide, &["滑动", "滑入", "slide", "move"]),
                movement(MovementKind::Bounce, &["弹跳", "bounce", "跳跃"]),
                movement(MovementKind::Fade, &["淡入", "淡出", "fade", "透明"]),
                movement(MovementKind::Rotate, &["旋转", "rotate", "转动"]),
                movement(MovementKind::Scale, &["缩放", "放大", "缩小", "scale"]),
                movement(MovementKind::Pulse, &["脉冲", "pulse", "心跳"]),
            ],
            fast: words(&["快速", "fast"]),
            slow: words(&["慢速", "slow"]),
            linear: words(&["线性", "linear"]),
            elastic: words(&["弹性", "elastic"]),
            bounce_easing: words(&["弹跳", "bounce"]),
            infinite: words(&["无限", "循环", "infinite", "loop"]),
            alternate: words(&["交替", "alternate", "来回"]),
        }
    }
}

impl KeywordTable {
    /// Parse and validate a keyword table from JSON.
    ///
    /// Unreadable JSON is a config error; well-formed JSON with unknown categories, unknown
    /// movement kinds or missing `movements` is a validation error.
    pub fn from_reader<R: std::io::Read>(r: R) -> PosterResult<Self> {
        let raw: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| PosterError::config(format!("parse keyword table JSON: {e}")))?;
        let table: Self = serde_json::from_value(raw)
            .map_err(|e| PosterError::validation(format!("invalid keyword table: {e}")))?;
        table.normalized()
    }

    /// Parse and validate a keyword table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PosterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PosterError::config(format!("open keyword table '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Return a copy of this table whose movement scan order is `order`.
    ///
    /// `order` must be a permutation of the kinds already present in the table.
    pub fn with_scan_order(&self, order: &[MovementKind]) -> PosterResult<Self> {
        if order.len() != self.movements.len() {
            return Err(PosterError::validation(format!(
                "scan order lists {} kinds but the table has {}",
                order.len(),
                self.movements.len()
            )));
        }
        let mut movements = Vec::with_capacity(order.len());
        for kind in order {
            let entry = self
                .movements
                .iter()
                .find(|m| m.kind == *kind)
                .ok_or_else(|| {
                    PosterError::validation(format!("scan order names unknown kind '{kind}'"))
                })?;
            if movements.iter().any(|m: &MovementKeywords| m.kind == *kind) {
                return Err(PosterError::validation(format!(
                    "scan order lists '{kind}' twice"
                )));
            }
            movements.push(entry.clone());
        }
        Ok(Self {
            movements,
            ..self.clone()
        })
    }

    /// Movement kinds in scan order.
    pub fn scan_order(&self) -> impl Iterator<Item = MovementKind> + '_ {
        self.movements.iter().map(|m| m.kind)
    }

    fn normalized(mut self) -> PosterResult<Self> {
        let mut seen = Vec::with_capacity(self.movements.len());
        for entry in &self.movements {
            if seen.contains(&entry.kind) {
                return Err(PosterError::validation(format!(
                    "movement '{}' is listed more than once",
                    entry.kind
                )));
            }
            seen.push(entry.kind);
        }

        for entry in &mut self.movements {
            lower_all(&mut entry.keywords, entry.kind.as_str())?;
        }
        lower_all(&mut self.fast, "fast")?;
        lower_all(&mut self.slow, "slow")?;
        lower_all(&mut self.linear, "linear")?;
        lower_all(&mut self.elastic, "elastic")?;
        lower_all(&mut self.bounce_easing, "bounce_easing")?;
        lower_all(&mut self.infinite, "infinite")?;
        lower_all(&mut self.alternate, "alternate")?;
        Ok(self)
    }
}

fn lower_all(list: &mut [String], category: &str) -> PosterResult<()> {
    for word in list.iter_mut() {
        if word.trim().is_empty() {
            return Err(PosterError::validation(format!(
                "keyword list '{category}' contains an empty keyword"
            )));
        }
        *word = word.to_lowercase();
    }
    Ok(())
}

/// True when any keyword occurs in the (already lowercased) haystack.
pub(crate) fn any_match(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}

#[cfg(test)]
#[path = "../../tests/unit/describe/keywords.rs"]
mod tests;
