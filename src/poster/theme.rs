#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Background gradient applied to the poster container.
pub enum ColorTheme {
    /// `#667eea` to `#764ba2`.
    #[default]
    GradientBlue,
    /// `#f093fb` to `#f5576c`.
    GradientPurple,
    /// `#fa709a` to `#fee140`.
    GradientSunset,
    /// `#30cfd0` to `#330867`.
    GradientForest,
    /// `#a8edea` to `#fed6e3`.
    GradientOcean,
}

impl ColorTheme {
    /// All themes in catalogue order.
    pub const ALL: [Self; 5] = [
        Self::GradientBlue,
        Self::GradientPurple,
        Self::GradientSunset,
        Self::GradientForest,
        Self::GradientOcean,
    ];

    /// Look up a theme by its kebab-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Look up a theme, falling back to [`ColorTheme::GradientBlue`] for unknown names.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown colour theme, using gradient-blue");
            Self::default()
        })
    }

    /// Catalogue name.
    pub fn name(self) -> &'static str {
        match self {
            Self::GradientBlue => "gradient-blue",
            Self::GradientPurple => "gradient-purple",
            Self::GradientSunset => "gradient-sunset",
            Self::GradientForest => "gradient-forest",
            Self::GradientOcean => "gradient-ocean",
        }
    }

    /// `(from, to)` gradient stops.
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Self::GradientBlue => ("#667eea", "#764ba2"),
            Self::GradientPurple => ("#f093fb", "#f5576c"),
            Self::GradientSunset => ("#fa709a", "#fee140"),
            Self::GradientForest => ("#30cfd0", "#330867"),
            Self::GradientOcean => ("#a8edea", "#fed6e3"),
        }
    }

    /// `background:` declaration for this theme.
    pub fn background_css(self) -> String {
        let (from, to) = self.stops();
        format!("background: linear-gradient(135deg, {from} 0%, {to} 100%);")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poster/theme.rs"]
mod tests;
