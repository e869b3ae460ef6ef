use std::{fs::File, io::BufReader, path::Path};

use chrono::NaiveDateTime;
use rand::Rng;

use crate::{
    describe::extract::FeatureSet,
    describe::keywords::KeywordTable,
    foundation::error::{PosterError, PosterResult},
    keyframes::synth::compile_description,
    poster::decor::{enhance_content, pick_decorations},
    poster::page::{PageAnimation, PosterPage},
    poster::preset::{AnimationTemplate, PresetAnimation},
    poster::theme::ColorTheme,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which animation path a poster request takes.
pub enum AnimationMode {
    /// Generate keyframes from `animation_description`.
    Custom,
    /// Use the named preset (anything other than `custom` lands here).
    #[default]
    #[serde(other)]
    Preset,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Poster generation request as submitted by a form or JSON file.
pub struct PosterRequest {
    /// Poster heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Body text.
    #[serde(default = "default_content", alias = "text")]
    pub content: String,
    /// Preset or custom animation.
    #[serde(default)]
    pub animation_type: AnimationMode,
    /// Preset (or canned template) name, used in preset mode.
    #[serde(default = "default_animation")]
    pub animation: String,
    /// Free-text animation description, used in custom mode.
    #[serde(default)]
    pub animation_description: String,
    /// Colour theme name.
    #[serde(default = "default_color", alias = "color_theme")]
    pub color: String,
}

fn default_title() -> String {
    "动态海报".to_string()
}

fn default_content() -> String {
    "这是一个动态海报".to_string()
}

fn default_animation() -> String {
    PresetAnimation::Pulse.name().to_string()
}

fn default_color() -> String {
    ColorTheme::default().name().to_string()
}

impl Default for PosterRequest {
    fn default() -> Self {
        Self {
            title: default_title(),
            content: default_content(),
            animation_type: AnimationMode::default(),
            animation: default_animation(),
            animation_description: String::new(),
            color: default_color(),
        }
    }
}

impl PosterRequest {
    /// Parse a request from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> PosterResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PosterError::validation(format!("parse poster request JSON: {e}")))
    }

    /// Parse a request from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PosterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PosterError::validation(format!("open poster request '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// True when the request asks for a generated animation and describes one.
    pub fn wants_custom_animation(&self) -> bool {
        self.animation_type == AnimationMode::Custom
            && !self.animation_description.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Summary of the animation embedded in a generated poster.
pub enum AnimationInfo {
    /// Preset (or canned template) selected by name.
    Preset {
        /// Requested name.
        name: String,
    },
    /// Keyframes generated from a description.
    Custom {
        /// Generated animation name.
        name: String,
        /// Features the animation was built from.
        keywords: FeatureSet,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Outcome of a poster request.
pub struct PosterResponse {
    /// Whether a poster was produced.
    pub success: bool,
    /// Rendered HTML document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_html: Option<String>,
    /// Animation summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_info: Option<AnimationInfo>,
    /// Error text for failed requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// User-facing status message.
    pub message: String,
}

impl PosterResponse {
    /// Failure response carrying `err`.
    pub fn failure(err: &PosterError) -> Self {
        Self {
            success: false,
            poster_html: None,
            animation_info: None,
            error: Some(err.to_string()),
            message: "海报生成失败，请重试！".to_string(),
        }
    }

    /// Copy of this response without the HTML payload, for logging and summaries.
    pub fn without_html(&self) -> Self {
        Self {
            poster_html: None,
            ..self.clone()
        }
    }

    /// Pretty-printed JSON of this response.
    pub fn to_json_pretty(&self) -> PosterResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PosterError::serde(format!("serialize poster response: {e}")))
    }
}

/// Turns poster requests into rendered posters.
///
/// Owns the keyword table used for custom animations; everything else is stateless, so one
/// service can be shared across any number of concurrent requests.
#[derive(Clone, Debug, Default)]
pub struct PosterService {
    keywords: KeywordTable,
}

impl PosterService {
    /// Service using `keywords` for description matching.
    pub fn new(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    /// Keyword table in use.
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Generate a poster with the thread RNG and the local clock.
    pub fn generate_now(&self, request: &PosterRequest) -> PosterResponse {
        let now = chrono::Local::now().naive_local();
        self.generate(request, &mut rand::rng(), now)
    }

    /// Generate a poster.
    ///
    /// `rng` drives content taglines and decoration picks; `generated_at` is printed in the
    /// footer. Both are injected so output can be reproduced.
    #[tracing::instrument(skip_all, fields(mode = ?request.animation_type, theme = %request.color))]
    pub fn generate<R: Rng>(
        &self,
        request: &PosterRequest,
        rng: &mut R,
        generated_at: NaiveDateTime,
    ) -> PosterResponse {
        let content = enhance_content(&request.content, rng);
        let decorations = pick_decorations(rng);
        let theme = ColorTheme::resolve(&request.color);

        let base = PosterPage {
            title: &request.title,
            content: &content,
            theme,
            animation: PageAnimation::Static,
            decorations: &decorations,
            generated_at,
        };

        if request.wants_custom_animation() {
            let artifact = compile_description(&self.keywords, &request.animation_description);
            let html = PosterPage {
                animation: PageAnimation::Custom {
                    name: &artifact.name,
                    css: &artifact.css,
                },
                ..base.clone()
            }
            .render();
            tracing::info!(name = %artifact.name, "rendered custom poster");
            return PosterResponse {
                success: true,
                poster_html: Some(html),
                message: format!("自定义动画生成成功！动画名称: {}", artifact.name),
                animation_info: Some(AnimationInfo::Custom {
                    name: artifact.name,
                    keywords: artifact.features,
                }),
                error: None,
            };
        }

        let html = if let Some(template) = AnimationTemplate::from_name(&request.animation) {
            let css = template.css();
            PosterPage {
                animation: PageAnimation::Custom {
                    name: template.name(),
                    css: &css,
                },
                ..base.clone()
            }
            .render()
        } else {
            match PresetAnimation::from_name(&request.animation) {
                Some(preset) => PosterPage {
                    animation: PageAnimation::Preset(preset),
                    ..base
                }
                .render(),
                None => {
                    tracing::warn!(
                        animation = %request.animation,
                        "unknown preset animation, rendering a static poster"
                    );
                    base.render()
                }
            }
        };
        tracing::info!(animation = %request.animation, "rendered preset poster");

        PosterResponse {
            success: true,
            poster_html: Some(html),
            animation_info: Some(AnimationInfo::Preset {
                name: request.animation.clone(),
            }),
            error: None,
            message: "海报生成成功！".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Canned inspiration shown next to the poster form.
pub struct Suggestions {
    /// Title ideas.
    pub titles: Vec<String>,
    /// Body text ideas.
    pub contents: Vec<String>,
    /// Preset animation names.
    pub animations: Vec<String>,
    /// Colour theme names.
    pub colors: Vec<String>,
}

/// Fixed suggestion catalogue.
pub fn suggestions() -> Suggestions {
    let owned = |list: &[&str]| list.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();
    Suggestions {
        titles: owned(&[
            "✨ 精彩动态海报",
            "🎯 专业设计展示",
            "🚀 创新视觉体验",
            "🎨 艺术创作空间",
            "💡 智慧视觉设计",
        ]),
        contents: owned(&[
            "探索无限可能，创造独特价值，让您的想法成为现实",
            "专业团队精心打造，为您提供最优质的视觉体验",
            "融合创新理念与美学设计，呈现令人印象深刻的作品",
            "每一个细节都经过精心雕琢，展现完美的视觉效果",
            "用创意点亮生活，让设计传递价值，成就您的品牌",
        ]),
        animations: PresetAnimation::ALL
            .iter()
            .map(|p| p.name().to_string())
            .collect(),
        colors: ColorTheme::ALL
            .iter()
            .map(|t| t.name().to_string())
            .collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poster/service.rs"]
mod tests;
