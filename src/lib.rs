//! Animated HTML poster generation.
//!
//! A poster is either animated with a built-in preset or with keyframes compiled from a
//! free-text description (Chinese or English keywords such as "慢速旋转" or "fast bounce").
//! Posters can also be delegated wholesale to an OpenAI-compatible completion endpoint.
#![forbid(unsafe_code)]

mod completion;
mod describe;
mod foundation;
mod keyframes;
mod poster;

pub use completion::client::{CompletionClient, HttpCompletionClient, PosterDelegate};
pub use completion::config::{CompletionConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use completion::prompt::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole,
    ChoiceMessage, SYSTEM_PROMPT, build_request, clean_completion, extract_content,
    poster_prompt,
};
pub use describe::extract::{FeatureSet, extract};
pub use describe::keywords::{
    Easing, Effect, KeywordTable, MovementKeywords, MovementKind, Timing,
};
pub use foundation::error::{PosterError, PosterResult};
pub use foundation::html::escape_html;
pub use keyframes::synth::{
    AnimationArtifact, animation_name, animation_shorthand, build_timeline, compile_description,
    movement_contributions, synthesize,
};
pub use keyframes::timeline::{KeyframeTimeline, render_animation_rule};
pub use poster::decor::{
    DECORATIONS, SHORT_CONTENT_CHARS, TAGLINES, enhance_content, pick_decorations,
};
pub use poster::page::{PageAnimation, PosterPage, TIMESTAMP_FORMAT};
pub use poster::preset::{AnimationTemplate, PresetAnimation, TEMPLATES};
pub use poster::service::{
    AnimationInfo, AnimationMode, PosterRequest, PosterResponse, PosterService, Suggestions,
    suggestions,
};
pub use poster::theme::ColorTheme;
