use std::fmt::Write as _;

use chrono::NaiveDateTime;

use crate::{
    foundation::html::escape_html, poster::preset::PresetAnimation, poster::theme::ColorTheme,
};

/// Timestamp format shown in the poster footer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

const BASE_CSS: &str = r#"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Arial', 'Microsoft YaHei', sans-serif;
    overflow: hidden;
    height: 100vh;
    display: flex;
    justify-content: center;
    align-items: center;
}

.poster-content {
    position: relative;
    z-index: 10;
    height: 100%;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    padding: 40px;
    color: white;
}

.poster-title {
    font-size: 3em;
    font-weight: bold;
    margin-bottom: 30px;
    text-shadow: 2px 2px 4px rgba(0,0,0,0.5);
    animation: titleGlow 3s ease-in-out infinite alternate;
}

.poster-text {
    font-size: 1.5em;
    line-height: 1.6;
    margin-bottom: 40px;
    text-shadow: 1px 1px 2px rgba(0,0,0,0.5);
    max-width: 80%;
}

.poster-footer {
    position: absolute;
    bottom: 20px;
    right: 30px;
    display: flex;
    gap: 15px;
    align-items: center;
}

.timestamp {
    font-size: 0.9em;
    opacity: 0.8;
}

.ai-badge {
    background: rgba(255,255,255,0.2);
    padding: 5px 10px;
    border-radius: 15px;
    font-size: 0.8em;
    border: 1px solid rgba(255,255,255,0.3);
}

.animation-badge {
    background: rgba(255,255,255,0.3);
    padding: 3px 8px;
    border-radius: 10px;
    font-size: 0.7em;
    font-family: monospace;
}

.decoration {
    position: absolute;
    font-size: 2em;
    opacity: 0.6;
    animation: float 6s ease-in-out infinite;
}

.decoration:nth-child(1) { top: 10%; left: 10%; animation-delay: 0s; }
.decoration:nth-child(2) { top: 20%; right: 15%; animation-delay: 1s; }
.decoration:nth-child(3) { bottom: 20%; left: 20%; animation-delay: 2s; }
.decoration:nth-child(4) { bottom: 10%; right: 10%; animation-delay: 3s; }

@keyframes titleGlow {
    from { text-shadow: 2px 2px 4px rgba(0,0,0,0.5); }
    to { text-shadow: 2px 2px 20px rgba(255,255,255,0.5), 0 0 30px rgba(255,255,255,0.3); }
}

@keyframes float {
    0%, 100% { transform: translateY(0px) rotate(0deg); }
    50% { transform: translateY(-20px) rotate(180deg); }
}"#;

/// How the poster container is animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAnimation<'a> {
    /// No container animation.
    Static,
    /// One of the built-in presets, applied through the container rule.
    Preset(PresetAnimation),
    /// Generated or canned animation applied through its `.animation-<name>` class.
    Custom {
        /// Animation name.
        name: &'a str,
        /// `@keyframes` block plus class rule.
        css: &'a str,
    },
}

/// Everything needed to render one poster document.
#[derive(Clone, Debug)]
pub struct PosterPage<'a> {
    /// Poster heading (escaped on render).
    pub title: &'a str,
    /// Body text (escaped on render).
    pub content: &'a str,
    /// Background theme.
    pub theme: ColorTheme,
    /// Container animation.
    pub animation: PageAnimation<'a>,
    /// Decoration glyphs, in placement order.
    pub decorations: &'a [&'a str],
    /// Footer timestamp.
    pub generated_at: NaiveDateTime,
}

impl PosterPage<'_> {
    /// Stylesheet embedded in the page `<style>` element.
    pub fn stylesheet(&self) -> String {
        let mut css = String::with_capacity(BASE_CSS.len() + 1024);
        css.push_str(BASE_CSS);

        let _ = write!(
            css,
            "\n\n.poster-main {{\n    {}\n    width: 80%;\n    max-width: 800px;\n    height: 500px;\n    border-radius: 20px;\n    box-shadow: 0 20px 60px rgba(0,0,0,0.3);\n    position: relative;\n    overflow: hidden;\n",
            self.theme.background_css()
        );
        if let PageAnimation::Preset(preset) = self.animation {
            let _ = writeln!(css, "    {}", preset.declaration());
        }
        css.push('}');

        match self.animation {
            PageAnimation::Static => {}
            PageAnimation::Preset(preset) => {
                css.push_str("\n\n");
                css.push_str(&preset.keyframes_css());
            }
            PageAnimation::Custom { css: custom, .. } => {
                css.push_str("\n\n");
                css.push_str(custom);
            }
        }
        css
    }

    /// Render the complete HTML document.
    pub fn render(&self) -> String {
        let title = escape_html(self.title);
        let content = escape_html(self.content);
        let stamp = self.generated_at.format(TIMESTAMP_FORMAT);

        let (main_class, badge) = match self.animation {
            PageAnimation::Custom { name, .. } => {
                let name = escape_html(name);
                (
                    format!("poster-main animation-{name}"),
                    format!("\n                <span class=\"animation-badge\">{name}</span>"),
                )
            }
            PageAnimation::Static | PageAnimation::Preset(_) => {
                ("poster-main".to_string(), String::new())
            }
        };

        let decorations = self
            .decorations
            .iter()
            .map(|glyph| format!("<div class=\"decoration\">{}</div>", escape_html(glyph)))
            .collect::<String>();

        let mut out = String::with_capacity(8 * 1024);
        let _ = write!(
            out,
            r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="{main_class}">
        {decorations}
        <div class="poster-content">
            <h1 class="poster-title">{title}</h1>
            <p class="poster-text">{content}</p>
            <div class="poster-footer">
                <span class="timestamp">{stamp}</span>
                <span class="ai-badge">AI生成</span>{badge}
            </div>
        </div>
    </div>
</body>
</html>
"#,
            css = self.stylesheet(),
        );
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poster/page.rs"]
mod tests;
