use crate::{
    completion::config::CompletionConfig,
    foundation::error::{PosterError, PosterResult},
};

/// Persona sent as the system message.
pub const SYSTEM_PROMPT: &str = "你是一个专业的前端开发工程师，擅长创建动态海报。";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Author of a chat message.
pub enum ChatRole {
    /// Instructions framing the conversation.
    System,
    /// End-user turn.
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One chat message.
pub struct ChatMessage {
    /// Author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// System message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// User message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// OpenAI-compatible chat-completion request body.
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Completion length cap.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling mass.
    pub top_p: f64,
    /// Always `false`; the whole document is read in one response.
    pub stream: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Subset of a chat-completion response this crate reads.
pub struct ChatCompletionResponse {
    /// Candidate completions.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One candidate completion.
pub struct ChatChoice {
    /// Generated message.
    pub message: ChoiceMessage,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Message inside a [`ChatChoice`]; `content` may be absent or null.
pub struct ChoiceMessage {
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

/// User prompt asking for a complete HTML poster matching `description`.
pub fn poster_prompt(description: &str) -> String {
    format!(
        "\n{SYSTEM_PROMPT}请根据以下自然语言描述生成完整的HTML海报代码：\n\n\
         {description}\n\n\
         要求：\n\
         1. 生成完整的HTML代码，包括HTML、CSS和JavaScript\n\
         2. 确保动画效果流畅自然\n\
         3. 使用现代CSS技术实现动画效果\n\
         4. 代码结构清晰，易于理解\n\
         5. 包含适当的注释\n\
         6. 确保在浏览器中能直接运行\n\n\
         请只返回HTML代码，不要包含任何解释或说明。\n"
    )
}

/// Chat request for `description` using the sampling settings in `config`.
pub fn build_request(config: &CompletionConfig, description: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(poster_prompt(description)),
        ],
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        top_p: config.top_p,
        stream: false,
    }
}

/// Text of `choices[0].message.content`.
pub fn extract_content(response: &ChatCompletionResponse) -> PosterResult<&str> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .ok_or_else(|| {
            PosterError::completion("response carries no choices[0].message.content")
        })
}

/// Strip markdown code fences from a completion and trim it.
///
/// Every "```html" (and one newline right after it) and every bare "```" is removed,
/// wherever it occurs.
pub fn clean_completion(raw: &str) -> String {
    const HTML_FENCE: &str = "```html";
    const FENCE: &str = "```";

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw.trim();
    while let Some(at) = rest.find(FENCE) {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        if let Some(after) = rest.strip_prefix(HTML_FENCE) {
            rest = after.strip_prefix('\n').unwrap_or(after);
        } else {
            rest = &rest[FENCE.len()..];
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/completion/prompt.rs"]
mod tests;
