use crate::{
    completion::config::CompletionConfig,
    completion::prompt::{
        ChatCompletionRequest, ChatCompletionResponse, build_request, clean_completion,
        extract_content,
    },
    foundation::error::{PosterError, PosterResult},
};

/// Sends chat-completion requests to a model.
pub trait CompletionClient {
    /// Send `request` and return the decoded response.
    fn complete(&self, request: &ChatCompletionRequest) -> PosterResult<ChatCompletionResponse>;
}

/// [`CompletionClient`] speaking to an OpenAI-compatible HTTP endpoint.
///
/// One attempt per call. Any non-2xx status, transport failure or undecodable body is a
/// [`PosterError::Completion`].
pub struct HttpCompletionClient {
    agent: ureq::Agent,
    api_url: String,
    api_key: String,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl HttpCompletionClient {
    /// Client for `config`. Fails with a validation error when no API key is set.
    pub fn new(config: &CompletionConfig) -> PosterResult<Self> {
        let api_key = config
            .api_key()
            .ok_or_else(|| PosterError::validation("an API key is required for delegated posters"))?
            .to_string();

        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build()
            .into();

        Ok(Self {
            agent,
            api_url: config.api_url.clone(),
            api_key,
        })
    }
}

impl CompletionClient for HttpCompletionClient {
    #[tracing::instrument(skip_all, fields(url = %self.api_url, model = %request.model))]
    fn complete(&self, request: &ChatCompletionRequest) -> PosterResult<ChatCompletionResponse> {
        let mut response = self
            .agent
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(request)
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => {
                    PosterError::completion(format!("endpoint returned HTTP {code}"))
                }
                other => PosterError::completion(format!("request failed: {other}")),
            })?;

        response
            .body_mut()
            .read_json::<ChatCompletionResponse>()
            .map_err(|e| PosterError::completion(format!("decode response: {e}")))
    }
}

/// Hands a whole poster to a language model and returns its HTML.
#[derive(Debug)]
pub struct PosterDelegate<C> {
    client: C,
    config: CompletionConfig,
}

impl PosterDelegate<HttpCompletionClient> {
    /// Delegate backed by [`HttpCompletionClient`].
    pub fn from_config(config: CompletionConfig) -> PosterResult<Self> {
        let client = HttpCompletionClient::new(&config)?;
        Ok(Self::new(client, config))
    }
}

impl<C: CompletionClient> PosterDelegate<C> {
    /// Delegate using `client`, with model and sampling settings from `config`.
    pub fn new(client: C, config: CompletionConfig) -> Self {
        Self { client, config }
    }

    /// Settings in use.
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Generate poster HTML for `description`.
    ///
    /// The model output is returned with code fences stripped; it is not validated as HTML.
    #[tracing::instrument(skip_all, fields(model = %self.config.model))]
    pub fn generate_poster_code(&self, description: &str) -> PosterResult<String> {
        let description = description.trim();
        if description.is_empty() {
            return Err(PosterError::validation("poster description must not be empty"));
        }

        let request = build_request(&self.config, description);
        let response = self.client.complete(&request)?;
        let html = clean_completion(extract_content(&response)?);
        tracing::info!(bytes = html.len(), "received delegated poster");
        Ok(html)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/completion/client.rs"]
mod tests;
