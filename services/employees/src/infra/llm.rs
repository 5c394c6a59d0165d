use std::time::Duration;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::domain::repository::ContentGenerator;
use crate::error::DispatchError;

/// Chat-completions client for Groq's OpenAI-compatible API.
#[derive(Clone)]
pub struct GroqContentGenerator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GroqContentGenerator {
    pub fn new(
        base_url: &str,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build groq http client")?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            model,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Text of the first choice, trimmed. Blank output counts as a failure.
fn first_choice(response: ChatResponse) -> Result<String, DispatchError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| DispatchError::Generation("empty completion".into()))
}

impl ContentGenerator for GroqContentGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DispatchError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DispatchError::Generation(e.to_string()))?
            .json::<ChatResponse>()
            .await
            .map_err(|e| DispatchError::Generation(format!("decode completion: {e}")))?;
        first_choice(response)
    }
}
