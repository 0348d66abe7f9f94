// Chat Agent: travel-assistant replies via an OpenAI-compatible endpoint

use std::io::{self, Write};

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::OperationTracer;
use crate::models::{ChatRequest, ChatResponse};

pub const READY_REPLY: &str = "I'm ready to help! Ask me about activities, restaurants, or travel tips.";
pub const FALLBACK_REPLY: &str = "I'm here to help with your travel plans! What would you like to know?";
pub const MAX_TOKENS: u32 = 300;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Single-line JSON with `", "` and `": "` separators and non-ASCII
/// escaped as `\uXXXX`, the layout the prompt context is sent in.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

pub fn system_prompt(context: &Map<String, Value>) -> Result<String, ApiError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, SpacedFormatter);
    context.serialize(&mut serializer)?;
    Ok(format!(
        "You are a helpful travel assistant. Context: {}",
        String::from_utf8_lossy(&buffer)
    ))
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

#[derive(Clone)]
pub struct ChatAgent {
    client: Client,
    api_key: Option<String>,
    url: String,
    model: String,
    tracer: OperationTracer,
}

impl ChatAgent {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.openai_api_key.clone(),
            url: build_chat_url(&config.openai_base_url),
            model: config.chat_model.clone(),
            tracer: OperationTracer::new(config.tracing_enabled),
        }
    }

    /// Always answers; provider problems turn into canned replies.
    pub async fn reply(&self, request: ChatRequest) -> ChatResponse {
        let ChatRequest { message, context } = request;

        let Some(api_key) = self.api_key.as_deref() else {
            info!("OPENAI_API_KEY not set, sending canned reply");
            return ChatResponse {
                response: READY_REPLY.to_string(),
                context,
            };
        };

        let response = match self
            .tracer
            .run_fallible("chat_with_agent", self.complete(api_key, &message, &context))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Chat error: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        ChatResponse { response, context }
    }

    async fn complete(&self, api_key: &str, message: &str, context: &Map<String, Value>) -> Result<String, ApiError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system_prompt(context)?},
                {"role": "user", "content": message}
            ],
            "max_tokens": MAX_TOKENS
        });

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UpstreamStatus { status: status.as_u16(), body });
        }

        let completion: ChatCompletion = serde_json::from_slice(&response.bytes().await?)?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ApiError::MalformedResponse("completion has no message content".to_string()))
    }
}
