//! Outbound call to the structured-extraction service (Gemini
//! `generateContent` with a constrained JSON response schema).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::resolver::{Extract, ExtractedFilter, ResolveError};
use crate::retry::{self, RetryPolicy};
use crate::settings::Extraction;

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const SYSTEM_PROMPT: &str = "You are a helpful dashboard assistant for a citizen services \
    dashboard for Uttar Pradesh, India. Your task is to understand a user's natural language \
    query and extract two optional fields: the number of days (days) and a specific district \
    name (districtName) from the list of 75 districts of Uttar Pradesh. You must respond *only* \
    with a valid JSON object matching the provided schema. If a district is not mentioned or \
    the user requests all districts, return null for districtName. If the number of days is \
    unclear, default to 30. \
    Example 1: 'show me applications for Lucknow last 45 days' -> \
    {\"days\": 45, \"districtName\": \"Lucknow\"}. \
    Example 2: 'show me data for last 90 days' -> {\"days\": 90, \"districtName\": null}.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateRequest {
    fn new(query: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: query.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": {
                        "days": {
                            "type": "NUMBER",
                            "description": "The number of days the user wants to see data for. \
                                E.g., 'last 30 days' = 30."
                        },
                        "districtName": {
                            "type": "STRING",
                            "description": "The specific district name mentioned by the user \
                                (e.g., 'Lucknow'). Can be null if not mentioned."
                        }
                    },
                    "required": ["days", "districtName"]
                }),
            },
        }
    }
}

/// Client for the extraction endpoint. One instance is shared for the
/// lifetime of the server; every `extract` call runs under the retry
/// policy.
pub(crate) struct GeminiClient {
    client: Client,
    url: String,
    policy: RetryPolicy,
}

impl GeminiClient {
    pub(crate) fn new(settings: &Extraction) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(APP_USER_AGENT).build()?;
        let url = format!(
            "{}/{}:generateContent?key={}",
            settings.api_url.trim_end_matches('/'),
            settings.model,
            settings.api_key,
        );
        Ok(Self {
            client,
            url,
            policy: settings.retry_policy(),
        })
    }

    async fn attempt(&self, query: &str) -> Result<ExtractedFilter, ResolveError> {
        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest::new(query))
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::MalformedResponse(e.to_string()))?;

        // The structured answer is itself a JSON document inside the first
        // candidate's first text part.
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                ResolveError::MalformedResponse("response has no candidate text".to_string())
            })?;
        debug!("extraction candidate: {text}");

        serde_json::from_str(&text)
            .map_err(|e| ResolveError::MalformedResponse(format!("inner JSON: {e}")))
    }
}

#[async_trait]
impl Extract for GeminiClient {
    async fn extract(&self, query: &str) -> Result<ExtractedFilter, ResolveError> {
        retry::run(self.policy, |_| self.attempt(query)).await
    }
}
