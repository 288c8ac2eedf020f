use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::{env, time::Duration};

use super::provider::{MotivationError, MotivationProvider};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_OUTPUT_TOKENS: u32 = 60;
const TEMPERATURE: f32 = 0.7;
const SYSTEM_INSTRUCTION: &str =
    "You are a spiritual mentor focusing on Islamic ethics and encouragement.";

/// Gemini connection settings sourced from the environment.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn from_env() -> Result<Self, MotivationError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| MotivationError::MissingApiKey)
            .and_then(|value| {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    Err(MotivationError::MissingApiKey)
                } else {
                    Ok(trimmed.to_string())
                }
            })?;

        let base_url = env::var("GEMINI_BASE_URL")
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let model = env::var("GEMINI_MODEL")
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let timeout = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout,
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Remote motivational-text provider over the Gemini REST API.
pub struct GeminiProvider {
    http: Client,
    config: GeminiConfig,
    language: String,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig, language: &str) -> Result<Self, MotivationError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| MotivationError::ClientBuild(err.to_string()))?;
        Ok(Self {
            http,
            config,
            language: language.to_string(),
        })
    }

    pub fn from_env(language: &str) -> Result<Self, MotivationError> {
        Self::new(GeminiConfig::from_env()?, language)
    }

    fn build_prompt(&self, prayer_count: u32, dua_count: u32) -> String {
        if self.language == "fa" {
            format!(
                "کاربر امروز {} وعده نماز و {} دعا خوانده است. \
                 یک جمله کوتاه، زیبا و انگیزشی مذهبی به زبان فارسی برای او بنویس \
                 که او را به بندگی بیشتر تشویق کند. حداکثر ۱۰ کلمه باشد.",
                prayer_count, dua_count
            )
        } else {
            format!(
                "The user completed {} prayers and {} devotional readings today. \
                 Write one short, beautiful religious sentence encouraging them to \
                 keep going. At most 10 words.",
                prayer_count, dua_count
            )
        }
    }
}

impl MotivationProvider for GeminiProvider {
    fn fetch(&self, prayer_count: u32, dua_count: u32) -> Result<String, MotivationError> {
        let payload = GenerateContentRequest {
            system_instruction: ContentPayload {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![ContentPayload {
                parts: vec![Part {
                    text: self.build_prompt(prayer_count, dua_count),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: MAX_OUTPUT_TOKENS,
                temperature: TEMPERATURE,
            },
        };

        let response = self
            .http
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .map_err(|err| MotivationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MotivationError::Status(status.as_u16()));
        }

        let completion: GenerateContentResponse = response
            .json()
            .map_err(|_| MotivationError::MalformedPayload)?;

        // Blank-but-successful completions are fine; the caller substitutes
        // its default line for them.
        Ok(completion
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .find_map(|part| part.text)
            .unwrap_or_default())
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: ContentPayload,
    contents: Vec<ContentPayload>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct ContentPayload {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_url_trims_trailing_slash() {
        let config = GeminiConfig {
            api_key: "k".into(),
            base_url: "https://example.test/".into(),
            model: "gemini-2.0-flash".into(),
            timeout: Duration::from_secs(5),
        };
        assert_eq!(
            config.generate_url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn completion_text_is_extracted() {
        let raw = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "stay steadfast" } ] } }
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|p| p.text)
            .unwrap_or_default();
        assert_eq!(text, "stay steadfast");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
