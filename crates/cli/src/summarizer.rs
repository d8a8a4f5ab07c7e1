use corpus_ingest::{ExampleSummarizer, SummaryRequest};
use serde_json::json;

/// Instruction sent with every summarization request; the response must be
/// exactly one JSON object matching the summary schema.
const SUMMARY_INSTRUCTION: &str = "You are an expert at analyzing JavaScript/TypeScript projects. \
Analyze the provided README.md and package.json files to extract key metadata about the project.\n\
\n\
You MUST return ONLY a valid JSON object with the following exact structure:\n\
{\n\
    \"description\": \"A concise 1-2 sentence description of what this example demonstrates\",\n\
    \"framework\": \"The main framework used (react, next, vue, svelte, etc.)\",\n\
    \"build_tool\": \"The build tool used (vite, webpack, next, rollup, etc.)\",\n\
    \"complexity\": 1-5,\n\
    \"example_type\": \"A short category name (console, components, themes, etc.)\",\n\
    \"key_features\": [\"feature1\", \"feature2\", \"feature3\"]\n\
}\n\
\n\
Do not include any text before or after the JSON. Return ONLY the JSON object.\n\
Base your analysis on the actual content, not assumptions.";

/// Blocking chat-completion client used to summarize example projects.
///
/// Any transport or shape problem is reported as a string reason; the
/// ingest side decides what that means for the project.
pub struct ChatSummarizer {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl ChatSummarizer {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    /// Build a summarizer taking the API key from `OPENAI_API_KEY`
    pub fn from_env(base_url: &str, model: &str) -> Self {
        Self::new(base_url, model, std::env::var("OPENAI_API_KEY").ok())
    }
}

impl ExampleSummarizer for ChatSummarizer {
    fn summarize(&self, request: &SummaryRequest) -> Result<String, String> {
        let Some(api_key) = &self.api_key else {
            return Err("OPENAI_API_KEY is not set".to_string());
        };

        let readme = if request.readme.trim().is_empty() {
            "No README found"
        } else {
            request.readme.as_str()
        };
        let manifest = if request.manifest.trim().is_empty() {
            "No package.json found"
        } else {
            request.manifest.as_str()
        };
        let prompt = format!(
            "Analyze this example project:\n\nREADME.md:\n{readme}\n\npackage.json:\n{manifest}\n\n\
             Project name: {}\n\nReturn ONLY the JSON object, no other text.",
            request.project_name
        );

        let body = json!({
            "model": self.model,
            "temperature": 0,
            "messages": [
                {"role": "system", "content": SUMMARY_INSTRUCTION},
                {"role": "user", "content": prompt},
            ],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| format!("request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("service error: {e}"))?;

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| format!("unreadable response body: {e}"))?;
        payload
            .pointer("/choices/0/message/content")
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| "response carried no message content".to_string())
    }
}
