//! Smoke-test case definitions and the built-in case list.

mod backend;

pub use backend::{Backend, MODEL_SELECTOR_HEADER};

use crate::config::Config;
use serde_json::{Value, json};

/// One fixed POST request against the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub url: String,
    /// Sent in order; order only matters for display.
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl TestCase {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            headers: Vec::new(),
            body: Value::Null,
        }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// First header matching `name`, ignoring ASCII case.
    #[cfg(test)]
    fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Case preloaded with the headers every gateway request carries.
    fn gateway(name: &str, url: String, config: &Config) -> Self {
        Self::new(name, url)
            .header("Authorization", config.credential.bearer())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
    }
}

/// OpenAI chat-completions body.
pub fn openai_chat_body() -> Value {
    json!({
        "model": Backend::OpenAI.smoke_model(),
        "messages": [
            {"role": "system", "content": "You are a helpful assistant. Respond briefly."},
            {"role": "user", "content": "Say 'Hello World' in JSON format with a 'message' field."}
        ],
        "temperature": 0.0,
        "stream": false
    })
}

/// Anthropic messages body.
pub fn anthropic_messages_body() -> Value {
    json!({
        "model": Backend::Anthropic.smoke_model(),
        "messages": [
            {"role": "user", "content": "Say 'Hello World' - keep it brief!"}
        ],
        "max_tokens": 100
    })
}

/// Grok body for the OpenAI-style responses API.
pub fn grok_responses_body() -> Value {
    json!({
        "model": Backend::Grok.smoke_model(),
        "input": [
            {"role": "system", "content": "You are a helpful assistant. Respond very briefly."},
            {"role": "user", "content": "Say 'Hello World'"}
        ],
        "tools": [],
        "include": [],
        "truncation": "auto",
        "parallel_tool_calls": false,
        "stream": false,
        "text": {},
        "store": false
    })
}

/// The fixed case list, one per backend, in run order.
pub fn builtin_cases(config: &Config) -> Vec<TestCase> {
    let base = &config.base_url;
    vec![
        TestCase::gateway("Simple Chat - OpenAI Mini", base.clone(), config)
            .header(MODEL_SELECTOR_HEADER, Backend::OpenAI.id())
            .body(openai_chat_body()),
        TestCase::gateway("Anthropic - Root Endpoint", format!("{base}/"), config)
            .header("User-Agent", "ktor-client")
            .header(MODEL_SELECTOR_HEADER, Backend::Anthropic.id())
            .body(anthropic_messages_body()),
        TestCase::gateway("Grok - v1/responses", format!("{base}/v1/responses"), config)
            .header("User-Agent", "ktor-client")
            .header("Openai-Version", "2020-11-07")
            .header("X-Keep-Path", "true")
            .header(MODEL_SELECTOR_HEADER, Backend::Grok.id())
            .body(grok_responses_body()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credential;

    fn config_with(token: &str) -> Config {
        Config {
            credential: Credential::new(token),
            ..Config::default()
        }
        .with_base_url("http://gateway.test")
    }

    #[test]
    fn test_builtin_case_order_and_urls() {
        let cases = builtin_cases(&config_with("t"));
        let summary: Vec<(&str, &str)> = cases
            .iter()
            .map(|c| (c.name.as_str(), c.url.as_str()))
            .collect();
        assert_eq!(
            summary,
            [
                ("Simple Chat - OpenAI Mini", "http://gateway.test"),
                ("Anthropic - Root Endpoint", "http://gateway.test/"),
                ("Grok - v1/responses", "http://gateway.test/v1/responses"),
            ]
        );
    }

    #[test]
    fn test_every_case_uses_the_credential() {
        for case in builtin_cases(&config_with("perm-abc")) {
            assert_eq!(case.header_value("authorization"), Some("Bearer perm-abc"));
            assert_eq!(case.header_value("Content-Type"), Some("application/json"));
            assert_eq!(case.header_value("Accept"), Some("application/json"));
        }
    }

    #[test]
    fn test_placeholder_credential_when_unset() {
        let config = Config {
            credential: Credential::resolve(|_| None),
            ..Config::default()
        };
        for case in builtin_cases(&config) {
            assert_eq!(case.header_value("Authorization"), Some("Bearer perm-XXX"));
        }
    }

    #[test]
    fn test_model_selector_per_backend() {
        let cases = builtin_cases(&config_with("t"));
        let ids: Vec<&str> = cases
            .iter()
            .filter_map(|c| c.header_value(MODEL_SELECTOR_HEADER))
            .collect();
        assert_eq!(ids, ["openai", "anthropic", "grok"]);
    }

    #[test]
    fn test_grok_case_vendor_headers() {
        let cases = builtin_cases(&config_with("t"));
        let grok = &cases[2];
        assert_eq!(grok.header_value("Openai-Version"), Some("2020-11-07"));
        assert_eq!(grok.header_value("X-Keep-Path"), Some("true"));
        assert_eq!(grok.header_value("User-Agent"), Some("ktor-client"));
        assert_eq!(grok.body["truncation"], "auto");
        assert_eq!(grok.body["parallel_tool_calls"], false);
    }

    #[test]
    fn test_openai_case_has_no_user_agent() {
        let cases = builtin_cases(&config_with("t"));
        assert_eq!(cases[0].header_value("User-Agent"), None);
        assert_eq!(cases[0].body["model"], "gpt-4.1-mini-2025-04-14");
        assert_eq!(cases[0].body["temperature"], 0.0);
    }

    #[test]
    fn test_anthropic_body() {
        let body = anthropic_messages_body();
        assert_eq!(body["model"], "claude-sonnet-4-5-20250929");
        assert_eq!(body["max_tokens"], 100);
        assert_eq!(body["messages"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_body_keys_keep_declaration_order() {
        let body = grok_responses_body();
        let keys: Vec<&str> = body
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys[0], "model");
        assert_eq!(keys[1], "input");
        assert_eq!(keys.last(), Some(&"store"));
    }
}
