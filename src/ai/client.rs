// ── Provider chat client ─────────────────────────────────────────────────────

use std::collections::HashMap;

use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use serde_json::{json, Value};

use crate::ai::keys::KeyStore;
use crate::ai::message::{ChatMessage, GenerationOptions, Reply, Role};
use crate::ai::provider::Provider;

/// HTTP client for the supported chat providers.
///
/// One `generate` call maps to exactly one POST against the selected
/// provider and returns the extracted reply text. No retries, no
/// streaming, no timeouts beyond reqwest's defaults. Cloning is cheap;
/// the event loop hands clones to spawned request tasks.
#[derive(Clone, Debug)]
pub struct ChatClient {
    http: Client,
    keys: KeyStore,
    bases: HashMap<Provider, String>,
}

impl ChatClient {
    pub fn new(keys: KeyStore) -> Self {
        ChatClient { http: Client::new(), keys, bases: HashMap::new() }
    }

    /// Point one provider at a different base URL (scheme + host).
    /// Request paths stay the same, so tests can stand in a local server.
    pub fn with_base_url(mut self, provider: Provider, base: impl Into<String>) -> Self {
        self.bases.insert(provider, base.into());
        self
    }

    pub fn keys(&self) -> &KeyStore {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut KeyStore {
        &mut self.keys
    }

    fn base(&self, provider: Provider) -> &str {
        self.bases
            .get(&provider)
            .map(|b| b.as_str())
            .unwrap_or_else(|| provider.api_base())
    }

    /// Send a conversation to `provider` and return the reply.
    ///
    /// Fails before any network traffic when no API key is stored for the
    /// provider or when `messages` is empty.
    pub async fn generate(
        &mut self,
        provider: Provider,
        messages: &[ChatMessage],
        options: GenerationOptions,
    ) -> Result<Reply> {
        if messages.is_empty() {
            bail!("Cannot generate a reply from an empty conversation");
        }
        let Some(api_key) = self.keys.get_key(provider) else {
            bail!("API key not set for {provider}");
        };
        let temperature = options.temperature.unwrap_or(provider.default_temperature());
        let max_tokens = options.max_tokens.unwrap_or(provider.default_max_tokens());

        let text = match provider {
            Provider::Grok => {
                self.call_grok(&api_key, messages, temperature, max_tokens).await?
            }
            Provider::Gemini => {
                self.call_gemini(&api_key, messages, temperature, max_tokens).await?
            }
            Provider::Cohere => {
                self.call_cohere(&api_key, messages, temperature, max_tokens).await?
            }
            Provider::Perplexity => {
                self.call_perplexity(&api_key, messages, temperature, max_tokens).await?
            }
        };
        Ok(Reply { text, provider })
    }

    async fn call_grok(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String> {
        let body = json!({
            "model": Provider::Grok.default_model(),
            "messages": messages,
            "temperature": temperature,
            "max_tokens": max_tokens,
        });
        let url = format!("{}/v1/chat/completions", self.base(Provider::Grok));
        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .context("Grok request failed")?;
        if !resp.status().is_success() {
            let error = resp.text().await.unwrap_or_default();
            bail!("Grok API error: {error}");
        }
        let data: Value = resp.json().await.context("Grok returned invalid JSON")?;
        let text = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("Grok response missing text content"))?;
        Ok(text.to_string())
    }

    async fn call_gemini(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String> {
        // Gemini has no assistant role; replies travel under "model".
        let contents: Vec<Value> = messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::Assistant => "model",
                    Role::System => "system",
                    Role::User => "user",
                };
                json!({ "role": role, "parts": [{ "text": m.content }] })
            })
            .collect();
        let body = json!({
            "contents": contents,
            "generationConfig": {
                "temperature": temperature,
                "maxOutputTokens": max_tokens,
                "topP": 0.8,
                "topK": 40,
            }
        });
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base(Provider::Gemini),
            Provider::Gemini.default_model()
        );
        let resp = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;
        if !resp.status().is_success() {
            let error = resp.text().await.unwrap_or_default();
            bail!("Gemini API error: {error}");
        }
        let data: Value = resp.json().await.context("Gemini returned invalid JSON")?;
        let text = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow!("Gemini response missing text content"))?;
        Ok(text.to_string())
    }

    async fn call_cohere(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String> {
        // Cohere splits the conversation: history as records, the latest
        // message on its own.
        let Some((last, history)) = messages.split_last() else {
            bail!("Cannot generate a reply from an empty conversation");
        };
        let chat_history: Vec<Value> = history
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "message": m.content }))
            .collect();
        let body = json!({
            "model": Provider::Cohere.default_model(),
            "chat_history": chat_history,
            "message": last.content,
            "temperature": temperature,
            "max_tokens": max_tokens,
        });
        let url = format!("{}/v1/chat", self.base(Provider::Cohere));
        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .header("Cohere-Version", "2023-05-24")
            .json(&body)
            .send()
            .await
            .context("Cohere request failed")?;
        if !resp.status().is_success() {
            let error = resp.text().await.unwrap_or_default();
            bail!("Cohere API error: {error}");
        }
        let data: Value = resp.json().await.context("Cohere returned invalid JSON")?;
        let text = data["text"]
            .as_str()
            .ok_or_else(|| anyhow!("Cohere response missing text content"))?;
        Ok(text.to_string())
    }

    async fn call_perplexity(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
        temperature: f64,
        max_tokens: u32,
    ) -> Result<String> {
        let body = json!({
            "model": Provider::Perplexity.default_model(),
            "messages": messages,
            "temperature": temperature,
            "max_tokens": max_tokens,
        });
        let url = format!("{}/chat/completions", self.base(Provider::Perplexity));
        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .context("Perplexity request failed")?;
        if !resp.status().is_success() {
            let error = resp.text().await.unwrap_or_default();
            bail!("Perplexity API error: {error}");
        }
        let data: Value = resp.json().await.context("Perplexity returned invalid JSON")?;
        let text = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("Perplexity response missing text content"))?;
        Ok(text.to_string())
    }
}
