// ── AI providers ─────────────────────────────────────────────────────────────

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// The chat providers the dashboard can talk to. The set is fixed at
/// compile time; every accessor below is total over it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Provider {
    Perplexity,
    Grok,
    Gemini,
    Cohere,
}

impl Provider {
    pub fn all() -> Vec<Provider> {
        vec![
            Provider::Perplexity,
            Provider::Grok,
            Provider::Gemini,
            Provider::Cohere,
        ]
    }

    /// Lowercase tag used on the wire, in storage keys and in the CLI.
    pub fn id(&self) -> &str {
        match self {
            Provider::Perplexity => "perplexity",
            Provider::Grok       => "grok",
            Provider::Gemini     => "gemini",
            Provider::Cohere     => "cohere",
        }
    }

    /// Capitalized name used in error messages and field titles.
    pub fn name(&self) -> &str {
        match self {
            Provider::Perplexity => "Perplexity",
            Provider::Grok       => "Grok",
            Provider::Gemini     => "Gemini",
            Provider::Cohere     => "Cohere",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Provider::Perplexity => "Perplexity (Sonar)",
            Provider::Grok       => "Grok (xAI)",
            Provider::Gemini     => "Gemini (Google)",
            Provider::Cohere     => "Cohere (Command R+)",
        }
    }

    /// Scheme and host of the provider API. Paths are appended per call.
    pub fn api_base(&self) -> &'static str {
        match self {
            Provider::Perplexity => "https://api.perplexity.ai",
            Provider::Grok       => "https://api.grok.x",
            Provider::Gemini     => "https://generativelanguage.googleapis.com",
            Provider::Cohere     => "https://api.cohere.ai",
        }
    }

    pub fn default_model(&self) -> &str {
        match self {
            Provider::Perplexity => "llama-3.1-sonar-small-128k-online",
            Provider::Grok       => "grok-1",
            Provider::Gemini     => "gemini-1.5-pro",
            Provider::Cohere     => "command-r-plus",
        }
    }

    /// Temperature sent when the caller does not pick one.
    pub fn default_temperature(&self) -> f64 {
        match self {
            Provider::Perplexity => 0.2,
            _ => 0.7,
        }
    }

    /// Reply token budget sent when the caller does not pick one.
    pub fn default_max_tokens(&self) -> u32 {
        match self {
            Provider::Perplexity => 1000,
            _ => 800,
        }
    }

    /// Key under which this provider's credential is stored.
    pub fn storage_key(&self) -> String {
        format!("{}_api_key", self.id())
    }

    pub fn description(&self) -> &str {
        match self {
            Provider::Perplexity => "Online Sonar model with live web grounding · https://www.perplexity.ai/",
            Provider::Grok       => "xAI chat completions · https://x.ai/",
            Provider::Gemini     => "Google generative language API · https://ai.google.dev/",
            Provider::Cohere     => "Cohere chat with conversation history · https://cohere.com/",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perplexity" => Ok(Provider::Perplexity),
            "grok"       => Ok(Provider::Grok),
            "gemini"     => Ok(Provider::Gemini),
            "cohere"     => Ok(Provider::Cohere),
            other => bail!(
                "Unknown provider: {other}. Expected one of: perplexity, grok, gemini, cohere"
            ),
        }
    }
}
