pub mod ai;
pub mod assistant;
pub mod console;
pub mod system;
pub mod tools;
pub mod tui;

pub use ai::{ChatClient, ChatMessage, GenerationOptions, KeyStore, Provider, Reply, Role};
pub use tui::{render_to_buffer, App, Screen};

use anyhow::Result;

pub fn providers() -> Result<()> {
    println!("Supported AI providers:");
    for provider in Provider::all() {
        println!("- {} ({})", provider.label(), provider.id());
        println!("    model: {}", provider.default_model());
        println!("    api:   {}", provider.api_base());
    }
    Ok(())
}

/// Prints which providers have a stored credential. Secrets themselves are
/// never printed.
pub fn keys(store: &mut KeyStore) -> Result<()> {
    println!("Provider API keys:");
    for provider in Provider::all() {
        let state = if store.has_key(provider) {
            "configured"
        } else {
            "not set"
        };
        println!("- {:<11} {}", provider.id(), state);
    }
    if let Some(path) = store.path() {
        println!("Stored in: {}", path.display());
    }
    Ok(())
}

pub fn set_key(store: &mut KeyStore, provider: &str, secret: &str) -> Result<()> {
    let provider: Provider = provider.parse()?;
    store.set_key(provider, secret)?;
    println!("Saved API key for {provider}.");
    Ok(())
}

/// One-shot prompt against a provider, for scripting and quick checks.
pub async fn ask(
    client: &mut ChatClient,
    provider: &str,
    prompt: &str,
    system: Option<&str>,
    temperature: Option<f64>,
    max_tokens: Option<u32>,
) -> Result<()> {
    let provider: Provider = provider.parse()?;
    let mut messages = Vec::new();
    if let Some(system) = system {
        messages.push(ChatMessage::system(system));
    }
    messages.push(ChatMessage::user(prompt));
    let options = GenerationOptions {
        temperature,
        max_tokens,
    };
    let reply = client.generate(provider, &messages, options).await?;
    println!("{}", reply.text);
    Ok(())
}
