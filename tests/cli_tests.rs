use hackdeck::{ChatClient, KeyStore, Provider};
use mockito::Matcher;
use serde_json::json;
use tempfile::TempDir;

// ── providers ─────────────────────────────────────────────────────────────────

#[test]
fn providers_listing_succeeds() {
    assert!(hackdeck::providers().is_ok());
}

// ── keys ──────────────────────────────────────────────────────────────────────

#[test]
fn keys_listing_succeeds_with_a_file_store() {
    let dir = TempDir::new().unwrap();
    let mut store = KeyStore::with_path(dir.path().join("keys.toml"));
    store.set_key(Provider::Grok, "sk-grok").unwrap();
    assert!(hackdeck::keys(&mut store).is_ok());
}

#[test]
fn keys_listing_succeeds_without_a_path() {
    let mut store = KeyStore::default();
    assert!(hackdeck::keys(&mut store).is_ok());
}

// ── set-key ───────────────────────────────────────────────────────────────────

#[test]
fn set_key_stores_the_secret() {
    let dir = TempDir::new().unwrap();
    let mut store = KeyStore::with_path(dir.path().join("keys.toml"));
    hackdeck::set_key(&mut store, "grok", "sk-123").unwrap();
    assert!(store.has_key(Provider::Grok));
}

#[test]
fn set_key_accepts_mixed_case_provider_names() {
    let mut store = KeyStore::default();
    hackdeck::set_key(&mut store, "Gemini", "sk-gem").unwrap();
    assert!(store.has_key(Provider::Gemini));
}

#[test]
fn set_key_rejects_unknown_providers() {
    let mut store = KeyStore::default();
    let err = hackdeck::set_key(&mut store, "openai", "sk").unwrap_err();
    assert!(err.to_string().contains("Unknown provider"));
}

#[test]
fn set_key_writes_through_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keys.toml");
    let mut store = KeyStore::with_path(path.clone());
    hackdeck::set_key(&mut store, "cohere", "sk-co").unwrap();

    let mut reader = KeyStore::with_path(path);
    assert_eq!(reader.get_key(Provider::Cohere), Some("sk-co".to_string()));
}

// ── ask ───────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ask_rejects_unknown_providers() {
    let mut client = ChatClient::new(KeyStore::default());
    let err = hackdeck::ask(&mut client, "openai", "hi", None, None, None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Unknown provider"));
}

#[tokio::test]
async fn ask_fails_without_a_stored_key() {
    let mut client = ChatClient::new(KeyStore::default());
    let err = hackdeck::ask(&mut client, "perplexity", "hi", None, None, None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("API key not set for perplexity"));
}

#[tokio::test]
async fn ask_prints_the_provider_reply() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"hi there"}}]}"#)
        .create_async()
        .await;

    let mut keys = KeyStore::default();
    keys.set_key(Provider::Perplexity, "sk-test").unwrap();
    let mut client = ChatClient::new(keys).with_base_url(Provider::Perplexity, server.url());

    hackdeck::ask(&mut client, "perplexity", "hello", None, None, None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn ask_prepends_the_system_prompt() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                { "role": "system", "content": "answer in one word" },
                { "role": "user", "content": "hello" },
            ],
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
        .create_async()
        .await;

    let mut keys = KeyStore::default();
    keys.set_key(Provider::Perplexity, "sk-test").unwrap();
    let mut client = ChatClient::new(keys).with_base_url(Provider::Perplexity, server.url());

    hackdeck::ask(
        &mut client,
        "perplexity",
        "hello",
        Some("answer in one word"),
        None,
        None,
    )
    .await
    .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn ask_passes_sampling_overrides() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "temperature": 0.5,
            "max_tokens": 64,
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"hi"}}]}"#)
        .create_async()
        .await;

    let mut keys = KeyStore::default();
    keys.set_key(Provider::Perplexity, "sk-test").unwrap();
    let mut client = ChatClient::new(keys).with_base_url(Provider::Perplexity, server.url());

    hackdeck::ask(&mut client, "perplexity", "hello", None, Some(0.5), Some(64))
        .await
        .unwrap();
    mock.assert_async().await;
}
