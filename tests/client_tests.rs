use hackdeck::{ChatClient, ChatMessage, GenerationOptions, KeyStore, Provider};
use mockito::Matcher;
use serde_json::json;

fn client_for(provider: Provider, key: &str, base: &str) -> ChatClient {
    let mut keys = KeyStore::default();
    keys.set_key(provider, key).unwrap();
    ChatClient::new(keys).with_base_url(provider, base)
}

// ── Preflight failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_conversation_is_rejected() {
    let mut client = client_for(Provider::Grok, "sk-grok", "http://127.0.0.1:9");
    let err = client
        .generate(Provider::Grok, &[], GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("empty conversation"));
}

#[tokio::test]
async fn missing_key_fails_before_any_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut client = ChatClient::new(KeyStore::default()).with_base_url(Provider::Grok, server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("API key not set for grok"));
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_key_error_names_every_provider() {
    for provider in Provider::all() {
        let mut client = ChatClient::new(KeyStore::default());
        let messages = [ChatMessage::user("hello")];
        let err = client
            .generate(provider, &messages, GenerationOptions::default())
            .await
            .unwrap_err();
        let expected = format!("API key not set for {}", provider.id());
        assert!(err.to_string().contains(&expected), "bad error for {provider}: {err}");
    }
}

#[tokio::test]
async fn keys_mut_configures_the_client_in_place() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#)
        .create_async()
        .await;

    let mut client = ChatClient::new(KeyStore::default()).with_base_url(Provider::Grok, server.url());
    client.keys_mut().set_key(Provider::Grok, "sk-late").unwrap();
    let messages = [ChatMessage::user("hello")];
    let reply = client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(reply.text, "ok");
    mock.assert_async().await;
}

// ── Grok ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn grok_reply_text_is_extracted() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"grok says hi"}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-grok", &server.url());
    let messages = [ChatMessage::user("hello")];
    let reply = client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(reply.text, "grok says hi");
    assert_eq!(reply.provider, Provider::Grok);
    mock.assert_async().await;
}

#[tokio::test]
async fn grok_sends_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-grok")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-grok", &server.url());
    let messages = [ChatMessage::user("hello")];
    client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn grok_sends_model_and_sampling_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "model": "grok-1",
            "temperature": 0.7,
            "max_tokens": 800,
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-grok", &server.url());
    let messages = [ChatMessage::user("hello")];
    client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn grok_messages_pass_through_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "hi" },
            ],
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-grok", &server.url());
    let messages = [ChatMessage::system("be brief"), ChatMessage::user("hi")];
    client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn grok_api_error_carries_the_response_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body("invalid key")
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-bad", &server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Grok API error: invalid key"));
}

#[tokio::test]
async fn grok_invalid_json_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-grok", &server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Grok returned invalid JSON"));
}

#[tokio::test]
async fn grok_missing_content_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-grok", &server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Grok response missing text content"));
}

// ── Gemini ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn gemini_authenticates_with_a_query_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "sk-gem".into()))
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"gem"}]}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Gemini, "sk-gem", &server.url());
    let messages = [ChatMessage::user("hello")];
    let reply = client
        .generate(Provider::Gemini, &messages, GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(reply.text, "gem");
    mock.assert_async().await;
}

#[tokio::test]
async fn gemini_maps_assistant_role_to_model() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "q" }] },
                { "role": "model", "parts": [{ "text": "a" }] },
                { "role": "user", "parts": [{ "text": "again" }] },
            ],
        })))
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Gemini, "sk-gem", &server.url());
    let messages = [
        ChatMessage::user("q"),
        ChatMessage::assistant("a"),
        ChatMessage::user("again"),
    ];
    client
        .generate(Provider::Gemini, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn gemini_sends_its_generation_config() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 800,
                "topP": 0.8,
                "topK": 40,
            },
        })))
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Gemini, "sk-gem", &server.url());
    let messages = [ChatMessage::user("hello")];
    client
        .generate(Provider::Gemini, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn gemini_api_error_carries_the_response_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body("quota exceeded")
        .create_async()
        .await;

    let mut client = client_for(Provider::Gemini, "sk-gem", &server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Gemini, &messages, GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Gemini API error: quota exceeded"));
}

// ── Cohere ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn cohere_reads_the_top_level_text_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat")
        .with_status(200)
        .with_body(r#"{"text":"cohere says hi"}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Cohere, "sk-co", &server.url());
    let messages = [ChatMessage::user("hello")];
    let reply = client
        .generate(Provider::Cohere, &messages, GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(reply.text, "cohere says hi");
    assert_eq!(reply.provider, Provider::Cohere);
    mock.assert_async().await;
}

#[tokio::test]
async fn cohere_splits_history_from_the_latest_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat")
        .match_body(Matcher::PartialJson(json!({
            "model": "command-r-plus",
            "chat_history": [
                { "role": "user", "message": "first" },
                { "role": "assistant", "message": "second" },
            ],
            "message": "third",
        })))
        .with_status(200)
        .with_body(r#"{"text":"ok"}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Cohere, "sk-co", &server.url());
    let messages = [
        ChatMessage::user("first"),
        ChatMessage::assistant("second"),
        ChatMessage::user("third"),
    ];
    client
        .generate(Provider::Cohere, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn cohere_single_message_goes_in_the_message_field() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat")
        .match_body(Matcher::PartialJson(json!({ "message": "solo" })))
        .with_status(200)
        .with_body(r#"{"text":"ok"}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Cohere, "sk-co", &server.url());
    let messages = [ChatMessage::user("solo")];
    client
        .generate(Provider::Cohere, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn cohere_pins_its_api_version_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat")
        .match_header("cohere-version", "2023-05-24")
        .match_header("authorization", "Bearer sk-co")
        .with_status(200)
        .with_body(r#"{"text":"ok"}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Cohere, "sk-co", &server.url());
    let messages = [ChatMessage::user("hello")];
    client
        .generate(Provider::Cohere, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn cohere_sends_sampling_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat")
        .match_body(Matcher::PartialJson(json!({
            "temperature": 0.7,
            "max_tokens": 800,
        })))
        .with_status(200)
        .with_body(r#"{"text":"ok"}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Cohere, "sk-co", &server.url());
    let messages = [ChatMessage::user("hello")];
    client
        .generate(Provider::Cohere, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn cohere_api_error_carries_the_response_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let mut client = client_for(Provider::Cohere, "sk-co", &server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Cohere, &messages, GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Cohere API error: internal error"));
}

#[tokio::test]
async fn cohere_missing_text_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat")
        .with_status(200)
        .with_body(r#"{"generation_id":"abc"}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Cohere, "sk-co", &server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Cohere, &messages, GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Cohere response missing text content"));
}

// ── Perplexity ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn perplexity_uses_the_bare_chat_completions_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"hi there"}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Perplexity, "sk-test", &server.url());
    let messages = [ChatMessage::user("hello")];
    let reply = client
        .generate(Provider::Perplexity, &messages, GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(reply.text, "hi there");
    assert_eq!(reply.provider, Provider::Perplexity);
    mock.assert_async().await;
}

#[tokio::test]
async fn perplexity_defaults_run_cooler_with_a_larger_budget() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3.1-sonar-small-128k-online",
            "temperature": 0.2,
            "max_tokens": 1000,
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Perplexity, "sk-test", &server.url());
    let messages = [ChatMessage::user("hello")];
    client
        .generate(Provider::Perplexity, &messages, GenerationOptions::default())
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn perplexity_api_error_carries_the_response_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let mut client = client_for(Provider::Perplexity, "sk-test", &server.url());
    let messages = [ChatMessage::user("hello")];
    let err = client
        .generate(Provider::Perplexity, &messages, GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Perplexity API error: forbidden"));
}

// ── Options ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn explicit_options_override_provider_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "temperature": 0.1,
            "max_tokens": 42,
        })))
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    let mut client = client_for(Provider::Grok, "sk-grok", &server.url());
    let messages = [ChatMessage::user("hello")];
    let options = GenerationOptions { temperature: Some(0.1), max_tokens: Some(42) };
    client.generate(Provider::Grok, &messages, options).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn base_url_override_only_touches_that_provider() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
        .create_async()
        .await;

    // Cohere keeps its real base; only Grok is pointed at the local server.
    let mut keys = KeyStore::default();
    keys.set_key(Provider::Grok, "sk-grok").unwrap();
    let mut client = ChatClient::new(keys).with_base_url(Provider::Grok, server.url());

    let messages = [ChatMessage::user("hello")];
    let reply = client
        .generate(Provider::Grok, &messages, GenerationOptions::default())
        .await
        .unwrap();
    assert_eq!(reply.text, "ok");
    mock.assert_async().await;
}
