pub mod client;
pub mod keys;
pub mod message;
pub mod provider;

pub use client::ChatClient;
pub use keys::KeyStore;
pub use message::{ChatMessage, GenerationOptions, Reply, Role};
pub use provider::Provider;
