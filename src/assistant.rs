// ── Voice assistant ──────────────────────────────────────────────────────────
//
// Microphone capture is simulated: after a short listening window one of the
// sample commands is "heard" and answered, either by the configured AI
// provider or by the canned responder below.

use rand::seq::SliceRandom;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AssistantStatus {
    Listening,
    Processing,
    Responded,
    Error,
}

pub const GREETING: &str =
    "Hey there, ethical hacker! I'm your AI assistant. How can I help you today?";

/// System prompt for assistant queries routed to an AI provider.
pub const SYSTEM_PROMPT: &str = "You are an AI assistant for ethical hackers. \
Respond to queries like you're their helpful tech-savvy brother. \
Be encouraging and enthusiastic. \
Focus on cybersecurity topics and keep responses concise and actionable. \
Don't ever mention that you're an AI assistant or model.";

/// Commands the simulated microphone can pick up.
pub const SAMPLE_COMMANDS: &[&str] = &[
    "Run a security scan on the local network",
    "What vulnerabilities were found in the last scan?",
    "Explain how cross-site scripting works",
    "What's the difference between symmetric and asymmetric encryption?",
];

pub fn random_command() -> &'static str {
    SAMPLE_COMMANDS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SAMPLE_COMMANDS[0])
}

/// Canned reply used when no API key is configured for the active provider.
pub fn simulated_response(command: &str) -> &'static str {
    let command = command.to_lowercase();
    if command.contains("security scan") {
        "Initiating a security scan on your local network. This will take a few minutes. \
         I'll analyze for common vulnerabilities and open ports. I've got your back, \
         brother!"
    } else if command.contains("vulnerabilities") {
        "In the last scan, I found 3 potential issues: an outdated SSH configuration, an \
         open port 8080 with no authentication, and a potential misconfiguration in your \
         firewall rules. Want me to help you address these?"
    } else if command.contains("cross-site scripting") {
        "Cross-site scripting, or XSS, is a security vulnerability that allows attackers \
         to inject malicious client-side scripts into web pages viewed by other users. \
         It happens when an application includes untrusted data without proper \
         validation or escaping. There are three main types: reflected, stored, and \
         DOM-based XSS. Want me to explain each one in more detail?"
    } else if command.contains("symmetric and asymmetric") {
        "Great question! Symmetric encryption uses the same key for both encryption and \
         decryption - it's faster but has key distribution challenges. Asymmetric \
         encryption uses a pair of keys (public and private) - it's slower but more \
         secure for key exchange. In practice, we often use both: asymmetric to exchange \
         a symmetric key, then symmetric for the actual data encryption. That's a solid \
         approach for most security scenarios."
    } else {
        "I understand what you're asking about. Let me think about that and get back to \
         you with a comprehensive answer. Cybersecurity requires precision, and I want \
         to make sure I give you accurate information."
    }
}
