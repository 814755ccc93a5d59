// ── Simulated hacking console ────────────────────────────────────────────────
//
// The console answers a small set of built-in commands with canned,
// terminal-looking output. Anything else is handed to the AI responder
// when a provider key is configured, and falls back to a not-recognized
// notice when none is.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConsoleStatus {
    Success,
    Error,
    Info,
    Warning,
}

pub const WELCOME: &str =
    "Welcome to EthicalHack-AI Assistant. Type 'help' to see available commands.";

pub const CLEARED: &str = "Terminal cleared.";

const EXIT_NOTE: &str =
    "Cannot exit the console from here. Press Esc to go back to the menu.";

const HELP: &str = "Available commands:
  help            - Show this help message
  scan [target]   - Scan a target system (simulation)
  exploit [vuln]  - Attempt to exploit a vulnerability (simulation)
  tools           - List available security tools
  clear           - Clear the terminal";

const TOOLS: &str = "Available security tools:
  - Network Scanners
  - Vulnerability Assessment
  - Exploitation Frameworks
  - Password Crackers
  - Forensic Analysis

Use \"help [tool]\" for more information on a specific tool.";

/// System prompt for free-form commands routed to the AI responder.
pub const SYSTEM_PROMPT: &str = "You are an advanced terminal interface for ethical hackers. \
Reply to user commands with simulated terminal output. \
Format your response as plain text that would appear in a terminal. \
Do not use markdown formatting. \
For commands related to scanning, exploits, or tools, create realistic-looking terminal output.";

/// Canned response for the built-in commands. Returns `None` for anything
/// that should go to the AI responder or the not-recognized fallback.
/// `clear` is not in this table; the screen intercepts it before lookup.
pub fn builtin_response(input: &str) -> Option<(String, ConsoleStatus)> {
    let command = input.trim().to_lowercase();
    if command == "help" {
        Some((HELP.to_string(), ConsoleStatus::Success))
    } else if command.starts_with("scan") {
        let target = command.split_whitespace().nth(1).unwrap_or("localhost");
        Some((scan_report(target), ConsoleStatus::Success))
    } else if command.starts_with("exploit") {
        let target = command.split_whitespace().nth(1).unwrap_or("default");
        Some((exploit_report(target), ConsoleStatus::Success))
    } else if command == "tools" {
        Some((TOOLS.to_string(), ConsoleStatus::Success))
    } else if command == "exit" {
        Some((EXIT_NOTE.to_string(), ConsoleStatus::Info))
    } else {
        None
    }
}

pub fn is_clear(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("clear")
}

pub fn not_recognized(command: &str) -> String {
    format!("Command not recognized: \"{command}\". Type \"help\" for a list of available commands.")
}

fn boxed(rows: &[String], width: usize) -> String {
    let border = "─".repeat(width + 2);
    let mut out = format!("╭{border}╮\n");
    for row in rows {
        out.push_str(&format!("│ {row:<width$} │\n"));
    }
    out.push_str(&format!("╰{border}╯"));
    out
}

fn scan_report(target: &str) -> String {
    let rows = [
        format!("Target: {target}"),
        "Scan type: Comprehensive".to_string(),
        "Open ports: 22, 80, 443".to_string(),
        "Services: SSH, HTTP, HTTPS".to_string(),
        "Vulnerabilities found: 2".to_string(),
    ];
    format!(
        "Running security scan (simulation)...\n\n{}\n\nRecommended actions:\n\
         1. Patch CVE-2023-1234 on SSH service\n\
         2. Update web server to latest version",
        boxed(&rows, 32)
    )
}

fn exploit_report(target: &str) -> String {
    let rows = [
        format!("Exploit simulation: {target}"),
        "Status: Initiated".to_string(),
        "Warning: This is a simulation only".to_string(),
    ];
    format!(
        "{}\n\n[*] Preparing exploit payload\n\
         [*] Delivering payload to target\n\
         [+] Exploitation successful (simulated)\n\
         [*] Access granted to target system (simulated)\n\n\
         Type \"help\" for more commands within the target system.",
        boxed(&rows, 45)
    )
}
