use hackdeck::console::{self, ConsoleStatus};

// ── Built-in commands ─────────────────────────────────────────────────────────

#[test]
fn help_lists_every_builtin_command() {
    let (text, _) = console::builtin_response("help").unwrap();
    for cmd in ["help", "scan [target]", "exploit [vuln]", "tools", "clear"] {
        assert!(text.contains(cmd), "help output missing {cmd}");
    }
}

#[test]
fn help_reports_success() {
    let (_, status) = console::builtin_response("help").unwrap();
    assert_eq!(status, ConsoleStatus::Success);
}

#[test]
fn tools_lists_security_tool_categories() {
    let (text, status) = console::builtin_response("tools").unwrap();
    assert!(text.contains("Network Scanners"));
    assert!(text.contains("Password Crackers"));
    assert!(text.contains("Forensic Analysis"));
    assert_eq!(status, ConsoleStatus::Success);
}

#[test]
fn exit_explains_how_to_leave() {
    let (text, status) = console::builtin_response("exit").unwrap();
    assert!(text.contains("Press Esc"));
    assert_eq!(status, ConsoleStatus::Info);
}

#[test]
fn unknown_command_is_not_builtin() {
    assert!(console::builtin_response("frobnicate the mainframe").is_none());
}

#[test]
fn empty_input_is_not_builtin() {
    assert!(console::builtin_response("").is_none());
}

#[test]
fn builtin_match_is_case_insensitive() {
    assert!(console::builtin_response("HELP").is_some());
    assert!(console::builtin_response("Tools").is_some());
}

#[test]
fn builtin_match_ignores_surrounding_whitespace() {
    assert!(console::builtin_response("  help  ").is_some());
}

// ── Scan simulation ───────────────────────────────────────────────────────────

#[test]
fn scan_defaults_to_localhost() {
    let (text, _) = console::builtin_response("scan").unwrap();
    assert!(text.contains("Target: localhost"));
}

#[test]
fn scan_reports_the_given_target() {
    let (text, _) = console::builtin_response("scan 10.0.0.5").unwrap();
    assert!(text.contains("Target: 10.0.0.5"));
}

#[test]
fn scan_takes_only_the_first_argument() {
    let (text, _) = console::builtin_response("scan 10.0.0.5 deep").unwrap();
    assert!(text.contains("Target: 10.0.0.5"));
    assert!(!text.contains("deep"));
}

#[test]
fn scan_is_labelled_a_simulation() {
    let (text, _) = console::builtin_response("scan").unwrap();
    assert!(text.contains("(simulation)"));
}

#[test]
fn scan_finds_the_usual_open_ports() {
    let (text, _) = console::builtin_response("scan").unwrap();
    assert!(text.contains("Open ports: 22, 80, 443"));
    assert!(text.contains("Services: SSH, HTTP, HTTPS"));
}

#[test]
fn scan_recommends_remediation() {
    let (text, _) = console::builtin_response("scan").unwrap();
    assert!(text.contains("Patch CVE-2023-1234 on SSH service"));
    assert!(text.contains("Update web server to latest version"));
}

#[test]
fn scan_output_is_boxed() {
    let (text, _) = console::builtin_response("scan").unwrap();
    assert!(text.contains('╭'));
    assert!(text.contains('╰'));
}

// ── Exploit simulation ────────────────────────────────────────────────────────

#[test]
fn exploit_defaults_to_default_target() {
    let (text, _) = console::builtin_response("exploit").unwrap();
    assert!(text.contains("Exploit simulation: default"));
}

#[test]
fn exploit_reports_the_given_vulnerability() {
    let (text, _) = console::builtin_response("exploit cve-2023-1234").unwrap();
    assert!(text.contains("Exploit simulation: cve-2023-1234"));
}

#[test]
fn exploit_warns_it_is_simulated() {
    let (text, _) = console::builtin_response("exploit").unwrap();
    assert!(text.contains("Warning: This is a simulation only"));
    assert!(text.contains("Exploitation successful (simulated)"));
}

#[test]
fn exploit_walks_through_payload_stages() {
    let (text, _) = console::builtin_response("exploit").unwrap();
    assert!(text.contains("[*] Preparing exploit payload"));
    assert!(text.contains("[*] Delivering payload to target"));
    assert!(text.contains("[*] Access granted to target system (simulated)"));
}

// ── Clear handling ────────────────────────────────────────────────────────────

#[test]
fn is_clear_matches_the_clear_command() {
    assert!(console::is_clear("clear"));
}

#[test]
fn is_clear_ignores_case_and_whitespace() {
    assert!(console::is_clear("  CLEAR "));
}

#[test]
fn is_clear_rejects_other_commands() {
    assert!(!console::is_clear("clear screen"));
    assert!(!console::is_clear("help"));
}

#[test]
fn clear_is_not_a_builtin_lookup() {
    assert!(console::builtin_response("clear").is_none());
}

// ── Fallback and fixed strings ────────────────────────────────────────────────

#[test]
fn not_recognized_quotes_the_command() {
    let text = console::not_recognized("fooBar");
    assert!(text.contains("Command not recognized: \"fooBar\""));
    assert!(text.contains("Type \"help\""));
}

#[test]
fn welcome_points_at_help() {
    assert!(console::WELCOME.contains("Type 'help'"));
}

#[test]
fn cleared_notice_is_short() {
    assert_eq!(console::CLEARED, "Terminal cleared.");
}

#[test]
fn system_prompt_asks_for_plain_terminal_output() {
    assert!(console::SYSTEM_PROMPT.contains("Do not use markdown"));
    assert!(console::SYSTEM_PROMPT.contains("terminal"));
}
