// ── Security tool catalog ────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToolCategory {
    Reconnaissance,
    Scanning,
    Exploitation,
    PostExploitation,
    Forensics,
}

impl ToolCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Reconnaissance => "Reconnaissance",
            ToolCategory::Scanning => "Scanning",
            ToolCategory::Exploitation => "Exploitation",
            ToolCategory::PostExploitation => "Post-exploitation",
            ToolCategory::Forensics => "Forensics",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
}

/// Tools shown on the Security Tools screen. All of them are simulations;
/// nothing here shells out to the real binaries.
pub fn all() -> &'static [Tool] {
    &[
        Tool {
            name: "Nmap",
            description: "Network mapper for host discovery and port scanning.",
            category: ToolCategory::Reconnaissance,
        },
        Tool {
            name: "Metasploit",
            description: "Framework for developing and running exploit modules.",
            category: ToolCategory::Exploitation,
        },
        Tool {
            name: "Wireshark",
            description: "Packet analyzer for deep network traffic inspection.",
            category: ToolCategory::Forensics,
        },
        Tool {
            name: "Burp Suite",
            description: "Proxy and scanner for testing web application security.",
            category: ToolCategory::Scanning,
        },
        Tool {
            name: "Aircrack-ng",
            description: "Suite for auditing wireless network security.",
            category: ToolCategory::Exploitation,
        },
        Tool {
            name: "John the Ripper",
            description: "Password cracker for recovering weak credentials.",
            category: ToolCategory::PostExploitation,
        },
    ]
}
