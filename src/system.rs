// ── System info ──────────────────────────────────────────────────────────────
//
// Fixed demo readings for the System Info screen. A real deployment would
// sample the host instead.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SecurityStatus {
    Secure,
    Warning,
    Critical,
}

impl SecurityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SecurityStatus::Secure => "Secure",
            SecurityStatus::Warning => "Warning",
            SecurityStatus::Critical => "Critical",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Snapshot {
    pub cpu: &'static str,
    pub cpu_usage: u16,
    pub memory: &'static str,
    pub memory_usage: u16,
    pub os: &'static str,
    pub kernel: &'static str,
    pub uptime: &'static str,
    pub interface: &'static str,
    pub ip: &'static str,
    pub connected: bool,
    pub battery: u16,
    pub security: SecurityStatus,
}

pub const SECURE_NOTE: &str = "All security checks passed. No vulnerabilities detected.";

pub fn snapshot() -> Snapshot {
    Snapshot {
        cpu: "Intel Core i7 @ 3.2GHz (Virtual)",
        cpu_usage: 35,
        memory: "16GB / 32GB",
        memory_usage: 62,
        os: "Kali Linux 2025.1",
        kernel: "5.15.0-25-generic",
        uptime: "4h 23m",
        interface: "eth0",
        ip: "192.168.1.100",
        connected: true,
        battery: 100,
        security: SecurityStatus::Secure,
    }
}
