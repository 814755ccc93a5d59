use std::time::Instant;

use anyhow::Result;
use ratatui::widgets::ListState;

use crate::ai::{ChatClient, KeyStore, Provider};
use crate::assistant::{self, AssistantStatus};
use crate::console::{self, ConsoleStatus};
use crate::tui::input::TextInput;

// ── Screens ───────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum Screen {
    Menu,
    Console,
    Assistant,
    Tools,
    System,
    Settings,
}

// ── Feed entries ──────────────────────────────────────────────────────────────

/// One exchange in the console: the typed command plus its response.
/// Entries with an empty command render as bare output (welcome text,
/// clear notices).
#[derive(Clone, Debug)]
pub struct ConsoleEntry {
    pub id: u64,
    pub command: String,
    pub response: String,
    pub status: ConsoleStatus,
    pub loading: bool,
}

/// One exchange in the voice assistant. `text` stays empty until the
/// simulated microphone has heard something.
#[derive(Clone, Debug)]
pub struct AssistantEntry {
    pub id: u64,
    pub text: String,
    pub response: String,
    pub status: AssistantStatus,
}

// ── App state ─────────────────────────────────────────────────────────────────

pub const MENU_ITEMS: &[&str] = &[
    "Console",
    "Voice Assistant",
    "Security Tools",
    "System Info",
    "AI Settings",
    "Quit",
];

pub struct App {
    pub screen: Screen,
    pub menu_state: ListState,
    pub client: ChatClient,

    // console screen state
    pub console_entries: Vec<ConsoleEntry>,
    pub console_input: TextInput,
    pub console_scroll: u16,         // manual scroll offset for the output panel
    pub console_scroll_manual: bool, // true when user has scrolled up manually

    // assistant screen state
    pub assistant_entries: Vec<AssistantEntry>,
    pub assistant_scroll: u16,
    pub assistant_scroll_manual: bool,
    pub listening: bool,
    pub provider_index: usize,
    pub provider_list_state: ListState,

    // tools screen state
    pub tool_index: usize,
    pub tool_list_state: ListState,

    // settings screen state
    pub settings_focus: usize,
    pub settings_keys: Vec<String>,

    pub status: String,
    pub status_set_at: Option<Instant>,
    pub next_id: u64,
}

impl App {
    pub fn new(keys: KeyStore) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        let mut provider_list_state = ListState::default();
        provider_list_state.select(Some(0));
        let mut tool_list_state = ListState::default();
        tool_list_state.select(Some(0));
        let console_entries = vec![ConsoleEntry {
            id: 0,
            command: String::new(),
            response: console::WELCOME.to_string(),
            status: ConsoleStatus::Info,
            loading: false,
        }];
        let assistant_entries = vec![AssistantEntry {
            id: 0,
            text: String::new(),
            response: assistant::GREETING.to_string(),
            status: AssistantStatus::Responded,
        }];
        App {
            screen: Screen::Menu,
            menu_state,
            client: ChatClient::new(keys),
            console_entries,
            console_input: TextInput::new(),
            console_scroll: 0,
            console_scroll_manual: false,
            assistant_entries,
            assistant_scroll: 0,
            assistant_scroll_manual: false,
            listening: false,
            provider_index: 0,
            provider_list_state,
            tool_index: 0,
            tool_list_state,
            settings_focus: 0,
            settings_keys: vec![String::new(); Provider::all().len()],
            status: String::new(),
            status_set_at: None,
            next_id: 1,
        }
    }

    pub fn selected_provider(&self) -> Provider {
        Provider::all().remove(self.provider_index)
    }

    pub fn next_entry_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_set_at = Some(Instant::now());
    }

    // ── Console flow ──────────────────────────────────────────────────────────

    /// Records a submitted command. Returns the entry id a background task
    /// should answer, or `None` when the command was handled in place
    /// (empty input, `clear`).
    pub fn submit_console_command(&mut self, input: &str) -> Option<u64> {
        let command = input.trim();
        if command.is_empty() {
            return None;
        }
        if console::is_clear(command) {
            let id = self.next_entry_id();
            self.console_entries = vec![ConsoleEntry {
                id,
                command: String::new(),
                response: console::CLEARED.to_string(),
                status: ConsoleStatus::Info,
                loading: false,
            }];
            self.console_scroll = 0;
            self.console_scroll_manual = false;
            return None;
        }
        let id = self.next_entry_id();
        self.console_entries.push(ConsoleEntry {
            id,
            command: command.to_string(),
            response: String::new(),
            status: ConsoleStatus::Info,
            loading: true,
        });
        self.console_scroll_manual = false;
        Some(id)
    }

    /// Fills in the response for a pending entry. Replies for entries that
    /// no longer exist (cleared screen) are dropped.
    pub fn apply_console_reply(&mut self, id: u64, text: String, status: ConsoleStatus) {
        if let Some(entry) = self.console_entries.iter_mut().find(|e| e.id == id) {
            entry.response = text;
            entry.status = status;
            entry.loading = false;
        }
    }

    pub fn last_console_response(&self) -> Option<String> {
        self.console_entries
            .iter()
            .rev()
            .find(|e| !e.loading && !e.response.is_empty())
            .map(|e| e.response.clone())
    }

    // ── Assistant flow ────────────────────────────────────────────────────────

    pub fn start_listening(&mut self) -> u64 {
        let id = self.next_entry_id();
        self.assistant_entries.push(AssistantEntry {
            id,
            text: String::new(),
            response: String::new(),
            status: AssistantStatus::Listening,
        });
        self.listening = true;
        self.assistant_scroll_manual = false;
        id
    }

    /// Cancels an in-progress capture. The pending entry is removed, so a
    /// capture that still lands afterwards finds nothing to update.
    pub fn stop_listening(&mut self) {
        self.assistant_entries
            .retain(|e| e.status != AssistantStatus::Listening);
        self.listening = false;
    }

    /// Marks a capture as heard. Returns false when the entry was cancelled
    /// in the meantime; the caller should not answer it.
    pub fn apply_heard(&mut self, id: u64, text: String) -> bool {
        let Some(entry) = self.assistant_entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.text = text;
        entry.status = AssistantStatus::Processing;
        self.listening = false;
        true
    }

    pub fn apply_assistant_reply(&mut self, id: u64, text: String, status: AssistantStatus) {
        if let Some(entry) = self.assistant_entries.iter_mut().find(|e| e.id == id) {
            entry.response = text;
            entry.status = status;
        }
    }

    pub fn last_assistant_response(&self) -> Option<String> {
        self.assistant_entries
            .iter()
            .rev()
            .find(|e| e.status == AssistantStatus::Responded && !e.response.is_empty())
            .map(|e| e.response.clone())
    }

    // ── Settings flow ─────────────────────────────────────────────────────────

    /// Reloads the editable key fields from the store so stale edits from a
    /// previous visit never linger.
    pub fn refresh_settings(&mut self) {
        for (slot, provider) in Provider::all().into_iter().enumerate() {
            self.settings_keys[slot] = self
                .client
                .keys_mut()
                .get_key(provider)
                .unwrap_or_default();
        }
        self.settings_focus = 0;
    }

    /// Persists every non-empty key field. Blank fields are left alone so an
    /// untouched provider keeps its stored credential.
    pub fn save_settings(&mut self) -> Result<()> {
        let entries = self.settings_keys.clone();
        for (provider, secret) in Provider::all().into_iter().zip(entries) {
            if secret.trim().is_empty() {
                continue;
            }
            self.client.keys_mut().set_key(provider, &secret)?;
        }
        Ok(())
    }
}
