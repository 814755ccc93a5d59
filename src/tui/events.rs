use std::{io, time::Duration};

use anyhow::Result;
use arboard::Clipboard;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::ai::{ChatMessage, GenerationOptions, KeyStore, Provider};
use crate::assistant::{self, AssistantStatus};
use crate::console::{self, ConsoleStatus};
use crate::tools;
use crate::tui::draw::draw;
use crate::tui::input::handle_text_input_key;
use crate::tui::state::{App, Screen, MENU_ITEMS};

// ── Timings ───────────────────────────────────────────────────────────────────

/// How long the simulated microphone listens before it "hears" a command.
const LISTEN_DELAY: Duration = Duration::from_secs(3);
/// Pause between hearing a command and answering it.
const THINK_DELAY: Duration = Duration::from_secs(2);
/// Latency added to console replies so they feel typed back.
const CONSOLE_DELAY: Duration = Duration::from_millis(500);
/// Status-line toasts clear themselves after this long.
const STATUS_TTL: Duration = Duration::from_secs(3);

// ── Background task events ────────────────────────────────────────────────────

/// Results sent back from spawned tasks. Every event carries the entry id it
/// answers; stale events for entries that no longer exist are dropped.
pub enum TaskEvent {
    ConsoleReply { id: u64, text: String, status: ConsoleStatus },
    Heard { id: u64, text: String },
    AssistantReply { id: u64, text: String, status: AssistantStatus },
}

// ── Entry point ───────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(KeyStore::open_default());
    let result = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    result
}

// ── Event loop ────────────────────────────────────────────────────────────────

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(50));
    let (task_tx, mut task_rx) = mpsc::unbounded_channel::<TaskEvent>();

    loop {
        terminal.draw(|f| draw(f, app))?;

        tokio::select! {
            // 50 ms tick drives redraws and expires timed status messages
            _ = tick.tick() => {
                if let Some(set_at) = app.status_set_at {
                    if set_at.elapsed() >= STATUS_TTL {
                        app.status = String::new();
                        app.status_set_at = None;
                    }
                }
            }

            // Completed background work (console replies, voice captures)
            Some(event) = task_rx.recv() => {
                match event {
                    TaskEvent::ConsoleReply { id, text, status } => {
                        app.apply_console_reply(id, text, status);
                    }
                    TaskEvent::Heard { id, text } => {
                        // Answer the heard command unless the capture was
                        // cancelled while the task slept.
                        if app.apply_heard(id, text.clone()) {
                            spawn_assistant_reply(app, id, text, &task_tx);
                        }
                    }
                    TaskEvent::AssistantReply { id, text, status } => {
                        app.apply_assistant_reply(id, text, status);
                    }
                }
            }

            // Keyboard / terminal events
            Some(Ok(event)) = event_stream.next() => {
                // Trackpad / mouse scroll on the feed panels
                if let Event::Mouse(mouse) = &event {
                    match mouse.kind {
                        MouseEventKind::ScrollUp => match app.screen {
                            Screen::Console => {
                                app.console_scroll = app.console_scroll.saturating_sub(3);
                                app.console_scroll_manual = true;
                            }
                            Screen::Assistant => {
                                app.assistant_scroll = app.assistant_scroll.saturating_sub(3);
                                app.assistant_scroll_manual = true;
                            }
                            _ => {}
                        },
                        MouseEventKind::ScrollDown => match app.screen {
                            Screen::Console => {
                                app.console_scroll = app.console_scroll.saturating_add(3);
                                app.console_scroll_manual = true;
                            }
                            Screen::Assistant => {
                                app.assistant_scroll = app.assistant_scroll.saturating_add(3);
                                app.assistant_scroll_manual = true;
                            }
                            _ => {}
                        },
                        _ => {}
                    }
                }
                if let Event::Key(key) = event {
                    match &app.screen {
                        Screen::Menu => match key.code {
                            KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                            KeyCode::Up => {
                                let i = app.menu_state.selected().unwrap_or(0);
                                app.menu_state.select(Some(i.saturating_sub(1)));
                            }
                            KeyCode::Down => {
                                let i = app.menu_state.selected().unwrap_or(0);
                                app.menu_state.select(Some((i + 1).min(MENU_ITEMS.len() - 1)));
                            }
                            KeyCode::Enter => {
                                let i = app.menu_state.selected().unwrap_or(0);
                                match i {
                                    0 => app.screen = Screen::Console,
                                    1 => app.screen = Screen::Assistant,
                                    2 => app.screen = Screen::Tools,
                                    3 => app.screen = Screen::System,
                                    4 => {
                                        app.refresh_settings();
                                        app.screen = Screen::Settings;
                                    }
                                    5 => return Ok(()),
                                    _ => {}
                                }
                            }
                            _ => {}
                        },
                        Screen::System => {
                            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                                app.screen = Screen::Menu;
                            }
                        }
                        Screen::Tools => match key.code {
                            KeyCode::Esc | KeyCode::Char('q') => app.screen = Screen::Menu,
                            KeyCode::Up | KeyCode::Char('k') => {
                                let i = app.tool_index.saturating_sub(1);
                                app.tool_index = i;
                                app.tool_list_state.select(Some(i));
                            }
                            KeyCode::Down | KeyCode::Char('j') => {
                                let i = (app.tool_index + 1).min(tools::all().len() - 1);
                                app.tool_index = i;
                                app.tool_list_state.select(Some(i));
                            }
                            _ => {}
                        },
                        Screen::Console => handle_console_key(app, key, &task_tx),
                        Screen::Assistant => handle_assistant_key(app, key, &task_tx),
                        Screen::Settings => handle_settings_key(app, key),
                    }
                }
            }
        }
    }
}

// ── Console keys ──────────────────────────────────────────────────────────────

fn handle_console_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    task_tx: &mpsc::UnboundedSender<TaskEvent>,
) {
    match key.code {
        KeyCode::Esc => app.screen = Screen::Menu,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.screen = Screen::Menu;
        }
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let text = app.last_console_response();
            copy_to_clipboard(app, text);
        }
        KeyCode::PageUp => {
            app.console_scroll = app.console_scroll.saturating_sub(5);
            app.console_scroll_manual = true;
        }
        KeyCode::PageDown => {
            app.console_scroll = app.console_scroll.saturating_add(5);
            app.console_scroll_manual = true;
        }
        KeyCode::End => app.console_scroll_manual = false,
        KeyCode::Enter => {
            let command = app.console_input.take();
            if let Some(id) = app.submit_console_command(&command) {
                spawn_console_reply(app, id, command.trim().to_string(), task_tx);
            }
        }
        _ => handle_text_input_key(&mut app.console_input, key),
    }
}

fn spawn_console_reply(
    app: &App,
    id: u64,
    command: String,
    task_tx: &mpsc::UnboundedSender<TaskEvent>,
) {
    let mut client = app.client.clone();
    let provider = app.selected_provider();
    let tx = task_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(CONSOLE_DELAY).await;
        let (text, status) = match console::builtin_response(&command) {
            Some(reply) => reply,
            None if client.keys_mut().get_key(provider).is_some() => {
                let messages = [
                    ChatMessage::system(console::SYSTEM_PROMPT),
                    ChatMessage::user(command.as_str()),
                ];
                let options = GenerationOptions {
                    temperature: Some(0.7),
                    ..Default::default()
                };
                match client.generate(provider, &messages, options).await {
                    Ok(reply) => (reply.text, ConsoleStatus::Success),
                    Err(e) => (format!("Error: {e}"), ConsoleStatus::Error),
                }
            }
            None => (console::not_recognized(&command), ConsoleStatus::Info),
        };
        let _ = tx.send(TaskEvent::ConsoleReply { id, text, status });
    });
}

// ── Assistant keys ────────────────────────────────────────────────────────────

fn handle_assistant_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    task_tx: &mpsc::UnboundedSender<TaskEvent>,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.screen = Screen::Menu,
        KeyCode::Up => {
            let i = app.provider_index.saturating_sub(1);
            app.provider_index = i;
            app.provider_list_state.select(Some(i));
        }
        KeyCode::Down => {
            let i = (app.provider_index + 1).min(Provider::all().len() - 1);
            app.provider_index = i;
            app.provider_list_state.select(Some(i));
        }
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let text = app.last_assistant_response();
            copy_to_clipboard(app, text);
        }
        KeyCode::Char('m') => {
            if app.listening {
                app.stop_listening();
            } else {
                let id = app.start_listening();
                spawn_voice_capture(id, task_tx);
            }
        }
        KeyCode::PageUp => {
            app.assistant_scroll = app.assistant_scroll.saturating_sub(5);
            app.assistant_scroll_manual = true;
        }
        KeyCode::PageDown => {
            app.assistant_scroll = app.assistant_scroll.saturating_add(5);
            app.assistant_scroll_manual = true;
        }
        KeyCode::End => app.assistant_scroll_manual = false,
        _ => {}
    }
}

fn spawn_voice_capture(id: u64, task_tx: &mpsc::UnboundedSender<TaskEvent>) {
    let tx = task_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(LISTEN_DELAY).await;
        let text = assistant::random_command().to_string();
        let _ = tx.send(TaskEvent::Heard { id, text });
    });
}

fn spawn_assistant_reply(
    app: &App,
    id: u64,
    heard: String,
    task_tx: &mpsc::UnboundedSender<TaskEvent>,
) {
    let mut client = app.client.clone();
    let provider = app.selected_provider();
    let tx = task_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(THINK_DELAY).await;
        let (text, status) = if client.keys_mut().get_key(provider).is_some() {
            let messages = [
                ChatMessage::system(assistant::SYSTEM_PROMPT),
                ChatMessage::user(heard.as_str()),
            ];
            let options = GenerationOptions {
                temperature: Some(0.7),
                ..Default::default()
            };
            match client.generate(provider, &messages, options).await {
                Ok(reply) => (reply.text, AssistantStatus::Responded),
                Err(e) => (format!("Error: {e}"), AssistantStatus::Error),
            }
        } else {
            (
                assistant::simulated_response(&heard).to_string(),
                AssistantStatus::Responded,
            )
        };
        let _ = tx.send(TaskEvent::AssistantReply { id, text, status });
    });
}

// ── Settings keys ─────────────────────────────────────────────────────────────

fn handle_settings_key(app: &mut App, key: crossterm::event::KeyEvent) {
    let fields = app.settings_keys.len();
    match key.code {
        KeyCode::Esc => app.screen = Screen::Menu,
        KeyCode::Tab | KeyCode::Down => {
            app.settings_focus = (app.settings_focus + 1) % fields;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.settings_focus = (app.settings_focus + fields - 1) % fields;
        }
        KeyCode::Enter => match app.save_settings() {
            Ok(()) => {
                app.set_status("✓ API keys saved");
                app.screen = Screen::Menu;
            }
            Err(e) => app.set_status(format!("Failed to save keys: {e}")),
        },
        KeyCode::Backspace => {
            app.settings_keys[app.settings_focus].pop();
        }
        KeyCode::Char(c) => {
            app.settings_keys[app.settings_focus].push(c);
        }
        _ => {}
    }
}

// ── Clipboard ─────────────────────────────────────────────────────────────────

fn copy_to_clipboard(app: &mut App, text: Option<String>) {
    let Some(text) = text else { return };
    if let Ok(mut clipboard) = Clipboard::new() {
        let _ = clipboard.set_text(text);
        app.set_status("📋 Copied to clipboard");
    }
}
