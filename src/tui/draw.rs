use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, List, ListItem, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame, Terminal,
};

use crate::ai::Provider;
use crate::assistant::AssistantStatus;
use crate::console::ConsoleStatus;
use crate::system::{self, SecurityStatus};
use crate::tools;
use crate::tui::state::{App, Screen, MENU_ITEMS};

// ── Drawing ───────────────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Background
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Rgb(15, 15, 25))),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    draw_header(f, chunks[0]);

    match app.screen {
        Screen::Menu => draw_menu(f, chunks[1], app),
        Screen::Console => draw_console(f, chunks[1], app),
        Screen::Assistant => draw_assistant(f, chunks[1], app),
        Screen::Tools => draw_tools(f, chunks[1], app),
        Screen::System => draw_system(f, chunks[1]),
        Screen::Settings => draw_settings(f, chunks[1], app),
    }

    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let sys = system::snapshot();
    let banner = vec![
        Line::from(vec![
            Span::styled(" ██╗  ██╗ █████╗  ██████╗██╗  ██╗", Style::default().fg(Color::Green)),
            Span::styled("  ", Style::default()),
            Span::styled(
                "EthicalHack-AI Assistant",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" ██║  ██║██╔══██╗██╔════╝██║ ██╔╝", Style::default().fg(Color::Green)),
            Span::styled("  v", Style::default().fg(Color::DarkGray)),
            Span::styled(env!("CARGO_PKG_VERSION"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ███████║███████║██║     █████╔╝ ", Style::default().fg(Color::Green)),
            Span::styled("  ● System Active", Style::default().fg(Color::Green)),
            Span::styled(
                format!("  {} · {}%", sys.interface, sys.battery),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(" ██╔══██║██╔══██║██║     ██╔═██╗ ", Style::default().fg(Color::Green))),
        Line::from(Span::styled(" ██║  ██║██║  ██║╚██████╗██║  ██╗", Style::default().fg(Color::Green))),
    ];

    let header = Paragraph::new(banner)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .alignment(Alignment::Left);
    f.render_widget(header, area);
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    // Status toasts replace the key hints until they expire.
    if !app.status.is_empty() {
        let footer = Paragraph::new(format!(" {} ", app.status))
            .style(Style::default().fg(Color::Yellow).bg(Color::Rgb(15, 15, 25)))
            .alignment(Alignment::Center);
        f.render_widget(footer, area);
        return;
    }
    let hint = match &app.screen {
        Screen::Menu => " ↑↓ Navigate   Enter Select   q Quit ",
        Screen::Console => " Enter Run   PageUp/PageDown Scroll   Ctrl+Y Copy   Esc Menu ",
        Screen::Assistant => " m Mic   ↑↓ Provider   Ctrl+Y Copy   q/Esc Menu ",
        Screen::Settings => " Tab/↑↓ Field   Enter Save   Esc Cancel ",
        _ => " q/Esc Back ",
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray).bg(Color::Rgb(15, 15, 25)))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_menu(f: &mut Frame, area: Rect, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .map(|label| {
            ListItem::new(Line::from(vec![
                Span::styled("  ", Style::default().fg(Color::Cyan)),
                Span::raw(*label),
            ]))
        })
        .collect();

    let mut state = app.menu_state;
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Menu ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, outer[0], &mut state);

    // Right panel: welcome text
    let welcome = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to EthicalHack-AI",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  A simulated hacking workstation with an AI copilot.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Run console commands, talk to the voice assistant,",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  and browse the tool catalog. Configure provider API",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  keys under AI Settings to unlock live responses.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
    )
    .wrap(Wrap { trim: false });
    f.render_widget(welcome, outer[1]);
}

fn draw_console(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    // ── Output feed ───────────────────────────────────────────────────────────
    let mut lines: Vec<Line> = Vec::new();
    for entry in &app.console_entries {
        if !entry.command.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(" $ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(entry.command.clone(), Style::default().fg(Color::White)),
            ]));
        }
        if entry.loading {
            lines.push(Line::from(Span::styled(
                "   Processing…",
                Style::default().fg(Color::Yellow),
            )));
        } else {
            let color = status_color(entry.status);
            for line in entry.response.lines() {
                lines.push(Line::from(Span::styled(
                    format!("   {line}"),
                    Style::default().fg(color),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let (effective_scroll, max_scroll, overflow) =
        panel_scroll(&lines, rows[0], app.console_scroll_manual, app.console_scroll);
    let title = if app.console_scroll_manual {
        " Console  [scrolled — End to follow] "
    } else {
        " Console "
    };
    let output = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .wrap(Wrap { trim: false })
        .scroll((effective_scroll, 0));
    f.render_widget(output, rows[0]);
    if overflow {
        render_scrollbar(f, rows[0], max_scroll, effective_scroll);
    }

    // ── Command input with visible cursor ─────────────────────────────────────
    let (before, cursor_ch, after) = app.console_input.split_at_cursor();
    let input = Paragraph::new(Line::from(vec![
        Span::styled(" $ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled(before.to_string(), Style::default().fg(Color::White)),
        Span::styled(cursor_ch.to_string(), Style::default().add_modifier(Modifier::REVERSED)),
        Span::styled(after.to_string(), Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .title(" Command ")
            .title_style(Style::default().fg(Color::Yellow))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(input, rows[1]);

    let hint = Paragraph::new(Span::styled(
        " Type a command and press Enter. \"help\" lists the built-ins; anything else goes to the AI. ",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(hint, rows[2]);
}

fn draw_assistant(f: &mut Frame, area: Rect, app: &mut App) {
    let provider = app.selected_provider();
    let key_ok = app.client.keys_mut().has_key(provider);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    // ── Left: provider, key status, microphone ────────────────────────────────
    let left_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3), Constraint::Length(5)])
        .split(cols[0]);

    let provider_items: Vec<ListItem> = Provider::all()
        .iter()
        .map(|p| ListItem::new(p.label().to_string()))
        .collect();
    let mut pstate = app.provider_list_state;
    let provider_list = List::new(provider_items)
        .block(
            Block::default()
                .title(" Provider (↑/↓) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(provider_list, left_rows[0], &mut pstate);

    let key_line = if key_ok {
        Span::styled(" ✓ Configured", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ✗ Not set (see AI Settings)", Style::default().fg(Color::Yellow))
    };
    let key_panel = Paragraph::new(key_line).block(
        Block::default()
            .title(" API Key ")
            .title_style(Style::default().fg(Color::DarkGray))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
    );
    f.render_widget(key_panel, left_rows[1]);

    let mic_lines = if app.listening {
        vec![
            Line::from(Span::styled(
                " ● Listening…",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(" m  stop", Style::default().fg(Color::DarkGray))),
        ]
    } else {
        vec![
            Line::from(Span::styled(" ○ Idle", Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from(Span::styled(" m  toggle mic", Style::default().fg(Color::DarkGray))),
        ]
    };
    let mic_panel = Paragraph::new(mic_lines).block(
        Block::default()
            .title(" Microphone ")
            .title_style(Style::default().fg(Color::DarkGray))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
    );
    f.render_widget(mic_panel, left_rows[2]);

    // ── Right: conversation ───────────────────────────────────────────────────
    let mut lines: Vec<Line> = Vec::new();
    for entry in &app.assistant_entries {
        if entry.status == AssistantStatus::Listening {
            lines.push(Line::from(Span::styled(
                " ● Listening…",
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(""));
            continue;
        }
        if !entry.text.is_empty() {
            lines.push(Line::from(Span::styled(
                " You: ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            for line in entry.text.lines() {
                lines.push(Line::from(Span::styled(
                    format!("   {line}"),
                    Style::default().fg(Color::White),
                )));
            }
        }
        match entry.status {
            AssistantStatus::Processing => {
                lines.push(Line::from(Span::styled(
                    "   Processing…",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            AssistantStatus::Responded | AssistantStatus::Error => {
                let (label_color, text_color) = if entry.status == AssistantStatus::Error {
                    (Color::Red, Color::Red)
                } else {
                    (Color::Green, Color::White)
                };
                lines.push(Line::from(Span::styled(
                    " Assistant: ",
                    Style::default().fg(label_color).add_modifier(Modifier::BOLD),
                )));
                for line in entry.response.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("   {line}"),
                        Style::default().fg(text_color),
                    )));
                }
            }
            _ => {}
        }
        lines.push(Line::from(""));
    }

    let (effective_scroll, max_scroll, overflow) =
        panel_scroll(&lines, cols[1], app.assistant_scroll_manual, app.assistant_scroll);
    let title = if app.assistant_scroll_manual {
        " Conversation  [scrolled — End to follow] "
    } else {
        " Conversation "
    };
    let conv = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .wrap(Wrap { trim: false })
        .scroll((effective_scroll, 0));
    f.render_widget(conv, cols[1]);
    if overflow {
        render_scrollbar(f, cols[1], max_scroll, effective_scroll);
    }
}

fn draw_tools(f: &mut Frame, area: Rect, app: &App) {
    let catalog = tools::all();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    // ── Left: tool list ───────────────────────────────────────────────────────
    let items: Vec<ListItem> = catalog.iter().map(|t| ListItem::new(t.name)).collect();
    let mut state = app.tool_list_state;
    let list = List::new(items)
        .block(
            Block::default()
                .title(" Security Tools ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, cols[0], &mut state);

    // ── Right: detail panel ───────────────────────────────────────────────────
    let selected = &catalog[app.tool_index.min(catalog.len() - 1)];
    let detail_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", selected.name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Category   : ", Style::default().fg(Color::DarkGray)),
            Span::styled(selected.category.label(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  About      : ", Style::default().fg(Color::DarkGray)),
            Span::styled(selected.description, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  All tools here run as simulations; nothing touches a live network.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  ↑/↓ or j/k: navigate   q/Esc: back",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let detail = Paragraph::new(detail_lines)
        .block(
            Block::default()
                .title(" Tool Details ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(detail, cols[1]);
}

fn draw_system(f: &mut Frame, area: Rect) {
    let sys = system::snapshot();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let sec_color = security_color(sys.security);
    let mut sec_lines = vec![Line::from(vec![
        Span::styled("  ● ", Style::default().fg(sec_color)),
        Span::styled(
            sys.security.label(),
            Style::default().fg(sec_color).add_modifier(Modifier::BOLD),
        ),
    ])];
    if sys.security == SecurityStatus::Secure {
        sec_lines.push(Line::from(Span::styled(
            format!("  {}", system::SECURE_NOTE),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let security = Paragraph::new(sec_lines).block(
        Block::default()
            .title(" Security Status ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
    );
    f.render_widget(security, rows[0]);

    let cpu = Gauge::default()
        .block(
            Block::default()
                .title(" CPU ")
                .title_style(Style::default().fg(Color::Cyan))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(30, 30, 45)))
        .percent(sys.cpu_usage)
        .label(format!("{}  {}%", sys.cpu, sys.cpu_usage));
    f.render_widget(cpu, rows[1]);

    let memory = Gauge::default()
        .block(
            Block::default()
                .title(" Memory ")
                .title_style(Style::default().fg(Color::Cyan))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
        )
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Rgb(30, 30, 45)))
        .percent(sys.memory_usage)
        .label(format!("{}  {}%", sys.memory, sys.memory_usage));
    f.render_widget(memory, rows[2]);

    let status_span = if sys.connected {
        Span::styled("Connected", Style::default().fg(Color::Green))
    } else {
        Span::styled("Offline", Style::default().fg(Color::Red))
    };
    let network = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("  Interface  : ", Style::default().fg(Color::DarkGray)),
            Span::styled(sys.interface, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  IP Address : ", Style::default().fg(Color::DarkGray)),
            Span::styled(sys.ip, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Status     : ", Style::default().fg(Color::DarkGray)),
            status_span,
        ]),
    ])
    .block(
        Block::default()
            .title(" Network ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
    );
    f.render_widget(network, rows[3]);

    let host = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("  OS         : ", Style::default().fg(Color::DarkGray)),
            Span::styled(sys.os, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Kernel     : ", Style::default().fg(Color::DarkGray)),
            Span::styled(sys.kernel, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Uptime     : ", Style::default().fg(Color::DarkGray)),
            Span::styled(sys.uptime, Style::default().fg(Color::White)),
        ]),
    ])
    .block(
        Block::default()
            .title(" Host ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
    );
    f.render_widget(host, rows[4]);
}

fn draw_settings(f: &mut Frame, area: Rect, app: &App) {
    let providers = Provider::all();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, provider) in providers.iter().enumerate() {
        let focused = app.settings_focus == i;
        let value = &app.settings_keys[i];
        let masked: String = if value.is_empty() {
            String::new()
        } else {
            "•".repeat(value.len().min(20))
        };
        let field = Paragraph::new(format!(" {masked}"))
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .title(format!(" {} API Key ", provider.name()))
                    .title_style(Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray }))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if focused {
                        Color::Yellow
                    } else {
                        Color::Rgb(50, 50, 80)
                    })),
            );
        f.render_widget(field, rows[i]);
    }

    let store_line = match app.client.keys().path() {
        Some(path) => format!("  Keys are stored in {}", path.display()),
        None => "  No config directory found; keys will not persist.".to_string(),
    };
    let hints = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: save all fields   Tab/↑↓: next field   Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  Leave a field blank to keep its stored value.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(store_line, Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(50, 50, 80))),
    )
    .wrap(Wrap { trim: false });
    f.render_widget(hints, rows[4]);
}

// ── Scroll helpers ────────────────────────────────────────────────────────────

/// Counts rendered rows accounting for word-wrap: each Line whose text width
/// exceeds `inner_width` wraps into ceil(width / inner_width) rows.
fn wrapped_line_count(lines: &[Line], inner_width: usize) -> usize {
    lines
        .iter()
        .map(|line| {
            let text_width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
            if inner_width == 0 || text_width == 0 {
                1
            } else {
                text_width.div_ceil(inner_width)
            }
        })
        .sum::<usize>()
        .max(1)
}

/// Scroll state for a bordered feed panel: manual offsets override the
/// stick-to-bottom default. Returns (effective_scroll, max_scroll, overflow).
fn panel_scroll(lines: &[Line], area: Rect, manual: bool, offset: u16) -> (u16, u16, bool) {
    let viewport = area.height.saturating_sub(2) as usize;
    // Available text width inside the borders, minus one column for the scrollbar.
    let inner_width = area.width.saturating_sub(3) as usize;
    let total = wrapped_line_count(lines, inner_width);
    let max_scroll = if total > viewport {
        (total - viewport) as u16
    } else {
        0
    };
    let effective = if manual { offset.min(max_scroll) } else { max_scroll };
    (effective, max_scroll, total > viewport)
}

fn render_scrollbar(f: &mut Frame, area: Rect, max_scroll: u16, position: u16) {
    let mut state = ScrollbarState::new(max_scroll as usize).position(position as usize);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"))
        .track_symbol(Some("│"))
        .thumb_symbol("█");
    f.render_stateful_widget(scrollbar, area, &mut state);
}

fn status_color(status: ConsoleStatus) -> Color {
    match status {
        ConsoleStatus::Success => Color::White,
        ConsoleStatus::Error => Color::Red,
        ConsoleStatus::Info => Color::Cyan,
        ConsoleStatus::Warning => Color::Yellow,
    }
}

fn security_color(status: SecurityStatus) -> Color {
    match status {
        SecurityStatus::Secure => Color::Green,
        SecurityStatus::Warning => Color::Yellow,
        SecurityStatus::Critical => Color::Red,
    }
}

// ── Test helpers ──────────────────────────────────────────────────────────────

/// Render the current app state into an in-memory buffer using `TestBackend`.
/// Useful for unit tests that need to assert on rendered output without a real terminal.
pub fn render_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("TestBackend terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}
