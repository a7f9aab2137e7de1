//! TUI rendering with ratatui
//!
//! Module face, bomb widgets, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::Slot;
use crate::facts::BombInfo;
use crate::output::BOARD_ROWS;
use crate::puzzle::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ALPHABET BUTTONS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let puzzle = app.session.puzzle();
    let mut lines = vec![Line::from("")];

    let mut slots = Slot::ALL.into_iter();
    for width in BOARD_ROWS {
        let mut spans = Vec::with_capacity(width * 2);
        for slot in slots.by_ref().take(width) {
            let color = puzzle.color_at(slot);
            let (r, g, b) = color.rgb();
            let mut style = Style::default().fg(Color::Black).bg(Color::Rgb(r, g, b));
            if puzzle.state().is_pressed(slot) {
                style = style
                    .add_modifier(Modifier::CROSSED_OUT)
                    .add_modifier(Modifier::DIM);
            }
            if app.last_press.is_some_and(|e| e.slot == slot) {
                style = style.add_modifier(Modifier::BOLD);
            }

            let text = if app.colorblind {
                format!(" {}{} ", puzzle.letter_at(slot), puzzle.colorblind_label(slot))
            } else {
                format!(" {} ", puzzle.letter_at(slot))
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let (title_color, title) = match puzzle.phase() {
        Phase::Solved => (Color::Green, format!(" Module {} - DISARMED ", puzzle.id())),
        _ => (Color::Yellow, format!(" Module {} ", puzzle.id())),
    };

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(title_color)),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_facts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_facts(f: &mut Frame, app: &App, area: Rect) {
    let facts = app.session.facts();

    let indicators = if facts.indicators.is_empty() {
        "none".to_string()
    } else {
        facts
            .indicators
            .iter()
            .map(|i| {
                if i.lit {
                    format!("{}*", i.label)
                } else {
                    i.label.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    let plates = if facts.port_plates.is_empty() {
        "none".to_string()
    } else {
        facts
            .port_plates
            .iter()
            .map(|plate| {
                let names: Vec<&str> = plate.ports().iter().map(|p| p.name()).collect();
                format!("[{}]", names.join(" "))
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Serial:     "),
            Span::styled(
                facts.serial_number().as_str().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Batteries:  {} in {} holder(s)",
            facts.battery_count(),
            facts.battery_holder_count()
        )),
        Line::from(format!("Indicators: {indicators}")),
        Line::from(format!("Ports:      {plates}")),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Bomb ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let puzzle = app.session.puzzle();
    let strikes_style = if app.session.strikes() > 0 {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    let strikes = Paragraph::new(format!("Strikes: {}", app.session.strikes()))
        .alignment(Alignment::Center)
        .style(strikes_style);
    f.render_widget(strikes, chunks[0]);

    let progress = Paragraph::new(format!(
        "Solved: {} | Seed: {}",
        app.modules_solved,
        app.session.seed()
    ))
    .alignment(Alignment::Center);
    f.render_widget(progress, chunks[1]);

    let help_text = if puzzle.is_solved() {
        "Ctrl-N: New Module | Esc: Quit"
    } else {
        "A-Z: Press | Tab: Colorblind | Ctrl-N: New | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
