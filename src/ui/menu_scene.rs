//! Arcade menu rendering: game list, difficulty picker, best scores.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::games::GameKind;
use crate::menu::MenuState;
use crate::scores::{best_score, win_count, SessionRecord};

const DIFFICULTY_NAMES: [&str; 4] = ["Novice", "Apprentice", "Journeyman", "Master"];

/// Render the arcade menu.
pub fn render_menu_scene(
    frame: &mut Frame,
    area: Rect,
    menu: &MenuState,
    records: &[SessionRecord],
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Parlor ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Banner
            Constraint::Min(10),   // Game list / picker
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    render_banner(frame, v_chunks[0]);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(v_chunks[1]);

    render_game_list(frame, h_chunks[0], menu, records);
    render_side_panel(frame, h_chunks[1], menu, records);

    render_footer(frame, v_chunks[2], menu);
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "P A R L O R",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "a reflex arcade",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_game_list(frame: &mut Frame, area: Rect, menu: &MenuState, records: &[SessionRecord]) {
    let block = Block::default()
        .title(" Games ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (index, kind) in GameKind::ALL.iter().enumerate() {
        let selected = index == menu.selected_game;
        let cursor = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let best = match best_score(records, kind.slug()) {
            Some(score) => format!("best {}", score),
            None => "unplayed".to_string(),
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Magenta)),
            Span::styled(format!("{} ", kind.icon()), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<22}", kind.title()), title_style),
            Span::styled(best, Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", kind.tagline()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_side_panel(frame: &mut Frame, area: Rect, menu: &MenuState, records: &[SessionRecord]) {
    if menu.picking_difficulty {
        render_difficulty_picker(frame, area, menu);
    } else {
        render_record_panel(frame, area, menu, records);
    }
}

fn render_difficulty_picker(frame: &mut Frame, area: Rect, menu: &MenuState) {
    let kind = menu.current_game();
    let block = Block::default()
        .title(format!(" {} ", kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Choose a difficulty:",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    for (index, name) in DIFFICULTY_NAMES.iter().enumerate() {
        let selected = index == menu.selected_difficulty;
        let cursor = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:<12}", name), style),
            Span::styled(
                kind.difficulty_blurb(index),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_record_panel(
    frame: &mut Frame,
    area: Rect,
    menu: &MenuState,
    records: &[SessionRecord],
) {
    let kind = menu.current_game();
    let block = Block::default()
        .title(" Records ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slug = kind.slug();
    let plays = records.iter().filter(|r| r.game == slug).count();
    let wins = win_count(records, slug);
    let best = best_score(records, slug);

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(
            kind.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Sessions: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", plays), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("Wins: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", wins), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Best score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                best.map_or("—".to_string(), |s| s.to_string()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, area: Rect, menu: &MenuState) {
    let controls: &[(&str, &str)] = if menu.picking_difficulty {
        &[("[↑ ↓]", "Difficulty"), ("[Enter]", "Play"), ("[Esc]", "Back")]
    } else {
        &[("[↑ ↓]", "Browse"), ("[Enter]", "Select"), ("[Q]", "Quit")]
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
