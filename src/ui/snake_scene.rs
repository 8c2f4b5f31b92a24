//! Snake game rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::game_common::{
    create_game_layout, render_forfeit_status_bar, render_game_over_overlay,
    render_info_panel_frame, render_start_prompt, render_status_bar, GameResultType,
};
use crate::games::snake::{Cell, SnakeGame, SnakeResult, GRID_COLS, GRID_ROWS};

const HEAD_COLOR: Color = Color::Rgb(110, 255, 110);
const BODY_COLOR: Color = Color::Green;
const APPLE_COLOR: Color = Color::LightRed;
const FLOOR_COLOR: Color = Color::Rgb(26, 26, 34);

/// Render the Snake game scene.
pub fn render_snake_scene(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if game.game_result.is_some() {
        render_game_over(frame, area, game);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Orchard Serpent ",
        Color::Green,
        GRID_ROWS as u16,
        22,
    );

    render_grid(frame, layout.content, game);

    if game.waiting_to_start {
        render_start_prompt(frame, layout.content, "[ Press Space to Start ]");
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Render the grid, two terminal columns per cell to square the aspect.
fn render_grid(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let rows = (GRID_ROWS as u16).min(area.height);

    for row in 0..rows {
        let mut spans: Vec<Span> = Vec::new();
        for col in 0..GRID_COLS {
            let cell = Cell {
                x: col,
                y: row as i16,
            };
            let span = if game.segments.front() == Some(&cell) {
                Span::styled("██", Style::default().fg(HEAD_COLOR))
            } else if game.occupies(cell) {
                Span::styled("▓▓", Style::default().fg(BODY_COLOR))
            } else if game.apple == cell {
                Span::styled("()", Style::default().fg(APPLE_COLOR))
            } else {
                Span::styled("··", Style::default().fg(FLOOR_COLOR))
            };
            spans.push(span);
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, area.y + row, area.width, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::Green,
            &[("[Space]", "Start"), ("[Esc]", "Forfeit")],
        );
        return;
    }

    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    render_status_bar(
        frame,
        area,
        "Slither!",
        Color::Green,
        &[("[Arrows]", "Steer"), ("[Esc]", "Forfeit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Apples: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.score, game.target_score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.segments.len()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Step: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}ms", game.step_interval_ms),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" ██ ", Style::default().fg(HEAD_COLOR)),
            Span::styled("head", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ▓▓ ", Style::default().fg(BODY_COLOR)),
            Span::styled("body", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" () ", Style::default().fg(APPLE_COLOR)),
            Span::styled("apple", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let result = game.game_result.expect("game over scene needs a result");

    let (result_type, title, message) = match result {
        SnakeResult::Win => (
            GameResultType::Win,
            ":: ORCHARD EMPTIED ::",
            format!("{}/{} apples eaten.", game.score, game.target_score),
        ),
        SnakeResult::Loss => (
            GameResultType::Loss,
            "THE SERPENT FALLS",
            format!("The serpent falls after {} apples.", game.score),
        ),
    };

    let detail = format!("Final length: {}", game.segments.len());
    render_game_over_overlay(frame, area, result_type, title, &message, &detail);
}
