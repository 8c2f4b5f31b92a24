//! Flappy game rendering: the bird, the gates, the ground.

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
use crate::games::flappy::{
    FlappyGame, FlappyResult, BIRD_COL, FIELD_COLS, FIELD_ROWS, GATE_HALF_COLS,
};

const GATE_COLOR: Color = Color::Green;
const BIRD_COLOR: Color = Color::Yellow;
const SKY_DOT: Color = Color::Rgb(30, 34, 48);

/// Render the Flappy game scene.
pub fn render_flappy_scene(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if game.game_result.is_some() {
        render_game_over(frame, area, game);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Skybound ",
        Color::LightGreen,
        FIELD_ROWS as u16,
        22,
    );

    render_sky(frame, layout.content, game);

    if game.waiting_to_start {
        render_start_prompt(frame, layout.content, "[ Press Space to Flap ]");
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Render the playing field as a character grid.
fn render_sky(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let cols = (FIELD_COLS as usize).min(area.width as usize);
    let rows = (FIELD_ROWS as usize).min(area.height as usize);

    let bird_row = game.bird_row.round() as i64;
    let bird_col = BIRD_COL.round() as i64;

    for row in 0..rows {
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();

        for col in 0..cols {
            let (ch, style) = cell_at(game, col as i64, row as i64, bird_col, bird_row);
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, area.y + row as u16, area.width, 1),
        );
    }
}

/// What occupies a field cell, in paint order: bird, gate wall, backdrop.
fn cell_at(
    game: &FlappyGame,
    col: i64,
    row: i64,
    bird_col: i64,
    bird_row: i64,
) -> (char, Style) {
    if col == bird_col && row == bird_row {
        let ch = if game.flap_ticks > 0 { '^' } else { '>' };
        return (
            ch,
            Style::default().fg(BIRD_COLOR).add_modifier(Modifier::BOLD),
        );
    }

    for gate in &game.gates {
        let left = (gate.x - GATE_HALF_COLS).round() as i64;
        let right = (gate.x + GATE_HALF_COLS).round() as i64;
        if col < left || col > right {
            continue;
        }
        let in_opening = row as f64 >= gate.opening_top && (row as f64) < gate.opening_bottom;
        if !in_opening {
            return ('█', Style::default().fg(GATE_COLOR));
        }
    }

    // Sparse backdrop dots give a sense of motion
    if (col * 7 + row * 13) % 37 == 0 {
        ('·', Style::default().fg(SKY_DOT))
    } else {
        (' ', Style::default())
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[Space]", "Flap"), ("[Esc]", "Forfeit")],
        );
        return;
    }

    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    render_status_bar(
        frame,
        area,
        "Stay airborne!",
        Color::Green,
        &[("[Space]", "Flap"), ("[Esc]", "Forfeit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Gates: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.score, game.target_score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Altitude: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0}", FIELD_ROWS - game.bird_row),
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
            Span::styled(" > ", Style::default().fg(BIRD_COLOR)),
            Span::styled("you", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(GATE_COLOR)),
            Span::styled("gate", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let result = game.game_result.expect("game over scene needs a result");

    let (result_type, title, message) = match result {
        FlappyResult::Win => (
            GameResultType::Win,
            ":: CLEAR SKIES ::",
            format!("All {} gates cleared!", game.target_score),
        ),
        FlappyResult::Loss => (
            GameResultType::Loss,
            "GROUNDED",
            format!("The flight ends after {} gates.", game.score),
        ),
    };

    let detail = format!("Difficulty: {}", game.difficulty.name());
    render_game_over_overlay(frame, area, result_type, title, &message, &detail);
}
