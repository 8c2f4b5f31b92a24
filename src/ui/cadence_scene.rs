//! Cadence game rendering: three lanes, falling notes, a finish line.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::game_common::{
    create_game_layout, format_clock, render_forfeit_status_bar, render_game_over_overlay,
    render_info_panel_frame, render_start_prompt, render_status_bar, GameResultType,
};
use crate::games::cadence::{
    CadenceGame, CadenceResult, FIELD_ROWS, LANES, TARGET_HALF_ROWS,
};

/// Lane body colors, matching the key legend order Left/Down/Right.
const LANE_COLORS: [Color; LANES] = [Color::LightRed, Color::LightYellow, Color::LightBlue];

/// A consumed note is drawn burnt out.
const SCORED_COLOR: Color = Color::DarkGray;

const LANE_W: usize = 7;
const GAP_W: usize = 3;

/// Render the Cadence game scene.
pub fn render_cadence_scene(frame: &mut Frame, area: Rect, game: &CadenceGame) {
    if game.game_result.is_some() {
        render_game_over(frame, area, game);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Cadence ",
        Color::Magenta,
        FIELD_ROWS as u16,
        24,
    );

    render_lanes(frame, layout.content, game);

    if game.waiting_to_start {
        render_start_prompt(frame, layout.content, "[ Press Space to Start ]");
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// True when a note's body covers the given terminal row.
fn note_covers(note_y: f64, row: usize) -> bool {
    (note_y - row as f64).abs() <= TARGET_HALF_ROWS
}

/// Render the lane field row by row.
fn render_lanes(frame: &mut Frame, area: Rect, game: &CadenceGame) {
    let rows = (FIELD_ROWS as u16).min(area.height);
    let finish = game.finish_row.round() as usize;

    for row in 0..rows as usize {
        let on_finish = row == finish;
        let mut spans: Vec<Span> = Vec::new();

        for lane in 0..LANES {
            // Gap before each lane; carries the finish line through
            let gap: String = if on_finish {
                "═".repeat(GAP_W)
            } else {
                " ".repeat(GAP_W)
            };
            spans.push(Span::styled(gap, Style::default().fg(Color::Yellow)));

            // Oldest (lowest) note wins the cell, like the hit scan
            let covering = game
                .targets
                .iter()
                .find(|t| t.lane == lane && note_covers(t.y, row));

            let (cell, style) = match covering {
                Some(note) => {
                    let color = if note.scored {
                        SCORED_COLOR
                    } else {
                        LANE_COLORS[lane]
                    };
                    ("█".repeat(LANE_W), Style::default().fg(color))
                }
                None if on_finish => ("═".repeat(LANE_W), Style::default().fg(Color::Yellow)),
                // Empty lane cell: a dim center dot marks the lane
                None => ("   ·   ".to_string(), Style::default().fg(Color::Rgb(40, 40, 50))),
            };
            spans.push(Span::styled(cell, style));
        }

        let y = area.y + row as u16;
        if y < area.y + area.height {
            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(area.x, y, area.width, 1),
            );
        }
    }
}

/// Render the status bar below the field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &CadenceGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::Magenta,
            &[("[Space]", "Start"), ("[Esc]", "Forfeit")],
        );
        return;
    }

    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    // Judgment flash takes over the status line while it lasts
    if let Some(judgment) = game.last_judgment {
        let (text, color) = if judgment.points > 0 {
            (format!("+{}", judgment.points), Color::Green)
        } else {
            ("Miss".to_string(), Color::Red)
        };
        render_status_bar(
            frame,
            area,
            &text,
            color,
            &[("[← ↓ →]", "Strike"), ("[Esc]", "Forfeit")],
        );
        return;
    }

    render_status_bar(
        frame,
        area,
        "Strike on the line!",
        Color::Magenta,
        &[("[← ↓ →]", "Strike"), ("[Esc]", "Forfeit")],
    );
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &CadenceGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.score, game.target_score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_clock(game.round_remaining_ms),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("x{:.2}", game.staircase.multiplier()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("Streak: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/3", game.staircase.streak()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Hits: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", game.hits), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Misses: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", game.misses), Style::default().fg(Color::Red)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Lanes:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" ← ", Style::default().fg(LANE_COLORS[0])),
            Span::styled("left", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ↓ ", Style::default().fg(LANE_COLORS[1])),
            Span::styled("middle", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" → ", Style::default().fg(LANE_COLORS[2])),
            Span::styled("right", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the game over overlay.
fn render_game_over(frame: &mut Frame, area: Rect, game: &CadenceGame) {
    let result = game.game_result.expect("game over scene needs a result");

    let (result_type, title, message) = match result {
        CadenceResult::Win => (
            GameResultType::Win,
            ":: IN PERFECT TIME ::",
            format!(
                "The rhythm held: {}/{} points with {} hits.",
                game.score, game.target_score, game.hits
            ),
        ),
        CadenceResult::Loss => (
            GameResultType::Loss,
            "OFF THE BEAT",
            format!(
                "The round ends at {}/{} points ({} hits, {} misses).",
                game.score, game.target_score, game.hits, game.misses
            ),
        ),
    };

    let detail = format!("Final speed x{:.2}", game.staircase.multiplier());
    render_game_over_overlay(frame, area, result_type, title, &message, &detail);
}
