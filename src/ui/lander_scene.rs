//! Lander game rendering: ship, flame, surface and pad, fuel gauge.

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
use crate::games::lander::{
    FuelZone, LanderGame, LanderResult, FIELD_COLS, FIELD_ROWS, GROUND_ROW,
};

const SHIP_COLOR: Color = Color::White;
const FLAME_COLOR: Color = Color::Rgb(255, 140, 40);
const GROUND_COLOR: Color = Color::Gray;
const PAD_COLOR: Color = Color::Green;
const STAR_COLOR: Color = Color::Rgb(60, 60, 80);

/// Render the Lander game scene.
pub fn render_lander_scene(frame: &mut Frame, area: Rect, game: &LanderGame) {
    if game.game_result.is_some() {
        render_game_over(frame, area, game);
        return;
    }

    let layout = create_game_layout(
        frame,
        area,
        " Mare Tranquillitatis ",
        Color::Blue,
        FIELD_ROWS as u16,
        24,
    );

    render_field(frame, layout.content, game);

    if game.waiting_to_start {
        render_start_prompt(frame, layout.content, "[ Press Space to Begin Descent ]");
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_field(frame: &mut Frame, area: Rect, game: &LanderGame) {
    let cols = (FIELD_COLS as usize).min(area.width as usize);
    let rows = (FIELD_ROWS as usize).min(area.height as usize);

    let ship_col = game.x.round() as i64;
    let ship_row = game.y.round() as i64;
    let ground = GROUND_ROW.round() as i64;
    let pad_left = game.pad_left.round() as i64;
    let pad_right = game.pad_right.round() as i64;

    for row in 0..rows as i64 {
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();

        for col in 0..cols as i64 {
            let (ch, style) = if row == ship_row && col == ship_col {
                (
                    '▲',
                    Style::default().fg(SHIP_COLOR).add_modifier(Modifier::BOLD),
                )
            } else if game.flame_ticks > 0 && row == ship_row + 1 && col == ship_col {
                ('*', Style::default().fg(FLAME_COLOR))
            } else if row == ground && col >= pad_left && col <= pad_right {
                ('═', Style::default().fg(PAD_COLOR).add_modifier(Modifier::BOLD))
            } else if row == ground {
                ('─', Style::default().fg(GROUND_COLOR))
            } else if row > ground {
                ('░', Style::default().fg(Color::Rgb(40, 40, 40)))
            } else if (col * 11 + row * 17) % 53 == 0 {
                ('·', Style::default().fg(STAR_COLOR))
            } else {
                (' ', Style::default())
            };

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

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &LanderGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::Blue,
            &[("[Space]", "Engine"), ("[← →]", "Thrusters"), ("[Esc]", "Forfeit")],
        );
        return;
    }

    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    let over = if game.over_pad() { "Over the pad" } else { "Find the pad" };
    render_status_bar(
        frame,
        area,
        over,
        if game.over_pad() { Color::Green } else { Color::Blue },
        &[("[Space]", "Engine"), ("[← →]", "Thrusters"), ("[Esc]", "Forfeit")],
    );
}

fn fuel_color(zone: FuelZone) -> Color {
    match zone {
        FuelZone::Green => Color::Green,
        FuelZone::Amber => Color::Yellow,
        FuelZone::Red => Color::Red,
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &LanderGame) {
    let inner = render_info_panel_frame(frame, area);

    // Fuel bar: 16 cells, colored by zone
    let fraction = (game.fuel / game.max_fuel).clamp(0.0, 1.0);
    let filled = (fraction * 16.0).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(16 - filled));

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Fuel: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.0}", game.fuel),
                Style::default().fg(fuel_color(game.fuel_zone())),
            ),
        ]),
        Line::from(Span::styled(
            bar,
            Style::default().fg(fuel_color(game.fuel_zone())),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Altitude: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", game.altitude()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("V-speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:+.2}", game.vy),
                Style::default().fg(if game.vy <= game.safe_vy {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
        ]),
        Line::from(vec![
            Span::styled("H-speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:+.2}", game.vx),
                Style::default().fg(if game.vx.abs() <= game.safe_vx {
                    Color::Green
                } else {
                    Color::Red
                }),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Safe vy: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", game.safe_vy),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Safe vx: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", game.safe_vx),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &LanderGame) {
    let result = game.game_result.expect("game over scene needs a result");

    let (result_type, title, message) = match result {
        LanderResult::Win => {
            let fuel_pct = (game.fuel / game.max_fuel * 100.0) as u32;
            (
                GameResultType::Win,
                ":: THE EAGLE HAS LANDED ::",
                format!("Touchdown with {}% fuel remaining.", fuel_pct),
            )
        }
        LanderResult::Loss => (
            GameResultType::Loss,
            "CRATER MADE",
            "The ship is scrap on the lunar surface.".to_string(),
        ),
    };

    let detail = format!("Difficulty: {}", game.difficulty.name());
    render_game_over_overlay(frame, area, result_type, title, &message, &detail);
}
