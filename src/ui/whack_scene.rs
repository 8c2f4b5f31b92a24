//! Whack game rendering: three pads, one mole, a progress strip.

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
use crate::games::whack::{WhackGame, WhackPhase, WhackResult, PADS};

/// Pad colors in key order Left/Down/Right.
const PAD_COLORS: [Color; PADS] = [Color::LightRed, Color::LightYellow, Color::LightBlue];

const FIELD_ROWS: u16 = 12;

/// Render the Whack game scene.
pub fn render_whack_scene(frame: &mut Frame, area: Rect, game: &WhackGame) {
    if game.game_result.is_some() {
        render_game_over(frame, area, game);
        return;
    }

    let layout = create_game_layout(frame, area, " Mole Patrol ", Color::Yellow, FIELD_ROWS, 24);

    render_pads(frame, layout.content, game);

    if game.waiting_to_start {
        render_start_prompt(frame, layout.content, "[ Press Space to Start ]");
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// The mole sprite, drawn over its pad; the flash version after a hit.
const MOLE: [&str; 3] = ["  (\\_/)  ", "  (o.o)  ", "  (> <)  "];
const MOLE_HIT: [&str; 3] = ["  \\o_o/  ", "  (x.x)  ", "  (___)  "];
const PAD_BASE: &str = "_________";

fn render_pads(frame: &mut Frame, area: Rect, game: &WhackGame) {
    if area.height < 6 || area.width < 30 {
        return;
    }

    let (up_pad, sprite, sprite_color) = match game.phase {
        WhackPhase::Mole { pad, .. } => (Some(pad), &MOLE, PAD_COLORS[pad]),
        WhackPhase::Feedback { pad, .. } => (Some(pad), &MOLE_HIT, Color::White),
        WhackPhase::Blank { .. } => (None, &MOLE, Color::Reset),
    };

    let pad_width = PAD_BASE.len() as u16;
    let spacing = (area.width.saturating_sub(pad_width * PADS as u16)) / (PADS as u16 + 1);
    let base_y = area.y + area.height / 2;

    for pad in 0..PADS {
        let x = area.x + spacing + (pad as u16) * (pad_width + spacing);

        // Mole sprite rows above the pad base
        if up_pad == Some(pad) {
            for (i, row) in sprite.iter().enumerate() {
                let y = base_y.saturating_sub(sprite.len() as u16 - i as u16);
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        *row,
                        Style::default()
                            .fg(sprite_color)
                            .add_modifier(Modifier::BOLD),
                    ))),
                    Rect::new(x, y, pad_width, 1),
                );
            }
        }

        // Pad base with its lane color
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                PAD_BASE,
                Style::default().fg(PAD_COLORS[pad]),
            ))),
            Rect::new(x, base_y, pad_width, 1),
        );

        // Key hint under each pad
        let hint = ["  [ ← ]  ", "  [ ↓ ]  ", "  [ → ]  "][pad];
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            ))),
            Rect::new(x, base_y + 2, pad_width, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &WhackGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::Yellow,
            &[("[Space]", "Start"), ("[Esc]", "Forfeit")],
        );
        return;
    }

    if render_forfeit_status_bar(frame, area, game.forfeit_pending) {
        return;
    }

    let (text, color) = match game.phase {
        WhackPhase::Blank { .. } => ("Wait for it...", Color::DarkGray),
        WhackPhase::Mole { .. } => ("Whack it!", Color::Yellow),
        WhackPhase::Feedback { .. } => ("Got it!", Color::Green),
    };
    render_status_bar(
        frame,
        area,
        text,
        color,
        &[("[← ↓ →]", "Whack"), ("[Esc]", "Forfeit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &WhackGame) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Hits: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.score, game.target_score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Trial: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", game.trials_done + 1, game.trials_total),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Window: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{}-{}ms",
                    game.presentation_range_ms.0, game.presentation_range_ms.1
                ),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &WhackGame) {
    let result = game.game_result.expect("game over scene needs a result");

    let (result_type, title, message) = match result {
        WhackResult::Win => (
            GameResultType::Win,
            ":: PATROL COMPLETE ::",
            format!(
                "{} of {} moles whacked.",
                game.score, game.trials_total
            ),
        ),
        WhackResult::Loss => (
            GameResultType::Loss,
            "THE MOLES WIN",
            format!(
                "Only {} of {} moles whacked ({} needed).",
                game.score, game.trials_total, game.target_score
            ),
        ),
    };

    let detail = format!("Difficulty: {}", game.difficulty.name());
    render_game_over_overlay(frame, area, result_type, title, &message, &detail);
}
