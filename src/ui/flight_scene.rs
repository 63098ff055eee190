//! UI rendering for the flight session.
//!
//! The simulation works in viewport pixels; this scene samples the center of
//! every terminal cell and maps it back into viewport space.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use crate::core::constants::{PIPE_HEIGHT, PIPE_WIDTH};
use crate::flight::{bird_rotation, current_speed_multiplier, FlightSession, GamePhase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    Ground,
    Bird(char),
}

/// Bird glyph by tilt: rising, level, diving.
pub fn bird_glyph(rotation: f64) -> char {
    if rotation < -0.2 {
        '▲'
    } else if rotation > 0.2 {
        '▼'
    } else {
        '►'
    }
}

/// Sample the session onto a `cols` x `rows` grid.
pub fn build_play_field(session: &FlightSession, cols: u16, rows: u16) -> Vec<Vec<Cell>> {
    let vp = &session.viewport;
    let sx = vp.width / cols.max(1) as f64;
    let sy = vp.height / rows.max(1) as f64;

    let pipes = &session.pipes;
    let top_pipe_bottom = pipes.top_y() + PIPE_HEIGHT;
    let bottom_pipe_top = pipes.bottom_y(vp);
    let ground_top = vp.ground_top();

    let center = session.bird.center();
    let bird_col = (center.x / sx).floor() as i64;
    let bird_row = (center.y / sy).floor() as i64;
    let glyph = bird_glyph(bird_rotation(session));

    (0..rows)
        .map(|row| {
            let py = (row as f64 + 0.5) * sy;
            (0..cols)
                .map(|col| {
                    let px = (col as f64 + 0.5) * sx;
                    if row as i64 == bird_row && col as i64 == bird_col {
                        Cell::Bird(glyph)
                    } else if py >= ground_top {
                        Cell::Ground
                    } else if px >= pipes.x
                        && px < pipes.x + PIPE_WIDTH
                        && (py < top_pipe_bottom || py >= bottom_pipe_top)
                    {
                        Cell::Pipe
                    } else {
                        Cell::Sky
                    }
                })
                .collect()
        })
        .collect()
}

/// Render the whole flight screen.
pub fn render_flight(frame: &mut Frame, area: Rect, session: &FlightSession) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, 22);

    render_play_area(frame, layout.content, session);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);

    if session.phase == GamePhase::GameOver {
        let cause = session
            .crash
            .map(|c| c.describe())
            .unwrap_or("crashed");
        render_game_over_banner(
            frame,
            layout.content,
            Color::Red,
            "CRASH!",
            &format!("You {} with {} points.", cause, session.score),
            "[Space] Try again  [Esc] Quit",
        );
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, session: &FlightSession) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let grid = build_play_field(session, area.width, area.height);
    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| match cell {
                        Cell::Sky => Span::raw(" "),
                        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                        Cell::Ground => Span::styled("▒", Style::default().fg(Color::Yellow)),
                        Cell::Bird(c) => Span::styled(
                            c.to_string(),
                            Style::default()
                                .fg(Color::LightYellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);

    // Score floats over the sky
    if session.phase != GamePhase::Idle && area.height > 2 {
        let score = Paragraph::new(Span::styled(
            session.score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(
            score,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &FlightSession) {
    let controls = [("[Space/Up/Click]", "Flap"), ("[Esc]", "Quit")];
    match session.phase {
        GamePhase::Idle => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &controls,
        ),
        GamePhase::Playing => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score),
            Color::Green,
            &controls,
        ),
        GamePhase::GameOver => render_status_bar(
            frame,
            area,
            "Game over - tap to restart",
            Color::Red,
            &controls,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &FlightSession) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let phase = match session.phase {
        GamePhase::Idle => ("Ready", Color::Yellow),
        GamePhase::Playing => ("Flying", Color::Green),
        GamePhase::GameOver => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", phase.0),
            Style::default().fg(phase.1).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:.2}x", current_speed_multiplier(session)),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(
                format!("{:+.0}", session.pipes.gap_offset),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Climb: ", label),
            Span::styled(
                format!("{:+.0}", -session.bird.velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Time: ", label),
            Span::styled(
                format!("{:.1}s", session.elapsed_ms / 1000.0),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FlightConfig;
    use crate::flight::process_tap;

    fn count(grid: &[Vec<Cell>], pred: impl Fn(&Cell) -> bool) -> usize {
        grid.iter().flatten().filter(|c| pred(c)).count()
    }

    #[test]
    fn test_grid_dimensions() {
        let session = FlightSession::new(FlightConfig::default());
        let grid = build_play_field(&session, 40, 20);
        assert_eq!(grid.len(), 20);
        assert!(grid.iter().all(|row| row.len() == 40));
    }

    #[test]
    fn test_exactly_one_bird() {
        let session = FlightSession::new(FlightConfig::default());
        let grid = build_play_field(&session, 40, 20);
        assert_eq!(count(&grid, |c| matches!(c, Cell::Bird(_))), 1);
    }

    #[test]
    fn test_idle_pipe_is_offscreen() {
        let session = FlightSession::new(FlightConfig::default());
        let grid = build_play_field(&session, 40, 20);
        assert_eq!(count(&grid, |c| *c == Cell::Pipe), 0);
        assert!(count(&grid, |c| *c == Cell::Ground) > 0);
    }

    #[test]
    fn test_pipe_drawn_on_screen() {
        let mut session = FlightSession::new(FlightConfig::default());
        process_tap(&mut session);
        session.pipes.x = 200.0;
        let grid = build_play_field(&session, 40, 40);
        assert!(count(&grid, |c| *c == Cell::Pipe) > 0);
        // Gap rows in the pipe column stay open
        let col = ((200.0 + PIPE_WIDTH / 2.0) / (400.0 / 40.0)) as usize;
        let gap_row = (session.pipes.gap_center(&session.viewport) / (850.0 / 40.0)) as usize;
        assert_eq!(grid[gap_row][col], Cell::Sky);
        assert_eq!(grid[0][col], Cell::Pipe);
    }

    #[test]
    fn test_bird_glyph_by_rotation() {
        assert_eq!(bird_glyph(-0.5), '▲');
        assert_eq!(bird_glyph(0.0), '►');
        assert_eq!(bird_glyph(0.5), '▼');
    }
}
