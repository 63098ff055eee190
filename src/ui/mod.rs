pub mod flight_scene;
pub mod game_common;

use crate::flight::FlightSession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the scene lays out sensibly in.
pub const MIN_WIDTH: u16 = 44;
pub const MIN_HEIGHT: u16 = 16;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, session: &FlightSession) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        frame.render_widget(
            msg,
            Rect {
                y: size.y + size.height / 2,
                height: 1.min(size.height),
                ..size
            },
        );
        return;
    }

    flight_scene::render_flight(frame, size, session);
}
