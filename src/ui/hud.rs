use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::session::{Phase, Session};

/// Formats elapsed seconds as mm:ss.
#[must_use]
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Renders the single-row HUD below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &Session, theme: &Theme) {
    let hint = match session.phase {
        Phase::Idle => "[space] play",
        Phase::Playing => "[space] pause  [esc] re-roll food",
        Phase::Paused => "[space] resume",
        Phase::GameOver | Phase::Won => "[enter] restart  [q] quit",
    };

    let line = Line::from(vec![
        Span::raw(format!(" Score {}", session.score)),
        Span::raw("  "),
        Span::raw(format_elapsed(session.elapsed_seconds)),
        Span::raw("  "),
        Span::raw(hint),
    ]);

    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Left)
            .style(Style::new().fg(theme.hud_fg)),
        area,
    );
}
