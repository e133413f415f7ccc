use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::Snapshot;
use crate::score::format_score;

/// Supplemental values displayed alongside the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    /// The high-score readout appears only after a first run has ended.
    pub show_high_score: bool,
    pub running: bool,
    pub theme: &'a Theme,
}

/// Renders the one-line score readout and returns the remaining play area.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    info: &HudInfo<'_>,
) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let mut spans = vec![Span::styled(
        format_score(snapshot.score),
        Style::new()
            .fg(info.theme.hud_score)
            .add_modifier(Modifier::BOLD),
    )];
    if info.show_high_score {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("HI {}", format_score(info.high_score)),
            Style::new().fg(info.theme.hud_high_score),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        score_area,
    );

    play_area
}
