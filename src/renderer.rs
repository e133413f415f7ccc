use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, GLYPH_FOOD, GLYPH_SNAKE};
use crate::game::Snapshot;
use crate::snake::Position;
use crate::ui::hud::{render_hud, HudInfo};
use crate::ui::menu::render_instructions;

/// Renders one full frame from the engine snapshot.
///
/// The whole board is cleared and redrawn every frame; nothing is diffed.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, grid: GridSize, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, info);

    let theme = info.theme;
    let block = Block::bordered().border_style(
        Style::new()
            .fg(theme.border_fg)
            .bg(theme.play_bg),
    );
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    if let Some(food) = snapshot.food {
        draw_cell(
            frame,
            inner,
            grid,
            food,
            GLYPH_FOOD,
            Style::new().fg(theme.food),
        );
    }

    let head = snapshot.segments.first().copied();
    for segment in &snapshot.segments {
        let style = if Some(*segment) == head {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        draw_cell(frame, inner, grid, *segment, GLYPH_SNAKE, style);
    }

    if !info.running {
        render_instructions(frame, play_area, theme);
    }
}

fn draw_cell(
    frame: &mut Frame<'_>,
    inner: Rect,
    grid: GridSize,
    position: Position,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = logical_to_terminal(inner, grid, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, glyph, style);
}

/// Maps a 1-indexed grid cell to a terminal cell inside `inner`.
fn logical_to_terminal(inner: Rect, grid: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid) {
        return None;
    }

    let x_offset = u16::try_from(position.x - 1).ok()?;
    let y_offset = u16::try_from(position.y - 1).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
