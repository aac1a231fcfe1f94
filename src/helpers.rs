use ratatui::layout::Rect;

use crate::geometry::Aabb;

pub fn centered_rect_with_percentage(percent_x: u16, percent_y: u16, cols: u16, rows: u16) -> Rect {
    let width = cols * percent_x / 100;
    let height = std::cmp::min(std::cmp::max(rows * percent_y / 100, 5), rows);
    Rect::new((cols - width) / 2, (rows - height) / 2, width, height)
}

/// Map a rectangle in board units onto terminal cells inside `area`.
///
/// Anything outside the board is clipped; `None` when nothing is left.
/// Visible shapes always cover at least one cell.
pub fn project(bounds: &Aabb, board: (f32, f32), area: Rect) -> Option<Rect> {
    let (board_width, board_height) = board;
    if board_width <= 0.0 || board_height <= 0.0 || area.width == 0 || area.height == 0 {
        return None;
    }

    let sx = area.width as f32 / board_width;
    let sy = area.height as f32 / board_height;

    let left = bounds.left().clamp(0.0, board_width) * sx;
    let right = bounds.right().clamp(0.0, board_width) * sx;
    let top = bounds.top().clamp(0.0, board_height) * sy;
    let bottom = bounds.bottom().clamp(0.0, board_height) * sy;
    if right <= left || bottom <= top {
        return None;
    }

    let col = (left.round() as u16).min(area.width - 1);
    let row = (top.round() as u16).min(area.height - 1);
    let width = (right.round() as u16).saturating_sub(col).clamp(1, area.width - col);
    let height = (bottom.round() as u16).saturating_sub(row).clamp(1, area.height - row);

    Some(Rect::new(area.x + col, area.y + row, width, height))
}

/// Terminal column for a board x coordinate.
pub fn column(x: f32, board_width: f32, area: Rect) -> u16 {
    let col = (x / board_width * area.width as f32).round().max(0.0) as u16;
    area.x + col.min(area.width)
}
