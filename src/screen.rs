use std::io;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::{
    config::Rules,
    display::{self, Display, Scene},
    geometry::Aabb,
    helpers::{centered_rect_with_percentage, column, project},
};

/// Smallest terminal that still fits the board.
const MIN_COLS: u16 = 40;
const MIN_ROWS: u16 = 12;

/// Score digits sit this far below the top edge, in board units.
const SCORE_TOP: f32 = 10.0;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0, 0, 0),
            foreground: Color::Rgb(255, 255, 255),
        }
    }
}

/// The board drawn into the terminal.
pub struct Screen {
    terminal: DefaultTerminal,
    board: (f32, f32),
    net: Vec<Aabb>,
    palette: Palette,
}

impl Screen {
    pub fn new(terminal: DefaultTerminal, rules: &Rules) -> Self {
        Self {
            terminal,
            board: rules.board(),
            net: display::net(rules),
            palette: Palette::default(),
        }
    }
}

impl Display for Screen {
    fn render(&mut self, scene: &Scene) -> io::Result<()> {
        let board = self.board;
        let net = &self.net;
        let palette = self.palette;
        self.terminal.draw(|frame| draw(frame, scene, board, net, palette))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, scene: &Scene, board: (f32, f32), net: &[Aabb], palette: Palette) {
    let area = frame.area();
    if area.width < MIN_COLS || area.height < MIN_ROWS {
        show_terminal_resize_warning(frame, palette);
        return;
    }

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    for segment in net {
        fill(frame, segment, board, area, palette.foreground);
    }
    draw_scores(frame, scene.scores, board, area, palette);
    for shape in [&scene.ball, &scene.left, &scene.right] {
        fill(frame, shape, board, area, palette.foreground);
    }
}

fn fill(frame: &mut Frame, bounds: &Aabb, board: (f32, f32), area: Rect, color: Color) {
    if let Some(cells) = project(bounds, board, area) {
        frame.render_widget(Block::default().style(Style::default().bg(color)), cells);
    }
}

/// Left score starts a third of the way in, right score ends a third from the
/// right edge.
fn draw_scores(
    frame: &mut Frame,
    scores: (u32, u32),
    board: (f32, f32),
    area: Rect,
    palette: Palette,
) {
    let (board_width, board_height) = board;
    let top = area.y + (SCORE_TOP / board_height * area.height as f32).round() as u16;
    let height = area.bottom().saturating_sub(top).min(4);
    let left_col = column(board_width / 3.0, board_width, area);
    let right_col = column(board_width - board_width / 3.0, board_width, area);

    let style = Style::default().fg(palette.foreground).bg(palette.background);
    let digits = |score: u32, alignment: Alignment| {
        BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(style)
            .lines(vec![score.to_string().into()])
            .alignment(alignment)
            .build()
    };

    let left_area = Rect::new(left_col, top, area.right().saturating_sub(left_col), height);
    frame.render_widget(digits(scores.0, Alignment::Left), left_area);

    let right_area = Rect::new(area.x, top, right_col.saturating_sub(area.x), height);
    frame.render_widget(digits(scores.1, Alignment::Right), right_area);
}

fn show_terminal_resize_warning(frame: &mut Frame, palette: Palette) {
    let area = frame.area();
    let popup_area = centered_rect_with_percentage(60, 20, area.width, area.height);
    let popup = Paragraph::new("Terminal too small!\nPlease resize.")
        .block(
            Block::default()
                .title("Warning")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick),
        )
        .style(Style::default().fg(palette.foreground).bg(palette.background))
        .alignment(Alignment::Center);
    frame.render_widget(popup, popup_area);
}
