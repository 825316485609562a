use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Widget};

use ca_planter_data::{Grid, ALIVE};

const ALIVE_GLYPH: &str = "█";
const DEAD_GLYPH: &str = " ";

/// Terminal view of a grid: one row per time step, active cells filled.
///
/// Grids wider than `max_columns` are shown by sampling every `stride`-th
/// column; rows are never dropped.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    title: String,
    stride: usize,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, title: impl Into<String>, max_columns: usize) -> Self {
        let max_columns = max_columns.max(1);
        Self {
            grid,
            title: title.into(),
            stride: grid.width().div_ceil(max_columns),
        }
    }

    pub fn columns(&self) -> usize {
        self.grid.width().div_ceil(self.stride)
    }

    /// Area needed to show the whole widget, borders included.
    pub fn area(&self) -> Rect {
        let width = (self.columns() + 2).max(self.title.chars().count() + 2);
        let height = self.grid.height() + 2;
        Rect::new(
            0,
            0,
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }

    /// Renders into an off-screen buffer and returns it as text lines.
    pub fn to_lines(self) -> Vec<String> {
        let area = self.area();
        let mut buf = Buffer::empty(area);
        self.render(area, &mut buf);
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        for (t, row) in self.grid.rows().enumerate().take(inner.height as usize) {
            let y = inner.y + t as u16;
            for (col, &cell) in row
                .iter()
                .step_by(self.stride)
                .enumerate()
                .take(inner.width as usize)
            {
                let x = inner.x + col as u16;
                if let Some(c) = buf.cell_mut((x, y)) {
                    c.set_symbol(if cell == ALIVE { ALIVE_GLYPH } else { DEAD_GLYPH });
                }
            }
        }
    }
}
