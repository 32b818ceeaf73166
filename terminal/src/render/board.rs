use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::matrix::LedMatrix;
use super::types::{CharGrid, CharPattern, GridCell, RenderConfig, to_terminal_colour};
use common::PixelColour;

const LIT_CHAR: char = '█';
const DARK_CHAR: char = '·';

pub struct BoardRenderer {
    config: RenderConfig,
}

impl BoardRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Expand every matrix pixel into its character pattern.
    pub fn render(&self, matrix: &LedMatrix) -> CharGrid {
        let dims = self.config.chars_per_point;
        let mut grid = CharGrid::new(matrix.width() as usize, matrix.height() as usize, dims);

        for y in 0..matrix.height() {
            for x in 0..matrix.width() {
                let colour = matrix.pixel(x, y).unwrap_or(PixelColour::BLACK);
                let pattern = if colour == PixelColour::BLACK {
                    CharPattern::single(DARK_CHAR, colour, dims)
                } else {
                    CharPattern::single(LIT_CHAR, colour, dims)
                };
                grid.set_logical_point(x as usize, y as usize, &pattern);
            }
        }

        grid
    }

    pub fn render_lines(&self, matrix: &LedMatrix) -> Vec<Line<'static>> {
        self.render(matrix)
            .into_lines()
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
            .collect()
    }
}

fn cell_span(cell: GridCell) -> Span<'static> {
    let style = if cell.colour == PixelColour::BLACK {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(to_terminal_colour(cell.colour))
    };
    Span::styled(cell.ch.to_string(), style)
}
