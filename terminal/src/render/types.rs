use ratatui::style::Color;

use common::PixelColour;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub chars_per_point: CharDimensions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chars_per_point: CharDimensions::new(2, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self { horizontal, vertical }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub ch: char,
    pub colour: PixelColour,
}

impl GridCell {
    pub const BLANK: GridCell = GridCell {
        ch: ' ',
        colour: PixelColour::BLACK,
    };
}

pub struct CharGrid {
    grid: Vec<Vec<GridCell>>,
    logical_width: usize,
    logical_height: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(logical_width: usize, logical_height: usize, char_dims: CharDimensions) -> Self {
        let physical_width = logical_width * char_dims.horizontal;
        let physical_height = logical_height * char_dims.vertical;
        let grid = vec![vec![GridCell::BLANK; physical_width]; physical_height];
        Self {
            grid,
            logical_width,
            logical_height,
            char_dims,
        }
    }

    pub fn set_logical_point(&mut self, x: usize, y: usize, pattern: &CharPattern) {
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(cell) = self
                    .grid
                    .get_mut(start_y + dy)
                    .and_then(|grid_row| grid_row.get_mut(start_x + dx))
                {
                    *cell = GridCell {
                        ch,
                        colour: pattern.colour,
                    };
                }
            }
        }
    }

    pub fn into_lines(self) -> Vec<Vec<GridCell>> {
        self.grid
    }

    pub fn physical_width(&self) -> usize {
        self.logical_width * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.logical_height * self.char_dims.vertical
    }
}

#[derive(Clone, Debug)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
    pub colour: PixelColour,
}

impl CharPattern {
    pub fn single(ch: char, colour: PixelColour, dims: CharDimensions) -> Self {
        Self {
            chars: vec![vec![ch; dims.horizontal]; dims.vertical],
            colour,
        }
    }
}

/// LED colour byte to a terminal colour: red in the low nibble, green in the high nibble.
pub fn to_terminal_colour(colour: PixelColour) -> Color {
    let red = (colour.0 & 0x0F) * 17;
    let green = (colour.0 >> 4) * 17;
    Color::Rgb(red, green, 0)
}
