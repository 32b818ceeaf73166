use common::{Board, PixelColour, RenderSink};

/// Frame buffer standing in for the LED matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedMatrix {
    width: u8,
    height: u8,
    pixels: Vec<PixelColour>,
}

impl LedMatrix {
    pub fn new(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            pixels: vec![PixelColour::BLACK; board.area()],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn clear_all(&mut self) {
        self.pixels.fill(PixelColour::BLACK);
    }

    pub fn pixel(&self, x: u8, y: u8) -> Option<PixelColour> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    fn index(&self, x: u8, y: u8) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl RenderSink for LedMatrix {
    fn set_pixel(&mut self, x: u8, y: u8, colour: PixelColour) {
        // off-board writes are dropped like on the hardware
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }
}
