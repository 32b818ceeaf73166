//! Narrow interfaces to the collaborators that live outside the core: the snake and the
//! display.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Read-only view of the snake owned by the movement engine.
pub trait SnakeView {
    fn is_snake_at(&self, position: Position) -> bool;

    fn head_position(&self) -> Position;
}

/// LED-matrix style colour code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelColour(pub u8);

impl PixelColour {
    pub const BLACK: PixelColour = PixelColour(0x00);
    pub const FOOD: PixelColour = PixelColour(0x0F);
    pub const RAT: PixelColour = PixelColour(0x21);
    pub const SUPER_FOOD: PixelColour = PixelColour(0x13);
}

/// Fire-and-forget pixel writes.
pub trait RenderSink {
    fn set_pixel(&mut self, x: u8, y: u8, colour: PixelColour);

    fn draw(&mut self, position: Position, colour: PixelColour) {
        self.set_pixel(position.x(), position.y(), colour);
    }

    fn clear(&mut self, position: Position) {
        self.draw(position, PixelColour::BLACK);
    }
}

/// Sink for callers that do not render.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn set_pixel(&mut self, _x: u8, _y: u8, _colour: PixelColour) {}
}

/// Records every pixel write in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    pub pixels: Vec<(u8, u8, PixelColour)>,
}

impl RenderSink for RecordingSink {
    fn set_pixel(&mut self, x: u8, y: u8, colour: PixelColour) {
        self.pixels.push((x, y, colour));
    }
}
