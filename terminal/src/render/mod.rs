pub mod board;
pub mod matrix;
pub mod types;
