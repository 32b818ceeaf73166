//! Simulation core for a single-player grid snake game: the food registry, food placement,
//! the roaming rat, the time-limited super food and the score.

pub mod clock;
mod collab;
mod config;
mod constants;
mod error;
mod placement;
mod position;
mod rat;
mod registry;
mod score;
mod session;
mod super_food;

pub mod util;

pub use clock::{Clock, ManualClock, elapsed_since};
pub use collab::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use placement::*;
pub use position::*;
pub use rat::*;
pub use registry::*;
pub use score::*;
pub use session::*;
pub use super_food::*;
pub use util::{PseudoRandom, RandomSource, ScriptedRandom};
