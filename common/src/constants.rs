/// Reference board width in cells
pub const BOARD_WIDTH: u8 = 16;

/// Reference board height in cells
pub const BOARD_HEIGHT: u8 = 8;

/// Maximum number of registry entries (food, super food and the rat)
pub const MAX_FOOD: usize = 8;

/// Ordinary food items kept on the board
pub const DEFAULT_INITIAL_FOOD: usize = 3;

/// Candidates tried by the placement oracle and by each rat step before giving up
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Time the super food must stay absent before the next spawn attempt, in milliseconds
pub const SUPER_FOOD_SPAWN_COOLDOWN_MS: u32 = 15_000;

/// Time an uneaten super food stays on the board, in milliseconds
pub const SUPER_FOOD_ACTIVE_MS: u32 = 5_000;

/// Interval between rat moves in milliseconds
pub const RAT_MOVE_INTERVAL_MS: u32 = 1_500;

/// Snake move interval before any speed bonus, in milliseconds
pub const BASE_MOVE_INTERVAL_MS: u32 = 600;

/// Ceiling of the speed bonus subtracted from the snake move interval
pub const SPEED_BONUS_CAP: u32 = 450;

/// Default polling interval of the control loop in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

pub const FOOD_POINTS: u16 = 1;
pub const SUPER_FOOD_POINTS: u16 = 5;
pub const RAT_POINTS: u16 = 3;
