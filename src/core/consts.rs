pub const NUM_SHUFFLE_STEPS: usize = 40;

pub const SUPPORTED_BOARD_SIZES: [usize; 3] = [3, 4, 5];

pub const BLANK_KEY_CHAR: char = '.';

/// Delay between frames while a solve path replays.
pub const SOLVE_FRAME_DELAY_MS: u64 = 500;
