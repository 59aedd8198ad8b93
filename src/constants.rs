pub const ROWS: usize = 10;
pub const COLS: usize = 10;

// Shortest run of equal tiles that gets removed
pub const MIN_RUN: usize = 3;

// Pacing for the terminal adapter (in milliseconds)
pub const STEP_DELAY: u64 = 350; // Pause between cascade steps
pub const FLASH_TIME: u64 = 300; // How long a cleared/rejected cell stays highlighted
pub const FRAME_POLL: u64 = 16;  // Input poll interval per frame
