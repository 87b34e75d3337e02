use crate::types::BOARD_SIZE;

/// Largest mine count a round may ask for; one cell always stays safe.
pub const MAX_MINES: u8 = BOARD_SIZE - 1;

/// Mine count used when none is given.
pub const DEFAULT_MINES: u8 = 1;

/// Range policy applied by callers before deriving: any request maps into
/// `0..=MAX_MINES`. The core itself never clamps.
#[inline]
pub fn clamp_mine_count(requested: u32) -> u8 {
    requested.min(u32::from(MAX_MINES)) as u8
}
