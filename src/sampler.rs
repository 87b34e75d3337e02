use serde::{Deserialize, Serialize};

use crate::types::{BOARD_SIZE, CHUNK_HEX_WIDTH};

/// Dense, order-preserving list of the positions not yet drawn.
/// Removal is by index into the list, so order matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionPool {
    remaining: Vec<u8>,
}

impl PositionPool {
    #[inline]
    pub fn new(board_size: u8) -> Self {
        Self {
            remaining: (0..board_size).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.remaining
    }

    /// Remove and return the entry at `idx`, shifting later entries left.
    #[inline]
    pub fn take(&mut self, idx: usize) -> u8 {
        self.remaining.remove(idx)
    }
}

impl Default for PositionPool {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

/// One draw, as a verifier replays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStep {
    pub chunk: String,     // 8 hex chars consumed
    pub value: u32,        // chunk parsed as base-16
    pub pool_len: usize,   // pool size before the draw (the modulus)
    pub pool_index: usize, // value % pool_len
    pub position: u8,      // board position removed from the pool
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleOutcome {
    /// Positions in draw order. This is the canonical sequence.
    pub drawn: Vec<u8>,
    pub steps: Vec<DrawStep>,
    /// True when the hex string ran out before `count` draws.
    pub exhausted: bool,
}

impl SampleOutcome {
    /// Placement in display form (ascending).
    pub fn sorted(&self) -> Vec<u8> {
        let mut out = self.drawn.clone();
        out.sort_unstable();
        out
    }
}

#[inline]
fn parse_chunk(chunk: &str) -> Option<u32> {
    if !chunk.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(chunk, 16).ok()
}

/// Draw up to `count` distinct positions from `0..board_size` using only the
/// hex digest string: each draw consumes 8 hex chars, takes `value % pool.len()`
/// as an index into the shrinking pool, and removes that entry.
///
/// Stops early (with `exhausted`) when fewer than 8 hex chars remain, or
/// when the pool is empty. A count of 0 draws nothing.
pub fn sample_positions(digest_hex: &str, count: usize, board_size: u8) -> SampleOutcome {
    let mut pool = PositionPool::new(board_size);
    let mut out = SampleOutcome {
        drawn: Vec::with_capacity(count.min(usize::from(board_size))),
        steps: Vec::with_capacity(count.min(usize::from(board_size))),
        exhausted: false,
    };
    let mut cursor = 0usize;

    while out.drawn.len() < count {
        if pool.is_empty() {
            out.exhausted = true;
            break;
        }
        let Some(chunk) = digest_hex.get(cursor..cursor + CHUNK_HEX_WIDTH) else {
            out.exhausted = true;
            break;
        };
        // Non-hex material ends the draw the same way short material does.
        let Some(value) = parse_chunk(chunk) else {
            out.exhausted = true;
            break;
        };
        let pool_len = pool.len();
        let pool_index = (value as usize) % pool_len;
        let position = pool.take(pool_index);

        out.drawn.push(position);
        out.steps.push(DrawStep {
            chunk: chunk.to_string(),
            value,
            pool_len,
            pool_index,
            position,
        });
        cursor += CHUNK_HEX_WIDTH;
    }

    out
}

/// [`sample_positions`] on the standard 5x5 board.
#[inline]
pub fn sample_mines(digest_hex: &str, count: usize) -> SampleOutcome {
    sample_positions(digest_hex, count, BOARD_SIZE)
}
