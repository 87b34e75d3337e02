use std::fmt::Write as _;

use crate::error::DeriveError;
use crate::types::{BOARD_SIDE, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineBoard {
    // Cells 0..25 laid out row-major (r*5 + c); true = mine
    cells: [bool; BOARD_SIZE as usize],
}

impl Default for MineBoard {
    fn default() -> Self {
        Self {
            cells: [false; BOARD_SIZE as usize],
        }
    }
}

impl MineBoard {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every position in `placement`. Rejects indices off the board.
    pub fn from_placement(placement: &[u8]) -> Result<Self, DeriveError> {
        let mut board = Self::new();
        for &idx in placement {
            if idx >= BOARD_SIZE {
                return Err(DeriveError::InvalidPosition(idx));
            }
            board.cells[usize::from(idx)] = true;
        }
        Ok(board)
    }

    #[inline]
    pub fn is_mine(&self, idx: u8) -> bool {
        self.cells.get(usize::from(idx)).copied().unwrap_or(false)
    }

    #[inline]
    pub fn mine_count(&self) -> u8 {
        self.cells.iter().filter(|m| **m).count() as u8
    }

    /// Mine positions ascending.
    pub fn mines(&self) -> Vec<u8> {
        (0..BOARD_SIZE).filter(|&i| self.is_mine(i)).collect()
    }

    /// Five rows of five cells; a mine prints as `*`, other cells by index.
    pub fn render_grid(&self) -> String {
        let mut out = String::new();
        for r in 0..BOARD_SIDE {
            for c in 0..BOARD_SIDE {
                let idx = r * BOARD_SIDE + c;
                if c > 0 {
                    out.push(' ');
                }
                if self.is_mine(idx) {
                    out.push_str("  *");
                } else {
                    let _ = write!(out, "{idx:>3}");
                }
            }
            out.push('\n');
        }
        out
    }
}
