//! Scoring module
//!
//! A flat rate per cleared row. Clearing several rows at once earns no bonus.

use crate::types::POINTS_PER_ROW;

/// Points for clearing `rows` rows in one tick
pub fn line_clear_score(rows: usize) -> u32 {
    (rows as u32).saturating_mul(POINTS_PER_ROW)
}
