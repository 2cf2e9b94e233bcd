use std::collections::VecDeque;

use crate::rule::{self, Row, Rule, RuleError};

/// A sliding window over the automaton's row sequence: index 0 is the
/// oldest generation still on screen, the back is the newest. Always
/// exactly `height` rows of exactly `width` cells.
pub struct Board {
    width: usize,
    height: usize,
    rows: VecDeque<Row>,
}

/// The initial condition: every cell off except the one in the middle.
pub fn seed(width: usize) -> Row {
    let mut row = vec![false; width];
    row[width / 2] = true;
    row
}

impl Board {
    /// Seeds the top row and fills the rest of the window in one pass,
    /// each row computed from the one above it. Runs once, before any
    /// drawing.
    pub fn generate(width: usize, height: usize, rule: Rule) -> Result<Self, RuleError> {
        let mut rows = VecDeque::with_capacity(height);
        rows.push_back(seed(width));
        for _ in 1..height {
            let next = rule::next_row(rows.back().expect("seeded above"), rule)?;
            rows.push_back(next);
        }
        Ok(Board { width, height, rows })
    }

    /// One tick: drop the oldest row, append the next generation. The
    /// window keeps its height and the dropped row is gone for good.
    pub fn advance(&mut self, rule: Rule) -> Result<(), RuleError> {
        let newest = self.rows.back().expect("board is never empty");
        let next = rule::next_row(newest, rule)?;
        self.rows.pop_front();
        self.rows.push_back(next);
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_single_live_cell_at_center() {
        let row = seed(9);
        assert_eq!(row.iter().filter(|c| **c).count(), 1);
        assert!(row[4]);
    }

    #[test]
    fn seed_even_width_rounds_down() {
        let row = seed(8);
        assert!(row[4]);
        assert_eq!(row.len(), 8);
    }

    #[test]
    fn generate_fills_every_row_from_the_previous_one() {
        let board = Board::generate(5, 4, 250).unwrap();
        let rows: Vec<&Row> = board.rows().collect();
        assert_eq!(rows.len(), 4);
        for pair in rows.windows(2) {
            assert_eq!(*pair[1], rule::next_row(pair[0], 250).unwrap());
        }
    }

    #[test]
    fn advance_keeps_height_and_shifts_up() {
        let mut board = Board::generate(7, 5, 110).unwrap();
        let before: Vec<Row> = board.rows().cloned().collect();
        board.advance(110).unwrap();
        let after: Vec<Row> = board.rows().cloned().collect();

        assert_eq!(after.len(), 5);
        assert_eq!(&after[..4], &before[1..]);
        assert_eq!(after[4], rule::next_row(&before[4], 110).unwrap());
    }

    #[test]
    fn rows_keep_their_width_across_ticks() {
        let mut board = Board::generate(11, 6, 30).unwrap();
        for _ in 0..20 {
            board.advance(30).unwrap();
        }
        assert!(board.rows().all(|r| r.len() == 11));
    }
}
