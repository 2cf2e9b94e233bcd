use thiserror::Error;

/// One generation of cells, left to right.
pub type Row = Vec<bool>;

/// A Wolfram rule number. Bit `v` of the rule is the next state for a
/// cell whose 3-cell neighborhood encodes to `v`:
///
/// ```text
/// 111 110 101 100 011 010 001 000   <- left*4 + self*2 + right
///  1   1   1   1   1   0   1   0    <- rule 250 = 0b11111010
/// ```
pub type Rule = u8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("{value} is not a valid neighborhood value (expected 0..=7)")]
    InvalidState { value: u8 },
}

#[inline]
fn bit(b: bool) -> u8 {
    b as u8
}

/// Left neighbor of `row[i]`. The left edge wraps around to the last
/// cell. Together with [`right_of`] this is deliberately asymmetric;
/// changing either edge changes the picture for every rule.
#[inline]
pub fn left_of(row: &[bool], i: usize) -> bool {
    if i == 0 {
        row[row.len() - 1]
    } else {
        row[i - 1]
    }
}

/// Right neighbor of `row[i]`. The right edge clamps to a dead cell,
/// it never wraps.
#[inline]
pub fn right_of(row: &[bool], i: usize) -> bool {
    if i == row.len() - 1 {
        false
    } else {
        row[i + 1]
    }
}

/// Encodes the 3-cell neighborhood of `row[i]` as a value in 0..=7.
#[inline]
pub fn neighborhood_value(row: &[bool], i: usize) -> u8 {
    bit(left_of(row, i)) << 2 | bit(row[i]) << 1 | bit(right_of(row, i))
}

/// Looks up bit `value` of `rule` (bit 0 is the least significant).
///
/// `value` is always in 0..=7 when it comes from [`neighborhood_value`];
/// anything else is a logic error and reports as `InvalidState`.
pub fn cell_state(value: u8, rule: Rule) -> Result<bool, RuleError> {
    if value > 7 {
        return Err(RuleError::InvalidState { value });
    }
    Ok((rule >> value) & 1 == 1)
}

/// Computes the next generation from `row`. Pure: the result is a fresh
/// row of the same length and the input is never touched.
pub fn next_row(row: &[bool], rule: Rule) -> Result<Row, RuleError> {
    let mut next = Vec::with_capacity(row.len());
    for i in 0..row.len() {
        next.push(cell_state(neighborhood_value(row, i), rule)?);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn left_edge_wraps_to_last_cell() {
        let row = vec![false, false, false, true];
        assert!(left_of(&row, 0));
        assert_eq!(neighborhood_value(&row, 0), 0b100);
    }

    #[test]
    fn right_edge_clamps_to_dead() {
        let row = vec![true, false, false, true];
        assert!(!right_of(&row, 3));
        // last cell: left = row[2] = 0, self = 1, right clamped to 0
        assert_eq!(neighborhood_value(&row, 3), 0b010);
    }

    #[test]
    fn interior_neighborhood() {
        let row = vec![true, false, true];
        assert_eq!(neighborhood_value(&row, 1), 0b101);
    }

    #[test]
    fn rule_250_bit_pattern() {
        for v in [1, 3, 4, 5, 6, 7] {
            assert_eq!(cell_state(v, 250), Ok(true), "value {v}");
        }
        for v in [0, 2] {
            assert_eq!(cell_state(v, 250), Ok(false), "value {v}");
        }
    }

    #[test]
    fn out_of_range_value_is_invalid_state() {
        assert_eq!(cell_state(8, 250), Err(RuleError::InvalidState { value: 8 }));
    }

    #[test]
    fn rule_250_from_center_seed() {
        let row = vec![false, false, true, false, false];
        let next = next_row(&row, 250).unwrap();
        assert_eq!(next, vec![false, true, false, true, false]);
    }

    proptest! {
        #[test]
        fn next_row_preserves_length(row in prop::collection::vec(any::<bool>(), 1..64), rule: u8) {
            prop_assert_eq!(next_row(&row, rule).unwrap().len(), row.len());
        }

        #[test]
        fn next_row_is_deterministic(row in prop::collection::vec(any::<bool>(), 1..64), rule: u8) {
            prop_assert_eq!(next_row(&row, rule), next_row(&row, rule));
        }

        #[test]
        fn last_cell_never_sees_a_right_neighbor(row in prop::collection::vec(any::<bool>(), 2..64)) {
            let last = row.len() - 1;
            prop_assert_eq!(neighborhood_value(&row, last) & 1, 0);
        }
    }
}
