//! Selection cursor arithmetic.
//!
//! Every menu level wraps around: moving past either end lands on the
//! opposite end. There is no clamping.

/// Move selection cursor one item back, wrapping to the last item.
pub fn wrap_prev(selected: usize, item_count: usize) -> usize {
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item forward, wrapping to the first item.
pub fn wrap_next(selected: usize, item_count: usize) -> usize {
    (selected + 1) % item_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(wrap_prev(0, 6), 5);
        assert_eq!(wrap_prev(3, 6), 2);
        assert_eq!(wrap_next(5, 6), 0);
        assert_eq!(wrap_next(2, 5), 3);
    }

    #[test]
    fn single_item_stays_put() {
        assert_eq!(wrap_prev(0, 1), 0);
        assert_eq!(wrap_next(0, 1), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for count in 1..=8 {
            for start in 0..count {
                let mut i = start;
                for _ in 0..count {
                    i = wrap_next(i, count);
                }
                assert_eq!(i, start);
                for _ in 0..count {
                    i = wrap_prev(i, count);
                }
                assert_eq!(i, start);
            }
        }
    }
}
