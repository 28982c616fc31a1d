//! Injectable template-selection strategy.
//!
//! Production picks uniformly at random from template pools — phrasing
//! variety is intentional, reproducibility across calls is not. Tests
//! inject a deterministic picker instead of seeding a generator.

use rand::Rng;

/// Strategy for choosing one entry out of a pool.
pub trait Picker {
    /// Index into a pool of `len` entries. `len` is always >= 1.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Pick one entry from `pool`. Pools are static and never empty; a
/// picker that returns an out-of-range index is clamped to the last
/// entry.
pub fn pick<'a, T>(picker: &mut dyn Picker, pool: &'a [T]) -> &'a T {
    debug_assert!(!pool.is_empty());
    let idx = picker.pick_index(pool.len()).min(pool.len().saturating_sub(1));
    &pool[idx]
}

/// Uniform, unseeded randomness — the production strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the first entry. Deterministic stub for tests and
/// callers that need reproducible phrasing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_picker_stays_in_bounds() {
        let mut p = ThreadRngPicker;
        for _ in 0..100 {
            assert!(p.pick_index(3) < 3);
        }
    }

    #[test]
    fn out_of_range_picker_index_clamps_to_last_entry() {
        struct RogueIndexPicker;
        impl Picker for RogueIndexPicker {
            fn pick_index(&mut self, _len: usize) -> usize {
                usize::MAX
            }
        }

        let mut p = RogueIndexPicker;
        let pool = ["a", "b", "c"];
        assert_eq!(*pick(&mut p, &pool), "c");
        let single = ["only"];
        assert_eq!(*pick(&mut p, &single), "only");
    }

    #[test]
    fn first_picker_is_deterministic() {
        let mut p = FirstPicker;
        let pool = ["a", "b", "c"];
        assert_eq!(*pick(&mut p, &pool), "a");
        assert_eq!(*pick(&mut p, &pool), "a");
    }
}
