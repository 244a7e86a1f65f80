// ============================================================================
// Base-1000 Decomposition
// Splits a number into groups from the most significant magnitude down
// ============================================================================

use crate::domain::Group;

/// Largest number that can be spelled out: fifteen nines, one less than 10^15.
pub const MAX_CONVERTIBLE: u64 = 999_999_999_999_999;

/// Highest magnitude index handled by the decomposition (10^12, trillions).
pub(crate) const MAX_INDEX: u8 = 12;

/// Compute 10^n at compile time
pub const fn pow10(n: u8) -> u64 {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Iterator over the base-1000 groups of a number, most significant first.
///
/// Walks the magnitude windows 12, 9, 6, 3, 0 and yields one [`Group`] per
/// nonzero window, carrying the residual modulus below that window. Zero
/// groups are skipped entirely; the number 0 itself yields a single
/// zero-valued group at index 0 so that "zero" can be spelled.
///
/// The walk stops as soon as the remaining value reaches zero, so at most
/// five groups are ever produced.
pub struct Decomposition {
    remaining: u64,
    index: Option<u8>,
    emit_zero: bool,
}

impl Decomposition {
    /// Start a decomposition of `number`.
    ///
    /// The caller is responsible for rejecting values above
    /// [`MAX_CONVERTIBLE`] beforehand; larger values would make the leading
    /// window overflow the 0-999 group range.
    pub fn new(number: u64) -> Self {
        Self {
            remaining: number,
            index: Some(MAX_INDEX),
            emit_zero: number == 0,
        }
    }
}

impl Iterator for Decomposition {
    type Item = Group;

    fn next(&mut self) -> Option<Group> {
        if self.emit_zero {
            self.emit_zero = false;
            self.index = None;
            return Some(Group::new(0, 0, 0));
        }

        while let Some(index) = self.index {
            let scale = pow10(index);
            let value = self.remaining / scale;
            self.index = index.checked_sub(3);

            // Window still too coarse for the remaining value; only possible
            // above the true leading group.
            if value > 999 {
                continue;
            }
            if value == 0 {
                continue;
            }

            let modulus = self.remaining % scale;
            self.remaining -= value * scale;
            if self.remaining == 0 {
                self.index = None;
            }
            return Some(Group::new(value as u16, modulus, index));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn groups_of(number: u64) -> Vec<Group> {
        Decomposition::new(number).collect()
    }

    #[test]
    fn test_zero_yields_single_zero_group() {
        let groups = groups_of(0);
        assert_eq!(groups, vec![Group::new(0, 0, 0)]);
    }

    #[test]
    fn test_single_group() {
        assert_eq!(groups_of(7), vec![Group::new(7, 0, 0)]);
        assert_eq!(groups_of(999), vec![Group::new(999, 0, 0)]);
    }

    #[test]
    fn test_two_groups_with_modulus() {
        // 4,525 -> group 4 at 10^3 with residual 525, then group 525
        assert_eq!(
            groups_of(4_525),
            vec![Group::new(4, 525, 3), Group::new(525, 0, 0)]
        );
    }

    #[test]
    fn test_zero_groups_are_skipped() {
        // 1,000,005 has empty thousand and unit-hundred windows in between
        assert_eq!(
            groups_of(1_000_005),
            vec![Group::new(1, 5, 6), Group::new(5, 0, 0)]
        );
        assert_eq!(groups_of(1_000), vec![Group::new(1, 0, 3)]);
    }

    #[test]
    fn test_full_width_number() {
        let groups = groups_of(1_153_625_999_567);
        assert_eq!(
            groups,
            vec![
                Group::new(1, 153_625_999_567, 12),
                Group::new(153, 625_999_567, 9),
                Group::new(625, 999_567, 6),
                Group::new(999, 567, 3),
                Group::new(567, 0, 0),
            ]
        );
    }

    #[test]
    fn test_max_convertible() {
        let groups = groups_of(MAX_CONVERTIBLE);
        assert_eq!(groups.len(), 5);
        assert!(groups.iter().all(|g| g.value == 999));
    }

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(3), 1_000);
        assert_eq!(pow10(12), 1_000_000_000_000);
    }

    quickcheck! {
        fn prop_groups_reconstruct_number(number: u64) -> bool {
            let number = number % (MAX_CONVERTIBLE + 1);
            let total: u64 = groups_of(number)
                .iter()
                .map(|g| g.value as u64 * pow10(g.index))
                .sum();
            total == number
        }

        fn prop_group_values_in_range(number: u64) -> bool {
            let number = number % (MAX_CONVERTIBLE + 1);
            groups_of(number).iter().all(|g| g.value < 1000)
        }

        fn prop_indices_strictly_decreasing(number: u64) -> bool {
            let number = number % (MAX_CONVERTIBLE + 1);
            let groups = groups_of(number);
            groups.windows(2).all(|w| w[0].index > w[1].index)
        }

        fn prop_modulus_consistent(number: u64) -> bool {
            let number = number % (MAX_CONVERTIBLE + 1);
            groups_of(number)
                .iter()
                .all(|g| g.modulus == number % pow10(g.index))
        }
    }
}
