// ============================================================================
// Group Domain Model
// A 0-999 chunk of the number aligned to a power-of-1000 boundary
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns `true` if the value is between 0 and 9.
pub const fn is_unit(value: u16) -> bool {
    value < 10
}

/// Returns `true` if the value is between 10 and 99.
pub const fn is_ten(value: u16) -> bool {
    value >= 10 && value < 100
}

/// Returns `true` if the value is between 100 and 999.
pub const fn is_hundred(value: u16) -> bool {
    value >= 100 && value < 1000
}

/// Digit-width classification of a group, used to pick the lexical rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupClass {
    /// Single digit (0-9)
    Unit,
    /// Two digits (10-99)
    Ten,
    /// Three digits (100-999)
    Hundred,
}

/// A transient base-1000 group produced during decomposition.
///
/// Groups are produced most-significant-first and consumed within a single
/// conversion pass; they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    /// Group value, always in [0, 999]
    pub value: u16,

    /// Remainder of the number being converted after removing this group
    /// and everything above it (`remaining % 10^index`)
    pub modulus: u64,

    /// Magnitude index: the power-of-ten position of the group's least
    /// significant digit. One of 0, 3, 6, 9, 12.
    pub index: u8,
}

impl Group {
    pub fn new(value: u16, modulus: u64, index: u8) -> Self {
        debug_assert!(value < 1000);
        debug_assert!(index % 3 == 0 && index <= 12);
        Self { value, modulus, index }
    }

    /// Classify the group by digit width.
    pub fn class(&self) -> GroupClass {
        if is_unit(self.value) {
            GroupClass::Unit
        } else if is_ten(self.value) {
            GroupClass::Ten
        } else {
            GroupClass::Hundred
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_predicates() {
        assert!(is_unit(0));
        assert!(is_unit(9));
        assert!(!is_unit(10));

        assert!(is_ten(10));
        assert!(is_ten(99));
        assert!(!is_ten(9));
        assert!(!is_ten(100));

        assert!(is_hundred(100));
        assert!(is_hundred(999));
        assert!(!is_hundred(99));
    }

    #[test]
    fn test_group_class() {
        assert_eq!(Group::new(5, 0, 0).class(), GroupClass::Unit);
        assert_eq!(Group::new(34, 899, 3).class(), GroupClass::Ten);
        assert_eq!(Group::new(899, 0, 0).class(), GroupClass::Hundred);
    }
}
