//! Bed codes.
//!
//! A [`BedNumber`] can only be built from input that passes the bed checks,
//! so the patient repository never sees an out-of-range code.

use crate::errors::{DomainError, DomainResult};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A validated bed code in `1..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BedNumber(u16);

impl BedNumber {
    /// Highest accepted bed code.
    pub const MAX: u16 = 9999;

    /// Parse a raw path segment.
    ///
    /// Checks run in a fixed order: not-a-number, not-positive, too-large,
    /// missing. Surrounding whitespace is ignored, so blank text fails the
    /// number check; only an absent segment is reported as missing.
    pub fn parse(raw: Option<&str>) -> DomainResult<Self> {
        let Some(raw) = raw else {
            return Err(DomainError::BedMissing);
        };

        let value = match raw.trim().parse::<i64>() {
            Ok(v) => v,
            Err(e) => {
                return Err(match e.kind() {
                    IntErrorKind::PosOverflow => DomainError::BedTooLarge,
                    IntErrorKind::NegOverflow => DomainError::BedNotPositive,
                    _ => DomainError::BedNotANumber,
                })
            }
        };

        Self::try_from(value)
    }

    /// The bed code as an unsigned integer.
    #[inline]
    pub fn get(self) -> u16 {
        self.0
    }

    /// The bed code widened for binding into a query.
    #[inline]
    pub fn as_i64(self) -> i64 {
        i64::from(self.0)
    }
}

impl TryFrom<i64> for BedNumber {
    type Error = DomainError;

    fn try_from(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::BedNotPositive);
        }
        if value > i64::from(Self::MAX) {
            return Err(DomainError::BedTooLarge);
        }
        Ok(Self(value as u16))
    }
}

impl FromStr for BedNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for BedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_beds() {
        assert_eq!(BedNumber::parse(Some("1")).unwrap().get(), 1);
        assert_eq!(BedNumber::parse(Some("9999")).unwrap().get(), 9999);
        assert_eq!(BedNumber::parse(Some(" 42 ")).unwrap().get(), 42);
        assert_eq!(BedNumber::parse(Some("+7")).unwrap().get(), 7);
        assert_eq!(BedNumber::parse(Some("007")).unwrap().get(), 7);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(BedNumber::parse(Some("abc")), Err(DomainError::BedNotANumber));
        assert_eq!(BedNumber::parse(Some("12a")), Err(DomainError::BedNotANumber));
        assert_eq!(BedNumber::parse(Some("1.5")), Err(DomainError::BedNotANumber));
        assert_eq!(BedNumber::parse(Some("-")), Err(DomainError::BedNotANumber));
    }

    #[test]
    fn test_not_positive() {
        assert_eq!(BedNumber::parse(Some("0")), Err(DomainError::BedNotPositive));
        assert_eq!(BedNumber::parse(Some("-3")), Err(DomainError::BedNotPositive));
        assert_eq!(
            BedNumber::parse(Some("-99999999999999999999")),
            Err(DomainError::BedNotPositive)
        );
    }

    #[test]
    fn test_too_large() {
        assert_eq!(BedNumber::parse(Some("10000")), Err(DomainError::BedTooLarge));
        assert_eq!(
            BedNumber::parse(Some("99999999999999999999")),
            Err(DomainError::BedTooLarge)
        );
    }

    #[test]
    fn test_missing() {
        assert_eq!(BedNumber::parse(None), Err(DomainError::BedMissing));
    }

    #[test]
    fn test_blank_text_is_not_a_number() {
        assert_eq!(BedNumber::parse(Some("")), Err(DomainError::BedNotANumber));
        assert_eq!(BedNumber::parse(Some("   ")), Err(DomainError::BedNotANumber));
        assert_eq!(BedNumber::parse(Some("\t")), Err(DomainError::BedNotANumber));
    }

    proptest! {
        #[test]
        fn prop_in_range_accepted(n in 1i64..=9999) {
            let bed = BedNumber::parse(Some(&n.to_string())).unwrap();
            prop_assert_eq!(bed.as_i64(), n);
        }

        #[test]
        fn prop_above_range_rejected(n in 10_000i64..i64::MAX) {
            prop_assert_eq!(
                BedNumber::parse(Some(&n.to_string())),
                Err(DomainError::BedTooLarge)
            );
        }

        #[test]
        fn prop_non_positive_rejected(n in i64::MIN..=0) {
            prop_assert_eq!(
                BedNumber::parse(Some(&n.to_string())),
                Err(DomainError::BedNotPositive)
            );
        }
    }
}
