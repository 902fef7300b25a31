use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Amount of currency units owed for overdue rentals. Never negative.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    Fromln,
    AsRefln,
)]
#[serde(try_from = "i64")]
pub struct Penalty(i64);

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct NegativePenalty(i64);

impl Display for NegativePenalty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "penalty must not be negative, got {}", self.0)
    }
}

impl TryFrom<i64> for Penalty {
    type Error = NegativePenalty;
    fn try_from(amount: i64) -> Result<Self, Self::Error> {
        if amount < 0 {
            Err(NegativePenalty(amount))
        } else {
            Ok(Self(amount))
        }
    }
}

impl Penalty {
    pub const ZERO: Penalty = Penalty(0);

    pub fn new(amount: impl Into<i64>) -> Self {
        Self(amount.into().max(0))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// `self - other`, floored at zero.
    pub fn saturating_sub(self, other: Penalty) -> Penalty {
        Penalty((self.0 - other.0).max(0))
    }
}

impl Add for Penalty {
    type Output = Penalty;
    fn add(self, rhs: Self) -> Self::Output {
        Penalty(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Penalty {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Penalty {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Penalty::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Penalty> for Penalty {
    fn sum<I: Iterator<Item = &'a Penalty>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod test {
    use crate::entity::Penalty;

    #[test]
    fn negative_amounts_are_rejected_on_load() {
        assert!(serde_json::from_str::<Penalty>("-40").is_err());
        assert!(matches!(serde_json::from_str::<Penalty>("40"), Ok(p) if p == Penalty::new(40)));
        assert_eq!(Penalty::new(-3), Penalty::ZERO);
    }
}
