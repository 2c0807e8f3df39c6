//! Relative integers for position and size deltas.
//!
//! A [`Relative`] stays relative only when combined with another relative
//! value: `Relative + Relative` is a `Relative`, while `Relative + i64` and
//! `i64 + Relative` are plain integers.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An integer tagged as a delta rather than an absolute value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Relative(i64);

impl Relative {
    pub const fn new(value: i64) -> Self {
        Relative(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Relative {
    fn from(value: i64) -> Self {
        Relative(value)
    }
}

impl From<Relative> for i64 {
    fn from(rel: Relative) -> Self {
        rel.0
    }
}

/// Signed form: `+5`, `-3`, `0`.
impl fmt::Display for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Debug for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Relative({})", self)
    }
}

impl Add for Relative {
    type Output = Relative;

    fn add(self, rhs: Relative) -> Relative {
        Relative(self.0 + rhs.0)
    }
}

impl Sub for Relative {
    type Output = Relative;

    fn sub(self, rhs: Relative) -> Relative {
        Relative(self.0 - rhs.0)
    }
}

impl Add<i64> for Relative {
    type Output = i64;

    fn add(self, rhs: i64) -> i64 {
        self.0 + rhs
    }
}

impl Sub<i64> for Relative {
    type Output = i64;

    fn sub(self, rhs: i64) -> i64 {
        self.0 - rhs
    }
}

impl Add<Relative> for i64 {
    type Output = i64;

    fn add(self, rhs: Relative) -> i64 {
        self + rhs.0
    }
}

impl Sub<Relative> for i64 {
    type Output = i64;

    fn sub(self, rhs: Relative) -> i64 {
        self - rhs.0
    }
}

impl Neg for Relative {
    type Output = Relative;

    fn neg(self) -> Relative {
        Relative(-self.0)
    }
}
