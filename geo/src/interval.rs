use std::fmt;
use std::ops::Sub;

use crate::Scalar;

/// A closed numeric range with an explicit empty state.
///
/// Construction swaps reversed endpoints, and a range whose endpoints
/// compare equal under strict `<` is empty. Every comparison with an empty
/// interval answers `false`, including [`outside`](Interval::outside),
/// which is deliberately not the negation of [`inside`](Interval::inside)
/// in that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    a: T,
    b: T,
    is_empty: bool,
}

impl<T: Scalar> Default for Interval<T> {
    fn default() -> Self {
        Interval::empty()
    }
}

impl<T: Scalar> Interval<T> {
    pub fn empty() -> Self {
        Interval {
            a: T::zero(),
            b: T::zero(),
            is_empty: true,
        }
    }

    pub fn new(first: T, second: T) -> Self {
        let mut i = Interval::empty();
        i.set(first, second);
        i
    }

    pub fn set(&mut self, first: T, second: T) {
        let (a, b) = if second < first {
            (second, first)
        } else {
            (first, second)
        };

        self.a = a;
        self.b = b;
        // Any swapping based on < has already happened, so if a < b fails
        // here the endpoints must coincide and the interval is empty.
        self.is_empty = !(a < b);
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn begin(&self) -> T {
        self.a
    }

    pub fn end(&self) -> T {
        self.b
    }

    pub fn size(&self) -> T {
        self.b - self.a
    }

    /// Strict containment: endpoints are not inside.
    pub fn inside(&self, x: T) -> bool {
        if self.is_empty {
            return false;
        }
        self.a < x && x < self.b
    }

    pub fn outside(&self, x: T) -> bool {
        if self.is_empty {
            return false;
        }
        !(self.a < x && x < self.b)
    }

    /// True iff any point of one interval lies strictly inside the other,
    /// or a pair of endpoints coincide.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        if self.is_empty || other.is_empty {
            return false;
        }

        self.inside(other.a)
            || self.inside(other.b)
            || other.inside(self.a)
            || other.inside(self.b)
            || self.a == other.a
            || self.b == other.b
    }

    /// Return whether `other` is a subset of this interval.
    pub fn subset(&self, other: &Interval<T>) -> bool {
        if self.is_empty || other.is_empty {
            return false;
        }
        self.a <= other.a && other.b <= self.b
    }

    /// Whether the interval lies wholly below the scalar `x`.
    pub fn below(&self, x: T) -> bool {
        // Being on the endpoint is not being within the interval.
        !self.is_empty && self.b <= x
    }

    /// Whether the interval lies wholly above the scalar `x`.
    pub fn above(&self, x: T) -> bool {
        !self.is_empty && x <= self.a
    }
}

/// Return the interval covering the range shared by `i1` and `i2`, empty
/// when they are disjoint.
pub fn overlap<T: Scalar>(i1: &Interval<T>, i2: &Interval<T>) -> Interval<T> {
    if i1.is_empty() || i2.is_empty() {
        return Interval::empty();
    }

    let lo = i1.begin().max(i2.begin());
    let hi = i1.end().min(i2.end());

    if lo <= hi {
        Interval::new(lo, hi)
    } else {
        Interval::empty()
    }
}

impl<T: Scalar> Sub for Interval<T> {
    type Output = Interval<T>;

    /// Subtract `i2` from `i1`, keeping the left residue when `i1` starts
    /// first, the right residue when `i2` ends first, and nothing when `i2`
    /// covers `i1`.
    fn sub(self, i2: Interval<T>) -> Interval<T> {
        if self.is_empty() || i2.is_empty() {
            // An empty minuend stays empty and an empty subtrahend removes
            // nothing; returning self covers both.
            return self;
        }

        if self.begin() <= i2.begin() {
            Interval::new(self.begin(), self.end().min(i2.begin()))
        } else if i2.end() <= self.end() {
            Interval::new(self.begin().max(i2.end()), self.end())
        } else {
            Interval::empty()
        }
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty {
            write!(f, "[empty]")
        } else {
            write!(f, "[{},{}]", self.a, self.b)
        }
    }
}
