/// A closed interval `[min, max]` on the real line.
///
/// An interval with a NaN bound is empty: it intersects nothing.
/// Expanding an empty interval by another interval yields the other
/// interval.
#[derive(Copy, Clone, Debug)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.min == other.min && self.max == other.max
        }
    }
}

impl Interval {
    /// The interval spanned by two values, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a.is_nan() || b.is_nan() {
            return Interval::new_empty();
        }
        Interval {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn new_empty() -> Self {
        Interval {
            min: f64::NAN,
            max: f64::NAN,
        }
    }

    pub fn of(intervals: &[Interval]) -> Self {
        intervals
            .iter()
            .fold(Interval::new_empty(), |mut s, i| {
                s.expand(*i);
                s
            })
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_nan() || self.max.is_nan()
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.
    }

    pub fn intersects(&self, min: f64, max: f64) -> bool {
        self.min <= max && self.max >= min
    }

    pub fn expand(&mut self, other: Interval) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = other;
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}
