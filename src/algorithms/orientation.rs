use crate::Coordinate;

// Relative error bound of the floating-point determinant filter.
const DP_SAFE_EPSILON: f64 = 1e-15;

/// Which side of the directed line `p1 -> p2` a point lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    fn from_sign(sign: i32) -> Self {
        match sign {
            s if s > 0 => Orientation::CounterClockwise,
            s if s < 0 => Orientation::Clockwise,
            _ => Orientation::Collinear,
        }
    }

    /// The orientation seen from the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/**
 * Orientation of `q` relative to the directed line `p1 -> p2`.
 *
 * CounterClockwise means `q` is to the left of the line. The sign is exact
 * for all finite inputs: a fast floating-point evaluation is used when its
 * error bound proves the sign, and a double-double evaluation otherwise.
 * NaN ordinates give an unspecified result.
 */
pub fn orientation_index(p1: Coordinate, p2: Coordinate, q: Coordinate) -> Orientation {
    match orientation_index_filter(p1, p2, q) {
        Some(sign) => Orientation::from_sign(sign),
        None => Orientation::from_sign(orientation_index_dd(p1, p2, q)),
    }
}

fn sign_of(value: f64) -> i32 {
    if value > 0. {
        1
    } else if value < 0. {
        -1
    } else {
        0
    }
}

/// The sign of the determinant, if plain f64 arithmetic can decide it.
fn orientation_index_filter(pa: Coordinate, pb: Coordinate, pc: Coordinate) -> Option<i32> {
    let detleft = (pa.x - pc.x) * (pb.y - pc.y);
    let detright = (pa.y - pc.y) * (pb.x - pc.x);
    let det = detleft - detright;

    let detsum = if detleft > 0. {
        if detright <= 0. {
            return Some(sign_of(det));
        }
        detleft + detright
    } else if detleft < 0. {
        if detright >= 0. {
            return Some(sign_of(det));
        }
        -detleft - detright
    } else {
        return Some(sign_of(det));
    };

    let errbound = DP_SAFE_EPSILON * detsum;
    if det >= errbound || -det >= errbound {
        Some(sign_of(det))
    } else {
        None
    }
}

fn orientation_index_dd(p1: Coordinate, p2: Coordinate, q: Coordinate) -> i32 {
    let dx1 = DoubleDouble::diff(p2.x, p1.x);
    let dy1 = DoubleDouble::diff(p2.y, p1.y);
    let dx2 = DoubleDouble::diff(q.x, p2.x);
    let dy2 = DoubleDouble::diff(q.y, p2.y);
    dx1.mul(dy2).sub(dy1.mul(dx2)).signum()
}

/// An unevaluated sum `hi + lo` carrying about 106 bits of precision.
#[derive(Copy, Clone, Debug)]
struct DoubleDouble {
    hi: f64,
    lo: f64,
}

fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    (s, (a - (s - bb)) + (b - bb))
}

fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    (s, b - (s - a))
}

fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    (p, a.mul_add(b, -p))
}

impl DoubleDouble {
    /// `a - b` without rounding error.
    fn diff(a: f64, b: f64) -> Self {
        let (hi, lo) = two_sum(a, -b);
        DoubleDouble { hi, lo }
    }

    fn mul(self, other: Self) -> Self {
        let (p, e) = two_prod(self.hi, other.hi);
        let e = e + (self.hi * other.lo + self.lo * other.hi);
        let (hi, lo) = quick_two_sum(p, e);
        DoubleDouble { hi, lo }
    }

    fn sub(self, other: Self) -> Self {
        let (s, e) = two_sum(self.hi, -other.hi);
        let e = e + (self.lo - other.lo);
        let (hi, lo) = quick_two_sum(s, e);
        DoubleDouble { hi, lo }
    }

    fn signum(self) -> i32 {
        match sign_of(self.hi) {
            0 => sign_of(self.lo),
            s => s,
        }
    }
}
