//! Balanced ternary digit primitive.
//!
//! Single trit: {N, Z, P} = {-1, 0, +1}. This is the atomic unit both
//! operand roles (activation and weight) are built from; the per-digit
//! multiply feeding the golden accumulation is `Trit::mul`.

use std::fmt;

/// Single balanced ternary digit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Trit {
    /// Negative: -1
    N = -1,
    /// Zero: 0
    #[default]
    Z = 0,
    /// Positive: +1
    P = 1,
}

/// An ordered sequence of trits of some fixed width.
pub type TritVec = Vec<Trit>;

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::Z => write!(f, "Z"),
            Trit::P => write!(f, "P"),
        }
    }
}

// The wire format is numeric text, so Display renders -1/0/1 rather than
// the -/0/+ glyph form.
impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i8())
    }
}

impl Trit {
    /// All possible trit values in order
    pub const ALL: [Trit; 3] = [Trit::N, Trit::Z, Trit::P];

    /// Convert from i8, returning None if out of range
    #[inline]
    pub const fn from_i8_exact(v: i8) -> Option<Self> {
        match v {
            -1 => Some(Trit::N),
            0 => Some(Trit::Z),
            1 => Some(Trit::P),
            _ => None,
        }
    }

    /// Convert to i8
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    /// Negate: -N = P, -Z = Z, -P = N
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn neg(self) -> Trit {
        match self {
            Trit::N => Trit::P,
            Trit::Z => Trit::Z,
            Trit::P => Trit::N,
        }
    }

    /// Is zero?
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::Z)
    }

    /// Trit multiplication
    ///
    /// Truth table:
    /// ```text
    ///   × | N  Z  P
    /// ----+--------
    ///   N | P  Z  N
    ///   Z | Z  Z  Z
    ///   P | N  Z  P
    /// ```
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub const fn mul(self, other: Trit) -> Trit {
        match (self, other) {
            (Trit::Z, _) | (_, Trit::Z) => Trit::Z,
            (Trit::P, Trit::P) | (Trit::N, Trit::N) => Trit::P,
            (Trit::P, Trit::N) | (Trit::N, Trit::P) => Trit::N,
        }
    }
}

impl std::ops::Neg for Trit {
    type Output = Trit;
    #[inline]
    fn neg(self) -> Trit {
        Trit::neg(self)
    }
}

impl std::ops::Mul for Trit {
    type Output = Trit;
    #[inline]
    fn mul(self, rhs: Trit) -> Trit {
        Trit::mul(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trit_multiplication_truth_table() {
        assert_eq!(Trit::N * Trit::N, Trit::P, "N × N = P");
        assert_eq!(Trit::N * Trit::Z, Trit::Z, "N × Z = Z");
        assert_eq!(Trit::N * Trit::P, Trit::N, "N × P = N");
        assert_eq!(Trit::Z * Trit::N, Trit::Z, "Z × N = Z");
        assert_eq!(Trit::Z * Trit::Z, Trit::Z, "Z × Z = Z");
        assert_eq!(Trit::Z * Trit::P, Trit::Z, "Z × P = Z");
        assert_eq!(Trit::P * Trit::N, Trit::N, "P × N = N");
        assert_eq!(Trit::P * Trit::Z, Trit::Z, "P × Z = Z");
        assert_eq!(Trit::P * Trit::P, Trit::P, "P × P = P");
    }

    #[test]
    fn test_trit_multiplication_matches_integer_product() {
        for &a in &Trit::ALL {
            for &b in &Trit::ALL {
                assert_eq!((a * b).to_i8(), a.to_i8() * b.to_i8());
            }
        }
    }

    #[test]
    fn test_trit_negation() {
        assert_eq!(-Trit::N, Trit::P);
        assert_eq!(-Trit::Z, Trit::Z);
        assert_eq!(-Trit::P, Trit::N);

        // Double negation is identity
        for &t in &Trit::ALL {
            assert_eq!(-(-t), t, "Double negation of {:?}", t);
        }
    }

    #[test]
    fn test_trit_i8_roundtrip() {
        for v in [-1i8, 0, 1] {
            let t = Trit::from_i8_exact(v).expect("in range");
            assert_eq!(t.to_i8(), v);
        }
        assert_eq!(Trit::from_i8_exact(2), None);
        assert_eq!(Trit::from_i8_exact(-2), None);
    }

    #[test]
    fn test_trit_display_is_numeric() {
        assert_eq!(Trit::N.to_string(), "-1");
        assert_eq!(Trit::Z.to_string(), "0");
        assert_eq!(Trit::P.to_string(), "1");
    }
}
