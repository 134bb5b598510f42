//! Numbers and numerics.

use core::fmt;
use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
///
/// Classification predicates (`is_zero`, `is_nan`, `is_infinite`,
/// `is_finite`) and `sqrt` are available through the [`num_traits`]
/// supertraits. `is_zero` tests for exact zero, with no tolerance.
pub trait Float:
    nt::Float
    + nt::FromPrimitive
    + nt::ToPrimitive
    + nt::NumAssign
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + fmt::Debug
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const PI: Self;
    const FRAC_PI_2: Self;
    const NAN: Self;
    const INFINITY: Self;
    const NEG_INFINITY: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const PI: Self = std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const NAN: Self = Self::NAN;
            const INFINITY: Self = Self::INFINITY;
            const NEG_INFINITY: Self = Self::NEG_INFINITY;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn float_consts_match_primitive_values() {
        assert_eq!(<f32 as Float>::ZERO, 0.0);
        assert_eq!(<f32 as Float>::ONE, 1.0);
        assert_eq!(<f64 as Float>::TWO, 2.0);
        assert_eq!(<f64 as Float>::PI, std::f64::consts::PI);
        assert!(<f32 as Float>::NAN.is_nan());
        assert!(<f64 as Float>::INFINITY.is_infinite());
    }

    #[test]
    fn zero_classification_is_exact() {
        assert!(0.0_f32.is_zero());
        assert!((-0.0_f32).is_zero());
        assert!(!f32::EPSILON.is_zero());
        assert!(!1.0e-40_f64.is_zero());
    }
}
