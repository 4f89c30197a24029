use core::cmp::Ordering;
use core::fmt::Display;

use bytemuck::{Pod, Zeroable};

/// Truncation mask leaving the sign, the 8 exponent bits and the upper 9
/// mantissa bits of an IEEE f32. The lower 14 mantissa bits of an [`xf32`]
/// are always zero.
pub const XF32_MASK: u32 = 0xffff_c000;

/// Bit offset of the lowest mantissa bit kept by [`XF32_MASK`], read back
/// during rounding to break ties to even.
pub const XF32_ROUND_BIT: u32 = 14;

/// Increment added to the raw bits when rounding to nearest even.
pub const XF32_ROUND_INC: u32 = 0x1fff;

/// Canonical quiet NaN bit pattern produced for any NaN input.
pub const XF32_QUIET_NAN: u32 = 0xffc1_0000;

/// A 32-bit storage float with 8 exponent bits and a 9-bit mantissa.
///
/// Matrix execution units compute f32 products at this precision. The value
/// occupies a full f32 slot; conversion back to [`f32`] is lossless since the
/// discarded mantissa bits are zero.
#[allow(non_camel_case_types)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, Zeroable, Pod, Debug)]
pub struct xf32(u32);

impl xf32 {
    /// Constructs an [`xf32`] value from the raw bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> xf32 {
        xf32(bits)
    }

    /// Converts an [`xf32`] into the underlying bit representation.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Constructs an [`xf32`] value from a 32-bit floating point value.
    ///
    /// This operation is lossy. The value is rounded to the nearest
    /// representable [`xf32`], ties to even; values too large to fit round to
    /// ±∞. Every NaN input collapses to [`XF32_QUIET_NAN`]. This mirrors the
    /// operand canonicalization the matrix path performs in hardware, so host
    /// and device conversions agree bit for bit.
    #[inline]
    #[must_use]
    pub fn from_f32(value: f32) -> xf32 {
        if value.is_nan() {
            return xf32(XF32_QUIET_NAN);
        }
        let bits = value.to_bits();
        let rounded = bits.wrapping_add(XF32_ROUND_INC + ((bits >> XF32_ROUND_BIT) & 1));
        xf32(rounded & XF32_MASK)
    }

    /// Converts an [`xf32`] value into an [`f32`] value losslessly.
    #[inline]
    #[must_use]
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Whether the value is a NaN of either kind.
    #[inline]
    #[must_use]
    pub const fn is_nan(self) -> bool {
        (self.0 & 0x7f80_0000) == 0x7f80_0000 && (self.0 & 0x007f_c000) != 0
    }

    /// Whether the value is positive or negative infinity.
    #[inline]
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        (self.0 & 0x7f80_0000) == 0x7f80_0000 && (self.0 & 0x007f_c000) == 0
    }

    /// Whether the value is positive or negative zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        (self.0 & 0x7fff_c000) == 0
    }
}

impl PartialEq for xf32 {
    fn eq(&self, other: &Self) -> bool {
        self.to_f32() == other.to_f32()
    }
}

impl PartialOrd for xf32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

impl Display for xf32 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

mod numeric {
    use num_traits::{NumCast, ToPrimitive};

    use super::*;
    use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

    impl Neg for xf32 {
        type Output = Self;

        fn neg(self) -> Self::Output {
            Self::from_bits(self.to_bits() ^ 0x8000_0000)
        }
    }

    impl Add for xf32 {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self::from_f32(self.to_f32() + rhs.to_f32())
        }
    }

    impl AddAssign for xf32 {
        fn add_assign(&mut self, rhs: Self) {
            *self = *self + rhs;
        }
    }

    impl Sub for xf32 {
        type Output = Self;

        fn sub(self, rhs: Self) -> Self::Output {
            Self::from_f32(self.to_f32() - rhs.to_f32())
        }
    }

    impl SubAssign for xf32 {
        fn sub_assign(&mut self, rhs: Self) {
            *self = *self - rhs;
        }
    }

    impl Mul for xf32 {
        type Output = Self;

        fn mul(self, rhs: Self) -> Self::Output {
            Self::from_f32(self.to_f32() * rhs.to_f32())
        }
    }

    impl MulAssign for xf32 {
        fn mul_assign(&mut self, rhs: Self) {
            *self = *self * rhs;
        }
    }

    impl Div for xf32 {
        type Output = Self;

        fn div(self, rhs: Self) -> Self::Output {
            Self::from_f32(self.to_f32() / rhs.to_f32())
        }
    }

    impl DivAssign for xf32 {
        fn div_assign(&mut self, rhs: Self) {
            *self = *self / rhs;
        }
    }

    impl ToPrimitive for xf32 {
        fn to_i64(&self) -> Option<i64> {
            Some(xf32::to_f32(*self) as i64)
        }

        fn to_u64(&self) -> Option<u64> {
            Some(xf32::to_f32(*self) as u64)
        }

        fn to_f32(&self) -> Option<f32> {
            Some(xf32::to_f32(*self))
        }

        fn to_f64(&self) -> Option<f64> {
            Some(xf32::to_f32(*self) as f64)
        }
    }

    impl NumCast for xf32 {
        fn from<T: num_traits::ToPrimitive>(n: T) -> Option<Self> {
            Some(Self::from_f32(n.to_f32()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_values_pass_through() {
        assert_eq!(xf32::from_f32(1.0).to_bits(), 0x3f80_0000);
        assert_eq!(xf32::from_f32(-2.5).to_bits(), 0xc020_0000);
        assert_eq!(xf32::from_f32(1.5).to_f32(), 1.5);
    }

    #[test]
    fn rounds_to_nearest() {
        // Just above the halfway point rounds up.
        assert_eq!(xf32::from_f32(f32::from_bits(0x3f80_2001)).to_bits(), 0x3f80_4000);
        // Below the halfway point rounds down.
        assert_eq!(xf32::from_f32(core::f32::consts::PI).to_f32(), 3.140625);
        assert_eq!(xf32::from_f32(f32::from_bits(0x3f7f_ffff)).to_f32(), 1.0);
    }

    #[test]
    fn ties_round_to_even() {
        // Kept mantissa even: tie rounds down.
        assert_eq!(xf32::from_f32(f32::from_bits(0x3f80_2000)).to_bits(), 0x3f80_0000);
        // Kept mantissa odd: tie rounds up.
        assert_eq!(xf32::from_f32(f32::from_bits(0x3f80_6000)).to_bits(), 0x3f80_8000);
    }

    #[test]
    fn nan_collapses_to_canonical_quiet_nan() {
        assert_eq!(xf32::from_f32(f32::NAN).to_bits(), XF32_QUIET_NAN);
        // Signaling NaN payloads collapse too.
        let snan = f32::from_bits(0x7f80_0001);
        assert_eq!(xf32::from_f32(snan).to_bits(), XF32_QUIET_NAN);
        assert!(xf32::from_bits(XF32_QUIET_NAN).is_nan());
    }

    #[test]
    fn infinities_survive() {
        assert_eq!(xf32::from_f32(f32::INFINITY).to_bits(), 0x7f80_0000);
        assert_eq!(xf32::from_f32(f32::NEG_INFINITY).to_bits(), 0xff80_0000);
        assert!(xf32::from_f32(f32::INFINITY).is_infinite());
        // Saturating overflow lands on infinity.
        assert_eq!(xf32::from_f32(f32::MAX).to_bits(), 0x7f80_0000);
    }

    #[test]
    fn zero_classification_ignores_sign() {
        assert!(xf32::from_f32(0.0).is_zero());
        assert!(xf32::from_f32(-0.0).is_zero());
        assert_eq!(xf32::from_f32(0.0), xf32::from_f32(-0.0));
    }

    #[test]
    fn comparisons_follow_float_semantics() {
        let nan = xf32::from_bits(XF32_QUIET_NAN);
        assert_ne!(nan, nan);
        assert!(xf32::from_f32(1.0) < xf32::from_f32(2.0));
        assert_eq!(-xf32::from_f32(1.0), xf32::from_f32(-1.0));
    }

    #[test]
    fn arithmetic_rounds_the_result() {
        let a = xf32::from_f32(core::f32::consts::PI);
        let b = xf32::from_f32(1.0);
        assert_eq!(a + b, xf32::from_f32(3.140625 + 1.0));
        assert_eq!((a + b).to_bits() & !XF32_MASK, 0);
    }
}
