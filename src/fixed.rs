//! Signed fixed-point conversions.
//!
//! VITA-49 encodes most physical quantities as two's complement integers
//! with an implied binary point `radix` bits from the right. A raw value `x`
//! stored with radix `r` stands for `x / 2^r`.
//!
//! Encoding rounds to the nearest representable value, with ties away from
//! zero. Values out of the range of the integer type are not saturated: the
//! rounded value is wrapped to the width of the type by keeping its low bits.
//! Non-finite values encode as zero.

mod sealed {
    pub trait Sealed {}
}

/// Integer types that can hold a fixed-point value.
///
/// This is implemented for [`i16`], [`i32`] and [`i64`].
pub trait FixedPoint: sealed::Sealed + Copy {
    /// Converts an already rounded value, keeping the low bits.
    fn wrapping_from_f64(value: f64) -> Self;
    /// Converts the raw integer to floating point.
    fn to_f64(self) -> f64;
}

macro_rules! impl_fixed_point {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl FixedPoint for $t {
                fn wrapping_from_f64(value: f64) -> $t {
                    // reduce into [-2^(W-1), 2^(W-1)) so that the cast is exact
                    let modulus = libm::ldexp(1.0, <$t>::BITS as i32);
                    let half = modulus / 2.0;
                    let mut value = libm::fmod(value, modulus);
                    if value >= half {
                        value -= modulus;
                    } else if value < -half {
                        value += modulus;
                    }
                    value as $t
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_fixed_point!(i16, i32, i64);

fn scale(radix: u8) -> f64 {
    libm::ldexp(1.0, i32::from(radix))
}

/// Encodes `value` as a fixed-point integer with `radix` fractional bits.
///
/// # Examples
///
/// ```
/// use vita49::fixed::to_fixed;
///
/// assert_eq!(to_fixed::<i16>(-1.0, 7) as u16, 0xff80);
/// assert_eq!(to_fixed::<i32>(1.5, 20), 0x0018_0000);
/// // ties are rounded away from zero
/// assert_eq!(to_fixed::<i16>(0.5, 0), 1);
/// assert_eq!(to_fixed::<i16>(-0.5, 0), -1);
/// ```
pub fn to_fixed<T: FixedPoint>(value: f64, radix: u8) -> T {
    T::wrapping_from_f64(libm::round(value * scale(radix)))
}

/// Decodes a fixed-point integer with `radix` fractional bits.
///
/// # Examples
///
/// ```
/// use vita49::fixed::from_fixed;
///
/// assert_eq!(from_fixed(-128i16, 7), -1.0);
/// assert_eq!(from_fixed(1i16, 7), 0.0078125);
/// ```
pub fn from_fixed<T: FixedPoint>(raw: T, radix: u8) -> f64 {
    raw.to_f64() / scale(radix)
}
