//! Common field contract.
//!
//! Every structure in this crate has a wire representation that is a whole
//! number of 32-bit big-endian words. The [`Field`] trait gives them a
//! uniform interface: a size query, packing into a caller-owned buffer and
//! unpacking from a borrowed slice.
//!
//! Packing and unpacking never partially succeed. All the length checks are
//! done before the first byte of the output buffer (or the first member of
//! `self`) is written, so a failed call leaves everything as it was.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Codec error.
///
/// These are all caller errors: a buffer that is too small for the structure,
/// or a structure whose internal counts cannot be represented or satisfied.
/// Values that are out of range for a field are never an error; they are
/// truncated or saturated according to the convention of each field.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Error {
    /// The slice is smaller than the size of the structure.
    BufferTooShort {
        /// Number of bytes needed.
        required: usize,
        /// Number of bytes in the slice.
        available: usize,
    },
    /// The counts declared in the header of a variable-length structure
    /// imply more bytes than the slice holds.
    InconsistentLength {
        /// Number of bytes implied by the declared counts.
        declared: usize,
        /// Number of bytes in the slice.
        available: usize,
    },
    /// A list is too long for the width of the count field that describes it
    /// on the wire.
    CountOverflow {
        /// Length of the list.
        count: usize,
        /// Largest count that the wire field can hold.
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooShort {
                required,
                available,
            } => write!(
                f,
                "buffer too short: {} bytes required, {} available",
                required, available
            ),
            Error::InconsistentLength {
                declared,
                available,
            } => write!(
                f,
                "declared length of {} bytes exceeds the {} bytes available",
                declared, available
            ),
            Error::CountOverflow { count, max } => {
                write!(f, "list of {} entries does not fit a count of at most {}", count, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Wire codec for a VITA-49 structure.
///
/// # Examples
///
/// ```
/// use vita49::{cif0::Gain, Field};
///
/// let gain = Gain {
///     stage1: 1.0,
///     stage2: 1.0,
/// };
/// let mut buf = [0; 4];
/// gain.pack(&mut buf).unwrap();
/// assert_eq!(buf, [0x00, 0x80, 0x00, 0x80]);
///
/// let mut decoded = Gain::default();
/// decoded.unpack(&buf).unwrap();
/// assert_eq!(decoded, gain);
///
/// assert!(gain.pack(&mut [0; 3]).is_err());
/// ```
pub trait Field {
    /// Size of the wire representation in bytes.
    ///
    /// For variable-length structures this depends on their current
    /// contents.
    fn size_bytes(&self) -> usize;

    /// Writes exactly `size_bytes()` bytes at the start of `out`.
    fn pack(&self, out: &mut [u8]) -> Result<()>;

    /// Reads the structure from the start of `input`.
    ///
    /// On error `self` is not modified.
    fn unpack(&mut self, input: &[u8]) -> Result<()>;

    /// Packs the structure into a newly allocated buffer of the right size.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0; self.size_bytes()];
        self.pack(&mut buf)?;
        Ok(buf)
    }
}

/// MSB-first bit view of a byte buffer, with bit 0 being the MSB of the
/// first byte.
pub(crate) type BitSlice = bitvec::slice::BitSlice<u8, bitvec::order::Msb0>;

pub(crate) fn check_len(required: usize, available: usize) -> Result<()> {
    if available < required {
        Err(Error::BufferTooShort {
            required,
            available,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn check_declared(declared: usize, available: usize) -> Result<()> {
    if available < declared {
        log::warn!(
            "declared length of {} bytes exceeds the {} bytes available",
            declared,
            available
        );
        Err(Error::InconsistentLength {
            declared,
            available,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn check_count(count: usize, max: usize) -> Result<()> {
    if count > max {
        Err(Error::CountOverflow { count, max })
    } else {
        Ok(())
    }
}

pub(crate) fn read_u16(buf: &[u8], offset: usize) -> u16 {
    let mut bytes = [0; 2];
    bytes.copy_from_slice(&buf[offset..offset + 2]);
    u16::from_be_bytes(bytes)
}

pub(crate) fn read_u32(buf: &[u8], offset: usize) -> u32 {
    let mut bytes = [0; 4];
    bytes.copy_from_slice(&buf[offset..offset + 4]);
    u32::from_be_bytes(bytes)
}

pub(crate) fn read_u64(buf: &[u8], offset: usize) -> u64 {
    let mut bytes = [0; 8];
    bytes.copy_from_slice(&buf[offset..offset + 8]);
    u64::from_be_bytes(bytes)
}

pub(crate) fn write_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

pub(crate) fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

pub(crate) fn write_u64(buf: &mut [u8], offset: usize, value: u64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

/// Writes a list of 32-bit words back to back, starting at `offset`.
///
/// Returns the offset just past the last word.
pub(crate) fn write_words(buf: &mut [u8], offset: usize, words: &[u32]) -> usize {
    for (j, &w) in words.iter().enumerate() {
        write_u32(buf, offset + 4 * j, w);
    }
    offset + 4 * words.len()
}

pub(crate) fn read_words(buf: &[u8], offset: usize, count: usize) -> Vec<u32> {
    (0..count).map(|j| read_u32(buf, offset + 4 * j)).collect()
}

// Implements `Field` for a type with a constant wire size. The type must
// provide `fn write(&self, out: &mut [u8])` and `fn read(input: &[u8]) -> Self`,
// which are only called with slices of exactly `$size` bytes.
macro_rules! fixed_size_field {
    ($t:ty, $size:expr) => {
        impl $crate::field::Field for $t {
            fn size_bytes(&self) -> usize {
                $size
            }

            fn pack(&self, out: &mut [u8]) -> $crate::field::Result<()> {
                $crate::field::check_len($size, out.len())?;
                self.write(&mut out[..$size]);
                Ok(())
            }

            fn unpack(&mut self, input: &[u8]) -> $crate::field::Result<()> {
                $crate::field::check_len($size, input.len())?;
                *self = <$t>::read(&input[..$size]);
                Ok(())
            }
        }
    };
}

pub(crate) use fixed_size_field;

// Defines a one-word structure made of two signed fixed-point halfwords. The
// first member listed goes in the upper halfword (bits 31..16) and the second
// one in the lower halfword (bits 15..0).
macro_rules! fixed_point_pair {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(#[$high_meta:meta])*
            $high:ident,
            $(#[$low_meta:meta])*
            $low:ident,
        }
        radix = $radix:expr;
    ) => {
        $(#[$meta])*
        pub struct $name {
            $(#[$high_meta])*
            pub $high: f64,
            $(#[$low_meta])*
            pub $low: f64,
        }

        impl $name {
            /// Size in bytes.
            pub const SIZE: usize = 4;
            /// Radix of both fixed-point halfwords.
            pub const RADIX: u8 = $radix;

            pub(crate) fn write(&self, out: &mut [u8]) {
                let high: i16 = $crate::fixed::to_fixed(self.$high, Self::RADIX);
                let low: i16 = $crate::fixed::to_fixed(self.$low, Self::RADIX);
                $crate::field::write_u16(out, 0, high as u16);
                $crate::field::write_u16(out, 2, low as u16);
            }

            pub(crate) fn read(input: &[u8]) -> Self {
                let high = $crate::field::read_u16(input, 0) as i16;
                let low = $crate::field::read_u16(input, 2) as i16;
                $name {
                    $high: $crate::fixed::from_fixed(high, Self::RADIX),
                    $low: $crate::fixed::from_fixed(low, Self::RADIX),
                }
            }
        }

        $crate::field::fixed_size_field!($name, $name::SIZE);
    };
}

pub(crate) use fixed_point_pair;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn length_checks() {
        assert_eq!(check_len(4, 4), Ok(()));
        assert_eq!(
            check_len(8, 4),
            Err(Error::BufferTooShort {
                required: 8,
                available: 4
            })
        );
        assert_eq!(
            check_declared(12, 8),
            Err(Error::InconsistentLength {
                declared: 12,
                available: 8
            })
        );
        assert_eq!(
            check_count(256, 255),
            Err(Error::CountOverflow {
                count: 256,
                max: 255
            })
        );
    }

    #[test]
    fn word_lists() {
        let mut buf = [0; 12];
        let end = write_words(&mut buf, 4, &[0x01020304, 0xa0b0c0d0]);
        assert_eq!(end, 12);
        assert_eq!(buf, [0, 0, 0, 0, 1, 2, 3, 4, 0xa0, 0xb0, 0xc0, 0xd0]);
        assert_eq!(read_words(&buf, 4, 2), [0x01020304, 0xa0b0c0d0]);
        assert_eq!(read_u64(&buf, 4), 0x01020304a0b0c0d0);
    }

    #[test]
    fn display() {
        let e = Error::BufferTooShort {
            required: 8,
            available: 3,
        };
        assert_eq!(
            alloc::format!("{}", e),
            "buffer too short: 8 bytes required, 3 available"
        );
    }
}
