//! Indicator words.
//!
//! An indicator word is a 32-bit bitmap where each bit either flags the
//! presence of an optional field (CIF0, CIF1, ...) or is itself a boolean
//! value (CAM, warning/error fields). Every shape is defined by a static
//! table of `(name, bit)` pairs, with bits numbered as in VITA-49 (bit 31 is
//! the most significant bit of the word). Bits that do not appear in the
//! table are reserved: they are written as zero and ignored on decode.

/// Common interface of all the indicator word shapes.
///
/// # Examples
///
/// ```
/// use vita49::{cif0::Cif0, IndicatorWord};
///
/// let mut cif0 = Cif0::default();
/// assert!(cif0.set_flag("gain", true));
/// assert_eq!(cif0.to_word(), 1 << 23);
/// assert_eq!(cif0.flag("gain"), Some(true));
/// assert_eq!(cif0.flag("no_such_field"), None);
/// ```
pub trait IndicatorWord: Sized {
    /// Name and bit position of every flag, from the most significant bit.
    const BITS: &'static [(&'static str, u8)];

    /// Packs the flags into a word.
    fn to_word(&self) -> u32;

    /// Unpacks the flags from a word, ignoring reserved bits.
    fn from_word(word: u32) -> Self;

    /// Returns the bit position of the flag called `name`.
    fn position(name: &str) -> Option<u8> {
        Self::BITS
            .iter()
            .find(|&&(flag, _)| flag == name)
            .map(|&(_, bit)| bit)
    }

    /// Returns the value of the flag called `name`.
    ///
    /// Returns `None` if the shape has no such flag.
    fn flag(&self, name: &str) -> Option<bool> {
        Self::position(name).map(|bit| bit_is_set(self.to_word(), bit))
    }

    /// Sets the value of the flag called `name`.
    ///
    /// Returns `false` if the shape has no such flag, in which case nothing
    /// is modified.
    fn set_flag(&mut self, name: &str, value: bool) -> bool {
        let Some(bit) = Self::position(name) else {
            return false;
        };
        let word = self.to_word() & !(1 << bit);
        *self = Self::from_word(word | bit_mask(value, bit));
        true
    }

    /// Returns an iterator over the names of the flags that are set.
    fn set_flags(&self) -> SetFlags {
        SetFlags {
            table: Self::BITS,
            word: self.to_word(),
        }
    }
}

/// Iterator over the names of the flags set in an indicator word.
///
/// This is returned by [`IndicatorWord::set_flags`].
#[derive(Debug, Clone)]
pub struct SetFlags {
    table: &'static [(&'static str, u8)],
    word: u32,
}

impl Iterator for SetFlags {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        while let Some((&(name, bit), rest)) = self.table.split_first() {
            self.table = rest;
            if bit_is_set(self.word, bit) {
                return Some(name);
            }
        }
        None
    }
}

pub(crate) fn bit_is_set(word: u32, bit: u8) -> bool {
    (word >> bit) & 1 != 0
}

pub(crate) fn bit_mask(value: bool, bit: u8) -> u32 {
    u32::from(value) << bit
}

// Defines an indicator word shape: a struct with one `bool` per flag, its
// `(name, bit)` table and its `Field` implementation.
macro_rules! indicator_word {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident = $bit:expr,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: bool,
            )*
        }

        impl $crate::indicator::IndicatorWord for $name {
            const BITS: &'static [(&'static str, u8)] = &[
                $((stringify!($field), $bit),)*
            ];

            fn to_word(&self) -> u32 {
                0 $(| $crate::indicator::bit_mask(self.$field, $bit))*
            }

            fn from_word(word: u32) -> $name {
                log::trace!("{} word {:#010x}", stringify!($name), word);
                $name {
                    $($field: $crate::indicator::bit_is_set(word, $bit),)*
                }
            }
        }

        impl $name {
            /// Size in bytes.
            pub const SIZE: usize = 4;

            pub(crate) fn write(&self, out: &mut [u8]) {
                let word = $crate::indicator::IndicatorWord::to_word(self);
                $crate::field::write_u32(out, 0, word);
            }

            pub(crate) fn read(input: &[u8]) -> $name {
                let word = $crate::field::read_u32(input, 0);
                $crate::indicator::IndicatorWord::from_word(word)
            }
        }

        $crate::field::fixed_size_field!($name, $name::SIZE);
    };
}

pub(crate) use indicator_word;
