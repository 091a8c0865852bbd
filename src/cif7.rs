//! CIF7 indicator word and its fields.
//!
//! CIF7 attributes qualify the other fields of a packet: when one of them is
//! set, each field present is followed by the corresponding attribute.

use crate::field::{fixed_size_field, read_u32, write_u32};
use crate::indicator::indicator_word;

indicator_word! {
    /// CIF7 indicator word.
    pub struct Cif7 {
        /// Current value.
        current_value = 31,
        /// Mean value.
        average_value = 30,
        /// Median value.
        median_value = 29,
        /// Standard deviation.
        standard_deviation = 28,
        /// Maximum value.
        max_value = 27,
        /// Minimum value.
        min_value = 26,
        /// Precision.
        precision = 25,
        /// Accuracy.
        accuracy = 24,
        /// First derivative.
        first_derivative = 23,
        /// Second derivative.
        second_derivative = 22,
        /// Third derivative.
        third_derivative = 21,
        /// Probability.
        probability = 20,
        /// Belief.
        belief = 19,
    }
}

/// Probability attribute.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Probability {
    /// Probability function.
    pub function: u8,
    /// Probability, in units of 1/255.
    pub percent: u8,
}

impl Probability {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, (u32::from(self.function) << 8) | u32::from(self.percent));
    }

    fn read(input: &[u8]) -> Probability {
        let word = read_u32(input, 0);
        Probability {
            function: (word >> 8) as u8,
            percent: word as u8,
        }
    }
}

fixed_size_field!(Probability, Probability::SIZE);

/// Belief attribute.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Belief {
    /// Belief, in units of 1/255.
    pub percent: u8,
}

impl Belief {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.percent.into());
    }

    fn read(input: &[u8]) -> Belief {
        Belief {
            percent: read_u32(input, 0) as u8,
        }
    }
}

fixed_size_field!(Belief, Belief::SIZE);
