//! State and event indicators.
//!
//! This implements the state and event indicator field of context packets
//! (CIF0 bit 16) and the trailer of signal data packets, which share the same
//! layout.

use crate::field::{fixed_size_field, read_u32, write_u32};
use crate::indicator::{bit_is_set, bit_mask};

/// A flag that is only meaningful when its enable bit is set.
///
/// The value is stored on the wire as given, but on decode it is reported
/// as `false` whenever the enable bit is clear.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct EnableIndicator {
    /// The indicator is valid.
    pub enable: bool,
    /// Value of the indicator.
    pub value: bool,
}

impl EnableIndicator {
    /// Creates an enabled indicator with the given value.
    pub fn new(value: bool) -> EnableIndicator {
        EnableIndicator {
            enable: true,
            value,
        }
    }

    /// Returns the value of the indicator if it is enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use vita49::state_event::EnableIndicator;
    ///
    /// assert_eq!(EnableIndicator::new(true).get(), Some(true));
    /// assert_eq!(EnableIndicator::default().get(), None);
    /// ```
    pub fn get(&self) -> Option<bool> {
        if self.enable {
            Some(self.value)
        } else {
            None
        }
    }

    /// Clears both the enable and the value flags.
    pub fn reset(&mut self) {
        *self = EnableIndicator::default();
    }

    fn to_word(self, enable_bit: u8, value_bit: u8) -> u32 {
        bit_mask(self.enable, enable_bit) | bit_mask(self.value, value_bit)
    }

    fn from_word(word: u32, enable_bit: u8, value_bit: u8) -> EnableIndicator {
        let enable = bit_is_set(word, enable_bit);
        EnableIndicator {
            enable,
            value: enable && bit_is_set(word, value_bit),
        }
    }
}

/// State and event indicators.
///
/// Each indicator occupies an enable bit in bits 31..24 and a value bit 12
/// positions lower, in bits 19..12.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct StateEventIndicators {
    /// The timestamp is calibrated to an external reference.
    pub calibrated_time: EnableIndicator,
    /// The data in the packet is valid.
    pub valid_data: EnableIndicator,
    /// The phase-locked loops are locked.
    pub reference_lock: EnableIndicator,
    /// Automatic (`true`) or manual (`false`) gain control is active.
    pub agc_mgc: EnableIndicator,
    /// A signal has been detected.
    pub detected_signal: EnableIndicator,
    /// The spectrum is inverted with respect to the RF spectrum.
    pub spectral_inversion: EnableIndicator,
    /// Some data item in the packet is over range.
    pub over_range: EnableIndicator,
    /// A sample discontinuity has happened since the previous packet.
    pub sample_loss: EnableIndicator,
}

/// Trailer of a signal data packet.
///
/// It has the same layout as the state and event indicators of a context
/// packet.
pub type Trailer = StateEventIndicators;

impl StateEventIndicators {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    const ENABLE_TO_VALUE: u8 = 12;

    fn indicators(&self) -> [EnableIndicator; 8] {
        [
            self.calibrated_time,
            self.valid_data,
            self.reference_lock,
            self.agc_mgc,
            self.detected_signal,
            self.spectral_inversion,
            self.over_range,
            self.sample_loss,
        ]
    }

    /// Packs the indicators into a word.
    pub fn to_word(&self) -> u32 {
        self.indicators()
            .iter()
            .zip((24..=31).rev())
            .map(|(ind, enable_bit)| ind.to_word(enable_bit, enable_bit - Self::ENABLE_TO_VALUE))
            .fold(0, |word, bits| word | bits)
    }

    /// Unpacks the indicators from a word.
    pub fn from_word(word: u32) -> StateEventIndicators {
        let ind = |enable_bit| {
            EnableIndicator::from_word(word, enable_bit, enable_bit - Self::ENABLE_TO_VALUE)
        };
        StateEventIndicators {
            calibrated_time: ind(31),
            valid_data: ind(30),
            reference_lock: ind(29),
            agc_mgc: ind(28),
            detected_signal: ind(27),
            spectral_inversion: ind(26),
            over_range: ind(25),
            sample_loss: ind(24),
        }
    }

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.to_word());
    }

    fn read(input: &[u8]) -> StateEventIndicators {
        StateEventIndicators::from_word(read_u32(input, 0))
    }
}

fixed_size_field!(StateEventIndicators, StateEventIndicators::SIZE);

#[cfg(test)]
mod test {
    use super::*;
    use crate::Field;
    use hex_literal::hex;

    #[test]
    fn calibrated_time() {
        let sei = StateEventIndicators {
            calibrated_time: EnableIndicator::new(true),
            ..Default::default()
        };
        assert_eq!(sei.to_bytes().unwrap(), hex!("80 08 00 00"));
    }

    #[test]
    fn enable_without_value() {
        let trailer = Trailer {
            sample_loss: EnableIndicator::new(false),
            ..Default::default()
        };
        assert_eq!(trailer.to_bytes().unwrap(), hex!("01 00 00 00"));
        let mut decoded = Trailer::default();
        decoded.unpack(&hex!("01 00 00 00")).unwrap();
        assert_eq!(decoded, trailer);
        assert_eq!(decoded.sample_loss.get(), Some(false));
    }

    #[test]
    fn all_bits() {
        let all = EnableIndicator::new(true);
        let sei = StateEventIndicators {
            calibrated_time: all,
            valid_data: all,
            reference_lock: all,
            agc_mgc: all,
            detected_signal: all,
            spectral_inversion: all,
            over_range: all,
            sample_loss: all,
        };
        assert_eq!(sei.to_bytes().unwrap(), hex!("ff 0f f0 00"));
        let mut decoded = StateEventIndicators::default();
        decoded.unpack(&hex!("ff 0f f0 00")).unwrap();
        assert_eq!(decoded, sei);
    }

    #[test]
    fn value_without_enable() {
        // the value bit is stored as given
        let sei = StateEventIndicators {
            valid_data: EnableIndicator {
                enable: false,
                value: true,
            },
            ..Default::default()
        };
        assert_eq!(sei.to_bytes().unwrap(), hex!("00 04 00 00"));
        // but it reads as false while the indicator is disabled
        let mut decoded = StateEventIndicators::default();
        decoded.unpack(&hex!("00 04 00 00")).unwrap();
        assert_eq!(decoded.valid_data, EnableIndicator::default());
    }

    #[test]
    fn reset() {
        let mut ind = EnableIndicator::new(true);
        ind.reset();
        assert_eq!(ind, EnableIndicator::default());
        assert_eq!(ind.get(), None);
    }

    #[test]
    fn short_buffer() {
        let mut sei = StateEventIndicators::default();
        assert!(sei.unpack(&[0; 3]).is_err());
        assert!(sei.pack(&mut [0; 2]).is_err());
    }
}
