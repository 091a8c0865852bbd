//! CIF3 indicator word and its fields.

use crate::field::{fixed_size_field, read_u32, write_u32, BitSlice};
use crate::indicator::indicator_word;
use bitvec::prelude::*;

indicator_word! {
    /// CIF3 indicator word.
    pub struct Cif3 {
        /// Timestamp details.
        timestamp_details = 31,
        /// Timestamp skew.
        timestamp_skew = 30,
        /// Rise time.
        rise_time = 27,
        /// Fall time.
        fall_time = 26,
        /// Offset time.
        offset_time = 25,
        /// Pulse width.
        pulse_width = 24,
        /// Period.
        period = 23,
        /// Duration.
        duration = 22,
        /// Dwell.
        dwell = 21,
        /// Jitter.
        jitter = 20,
        /// Age.
        age = 17,
        /// Shelf life.
        shelf_life = 16,
        /// Air temperature.
        air_temperature = 7,
        /// Sea and ground temperature.
        sea_ground_temperature = 6,
        /// Humidity.
        humidity = 5,
        /// Barometric pressure.
        barometric_pressure = 4,
        /// Sea and swell state.
        sea_swell_state = 3,
        /// Tropospheric state.
        tropospheric_state = 2,
        /// Network ID.
        network_id = 1,
    }
}

/// Timestamp details.
///
/// The POSIX time offset is only sent when `enable_posix_offset` is set.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TimestampDetails {
    /// User defined.
    pub user_defined: u8,
    /// The timestamp is global.
    pub global: bool,
    /// Timestamp epoch code (2 bits).
    pub tse: u8,
    /// Leap seconds history code (2 bits).
    pub lsh: u8,
    /// Leap seconds present code (2 bits).
    pub lsp: u8,
    /// Time source (3 bits).
    pub time_source: u8,
    /// The POSIX time offset is valid.
    pub enable_posix_offset: bool,
    /// POSIX time offset (s).
    pub posix_offset: u8,
    /// Timestamp epoch.
    pub epoch: u32,
}

impl TimestampDetails {
    /// Size in bytes.
    pub const SIZE: usize = 8;

    fn write(&self, out: &mut [u8]) {
        let bits = BitSlice::from_slice_mut(&mut out[..4]);
        bits[..8].store_be(self.user_defined);
        bits[8..13].store_be(0u8);
        bits.set(13, self.global);
        bits[14..16].store_be(self.tse & 0x3);
        bits[16..18].store_be(self.lsh & 0x3);
        bits[18..20].store_be(self.lsp & 0x3);
        bits[20..23].store_be(self.time_source & 0x7);
        bits.set(23, self.enable_posix_offset);
        let offset = if self.enable_posix_offset {
            self.posix_offset
        } else {
            0
        };
        bits[24..].store_be(offset);
        write_u32(out, 4, self.epoch);
    }

    fn read(input: &[u8]) -> TimestampDetails {
        let bits = BitSlice::from_slice(&input[..4]);
        TimestampDetails {
            user_defined: bits[..8].load_be(),
            global: bits[13],
            tse: bits[14..16].load_be(),
            lsh: bits[16..18].load_be(),
            lsp: bits[18..20].load_be(),
            time_source: bits[20..23].load_be(),
            enable_posix_offset: bits[23],
            posix_offset: bits[24..].load_be(),
            epoch: read_u32(input, 4),
        }
    }
}

fixed_size_field!(TimestampDetails, TimestampDetails::SIZE);

/// Sea and swell state.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SeaSwellState {
    /// User defined (6 bits).
    pub user_defined: u8,
    /// Swell state (5 bits).
    pub swell_state: u8,
    /// Sea state (5 bits).
    pub sea_state: u8,
}

impl SeaSwellState {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn write(&self, out: &mut [u8]) {
        let word = (u32::from(self.user_defined & 0x3f) << 10)
            | (u32::from(self.swell_state & 0x1f) << 5)
            | u32::from(self.sea_state & 0x1f);
        write_u32(out, 0, word);
    }

    fn read(input: &[u8]) -> SeaSwellState {
        let word = read_u32(input, 0);
        SeaSwellState {
            user_defined: ((word >> 10) & 0x3f) as u8,
            swell_state: ((word >> 5) & 0x1f) as u8,
            sea_state: (word & 0x1f) as u8,
        }
    }
}

fixed_size_field!(SeaSwellState, SeaSwellState::SIZE);

#[cfg(test)]
mod test {
    use super::*;
    use crate::Field;
    use hex_literal::hex;

    #[test]
    fn cif3_word() {
        let cif3 = Cif3 {
            timestamp_details: true,
            shelf_life: true,
            network_id: true,
            ..Default::default()
        };
        assert_eq!(cif3.to_bytes().unwrap(), hex!("80 01 00 02"));
        let mut decoded = Cif3::default();
        // reserved bits 29, 28, 19, 18, 15..8 and 0
        decoded.unpack(&hex!("8d 0d ff 03")).unwrap();
        assert_eq!(
            decoded,
            Cif3 {
                timestamp_details: true,
                rise_time: true,
                fall_time: true,
                pulse_width: true,
                shelf_life: true,
                network_id: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn timestamp_details_codes() {
        let t = |details: TimestampDetails| details.to_bytes().unwrap();
        assert_eq!(
            t(TimestampDetails {
                global: true,
                ..Default::default()
            }),
            hex!("00 04 00 00 00 00 00 00")
        );
        assert_eq!(
            t(TimestampDetails {
                tse: 3,
                ..Default::default()
            }),
            hex!("00 03 00 00 00 00 00 00")
        );
        assert_eq!(
            t(TimestampDetails {
                lsh: 3,
                ..Default::default()
            }),
            hex!("00 00 c0 00 00 00 00 00")
        );
        assert_eq!(
            t(TimestampDetails {
                lsp: 3,
                ..Default::default()
            }),
            hex!("00 00 30 00 00 00 00 00")
        );
        assert_eq!(
            t(TimestampDetails {
                time_source: 7,
                ..Default::default()
            }),
            hex!("00 00 0e 00 00 00 00 00")
        );
        assert_eq!(
            t(TimestampDetails {
                enable_posix_offset: true,
                ..Default::default()
            }),
            hex!("00 00 01 00 00 00 00 00")
        );
    }

    #[test]
    fn posix_offset_only_when_enabled() {
        let mut details = TimestampDetails {
            user_defined: 0xab,
            posix_offset: 37,
            epoch: 0x1234_5678,
            ..Default::default()
        };
        assert_eq!(
            details.to_bytes().unwrap(),
            hex!("ab 00 00 00 12 34 56 78")
        );
        details.enable_posix_offset = true;
        let bytes = hex!("ab 00 01 25 12 34 56 78");
        assert_eq!(details.to_bytes().unwrap(), bytes);
        let mut decoded = TimestampDetails::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, details);
    }

    #[test]
    fn sea_swell_state() {
        let state = SeaSwellState {
            user_defined: 0x3f,
            swell_state: 0x1f,
            sea_state: 1,
        };
        assert_eq!(state.to_bytes().unwrap(), hex!("00 00 ff e1"));
        let mut decoded = SeaSwellState::default();
        decoded.unpack(&hex!("ff ff ff e1")).unwrap();
        assert_eq!(decoded, state);
        let state = SeaSwellState {
            user_defined: 0,
            swell_state: 0,
            sea_state: 0xff,
        };
        assert_eq!(state.to_bytes().unwrap(), hex!("00 00 00 1f"));
    }
}
