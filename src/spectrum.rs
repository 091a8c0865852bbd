//! Spectrum field of CIF1.

use crate::field::{fixed_size_field, read_u32, read_u64, write_u32, write_u64};
use crate::fixed::{from_fixed, to_fixed};

/// Radix of the 64-bit frequency fields (Hz).
pub const FREQUENCY_RADIX: u8 = 20;

pub(crate) fn write_frequency(out: &mut [u8], offset: usize, hz: f64) {
    write_u64(out, offset, to_fixed::<i64>(hz, FREQUENCY_RADIX) as u64);
}

pub(crate) fn read_frequency(input: &[u8], offset: usize) -> f64 {
    from_fixed(read_u64(input, offset) as i64, FREQUENCY_RADIX)
}

/// Spectrum type.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SpectrumType {
    /// Window time-delta interpretation (4 bits).
    pub window_time: u8,
    /// Averaging type.
    pub averaging_type: u8,
    /// Spectrum type.
    pub spectrum_type: u8,
}

impl SpectrumType {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn to_word(self) -> u32 {
        (u32::from(self.window_time & 0xf) << 16)
            | (u32::from(self.averaging_type) << 8)
            | u32::from(self.spectrum_type)
    }

    fn from_word(word: u32) -> SpectrumType {
        SpectrumType {
            window_time: ((word >> 16) & 0xf) as u8,
            averaging_type: (word >> 8) as u8,
            spectrum_type: word as u8,
        }
    }

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.to_word());
    }

    fn read(input: &[u8]) -> SpectrumType {
        SpectrumType::from_word(read_u32(input, 0))
    }
}

fixed_size_field!(SpectrumType, SpectrumType::SIZE);

/// Window type.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct WindowType {
    /// Window type code.
    pub window_type: u8,
}

impl WindowType {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.window_type.into());
    }

    fn read(input: &[u8]) -> WindowType {
        WindowType {
            window_type: read_u32(input, 0) as u8,
        }
    }
}

fixed_size_field!(WindowType, WindowType::SIZE);

/// Spectrum.
///
/// Describes how the spectral data of a signal data packet was computed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Spectrum {
    /// Spectrum type.
    pub spectrum_type: SpectrumType,
    /// Window type.
    pub window_type: WindowType,
    /// Number of transform points.
    pub num_transform_points: u32,
    /// Number of window points.
    pub num_window_points: u32,
    /// Resolution bandwidth (Hz).
    pub resolution: f64,
    /// Span (Hz).
    pub span: f64,
    /// Number of averages.
    pub num_averages: u32,
    /// Weighting factor.
    pub weighting_factor: u32,
    /// Index of the first spectrum point sent.
    pub f1_index: u32,
    /// Index of the last spectrum point sent.
    pub f2_index: u32,
    /// Window time-delta.
    pub window_time_delta: u32,
}

impl Spectrum {
    /// Size in bytes.
    pub const SIZE: usize = 52;

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.spectrum_type.to_word());
        self.window_type.write(&mut out[4..8]);
        write_u32(out, 8, self.num_transform_points);
        write_u32(out, 12, self.num_window_points);
        write_frequency(out, 16, self.resolution);
        write_frequency(out, 24, self.span);
        write_u32(out, 32, self.num_averages);
        write_u32(out, 36, self.weighting_factor);
        write_u32(out, 40, self.f1_index);
        write_u32(out, 44, self.f2_index);
        write_u32(out, 48, self.window_time_delta);
    }

    fn read(input: &[u8]) -> Spectrum {
        Spectrum {
            spectrum_type: SpectrumType::from_word(read_u32(input, 0)),
            window_type: WindowType::read(&input[4..8]),
            num_transform_points: read_u32(input, 8),
            num_window_points: read_u32(input, 12),
            resolution: read_frequency(input, 16),
            span: read_frequency(input, 24),
            num_averages: read_u32(input, 32),
            weighting_factor: read_u32(input, 36),
            f1_index: read_u32(input, 40),
            f2_index: read_u32(input, 44),
            window_time_delta: read_u32(input, 48),
        }
    }
}

fixed_size_field!(Spectrum, Spectrum::SIZE);

#[cfg(test)]
mod test {
    use super::*;
    use crate::Field;
    use hex_literal::hex;

    #[test]
    fn spectrum_type() {
        let t = SpectrumType {
            window_time: 0xff,
            averaging_type: 0x12,
            spectrum_type: 0x34,
        };
        assert_eq!(t.to_bytes().unwrap(), hex!("00 0f 12 34"));
        let mut decoded = SpectrumType::default();
        decoded.unpack(&hex!("ff 0f 12 34")).unwrap();
        assert_eq!(decoded.window_time, 0xf);
        assert_eq!(decoded.spectrum_type, 0x34);
    }

    #[test]
    fn window_type() {
        let w = WindowType { window_type: 0x5a };
        assert_eq!(w.to_bytes().unwrap(), hex!("00 00 00 5a"));
    }

    #[test]
    fn spectrum_layout() {
        let spectrum = Spectrum {
            spectrum_type: SpectrumType {
                window_time: 1,
                averaging_type: 2,
                spectrum_type: 3,
            },
            window_type: WindowType { window_type: 4 },
            num_transform_points: 5,
            num_window_points: 6,
            resolution: 1.0,
            span: 100e6,
            num_averages: 7,
            weighting_factor: 8,
            f1_index: 9,
            f2_index: 10,
            window_time_delta: 11,
        };
        let bytes = hex!(
            "00 01 02 03 00 00 00 04 00 00 00 05 00 00 00 06
             00 00 00 00 00 10 00 00 00 00 5f 5e 10 00 00 00
             00 00 00 07 00 00 00 08 00 00 00 09 00 00 00 0a
             00 00 00 0b"
        );
        assert_eq!(spectrum.to_bytes().unwrap(), bytes);
        let mut decoded = Spectrum::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, spectrum);
    }

    #[test]
    fn short_buffer() {
        let spectrum = Spectrum::default();
        assert_eq!(spectrum.size_bytes(), 52);
        assert!(spectrum.pack(&mut [0; 51]).is_err());
    }
}
