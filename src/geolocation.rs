//! Location fields of CIF0.
//!
//! [`Ephemeris`] is used both for the ECEF ephemeris and for the relative
//! ephemeris. [`Geolocation`] is used both for the formatted GPS and for the
//! formatted INS geolocation.
//!
//! Kinematic values that are not available are signalled on the wire with
//! the maximum positive fixed-point value, `0x7fffffff`, and timestamps that
//! are not available are signalled with all ones. This is what the
//! `Default` implementations produce.

use crate::field::{
    check_declared, check_len, read_u32, read_u64, write_u32, write_u64, Field, Result,
};
use crate::fixed::{from_fixed, to_fixed};
use crate::header::{Tsf, Tsi};
use alloc::vec::Vec;

/// Raw value of a kinematic field that is not available.
pub const NOT_AVAILABLE: i32 = 0x7fff_ffff;

/// Radix of position and altitude fields (metres).
pub const POSITION_RADIX: u8 = 5;
/// Radix of angle fields (degrees).
pub const ANGLE_RADIX: u8 = 22;
/// Radix of velocity and speed fields (metres per second).
pub const VELOCITY_RADIX: u8 = 16;

fn not_available(radix: u8) -> f64 {
    from_fixed(NOT_AVAILABLE, radix)
}

// First 16 bytes of both ephemeris and geolocation.
#[derive(Debug, Clone, Copy)]
struct Preamble {
    tsi: Tsi,
    tsf: Tsf,
    oui: u32,
    integer_timestamp: u32,
    fractional_timestamp: u64,
}

const PREAMBLE_SIZE: usize = 16;

impl Preamble {
    fn write(&self, out: &mut [u8]) {
        let word = (u32::from(self.tsi.code()) << 26)
            | (u32::from(self.tsf.code()) << 24)
            | (self.oui & 0xff_ffff);
        write_u32(out, 0, word);
        write_u32(out, 4, self.integer_timestamp);
        write_u64(out, 8, self.fractional_timestamp);
    }

    fn read(input: &[u8]) -> Preamble {
        let word = read_u32(input, 0);
        Preamble {
            tsi: Tsi::from_code((word >> 26) as u8),
            tsf: Tsf::from_code((word >> 24) as u8),
            oui: word & 0xff_ffff,
            integer_timestamp: read_u32(input, 4),
            fractional_timestamp: read_u64(input, 8),
        }
    }
}

fn write_kinematics(out: &mut [u8], fields: &[(f64, u8)]) {
    for (j, &(value, radix)) in fields.iter().enumerate() {
        write_u32(out, PREAMBLE_SIZE + 4 * j, to_fixed::<i32>(value, radix) as u32);
    }
}

fn read_kinematic(input: &[u8], j: usize, radix: u8) -> f64 {
    from_fixed(read_u32(input, PREAMBLE_SIZE + 4 * j) as i32, radix)
}

/// Ephemeris.
///
/// Position, attitude and velocity of the platform, either in ECEF
/// coordinates or relative to another reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ephemeris {
    /// Timestamp integer type.
    pub tsi: Tsi,
    /// Timestamp fractional type.
    pub tsf: Tsf,
    /// Manufacturer OUI (24 bits).
    pub oui: u32,
    /// Integer-seconds timestamp.
    pub integer_timestamp: u32,
    /// Fractional-seconds timestamp.
    pub fractional_timestamp: u64,
    /// Position X (m).
    pub position_x: f64,
    /// Position Y (m).
    pub position_y: f64,
    /// Position Z (m).
    pub position_z: f64,
    /// Attitude alpha (degrees).
    pub attitude_alpha: f64,
    /// Attitude beta (degrees).
    pub attitude_beta: f64,
    /// Attitude phi (degrees).
    pub attitude_phi: f64,
    /// Velocity dX (m/s).
    pub velocity_dx: f64,
    /// Velocity dY (m/s).
    pub velocity_dy: f64,
    /// Velocity dZ (m/s).
    pub velocity_dz: f64,
}

impl Default for Ephemeris {
    fn default() -> Ephemeris {
        Ephemeris {
            tsi: Tsi::None,
            tsf: Tsf::None,
            oui: 0,
            integer_timestamp: u32::MAX,
            fractional_timestamp: u64::MAX,
            position_x: not_available(POSITION_RADIX),
            position_y: not_available(POSITION_RADIX),
            position_z: not_available(POSITION_RADIX),
            attitude_alpha: not_available(ANGLE_RADIX),
            attitude_beta: not_available(ANGLE_RADIX),
            attitude_phi: not_available(ANGLE_RADIX),
            velocity_dx: not_available(VELOCITY_RADIX),
            velocity_dy: not_available(VELOCITY_RADIX),
            velocity_dz: not_available(VELOCITY_RADIX),
        }
    }
}

impl Ephemeris {
    /// Size in bytes.
    pub const SIZE: usize = 52;

    fn write(&self, out: &mut [u8]) {
        Preamble {
            tsi: self.tsi,
            tsf: self.tsf,
            oui: self.oui,
            integer_timestamp: self.integer_timestamp,
            fractional_timestamp: self.fractional_timestamp,
        }
        .write(out);
        write_kinematics(
            out,
            &[
                (self.position_x, POSITION_RADIX),
                (self.position_y, POSITION_RADIX),
                (self.position_z, POSITION_RADIX),
                (self.attitude_alpha, ANGLE_RADIX),
                (self.attitude_beta, ANGLE_RADIX),
                (self.attitude_phi, ANGLE_RADIX),
                (self.velocity_dx, VELOCITY_RADIX),
                (self.velocity_dy, VELOCITY_RADIX),
                (self.velocity_dz, VELOCITY_RADIX),
            ],
        );
    }

    fn read(input: &[u8]) -> Ephemeris {
        let preamble = Preamble::read(input);
        Ephemeris {
            tsi: preamble.tsi,
            tsf: preamble.tsf,
            oui: preamble.oui,
            integer_timestamp: preamble.integer_timestamp,
            fractional_timestamp: preamble.fractional_timestamp,
            position_x: read_kinematic(input, 0, POSITION_RADIX),
            position_y: read_kinematic(input, 1, POSITION_RADIX),
            position_z: read_kinematic(input, 2, POSITION_RADIX),
            attitude_alpha: read_kinematic(input, 3, ANGLE_RADIX),
            attitude_beta: read_kinematic(input, 4, ANGLE_RADIX),
            attitude_phi: read_kinematic(input, 5, ANGLE_RADIX),
            velocity_dx: read_kinematic(input, 6, VELOCITY_RADIX),
            velocity_dy: read_kinematic(input, 7, VELOCITY_RADIX),
            velocity_dz: read_kinematic(input, 8, VELOCITY_RADIX),
        }
    }
}

crate::field::fixed_size_field!(Ephemeris, Ephemeris::SIZE);

/// Formatted geolocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geolocation {
    /// Timestamp integer type.
    pub tsi: Tsi,
    /// Timestamp fractional type.
    pub tsf: Tsf,
    /// Manufacturer OUI (24 bits).
    pub oui: u32,
    /// Integer-seconds timestamp.
    pub integer_timestamp: u32,
    /// Fractional-seconds timestamp.
    pub fractional_timestamp: u64,
    /// Latitude (degrees).
    pub latitude: f64,
    /// Longitude (degrees).
    pub longitude: f64,
    /// Altitude (m).
    pub altitude: f64,
    /// Speed over ground (m/s).
    pub speed_over_ground: f64,
    /// Heading angle (degrees).
    pub heading_angle: f64,
    /// Track angle (degrees).
    pub track_angle: f64,
    /// Magnetic variation (degrees).
    pub magnetic_variation: f64,
}

impl Default for Geolocation {
    fn default() -> Geolocation {
        Geolocation {
            tsi: Tsi::None,
            tsf: Tsf::None,
            oui: 0,
            integer_timestamp: u32::MAX,
            fractional_timestamp: u64::MAX,
            latitude: not_available(ANGLE_RADIX),
            longitude: not_available(ANGLE_RADIX),
            altitude: not_available(POSITION_RADIX),
            speed_over_ground: not_available(VELOCITY_RADIX),
            heading_angle: not_available(ANGLE_RADIX),
            track_angle: not_available(ANGLE_RADIX),
            magnetic_variation: not_available(ANGLE_RADIX),
        }
    }
}

impl Geolocation {
    /// Size in bytes.
    pub const SIZE: usize = 44;

    fn write(&self, out: &mut [u8]) {
        Preamble {
            tsi: self.tsi,
            tsf: self.tsf,
            oui: self.oui,
            integer_timestamp: self.integer_timestamp,
            fractional_timestamp: self.fractional_timestamp,
        }
        .write(out);
        write_kinematics(
            out,
            &[
                (self.latitude, ANGLE_RADIX),
                (self.longitude, ANGLE_RADIX),
                (self.altitude, POSITION_RADIX),
                (self.speed_over_ground, VELOCITY_RADIX),
                (self.heading_angle, ANGLE_RADIX),
                (self.track_angle, ANGLE_RADIX),
                (self.magnetic_variation, ANGLE_RADIX),
            ],
        );
    }

    fn read(input: &[u8]) -> Geolocation {
        let preamble = Preamble::read(input);
        Geolocation {
            tsi: preamble.tsi,
            tsf: preamble.tsf,
            oui: preamble.oui,
            integer_timestamp: preamble.integer_timestamp,
            fractional_timestamp: preamble.fractional_timestamp,
            latitude: read_kinematic(input, 0, ANGLE_RADIX),
            longitude: read_kinematic(input, 1, ANGLE_RADIX),
            altitude: read_kinematic(input, 2, POSITION_RADIX),
            speed_over_ground: read_kinematic(input, 3, VELOCITY_RADIX),
            heading_angle: read_kinematic(input, 4, ANGLE_RADIX),
            track_angle: read_kinematic(input, 5, ANGLE_RADIX),
            magnetic_variation: read_kinematic(input, 6, ANGLE_RADIX),
        }
    }
}

crate::field::fixed_size_field!(Geolocation, Geolocation::SIZE);

/// GPS ASCII sentences.
///
/// The sentences are carried in `number_of_words` 32-bit words, padded with
/// zero bytes. Sentences longer than that are truncated when packing, and
/// the zero padding is dropped when unpacking.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct GpsAscii {
    /// Manufacturer OUI (24 bits).
    pub oui: u32,
    /// Number of 32-bit words of sentence data.
    pub number_of_words: u32,
    /// ASCII sentences.
    pub sentences: Vec<u8>,
}

impl GpsAscii {
    const HEADER_SIZE: usize = 8;

    /// Creates a GPS ASCII field holding `sentences`.
    ///
    /// The number of words is the smallest one that fits the sentences.
    ///
    /// # Examples
    ///
    /// ```
    /// use vita49::geolocation::GpsAscii;
    /// use vita49::Field;
    ///
    /// let gps = GpsAscii::new(0x123456, b"$GPGGA".to_vec());
    /// assert_eq!(gps.number_of_words, 2);
    /// assert_eq!(gps.size_bytes(), 16);
    /// ```
    pub fn new(oui: u32, sentences: Vec<u8>) -> GpsAscii {
        GpsAscii {
            oui,
            number_of_words: ((sentences.len() + 3) / 4) as u32,
            sentences,
        }
    }

    fn payload_size(&self) -> usize {
        payload_size(self.number_of_words)
    }
}

// Saturates where the byte count does not fit a usize, so that such a size
// fails every length check.
fn payload_size(number_of_words: u32) -> usize {
    usize::try_from(number_of_words)
        .ok()
        .and_then(|n| n.checked_mul(4))
        .unwrap_or(usize::MAX)
}

impl Field for GpsAscii {
    fn size_bytes(&self) -> usize {
        Self::HEADER_SIZE.saturating_add(self.payload_size())
    }

    fn pack(&self, out: &mut [u8]) -> Result<()> {
        let size = self.size_bytes();
        check_len(size, out.len())?;
        let payload = self.payload_size();
        if self.sentences.len() > payload {
            log::warn!(
                "GPS ASCII sentences of {} bytes truncated to {} words",
                self.sentences.len(),
                self.number_of_words
            );
        }
        let n = self.sentences.len().min(payload);
        write_u32(out, 0, self.oui & 0xff_ffff);
        write_u32(out, 4, self.number_of_words);
        let data = &mut out[Self::HEADER_SIZE..size];
        data[..n].copy_from_slice(&self.sentences[..n]);
        data[n..].fill(0);
        Ok(())
    }

    fn unpack(&mut self, input: &[u8]) -> Result<()> {
        check_len(Self::HEADER_SIZE, input.len())?;
        let number_of_words = read_u32(input, 4);
        let size = Self::HEADER_SIZE.saturating_add(payload_size(number_of_words));
        check_declared(size, input.len())?;
        let data = &input[Self::HEADER_SIZE..size];
        let len = data.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
        log::trace!(
            "GPS ASCII with {} words, {} bytes of sentences",
            number_of_words,
            len
        );
        self.oui = read_u32(input, 0) & 0xff_ffff;
        self.number_of_words = number_of_words;
        self.sentences = data[..len].to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use hex_literal::hex;

    #[test]
    fn ephemeris_default() {
        let ephemeris = Ephemeris::default();
        let bytes = ephemeris.to_bytes().unwrap();
        assert_eq!(bytes.len(), Ephemeris::SIZE);
        assert_eq!(bytes[..16], hex!("00 00 00 00 ff ff ff ff ff ff ff ff ff ff ff ff"));
        for field in bytes[16..].chunks(4) {
            assert_eq!(field, hex!("7f ff ff ff"));
        }
        let mut decoded = Ephemeris {
            oui: 1,
            ..Default::default()
        };
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, ephemeris);
    }

    #[test]
    fn ephemeris_fields() {
        let ephemeris = Ephemeris {
            tsi: Tsi::Other,
            tsf: Tsf::FreeRunning,
            oui: 0x123456,
            integer_timestamp: 1,
            fractional_timestamp: 2,
            position_x: -0.03125,
            position_y: 1.0,
            position_z: 0.0,
            attitude_alpha: 1.0,
            attitude_beta: -1.0,
            attitude_phi: 0.0,
            velocity_dx: 1.0,
            velocity_dy: -1.0,
            velocity_dz: 0.5,
        };
        let bytes = hex!(
            "0f 12 34 56 00 00 00 01 00 00 00 00 00 00 00 02
             ff ff ff ff 00 00 00 20 00 00 00 00
             00 40 00 00 ff c0 00 00 00 00 00 00
             00 01 00 00 ff ff 00 00 00 00 80 00"
        );
        assert_eq!(ephemeris.to_bytes().unwrap(), bytes);
        let mut decoded = Ephemeris::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, ephemeris);
    }

    #[test]
    fn ephemeris_tsi() {
        let ephemeris = Ephemeris {
            tsi: Tsi::Other,
            ..Default::default()
        };
        assert_eq!(ephemeris.to_bytes().unwrap()[0], 0x0c);
    }

    #[test]
    fn geolocation_default() {
        let geolocation = Geolocation::default();
        let bytes = geolocation.to_bytes().unwrap();
        assert_eq!(bytes.len(), Geolocation::SIZE);
        assert_eq!(bytes[..4], [0; 4]);
        assert!(bytes[4..16].iter().all(|&b| b == 0xff));
        for field in bytes[16..].chunks(4) {
            assert_eq!(field, hex!("7f ff ff ff"));
        }
        let mut decoded = Geolocation::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, geolocation);
    }

    #[test]
    fn geolocation_fields() {
        let geolocation = Geolocation {
            tsi: Tsi::Utc,
            tsf: Tsf::Picoseconds,
            latitude: 1.0,
            longitude: -1.0,
            altitude: 1.0,
            speed_over_ground: 1.0,
            heading_angle: 0.0,
            track_angle: 0.0,
            magnetic_variation: 0.0,
            ..Default::default()
        };
        let bytes = geolocation.to_bytes().unwrap();
        assert_eq!(bytes[..4], hex!("06 00 00 00"));
        assert_eq!(
            bytes[16..32],
            hex!("00 40 00 00 ff c0 00 00 00 00 00 20 00 01 00 00")
        );
        assert_eq!(bytes[32..], [0; 12]);
        assert!(geolocation.pack(&mut [0; 43]).is_err());
    }

    #[test]
    fn gps_ascii_oui() {
        let gps = GpsAscii {
            oui: 0xffff_ffff,
            ..Default::default()
        };
        assert_eq!(gps.to_bytes().unwrap(), hex!("00 ff ff ff 00 00 00 00"));
    }

    #[test]
    fn gps_ascii_padding() {
        let gps = GpsAscii {
            oui: 0,
            number_of_words: 3,
            sentences: b"$GPG".to_vec(),
        };
        let bytes = hex!("00 00 00 00 00 00 00 03 24 47 50 47 00 00 00 00 00 00 00 00");
        assert_eq!(gps.to_bytes().unwrap(), bytes);
        let mut decoded = GpsAscii::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, gps);
    }

    #[test]
    fn gps_ascii_huge_word_count() {
        let gps = GpsAscii {
            oui: 0,
            number_of_words: u32::MAX,
            sentences: b"$GPGGA".to_vec(),
        };
        assert!(gps.size_bytes() > 0xffff_ffff || gps.size_bytes() == usize::MAX);
        let mut buf = [0; 16];
        assert!(matches!(
            gps.pack(&mut buf),
            Err(Error::BufferTooShort { available: 16, .. })
        ));
        assert_eq!(buf, [0; 16]);
    }

    #[test]
    fn gps_ascii_truncation() {
        let gps = GpsAscii {
            oui: 0,
            number_of_words: 1,
            sentences: b"$GPGGA".to_vec(),
        };
        assert_eq!(
            gps.to_bytes().unwrap(),
            hex!("00 00 00 00 00 00 00 01 24 47 50 47")
        );
    }

    #[test]
    fn gps_ascii_inconsistent() {
        let mut gps = GpsAscii::new(0xabc, b"abc".to_vec());
        assert_eq!(
            gps.unpack(&hex!("00 00 00 00 00 00 00 02 41 42 43 44")),
            Err(Error::InconsistentLength {
                declared: 16,
                available: 12
            })
        );
        assert_eq!(gps, GpsAscii::new(0xabc, b"abc".to_vec()));
        assert!(matches!(
            gps.unpack(&hex!("00 00 00 00 ff ff ff ff 41 42 43 44")),
            Err(Error::InconsistentLength { available: 12, .. })
        ));
        assert_eq!(gps, GpsAscii::new(0xabc, b"abc".to_vec()));
        assert_eq!(
            gps.unpack(&[0; 7]),
            Err(Error::BufferTooShort {
                required: 8,
                available: 7
            })
        );
    }
}
