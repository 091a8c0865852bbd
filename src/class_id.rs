//! Class identifier.

use crate::field::{fixed_size_field, read_u16, read_u32, write_u16, write_u32};

/// Class identifier.
///
/// Identifies the information class of a packet stream, as defined by the
/// organization that owns the OUI.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ClassId {
    /// Number of padding bits at the end of the data payload (5 bits).
    pub pad_bit_count: u8,
    /// Organizationally unique identifier (24 bits).
    pub oui: u32,
    /// Information class code.
    pub information_code: u16,
    /// Packet class code.
    pub packet_code: u16,
}

impl ClassId {
    /// Size in bytes.
    pub const SIZE: usize = 8;

    fn write(&self, out: &mut [u8]) {
        let word = (u32::from(self.pad_bit_count & 0x1f) << 27) | (self.oui & 0xff_ffff);
        write_u32(out, 0, word);
        write_u16(out, 4, self.information_code);
        write_u16(out, 6, self.packet_code);
    }

    fn read(input: &[u8]) -> ClassId {
        let word = read_u32(input, 0);
        ClassId {
            pad_bit_count: (word >> 27) as u8,
            oui: word & 0xff_ffff,
            information_code: read_u16(input, 4),
            packet_code: read_u16(input, 6),
        }
    }
}

fixed_size_field!(ClassId, ClassId::SIZE);
