//! Packet header.
//!
//! The first word of every VRT packet. [`Header`] holds the fields that are
//! common to all the packet types. [`DataHeader`], [`ContextHeader`] and
//! [`CommandHeader`] add the packet-specific indicator bits, which live in
//! the low bits of the first byte.

use crate::field::{fixed_size_field, read_u16, write_u16};

/// Packet type.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PacketType {
    /// Signal data packet without stream identifier.
    #[default]
    SignalData,
    /// Signal data packet with stream identifier.
    SignalDataStreamId,
    /// Extension data packet without stream identifier.
    ExtensionData,
    /// Extension data packet with stream identifier.
    ExtensionDataStreamId,
    /// Context packet.
    Context,
    /// Extension context packet.
    ExtensionContext,
    /// Command packet.
    Command,
    /// Extension command packet.
    ExtensionCommand,
    /// Reserved packet type, with its 4-bit code.
    ///
    /// Only the codes 8 to 15 are reserved. A lower code is packed as is and
    /// decodes to the packet type that it defines.
    Reserved(u8),
}

impl PacketType {
    /// Returns the 4-bit code of the packet type.
    pub fn code(self) -> u8 {
        match self {
            PacketType::SignalData => 0,
            PacketType::SignalDataStreamId => 1,
            PacketType::ExtensionData => 2,
            PacketType::ExtensionDataStreamId => 3,
            PacketType::Context => 4,
            PacketType::ExtensionContext => 5,
            PacketType::Command => 6,
            PacketType::ExtensionCommand => 7,
            PacketType::Reserved(code) => code & 0xf,
        }
    }

    /// Returns the packet type given its 4-bit code.
    ///
    /// Only the 4 LSBs of `code` are used.
    pub fn from_code(code: u8) -> PacketType {
        match code & 0xf {
            0 => PacketType::SignalData,
            1 => PacketType::SignalDataStreamId,
            2 => PacketType::ExtensionData,
            3 => PacketType::ExtensionDataStreamId,
            4 => PacketType::Context,
            5 => PacketType::ExtensionContext,
            6 => PacketType::Command,
            7 => PacketType::ExtensionCommand,
            c => PacketType::Reserved(c),
        }
    }

    /// Returns `true` if packets of this type carry a stream identifier.
    pub fn has_stream_id(self) -> bool {
        !matches!(
            self,
            PacketType::SignalData | PacketType::ExtensionData | PacketType::Reserved(_)
        )
    }

    /// Returns `true` for signal data and extension data packets.
    pub fn is_data(self) -> bool {
        matches!(
            self,
            PacketType::SignalData
                | PacketType::SignalDataStreamId
                | PacketType::ExtensionData
                | PacketType::ExtensionDataStreamId
        )
    }

    /// Returns `true` for context and extension context packets.
    pub fn is_context(self) -> bool {
        matches!(self, PacketType::Context | PacketType::ExtensionContext)
    }

    /// Returns `true` for command and extension command packets.
    pub fn is_command(self) -> bool {
        matches!(self, PacketType::Command | PacketType::ExtensionCommand)
    }
}

/// Timestamp integer (TSI) type.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Tsi {
    /// No integer-seconds timestamp.
    #[default]
    None,
    /// Coordinated Universal Time.
    Utc,
    /// GPS time.
    Gps,
    /// Other time reference.
    Other,
}

impl Tsi {
    /// Returns the 2-bit code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the TSI given its 2-bit code.
    ///
    /// Only the 2 LSBs of `code` are used.
    pub fn from_code(code: u8) -> Tsi {
        match code & 0x3 {
            0 => Tsi::None,
            1 => Tsi::Utc,
            2 => Tsi::Gps,
            _ => Tsi::Other,
        }
    }
}

/// Timestamp fractional (TSF) type.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Tsf {
    /// No fractional-seconds timestamp.
    #[default]
    None,
    /// Sample count timestamp.
    SampleCount,
    /// Real time timestamp in picoseconds.
    Picoseconds,
    /// Free running count timestamp.
    FreeRunning,
}

impl Tsf {
    /// Returns the 2-bit code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the TSF given its 2-bit code.
    ///
    /// Only the 2 LSBs of `code` are used.
    pub fn from_code(code: u8) -> Tsf {
        match code & 0x3 {
            0 => Tsf::None,
            1 => Tsf::SampleCount,
            2 => Tsf::Picoseconds,
            _ => Tsf::FreeRunning,
        }
    }
}

/// Timestamp mode (TSM) of a context packet.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Tsm {
    /// The timestamp applies with the precision of the data packets.
    #[default]
    Fine,
    /// The timestamp conveys timing only coarsely.
    Coarse,
}

/// Common packet header.
///
/// # Examples
///
/// ```
/// use vita49::header::{Header, PacketType};
/// use vita49::Field;
///
/// let header = Header {
///     packet_type: PacketType::Command,
///     ..Default::default()
/// };
/// assert_eq!(header.to_bytes().unwrap(), [0x60, 0x00, 0x00, 0x00]);
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Header {
    /// Packet type.
    pub packet_type: PacketType,
    /// A class identifier follows the stream identifier.
    pub class_id_enable: bool,
    /// Timestamp integer type.
    pub tsi: Tsi,
    /// Timestamp fractional type.
    pub tsf: Tsf,
    /// Packet count.
    ///
    /// This is a modulo-16 counter. Only the 4 LSBs are packed.
    pub packet_count: u8,
    /// Packet size in 32-bit words, including the header.
    pub packet_size: u16,
}

impl Header {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    /// Advances the packet count, wrapping around after 15.
    pub fn increment_count(&mut self) {
        self.packet_count = (self.packet_count % 16 + 1) % 16;
    }

    fn write(&self, out: &mut [u8]) {
        out[0] = (self.packet_type.code() << 4) | (u8::from(self.class_id_enable) << 3);
        out[1] = (self.tsi.code() << 6) | (self.tsf.code() << 4) | (self.packet_count % 16);
        write_u16(out, 2, self.packet_size);
    }

    fn read(input: &[u8]) -> Header {
        Header {
            packet_type: PacketType::from_code(input[0] >> 4),
            class_id_enable: input[0] & 0x08 != 0,
            tsi: Tsi::from_code(input[1] >> 6),
            tsf: Tsf::from_code(input[1] >> 4),
            packet_count: input[1] & 0xf,
            packet_size: read_u16(input, 2),
        }
    }
}

fixed_size_field!(Header, Header::SIZE);

/// Header of a signal data or extension data packet.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct DataHeader {
    /// Common header fields.
    pub header: Header,
    /// The packet has a trailer.
    pub trailer_included: bool,
    /// The packet uses features that are not in V49.0.
    pub not_v49_0: bool,
    /// The payload is spectrum data rather than time data.
    pub spectrum: bool,
}

impl DataHeader {
    /// Size in bytes.
    pub const SIZE: usize = Header::SIZE;

    fn write(&self, out: &mut [u8]) {
        self.header.write(out);
        out[0] |= (u8::from(self.trailer_included) << 2)
            | (u8::from(self.not_v49_0) << 1)
            | u8::from(self.spectrum);
    }

    fn read(input: &[u8]) -> DataHeader {
        DataHeader {
            header: Header::read(input),
            trailer_included: input[0] & 0x04 != 0,
            not_v49_0: input[0] & 0x02 != 0,
            spectrum: input[0] & 0x01 != 0,
        }
    }
}

fixed_size_field!(DataHeader, DataHeader::SIZE);

/// Header of a context or extension context packet.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ContextHeader {
    /// Common header fields.
    pub header: Header,
    /// The packet uses features that are not in V49.0.
    pub not_v49_0: bool,
    /// Timestamp mode.
    pub tsm: Tsm,
}

impl ContextHeader {
    /// Size in bytes.
    pub const SIZE: usize = Header::SIZE;

    fn write(&self, out: &mut [u8]) {
        self.header.write(out);
        out[0] |= (u8::from(self.not_v49_0) << 1) | u8::from(self.tsm == Tsm::Coarse);
    }

    fn read(input: &[u8]) -> ContextHeader {
        ContextHeader {
            header: Header::read(input),
            not_v49_0: input[0] & 0x02 != 0,
            tsm: if input[0] & 0x01 != 0 {
                Tsm::Coarse
            } else {
                Tsm::Fine
            },
        }
    }
}

fixed_size_field!(ContextHeader, ContextHeader::SIZE);

/// Header of a command or extension command packet.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct CommandHeader {
    /// Common header fields.
    pub header: Header,
    /// The packet is an acknowledge packet.
    pub acknowledge: bool,
    /// The packet is a cancellation packet.
    pub cancellation: bool,
}

impl CommandHeader {
    /// Size in bytes.
    pub const SIZE: usize = Header::SIZE;

    fn write(&self, out: &mut [u8]) {
        self.header.write(out);
        out[0] |= (u8::from(self.acknowledge) << 2) | u8::from(self.cancellation);
    }

    fn read(input: &[u8]) -> CommandHeader {
        CommandHeader {
            header: Header::read(input),
            acknowledge: input[0] & 0x04 != 0,
            cancellation: input[0] & 0x01 != 0,
        }
    }
}

fixed_size_field!(CommandHeader, CommandHeader::SIZE);

#[cfg(test)]
mod test {
    use super::*;
    use crate::Field;
    use hex_literal::hex;

    #[test]
    fn default() {
        let header = Header::default();
        assert_eq!(header.to_bytes().unwrap(), hex!("00 00 00 00"));
        let mut decoded = Header {
            packet_type: PacketType::Context,
            ..Default::default()
        };
        decoded.unpack(&hex!("00 00 00 00")).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn packet_types() {
        for code in 0..16 {
            let header = Header {
                packet_type: PacketType::from_code(code),
                ..Default::default()
            };
            let bytes = header.to_bytes().unwrap();
            assert_eq!(bytes, [code << 4, 0, 0, 0]);
            let mut decoded = Header::default();
            decoded.unpack(&bytes).unwrap();
            assert_eq!(decoded, header);
        }
        assert!(PacketType::Context.has_stream_id());
        assert!(!PacketType::SignalData.has_stream_id());
        assert!(PacketType::ExtensionDataStreamId.is_data());
        assert!(PacketType::ExtensionCommand.is_command());
        assert!(!PacketType::Command.is_context());
    }

    #[test]
    fn reserved_packet_type_codes() {
        assert_eq!(PacketType::from_code(9), PacketType::Reserved(9));
        assert_eq!(PacketType::Reserved(0x1a).code(), 0xa);
        // a defined code decodes to its own packet type
        let header = Header {
            packet_type: PacketType::Reserved(6),
            ..Default::default()
        };
        let mut decoded = Header::default();
        decoded.unpack(&header.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.packet_type, PacketType::Command);
    }

    #[test]
    fn fields() {
        let header = Header {
            packet_type: PacketType::SignalDataStreamId,
            class_id_enable: true,
            tsi: Tsi::Gps,
            tsf: Tsf::Picoseconds,
            packet_count: 0xa,
            packet_size: 0x1234,
        };
        assert_eq!(header.to_bytes().unwrap(), hex!("18 aa 12 34"));
        let mut decoded = Header::default();
        decoded.unpack(&hex!("18 aa 12 34")).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn packet_count_wraps() {
        let mut header = Header {
            packet_count: 15,
            ..Default::default()
        };
        header.increment_count();
        assert_eq!(header.packet_count, 0);
        header.packet_count = 255;
        assert_eq!(header.to_bytes().unwrap(), hex!("00 0f 00 00"));
        header.increment_count();
        assert_eq!(header.packet_count, 0);
        header.packet_count = 17;
        assert_eq!(header.to_bytes().unwrap(), hex!("00 01 00 00"));
    }

    #[test]
    fn data_header() {
        let header = DataHeader {
            header: Header {
                packet_type: PacketType::SignalDataStreamId,
                ..Default::default()
            },
            trailer_included: true,
            not_v49_0: true,
            spectrum: true,
        };
        assert_eq!(header.to_bytes().unwrap(), hex!("17 00 00 00"));
        let mut decoded = DataHeader::default();
        decoded.unpack(&hex!("17 00 00 00")).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn context_header() {
        let header = ContextHeader {
            header: Header {
                packet_type: PacketType::Context,
                ..Default::default()
            },
            not_v49_0: false,
            tsm: Tsm::Coarse,
        };
        assert_eq!(header.to_bytes().unwrap(), hex!("41 00 00 00"));
        let mut decoded = ContextHeader::default();
        decoded.unpack(&hex!("43 00 00 00")).unwrap();
        assert!(decoded.not_v49_0);
        assert_eq!(decoded.tsm, Tsm::Coarse);
    }

    #[test]
    fn command_header() {
        let header = CommandHeader {
            header: Header {
                packet_type: PacketType::Command,
                ..Default::default()
            },
            acknowledge: true,
            cancellation: false,
        };
        assert_eq!(header.to_bytes().unwrap(), hex!("64 00 00 00"));
        let mut decoded = CommandHeader::default();
        decoded.unpack(&hex!("65 00 00 00")).unwrap();
        assert!(decoded.acknowledge);
        assert!(decoded.cancellation);
        assert_eq!(decoded.header.packet_type, PacketType::Command);
    }

    #[test]
    fn base_ignores_specific_bits() {
        let mut header = Header::default();
        header.unpack(&hex!("67 00 00 00")).unwrap();
        assert_eq!(
            header,
            Header {
                packet_type: PacketType::Command,
                ..Default::default()
            }
        );
    }
}
