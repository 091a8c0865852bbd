//! CIF0 indicator word and its fields.
//!
//! The location fields of CIF0 (ECEF and relative ephemeris, formatted GPS
//! and INS geolocation, GPS ASCII) are in [`geolocation`](crate::geolocation)
//! and the context association lists are in
//! [`association`](crate::association).

use crate::field::{
    fixed_point_pair, fixed_size_field, read_u16, read_u32, write_u16, write_u32, BitSlice,
};
use crate::indicator::indicator_word;
use bitvec::prelude::*;

indicator_word! {
    /// CIF0 indicator word.
    ///
    /// Each flag indicates the presence of the corresponding field in a
    /// context or command packet. `if7_enable`, `if3_enable`, `if2_enable`
    /// and `if1_enable` indicate the presence of the CIF7, CIF3, CIF2 and
    /// CIF1 indicator words.
    pub struct Cif0 {
        /// Context field change indicator.
        change_indicator = 31,
        /// Reference point identifier.
        reference_point_id = 30,
        /// Bandwidth.
        bandwidth = 29,
        /// IF reference frequency.
        if_ref_frequency = 28,
        /// RF reference frequency.
        rf_ref_frequency = 27,
        /// RF reference frequency offset.
        rf_ref_frequency_offset = 26,
        /// IF band offset.
        if_band_offset = 25,
        /// Reference level.
        reference_level = 24,
        /// Gain.
        gain = 23,
        /// Over-range count.
        over_range_count = 22,
        /// Sample rate.
        sample_rate = 21,
        /// Timestamp adjustment.
        timestamp_adjustment = 20,
        /// Timestamp calibration time.
        timestamp_calibration_time = 19,
        /// Temperature.
        temperature = 18,
        /// Device identifier.
        device_id = 17,
        /// State and event indicators.
        state_event_indicators = 16,
        /// Signal data packet payload format.
        signal_data_format = 15,
        /// Formatted GPS geolocation.
        formatted_gps = 14,
        /// Formatted INS geolocation.
        formatted_ins = 13,
        /// ECEF ephemeris.
        ecef_ephemeris = 12,
        /// Relative ephemeris.
        relative_ephemeris = 11,
        /// Ephemeris reference identifier.
        ephemeris_ref_id = 10,
        /// GPS ASCII.
        gps_ascii = 9,
        /// Context association lists.
        context_association_lists = 8,
        /// The CIF7 word is present.
        if7_enable = 7,
        /// The CIF3 word is present.
        if3_enable = 3,
        /// The CIF2 word is present.
        if2_enable = 2,
        /// The CIF1 word is present.
        if1_enable = 1,
    }
}

fixed_point_pair! {
    /// Gain.
    ///
    /// The gain of a two-stage device, in dB. A single-stage device uses
    /// `stage1` and leaves `stage2` at zero.
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct Gain {
        /// Stage 2 gain (dB).
        stage2,
        /// Stage 1 gain (dB).
        stage1,
    }
    radix = 7;
}

/// Device identifier.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct DeviceIdentifier {
    /// Manufacturer OUI (24 bits).
    pub oui: u32,
    /// Device code.
    pub device_code: u16,
}

impl DeviceIdentifier {
    /// Size in bytes.
    pub const SIZE: usize = 8;

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.oui & 0xff_ffff);
        write_u16(out, 4, 0);
        write_u16(out, 6, self.device_code);
    }

    fn read(input: &[u8]) -> DeviceIdentifier {
        DeviceIdentifier {
            oui: read_u32(input, 0) & 0xff_ffff,
            device_code: read_u16(input, 6),
        }
    }
}

fixed_size_field!(DeviceIdentifier, DeviceIdentifier::SIZE);

/// Real/complex type of the data items.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum RealComplexType {
    /// Real samples.
    #[default]
    Real,
    /// Complex samples in cartesian (I/Q) form.
    ComplexCartesian,
    /// Complex samples in polar form.
    ComplexPolar,
    /// Reserved.
    Reserved,
}

impl RealComplexType {
    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> RealComplexType {
        match code & 0x3 {
            0 => RealComplexType::Real,
            1 => RealComplexType::ComplexCartesian,
            2 => RealComplexType::ComplexPolar,
            _ => RealComplexType::Reserved,
        }
    }
}

/// Signal data packet payload format.
///
/// The sizes in this structure are stored on the wire as their value minus
/// one, which lets a field of `n` bits represent the range `1..=2^n`. Sizes
/// outside of this range are clamped when packing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PayloadFormat {
    /// Link-efficient (`true`) or processing-efficient (`false`) packing.
    pub packing_method: bool,
    /// Real/complex type.
    pub real_complex_type: RealComplexType,
    /// Data item format (5 bits).
    pub data_item_format: u8,
    /// Sample-component repeating.
    pub repeat_indicator: bool,
    /// Event tag size (3 bits).
    pub event_tag_size: u8,
    /// Channel tag size (4 bits).
    pub channel_tag_size: u8,
    /// Data item fraction size (4 bits).
    pub data_item_fraction_size: u8,
    /// Item packing field size in bits (1 to 64).
    pub item_packing_field_size: u8,
    /// Data item size in bits (1 to 64).
    pub data_item_size: u8,
    /// Repeat count (1 to 65536).
    pub repeat_count: u32,
    /// Vector size (1 to 65536).
    pub vector_size: u32,
}

impl Default for PayloadFormat {
    fn default() -> PayloadFormat {
        PayloadFormat {
            packing_method: false,
            real_complex_type: RealComplexType::Real,
            data_item_format: 0,
            repeat_indicator: false,
            event_tag_size: 0,
            channel_tag_size: 0,
            data_item_fraction_size: 0,
            item_packing_field_size: 1,
            data_item_size: 1,
            repeat_count: 1,
            vector_size: 1,
        }
    }
}

// Encodes a value in 1..=max as value - 1, clamping values out of range.
fn minus_one(name: &str, value: u32, max: u32) -> u32 {
    let clamped = value.clamp(1, max);
    if clamped != value {
        log::warn!(
            "payload format {} {} clamped to {}",
            name,
            value,
            clamped
        );
    }
    clamped - 1
}

impl PayloadFormat {
    /// Size in bytes.
    pub const SIZE: usize = 8;
    /// Maximum item packing field size and data item size.
    pub const MAX_ITEM_SIZE: u8 = 64;
    /// Maximum repeat count and vector size.
    pub const MAX_COUNT: u32 = 0x10000;

    fn write(&self, out: &mut [u8]) {
        let max_item = u32::from(Self::MAX_ITEM_SIZE);
        let item_packing = minus_one(
            "item packing field size",
            self.item_packing_field_size.into(),
            max_item,
        );
        let data_item = minus_one("data item size", self.data_item_size.into(), max_item);
        let repeat = minus_one("repeat count", self.repeat_count, Self::MAX_COUNT);
        let vector = minus_one("vector size", self.vector_size, Self::MAX_COUNT);

        let bits = BitSlice::from_slice_mut(out);
        bits.set(0, self.packing_method);
        bits[1..3].store_be(self.real_complex_type.code());
        bits[3..8].store_be(self.data_item_format & 0x1f);
        bits.set(8, self.repeat_indicator);
        bits[9..12].store_be(self.event_tag_size & 0x7);
        bits[12..16].store_be(self.channel_tag_size & 0xf);
        bits[16..20].store_be(self.data_item_fraction_size & 0xf);
        bits[20..26].store_be(item_packing as u8);
        bits[26..32].store_be(data_item as u8);
        bits[32..48].store_be(repeat as u16);
        bits[48..64].store_be(vector as u16);
    }

    fn read(input: &[u8]) -> PayloadFormat {
        let bits = BitSlice::from_slice(input);
        PayloadFormat {
            packing_method: bits[0],
            real_complex_type: RealComplexType::from_code(bits[1..3].load_be()),
            data_item_format: bits[3..8].load_be(),
            repeat_indicator: bits[8],
            event_tag_size: bits[9..12].load_be(),
            channel_tag_size: bits[12..16].load_be(),
            data_item_fraction_size: bits[16..20].load_be(),
            item_packing_field_size: bits[20..26].load_be::<u8>() + 1,
            data_item_size: bits[26..32].load_be::<u8>() + 1,
            repeat_count: u32::from(bits[32..48].load_be::<u16>()) + 1,
            vector_size: u32::from(bits[48..64].load_be::<u16>()) + 1,
        }
    }
}

fixed_size_field!(PayloadFormat, PayloadFormat::SIZE);
