//! CIF1 indicator word and its scalar fields.
//!
//! The spectrum, sector/step-scan and index list fields are in their own
//! modules.

use crate::field::{fixed_point_pair, fixed_size_field, read_u32, write_u32};
use crate::indicator::indicator_word;

indicator_word! {
    /// CIF1 indicator word.
    pub struct Cif1 {
        /// Phase offset.
        phase_offset = 31,
        /// Polarization.
        polarization = 30,
        /// 3-D pointing vector.
        pointing_vector = 29,
        /// 3-D pointing vector structure.
        pointing_vector_structure = 28,
        /// Spatial scan type.
        spatial_scan_type = 27,
        /// Spatial reference type.
        spatial_reference_type = 26,
        /// Beam width.
        beam_width = 25,
        /// Range.
        range = 24,
        /// Eb/No and BER.
        ebno_ber = 20,
        /// Threshold.
        threshold = 19,
        /// Compression point.
        compression_point = 18,
        /// Second and third order intercept points.
        intercept_points = 17,
        /// SNR and noise figure.
        snr_noise_figure = 16,
        /// Auxiliary frequency.
        aux_frequency = 15,
        /// Auxiliary gain.
        aux_gain = 14,
        /// Auxiliary bandwidth.
        aux_bandwidth = 13,
        /// Array of CIFs.
        array_of_cifs = 11,
        /// Spectrum.
        spectrum = 10,
        /// Sector/step-scan.
        sector_step_scan = 9,
        /// Index list.
        index_list = 7,
        /// Discrete I/O (32 bits).
        discrete_io32 = 6,
        /// Discrete I/O (64 bits).
        discrete_io64 = 5,
        /// Health status.
        health_status = 4,
        /// V49 specification compliance.
        v49_spec_compliance = 3,
        /// Version and build code.
        version_information = 2,
        /// Buffer size.
        buffer_size = 1,
    }
}

fixed_point_pair! {
    /// Polarization.
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct Polarization {
        /// Tilt angle (radians).
        tilt_angle,
        /// Ellipticity angle (radians).
        ellipticity_angle,
    }
    radix = 13;
}

fixed_point_pair! {
    /// 3-D pointing vector.
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct PointingVector {
        /// Elevation angle (degrees).
        elevation,
        /// Azimuthal angle (degrees).
        azimuth,
    }
    radix = 7;
}

fixed_point_pair! {
    /// Beam width.
    ///
    /// The 3 dB width of the main lobe.
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct BeamWidth {
        /// Horizontal beam width (degrees).
        horizontal,
        /// Vertical beam width (degrees).
        vertical,
    }
    radix = 7;
}

fixed_point_pair! {
    /// Eb/No and bit error rate.
    ///
    /// A value of `0x7fff` (255.9921875) in either half means that the
    /// measurement is not used. This is the default.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct EbNoBer {
        /// Eb/No (dB).
        ebno,
        /// Bit error rate.
        ber,
    }
    radix = 7;
}

impl EbNoBer {
    /// Value of a half that is not used.
    pub const NOT_USED: f64 = 255.9921875;
}

impl Default for EbNoBer {
    fn default() -> EbNoBer {
        EbNoBer {
            ebno: EbNoBer::NOT_USED,
            ber: EbNoBer::NOT_USED,
        }
    }
}

fixed_point_pair! {
    /// Threshold.
    ///
    /// Signal threshold level, in dB or dBm, that triggers some action.
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct Threshold {
        /// Stage 1 threshold.
        stage1,
        /// Stage 2 threshold.
        stage2,
    }
    radix = 7;
}

fixed_point_pair! {
    /// Second and third order intercept points (dBm).
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct InterceptPoints {
        /// Second order input intercept point.
        second_order,
        /// Third order input intercept point.
        third_order,
    }
    radix = 7;
}

fixed_point_pair! {
    /// Signal to noise ratio and noise figure (dB).
    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    pub struct SnrNoise {
        /// Signal to noise ratio.
        snr,
        /// Noise figure.
        noise_figure,
    }
    radix = 7;
}

/// Reference point of an antenna scan.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DefinedReference {
    /// Not specified.
    #[default]
    NotSpecified,
    /// Earth-centred, earth-fixed.
    Ecef,
    /// Platform centred.
    PlatformCentered,
    /// Array centred.
    ArrayCentered,
}

/// Type of antenna scan pattern.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BeamType {
    /// Not specified.
    #[default]
    NotSpecified,
    /// Beam, or signal direction.
    Beam,
    /// Null.
    Null,
    /// Reserved.
    Reserved,
}

/// Spatial reference type.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SpatialReferenceType {
    /// Spatial identifier.
    pub spatial_identifier: u16,
    /// Reference point.
    pub defined_reference: DefinedReference,
    /// Scan pattern.
    pub beam_type: BeamType,
}

impl SpatialReferenceType {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn write(&self, out: &mut [u8]) {
        let word = (u32::from(self.spatial_identifier) << 16)
            | ((self.defined_reference as u32) << 2)
            | self.beam_type as u32;
        write_u32(out, 0, word);
    }

    fn read(input: &[u8]) -> SpatialReferenceType {
        let word = read_u32(input, 0);
        SpatialReferenceType {
            spatial_identifier: (word >> 16) as u16,
            defined_reference: match (word >> 2) & 0x3 {
                0 => DefinedReference::NotSpecified,
                1 => DefinedReference::Ecef,
                2 => DefinedReference::PlatformCentered,
                _ => DefinedReference::ArrayCentered,
            },
            beam_type: match word & 0x3 {
                0 => BeamType::NotSpecified,
                1 => BeamType::Beam,
                2 => BeamType::Null,
                _ => BeamType::Reserved,
            },
        }
    }
}

fixed_size_field!(SpatialReferenceType, SpatialReferenceType::SIZE);

/// Version and build code.
///
/// The values are stored as given, truncated to the width of each
/// sub-field.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct VersionInformation {
    /// Year, counted from 2000 (7 bits).
    pub year: u8,
    /// Day of the year (9 bits).
    pub day: u16,
    /// Revision (6 bits).
    pub revision: u8,
    /// User defined (10 bits).
    pub user_defined: u16,
}

impl VersionInformation {
    /// Size in bytes.
    pub const SIZE: usize = 4;

    fn write(&self, out: &mut [u8]) {
        let word = (u32::from(self.year & 0x7f) << 25)
            | (u32::from(self.day & 0x1ff) << 16)
            | (u32::from(self.revision & 0x3f) << 10)
            | u32::from(self.user_defined & 0x3ff);
        write_u32(out, 0, word);
    }

    fn read(input: &[u8]) -> VersionInformation {
        let word = read_u32(input, 0);
        VersionInformation {
            year: (word >> 25) as u8,
            day: ((word >> 16) & 0x1ff) as u16,
            revision: ((word >> 10) & 0x3f) as u8,
            user_defined: (word & 0x3ff) as u16,
        }
    }
}

fixed_size_field!(VersionInformation, VersionInformation::SIZE);
