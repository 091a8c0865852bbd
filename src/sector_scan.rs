//! Sector/step-scan field of CIF1.
//!
//! Describes a multi-sector scanning receiver, or one that steps through
//! individual frequencies. The field is an array of fixed-size records
//! preceded by a 3-word header.

use crate::cif0::Gain;
use crate::field::{
    check_count, check_declared, check_len, read_u32, read_u64, write_u32, write_u64, BitSlice,
    Field, Result,
};
use crate::indicator::indicator_word;
use crate::spectrum::{read_frequency, write_frequency};
use alloc::vec::Vec;
use bitvec::prelude::*;

indicator_word! {
    /// Sub-field indicator of the sector/step-scan records.
    pub struct SectorStepScanCif {
        /// Sector number.
        sector_number = 31,
        /// F1 start frequency.
        f1_start_frequency = 30,
        /// F2 stop frequency.
        f2_stop_frequency = 29,
        /// Resolution bandwidth.
        resolution_bandwidth = 28,
        /// Tune step size.
        tune_step_size = 27,
        /// Number of points.
        number_points = 26,
        /// Default gain.
        default_gain = 25,
        /// Threshold.
        threshold = 24,
        /// Dwell time.
        dwell_time = 23,
        /// Start time.
        start_time = 22,
        /// Time 3.
        time3 = 21,
        /// Time 4.
        time4 = 20,
    }
}

/// Sector/step-scan record.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SectorStepScanRecord {
    /// Sector number.
    pub sector_number: u32,
    /// F1 start frequency (Hz).
    pub f1_start_frequency: f64,
    /// F2 stop frequency (Hz).
    pub f2_stop_frequency: f64,
    /// Resolution bandwidth (Hz).
    pub resolution_bandwidth: f64,
    /// Tune step size (Hz).
    pub tune_step_size: f64,
    /// Number of points.
    pub number_points: u32,
    /// Default gain.
    pub default_gain: Gain,
    /// Threshold, with the same layout as a gain.
    pub threshold: Gain,
    /// Dwell time.
    pub dwell_time: u64,
    /// Start time.
    pub start_time: u64,
    /// Time 3.
    pub time3: u64,
    /// Time 4.
    pub time4: u64,
}

impl SectorStepScanRecord {
    /// Size in bytes.
    pub const SIZE: usize = 80;

    fn write(&self, out: &mut [u8]) {
        write_u32(out, 0, self.sector_number);
        write_frequency(out, 4, self.f1_start_frequency);
        write_frequency(out, 12, self.f2_stop_frequency);
        write_frequency(out, 20, self.resolution_bandwidth);
        write_frequency(out, 28, self.tune_step_size);
        write_u32(out, 36, self.number_points);
        self.default_gain.write(&mut out[40..44]);
        self.threshold.write(&mut out[44..48]);
        write_u64(out, 48, self.dwell_time);
        write_u64(out, 56, self.start_time);
        write_u64(out, 64, self.time3);
        write_u64(out, 72, self.time4);
    }

    fn read(input: &[u8]) -> SectorStepScanRecord {
        SectorStepScanRecord {
            sector_number: read_u32(input, 0),
            f1_start_frequency: read_frequency(input, 4),
            f2_stop_frequency: read_frequency(input, 12),
            resolution_bandwidth: read_frequency(input, 20),
            tune_step_size: read_frequency(input, 28),
            number_points: read_u32(input, 36),
            default_gain: Gain::read(&input[40..44]),
            threshold: Gain::read(&input[44..48]),
            dwell_time: read_u64(input, 48),
            start_time: read_u64(input, 56),
            time3: read_u64(input, 64),
            time4: read_u64(input, 72),
        }
    }
}

crate::field::fixed_size_field!(SectorStepScanRecord, SectorStepScanRecord::SIZE);

/// Sector/step-scan.
///
/// The array size, header size, words per record and number of records
/// sent on the wire are computed from the number of records.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectorStepScan {
    /// Sub-field indicator of the records.
    pub cif: SectorStepScanCif,
    /// Records.
    pub records: Vec<SectorStepScanRecord>,
}

impl SectorStepScan {
    const HEADER_WORDS: usize = 3;
    const HEADER_SIZE: usize = 4 * Self::HEADER_WORDS;
    const RECORD_WORDS: usize = SectorStepScanRecord::SIZE / 4;
    /// Maximum number of records.
    pub const MAX_RECORDS: usize = 0xfff;

    fn array_words(&self) -> usize {
        Self::HEADER_WORDS + Self::RECORD_WORDS * self.records.len()
    }
}

impl Field for SectorStepScan {
    fn size_bytes(&self) -> usize {
        4 * self.array_words()
    }

    fn pack(&self, out: &mut [u8]) -> Result<()> {
        check_count(self.records.len(), Self::MAX_RECORDS)?;
        check_len(self.size_bytes(), out.len())?;
        write_u32(out, 0, self.array_words() as u32);
        let bits = BitSlice::from_slice_mut(&mut out[4..8]);
        bits[..8].store_be(Self::HEADER_WORDS as u8);
        bits[8..20].store_be(Self::RECORD_WORDS as u16);
        bits[20..].store_be(self.records.len() as u16);
        self.cif.write(&mut out[8..12]);
        for (record, chunk) in self
            .records
            .iter()
            .zip(out[Self::HEADER_SIZE..].chunks_exact_mut(SectorStepScanRecord::SIZE))
        {
            record.write(chunk);
        }
        Ok(())
    }

    fn unpack(&mut self, input: &[u8]) -> Result<()> {
        check_len(Self::HEADER_SIZE, input.len())?;
        let array_words = read_u32(input, 0);
        let bits = BitSlice::from_slice(&input[4..8]);
        let header_words = bits[..8].load_be::<u8>();
        let record_words = bits[8..20].load_be::<u16>();
        let num_records = bits[20..].load_be::<u16>() as usize;
        log::trace!(
            "sector/step-scan: array size {} header size {} record size {} records {}",
            array_words,
            header_words,
            record_words,
            num_records
        );
        if usize::from(header_words) != Self::HEADER_WORDS
            || usize::from(record_words) != Self::RECORD_WORDS
        {
            log::warn!(
                "sector/step-scan header size {} and record size {} words differ from {} and {}",
                header_words,
                record_words,
                Self::HEADER_WORDS,
                Self::RECORD_WORDS
            );
        }
        let size = Self::HEADER_SIZE + SectorStepScanRecord::SIZE * num_records;
        check_declared(size, input.len())?;
        self.cif = SectorStepScanCif::read(&input[8..12]);
        self.records = input[Self::HEADER_SIZE..size]
            .chunks_exact(SectorStepScanRecord::SIZE)
            .map(SectorStepScanRecord::read)
            .collect();
        Ok(())
    }
}
