//! Index list field of CIF1.

use crate::field::{
    check_count, check_declared, check_len, read_u32, read_words, write_u32, write_words, Field,
    Result,
};
use alloc::vec::Vec;

/// Index list.
///
/// The indices of the records (possibly a subset of a whole collection) on
/// which a device is to act. The total size and the number of entries sent
/// on the wire are computed from the entries.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct IndexList {
    /// Entry size code (4 bits).
    pub entry_size: u8,
    /// Entries.
    pub entries: Vec<u32>,
}

impl IndexList {
    const HEADER_WORDS: usize = 2;
    /// Maximum number of entries.
    pub const MAX_ENTRIES: usize = 0xf_ffff;

    fn total_words(&self) -> usize {
        Self::HEADER_WORDS + self.entries.len()
    }
}

impl Field for IndexList {
    fn size_bytes(&self) -> usize {
        4 * self.total_words()
    }

    fn pack(&self, out: &mut [u8]) -> Result<()> {
        check_count(self.entries.len(), Self::MAX_ENTRIES)?;
        check_len(self.size_bytes(), out.len())?;
        write_u32(out, 0, self.total_words() as u32);
        let word = (u32::from(self.entry_size & 0xf) << 28) | self.entries.len() as u32;
        write_u32(out, 4, word);
        write_words(out, 4 * Self::HEADER_WORDS, &self.entries);
        Ok(())
    }

    fn unpack(&mut self, input: &[u8]) -> Result<()> {
        check_len(4 * Self::HEADER_WORDS, input.len())?;
        let total_words = read_u32(input, 0);
        let word = read_u32(input, 4);
        let num_entries = (word & 0xf_ffff) as usize;
        log::trace!(
            "index list: total size {} words, {} entries",
            total_words,
            num_entries
        );
        check_declared(4 * (Self::HEADER_WORDS + num_entries), input.len())?;
        self.entry_size = (word >> 28) as u8;
        self.entries = read_words(input, 4 * Self::HEADER_WORDS, num_entries);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use alloc::vec;
    use hex_literal::hex;

    #[test]
    fn empty() {
        let list = IndexList {
            entry_size: 0xf,
            entries: vec![],
        };
        assert_eq!(list.size_bytes(), 8);
        assert_eq!(list.to_bytes().unwrap(), hex!("00 00 00 02 f0 00 00 00"));
    }

    #[test]
    fn entries() {
        let list = IndexList {
            entry_size: 4,
            entries: vec![0xdeadbeef, 7],
        };
        let bytes = hex!("00 00 00 04 40 00 00 02 de ad be ef 00 00 00 07");
        assert_eq!(list.to_bytes().unwrap(), bytes);
        let mut decoded = IndexList::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn inconsistent_length() {
        let mut list = IndexList::default();
        assert_eq!(
            list.unpack(&hex!("00 00 00 04 40 00 00 02 de ad be ef")),
            Err(Error::InconsistentLength {
                declared: 16,
                available: 12
            })
        );
        assert_eq!(list, IndexList::default());
    }
}
