//! Context association lists.

use crate::field::{
    check_count, check_declared, check_len, read_words, write_words, BitSlice, Error, Field,
    Result,
};
use alloc::vec::Vec;
use bitvec::prelude::*;

/// Context association lists.
///
/// Lists of stream identifiers of the packet streams associated with the
/// stream described by a context packet. The sizes sent on the wire are
/// the lengths of the lists. The asynchronous-channel tag list, when
/// enabled, has one tag for each asynchronous-channel entry.
///
/// # Examples
///
/// ```
/// use vita49::association::ContextAssociationLists;
/// use vita49::Field;
///
/// let lists = ContextAssociationLists {
///     source_list: vec![0xffff_ffff],
///     ..Default::default()
/// };
/// assert_eq!(
///     lists.to_bytes().unwrap(),
///     [0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff]
/// );
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct ContextAssociationLists {
    /// Source context association list.
    pub source_list: Vec<u32>,
    /// System context association list.
    pub system_list: Vec<u32>,
    /// Vector-component context association list.
    pub vector_list: Vec<u32>,
    /// Asynchronous-channel context association list.
    pub async_list: Vec<u32>,
    /// The asynchronous-channel tag list is present.
    pub async_tag_list_enable: bool,
    /// Asynchronous-channel tag list.
    pub async_tag_list: Vec<u32>,
}

impl ContextAssociationLists {
    const HEADER_SIZE: usize = 8;
    /// Maximum length of the source and system lists.
    pub const MAX_SOURCE_SYSTEM: usize = 0xff;
    /// Maximum length of the vector-component list.
    pub const MAX_VECTOR: usize = 0xffff;
    /// Maximum length of the asynchronous-channel list.
    pub const MAX_ASYNC: usize = 0x7fff;

    fn async_tag_count(&self) -> usize {
        if self.async_tag_list_enable {
            self.async_list.len()
        } else {
            0
        }
    }

    fn lists(&self) -> [&[u32]; 4] {
        [
            &self.source_list,
            &self.system_list,
            &self.vector_list,
            &self.async_list,
        ]
    }
}

impl Field for ContextAssociationLists {
    fn size_bytes(&self) -> usize {
        let words: usize = self.lists().iter().map(|l| l.len()).sum();
        Self::HEADER_SIZE + 4 * (words + self.async_tag_count())
    }

    fn pack(&self, out: &mut [u8]) -> Result<()> {
        check_count(self.source_list.len(), Self::MAX_SOURCE_SYSTEM)?;
        check_count(self.system_list.len(), Self::MAX_SOURCE_SYSTEM)?;
        check_count(self.vector_list.len(), Self::MAX_VECTOR)?;
        check_count(self.async_list.len(), Self::MAX_ASYNC)?;
        let tags = self.async_tag_count();
        if self.async_tag_list.len() < tags {
            return Err(Error::InconsistentLength {
                declared: 4 * tags,
                available: 4 * self.async_tag_list.len(),
            });
        }
        check_len(self.size_bytes(), out.len())?;
        if self.async_tag_list.len() > tags {
            log::warn!(
                "{} asynchronous-channel tags dropped (tag list enabled: {}, {} entries)",
                self.async_tag_list.len() - tags,
                self.async_tag_list_enable,
                self.async_list.len()
            );
        }

        out[..Self::HEADER_SIZE].fill(0);
        let bits = BitSlice::from_slice_mut(&mut out[..Self::HEADER_SIZE]);
        bits[8..16].store_be(self.source_list.len() as u8);
        bits[24..32].store_be(self.system_list.len() as u8);
        bits[32..48].store_be(self.vector_list.len() as u16);
        bits.set(48, self.async_tag_list_enable);
        bits[49..64].store_be(self.async_list.len() as u16);

        let mut offset = Self::HEADER_SIZE;
        for list in self.lists() {
            offset = write_words(out, offset, list);
        }
        write_words(out, offset, &self.async_tag_list[..tags]);
        Ok(())
    }

    fn unpack(&mut self, input: &[u8]) -> Result<()> {
        check_len(Self::HEADER_SIZE, input.len())?;
        let bits = BitSlice::from_slice(&input[..Self::HEADER_SIZE]);
        let source = bits[8..16].load_be::<u8>() as usize;
        let system = bits[24..32].load_be::<u8>() as usize;
        let vector = bits[32..48].load_be::<u16>() as usize;
        let async_tag_list_enable = bits[48];
        let async_count = bits[49..64].load_be::<u16>() as usize;
        let tags = if async_tag_list_enable { async_count } else { 0 };
        log::trace!(
            "context association lists: source {} system {} vector {} async {} tags {}",
            source,
            system,
            vector,
            async_count,
            tags
        );
        let size = Self::HEADER_SIZE + 4 * (source + system + vector + async_count + tags);
        check_declared(size, input.len())?;

        let mut offset = Self::HEADER_SIZE;
        let mut next_list = |count: usize| {
            let list = read_words(input, offset, count);
            offset += 4 * count;
            list
        };
        self.source_list = next_list(source);
        self.system_list = next_list(system);
        self.vector_list = next_list(vector);
        self.async_list = next_list(async_count);
        self.async_tag_list = next_list(tags);
        self.async_tag_list_enable = async_tag_list_enable;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;
    use hex_literal::hex;

    #[test]
    fn empty() {
        let lists = ContextAssociationLists::default();
        assert_eq!(lists.size_bytes(), 8);
        assert_eq!(lists.to_bytes().unwrap(), [0; 8]);
    }

    #[test]
    fn source_list() {
        let lists = ContextAssociationLists {
            source_list: vec![0xffff_ffff],
            ..Default::default()
        };
        let bytes = hex!("00 01 00 00 00 00 00 00 ff ff ff ff");
        assert_eq!(lists.to_bytes().unwrap(), bytes);
        let mut decoded = ContextAssociationLists::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, lists);
    }

    #[test]
    fn list_sizes() {
        let lists = ContextAssociationLists {
            system_list: vec![1],
            ..Default::default()
        };
        assert_eq!(lists.to_bytes().unwrap()[..8], hex!("00 00 00 01 00 00 00 00"));
        let lists = ContextAssociationLists {
            vector_list: vec![1],
            ..Default::default()
        };
        assert_eq!(lists.to_bytes().unwrap()[..8], hex!("00 00 00 00 00 01 00 00"));
        let lists = ContextAssociationLists {
            async_list: vec![1],
            ..Default::default()
        };
        assert_eq!(lists.to_bytes().unwrap()[..8], hex!("00 00 00 00 00 00 00 01"));
    }

    #[test]
    fn all_lists_in_order() {
        let lists = ContextAssociationLists {
            source_list: vec![1, 2],
            system_list: vec![3],
            vector_list: vec![4],
            async_list: vec![5, 6],
            async_tag_list_enable: true,
            async_tag_list: vec![7, 8],
        };
        assert_eq!(lists.size_bytes(), 8 + 4 * 8);
        let bytes = hex!(
            "00 02 00 01 00 01 80 02
             00 00 00 01 00 00 00 02 00 00 00 03 00 00 00 04
             00 00 00 05 00 00 00 06 00 00 00 07 00 00 00 08"
        );
        assert_eq!(lists.to_bytes().unwrap(), bytes);
        let mut decoded = ContextAssociationLists::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded, lists);
    }

    #[test]
    fn tags_disabled() {
        let lists = ContextAssociationLists {
            async_list: vec![5],
            async_tag_list_enable: false,
            async_tag_list: vec![7],
            ..Default::default()
        };
        assert_eq!(lists.size_bytes(), 12);
        let bytes = lists.to_bytes().unwrap();
        let mut decoded = ContextAssociationLists::default();
        decoded.unpack(&bytes).unwrap();
        assert!(decoded.async_tag_list.is_empty());
    }

    #[test]
    fn extra_tags_dropped() {
        let lists = ContextAssociationLists {
            async_list: vec![5],
            async_tag_list_enable: true,
            async_tag_list: vec![7, 8, 9],
            ..Default::default()
        };
        assert_eq!(lists.size_bytes(), 16);
        let bytes = hex!("00 00 00 00 00 00 80 01 00 00 00 05 00 00 00 07");
        assert_eq!(lists.to_bytes().unwrap(), bytes);
        let mut decoded = ContextAssociationLists::default();
        decoded.unpack(&bytes).unwrap();
        assert_eq!(decoded.async_tag_list, [7]);
    }

    #[test]
    fn missing_tags() {
        let lists = ContextAssociationLists {
            async_list: vec![5, 6],
            async_tag_list_enable: true,
            async_tag_list: vec![7],
            ..Default::default()
        };
        assert_eq!(
            lists.to_bytes(),
            Err(Error::InconsistentLength {
                declared: 8,
                available: 4
            })
        );
    }

    #[test]
    fn count_overflow() {
        let lists = ContextAssociationLists {
            source_list: vec![0; 256],
            ..Default::default()
        };
        assert_eq!(
            lists.to_bytes(),
            Err(Error::CountOverflow {
                count: 256,
                max: 255
            })
        );
    }

    #[test]
    fn inconsistent_length() {
        let mut lists = ContextAssociationLists::default();
        assert_eq!(
            lists.unpack(&hex!("00 01 00 00 00 00 00 00")),
            Err(Error::InconsistentLength {
                declared: 12,
                available: 8
            })
        );
        assert_eq!(lists, ContextAssociationLists::default());
    }

    #[test]
    fn short_output() {
        let lists = ContextAssociationLists {
            vector_list: vec![1, 2],
            ..Default::default()
        };
        let mut buf = [0xaa; 15];
        assert_eq!(
            lists.pack(&mut buf),
            Err(Error::BufferTooShort {
                required: 16,
                available: 15
            })
        );
        assert_eq!(buf, [0xaa; 15]);
    }
}
