//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::{ComposeRecordData, LongRecordData, RecordData};
use crate::base::wire::Composer;
use core::{fmt, slice};
use std::vec::Vec;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. While it may appear as a single text,
/// in wire format it consists of a sequence of character strings, each of
/// them at most 255 octets long and preceded by an octet with its length.
///
/// The type keeps the text as a single octets sequence and splits it into
/// character strings of 255 octets only when composing. Only the last
/// character string can be shorter.
///
/// Empty data results in empty record data without any character strings.
/// Note that this is not valid TXT record data according to RFC 1035 which
/// requires at least one character string.
///
/// The TXT record type is defined in [RFC 1035, section 3.3.14].
///
/// # `Display`
///
/// The `Display` implementation prints the sequence of character strings in
/// their quoted presentation format separated by a single space.
///
/// [RFC 1035, section 3.3.14]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Txt {
    owner: Name,
    data: Vec<u8>,
}

impl Txt {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::TXT;

    /// The maximum length of a single character string.
    pub const CHUNK_LEN: usize = 255;
}

impl Txt {
    /// Creates new TXT record data from the text.
    ///
    /// Returns an error if the text split into character strings would
    /// exceed the maximum length of record data.
    pub fn new(owner: Name, data: Vec<u8>) -> Result<Self, LongRecordData> {
        LongRecordData::check_append_len(
            data.len(),
            Self::chunk_count(data.len()),
        )?;
        Ok(Txt { owner, data })
    }

    /// Returns the text as a single octets slice.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns an iterator over the character strings of the record data.
    ///
    /// The slices returned by the iterator do not include the length octet.
    pub fn iter_chunks(&self) -> TxtIter {
        TxtIter(self.data.chunks(Self::CHUNK_LEN))
    }

    fn chunk_count(len: usize) -> usize {
        len / Self::CHUNK_LEN + usize::from(len % Self::CHUNK_LEN != 0)
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Txt {
    type Item = &'a [u8];
    type IntoIter = TxtIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_chunks()
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Txt {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Txt")]
        struct Fields {
            owner: Name,
            data: Vec<u8>,
        }

        let fields = Fields::deserialize(deserializer)?;
        Txt::new(fields.owner, fields.data)
            .map_err(serde::de::Error::custom)
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for Txt {
    fn rtype(&self) -> Rtype {
        Txt::RTYPE
    }

    fn owner(&self) -> &Name {
        &self.owner
    }
}

impl ComposeRecordData for Txt {
    fn rdlen(&self) -> u16 {
        // Checked at construction.
        (self.data.len() + Self::chunk_count(self.data.len())) as u16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for chunk in self.iter_chunks() {
            // Chunks are never longer than 255 octets.
            target.append_slice(&[chunk.len() as u8])?;
            target.append_slice(chunk)?;
        }
        Ok(())
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, chunk) in self.iter_chunks().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str("\"")?;
            for &ch in chunk {
                if ch == b'"' || ch == b'\\' {
                    write!(f, "\\{}", ch as char)?;
                } else if ch.is_ascii_graphic() || ch == b' ' {
                    write!(f, "{}", ch as char)?;
                } else {
                    write!(f, "\\{:03}", ch)?;
                }
            }
            f.write_str("\"")?;
        }
        Ok(())
    }
}

//------------ TxtIter -------------------------------------------------------

/// An iterator over the character strings of a TXT record.
#[derive(Clone, Debug)]
pub struct TxtIter<'a>(slice::Chunks<'a, u8>);

impl<'a> Iterator for TxtIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

//============ Testing =======================================================
