//! Resource record data.
//!
//! Each resource record type has its own definition of the content and
//! formatting of its data. This module provides the basics for implementing
//! specific types for this record data. The concrete implementations for
//! the supported record types live in the top-level [rdata][crate::rdata]
//! module.
//!
//! There are two traits herein. Any type that represents record data
//! implements [`RecordData`] which provides the record type and the owner
//! name. If the data can be composed in wire format, the type in addition
//! implements [`ComposeRecordData`].

use super::iana::Rtype;
use super::name::Name;
use super::wire::{len_prefixed_buf, Compose, Composer};
use core::fmt;
use octseq::builder::infallible;
use std::vec::Vec;

//----------- RecordData -----------------------------------------------------

/// A type that represents record data.
///
/// Unlike in a general purpose DNS library, the record data types of this
/// crate carry their owner name. Proofs are built from individual records,
/// so a record type is never used without an owner.
pub trait RecordData {
    /// Returns the record type associated with this record data instance.
    fn rtype(&self) -> Rtype;

    /// Returns the domain name this record data is found at.
    fn owner(&self) -> &Name;
}

impl<'a, T: RecordData> RecordData for &'a T {
    fn rtype(&self) -> Rtype {
        (*self).rtype()
    }

    fn owner(&self) -> &Name {
        (*self).owner()
    }
}

//----------- ComposeRecordData ----------------------------------------------

/// A type of record data that can be composed in wire format.
pub trait ComposeRecordData: RecordData {
    /// Returns the length of the record data in wire format.
    ///
    /// Record data is limited to 65,535 octets. All record data types of
    /// this crate enforce this limit when they are created.
    fn rdlen(&self) -> u16;

    /// Appends the wire format of the record data to `target`.
    ///
    /// This is only the data itself, without the length prefix.
    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;

    /// Appends the record data prefixed by its length to `target`.
    ///
    /// This is the form record data takes in a resource record. The length
    /// prefix is the RDLENGTH field of the record.
    fn compose_len_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.rdlen().compose(target)?;
        self.compose_rdata(target)
    }

    /// Returns the length-prefixed record data in a newly allocated vec.
    ///
    /// The first two octets of the returned vec contain the length of the
    /// remainder in network byte order.
    fn to_len_prefixed_vec(&self) -> Vec<u8> {
        let mut res = len_prefixed_buf(self.rdlen());
        infallible(self.compose_rdata(&mut res));
        res
    }
}

impl<'a, T: ComposeRecordData> ComposeRecordData for &'a T {
    fn rdlen(&self) -> u16 {
        (*self).rdlen()
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose_rdata(target)
    }
}

//------------ LongRecordData ------------------------------------------------

/// The octets sequence to be used for record data is too long.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongRecordData();

impl LongRecordData {
    /// The maximum length of record data in wire format.
    pub const MAX_LEN: usize = 0xFFFF;

    /// Checks whether record data of `len` octets is acceptable.
    ///
    /// On success, returns the length converted into the type of the
    /// RDLENGTH field.
    pub fn check_len(len: usize) -> Result<u16, Self> {
        match u16::try_from(len) {
            Ok(len) => Ok(len),
            Err(_) => {
                trace!("rejected record data of {} octets", len);
                Err(LongRecordData())
            }
        }
    }

    /// Checks the length of record data consisting of a fixed part and a
    /// variable part.
    pub fn check_append_len(
        fixed: usize,
        extra: usize,
    ) -> Result<u16, Self> {
        Self::check_len(fixed.checked_add(extra).ok_or(LongRecordData())?)
    }
}

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("record data too long")
    }
}

impl std::error::Error for LongRecordData {}

//============ Testing ======================================================
