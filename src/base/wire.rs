//! Creating data in wire format.
//!
//! DNS data is transmitted in network byte order, i.e., all multi-octet
//! integers are big-endian. This module provides the two ways of writing
//! such data used throughout the crate: the [`Compose`] trait that appends
//! values to an [`OctetsBuilder`], and a handful of functions that write
//! into a pre-sized buffer at a given offset.

use octseq::builder::{OctetsBuilder, Truncate};
use std::vec::Vec;

//------------ Big-endian writers --------------------------------------------

/// Writes `value` in network byte order into `buf` starting at `offset`.
///
/// # Panics
///
/// The function panics if `buf` is shorter than `offset + 2`.
pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// Writes `value` in network byte order into `buf` starting at `offset`.
///
/// # Panics
///
/// The function panics if `buf` is shorter than `offset + 4`.
pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

//------------ Length-prefixed framing ---------------------------------------

/// Allocates a buffer for `len` octets of data prefixed by their length.
///
/// The returned buffer has room for `len + 2` octets. It already contains
/// `len` in network byte order as its first two octets, so the caller
/// continues at offset 2 by appending the data.
pub fn len_prefixed_buf(len: u16) -> Vec<u8> {
    let mut buf = Vec::with_capacity(usize::from(len) + 2);
    buf.extend_from_slice(&len.to_be_bytes());
    buf
}

/// Composes some data prefixed by its length.
///
/// Two octets are reserved, `op` is run to append the data, and the length
/// of whatever `op` appended is then written into the reserved octets.
///
/// # Panics
///
/// The function panics if the length of the composed data is greater than
/// 0xFFFF. All record data types check their length upon creation, so this
/// can only happen if `op` appends more than its data.
pub fn compose_len_prefixed<Target, F>(
    target: &mut Target,
    op: F,
) -> Result<(), Target::AppendError>
where
    Target: Composer + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), Target::AppendError>,
{
    target.append_slice(&[0; 2])?;
    let pos = target.as_ref().len();
    match op(target) {
        Ok(_) => {
            let len = u16::try_from(target.as_ref().len() - pos)
                .expect("long data");
            write_u16(target.as_mut(), pos - 2, len);
            Ok(())
        }
        Err(err) => {
            target.truncate(pos - 2);
            Err(err)
        }
    }
}

//------------ Composer ------------------------------------------------------

/// A buffer that wire format data can be composed into.
///
/// In addition to being an octets builder, the buffer needs to allow
/// access to what has been composed so far so that length prefixes can be
/// filled in after the fact.
pub trait Composer: OctetsBuilder + AsRef<[u8]> + AsMut<[u8]> + Truncate {}

impl Composer for Vec<u8> {}

impl<const N: usize> Composer for octseq::array::Array<N> {}

//------------ Compose -------------------------------------------------------

/// A type that can be appended to an octets builder in wire format.
pub trait Compose {
    /// The length of the wire format representation.
    ///
    /// This is only meaningful for types with a fixed length and zero
    /// otherwise.
    const COMPOSE_LEN: u16 = 0;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);

//============ Testing =======================================================
