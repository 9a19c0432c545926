//! IANA Definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant for this crate.
//!
//! All types defined hereunder follow the same basic structure. They are
//! newtypes around the raw integer with associated constants for all
//! well-defined values. Since the full range of raw values is allowed,
//! values without a constant can still be represented.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` are implemented to convert from
//! the string codes to the values and back. Types also provide a
//! `compose()` method for appending them in wire format.

use core::fmt;

pub use self::class::Class;
pub use self::digestalg::DigestAlgorithm;
pub use self::rtype::Rtype;
pub use self::secalg::SecurityAlgorithm;
pub use self::tlsa::{
    TlsaCertificateUsage, TlsaMatchingType, TlsaSelector,
};

#[macro_use]
mod macros;

pub mod class;
pub mod digestalg;
pub mod rtype;
pub mod secalg;
pub mod tlsa;

//------------ FromStrError --------------------------------------------------

/// A string could not be converted into an IANA value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FromStrError(pub(crate) ());

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unknown mnemonic")
    }
}

impl std::error::Error for FromStrError {}
