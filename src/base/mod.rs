//! Basic functionality.
//!
//! This module provides the fundamental types for building DNS records in
//! wire format.
//!
//! # Domain Names
//!
//! Domain names are represented by [`Name`]. A name is checked upon
//! creation to be absolute and encodable, so composing it never fails.
//! See the [name] module for details.
//!
//! # Resource Records
//!
//! The [`Ttl`] type represents the time-to-live of a record while
//! [`Record`] combines record data with a TTL and class into a complete
//! resource record. The traits for record data are defined in [rdata].
//! Types for all supported record types live in the top-level
//! [rdata][crate::rdata] module.
//!
//! # IANA-registered Parameters
//!
//! Types for the parameters of records that are registered with IANA, such
//! as the record type or the DNSSEC algorithm numbers, live in [iana].
//!
//! # Wire Format
//!
//! The [wire] module contains the helpers for writing integers in network
//! byte order and for framing data with a length prefix.

pub use self::name::Name;
pub use self::record::{Record, Ttl};

pub mod iana;
pub mod name;
pub mod rdata;
pub mod record;
pub mod wire;
