//! Wire-format DNS resource records for building DNSSEC proofs.
//!
//! This crate provides the data model used when DNSSEC proofs are
//! transferred between hosts: validated domain names, time-to-live values,
//! and a fixed set of record types that can be serialized into their
//! RFC-defined wire format.
//!
//! The crate is split into two modules:
//!
//! * [base] contains the fundamental types: domain names, TTLs, IANA
//!   registry values, and the traits and helpers for composing data in
//!   wire format, and
//! * [rdata] contains the record types themselves.
//!
//! The [utils] module has the text encodings used when displaying binary
//! record data.
//!
//! Only the encoding direction is implemented. Parsing of received records,
//! validation of signatures, and assembly of complete DNS messages are left
//! to other crates.
//!
//! # Example
//!
//! ```
//! use domain_proof::base::Name;
//! use domain_proof::base::rdata::ComposeRecordData;
//! use domain_proof::rdata::A;
//!
//! let owner: Name = "a.".parse().unwrap();
//! let rdata = A::from_octets(owner, 1, 2, 3, 4);
//! assert_eq!(rdata.to_len_prefixed_vec(), [0, 4, 1, 2, 3, 4]);
//! ```
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serialization and deserialization of names, TTLs,
//!   IANA types, and record data via
//!   [serde](https://serde.rs/).
//! * `tracing`: Emits trace-level events via the
//!   [tracing](https://github.com/tokio-rs/tracing) crate when input is
//!   rejected.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod base;
pub mod rdata;
pub mod utils;
