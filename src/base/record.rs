//! Resource records.
//!
//! This module defines [`Ttl`], the time-to-live of a record, and the
//! [`Record`] type that combines record data with a TTL and a class so that
//! a complete resource record can be composed in wire format.
//!
//! The record data types themselves live in the [rdata][crate::rdata]
//! module. Since each of them already knows its owner name and its record
//! type, `Record` only needs to add the remaining header fields.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::rdata::{ComposeRecordData, RecordData};
use super::wire::{Compose, Composer};
use core::fmt;
use core::time::Duration;
use octseq::builder::{infallible, OctetsBuilder};
use std::vec::Vec;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// In wire format, a record consists of the owner name, the record type,
/// the class, the TTL, and the record data preceded by its length. The
/// owner name and type are provided by the record data value, so a record
/// only adds the class and TTL.
///
/// This is the form records take inside a DNSSEC proof: a plain sequence
/// of uncompressed records.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record<Data> {
    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record.
    ttl: Ttl,

    /// The record data. The value also provides owner and type.
    data: Data,
}

impl<Data> Record<Data> {
    /// Creates a new record of class IN from its TTL and record data.
    pub fn new(ttl: Ttl, data: Data) -> Self {
        Self::with_class(Class::IN, ttl, data)
    }

    /// Creates a new record using an explicit class.
    pub fn with_class(class: Class, ttl: Ttl, data: Data) -> Self {
        Record { class, ttl, data }
    }

    /// Returns the record class.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> Data {
        self.data
    }
}

impl<Data: RecordData> Record<Data> {
    /// Returns the owner domain name.
    pub fn owner(&self) -> &Name {
        self.data.owner()
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }
}

impl<Data: ComposeRecordData> Record<Data> {
    /// Returns the length of the record in wire format.
    pub fn compose_len(&self) -> usize {
        usize::from(self.owner().compose_len())
            + usize::from(Rtype::COMPOSE_LEN)
            + usize::from(Class::COMPOSE_LEN)
            + usize::from(Ttl::COMPOSE_LEN)
            + 2
            + usize::from(self.data.rdlen())
    }

    /// Appends the record in wire format to `target`.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.owner().compose(target)?;
        self.rtype().compose(target)?;
        self.class.compose(target)?;
        self.ttl.compose(target)?;
        self.data.compose_len_rdata(target)
    }

    /// Returns the wire format of the record in a newly allocated vec.
    pub fn to_wire_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.compose_len());
        infallible(self.compose(&mut res));
        res
    }
}

//--- From

impl<Data> From<(Ttl, Data)> for Record<Data> {
    fn from((ttl, data): (Ttl, Data)) -> Self {
        Self::new(ttl, data)
    }
}

impl<Data> From<(u32, Data)> for Record<Data> {
    fn from((ttl, data): (u32, Data)) -> Self {
        Self::new(Ttl::from_secs(ttl), data)
    }
}

//------------ Ttl ----------------------------------------------------------

const SECS_PER_MINUTE: u32 = 60;
const SECS_PER_HOUR: u32 = 3600;
const SECS_PER_DAY: u32 = 86400;

/// The time-to-live of a record.
///
/// A TTL is a plain 32 bit number of seconds. Since it has second-level
/// precision only, it is a type of its own rather than a [`Duration`]. Use
/// [`Ttl::from_duration_lossy`] and [`Ttl::into_duration`] to convert
/// between the two. The `Default` value is zero seconds.
///
/// In wire format, the TTL is a 32 bit unsigned integer in network byte
/// order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ttl(u32);

impl Ttl {
    /// A time-to-live of one second.
    pub const SECOND: Ttl = Ttl::from_secs(1);

    /// A time-to-live of one minute.
    pub const MINUTE: Ttl = Ttl::from_mins(1);

    /// A time-to-live of one hour.
    pub const HOUR: Ttl = Ttl::from_hours(1);

    /// A time-to-live of one day.
    pub const DAY: Ttl = Ttl::from_days(1);

    /// A time-to-live of zero seconds.
    pub const ZERO: Ttl = Ttl::from_secs(0);

    /// The largest time-to-live the wire format can express.
    pub const MAX: Ttl = Ttl::from_secs(u32::MAX);

    /// The practical maximum of one week recommended by [RFC 8767].
    ///
    /// [RFC 8767]: https://tools.ietf.org/html/rfc8767#section-4
    pub const CAP: Ttl = Ttl::from_secs(604_800);

    pub const COMPOSE_LEN: u16 = 4;

    /// Creates a new `Ttl` from the specified number of seconds.
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Creates a new `Ttl` from the specified number of minutes.
    ///
    /// # Panics
    ///
    /// The method panics if the number of seconds doesn’t fit into 32 bits.
    #[must_use]
    pub const fn from_mins(minutes: u32) -> Self {
        assert!(minutes <= u32::MAX / SECS_PER_MINUTE);
        Self(minutes * SECS_PER_MINUTE)
    }

    /// Creates a new `Ttl` from the specified number of hours.
    ///
    /// # Panics
    ///
    /// The method panics if the number of seconds doesn’t fit into 32 bits.
    #[must_use]
    pub const fn from_hours(hours: u32) -> Self {
        assert!(hours <= u32::MAX / SECS_PER_HOUR);
        Self(hours * SECS_PER_HOUR)
    }

    /// Creates a new `Ttl` from the specified number of days.
    ///
    /// # Panics
    ///
    /// The method panics if the number of seconds doesn’t fit into 32 bits.
    #[must_use]
    pub const fn from_days(days: u16) -> Self {
        assert!(days as u32 <= u32::MAX / SECS_PER_DAY);
        Self(days as u32 * SECS_PER_DAY)
    }

    /// Creates a new `Ttl` from a [`Duration`].
    ///
    /// Durations longer than [`Ttl::MAX`] are capped and sub-second
    /// precision is dropped.
    ///
    /// ```
    /// use domain_proof::base::Ttl;
    /// use std::time::Duration;
    ///
    /// assert_eq!(
    ///     Ttl::from_duration_lossy(Duration::new(1, 6000)),
    ///     Ttl::from_secs(1)
    /// );
    /// ```
    #[must_use]
    pub const fn from_duration_lossy(duration: Duration) -> Self {
        let secs = duration.as_secs();
        if secs > u32::MAX as u64 {
            Self::MAX
        } else {
            Self(secs as u32)
        }
    }

    /// Returns the time-to-live in seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }

    /// Converts the `Ttl` into a [`Duration`].
    #[must_use]
    pub const fn into_duration(&self) -> Duration {
        Duration::from_secs(self.0 as u64)
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.as_secs().compose(target)
    }
}

//--- From

impl From<u32> for Ttl {
    fn from(secs: u32) -> Self {
        Ttl::from_secs(secs)
    }
}

impl From<Ttl> for Duration {
    fn from(value: Ttl) -> Self {
        value.into_duration()
    }
}

//--- Display

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//============ Testing =======================================================
