//! Record data for the A record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::Composer;
use core::fmt;
use std::net::Ipv4Addr;

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the 32
/// bit IPv4 address in network byte order. The representation file format
/// is the usual dotted notation.
///
/// The A record type is defined in [RFC 1035, section 3.4.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.1
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A {
    owner: Name,
    addr: Ipv4Addr,
}

impl A {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::A;
}

impl A {
    /// Creates a new A record data from an IPv4 address.
    #[must_use]
    pub fn new(owner: Name, addr: Ipv4Addr) -> A {
        A { owner, addr }
    }

    /// Creates a new A record from the IPv4 address components.
    #[must_use]
    pub fn from_octets(owner: Name, a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(owner, Ipv4Addr::new(a, b, c, d))
    }

    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }
}

//--- From

impl From<(Name, [u8; 4])> for A {
    fn from((owner, octets): (Name, [u8; 4])) -> Self {
        Self::new(owner, octets.into())
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for A {
    fn rtype(&self) -> Rtype {
        A::RTYPE
    }

    fn owner(&self) -> &Name {
        &self.owner
    }
}

impl ComposeRecordData for A {
    fn rdlen(&self) -> u16 {
        4
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.addr.octets())
    }
}

//--- Display

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_len_prefix, test_rdlen};
    use core::str::FromStr;

    #[test]
    fn a_compose() {
        let rdata = A::from_octets(Name::from_str("a.").unwrap(), 1, 2, 3, 4);
        test_rdlen(&rdata);
        assert_eq!(rdata.rtype(), Rtype::A);
        assert_eq!(rdata.rdlen(), 4);
        assert_eq!(rdata.to_len_prefixed_vec(), [0, 4, 1, 2, 3, 4]);
        assert_eq!(rdata.to_string(), "1.2.3.4");
    }

    #[test]
    fn a_from_octets_array() {
        let owner = Name::from_str("host.example.").unwrap();
        let rdata = A::from((owner.clone(), [192, 0, 2, 53]));
        assert_eq!(rdata.owner(), &owner);
        assert_eq!(rdata.addr(), Ipv4Addr::new(192, 0, 2, 53));
        assert_eq!(test_len_prefix(&rdata), [192, 0, 2, 53]);
    }
}
