//! Record data from [RFC 3596]: AAAA.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::rdata::{ComposeRecordData, RecordData};
use crate::base::wire::Composer;
use core::fmt;
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

/// AAAA record data.
///
/// AAAA records convey the IPv6 address of a host. The wire format is the
/// 128 bit IPv6 address in network byte order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aaaa {
    owner: Name,
    addr: Ipv6Addr,
}

impl Aaaa {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::AAAA;
}

impl Aaaa {
    #[must_use]
    pub fn new(owner: Name, addr: Ipv6Addr) -> Aaaa {
        Aaaa { owner, addr }
    }

    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }
}

//--- From

impl From<(Name, [u8; 16])> for Aaaa {
    fn from((owner, octets): (Name, [u8; 16])) -> Self {
        Self::new(owner, octets.into())
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for Aaaa {
    fn rtype(&self) -> Rtype {
        Aaaa::RTYPE
    }

    fn owner(&self) -> &Name {
        &self.owner
    }
}

impl ComposeRecordData for Aaaa {
    fn rdlen(&self) -> u16 {
        16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.addr.octets())
    }
}

//--- Display

impl fmt::Display for Aaaa {
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
    fn aaaa_compose() {
        let addr = Ipv6Addr::from_str("2001:db8::1").unwrap();
        let rdata = Aaaa::new(Name::from_str("a.").unwrap(), addr);
        test_rdlen(&rdata);
        assert_eq!(rdata.rtype(), Rtype::AAAA);
        assert_eq!(rdata.rtype().to_int(), 28);

        let wire = rdata.to_len_prefixed_vec();
        assert_eq!(&wire[..2], &[0, 16]);
        assert_eq!(&wire[2..], &addr.octets());
        assert_eq!(rdata.to_string(), "2001:db8::1");
    }

    #[test]
    fn aaaa_from_octets_array() {
        let octets = [
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x35,
        ];
        let owner = Name::from_str("ns.example.").unwrap();
        let rdata = Aaaa::from((owner, octets));
        assert_eq!(test_len_prefix(&rdata), octets);
    }
}
