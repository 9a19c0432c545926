//! Record data from [RFC 6698]: TLSA records.
//!
//! [RFC 6698]: https://tools.ietf.org/html/rfc6698

use crate::base::iana::{
    Rtype, TlsaCertificateUsage, TlsaMatchingType, TlsaSelector,
};
use crate::base::name::Name;
use crate::base::rdata::{ComposeRecordData, LongRecordData, RecordData};
use crate::base::wire::Composer;
use crate::utils::base16;
use core::fmt;
use std::vec::Vec;

//------------ Tlsa ---------------------------------------------------------

/// TLSA record data.
///
/// A TLSA record associates a TLS server certificate or public key with
/// the domain name where the record is found, forming a “TLSA certificate
/// association”. The wire format is three octets for the certificate
/// usage, the selector, and the matching type followed by the certificate
/// association data.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tlsa {
    owner: Name,
    cert_usage: TlsaCertificateUsage,
    selector: TlsaSelector,
    matching_type: TlsaMatchingType,
    data: Vec<u8>,
}

impl Tlsa {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::TLSA;

    const FIXED_LEN: u16 = TlsaCertificateUsage::COMPOSE_LEN
        + TlsaSelector::COMPOSE_LEN
        + TlsaMatchingType::COMPOSE_LEN;
}

impl Tlsa {
    /// Creates new TLSA record data from its components.
    pub fn new(
        owner: Name,
        cert_usage: TlsaCertificateUsage,
        selector: TlsaSelector,
        matching_type: TlsaMatchingType,
        data: Vec<u8>,
    ) -> Result<Self, LongRecordData> {
        LongRecordData::check_append_len(
            usize::from(Self::FIXED_LEN),
            data.len(),
        )?;
        Ok(Tlsa {
            owner,
            cert_usage,
            selector,
            matching_type,
            data,
        })
    }

    /// Get the certificate usage field.
    pub fn cert_usage(&self) -> TlsaCertificateUsage {
        self.cert_usage
    }

    /// Get the selector field.
    pub fn selector(&self) -> TlsaSelector {
        self.selector
    }

    /// Get the matching type field.
    pub fn matching_type(&self) -> TlsaMatchingType {
        self.matching_type
    }

    /// Get the certificate association data field.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tlsa {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Tlsa")]
        struct Fields {
            owner: Name,
            cert_usage: TlsaCertificateUsage,
            selector: TlsaSelector,
            matching_type: TlsaMatchingType,
            data: Vec<u8>,
        }

        let fields = Fields::deserialize(deserializer)?;
        Tlsa::new(
            fields.owner,
            fields.cert_usage,
            fields.selector,
            fields.matching_type,
            fields.data,
        )
        .map_err(serde::de::Error::custom)
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for Tlsa {
    fn rtype(&self) -> Rtype {
        Tlsa::RTYPE
    }

    fn owner(&self) -> &Name {
        &self.owner
    }
}

impl ComposeRecordData for Tlsa {
    fn rdlen(&self) -> u16 {
        // Checked at construction.
        Self::FIXED_LEN + self.data.len() as u16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.cert_usage.compose(target)?;
        self.selector.compose(target)?;
        self.matching_type.compose(target)?;
        target.append_slice(&self.data)
    }
}

//--- Display

impl fmt::Display for Tlsa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.cert_usage.to_int(),
            self.selector.to_int(),
            self.matching_type.to_int()
        )?;
        base16::display(&self.data, f)
    }
}

//============ Testing =======================================================
