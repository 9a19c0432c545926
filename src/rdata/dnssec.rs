//! Record data from [RFC 4034]: DNSKEY, RRSIG, and DS records.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::{DigestAlgorithm, Rtype, SecurityAlgorithm};
use crate::base::name::Name;
use crate::base::rdata::{ComposeRecordData, LongRecordData, RecordData};
use crate::base::record::Ttl;
use crate::base::wire::{write_u16, write_u32, Compose, Composer};
use crate::utils::{base16, base64};
use core::fmt;
use std::vec::Vec;

//------------ Dnskey --------------------------------------------------------

/// DNSKEY record data.
///
/// A DNSKEY record holds a public key of a zone. The keys are used to
/// verify the signatures in RRSIG records. The wire format is the 16 bit
/// flags field, the protocol octet that is always 3, the algorithm of the
/// key, and the key itself.
///
/// The DNSKEY record type is defined in [RFC 4034, section 2].
///
/// [RFC 4034, section 2]: https://tools.ietf.org/html/rfc4034#section-2
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dnskey {
    owner: Name,
    flags: u16,
    protocol: u8,
    algorithm: SecurityAlgorithm,
    public_key: Vec<u8>,
}

impl Dnskey {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::DNSKEY;

    const FIXED_LEN: u16 = u16::COMPOSE_LEN
        + u8::COMPOSE_LEN
        + SecurityAlgorithm::COMPOSE_LEN;
}

impl Dnskey {
    pub fn new(
        owner: Name,
        flags: u16,
        protocol: u8,
        algorithm: SecurityAlgorithm,
        public_key: Vec<u8>,
    ) -> Result<Self, LongRecordData> {
        LongRecordData::check_append_len(
            usize::from(Self::FIXED_LEN),
            public_key.len(),
        )?;
        Ok(Dnskey {
            owner,
            flags,
            protocol,
            algorithm,
            public_key,
        })
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn algorithm(&self) -> SecurityAlgorithm {
        self.algorithm
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    pub fn into_public_key(self) -> Vec<u8> {
        self.public_key
    }

    /// Returns whether the Revoke flag is set.
    ///
    /// See [RFC 5011, Section 3].
    ///
    /// [RFC 5011, Section 3]: https://tools.ietf.org/html/rfc5011#section-3
    pub fn is_revoked(&self) -> bool {
        self.flags & 0b0000_0000_1000_0000 != 0
    }

    /// Returns whether the the Secure Entry Point (SEP) flag is set.
    ///
    /// See [RFC 4034, Section 2.1.1]:
    ///
    /// > This flag is only intended to be a hint to zone signing or
    /// > debugging software as to the intended use of this DNSKEY record;
    /// > validators MUST NOT alter their behavior during the signature
    /// > validation process in any way based on the setting of this bit.
    ///
    /// [RFC 4034, Section 2.1.1]: https://tools.ietf.org/html/rfc4034#section-2.1.1
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & 0b0000_0000_0000_0001 != 0
    }

    /// Returns whether the Zone Key flag is set.
    ///
    /// If the flag is not set, the key MUST NOT be used to verify RRSIGs that
    /// cover RRSETs. See [RFC 4034, Section 2.1.1].
    ///
    /// [RFC 4034, Section 2.1.1]: https://tools.ietf.org/html/rfc4034#section-2.1.1
    pub fn is_zone_key(&self) -> bool {
        self.flags & 0b0000_0001_0000_0000 != 0
    }

    /// Returns the key tag for this DNSKEY data.
    ///
    /// The key tag is calculated as described in [RFC 4034, Appendix B].
    ///
    /// [RFC 4034, Appendix B]: https://tools.ietf.org/html/rfc4034#appendix-B
    pub fn key_tag(&self) -> u16 {
        if self.algorithm == SecurityAlgorithm::RSAMD5 {
            // The key tag is third-to-last and second-to-last octets of the
            // key as a big-endian u16. If we don’t have enough octets in the
            // key, we return 0.
            let len = self.public_key.len();
            if len > 2 {
                u16::from_be_bytes([
                    self.public_key[len - 3],
                    self.public_key[len - 2],
                ])
            } else {
                0
            }
        } else {
            // Treat record data as a octet sequence. Add octets at even
            // indexes shifted left by 8 bits, octets at odd indexes as they
            // are. The key starts at index 4.
            let mut res = u32::from(self.flags);
            res += u32::from(self.protocol) << 8;
            res += u32::from(self.algorithm.to_int());
            for (idx, &octet) in self.public_key.iter().enumerate() {
                if idx % 2 == 0 {
                    res += u32::from(octet) << 8;
                } else {
                    res += u32::from(octet);
                }
            }
            res += (res >> 16) & 0xFFFF;
            (res & 0xFFFF) as u16
        }
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dnskey {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Dnskey")]
        struct Fields {
            owner: Name,
            flags: u16,
            protocol: u8,
            algorithm: SecurityAlgorithm,
            public_key: Vec<u8>,
        }

        let fields = Fields::deserialize(deserializer)?;
        Dnskey::new(
            fields.owner,
            fields.flags,
            fields.protocol,
            fields.algorithm,
            fields.public_key,
        )
        .map_err(serde::de::Error::custom)
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for Dnskey {
    fn rtype(&self) -> Rtype {
        Dnskey::RTYPE
    }

    fn owner(&self) -> &Name {
        &self.owner
    }
}

impl ComposeRecordData for Dnskey {
    fn rdlen(&self) -> u16 {
        // Checked at construction.
        Self::FIXED_LEN + self.public_key.len() as u16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.flags.compose(target)?;
        self.protocol.compose(target)?;
        self.algorithm.compose(target)?;
        target.append_slice(&self.public_key)
    }
}

//--- Display

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} ", self.flags, self.protocol, self.algorithm)?;
        base64::display(&self.public_key, f)
    }
}

//------------ Rrsig ---------------------------------------------------------

/// RRSIG record data.
///
/// An RRSIG record holds the signature over a record set along with the
/// information needed to verify it. The fixed part of the record data is
/// 18 octets long and is followed by the uncompressed name of the signer
/// and the signature itself.
///
/// Expiration and inception are kept as the 32 bit serial numbers that
/// appear in the wire format.
///
/// The RRSIG record type is defined in [RFC 4034, section 3].
///
/// [RFC 4034, section 3]: https://tools.ietf.org/html/rfc4034#section-3
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rrsig {
    owner: Name,
    type_covered: Rtype,
    algorithm: SecurityAlgorithm,
    labels: u8,
    original_ttl: Ttl,
    expiration: u32,
    inception: u32,
    key_tag: u16,
    signer_name: Name,
    signature: Vec<u8>,
}

impl Rrsig {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::RRSIG;

    /// The length of the fixed part of the record data.
    const FIXED_LEN: usize = 18;
}

impl Rrsig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: Name,
        type_covered: Rtype,
        algorithm: SecurityAlgorithm,
        labels: u8,
        original_ttl: Ttl,
        expiration: u32,
        inception: u32,
        key_tag: u16,
        signer_name: Name,
        signature: Vec<u8>,
    ) -> Result<Self, LongRecordData> {
        LongRecordData::check_append_len(
            Self::FIXED_LEN + usize::from(signer_name.compose_len()),
            signature.len(),
        )?;
        Ok(Rrsig {
            owner,
            type_covered,
            algorithm,
            labels,
            original_ttl,
            expiration,
            inception,
            key_tag,
            signer_name,
            signature,
        })
    }

    pub fn type_covered(&self) -> Rtype {
        self.type_covered
    }

    pub fn algorithm(&self) -> SecurityAlgorithm {
        self.algorithm
    }

    pub fn labels(&self) -> u8 {
        self.labels
    }

    pub fn original_ttl(&self) -> Ttl {
        self.original_ttl
    }

    pub fn expiration(&self) -> u32 {
        self.expiration
    }

    pub fn inception(&self) -> u32 {
        self.inception
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn signer_name(&self) -> &Name {
        &self.signer_name
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Returns the fixed part of the record data in wire format.
    fn fixed_part(&self) -> [u8; Self::FIXED_LEN] {
        let mut buf = [0u8; Self::FIXED_LEN];
        write_u16(&mut buf, 0, self.type_covered.to_int());
        buf[2] = self.algorithm.to_int();
        buf[3] = self.labels;
        write_u32(&mut buf, 4, self.original_ttl.as_secs());
        write_u32(&mut buf, 8, self.expiration);
        write_u32(&mut buf, 12, self.inception);
        write_u16(&mut buf, 16, self.key_tag);
        buf
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rrsig {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Rrsig")]
        struct Fields {
            owner: Name,
            type_covered: Rtype,
            algorithm: SecurityAlgorithm,
            labels: u8,
            original_ttl: Ttl,
            expiration: u32,
            inception: u32,
            key_tag: u16,
            signer_name: Name,
            signature: Vec<u8>,
        }

        let fields = Fields::deserialize(deserializer)?;
        Rrsig::new(
            fields.owner,
            fields.type_covered,
            fields.algorithm,
            fields.labels,
            fields.original_ttl,
            fields.expiration,
            fields.inception,
            fields.key_tag,
            fields.signer_name,
            fields.signature,
        )
        .map_err(serde::de::Error::custom)
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for Rrsig {
    fn rtype(&self) -> Rtype {
        Rrsig::RTYPE
    }

    fn owner(&self) -> &Name {
        &self.owner
    }
}

impl ComposeRecordData for Rrsig {
    fn rdlen(&self) -> u16 {
        // Checked at construction.
        (Self::FIXED_LEN
            + usize::from(self.signer_name.compose_len())
            + self.signature.len()) as u16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.fixed_part())?;
        self.signer_name.compose(target)?;
        target.append_slice(&self.signature)
    }
}

//--- Display

impl fmt::Display for Rrsig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} ",
            self.type_covered,
            self.algorithm,
            self.labels,
            self.original_ttl,
            self.expiration,
            self.inception,
            self.key_tag,
            self.signer_name
        )?;
        base64::display(&self.signature, f)
    }
}

//------------ Ds -----------------------------------------------------------

/// DS record data.
///
/// A DS record lives in the parent zone and refers to a DNSKEY of the
/// child zone through the key’s tag, algorithm, and a digest of the key.
///
/// The DS record type is defined in [RFC 4034, section 5].
///
/// [RFC 4034, section 5]: https://tools.ietf.org/html/rfc4034#section-5
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ds {
    owner: Name,
    key_tag: u16,
    algorithm: SecurityAlgorithm,
    digest_type: DigestAlgorithm,
    digest: Vec<u8>,
}

impl Ds {
    /// The rtype of this record data type.
    pub(crate) const RTYPE: Rtype = Rtype::DS;

    const FIXED_LEN: u16 = u16::COMPOSE_LEN
        + SecurityAlgorithm::COMPOSE_LEN
        + DigestAlgorithm::COMPOSE_LEN;
}

impl Ds {
    pub fn new(
        owner: Name,
        key_tag: u16,
        algorithm: SecurityAlgorithm,
        digest_type: DigestAlgorithm,
        digest: Vec<u8>,
    ) -> Result<Self, LongRecordData> {
        LongRecordData::check_append_len(
            usize::from(Self::FIXED_LEN),
            digest.len(),
        )?;
        Ok(Ds {
            owner,
            key_tag,
            algorithm,
            digest_type,
            digest,
        })
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn algorithm(&self) -> SecurityAlgorithm {
        self.algorithm
    }

    pub fn digest_type(&self) -> DigestAlgorithm {
        self.digest_type
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn into_digest(self) -> Vec<u8> {
        self.digest
    }
}

//--- Deserialize

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ds {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(rename = "Ds")]
        struct Fields {
            owner: Name,
            key_tag: u16,
            algorithm: SecurityAlgorithm,
            digest_type: DigestAlgorithm,
            digest: Vec<u8>,
        }

        let fields = Fields::deserialize(deserializer)?;
        Ds::new(
            fields.owner,
            fields.key_tag,
            fields.algorithm,
            fields.digest_type,
            fields.digest,
        )
        .map_err(serde::de::Error::custom)
    }
}

//--- RecordData and ComposeRecordData

impl RecordData for Ds {
    fn rtype(&self) -> Rtype {
        Ds::RTYPE
    }

    fn owner(&self) -> &Name {
        &self.owner
    }
}

impl ComposeRecordData for Ds {
    fn rdlen(&self) -> u16 {
        // Checked at construction.
        Self::FIXED_LEN + self.digest.len() as u16
    }

    fn compose_rdata<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.key_tag.compose(target)?;
        self.algorithm.compose(target)?;
        self.digest_type.compose(target)?;
        target.append_slice(&self.digest)
    }
}

//--- Display

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.key_tag, self.algorithm, self.digest_type
        )?;
        base16::display(&self.digest, f)
    }
}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::test::{test_len_prefix, test_rdlen};
    use core::str::FromStr;

    /// The key of `dskey.example.com.` from RFC 4034, section 5.4.
    const RFC4034_KEY: [u8; 130] = [
        0x01, 0x03, 0x9e, 0x8a, 0x24, 0x74, 0x18, 0xe3, 0x18, 0x90,
        0x3b, 0x21, 0x5a, 0x84, 0x8a, 0xcf, 0xd5, 0xf3, 0x7f, 0x02,
        0x6b, 0xd4, 0x06, 0x2d, 0xb2, 0x6c, 0x77, 0x4c, 0x69, 0x09,
        0x68, 0xd5, 0xd5, 0x6d, 0xf8, 0xbf, 0xda, 0x91, 0xe6, 0xf3,
        0x6d, 0x9a, 0x27, 0x98, 0x88, 0xf4, 0x13, 0x33, 0x35, 0x7c,
        0x5e, 0x60, 0x29, 0x99, 0x0d, 0x10, 0xfd, 0xf5, 0x66, 0x30,
        0x62, 0xa5, 0x12, 0x76, 0x33, 0x26, 0x98, 0x0a, 0x61, 0x5d,
        0xdb, 0xf1, 0x7a, 0x05, 0xdd, 0xfc, 0xce, 0x7e, 0x5f, 0xb3,
        0xab, 0xcc, 0xa0, 0x5a, 0x31, 0xb0, 0x95, 0x74, 0x52, 0xd4,
        0x52, 0x1e, 0x83, 0x87, 0x07, 0x89, 0x06, 0x31, 0x15, 0xbf,
        0x97, 0xf6, 0xc3, 0x08, 0xcc, 0xf5, 0x7c, 0xdc, 0x9c, 0xe7,
        0xfe, 0x10, 0xf6, 0xed, 0x1b, 0xd0, 0xcc, 0x06, 0x60, 0x03,
        0x8c, 0x50, 0xdc, 0xdb, 0x0f, 0xeb, 0x96, 0x3c, 0x2f, 0x17,
    ];

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn dnskey_compose() {
        let rdata = Dnskey::new(
            name("example.com."),
            257,
            3,
            SecurityAlgorithm::ED25519,
            b"key0".to_vec(),
        )
        .unwrap();
        test_rdlen(&rdata);
        assert_eq!(rdata.rtype(), Rtype::DNSKEY);
        assert_eq!(
            test_len_prefix(&rdata),
            [0x01, 0x01, 3, 15, b'k', b'e', b'y', b'0']
        );
        assert_eq!(rdata.to_len_prefixed_vec()[..2], [0, 8]);
        assert_eq!(rdata.to_string(), "257 3 15 a2V5MA==");
    }

    #[test]
    fn dnskey_flags() {
        let ksk = Dnskey::new(
            name("example.com."),
            257,
            3,
            SecurityAlgorithm::ED25519,
            Vec::new(),
        )
        .unwrap();
        assert!(ksk.is_zone_key());
        assert!(ksk.is_secure_entry_point());
        assert!(!ksk.is_revoked());

        let revoked = Dnskey::new(
            name("example.com."),
            385,
            3,
            SecurityAlgorithm::ED25519,
            Vec::new(),
        )
        .unwrap();
        assert!(revoked.is_revoked());

        let other = Dnskey::new(
            name("example.com."),
            0,
            3,
            SecurityAlgorithm::ED25519,
            Vec::new(),
        )
        .unwrap();
        assert!(!other.is_zone_key());
        assert!(!other.is_secure_entry_point());
    }

    #[test]
    fn dnskey_key_tag() {
        let rdata = Dnskey::new(
            name("dskey.example.com."),
            256,
            3,
            SecurityAlgorithm::RSASHA1,
            RFC4034_KEY.to_vec(),
        )
        .unwrap();
        assert_eq!(rdata.key_tag(), 60485);

        let rdata = Dnskey::new(
            name("example.com."),
            257,
            3,
            SecurityAlgorithm::ED25519,
            (0..32).collect(),
        )
        .unwrap();
        assert_eq!(rdata.key_tag(), 62736);
    }

    #[test]
    fn dnskey_key_tag_rsamd5() {
        let rdata = Dnskey::new(
            name("example.com."),
            256,
            3,
            SecurityAlgorithm::RSAMD5,
            vec![1, 2, 0x12, 0x34, 5],
        )
        .unwrap();
        assert_eq!(rdata.key_tag(), 0x1234);

        let rdata = Dnskey::new(
            name("example.com."),
            256,
            3,
            SecurityAlgorithm::RSAMD5,
            vec![1, 2],
        )
        .unwrap();
        assert_eq!(rdata.key_tag(), 0);
    }

    #[test]
    fn dnskey_too_long() {
        assert!(Dnskey::new(
            name("example.com."),
            256,
            3,
            SecurityAlgorithm::ED25519,
            vec![0; 0xFFFB],
        )
        .is_ok());
        assert!(Dnskey::new(
            name("example.com."),
            256,
            3,
            SecurityAlgorithm::ED25519,
            vec![0; 0xFFFC],
        )
        .is_err());
    }

    #[test]
    fn rrsig_compose() {
        let rdata = Rrsig::new(
            name("host.example.com."),
            Rtype::A,
            SecurityAlgorithm::RSASHA1,
            3,
            Ttl::from_secs(86400),
            0x4148_5b0f,
            0x4138_0d0f,
            2642,
            name("Example.com."),
            vec![0xde, 0xad, 0xbe, 0xef],
        )
        .unwrap();
        test_rdlen(&rdata);
        assert_eq!(rdata.rtype(), Rtype::RRSIG);
        assert_eq!(rdata.rdlen(), 18 + 13 + 4);

        let wire = test_len_prefix(&rdata);
        assert_eq!(
            wire,
            b"\x00\x01\x05\x03\x00\x01\x51\x80\
              \x41\x48\x5b\x0f\x41\x38\x0d\x0f\x0a\x52\
              \x07example\x03com\x00\
              \xde\xad\xbe\xef"
        );
        assert_eq!(
            rdata.to_string(),
            "A 5 3 86400 1095260943 1094192399 2642 Example.com. 3q2+7w=="
        );
    }

    #[test]
    fn rrsig_accessors() {
        let rdata = Rrsig::new(
            name("example.com."),
            Rtype::DNSKEY,
            SecurityAlgorithm::ED25519,
            2,
            Ttl::HOUR,
            20,
            10,
            12345,
            name("example.com."),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(rdata.owner(), &name("example.com."));
        assert_eq!(rdata.type_covered(), Rtype::DNSKEY);
        assert_eq!(rdata.algorithm(), SecurityAlgorithm::ED25519);
        assert_eq!(rdata.labels(), 2);
        assert_eq!(rdata.original_ttl(), Ttl::HOUR);
        assert_eq!(rdata.expiration(), 20);
        assert_eq!(rdata.inception(), 10);
        assert_eq!(rdata.key_tag(), 12345);
        assert_eq!(rdata.signer_name(), &name("example.com."));
        assert!(rdata.signature().is_empty());
        assert_eq!(rdata.rdlen(), 18 + 13);
    }

    #[test]
    fn rrsig_too_long() {
        // The fixed part plus the root signer name leave 0xFFEC octets.
        let make = |len| {
            Rrsig::new(
                name("."),
                Rtype::A,
                SecurityAlgorithm::ED25519,
                0,
                Ttl::ZERO,
                0,
                0,
                0,
                Name::root(),
                vec![0; len],
            )
        };
        assert!(make(0xFFEC).is_ok());
        assert!(make(0xFFED).is_err());
    }

    #[test]
    fn ds_compose() {
        let digest = vec![
            0x2b, 0xb1, 0x83, 0xaf, 0x5f, 0x22, 0x58, 0x81, 0x79, 0xa5,
            0x3b, 0x0a, 0x98, 0x63, 0x1f, 0xad, 0x1a, 0x29, 0x21, 0x18,
        ];
        let rdata = Ds::new(
            name("dskey.example.com."),
            60485,
            SecurityAlgorithm::RSASHA1,
            DigestAlgorithm::SHA1,
            digest.clone(),
        )
        .unwrap();
        test_rdlen(&rdata);
        assert_eq!(rdata.rtype(), Rtype::DS);
        assert_eq!(rdata.digest(), digest.as_slice());

        let wire = test_len_prefix(&rdata);
        assert_eq!(wire[..4], [0xec, 0x45, 5, 1]);
        assert_eq!(wire[4..], digest);
        assert_eq!(
            rdata.to_string(),
            "60485 5 1 2BB183AF5F22588179A53B0A98631FAD1A292118"
        );
    }

    #[test]
    fn ds_too_long() {
        let make = |len| {
            Ds::new(
                name("example.com."),
                1,
                SecurityAlgorithm::ED25519,
                DigestAlgorithm::SHA256,
                vec![0; len],
            )
        };
        assert!(make(0xFFFB).is_ok());
        assert!(make(0xFFFC).is_err());
    }

    #[cfg(feature = "serde")]
    fn octets_tokens(data: &[u8]) -> Vec<serde_test::Token> {
        use serde_test::Token;

        let mut tokens = vec![Token::Seq {
            len: Some(data.len()),
        }];
        tokens.extend(data.iter().map(|&octet| Token::U8(octet)));
        tokens.push(Token::SeqEnd);
        tokens
    }

    #[cfg(feature = "serde")]
    fn dnskey_tokens(public_key: &[u8]) -> Vec<serde_test::Token> {
        use serde_test::Token;

        let mut tokens = vec![
            Token::Struct {
                name: "Dnskey",
                len: 5,
            },
            Token::Str("owner"),
            Token::Str("example.com."),
            Token::Str("flags"),
            Token::U16(257),
            Token::Str("protocol"),
            Token::U8(3),
            Token::Str("algorithm"),
            Token::U8(15),
            Token::Str("public_key"),
        ];
        tokens.extend(octets_tokens(public_key));
        tokens.push(Token::StructEnd);
        tokens
    }

    #[cfg(feature = "serde")]
    #[test]
    fn dnskey_ser_de() {
        let rdata = Dnskey::new(
            name("example.com."),
            257,
            3,
            SecurityAlgorithm::ED25519,
            b"key".to_vec(),
        )
        .unwrap();
        serde_test::assert_tokens(&rdata, &dnskey_tokens(b"key"));
        serde_test::assert_de_tokens_error::<Dnskey>(
            &dnskey_tokens(&[0; 0xFFFC]),
            "record data too long",
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rrsig_ser_de() {
        use serde_test::Token;

        let tokens = |signature: &[u8]| {
            let mut tokens = vec![
                Token::Struct {
                    name: "Rrsig",
                    len: 10,
                },
                Token::Str("owner"),
                Token::Str("example.com."),
                Token::Str("type_covered"),
                Token::U16(1),
                Token::Str("algorithm"),
                Token::U8(15),
                Token::Str("labels"),
                Token::U8(2),
                Token::Str("original_ttl"),
                Token::NewtypeStruct { name: "Ttl" },
                Token::U32(3600),
                Token::Str("expiration"),
                Token::U32(20),
                Token::Str("inception"),
                Token::U32(10),
                Token::Str("key_tag"),
                Token::U16(12345),
                Token::Str("signer_name"),
                Token::Str("example.com."),
                Token::Str("signature"),
            ];
            tokens.extend(octets_tokens(signature));
            tokens.push(Token::StructEnd);
            tokens
        };

        let rdata = Rrsig::new(
            name("example.com."),
            Rtype::A,
            SecurityAlgorithm::ED25519,
            2,
            Ttl::HOUR,
            20,
            10,
            12345,
            name("example.com."),
            vec![1, 2, 3],
        )
        .unwrap();
        serde_test::assert_tokens(&rdata, &tokens(&[1, 2, 3]));

        // 18 octets fixed part and 13 octets signer name.
        serde_test::assert_de_tokens_error::<Rrsig>(
            &tokens(&[0; 0xFFFF - 18 - 13 + 1]),
            "record data too long",
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ds_ser_de() {
        use serde_test::Token;

        let tokens = |digest: &[u8]| {
            let mut tokens = vec![
                Token::Struct { name: "Ds", len: 5 },
                Token::Str("owner"),
                Token::Str("example.com."),
                Token::Str("key_tag"),
                Token::U16(60485),
                Token::Str("algorithm"),
                Token::U8(5),
                Token::Str("digest_type"),
                Token::U8(2),
                Token::Str("digest"),
            ];
            tokens.extend(octets_tokens(digest));
            tokens.push(Token::StructEnd);
            tokens
        };

        let rdata = Ds::new(
            name("example.com."),
            60485,
            SecurityAlgorithm::RSASHA1,
            DigestAlgorithm::SHA256,
            vec![0xab; 32],
        )
        .unwrap();
        serde_test::assert_tokens(&rdata, &tokens(&[0xab; 32]));
        serde_test::assert_de_tokens_error::<Ds>(
            &tokens(&[0; 0xFFFC]),
            "record data too long",
        );
    }
}
