//! Record data implementations.
//!
//! This module contains the record data types for all record types that
//! can be part of a DNSSEC proof.
//!
//! The types are named identically to the [`Rtype`] constant they
//! implement, spelled in Rust type naming convention. They are grouped into
//! submodules for the RFCs they are defined in. All types are also
//! re-exported at the top level here. Ie., for the AAAA record type, you
//! can simply `use domain_proof::rdata::Aaaa` instead of
//! `use domain_proof::rdata::rfc3596::Aaaa`.
//!
//! Each record data value also carries the owner name of its record. All
//! types implement [`RecordData`] and [`ComposeRecordData`]. The latter
//! provides [`to_len_prefixed_vec`] which produces the record data in wire
//! format prefixed by its length, i.e., the RDLENGTH and RDATA fields of a
//! resource record.
//!
//! Finally, the [`AllRecordData`] enum can hold record data of any of the
//! supported types.
//!
//! [`Rtype`]: crate::base::iana::Rtype
//! [`RecordData`]: crate::base::rdata::RecordData
//! [`ComposeRecordData`]: crate::base::rdata::ComposeRecordData
//! [`to_len_prefixed_vec`]: crate::base::rdata::ComposeRecordData::to_len_prefixed_vec

#[macro_use]
mod macros;

pub mod dnssec;
pub mod rfc1035;
pub mod rfc3596;
pub mod rfc6672;
pub mod tlsa;

rdata_types! {
    rfc1035::{
        A,
        Cname,
        Ns,
        Txt,
    }
    rfc3596::{
        Aaaa,
    }
    rfc6672::{
        Dname,
    }
    dnssec::{
        Dnskey,
        Ds,
        Rrsig,
    }
    tlsa::{
        Tlsa,
    }
}

pub use self::rfc1035::TxtIter;

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{
        DigestAlgorithm, Rtype, SecurityAlgorithm, TlsaCertificateUsage,
        TlsaMatchingType, TlsaSelector,
    };
    use crate::base::rdata::test::test_len_prefix;
    use crate::base::rdata::{ComposeRecordData, RecordData};
    use crate::base::{Name, Ttl};
    use core::str::FromStr;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    fn all() -> Vec<AllRecordData> {
        let owner = name("example.com.");
        vec![
            A::from_octets(owner.clone(), 192, 0, 2, 1).into(),
            Aaaa::new(owner.clone(), [0x20; 16].into()).into(),
            Cname::new(owner.clone(), name("www.example.com.")).into(),
            Dname::new(owner.clone(), name("example.net.")).into(),
            Ns::new(owner.clone(), name("ns1.example.com.")).into(),
            Dnskey::new(
                owner.clone(),
                257,
                3,
                SecurityAlgorithm::ED25519,
                vec![7; 32],
            )
            .unwrap()
            .into(),
            Ds::new(
                owner.clone(),
                12345,
                SecurityAlgorithm::ECDSAP256SHA256,
                DigestAlgorithm::SHA256,
                vec![9; 32],
            )
            .unwrap()
            .into(),
            Rrsig::new(
                owner.clone(),
                Rtype::TXT,
                SecurityAlgorithm::ED25519,
                2,
                Ttl::from_secs(3600),
                1_700_086_400,
                1_700_000_000,
                12345,
                name("example.com."),
                vec![1; 64],
            )
            .unwrap()
            .into(),
            Tlsa::new(
                name("_443._tcp.example.com."),
                TlsaCertificateUsage::DANE_EE,
                TlsaSelector::SPKI,
                TlsaMatchingType::SHA2_256,
                vec![3; 32],
            )
            .unwrap()
            .into(),
            Txt::new(owner, b"v=spf1 -all".to_vec()).unwrap().into(),
        ]
    }

    #[test]
    fn all_record_data_dispatch() {
        let rtypes: Vec<_> = all().iter().map(|data| data.rtype()).collect();
        assert_eq!(
            rtypes,
            [
                Rtype::A,
                Rtype::AAAA,
                Rtype::CNAME,
                Rtype::DNAME,
                Rtype::NS,
                Rtype::DNSKEY,
                Rtype::DS,
                Rtype::RRSIG,
                Rtype::TLSA,
                Rtype::TXT,
            ]
        );
        assert_eq!(
            rtypes.iter().map(|rtype| rtype.to_int()).collect::<Vec<_>>(),
            [1, 28, 5, 39, 2, 48, 43, 46, 52, 16]
        );
    }

    #[test]
    fn all_record_data_len_prefix() {
        for data in all() {
            let rdata = test_len_prefix(&data);
            assert_eq!(rdata.len(), usize::from(data.rdlen()));
        }
    }

    #[test]
    fn all_record_data_owner() {
        for data in all() {
            if data.rtype() == Rtype::TLSA {
                assert_eq!(data.owner(), &name("_443._tcp.example.com."));
            } else {
                assert_eq!(data.owner(), &name("example.com."));
            }
        }
    }

    #[test]
    fn all_record_data_matches_variant() {
        let txt = Txt::new(name("a."), b"hello".to_vec()).unwrap();
        let all = AllRecordData::from(txt.clone());
        assert_eq!(all, AllRecordData::Txt(txt.clone()));
        assert_eq!(all.to_len_prefixed_vec(), txt.to_len_prefixed_vec());
        assert_eq!(all.to_string(), "\"hello\"");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn all_record_data_ser_de() {
        use serde_test::{assert_tokens, Token};

        let data = AllRecordData::from(Cname::new(
            name("www.example.com."),
            name("example.com."),
        ));
        assert_tokens(
            &data,
            &[
                Token::NewtypeVariant {
                    name: "AllRecordData",
                    variant: "Cname",
                },
                Token::Struct {
                    name: "Cname",
                    len: 2,
                },
                Token::Str("owner"),
                Token::Str("www.example.com."),
                Token::Str("cname"),
                Token::Str("example.com."),
                Token::StructEnd,
            ],
        );
    }
}
