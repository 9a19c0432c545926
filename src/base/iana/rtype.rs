//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    /// Only the types relevant for building DNSSEC proofs have constants
    /// here. All other values can still be represented via
    /// [`Rtype::from_int`], e.g., as the type covered by an RRSIG.
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    ///
    /// In order to avoid confusion over capitalization, the mnemonics are
    /// treated as single acronyms and therefore all constants are spelled
    /// in all capital letters.
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// Delegation name.
    ///
    /// See RFC 6672.
    (DNAME => 39, "DNAME")

    /// Delegation signer.
    ///
    /// See RFC 4034.
    (DS => 43, "DS")

    /// RRSIG.
    ///
    /// See RFC 4034.
    (RRSIG => 46, "RRSIG")

    /// NSEC.
    ///
    /// See RFC 4034.
    (NSEC => 47, "NSEC")

    /// DNSKEY.
    ///
    /// See RFC 4034.
    (DNSKEY => 48, "DNSKEY")

    /// NSEC3.
    ///
    /// See RFC 5155.
    (NSEC3 => 50, "NSEC3")

    /// TLSA.
    ///
    /// See RFC 6698.
    (TLSA => 52, "TLSA")
}

int_enum_str_with_prefix!(Rtype, "TYPE", u16);

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn from_str_and_display() {
        assert_eq!(Rtype::from_str("txt"), Ok(Rtype::TXT));
        assert_eq!(Rtype::from_str("TYPE52"), Ok(Rtype::TLSA));
        assert_eq!(Rtype::from_str("type65280"), Ok(Rtype::from_int(65280)));
        assert!(Rtype::from_str("TYPE").is_err());
        assert!(Rtype::from_str("bogus").is_err());

        assert_eq!(Rtype::RRSIG.to_string(), "RRSIG");
        assert_eq!(Rtype::from_int(65280).to_string(), "TYPE65280");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Rtype::DS), "Rtype::DS");
        assert_eq!(format!("{:?}", Rtype::from_int(999)), "Rtype(999)");
    }
}
