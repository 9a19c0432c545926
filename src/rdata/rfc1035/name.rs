//! Record data types from RFC 1035 that consist of a single domain name.
//!
//! This is a private module. It’s content is re-exported by the parent.

//------------ Cname --------------------------------------------------------

name_type! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for domain
    /// name alias.
    ///
    /// The CNAME type is defined in [RFC 1035, section 3.3.1][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.1
    (Cname, CNAME, cname)
}

//------------ Ns -----------------------------------------------------------

name_type! {
    /// NS record data.
    ///
    /// NS records specify hosts that are authoritative for a class and
    /// domain.
    ///
    /// The NS record type is defined in [RFC 1035, section 3.3.11][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.11
    (Ns, NS, nsdname)
}

//============ Testing =======================================================
