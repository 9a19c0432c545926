//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is relevant
    /// and all records composed by this crate use it.
    ///
    /// See [RFC 1034] for the introduction of classes and the
    /// [DNS CLASSes IANA registry] for an overview of assigned values.
    ///
    /// [RFC 1034]: https://tools.ietf.org/html/rfc1034
    /// [DNS CLASSes IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-2
    =>
    Class, u16;

    /// Internet (IN).
    ///
    /// This class is defined in RFC 1035 and really the only one relevant
    /// at all.
    (IN => 1, "IN")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")
}

int_enum_str_with_prefix!(Class, "CLASS", u16);
