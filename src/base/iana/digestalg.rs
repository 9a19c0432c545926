//! Delegation signer digest algorithm numbers.

//------------ DigestAlgorithm -----------------------------------------------

int_enum! {
    /// Delegation signer digest algorithm numbers.
    ///
    /// These numbers are used in the DS resource record to specify how the
    /// key digest in the record has been generated.
    ///
    /// For the currently registered values see the [IANA registration].
    ///
    /// [IANA registration]: https://www.iana.org/assignments/ds-rr-types/ds-rr-types.xhtml#ds-rr-types-1
    =>
    DigestAlgorithm, u8;

    /// Specifies that the SHA-1 hash function is used.
    (SHA1 => 1, "SHA-1")

    /// Specifies that the SHA-256 hash function is used.
    (SHA256 => 2, "SHA-256")

    /// Specifies that the GOST R 34.11-94 hash function is used.
    ///
    /// See [RFC 5933].
    ///
    /// [RFC 5933]: https://tools.ietf.org/html/rfc5933
    (GOST => 3, "GOST R 34.11-94")

    /// Specifies that the SHA-384 hash function is used.
    ///
    /// See [RFC 6605].
    ///
    /// [RFC 6605]: https://tools.ietf.org/html/rfc6605
    (SHA384 => 4, "SHA-384")
}

int_enum_str_decimal!(DigestAlgorithm, u8);

//============ Tests =========================================================

#[cfg(test)]
mod test {
    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use super::DigestAlgorithm;
        use serde_test::{assert_tokens, Token};

        assert_tokens(&DigestAlgorithm::SHA384, &[Token::U8(4)]);
        assert_tokens(&DigestAlgorithm::from_int(100), &[Token::U8(100)]);
    }
}
