//! Record data from [RFC 6672]: DNAME.
//!
//! [RFC 6672]: https://tools.ietf.org/html/rfc6672

//------------ Dname --------------------------------------------------------

name_type! {
    /// DNAME record data.
    ///
    /// The DNAME record provides redirection for a subtree of the domain
    /// name tree in the DNS. Its record data is the target of that
    /// redirection.
    ///
    /// The DNAME type is defined in RFC 6672.
    (Dname, DNAME, dname)
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::name::Name;
    use crate::base::rdata::test::{test_len_prefix, test_rdlen};
    use crate::base::rdata::RecordData;
    use core::str::FromStr;

    #[test]
    fn create_dname() {
        let name = Name::from_str("bar.example.com.").unwrap();
        let rdata =
            Dname::new(Name::from_str("foo.example.").unwrap(), name.clone());
        assert_eq!(rdata.dname(), &name);
        assert_eq!(rdata.rtype(), Rtype::DNAME);
        assert_eq!(rdata.rtype().to_int(), 39);
    }

    #[test]
    fn dname_compose() {
        let rdata = Dname::new(
            Name::from_str("foo.example.").unwrap(),
            Name::from_str("bar.example.com.").unwrap(),
        );
        test_rdlen(&rdata);
        assert_eq!(
            test_len_prefix(&rdata),
            b"\x03bar\x07example\x03com\0"
        );
    }
}
