//! Encoding of Base 16 a.k.a. hex digits.
//!
//! The Base 16 encoding is defined in [RFC 4648]. It is used in the
//! presentation format of record data that carries digests, such as DS and
//! TLSA.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;
use std::string::String;

/// Encodes binary data in Base 16 and writes it into a format stream.
///
/// This function is intended to be used in implementations of formatting
/// traits:
///
/// ```
/// use core::fmt;
/// use domain_proof::utils::base16;
///
/// struct Foo<'a>(&'a [u8]);
///
/// impl<'a> fmt::Display for Foo<'a> {
///     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
///         base16::display(&self.0, f)
///     }
/// }
/// ```
pub fn display<Octets, Target>(octets: &Octets, f: &mut Target) -> fmt::Result
where
    Octets: AsRef<[u8]> + ?Sized,
    Target: fmt::Write,
{
    for &octet in octets.as_ref() {
        f.write_char(ENCODE_ALPHABET[usize::from(octet >> 4)])?;
        f.write_char(ENCODE_ALPHABET[usize::from(octet & 0x0F)])?;
    }
    Ok(())
}

/// Encodes binary data in Base 16 and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity(bytes.as_ref().len() * 2);
    // Writing into a string never fails.
    let _ = display(bytes, &mut res);
    res
}

/// Returns a placeholder value that implements `Display` for encoded data.
pub fn encode_display<Octets: AsRef<[u8]> + ?Sized>(
    octets: &Octets,
) -> impl fmt::Display + '_ {
    struct Display<'a>(&'a [u8]);

    impl<'a> fmt::Display for Display<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            display(self.0, f)
        }
    }

    Display(octets.as_ref())
}

const ENCODE_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D',
    'E', 'F',
];

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"\x00\x7f\x80\xff"), "007F80FF");
        assert_eq!(encode_string("foobar"), "666F6F626172");
        assert_eq!(format!("{}", encode_display(b"\xde\xad")), "DEAD");
    }
}
