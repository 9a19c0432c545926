//! Encoding of *base64*.
//!
//! The *base64* encoding is defined in [RFC 4648]. It is used in the
//! presentation format of DNSKEY public keys and RRSIG signatures.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;
use std::string::String;

/// Encodes binary data in *base64* and writes it into a format stream.
///
/// This function is intended to be used in implementations of formatting
/// traits:
///
/// ```
/// use core::fmt;
/// use domain_proof::utils::base64;
///
/// struct Foo<'a>(&'a [u8]);
///
/// impl<'a> fmt::Display for Foo<'a> {
///     fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
///         base64::display(&self.0, f)
///     }
/// }
/// ```
pub fn display<B, W>(bytes: &B, f: &mut W) -> fmt::Result
where
    B: AsRef<[u8]> + ?Sized,
    W: fmt::Write,
{
    fn ch(i: u8) -> char {
        ENCODE_ALPHABET[usize::from(i)]
    }

    for chunk in bytes.as_ref().chunks(3) {
        match *chunk {
            [a] => {
                f.write_char(ch(a >> 2))?;
                f.write_char(ch((a & 0x03) << 4))?;
                f.write_char(PAD)?;
                f.write_char(PAD)?;
            }
            [a, b] => {
                f.write_char(ch(a >> 2))?;
                f.write_char(ch((a & 0x03) << 4 | b >> 4))?;
                f.write_char(ch((b & 0x0F) << 2))?;
                f.write_char(PAD)?;
            }
            [a, b, c] => {
                f.write_char(ch(a >> 2))?;
                f.write_char(ch((a & 0x03) << 4 | b >> 4))?;
                f.write_char(ch((b & 0x0F) << 2 | c >> 6))?;
                f.write_char(ch(c & 0x3F))?;
            }
            _ => unreachable!(),
        }
    }
    Ok(())
}

/// Encodes binary data in *base64* and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity((bytes.as_ref().len() / 3 + 1) * 4);
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

const ENCODE_ALPHABET: [char; 64] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b',
    'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p',
    'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3',
    '4', '5', '6', '7', '8', '9', '+', '/',
];

const PAD: char = '=';

//============ Test ==========================================================
