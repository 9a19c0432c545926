//! Domain names.
//!
//! This module provides [`Name`], an absolute domain name in presentation
//! format that has been checked to be encodable in wire format. Names are
//! kept as the string they were created from and are only converted into
//! their wire format when being composed.

use super::wire::Compose;
use core::str::FromStr;
use core::{cmp, fmt, hash, ops};
use octseq::builder::{infallible, OctetsBuilder};
use std::string::String;
use std::vec::Vec;

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
///
/// The name is kept in its presentation format, i.e., as a sequence of
/// labels separated by dots and ending in a dot. A value can only be
/// created from a string that satisfies the following rules:
///
/// * the string ends in a dot, i.e., the name is absolute,
/// * it is at most 255 characters long,
/// * it only contains printable ASCII characters (that is, codes 33 to 126)
///   other than the double quote, and
/// * each label is at most 63 characters long and no label other than the
///   final root label is empty.
///
/// No escape sequences are interpreted. A backslash is just a backslash.
///
/// Comparison and hashing ignore ASCII case since domain names are case
/// insensitive. The wire format produced by [`compose`][Self::compose]
/// is always in lower case.
#[derive(Clone)]
pub struct Name(String);

impl Name {
    /// Domain names have a maximum length of 255 characters.
    pub const MAX_LEN: usize = 255;

    /// Labels have a maximum length of 63 characters.
    pub const MAX_LABEL_LEN: usize = 63;

    /// Returns the root name `"."`.
    #[must_use]
    pub fn root() -> Self {
        Name(String::from("."))
    }

    /// Creates a domain name from a string.
    ///
    /// Returns an error describing the first violated rule if the string
    /// isn’t a valid absolute domain name. See the type level documentation
    /// for the rules.
    pub fn from_string(s: String) -> Result<Self, FromStrError> {
        match Self::check_str(&s) {
            Ok(()) => Ok(Name(s)),
            Err(err) => {
                trace!("rejected domain name {:?}: {}", s, err);
                Err(err)
            }
        }
    }

    /// Checks that a string is a correct absolute domain name.
    fn check_str(s: &str) -> Result<(), FromStrError> {
        if s.is_empty() {
            return Err(FromStrError::Empty);
        }
        if !s.ends_with('.') {
            return Err(FromStrError::RelativeName);
        }
        if s.len() > Self::MAX_LEN {
            return Err(FromStrError::LongName);
        }
        if let Some(ch) = s.chars().find(|&ch| !is_name_char(ch)) {
            return Err(FromStrError::IllegalCharacter(ch));
        }
        if s == "." {
            return Ok(());
        }

        // The string ends in a dot so the last item is always the empty
        // root label.
        let mut labels = s.split('.');
        let _root = labels.next_back();
        for label in labels {
            if label.is_empty() {
                return Err(FromStrError::EmptyLabel);
            }
            if label.len() > Self::MAX_LABEL_LEN {
                return Err(FromStrError::LongLabel);
            }
        }
        Ok(())
    }
}

impl Name {
    /// Returns the name in presentation format.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the name into the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns whether this is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0 == "."
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The root label is not included, so the iterator is empty for the
    /// root name.
    pub fn iter_labels(&self) -> impl Iterator<Item = &str> + '_ {
        let labels = if self.is_root() { "" } else { &self.0[..] };
        labels.split_terminator('.')
    }

    /// Returns the number of labels not counting the root label.
    ///
    /// This is the value used in the labels field of RRSIG record data for
    /// names that are not wildcards.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.iter_labels().count()
    }

    /// Returns the length of the name’s wire format.
    ///
    /// Each label is preceded by a length octet and the root label is a
    /// single zero octet, so this is one more than the length of the
    /// presentation format except for the root name itself.
    #[must_use]
    pub fn compose_len(&self) -> u16 {
        let len = if self.is_root() { 1 } else { self.0.len() + 1 };
        // The length is checked upon creation to be at most 255 characters.
        len as u16
    }

    /// Appends the wire format of the name to `target`.
    ///
    /// Labels are converted to lower case. No name compression happens.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        if self.is_root() {
            return target.append_slice(&[0]);
        }
        for label in self.0.split('.') {
            // Labels are checked upon creation to be at most 63 octets.
            target.append_slice(&[label.len() as u8])?;
            for &ch in label.as_bytes() {
                target.append_slice(&[ch.to_ascii_lowercase()])?;
            }
        }
        Ok(())
    }

    /// Returns the wire format of the name in a newly allocated vec.
    #[must_use]
    pub fn to_wire_vec(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(usize::from(self.compose_len()));
        infallible(self.compose(&mut res));
        res
    }
}

/// Returns whether `ch` may appear in a domain name.
fn is_name_char(ch: char) -> bool {
    ch.is_ascii_graphic() && ch != '"'
}

//--- Compose

impl Compose for Name {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        Name::compose(self, target)
    }
}

//--- FromStr and TryFrom

impl FromStr for Name {
    type Err = FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s.into())
    }
}

impl<'a> TryFrom<&'a str> for Name {
    type Error = FromStrError;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::from_str(s)
    }
}

impl TryFrom<String> for Name {
    type Error = FromStrError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(s)
    }
}

//--- Deref and AsRef

impl ops::Deref for Name {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Name {}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.0.bytes() {
            state.write_u8(ch.to_ascii_lowercase())
        }
    }
}

//--- PartialOrd and Ord

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0
            .bytes()
            .map(|ch| ch.to_ascii_lowercase())
            .cmp(other.0.bytes().map(|ch| ch.to_ascii_lowercase()))
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Name::from_string(s).map_err(serde::de::Error::custom)
    }
}

//============ Error Types ===================================================

//------------ FromStrError --------------------------------------------------

/// A string could not be converted into a domain name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string was empty.
    Empty,

    /// The string did not end in a dot.
    RelativeName,

    /// The string was longer than 255 characters.
    LongName,

    /// The string contained a character not allowed in a domain name.
    IllegalCharacter(char),

    /// A label was longer than 63 characters.
    LongLabel,

    /// A label other than the root label was empty.
    ///
    /// Names such as `a..b.` or `.a.` are otherwise well-formed but would
    /// encode a zero length octet in the middle of the name, ending it
    /// early. They are rejected on top of the length and character rules.
    EmptyLabel,
}

//--- Display and Error

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::Empty => f.write_str("empty domain name"),
            FromStrError::RelativeName => f.write_str("relative name"),
            FromStrError::LongName => f.write_str("long domain name"),
            FromStrError::IllegalCharacter(ch) => {
                write!(f, "illegal character {:?}", ch)
            }
            FromStrError::LongLabel => f.write_str("long label"),
            FromStrError::EmptyLabel => f.write_str("empty label"),
        }
    }
}

impl std::error::Error for FromStrError {}

//============ Testing =======================================================
