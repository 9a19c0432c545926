//! Record data from [RFC 1035]: initial record types.
//!
//! This RFC defines the initial set of record types. Of those, A, CNAME,
//! NS, and TXT are supported here.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::a::A;
pub use self::name::{Cname, Ns};
pub use self::txt::{Txt, TxtIter};

mod a;
mod name;
mod txt;
