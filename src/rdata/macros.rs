//! Macros for use in rdata definitions.
//!
//! These macros are not public but are used by the super module only. They
//! are here so that `mod.rs` doesn’t become too unwieldly.

/// Creates the enum over all record data types.
///
/// The macro re-exports the given types from their modules and defines
/// `AllRecordData` with a variant for each type, `From` conversions, and
/// implementations of the record data traits that dispatch to the
/// variants.
macro_rules! rdata_types {
    ( $(
        $module:ident::{
            $( $rtype:ident, )*
        }
    )* ) => {
        $(
            pub use self::$module::{ $( $rtype ),* };
        )*


        //------------- AllRecordData ----------------------------------------

        /// Record data for all supported record types.
        ///
        /// This enum collects the record data types for all record types
        /// that can be part of a proof. It is the type to use when records
        /// of different types need to be kept together.
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub enum AllRecordData {
            $( $(
                $rtype($rtype),
            )* )*
        }


        //--- From

        $( $(
            impl From<$rtype> for AllRecordData {
                fn from(value: $rtype) -> Self {
                    AllRecordData::$rtype(value)
                }
            }
        )* )*


        //--- RecordData and ComposeRecordData

        impl $crate::base::rdata::RecordData for AllRecordData {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                match *self {
                    $( $(
                        AllRecordData::$rtype(ref inner) => {
                            $crate::base::rdata::RecordData::rtype(inner)
                        }
                    )* )*
                }
            }

            fn owner(&self) -> &$crate::base::name::Name {
                match *self {
                    $( $(
                        AllRecordData::$rtype(ref inner) => {
                            $crate::base::rdata::RecordData::owner(inner)
                        }
                    )* )*
                }
            }
        }

        impl $crate::base::rdata::ComposeRecordData for AllRecordData {
            fn rdlen(&self) -> u16 {
                match *self {
                    $( $(
                        AllRecordData::$rtype(ref inner) => {
                            $crate::base::rdata::ComposeRecordData::rdlen(
                                inner
                            )
                        }
                    )* )*
                }
            }

            fn compose_rdata<Target: $crate::base::wire::Composer + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                match *self {
                    $( $(
                        AllRecordData::$rtype(ref inner) => {
                            $crate::base::rdata::ComposeRecordData
                                ::compose_rdata(inner, target)
                        }
                    )* )*
                }
            }
        }


        //--- Display

        impl core::fmt::Display for AllRecordData {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match *self {
                    $( $(
                        AllRecordData::$rtype(ref inner) => {
                            core::fmt::Display::fmt(inner, f)
                        }
                    )* )*
                }
            }
        }
    }
}

/// A macro for implementing a record data type with a single domain name.
///
/// Implements the constructor and accessors plus the `RecordData`,
/// `ComposeRecordData`, and `Display` traits.
macro_rules! name_type {
    ( $(#[$attr:meta])* ( $target:ident, $rtype:ident, $field:ident ) ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target {
            owner: $crate::base::name::Name,
            $field: $crate::base::name::Name,
        }

        impl $target {
            /// The rtype of this record data type.
            pub(crate) const RTYPE: $crate::base::iana::Rtype =
                $crate::base::iana::Rtype::$rtype;

            /// Creates new record data from the owner and the target name.
            #[must_use]
            pub fn new(
                owner: $crate::base::name::Name,
                $field: $crate::base::name::Name,
            ) -> Self {
                $target { owner, $field }
            }

            /// Returns the name the record data refers to.
            #[must_use]
            pub fn $field(&self) -> &$crate::base::name::Name {
                &self.$field
            }
        }

        //--- RecordData and ComposeRecordData

        impl $crate::base::rdata::RecordData for $target {
            fn rtype(&self) -> $crate::base::iana::Rtype {
                $target::RTYPE
            }

            fn owner(&self) -> &$crate::base::name::Name {
                &self.owner
            }
        }

        impl $crate::base::rdata::ComposeRecordData for $target {
            fn rdlen(&self) -> u16 {
                self.$field.compose_len()
            }

            fn compose_rdata<Target: $crate::base::wire::Composer + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                self.$field.compose(target)
            }
        }

        //--- Display

        impl core::fmt::Display for $target {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.$field, f)
            }
        }
    }
}
