//! Type-safe identifier wrappers.
//!
//! Sites are keyed by the short codes used in the game's site tables
//! (`"fn101"`, `"fn225"`), so [`NodeId`] wraps a [`String`]. Connections are
//! numbered in the order the graph creates them, so [`ConnectionId`] wraps a
//! `u32` index.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_code_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like code.
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Borrow the underlying code.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner [`String`] value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self(code)
            }
        }
    };
}

define_code_id! {
    /// Unique identifier for a site (node in the probe network).
    NodeId
}

/// Identifier for a connection (edge in the probe network).
///
/// Assigned sequentially by the graph as connections are added, so a
/// connection's id is also its position in creation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct ConnectionId(pub u32);

impl core::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "connection#{}", self.0)
    }
}
