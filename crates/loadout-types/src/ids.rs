//! Type-safe identifier wrappers around catalog slugs.
//!
//! Weapons are keyed by short lowercase slugs (`"renegade"`, `"anvil"`)
//! that also appear in shareable links. Wrapping them prevents mixing a
//! weapon id with a composite pair key at compile time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Separator between the primary and secondary ids in a [`PairKey`].
pub const PAIR_KEY_SEPARATOR: &str = "__";

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_slug {
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
            /// Borrow the underlying slug.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_slug! {
    /// Unique identifier of a weapon in the catalog.
    WeaponId
}

define_slug! {
    /// Stable composite key of an ordered `(primary, secondary)` pair.
    ///
    /// Formatted as `primaryId__secondaryId`. Order matters: `a__b` and
    /// `b__a` are different recommendations.
    PairKey
}

impl PairKey {
    /// Build the key for `primary` used with `secondary`.
    pub fn new(primary: &WeaponId, secondary: &WeaponId) -> Self {
        Self(format!("{primary}{PAIR_KEY_SEPARATOR}{secondary}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_is_ordered() {
        let a = WeaponId::from("renegade");
        let b = WeaponId::from("anvil");
        assert_eq!(PairKey::new(&a, &b).as_str(), "renegade__anvil");
        assert_ne!(PairKey::new(&a, &b), PairKey::new(&b, &a));
    }

    #[test]
    fn slug_serializes_as_plain_string() {
        let id = WeaponId::from("osprey");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"osprey\"");
    }
}
