//! Error types for the `loadout-catalog` crate.

use loadout_types::{SlotType, WeaponId};

/// Errors raised while assembling a [`Catalog`](crate::Catalog).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The weapon list was empty.
    #[error("catalog contains no weapons")]
    Empty,

    /// Two weapons share an id.
    #[error("duplicate weapon id: {0}")]
    DuplicateWeapon(WeaponId),

    /// A mod family lists a weapon the catalog does not contain.
    #[error("mod family {slot}/{family} references unknown weapon {weapon}")]
    UnknownWeapon {
        /// Slot of the offending family.
        slot: SlotType,
        /// Family name.
        family: String,
        /// The unknown id.
        weapon: WeaponId,
    },

    /// Two families in the same slot share a name.
    #[error("duplicate mod family {slot}/{family}")]
    DuplicateFamily {
        /// Slot of the duplicated family.
        slot: SlotType,
        /// Family name.
        family: String,
    },
}
