//! Read-only reference data for the loadout advisor.
//!
//! The catalog is loaded once per process and shared by reference. Nothing
//! in the workspace mutates it after construction.
//!
//! # Modules
//!
//! - [`error`] -- [`CatalogError`] for rejected catalog data
//! - [`mods`] -- Attachment families and weapon compatibility
//! - [`weapons`] -- The bundled weapon table

pub mod error;
pub mod mods;
pub mod weapons;

use std::collections::{BTreeMap, BTreeSet};

use loadout_types::{SlotType, Weapon, WeaponId};
use tracing::debug;

pub use error::CatalogError;
pub use mods::{ModFamily, ModTier};

/// Name of the muzzle family whose compatibility list drives stealth
/// eligibility.
pub const SILENCER_FAMILY: &str = "Silencer";

/// Weapons plus attachment families, indexed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    weapons: Vec<Weapon>,
    index: BTreeMap<WeaponId, usize>,
    families: Vec<ModFamily>,
}

impl Catalog {
    /// Validate and index a weapon list and its mod families.
    pub fn new(weapons: Vec<Weapon>, families: Vec<ModFamily>) -> Result<Self, CatalogError> {
        if weapons.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = BTreeMap::new();
        for (position, weapon) in weapons.iter().enumerate() {
            if index.insert(weapon.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateWeapon(weapon.id.clone()));
            }
        }

        let mut seen_families = BTreeSet::new();
        for family in &families {
            if !seen_families.insert((family.slot, family.name.clone())) {
                return Err(CatalogError::DuplicateFamily {
                    slot: family.slot,
                    family: family.name.clone(),
                });
            }
            let unknown = family
                .compatible
                .iter()
                .chain(&family.poor_fit)
                .find(|id| !index.contains_key(*id));
            if let Some(weapon) = unknown {
                return Err(CatalogError::UnknownWeapon {
                    slot: family.slot,
                    family: family.name.clone(),
                    weapon: weapon.clone(),
                });
            }
        }

        debug!(
            weapons = weapons.len(),
            families = families.len(),
            "catalog assembled"
        );
        Ok(Self {
            weapons,
            index,
            families,
        })
    }

    /// The bundled 21-weapon table and its mod families.
    pub fn builtin() -> Self {
        let weapons = weapons::builtin_weapons();
        let families = mods::builtin_families(&weapons);
        let index = weapons
            .iter()
            .enumerate()
            .map(|(position, weapon)| (weapon.id.clone(), position))
            .collect();
        Self {
            weapons,
            index,
            families,
        }
    }

    /// The bundled tables, run through [`Catalog::new`] validation.
    pub fn validated_builtin() -> Result<Self, CatalogError> {
        let weapons = weapons::builtin_weapons();
        let families = mods::builtin_families(&weapons);
        Self::new(weapons, families)
    }

    /// All weapons in catalog order.
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// Look up a weapon by id.
    pub fn weapon(&self, id: &WeaponId) -> Option<&Weapon> {
        self.index
            .get(id)
            .and_then(|&position| self.weapons.get(position))
    }

    /// All mod families.
    pub fn families(&self) -> &[ModFamily] {
        &self.families
    }

    /// Families that fit `slot`.
    pub fn families_for(&self, slot: SlotType) -> impl Iterator<Item = &ModFamily> {
        self.families.iter().filter(move |f| f.slot == slot)
    }

    /// Look up a family by slot and name.
    pub fn family(&self, slot: SlotType, name: &str) -> Option<&ModFamily> {
        self.families_for(slot).find(|f| f.name == name)
    }

    /// Ids compatible with the `Silencer` muzzle family, in catalog order.
    pub fn silencer_compatible(&self) -> impl Iterator<Item = &WeaponId> {
        self.family(SlotType::Muzzle, SILENCER_FAMILY)
            .into_iter()
            .flat_map(|f| f.compatible.iter())
    }
}
