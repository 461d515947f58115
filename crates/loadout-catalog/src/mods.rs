//! Attachment (mod) families and their weapon compatibility.
//!
//! The advisor reads a single fact from this table: which weapons accept a
//! `Silencer` muzzle. The full families (tiers, costs, poor fits) are
//! served by `GET /api/weapons` for the loadout editor.

use loadout_types::{SlotType, Weapon, WeaponId};
use serde::Serialize;

/// One upgrade tier of a family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModTier {
    /// Tier label (`"1"`, `"2"`, `"3"`, `"3+"`).
    pub label: String,
    /// Effect text.
    pub effect: String,
    /// Crafting recipe, when the tier is craftable.
    pub craft_cost: Option<String>,
}

/// A family of interchangeable attachments for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModFamily {
    /// Slot the family fits.
    pub slot: SlotType,
    /// Family name, unique within its slot.
    pub name: String,
    /// Short summary.
    pub description: String,
    /// Only available as a legendary drop.
    pub legendary: bool,
    /// Available tiers, lowest first.
    pub tiers: Vec<ModTier>,
    /// Weapons that accept this family.
    pub compatible: Vec<WeaponId>,
    /// Compatible weapons that gain little from it.
    pub poor_fit: Vec<WeaponId>,
}

impl ModFamily {
    /// Whether `weapon` accepts this family.
    pub fn accepts(&self, weapon: &WeaponId) -> bool {
        self.compatible.contains(weapon)
    }
}

// ---------------------------------------------------------------------------
// Static table
// ---------------------------------------------------------------------------

/// Compatibility list, resolved against the weapon table.
enum Compat {
    /// Every weapon except the listed ids.
    AllExcept(&'static [&'static str]),
    /// Exactly the listed ids.
    Only(&'static [&'static str]),
}

const MOST_MUZZLE: Compat = Compat::AllExcept(&[
    "hairpin", "venator", "iltoro", "vulcano", "aphelion", "hullcracker", "jupiter", "equalizer",
]);
const MOST_UNDERBARREL: Compat =
    Compat::AllExcept(&["hairpin", "burletta", "anvil", "torrente", "jupiter", "equalizer"]);
const MOST_STOCK: Compat = Compat::AllExcept(&[
    "hairpin", "burletta", "venator", "anvil", "tempest", "jupiter", "equalizer",
]);
const SHOTGUNS: Compat = Compat::Only(&["vulcano", "iltoro"]);

struct FamilyRow {
    slot: SlotType,
    name: &'static str,
    description: &'static str,
    legendary: bool,
    tiers: &'static [(&'static str, &'static str, Option<&'static str>)],
    compat: Compat,
    poor_fit: &'static [&'static str],
}

const FAMILIES: &[FamilyRow] = &[
    FamilyRow {
        slot: SlotType::Muzzle,
        name: "Compensator",
        description: "Reduces bloom",
        legendary: false,
        tiers: &[
            ("1", "25% Reduced Per-Shot Dispersion", Some("6x Metal Parts, 1x Wire")),
            ("2", "35% Reduced Per-Shot Dispersion", Some("2x Mechanical Components, 4x Wire")),
            ("3", "50% Reduced Per-Shot Dispersion", Some("2x Mod Components, 8x Wire")),
        ],
        compat: MOST_MUZZLE,
        poor_fit: &["ferro"],
    },
    FamilyRow {
        slot: SlotType::Muzzle,
        name: "Muzzle Brake",
        description: "Reduces recoil",
        legendary: false,
        tiers: &[
            ("1", "15% Reduced Recoil", Some("6x Metal Parts, 1x Wire")),
            ("2", "20% Reduced Recoil", Some("2x Mechanical Components, 4x Wire")),
            ("3", "25% Reduced Recoil", Some("2x Mod Components, 8x Wire")),
        ],
        compat: MOST_MUZZLE,
        poor_fit: &["ferro"],
    },
    FamilyRow {
        slot: SlotType::Muzzle,
        name: "Silencer",
        description: "Reduces noise",
        legendary: false,
        tiers: &[
            ("2", "20% Reduced Noise", Some("2x Mechanical Components, 4x Wire")),
            ("3", "40% Reduced Noise", Some("2x Mod Components, 8x Wire")),
            ("3+", "60% Reduced Noise", Some("3x Mod Components, 15x Wire")),
        ],
        compat: MOST_MUZZLE,
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::Muzzle,
        name: "Extended Barrel",
        description: "Increases velocity",
        legendary: false,
        tiers: &[("3", "+25% Bullet Velocity", Some("2x Mod Components, 8x Wire"))],
        compat: Compat::Only(&[
            "osprey", "stitcher", "ferro", "arpeggio", "anvil", "burletta", "kettle", "renegade",
            "rattler", "bettina", "tempest", "bobcat", "torrente",
        ]),
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::ShotgunMuzzle,
        name: "Shotgun Choke",
        description: "Tightens spread",
        legendary: false,
        tiers: &[
            ("1", "20% Reduced Dispersion", Some("6x Metal Parts, 1x Wire")),
            ("2", "30% Reduced Dispersion", Some("2x Mechanical Components, 4x Wire")),
            ("3", "40% Reduced Dispersion", Some("2x Mod Components, 8x Wire")),
        ],
        compat: SHOTGUNS,
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::ShotgunMuzzle,
        name: "Shotgun Silencer",
        description: "Reduces noise",
        legendary: false,
        tiers: &[("3", "50% Reduced Noise", Some("2x Mod Components, 8x Wire"))],
        compat: SHOTGUNS,
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::Underbarrel,
        name: "Angled Grip",
        description: "Reduces horizontal recoil",
        legendary: false,
        tiers: &[
            ("1", "20% Reduced H-Recoil", Some("6x Plastic Parts, 1x Duct Tape")),
            ("2", "30% Reduced H-Recoil", Some("2x Mechanical Components, 3x Duct Tape")),
            ("3", "40% Reduced H-Recoil", Some("2x Mod Components, 5x Duct Tape")),
        ],
        compat: MOST_UNDERBARREL,
        poor_fit: &["ferro"],
    },
    FamilyRow {
        slot: SlotType::Underbarrel,
        name: "Vertical Grip",
        description: "Reduces vertical recoil",
        legendary: false,
        tiers: &[
            ("1", "20% Reduced V-Recoil", Some("6x Plastic Parts, 1x Duct Tape")),
            ("2", "30% Reduced V-Recoil", Some("2x Mechanical Components, 3x Duct Tape")),
            ("3", "40% Reduced V-Recoil", Some("2x Mod Components, 5x Duct Tape")),
        ],
        compat: MOST_UNDERBARREL,
        poor_fit: &["ferro"],
    },
    FamilyRow {
        slot: SlotType::Underbarrel,
        name: "Horizontal Grip",
        description: "Both recoil directions",
        legendary: true,
        tiers: &[("3", "30% Reduced Recoil", Some("2x Mod Components, 5x Duct Tape"))],
        compat: MOST_UNDERBARREL,
        poor_fit: &["ferro"],
    },
    FamilyRow {
        slot: SlotType::Underbarrel,
        name: "Kinetic Converter",
        description: "+15% Fire Rate",
        legendary: true,
        tiers: &[("3", "+15% Fire Rate", None)],
        compat: Compat::Only(&[
            "arpeggio", "rattler", "kettle", "vulcano", "osprey", "torrente", "ferro", "iltoro",
            "bettina", "stitcher", "bobcat", "tempest", "renegade",
        ]),
        poor_fit: &["ferro"],
    },
    FamilyRow {
        slot: SlotType::LightMagazine,
        name: "Extended Light Magazine",
        description: "More rounds",
        legendary: false,
        tiers: &[
            ("1", "+5 Magazine Size", Some("6x Plastic Parts, 1x Steel Spring")),
            ("2", "+10 Magazine Size", Some("2x Mechanical Components, 3x Steel Spring")),
            ("3", "+15 Magazine Size", Some("2x Mod Components, 5x Steel Spring")),
        ],
        compat: Compat::Only(&["bobcat", "stitcher", "kettle", "hairpin", "burletta"]),
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::MediumMagazine,
        name: "Extended Medium Magazine",
        description: "More rounds",
        legendary: false,
        tiers: &[
            ("1", "+4 Magazine Size", Some("6x Plastic Parts, 1x Steel Spring")),
            ("2", "+8 Magazine Size", Some("2x Mechanical Components, 3x Steel Spring")),
            ("3", "+12 Magazine Size", Some("2x Mod Components, 5x Steel Spring")),
        ],
        compat: Compat::Only(&["arpeggio", "venator", "torrente", "renegade", "osprey", "tempest"]),
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::ShotgunMagazine,
        name: "Extended Shotgun Magazine",
        description: "More shells",
        legendary: false,
        tiers: &[
            ("1", "+2 Magazine Size", Some("6x Plastic Parts, 1x Steel Spring")),
            ("2", "+4 Magazine Size", Some("2x Mechanical Components, 3x Steel Spring")),
            ("3", "+6 Magazine Size", Some("2x Mod Components, 5x Steel Spring")),
        ],
        compat: SHOTGUNS,
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::Stock,
        name: "Stable Stock",
        description: "Faster recovery",
        legendary: false,
        tiers: &[
            ("1", "40% Recovery", Some("7x Rubber Parts, 1x Duct Tape")),
            ("2", "60% Recovery", Some("2x Mechanical Components, 3x Duct Tape")),
            ("3", "50% Recovery", Some("2x Mod Components, 5x Duct Tape")),
        ],
        compat: MOST_STOCK,
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::Stock,
        name: "Padded Stock",
        description: "All-in-one stability",
        legendary: false,
        tiers: &[("3", "30% Reduced Recoil/Dispersion", Some("2x Mod Components, 5x Duct Tape"))],
        compat: MOST_STOCK,
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::Stock,
        name: "Lightweight Stock",
        description: "Fast ADS",
        legendary: false,
        tiers: &[("3", "+200% ADS Speed", Some("2x Mod Components, 5x Duct Tape"))],
        compat: MOST_STOCK,
        poor_fit: &[],
    },
    FamilyRow {
        slot: SlotType::TechMod,
        name: "Anvil Splitter",
        description: "Spread shot",
        legendary: true,
        tiers: &[("3", "+3 Projectiles", None)],
        compat: Compat::Only(&["anvil"]),
        poor_fit: &[],
    },
];

fn resolve(compat: &Compat, weapons: &[Weapon]) -> Vec<WeaponId> {
    match compat {
        Compat::AllExcept(excluded) => weapons
            .iter()
            .filter(|w| !excluded.contains(&w.id.as_str()))
            .map(|w| w.id.clone())
            .collect(),
        Compat::Only(ids) => ids.iter().map(|&id| WeaponId::from(id)).collect(),
    }
}

/// The bundled mod families, with "all except" lists resolved against
/// `weapons`.
pub fn builtin_families(weapons: &[Weapon]) -> Vec<ModFamily> {
    FAMILIES
        .iter()
        .map(|row| ModFamily {
            slot: row.slot,
            name: row.name.to_owned(),
            description: row.description.to_owned(),
            legendary: row.legendary,
            tiers: row
                .tiers
                .iter()
                .map(|&(label, effect, cost)| ModTier {
                    label: label.to_owned(),
                    effect: effect.to_owned(),
                    craft_cost: cost.map(str::to_owned),
                })
                .collect(),
            compatible: resolve(&row.compat, weapons),
            poor_fit: row.poor_fit.iter().map(|&id| WeaponId::from(id)).collect(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::weapons::builtin_weapons;

    #[test]
    fn families_serialize_for_the_editor() {
        let weapons = builtin_weapons();
        let families = builtin_families(&weapons);
        let compensator = families.iter().find(|f| f.name == "Compensator").unwrap();
        let json = serde_json::to_value(compensator).unwrap();
        assert_eq!(json["slot"], "Muzzle");
        assert_eq!(json["poorFit"][0], "ferro");
        assert_eq!(json["tiers"][0]["craftCost"], "6x Metal Parts, 1x Wire");
        assert!(json.get("poor_fit").is_none());
    }

    #[test]
    fn silencer_excludes_slotless_and_shotguns() {
        let weapons = builtin_weapons();
        let families = builtin_families(&weapons);
        let silencer = families
            .iter()
            .find(|f| f.slot == SlotType::Muzzle && f.name == "Silencer")
            .map(|f| f.compatible.clone())
            .unwrap_or_default();
        assert_eq!(silencer.len(), 13);
        for id in ["hairpin", "iltoro", "jupiter", "equalizer", "venator"] {
            assert!(!silencer.contains(&WeaponId::from(id)), "{id}");
        }
        assert!(silencer.contains(&WeaponId::from("renegade")));
    }

    #[test]
    fn anvil_splitter_fits_only_anvil() {
        let weapons = builtin_weapons();
        let families = builtin_families(&weapons);
        let splitter = families.iter().find(|f| f.name == "Anvil Splitter");
        assert!(splitter.is_some_and(|f| f.accepts(&WeaponId::from("anvil"))));
        assert!(splitter.is_some_and(|f| f.compatible.len() == 1));
    }
}
