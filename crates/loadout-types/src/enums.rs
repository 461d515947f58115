//! Enumeration types for the loadout advisor.
//!
//! Every enum here is closed: lookups keyed by these types are exhaustive
//! `match` expressions, so adding a variant is a compile error until each
//! table handles it. String codes are only used at the edges (serde, URL
//! tokens) through `code()` / `from_code()`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Implements `code()`, `from_code()`, `ALL`, and `Display` for a closed
/// enum from a list of `Variant => "code"` pairs.
macro_rules! coded_enum {
    ($name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        impl $name {
            /// Every variant in canonical order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The stable string code used in serialized state and links.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Parse a code produced by [`Self::code`]. Unknown codes yield `None`.
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Catalog enums
// ---------------------------------------------------------------------------

/// Weapon class, using the short codes shown in the builder UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum WeaponClass {
    /// Assault rifle.
    #[serde(rename = "AR")]
    AssaultRifle,
    /// Battle rifle.
    #[serde(rename = "BR")]
    BattleRifle,
    /// Submachine gun.
    #[serde(rename = "SMG")]
    Smg,
    /// Shotgun.
    #[serde(rename = "SG")]
    Shotgun,
    /// Pistol.
    Pistol,
    /// Hand cannon.
    #[serde(rename = "HC")]
    HandCannon,
    /// Light machine gun.
    #[serde(rename = "LMG")]
    Lmg,
    /// Sniper rifle.
    #[serde(rename = "SR")]
    SniperRifle,
    /// Launchers, energy weapons, and other oddities.
    Special,
}

coded_enum!(WeaponClass {
    AssaultRifle => "AR",
    BattleRifle => "BR",
    Smg => "SMG",
    Shotgun => "SG",
    Pistol => "Pistol",
    HandCannon => "HC",
    Lmg => "LMG",
    SniperRifle => "SR",
    Special => "Special",
});

/// Ammunition pool a weapon draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum AmmoType {
    /// Light ammo: fast, poor against armor.
    Light,
    /// Medium ammo: general purpose.
    Medium,
    /// Heavy ammo: high penetration.
    Heavy,
    /// Shotgun shells.
    Shotgun,
    /// Energy cells and launcher rounds.
    Special,
}

coded_enum!(AmmoType {
    Light => "Light",
    Medium => "Medium",
    Heavy => "Heavy",
    Shotgun => "Shotgun",
    Special => "Special",
});

/// Item rarity tier, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Tier 1.
    Common,
    /// Tier 2.
    Uncommon,
    /// Tier 3.
    Rare,
    /// Tier 4.
    Epic,
    /// Tier 5.
    Legendary,
}

coded_enum!(Rarity {
    Common => "Common",
    Uncommon => "Uncommon",
    Rare => "Rare",
    Epic => "Epic",
    Legendary => "Legendary",
});

impl Rarity {
    /// Numeric tier (1 = Common, 5 = Legendary).
    pub const fn tier(self) -> u8 {
        match self {
            Self::Common => 1,
            Self::Uncommon => 2,
            Self::Rare => 3,
            Self::Epic => 4,
            Self::Legendary => 5,
        }
    }

    /// Single-character code used in compact share links.
    pub const fn short_code(self) -> char {
        match self {
            Self::Common => 'c',
            Self::Uncommon => 'u',
            Self::Rare => 'r',
            Self::Epic => 'e',
            Self::Legendary => 'l',
        }
    }

    /// Reverse of [`Self::short_code`].
    pub const fn from_short_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(Self::Common),
            'u' => Some(Self::Uncommon),
            'r' => Some(Self::Rare),
            'e' => Some(Self::Epic),
            'l' => Some(Self::Legendary),
            _ => None,
        }
    }
}

/// Letter grade for PVP or ARC effectiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Grade {
    /// Best in class.
    S,
    /// Strong.
    A,
    /// Above average.
    B,
    /// Average.
    C,
    /// Weak.
    D,
    /// Not viable.
    F,
}

coded_enum!(Grade {
    S => "S",
    A => "A",
    B => "B",
    C => "C",
    D => "D",
    F => "F",
});

impl Grade {
    /// Normalized score on a sixths scale: S = 1, A = 5/6 ... F = 1/6.
    pub const fn score(self) -> f64 {
        match self {
            Self::S => 1.0,
            Self::A => 5.0 / 6.0,
            Self::B => 4.0 / 6.0,
            Self::C => 3.0 / 6.0,
            Self::D => 2.0 / 6.0,
            Self::F => 1.0 / 6.0,
        }
    }

    /// Lenient parse: any unrecognized letter is treated as `C`.
    pub fn from_letter(letter: &str) -> Self {
        Self::from_code(letter).unwrap_or(Self::C)
    }
}

/// Physical attachment slot on a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SlotType {
    /// Standard muzzle device.
    Muzzle,
    /// Shotgun-only muzzle device.
    #[serde(rename = "Shotgun Muzzle")]
    ShotgunMuzzle,
    /// Grip slot under the barrel.
    Underbarrel,
    /// Light ammo magazine.
    #[serde(rename = "Light Magazine")]
    LightMagazine,
    /// Medium ammo magazine.
    #[serde(rename = "Medium Magazine")]
    MediumMagazine,
    /// Shotgun magazine.
    #[serde(rename = "Shotgun Magazine")]
    ShotgunMagazine,
    /// Stock.
    Stock,
    /// Weapon-specific tech mod.
    #[serde(rename = "Tech Mod")]
    TechMod,
}

coded_enum!(SlotType {
    Muzzle => "Muzzle",
    ShotgunMuzzle => "Shotgun Muzzle",
    Underbarrel => "Underbarrel",
    LightMagazine => "Light Magazine",
    MediumMagazine => "Medium Magazine",
    ShotgunMagazine => "Shotgun Magazine",
    Stock => "Stock",
    TechMod => "Tech Mod",
});

// ---------------------------------------------------------------------------
// Questionnaire enums
// ---------------------------------------------------------------------------

/// Named map the player is heading into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Location {
    /// Dense ruined city; close quarters.
    BuriedCity,
    /// Open launch complex; long sightlines.
    Spaceport,
    /// Mixed terrain around the dam.
    Dam,
    /// Wide valleys with heavy ARC presence.
    BlueGate,
    /// Indoor research facility.
    StellaMontis,
}

coded_enum!(Location {
    BuriedCity => "buried_city",
    Spaceport => "spaceport",
    Dam => "dam",
    BlueGate => "blue_gate",
    StellaMontis => "stella_montis",
});

impl Location {
    /// Human-readable name used in recommendation prose (`"blue gate"`).
    pub fn label(self) -> String {
        self.code().replacen('_', " ", 1)
    }
}

/// Whether the player runs alone or with a squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SquadMode {
    /// Playing alone.
    Solo,
    /// Playing with teammates.
    Squad,
}

coded_enum!(SquadMode {
    Solo => "solo",
    Squad => "squad",
});

/// Which threat the player expects to fight most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Focus {
    /// Mostly ARC machines.
    Pve,
    /// Mostly other players.
    Pvp,
    /// A bit of both.
    Mixed,
}

coded_enum!(Focus {
    Pve => "pve",
    Pvp => "pvp",
    Mixed => "mixed",
});

/// Coarse engagement distance derived from a weapon's numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RangeBand {
    /// Short range.
    Close,
    /// Medium range.
    Mid,
    /// Long range.
    Long,
}

coded_enum!(RangeBand {
    Close => "close",
    Mid => "mid",
    Long => "long",
});

impl RangeBand {
    /// True when the two bands sit at opposite ends (close vs long).
    pub const fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Close, Self::Long) | (Self::Long, Self::Close)
        )
    }
}

/// The player's preferred fighting distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum PreferredRange {
    /// Close quarters.
    Close,
    /// Medium distance.
    Mid,
    /// Long distance.
    Long,
    /// No preference.
    Any,
}

coded_enum!(PreferredRange {
    Close => "close",
    Mid => "mid",
    Long => "long",
    Any => "any",
});

impl PreferredRange {
    /// The concrete band this preference targets, if any.
    pub const fn band(self) -> Option<RangeBand> {
        match self {
            Self::Close => Some(RangeBand::Close),
            Self::Mid => Some(RangeBand::Mid),
            Self::Long => Some(RangeBand::Long),
            Self::Any => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

/// Named "no results" outcomes. These are values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum EmptyStateCode {
    /// Fewer than two weapons survived the hard constraints.
    InsufficientValidWeapons,
    /// Candidates existed but pairing produced nothing.
    NoValidPairs,
}

coded_enum!(EmptyStateCode {
    InsufficientValidWeapons => "INSUFFICIENT_VALID_WEAPONS",
    NoValidPairs => "NO_VALID_PAIRS",
});
