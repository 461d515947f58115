//! Per-weapon derived facts shared by the filter and the scorers.
//!
//! Features are cheap to derive (the catalog is small) and are rebuilt
//! for each ranking call. The stealth-eligible set is the exception: it is
//! computed once when an [`Advisor`](crate::Advisor) is constructed and
//! passed in explicitly.

use std::collections::BTreeSet;

use loadout_catalog::Catalog;
use loadout_types::{RangeBand, Weapon, WeaponId};
use serde::Serialize;

use crate::config::{AdvisorConfig, FireModeConfig, RangeConfig, StealthSetConfig};

/// Derived facts about one weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponFeatures<'a> {
    /// The catalog record.
    pub weapon: &'a Weapon,
    /// Coarse distance band.
    pub range_band: RangeBand,
    /// Fire mode rewards precise, spaced shots.
    pub burst_capable: bool,
    /// Fire mode supports sustained automatic fire.
    pub sustained_capable: bool,
    /// Class role baseline.
    pub role_score: f64,
    /// Passes a stealth requirement.
    pub stealth_eligible: bool,
    /// Exposes no attachment slots.
    pub no_slots: bool,
}

/// Classify a numeric range into a band using the `mid` window bounds.
pub fn range_band(range: f64, config: &RangeConfig) -> RangeBand {
    if range < config.mid.min {
        RangeBand::Close
    } else if range <= config.mid.max {
        RangeBand::Mid
    } else {
        RangeBand::Long
    }
}

/// Whether `text` contains any of `keywords`, ignoring case.
pub fn mentions_any(text: &str, keywords: &[String]) -> bool {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| lower.contains(&keyword.to_lowercase()))
}

/// Whether `fire_mode` is a burst or single-shot style mode.
pub fn is_burst_fire_mode(fire_mode: &str, config: &FireModeConfig) -> bool {
    mentions_any(fire_mode, &config.burst_keywords)
}

/// Whether `fire_mode` supports sustained automatic fire.
pub fn is_sustained_fire_mode(fire_mode: &str, config: &FireModeConfig) -> bool {
    mentions_any(fire_mode, &config.sustained_keywords)
}

/// Build the stealth-eligible set: the seed, plus every weapon that
/// accepts a `Silencer` muzzle, minus the exclusions.
pub fn stealth_eligible_set(catalog: &Catalog, config: &StealthSetConfig) -> BTreeSet<WeaponId> {
    let excluded: BTreeSet<&WeaponId> = config.excluded.iter().collect();
    config
        .seed
        .iter()
        .chain(catalog.silencer_compatible())
        .filter(|id| !excluded.contains(id))
        .cloned()
        .collect()
}

/// Derive features for every catalog weapon, in catalog order.
pub fn derive_features<'a>(
    catalog: &'a Catalog,
    stealth_eligible: &BTreeSet<WeaponId>,
    config: &AdvisorConfig,
) -> Vec<WeaponFeatures<'a>> {
    catalog
        .weapons()
        .iter()
        .map(|weapon| WeaponFeatures {
            weapon,
            range_band: range_band(weapon.range, &config.range),
            burst_capable: is_burst_fire_mode(&weapon.fire_mode, &config.fire_modes),
            sustained_capable: is_sustained_fire_mode(&weapon.fire_mode, &config.fire_modes),
            role_score: config.role_baselines.get(weapon.class),
            stealth_eligible: stealth_eligible.contains(&weapon.id),
            no_slots: weapon.slots.is_empty(),
        })
        .collect()
}
