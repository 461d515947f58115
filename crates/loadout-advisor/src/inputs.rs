//! Questionnaire normalization and hard-constraint filtering.
//!
//! Normalization never fails: every missing field takes its default and an
//! explicitly empty rarity list is kept as an empty set. Filtering is a
//! strict AND of the rarity allowlist and the stealth requirement.

use loadout_types::{AdvisorInputs, PartialAdvisorInputs, Rarity};

use crate::features::WeaponFeatures;

/// Fill every missing field of `raw` with its default.
///
/// Normalizing an already normalized questionnaire returns an equal value.
pub fn normalize(raw: &PartialAdvisorInputs) -> AdvisorInputs {
    let defaults = AdvisorInputs::default();
    AdvisorInputs {
        location: raw.location.unwrap_or(defaults.location),
        squad: raw.squad.unwrap_or(defaults.squad),
        focus: raw.focus.unwrap_or(defaults.focus),
        preferred_range: raw.preferred_range.unwrap_or(defaults.preferred_range),
        stealth_important: raw.stealth_important.unwrap_or(defaults.stealth_important),
        allowed_weapon_rarities: raw
            .allowed_weapon_rarities
            .as_ref()
            .map_or(defaults.allowed_weapon_rarities, |rarities| {
                rarities.iter().copied().collect()
            }),
        debug: raw.debug.unwrap_or(defaults.debug),
    }
}

/// Whether a weapon with `rarity` and `features` survives the hard
/// constraints in `inputs`.
pub fn passes_hard_constraints(
    rarity: Rarity,
    features: &WeaponFeatures<'_>,
    inputs: &AdvisorInputs,
) -> bool {
    inputs.allowed_weapon_rarities.contains(&rarity)
        && (!inputs.stealth_important || features.stealth_eligible)
}

/// Keep the features whose weapon passes the hard constraints, preserving
/// catalog order.
pub fn filter_candidates<'a>(
    features: &[WeaponFeatures<'a>],
    inputs: &AdvisorInputs,
) -> Vec<WeaponFeatures<'a>> {
    features
        .iter()
        .filter(|f| passes_hard_constraints(f.weapon.rarity, f, inputs))
        .copied()
        .collect()
}
