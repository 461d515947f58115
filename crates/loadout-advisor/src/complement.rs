//! Secondary complement scoring.
//!
//! A good secondary is decent on its own and different from the primary:
//! another ammo pool, another range band, another role.

use loadout_types::{ComplementBreakdown, RangeBand};

use crate::config::ComplementConfig;
use crate::features::WeaponFeatures;
use crate::scoring::clamp_unit;

/// Score how well `secondary` complements `primary`, given the
/// secondary's own primary score.
pub fn score_complement(
    primary: &WeaponFeatures<'_>,
    secondary: &WeaponFeatures<'_>,
    secondary_base_score: f64,
    config: &ComplementConfig,
) -> ComplementBreakdown {
    let ammo_complement = if primary.weapon.ammo == secondary.weapon.ammo {
        config.same_ammo
    } else {
        config.different_ammo
    };
    let range_complement = range_complement(primary.range_band, secondary.range_band, config);
    let role_complement = role_distance(primary.range_band, secondary.range_band, config);

    let weighted_total = clamp_unit(
        secondary_base_score * config.base_weight
            + ammo_complement * config.ammo_weight
            + range_complement * config.range_weight
            + role_complement * config.role_weight,
    );

    ComplementBreakdown {
        base_secondary_fit: secondary_base_score,
        ammo_complement,
        range_complement,
        role_complement,
        weighted_total,
    }
}

fn range_complement(primary: RangeBand, secondary: RangeBand, config: &ComplementConfig) -> f64 {
    if primary == secondary {
        config.same_band
    } else if primary.is_opposite(secondary) {
        config.opposite_band
    } else {
        config.different_band
    }
}

/// Coarse role diversity from band distance: same, adjacent, or opposite.
pub fn role_distance(a: RangeBand, b: RangeBand, config: &ComplementConfig) -> f64 {
    if a == b {
        config.role_same
    } else if a.is_opposite(b) {
        config.role_opposite
    } else {
        config.role_adjacent
    }
}
