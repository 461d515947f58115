//! Stand-alone primary weapon scoring.
//!
//! Five independent sub-scores, each in `[0, 1]`, combined with the
//! configured weights:
//!
//! | Sub-score | Driven by |
//! |-----------|-----------|
//! | location  | map class table, map range table, ARC/PVP threat blend |
//! | focus     | PVP and ARC grades blended per focus |
//! | range     | numeric range against the preferred window |
//! | solo/squad| class heuristics per squad mode |
//! | stealth   | description keywords, unless stealth is required |

use loadout_types::{AdvisorInputs, AmmoType, PreferredRange, ScoreBreakdown, SquadMode, Weapon, WeaponClass};

use crate::config::{AdvisorConfig, RangeConfig};
use crate::features::mentions_any;
use crate::scoring::clamp_unit;

/// Score `weapon` as a primary under `inputs`.
pub fn score_primary(weapon: &Weapon, inputs: &AdvisorInputs, config: &AdvisorConfig) -> ScoreBreakdown {
    let location_fit = location_fit(weapon, inputs, config);
    let focus_fit = focus_fit(weapon, inputs, config);
    let range_fit = range_fit(weapon.range, inputs.preferred_range, &config.range);
    let solo_squad_fit = solo_squad_fit(weapon, inputs.squad, config);
    let stealth_preference_fit = stealth_preference_fit(weapon, inputs, config);

    let w = &config.primary_weights;
    let weighted_total = clamp_unit(
        location_fit * w.location
            + focus_fit * w.focus
            + range_fit * w.range
            + solo_squad_fit * w.solo_squad
            + stealth_preference_fit * w.stealth_preference,
    );

    ScoreBreakdown {
        location_fit,
        focus_fit,
        range_fit,
        solo_squad_fit,
        stealth_preference_fit,
        weighted_total,
    }
}

fn location_fit(weapon: &Weapon, inputs: &AdvisorInputs, config: &AdvisorConfig) -> f64 {
    let profile = config.locations.get(inputs.location);
    let blend = &config.location_fit;
    let class_fit = profile.class_weights.get(weapon.class);
    let preferred_range_fit = profile.preferred_ranges.get(inputs.preferred_range);
    let threat = profile.arc_bias * weapon.arc.score() * blend.threat_arc
        + profile.pvp_bias * weapon.pvp.score() * blend.threat_pvp;
    clamp_unit(class_fit * blend.class + preferred_range_fit * blend.range + threat * blend.threat)
}

fn focus_fit(weapon: &Weapon, inputs: &AdvisorInputs, config: &AdvisorConfig) -> f64 {
    let blend = config.focus_blends.get(inputs.focus);
    clamp_unit(weapon.pvp.score() * blend.pvp + weapon.arc.score() * blend.arc)
}

/// Fit of a numeric range against a preference: 1 inside the window,
/// decaying linearly over the falloff distance outside it. `Any` is flat.
pub fn range_fit(range: f64, preferred: PreferredRange, config: &RangeConfig) -> f64 {
    let Some(window) = config.window(preferred) else {
        return config.any_preference_fit;
    };
    if window.contains(range) {
        return 1.0;
    }
    let delta = if range < window.min {
        window.min - range
    } else {
        range - window.max
    };
    clamp_unit(1.0 - delta / config.falloff)
}

fn solo_squad_fit(weapon: &Weapon, squad: SquadMode, config: &AdvisorConfig) -> f64 {
    let table = &config.squad_fit;
    let special = weapon.class == WeaponClass::Special && weapon.ammo == AmmoType::Special;
    match (squad, weapon.class) {
        (SquadMode::Solo, WeaponClass::Lmg) => table.solo_lmg,
        (SquadMode::Solo, _) if special => table.solo_special,
        (SquadMode::Solo, WeaponClass::Smg | WeaponClass::AssaultRifle | WeaponClass::Pistol) => {
            table.solo_mobile
        }
        (SquadMode::Solo, _) => table.solo_default,
        (SquadMode::Squad, WeaponClass::Lmg) => table.squad_lmg,
        (SquadMode::Squad, _) if special => table.squad_special,
        (SquadMode::Squad, _) => table.squad_default,
    }
}

fn stealth_preference_fit(weapon: &Weapon, inputs: &AdvisorInputs, config: &AdvisorConfig) -> f64 {
    let fit = &config.stealth_fit;
    if inputs.stealth_important {
        fit.required
    } else if mentions_any(&weapon.description, &fit.quiet_keywords) {
        fit.quiet
    } else {
        fit.loud
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use loadout_catalog::Catalog;
    use loadout_types::{Focus, Location, WeaponId};

    use super::*;

    fn weapon(id: &str) -> Weapon {
        Catalog::builtin()
            .weapon(&WeaponId::from(id))
            .cloned()
            .unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn range_fit_window_and_falloff() {
        let config = RangeConfig::default();
        assert_eq!(range_fit(70.0, PreferredRange::Long, &config), 1.0);
        assert!(close(range_fit(48.0, PreferredRange::Long, &config), 0.75));
        assert_eq!(range_fit(10.0, PreferredRange::Long, &config), 0.0);
        assert!(close(range_fit(50.2, PreferredRange::Close, &config), 1.0 - 12.2 / 40.0));
        assert_eq!(range_fit(5.0, PreferredRange::Any, &config), 0.75);
    }

    #[test]
    fn renegade_on_spaceport_long_pvp() {
        let config = AdvisorConfig::default();
        let inputs = AdvisorInputs {
            location: Location::Spaceport,
            focus: Focus::Pvp,
            preferred_range: PreferredRange::Long,
            ..AdvisorInputs::default()
        };
        let breakdown = score_primary(&weapon("renegade"), &inputs, &config);

        let threat = 0.6 * (4.0 / 6.0) * 0.55 + 0.65 * (5.0 / 6.0) * 0.45;
        assert!(close(breakdown.location_fit, 0.92 * 0.5 + 1.0 * 0.15 + threat * 0.35));
        assert!(close(breakdown.focus_fit, (5.0 / 6.0) * 0.8 + (4.0 / 6.0) * 0.2));
        assert_eq!(breakdown.range_fit, 1.0);
        assert_eq!(breakdown.solo_squad_fit, 0.72);
        assert_eq!(breakdown.stealth_preference_fit, 0.55);
        assert!(breakdown.weighted_total > 0.0 && breakdown.weighted_total <= 1.0);
    }

    #[test]
    fn squad_table() {
        let config = AdvisorConfig::default();
        assert_eq!(solo_squad_fit(&weapon("torrente"), SquadMode::Solo, &config), 0.45);
        assert_eq!(solo_squad_fit(&weapon("torrente"), SquadMode::Squad, &config), 0.88);
        assert_eq!(solo_squad_fit(&weapon("equalizer"), SquadMode::Solo, &config), 0.5);
        assert_eq!(solo_squad_fit(&weapon("equalizer"), SquadMode::Squad, &config), 0.8);
        assert_eq!(solo_squad_fit(&weapon("stitcher"), SquadMode::Solo, &config), 0.9);
        assert_eq!(solo_squad_fit(&weapon("anvil"), SquadMode::Solo, &config), 0.72);
        assert_eq!(solo_squad_fit(&weapon("anvil"), SquadMode::Squad, &config), 0.74);
        // Special class on special ammo only; aphelion is a BR.
        assert_eq!(solo_squad_fit(&weapon("aphelion"), SquadMode::Solo, &config), 0.72);
    }

    #[test]
    fn quiet_description_bonus() {
        let config = AdvisorConfig::default();
        let loose = AdvisorInputs::default();
        assert_eq!(stealth_preference_fit(&weapon("hairpin"), &loose, &config), 0.78);
        assert_eq!(stealth_preference_fit(&weapon("anvil"), &loose, &config), 0.55);

        let strict = AdvisorInputs {
            stealth_important: true,
            ..AdvisorInputs::default()
        };
        assert_eq!(stealth_preference_fit(&weapon("anvil"), &strict, &config), 1.0);
    }
}
