//! Ordered pair expansion and ranking.
//!
//! Candidates are sorted by primary score, the top few become the primary
//! pool, and every `(primary, other candidate)` pair is scored. The final
//! order is total: pair score, primary score, complement score (all
//! descending), then pair key ascending.

use std::cmp::Ordering;

use loadout_types::{
    AdvisorInputs, ComplementBreakdown, PairDebug, PairKey, PairRationale, PairRecommendation,
    PreferredRange, ScoreBreakdown,
};
use tracing::debug;

use crate::complement::score_complement;
use crate::config::AdvisorConfig;
use crate::features::WeaponFeatures;
use crate::scoring::{clamp_unit, round_to, tie_bucket_id};

/// A filtered weapon with its primary breakdown.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    /// Derived features, including the catalog record.
    pub features: WeaponFeatures<'a>,
    /// Stand-alone primary breakdown.
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate<'_> {
    /// The weighted primary score.
    pub const fn score(&self) -> f64 {
        self.breakdown.weighted_total
    }
}

struct WorkingPair<'c, 'a> {
    key: PairKey,
    primary: &'c ScoredCandidate<'a>,
    secondary: &'c ScoredCandidate<'a>,
    complement: ComplementBreakdown,
    pair_score: f64,
}

impl WorkingPair<'_, '_> {
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .pair_score
            .total_cmp(&self.pair_score)
            .then_with(|| other.primary.score().total_cmp(&self.primary.score()))
            .then_with(|| {
                other
                    .complement
                    .weighted_total
                    .total_cmp(&self.complement.weighted_total)
            })
            .then_with(|| self.key.cmp(&other.key))
    }
}

/// Expand, score, and rank every ordered pair.
///
/// Debug breakdowns are attached only when `include_debug` is set;
/// otherwise the field is `None` and is omitted from serialized output.
pub fn rank_pairs(
    candidates: &[ScoredCandidate<'_>],
    inputs: &AdvisorInputs,
    include_debug: bool,
    config: &AdvisorConfig,
) -> Vec<PairRecommendation> {
    let mut by_primary: Vec<&ScoredCandidate<'_>> = candidates.iter().collect();
    by_primary.sort_by(|a, b| {
        b.score()
            .total_cmp(&a.score())
            .then_with(|| a.features.weapon.id.cmp(&b.features.weapon.id))
    });
    let pool = by_primary
        .into_iter()
        .take(config.pairing.top_primary_count);

    let pairing = &config.pairing;
    let mut pairs: Vec<WorkingPair<'_, '_>> = Vec::new();
    for primary in pool {
        for secondary in candidates {
            if secondary.features.weapon.id == primary.features.weapon.id {
                continue;
            }
            let complement = score_complement(
                &primary.features,
                &secondary.features,
                secondary.score(),
                &config.complement,
            );
            let pair_score = clamp_unit(
                primary.score() * pairing.primary_weight
                    + complement.weighted_total * pairing.secondary_weight,
            );
            pairs.push(WorkingPair {
                key: PairKey::new(&primary.features.weapon.id, &secondary.features.weapon.id),
                primary,
                secondary,
                complement,
                pair_score,
            });
        }
    }
    pairs.sort_by(WorkingPair::rank_order);

    debug!(
        candidates = candidates.len(),
        pool = candidates.len().min(pairing.top_primary_count),
        pairs = pairs.len(),
        "pairs ranked"
    );

    pairs
        .into_iter()
        .enumerate()
        .map(|(index, pair)| {
            let rationale = rationale(&pair, inputs);
            PairRecommendation {
                rank: index.saturating_add(1),
                primary_weapon_id: pair.primary.features.weapon.id.clone(),
                secondary_weapon_id: pair.secondary.features.weapon.id.clone(),
                primary_score: round_to(pair.primary.score(), pairing.score_precision),
                secondary_score: round_to(pair.complement.weighted_total, pairing.score_precision),
                pair_score: round_to(pair.pair_score, pairing.score_precision),
                tie_bucket_id: tie_bucket_id(pair.pair_score, pairing.tie_precision),
                reasons: render_reasons(
                    &pair.primary.features.weapon.name,
                    &pair.secondary.features.weapon.name,
                    &rationale,
                ),
                rationale,
                debug: include_debug.then_some(PairDebug {
                    primary_breakdown: pair.primary.breakdown,
                    secondary_breakdown: pair.secondary.breakdown,
                    complement_breakdown: pair.complement,
                }),
                pair_key: pair.key,
            }
        })
        .collect()
}

fn rationale(pair: &WorkingPair<'_, '_>, inputs: &AdvisorInputs) -> PairRationale {
    PairRationale {
        location: inputs.location,
        preferred_range: inputs.preferred_range,
        primary_band: pair.primary.features.range_band,
        secondary_band: pair.secondary.features.range_band,
        shared_ammo: pair.primary.features.weapon.ammo == pair.secondary.features.weapon.ammo,
    }
}

/// Render the two reason strings for a pair: why the primary fits, then
/// how the secondary complements it.
pub fn render_reasons(primary_name: &str, secondary_name: &str, rationale: &PairRationale) -> Vec<String> {
    let range_text = match rationale.preferred_range {
        PreferredRange::Any => "mixed ranges".to_owned(),
        range => format!("{range}-range fights"),
    };
    let primary_reason = format!(
        "{primary_name} is the best primary fit for {} and {range_text}.",
        rationale.location.label()
    );

    let ammo_note = if rationale.shared_ammo {
        "shares ammo reserves with your primary."
    } else {
        "covers you with a different ammo type."
    };
    let secondary_reason = if rationale.primary_band == rationale.secondary_band {
        format!("{secondary_name} reinforces the same fight profile and {ammo_note}")
    } else {
        format!(
            "{secondary_name} complements your {} primary with {} coverage and {ammo_note}",
            rationale.primary_band, rationale.secondary_band
        )
    };

    vec![primary_reason, secondary_reason]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::BTreeSet;

    use loadout_catalog::Catalog;
    use loadout_types::{Focus, Location, RangeBand};

    use super::*;
    use crate::features::{derive_features, stealth_eligible_set};
    use crate::inputs::filter_candidates;
    use crate::primary::score_primary;

    fn ranked(inputs: &AdvisorInputs, include_debug: bool) -> Vec<PairRecommendation> {
        let catalog = Catalog::builtin();
        let config = AdvisorConfig::default();
        let stealth = stealth_eligible_set(&catalog, &config.stealth_set);
        let features = derive_features(&catalog, &stealth, &config);
        let candidates: Vec<ScoredCandidate<'_>> = filter_candidates(&features, inputs)
            .into_iter()
            .map(|features| ScoredCandidate {
                breakdown: score_primary(features.weapon, inputs, &config),
                features,
            })
            .collect();
        rank_pairs(&candidates, inputs, include_debug, &config)
    }

    #[test]
    fn pair_count_is_bounded_by_primary_pool() {
        let inputs = AdvisorInputs::default();
        let pairs = ranked(&inputs, false);
        // 21 candidates, 8 primaries, each paired with the other 20.
        assert_eq!(pairs.len(), 8 * 20);
        let primaries: BTreeSet<_> = pairs.iter().map(|p| p.primary_weapon_id.clone()).collect();
        assert_eq!(primaries.len(), 8);
    }

    #[test]
    fn small_pool_expands_fully() {
        let inputs = AdvisorInputs {
            allowed_weapon_rarities: BTreeSet::from([loadout_types::Rarity::Legendary]),
            ..AdvisorInputs::default()
        };
        assert_eq!(ranked(&inputs, false).len(), 6);
    }

    #[test]
    fn ranks_are_dense_and_ordered() {
        let pairs = ranked(&AdvisorInputs::default(), false);
        for (index, pair) in pairs.iter().enumerate() {
            assert_eq!(pair.rank, index + 1);
            assert_ne!(pair.primary_weapon_id, pair.secondary_weapon_id);
        }
        for window in pairs.windows(2) {
            assert!(window[0].pair_score >= window[1].pair_score);
        }
    }

    #[test]
    fn debug_payload_is_gated() {
        let inputs = AdvisorInputs::default();
        assert!(ranked(&inputs, false).iter().all(|p| p.debug.is_none()));
        let with_debug = ranked(&inputs, true);
        assert!(with_debug.iter().all(|p| p.debug.is_some()));
        let first = &with_debug[0];
        let debug = first.debug.unwrap();
        assert!((debug.complement_breakdown.base_secondary_fit
            - debug.secondary_breakdown.weighted_total)
            .abs()
            < 1e-12);
    }

    #[test]
    fn bucket_ids_follow_pair_scores() {
        let pairs = ranked(&AdvisorInputs::default(), false);
        for pair in &pairs {
            assert!(pair.tie_bucket_id.starts_with("score_0."));
            assert_eq!(pair.tie_bucket_id.len(), "score_0.0000".len());
        }
    }

    #[test]
    fn top_pair_for_long_range_pvp_on_spaceport() {
        let inputs = AdvisorInputs {
            location: Location::Spaceport,
            focus: Focus::Pvp,
            preferred_range: PreferredRange::Long,
            ..AdvisorInputs::default()
        };
        let pairs = ranked(&inputs, false);
        assert_eq!(pairs[0].pair_key.as_str(), "renegade__anvil");
        assert_eq!(
            pairs[0].reasons[0],
            "Renegade is the best primary fit for spaceport and long-range fights."
        );
    }

    #[test]
    fn reason_templates() {
        let rationale = PairRationale {
            location: Location::BlueGate,
            preferred_range: PreferredRange::Any,
            primary_band: RangeBand::Long,
            secondary_band: RangeBand::Mid,
            shared_ammo: true,
        };
        let reasons = render_reasons("Jupiter", "Equalizer", &rationale);
        assert_eq!(
            reasons,
            vec![
                "Jupiter is the best primary fit for blue gate and mixed ranges.".to_owned(),
                "Equalizer complements your long primary with mid coverage and shares ammo reserves with your primary.".to_owned(),
            ]
        );

        let same_band = PairRationale {
            secondary_band: RangeBand::Long,
            shared_ammo: false,
            ..rationale
        };
        assert_eq!(
            render_reasons("Jupiter", "Osprey", &same_band)[1],
            "Osprey reinforces the same fight profile and covers you with a different ammo type."
        );
    }
}
