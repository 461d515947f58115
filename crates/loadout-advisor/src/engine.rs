//! The advisor facade: normalize, filter, score, rank, and draw.

use std::collections::BTreeSet;

use loadout_catalog::Catalog;
use loadout_types::{
    AdvisorEmptyState, AdvisorResult, PartialAdvisorInputs, RankedRecommendations, ShuffleState,
    WeaponId,
};
use tracing::debug;

use crate::config::AdvisorConfig;
use crate::features::{WeaponFeatures, derive_features, stealth_eligible_set};
use crate::inputs::{filter_candidates, normalize};
use crate::pairs::{ScoredCandidate, rank_pairs};
use crate::primary::score_primary;
use crate::shuffle::next_batch;

/// Options for [`Advisor::recommend`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Pairs per batch. Defaults to the configured batch size.
    pub batch_size: Option<usize>,
    /// Cursor returned by the previous call.
    pub shuffle_state: Option<ShuffleState>,
    /// Overrides the questionnaire's own debug flag.
    pub force_debug: Option<bool>,
}

/// A recommendation engine bound to one catalog and one tuning.
///
/// Holds no per-session state; every call is a pure function of its
/// arguments, so one `Advisor` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Advisor {
    catalog: Catalog,
    config: AdvisorConfig,
    stealth_eligible: BTreeSet<WeaponId>,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new(Catalog::builtin(), AdvisorConfig::default())
    }
}

impl Advisor {
    /// Bind `catalog` and `config`, computing the stealth-eligible set once.
    pub fn new(catalog: Catalog, config: AdvisorConfig) -> Self {
        let stealth_eligible = stealth_eligible_set(&catalog, &config.stealth_set);
        debug!(
            weapons = catalog.weapons().len(),
            stealth_eligible = stealth_eligible.len(),
            "advisor ready"
        );
        Self {
            catalog,
            config,
            stealth_eligible,
        }
    }

    /// The bound catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The bound tuning.
    pub const fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Derived features for every catalog weapon, in catalog order.
    pub fn features(&self) -> Vec<WeaponFeatures<'_>> {
        derive_features(&self.catalog, &self.stealth_eligible, &self.config)
    }

    /// The full ranking for a questionnaire.
    ///
    /// `include_debug` overrides the questionnaire's debug flag when set.
    pub fn rank(
        &self,
        raw: &PartialAdvisorInputs,
        include_debug: Option<bool>,
    ) -> RankedRecommendations {
        let inputs = normalize(raw);
        let include_debug = include_debug.unwrap_or(inputs.debug);

        let features = self.features();
        let candidates = filter_candidates(&features, &inputs);
        debug!(
            weapons = features.len(),
            candidates = candidates.len(),
            "hard constraints applied"
        );
        if candidates.len() < 2 {
            return RankedRecommendations {
                inputs,
                ranked: Vec::new(),
                empty_state: Some(AdvisorEmptyState::insufficient_valid_weapons()),
            };
        }

        let scored: Vec<ScoredCandidate<'_>> = candidates
            .into_iter()
            .map(|features| ScoredCandidate {
                breakdown: score_primary(features.weapon, &inputs, &self.config),
                features,
            })
            .collect();
        let ranked = rank_pairs(&scored, &inputs, include_debug, &self.config);
        let empty_state = ranked
            .is_empty()
            .then(AdvisorEmptyState::no_valid_pairs);

        RankedRecommendations {
            inputs,
            ranked,
            empty_state,
        }
    }

    /// The next visible batch for a questionnaire.
    ///
    /// Debug breakdowns are included only when `force_debug` or the
    /// questionnaire asks for them.
    pub fn recommend(&self, raw: &PartialAdvisorInputs, options: RecommendOptions) -> AdvisorResult {
        let include_debug = options.force_debug.or(raw.debug).unwrap_or(false);
        let ranked = self.rank(raw, Some(include_debug));
        self.draw(&ranked, options.shuffle_state, options.batch_size)
    }

    /// Draw a batch from a ranking computed earlier by [`Self::rank`].
    pub fn draw(
        &self,
        ranked: &RankedRecommendations,
        shuffle_state: Option<ShuffleState>,
        batch_size: Option<usize>,
    ) -> AdvisorResult {
        if let Some(empty_state) = &ranked.empty_state {
            return AdvisorResult {
                recommendations: Vec::new(),
                empty_state: Some(empty_state.clone()),
                shuffle_state: shuffle_state.unwrap_or_default(),
            };
        }

        let size = batch_size.unwrap_or(self.config.shuffle.default_batch_size);
        let drawn = next_batch(&ranked.ranked, shuffle_state, size);
        let empty_state = drawn
            .batch
            .is_empty()
            .then(AdvisorEmptyState::no_valid_pairs);
        AdvisorResult {
            recommendations: drawn.batch,
            empty_state,
            shuffle_state: drawn.state,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use loadout_types::{AdvisorInputs, EmptyStateCode, Rarity};

    use super::*;

    fn legendary_only() -> PartialAdvisorInputs {
        PartialAdvisorInputs {
            allowed_weapon_rarities: Some(vec![Rarity::Legendary]),
            ..PartialAdvisorInputs::default()
        }
    }

    #[test]
    fn default_questionnaire_returns_two() {
        let advisor = Advisor::default();
        let result = advisor.recommend(&PartialAdvisorInputs::default(), RecommendOptions::default());
        assert_eq!(result.recommendations.len(), 2);
        assert!(result.empty_state.is_none());
        assert_eq!(result.shuffle_state.seen_pair_keys.len(), 2);
    }

    #[test]
    fn too_few_candidates_is_an_empty_state() {
        let advisor = Advisor::default();
        let raw = PartialAdvisorInputs {
            stealth_important: Some(true),
            ..legendary_only()
        };
        let prior = ShuffleState {
            cycle: 4,
            ..ShuffleState::default()
        };
        let result = advisor.recommend(
            &raw,
            RecommendOptions {
                shuffle_state: Some(prior.clone()),
                ..RecommendOptions::default()
            },
        );
        assert!(result.recommendations.is_empty());
        assert_eq!(
            result.empty_state.unwrap().code,
            EmptyStateCode::InsufficientValidWeapons
        );
        assert_eq!(result.shuffle_state, prior);
    }

    #[test]
    fn empty_pair_expansion_is_no_valid_pairs() {
        let mut config = AdvisorConfig::default();
        config.pairing.top_primary_count = 0;
        let advisor = Advisor::new(Catalog::builtin(), config);

        let ranked = advisor.rank(&PartialAdvisorInputs::default(), None);
        assert!(ranked.ranked.is_empty());
        let code = ranked.empty_state.as_ref().unwrap().code;
        assert_eq!(code, EmptyStateCode::NoValidPairs);
        assert_ne!(code, EmptyStateCode::InsufficientValidWeapons);

        let result = advisor.recommend(&PartialAdvisorInputs::default(), RecommendOptions::default());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.empty_state.unwrap().code, EmptyStateCode::NoValidPairs);
    }

    #[test]
    fn drawing_from_an_empty_ranking_is_no_valid_pairs() {
        let advisor = Advisor::default();
        let ranked = RankedRecommendations {
            inputs: AdvisorInputs::default(),
            ranked: Vec::new(),
            empty_state: None,
        };
        let result = advisor.draw(&ranked, None, None);
        assert!(result.recommendations.is_empty());
        let code = result.empty_state.unwrap().code;
        assert_eq!(code, EmptyStateCode::NoValidPairs);
        assert_ne!(code, EmptyStateCode::InsufficientValidWeapons);
        assert_eq!(result.shuffle_state, ShuffleState::default());
    }

    #[test]
    fn debug_is_stripped_unless_requested() {
        let advisor = Advisor::default();
        let raw = PartialAdvisorInputs {
            debug: Some(true),
            ..legendary_only()
        };
        let with = advisor.recommend(&raw, RecommendOptions::default());
        assert!(with.recommendations.iter().all(|r| r.debug.is_some()));

        let without = advisor.recommend(
            &raw,
            RecommendOptions {
                force_debug: Some(false),
                ..RecommendOptions::default()
            },
        );
        assert!(without.recommendations.iter().all(|r| r.debug.is_none()));
    }

    #[test]
    fn rank_reports_normalized_inputs() {
        let advisor = Advisor::default();
        let ranked = advisor.rank(&legendary_only(), None);
        assert_eq!(ranked.ranked.len(), 6);
        assert!(ranked.empty_state.is_none());
        assert_eq!(ranked.inputs.allowed_weapon_rarities.len(), 1);
    }

    #[test]
    fn batch_size_is_honoured() {
        let advisor = Advisor::default();
        let result = advisor.recommend(
            &PartialAdvisorInputs::default(),
            RecommendOptions {
                batch_size: Some(5),
                ..RecommendOptions::default()
            },
        );
        assert_eq!(result.recommendations.len(), 5);
    }
}
