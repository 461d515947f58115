//! Tie-bucket aware reveal batches.
//!
//! The cursor is a plain value: callers pass the previous [`ShuffleState`]
//! in and get the next one back. Within a cycle no pair is revealed twice,
//! and buckets are drained strictly in rank order. Once every pair has been
//! seen the cycle resets and the counter increments.

use std::collections::BTreeMap;

use loadout_types::{PairRecommendation, ShuffleState};
use tracing::debug;

/// One reveal step.
#[derive(Debug, Clone, PartialEq)]
pub struct ShuffleBatch {
    /// The pairs to show.
    pub batch: Vec<PairRecommendation>,
    /// Cursor for the following call.
    pub state: ShuffleState,
}

/// Group `ranked` by tie bucket, buckets in first-seen (rank) order.
fn buckets(ranked: &[PairRecommendation]) -> Vec<Vec<&PairRecommendation>> {
    let mut positions: BTreeMap<&str, usize> = BTreeMap::new();
    let mut groups: Vec<Vec<&PairRecommendation>> = Vec::new();
    for rec in ranked {
        let next = groups.len();
        let position = *positions.entry(rec.tie_bucket_id.as_str()).or_insert(next);
        if position == next {
            groups.push(Vec::new());
        }
        if let Some(group) = groups.get_mut(position) {
            group.push(rec);
        }
    }
    groups
}

/// Walk the buckets from the cursor and fill `batch` up to `size`.
///
/// A bucket is left once this draw empties it; a bucket with nothing left
/// is skipped. Every bucket is inspected at most once per walk.
fn walk(
    groups: &[Vec<&PairRecommendation>],
    state: &mut ShuffleState,
    batch: &mut Vec<PairRecommendation>,
    size: usize,
) {
    let count = groups.len();
    let mut index = state.bucket_index.min(count.saturating_sub(1));
    let mut inspected = 0_usize;

    while batch.len() < size && inspected < count {
        let Some(group) = groups.get(index) else {
            break;
        };
        let available: Vec<&PairRecommendation> = group
            .iter()
            .copied()
            .filter(|rec| {
                !state.seen_pair_keys.contains(&rec.pair_key)
                    && !batch.iter().any(|shown| shown.pair_key == rec.pair_key)
            })
            .collect();
        let needed = size.saturating_sub(batch.len());
        let taken = available.len().min(needed);
        for rec in available.iter().take(taken) {
            state.seen_pair_keys.insert(rec.pair_key.clone());
            batch.push((*rec).clone());
        }
        if taken == available.len() {
            index = index.saturating_add(1).checked_rem(count).unwrap_or(0);
            inspected = inspected.saturating_add(1);
        }
    }
    state.bucket_index = index;
}

/// Reset the cycle once every ranked pair has been seen.
fn wrap_if_exhausted(ranked: &[PairRecommendation], state: &mut ShuffleState) -> bool {
    let exhausted = ranked
        .iter()
        .all(|rec| state.seen_pair_keys.contains(&rec.pair_key));
    if exhausted {
        state.seen_pair_keys.clear();
        state.bucket_index = 0;
        state.cycle = state.cycle.saturating_add(1);
    }
    exhausted
}

/// Draw the next batch of `size` pairs (at least one) from `ranked`.
///
/// A missing `state` starts a fresh cursor. An empty ranking returns an
/// empty batch and the state unchanged. When a draw finishes a cycle with
/// a short batch, it tops up from the fresh cycle so callers always see a
/// full batch whenever `ranked` holds enough pairs.
pub fn next_batch(
    ranked: &[PairRecommendation],
    state: Option<ShuffleState>,
    size: usize,
) -> ShuffleBatch {
    let mut state = state.unwrap_or_default();
    if ranked.is_empty() {
        return ShuffleBatch {
            batch: Vec::new(),
            state,
        };
    }

    let size = size.max(1);
    let groups = buckets(ranked);
    let mut batch = Vec::with_capacity(size);

    walk(&groups, &mut state, &mut batch, size);
    let wrapped = wrap_if_exhausted(ranked, &mut state);
    if wrapped && batch.len() < size && ranked.len() >= size {
        walk(&groups, &mut state, &mut batch, size);
        wrap_if_exhausted(ranked, &mut state);
    }

    if batch.is_empty() {
        let batch: Vec<PairRecommendation> = ranked.iter().take(size).cloned().collect();
        let state = ShuffleState {
            bucket_index: 0,
            seen_pair_keys: batch.iter().map(|rec| rec.pair_key.clone()).collect(),
            cycle: state.cycle,
        };
        debug!(batch = batch.len(), "shuffle fell back to rank order");
        return ShuffleBatch { batch, state };
    }

    debug!(
        batch = batch.len(),
        buckets = groups.len(),
        bucket_index = state.bucket_index,
        seen = state.seen_pair_keys.len(),
        cycle = state.cycle,
        "shuffle batch drawn"
    );
    ShuffleBatch { batch, state }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::collections::BTreeSet;

    use loadout_types::{
        Location, PairKey, PairRationale, PreferredRange, RangeBand, WeaponId,
    };

    use super::*;

    fn rec(key: &str, bucket: &str) -> PairRecommendation {
        let (primary, secondary) = key.split_once("__").unwrap();
        PairRecommendation {
            rank: 1,
            pair_key: PairKey::from(key),
            primary_weapon_id: WeaponId::from(primary),
            secondary_weapon_id: WeaponId::from(secondary),
            primary_score: 0.5,
            secondary_score: 0.5,
            pair_score: 0.5,
            tie_bucket_id: bucket.to_owned(),
            reasons: Vec::new(),
            rationale: PairRationale {
                location: Location::Dam,
                preferred_range: PreferredRange::Any,
                primary_band: RangeBand::Mid,
                secondary_band: RangeBand::Mid,
                shared_ammo: false,
            },
            debug: None,
        }
    }

    fn keys(batch: &[PairRecommendation]) -> Vec<&str> {
        batch.iter().map(|rec| rec.pair_key.as_str()).collect()
    }

    fn sample() -> Vec<PairRecommendation> {
        vec![
            rec("a__b", "score_0.9000"),
            rec("a__c", "score_0.9000"),
            rec("a__d", "score_0.9000"),
            rec("b__a", "score_0.8000"),
            rec("b__c", "score_0.7000"),
        ]
    }

    #[test]
    fn empty_ranking_keeps_state() {
        let state = ShuffleState {
            bucket_index: 3,
            seen_pair_keys: BTreeSet::new(),
            cycle: 7,
        };
        let out = next_batch(&[], Some(state.clone()), 2);
        assert!(out.batch.is_empty());
        assert_eq!(out.state, state);
        assert_eq!(next_batch(&[], None, 2).state, ShuffleState::default());
    }

    #[test]
    fn first_draw_takes_top_of_first_bucket() {
        let ranked = sample();
        let out = next_batch(&ranked, None, 2);
        assert_eq!(keys(&out.batch), vec!["a__b", "a__c"]);
        assert_eq!(out.state.bucket_index, 0);
        assert_eq!(out.state.seen_pair_keys.len(), 2);
        assert_eq!(out.state.cycle, 0);
    }

    #[test]
    fn finishes_bucket_before_moving_on() {
        let ranked = sample();
        let first = next_batch(&ranked, None, 2);
        let second = next_batch(&ranked, Some(first.state), 2);
        assert_eq!(keys(&second.batch), vec!["a__d", "b__a"]);
        assert_eq!(second.state.bucket_index, 2);
    }

    #[test]
    fn cycle_wraps_and_tops_up_without_duplicates() {
        let ranked = sample();
        let mut state = None;
        let mut seen = Vec::new();
        for _ in 0..2 {
            let out = next_batch(&ranked, state, 2);
            seen.extend(keys(&out.batch).into_iter().map(str::to_owned));
            state = Some(out.state);
        }
        let third = next_batch(&ranked, state, 2);
        assert_eq!(keys(&third.batch), vec!["b__c", "a__b"]);
        assert_eq!(third.state.cycle, 1);
        assert_eq!(
            third.state.seen_pair_keys,
            BTreeSet::from([PairKey::from("a__b")])
        );
        seen.push("b__c".to_owned());
        let unique: BTreeSet<_> = seen.iter().collect();
        assert_eq!(unique.len(), ranked.len());
    }

    #[test]
    fn single_item_batches_drain_top_bucket() {
        let ranked = sample();
        let mut state = None;
        let mut drawn = Vec::new();
        for _ in 0..4 {
            let out = next_batch(&ranked, state, 1);
            drawn.push(out.batch[0].clone());
            state = Some(out.state);
        }
        assert!(drawn[..3].iter().all(|r| r.tie_bucket_id == "score_0.9000"));
        assert_eq!(drawn[3].tie_bucket_id, "score_0.8000");
    }

    #[test]
    fn out_of_range_bucket_index_is_clamped() {
        let ranked = sample();
        let state = ShuffleState {
            bucket_index: 99,
            ..ShuffleState::default()
        };
        let out = next_batch(&ranked, Some(state), 1);
        assert_eq!(keys(&out.batch), vec!["b__c"]);
    }

    #[test]
    fn short_ranking_falls_back_to_rank_order() {
        let ranked = vec![rec("a__b", "score_0.5000")];
        let state = ShuffleState {
            bucket_index: 0,
            seen_pair_keys: BTreeSet::from([PairKey::from("a__b")]),
            cycle: 2,
        };
        let out = next_batch(&ranked, Some(state), 2);
        assert_eq!(keys(&out.batch), vec!["a__b"]);
        assert_eq!(out.state.cycle, 3);
        assert_eq!(out.state.bucket_index, 0);
        assert!(out.state.seen_pair_keys.contains(&PairKey::from("a__b")));
    }

    #[test]
    fn zero_size_draws_one() {
        let out = next_batch(&sample(), None, 0);
        assert_eq!(out.batch.len(), 1);
    }
}
