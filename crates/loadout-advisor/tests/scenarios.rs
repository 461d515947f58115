//! End-to-end behavior of the advisor over the bundled catalog.
//!
//! Covers literal scenarios, determinism, the batch cardinality contract,
//! constraint soundness, debug gating, tie-cycle exhaustion, cursor resume,
//! and the share-link round trip.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::{BTreeMap, BTreeSet};

use loadout_advisor::{Advisor, RecommendOptions, parse_query, serialize_query};
use loadout_types::{
    AdvisorInputs, EmptyStateCode, Focus, Location, PartialAdvisorInputs, PreferredRange, Rarity,
    ShuffleCursor, ShuffleState, SquadMode, WeaponId,
};
use proptest::prelude::*;

fn partial(
    location: Location,
    squad: SquadMode,
    focus: Focus,
    preferred_range: PreferredRange,
    stealth: bool,
    rarities: &[Rarity],
) -> PartialAdvisorInputs {
    PartialAdvisorInputs {
        location: Some(location),
        squad: Some(squad),
        focus: Some(focus),
        preferred_range: Some(preferred_range),
        stealth_important: Some(stealth),
        allowed_weapon_rarities: Some(rarities.to_vec()),
        debug: Some(false),
    }
}

fn every_questionnaire() -> Vec<PartialAdvisorInputs> {
    let mut out = Vec::new();
    for &location in Location::ALL {
        for &squad in SquadMode::ALL {
            for &focus in Focus::ALL {
                for &range in PreferredRange::ALL {
                    for stealth in [false, true] {
                        out.push(partial(location, squad, focus, range, stealth, Rarity::ALL));
                    }
                }
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Literal scenarios
// ---------------------------------------------------------------------------

#[test]
fn spaceport_long_range_pvp_solo() {
    let advisor = Advisor::default();
    let raw = partial(
        Location::Spaceport,
        SquadMode::Solo,
        Focus::Pvp,
        PreferredRange::Long,
        false,
        Rarity::ALL,
    );
    let ranked = advisor.rank(&raw, None);
    assert_eq!(ranked.ranked[0].pair_key.as_str(), "renegade__anvil");

    let result = advisor.recommend(&raw, RecommendOptions::default());
    assert_eq!(result.recommendations[0].pair_key.as_str(), "renegade__anvil");
    assert_eq!(result.recommendations.len(), 2);
}

#[test]
fn legendary_stealth_has_too_few_weapons() {
    let advisor = Advisor::default();
    let raw = partial(
        Location::BuriedCity,
        SquadMode::Solo,
        Focus::Mixed,
        PreferredRange::Any,
        true,
        &[Rarity::Legendary],
    );
    let result = advisor.recommend(&raw, RecommendOptions::default());
    assert!(result.recommendations.is_empty());
    let empty = result.empty_state.unwrap();
    assert_eq!(empty.code, EmptyStateCode::InsufficientValidWeapons);
    assert_eq!(
        empty.message,
        "Not enough valid weapons match your current filters to build a primary + secondary recommendation."
    );
}

#[test]
fn blue_gate_squad_pve_long_legendary() {
    let advisor = Advisor::default();
    let raw = partial(
        Location::BlueGate,
        SquadMode::Squad,
        Focus::Pve,
        PreferredRange::Long,
        false,
        &[Rarity::Legendary],
    );
    let ranked = advisor.rank(&raw, None);
    assert_eq!(ranked.ranked[0].pair_key.as_str(), "jupiter__equalizer");
}

#[test]
fn empty_rarity_allowlist_is_insufficient() {
    let advisor = Advisor::default();
    let raw = partial(
        Location::Dam,
        SquadMode::Squad,
        Focus::Mixed,
        PreferredRange::Any,
        false,
        &[],
    );
    let ranked = advisor.rank(&raw, None);
    assert!(ranked.ranked.is_empty());
    assert_eq!(
        ranked.empty_state.unwrap().code,
        EmptyStateCode::InsufficientValidWeapons
    );
}

// ---------------------------------------------------------------------------
// Global properties
// ---------------------------------------------------------------------------

#[test]
fn identical_inputs_give_identical_output() {
    let advisor = Advisor::default();
    for raw in every_questionnaire().iter().step_by(7) {
        let first = advisor.recommend(raw, RecommendOptions::default());
        let second = advisor.recommend(raw, RecommendOptions::default());
        assert_eq!(first, second);
    }
}

#[test]
fn batches_are_empty_or_full() {
    let advisor = Advisor::default();
    for raw in every_questionnaire() {
        let result = advisor.recommend(&raw, RecommendOptions::default());
        let count = result.recommendations.len();
        assert!(count == 0 || count == 2, "got {count} for {raw:?}");
        assert_eq!(count == 0, result.empty_state.is_some());
    }
}

#[test]
fn recommendations_respect_hard_constraints() {
    let advisor = Advisor::default();
    let eligible: BTreeMap<WeaponId, bool> = advisor
        .features()
        .iter()
        .map(|f| (f.weapon.id.clone(), f.stealth_eligible))
        .collect();
    let subsets: [&[Rarity]; 3] = [
        &[Rarity::Common, Rarity::Uncommon],
        &[Rarity::Rare, Rarity::Epic],
        &[Rarity::Epic, Rarity::Legendary],
    ];

    for rarities in subsets {
        for stealth in [false, true] {
            let raw = partial(
                Location::StellaMontis,
                SquadMode::Solo,
                Focus::Mixed,
                PreferredRange::Close,
                stealth,
                rarities,
            );
            let ranked = advisor.rank(&raw, None);
            for rec in &ranked.ranked {
                assert_ne!(rec.primary_weapon_id, rec.secondary_weapon_id);
                for id in [&rec.primary_weapon_id, &rec.secondary_weapon_id] {
                    let weapon = advisor.catalog().weapon(id).unwrap();
                    assert!(rarities.contains(&weapon.rarity));
                    if stealth {
                        assert!(eligible[id]);
                    }
                }
            }
        }
    }
}

#[test]
fn debug_payload_follows_request() {
    let advisor = Advisor::default();
    let mut raw = partial(
        Location::Dam,
        SquadMode::Squad,
        Focus::Mixed,
        PreferredRange::Any,
        false,
        Rarity::ALL,
    );

    let plain = advisor.recommend(&raw, RecommendOptions::default());
    assert!(plain.recommendations.iter().all(|r| r.debug.is_none()));
    let json = serde_json::to_value(&plain.recommendations[0]).unwrap();
    assert!(json.get("debug").is_none());

    raw.debug = Some(true);
    let debug = advisor.recommend(&raw, RecommendOptions::default());
    assert!(debug.recommendations.iter().all(|r| r.debug.is_some()));

    let forced = advisor.recommend(
        &raw,
        RecommendOptions {
            force_debug: Some(false),
            ..RecommendOptions::default()
        },
    );
    assert!(forced.recommendations.iter().all(|r| r.debug.is_none()));
}

#[test]
fn ranked_scores_are_monotone_and_in_range() {
    let advisor = Advisor::default();
    for raw in every_questionnaire().iter().step_by(11) {
        let ranked = advisor.rank(raw, None);
        for pair in ranked.ranked.windows(2) {
            assert!(pair[0].pair_score >= pair[1].pair_score);
        }
        for rec in &ranked.ranked {
            for score in [rec.primary_score, rec.secondary_score, rec.pair_score] {
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Shuffle
// ---------------------------------------------------------------------------

#[test]
fn top_bucket_drains_before_the_next() {
    let advisor = Advisor::default();
    let raw = partial(
        Location::Dam,
        SquadMode::Squad,
        Focus::Mixed,
        PreferredRange::Any,
        false,
        Rarity::ALL,
    );
    let ranked = advisor.rank(&raw, None);
    let top_bucket = ranked.ranked[0].tie_bucket_id.clone();
    let bucket_size = ranked
        .ranked
        .iter()
        .filter(|rec| rec.tie_bucket_id == top_bucket)
        .count();
    let bucket_count = ranked
        .ranked
        .iter()
        .map(|rec| rec.tie_bucket_id.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mut state: Option<ShuffleState> = None;
    let mut drawn = Vec::new();
    for _ in 0..bucket_size {
        let result = advisor.draw(&ranked, state, Some(1));
        drawn.push(result.recommendations[0].clone());
        state = Some(result.shuffle_state);
    }
    let keys: BTreeSet<_> = drawn.iter().map(|rec| rec.pair_key.clone()).collect();
    assert_eq!(keys.len(), bucket_size);
    assert!(drawn.iter().all(|rec| rec.tie_bucket_id == top_bucket));

    if bucket_count > 1 {
        let next = advisor.draw(&ranked, state, Some(1));
        assert_ne!(next.recommendations[0].tie_bucket_id, top_bucket);
    }
}

#[test]
fn full_cycle_reveals_every_pair_once() {
    let advisor = Advisor::default();
    let raw = partial(
        Location::BlueGate,
        SquadMode::Solo,
        Focus::Pvp,
        PreferredRange::Mid,
        false,
        &[Rarity::Epic, Rarity::Legendary],
    );
    let ranked = advisor.rank(&raw, None);
    let total = ranked.ranked.len();

    let mut state: Option<ShuffleState> = None;
    let mut seen = BTreeSet::new();
    for _ in 0..total {
        let result = advisor.draw(&ranked, state, Some(1));
        assert!(seen.insert(result.recommendations[0].pair_key.clone()));
        state = Some(result.shuffle_state);
    }
    let state = state.unwrap();
    assert_eq!(seen.len(), total);
    assert_eq!(state.cycle, 1);
    assert!(state.seen_pair_keys.is_empty());
}

#[test]
fn cursor_resumes_within_a_cycle() {
    let advisor = Advisor::default();
    let raw = PartialAdvisorInputs::default();
    let ranked = advisor.rank(&raw, None);

    let first = advisor.draw(&ranked, None, None);
    let second = advisor.draw(&ranked, Some(first.shuffle_state), None);
    let cursor = second.shuffle_state.cursor();
    assert_eq!(cursor.offset, 4);

    let resumed = ShuffleState::resume(&ranked.ranked, cursor);
    assert_eq!(resumed, second.shuffle_state);
    assert_eq!(
        advisor.draw(&ranked, Some(resumed), None),
        advisor.draw(&ranked, Some(second.shuffle_state), None)
    );
}

#[test]
fn share_links_cover_a_cycle_from_a_mismatched_bucket() {
    let advisor = Advisor::default();
    let ranked = advisor.rank(&PartialAdvisorInputs::default(), None);
    let total = ranked.ranked.len();
    assert_eq!(total % 2, 0);

    let mut link = serialize_query(
        &AdvisorInputs::default(),
        Some(ShuffleCursor {
            bucket: 3,
            offset: 0,
        }),
    );
    let mut shown = BTreeSet::new();
    for _ in 0..total / 2 {
        let decoded = parse_query(&link);
        let ranked = advisor.rank(&PartialAdvisorInputs::from(decoded.inputs), None);
        let resumed = decoded
            .shuffle
            .map(|cursor| ShuffleState::resume(&ranked.ranked, cursor));
        let result = advisor.draw(&ranked, resumed, Some(2));
        for rec in &result.recommendations {
            assert!(shown.insert(rec.pair_key.clone()), "{} repeated", rec.pair_key);
        }
        link = serialize_query(&ranked.inputs, Some(result.shuffle_state.cursor()));
    }
    assert_eq!(shown.len(), total);
    assert!(link.ends_with("&sh=0%3A0"));
}

// ---------------------------------------------------------------------------
// Share links
// ---------------------------------------------------------------------------

fn inputs_strategy() -> impl Strategy<Value = AdvisorInputs> {
    (
        prop::sample::select(Location::ALL),
        prop::sample::select(SquadMode::ALL),
        prop::sample::select(Focus::ALL),
        prop::sample::select(PreferredRange::ALL),
        any::<bool>(),
        prop::sample::subsequence(Rarity::ALL.to_vec(), 0..=Rarity::ALL.len()),
        any::<bool>(),
    )
        .prop_map(
            |(location, squad, focus, preferred_range, stealth, rarities, debug)| AdvisorInputs {
                location,
                squad,
                focus,
                preferred_range,
                stealth_important: stealth,
                allowed_weapon_rarities: rarities.into_iter().collect(),
                debug,
            },
        )
}

proptest! {
    #[test]
    fn share_link_round_trips(
        inputs in inputs_strategy(),
        cursor in proptest::option::of((0_usize..64, 0_usize..512)),
    ) {
        let cursor = cursor.map(|(bucket, offset)| loadout_types::ShuffleCursor { bucket, offset });
        let decoded = parse_query(&serialize_query(&inputs, cursor));
        prop_assert_eq!(decoded.inputs, inputs);
        prop_assert_eq!(decoded.shuffle, cursor);
    }
}
