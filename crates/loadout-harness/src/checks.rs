//! Assertion groups run against each golden case.
//!
//! Every group appends human-readable failures to a shared list; a case
//! passes when the list stays empty.

use std::collections::BTreeSet;

use loadout_advisor::{Advisor, RecommendOptions, next_batch, parse_query, serialize_query};
use loadout_types::{PartialAdvisorInputs, ShuffleCursor, ShuffleState, WeaponId};
use serde::Serialize;
use tracing::debug;

use crate::cases::GoldenCase;

/// Result of one case.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    /// Case id.
    pub id: String,
    /// Case title.
    pub title: String,
    /// No failures recorded.
    pub passed: bool,
    /// Failure descriptions.
    pub errors: Vec<String>,
}

/// Run every assertion group for `case`.
pub fn run_case(advisor: &Advisor, case: &GoldenCase) -> ScenarioOutcome {
    let stealth_eligible: BTreeSet<WeaponId> = advisor
        .features()
        .iter()
        .filter(|f| f.stealth_eligible)
        .map(|f| f.weapon.id.clone())
        .collect();

    let mut errors = Vec::new();
    global_invariants(advisor, case, &stealth_eligible, &mut errors);
    exact_key(advisor, case, &mut errors);
    tie_cycling(advisor, case, &mut errors);
    url_round_trip(case, &mut errors);

    debug!(case = case.id, failures = errors.len(), "case checked");
    ScenarioOutcome {
        id: case.id.to_owned(),
        title: case.title.to_owned(),
        passed: errors.is_empty(),
        errors,
    }
}

fn raw_inputs(case: &GoldenCase) -> PartialAdvisorInputs {
    PartialAdvisorInputs::from(case.inputs.clone())
}

fn global_invariants(
    advisor: &Advisor,
    case: &GoldenCase,
    stealth_eligible: &BTreeSet<WeaponId>,
    errors: &mut Vec<String>,
) {
    let raw = raw_inputs(case);
    let result = advisor.recommend(
        &raw,
        RecommendOptions {
            batch_size: Some(2),
            force_debug: Some(case.require_debug),
            ..RecommendOptions::default()
        },
    );
    let ranked = advisor.rank(&raw, None);
    let count = result.recommendations.len();

    if count != 0 && count != 2 {
        errors.push(format!("Expected output length of 0 or 2, received {count}"));
    }

    if case.expect_empty {
        if count != 0 {
            errors.push("Scenario expects empty-state, but recommendations were returned".to_owned());
        }
        if result.empty_state.is_none() {
            errors.push("Scenario expects empty-state metadata, but it is missing".to_owned());
        }
    } else if let Some(empty) = &result.empty_state {
        errors.push(format!("Unexpected empty state: {}", empty.message));
    }

    for rec in &result.recommendations {
        if rec.primary_weapon_id == rec.secondary_weapon_id {
            errors.push(format!("Duplicate primary/secondary weapon in {}", rec.pair_key));
        }
        for (role, id) in [
            ("Primary", &rec.primary_weapon_id),
            ("Secondary", &rec.secondary_weapon_id),
        ] {
            let Some(weapon) = advisor.catalog().weapon(id) else {
                errors.push(format!("{role} {id} is not in the catalog"));
                continue;
            };
            if !case.inputs.allowed_weapon_rarities.contains(&weapon.rarity) {
                errors.push(format!("{role} {id} violates rarity filter"));
            }
            if case.inputs.stealth_important && !stealth_eligible.contains(id) {
                errors.push(format!("{role} {id} violates stealth eligibility"));
            }
        }

        match (case.require_debug, rec.debug.is_some()) {
            (true, false) => errors.push("Debug breakdown is required but missing".to_owned()),
            (false, true) => {
                errors.push("Debug breakdown should be hidden but is present".to_owned());
            }
            _ => {}
        }
    }

    if let Some(top) = ranked.ranked.first() {
        if !case.expected_primary_pool.is_empty()
            && !case.expected_primary_pool.contains(&top.primary_weapon_id.as_str())
        {
            errors.push(format!(
                "Top primary {} is outside expected pool",
                top.primary_weapon_id
            ));
        }
        if !case.expected_secondary_pool.is_empty()
            && !case.expected_secondary_pool.contains(&top.secondary_weapon_id.as_str())
        {
            errors.push(format!(
                "Top secondary {} is outside expected pool",
                top.secondary_weapon_id
            ));
        }
    }
}

fn exact_key(advisor: &Advisor, case: &GoldenCase, errors: &mut Vec<String>) {
    if !case.is_critical() {
        return;
    }
    let ranked = advisor.rank(&raw_inputs(case), None);

    if case.expect_empty {
        if !ranked.ranked.is_empty() {
            errors.push(format!(
                "Exact-case {} should be empty but returned ranked pairs",
                case.id
            ));
        }
        return;
    }

    let Some(expected) = case.exact_pair_key else {
        errors.push(format!("Exact-case {} is missing an expected pair key", case.id));
        return;
    };
    let top = ranked
        .ranked
        .first()
        .map_or("none", |rec| rec.pair_key.as_str());
    if top != expected {
        errors.push(format!("Exact mismatch: expected {expected}, got {top}"));
    }
}

fn tie_cycling(advisor: &Advisor, case: &GoldenCase, errors: &mut Vec<String>) {
    if !case.require_tie_cycling {
        return;
    }
    let ranked = advisor.rank(&raw_inputs(case), None).ranked;
    let Some(first) = ranked.first() else {
        errors.push("Tie-cycle scenario requires at least 3 ranked pairs".to_owned());
        return;
    };
    if ranked.len() < 3 {
        errors.push("Tie-cycle scenario requires at least 3 ranked pairs".to_owned());
        return;
    }

    let top_bucket = first.tie_bucket_id.as_str();
    let bucket_size = ranked
        .iter()
        .filter(|rec| rec.tie_bucket_id == top_bucket)
        .count();

    let mut seen = BTreeSet::new();
    let mut state = ShuffleState::default();
    for _ in 0..bucket_size {
        let step = next_batch(&ranked, Some(state), 1);
        let Some(rec) = step.batch.first() else {
            errors.push(
                "Shuffle produced empty batch unexpectedly while exhausting first bucket"
                    .to_owned(),
            );
            return;
        };
        if rec.tie_bucket_id != top_bucket {
            errors.push("Shuffle moved to another bucket before exhausting first bucket".to_owned());
            return;
        }
        if !seen.insert(rec.pair_key.clone()) {
            errors.push("Shuffle repeated a pair before exhausting first bucket".to_owned());
            return;
        }
        state = step.state;
    }

    let next = next_batch(&ranked, Some(state), 1);
    let Some(rec) = next.batch.first() else {
        errors.push("Shuffle produced empty batch after exhausting first bucket".to_owned());
        return;
    };
    let several_buckets = ranked.iter().any(|entry| entry.tie_bucket_id != top_bucket);
    if several_buckets && rec.tie_bucket_id == top_bucket {
        errors.push(
            "Shuffle did not advance to next tie bucket after exhausting first bucket".to_owned(),
        );
    }
}

fn url_round_trip(case: &GoldenCase, errors: &mut Vec<String>) {
    if !case.require_url_round_trip {
        return;
    }
    let cursor = ShuffleCursor { bucket: 1, offset: 2 };
    let parsed = parse_query(&serialize_query(&case.inputs, Some(cursor)));
    let want = &case.inputs;
    let got = &parsed.inputs;

    for (field, matches) in [
        ("location", got.location == want.location),
        ("squad", got.squad == want.squad),
        ("focus", got.focus == want.focus),
        ("preferredRange", got.preferred_range == want.preferred_range),
        ("stealth", got.stealth_important == want.stealth_important),
        ("debug flag", got.debug == want.debug),
        ("rarities", got.allowed_weapon_rarities == want.allowed_weapon_rarities),
        ("shuffle bucket", parsed.shuffle.map(|c| c.bucket) == Some(1)),
        ("shuffle offset", parsed.shuffle.map(|c| c.offset) == Some(2)),
    ] {
        if !matches {
            errors.push(format!("URL round-trip mismatch: {field}"));
        }
    }
}

/// Render outcomes for a terminal.
pub fn format_human(outcomes: &[ScenarioOutcome]) -> String {
    let passes = outcomes.iter().filter(|outcome| outcome.passed).count();
    let mut lines = vec![format!("Advisor matrix: {passes}/{} passed", outcomes.len())];
    for outcome in outcomes {
        let verdict = if outcome.passed { "PASS" } else { "FAIL" };
        lines.push(format!("{verdict} {} - {}", outcome.id, outcome.title));
        lines.extend(outcome.errors.iter().map(|error| format!("  - {error}")));
    }
    lines.join("\n")
}
