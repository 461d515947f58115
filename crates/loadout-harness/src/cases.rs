//! The golden scenario matrix.
//!
//! Each case pins a questionnaire and what the ranking must look like for
//! it. Pools are soft expectations (the top pick must be one of them);
//! exact keys are enforced only for the ids in [`CRITICAL_EXACT_IDS`].

use std::collections::BTreeSet;

use loadout_types::{AdvisorInputs, Focus, Location, PreferredRange, Rarity, SquadMode};

/// Cases whose top pair key (or emptiness) is locked.
pub const CRITICAL_EXACT_IDS: &[&str] = &["S01", "S06", "S07", "S10", "S14"];

/// One named scenario.
#[derive(Debug, Clone)]
pub struct GoldenCase {
    /// Short id such as `S01`.
    pub id: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Questionnaire under test.
    pub inputs: AdvisorInputs,
    /// Debug breakdowns must be present (and absent otherwise).
    pub require_debug: bool,
    /// The top primary must be one of these, when non-empty.
    pub expected_primary_pool: &'static [&'static str],
    /// The top secondary must be one of these, when non-empty.
    pub expected_secondary_pool: &'static [&'static str],
    /// Locked top pair key.
    pub exact_pair_key: Option<&'static str>,
    /// The advisor must return an empty state.
    pub expect_empty: bool,
    /// Exercise tie bucket cycling on the ranking.
    pub require_tie_cycling: bool,
    /// Exercise the share-link round trip.
    pub require_url_round_trip: bool,
}

impl GoldenCase {
    fn new(id: &'static str, title: &'static str, inputs: AdvisorInputs) -> Self {
        Self {
            id,
            title,
            inputs,
            require_debug: false,
            expected_primary_pool: &[],
            expected_secondary_pool: &[],
            exact_pair_key: None,
            expect_empty: false,
            require_tie_cycling: false,
            require_url_round_trip: false,
        }
    }

    /// Whether the exact-key check applies.
    pub fn is_critical(&self) -> bool {
        CRITICAL_EXACT_IDS.contains(&self.id)
    }
}

fn inputs(
    location: Location,
    squad: SquadMode,
    focus: Focus,
    preferred_range: PreferredRange,
) -> AdvisorInputs {
    AdvisorInputs {
        location,
        squad,
        focus,
        preferred_range,
        ..AdvisorInputs::default()
    }
}

fn only(rarities: &[Rarity]) -> BTreeSet<Rarity> {
    rarities.iter().copied().collect()
}

/// The full matrix, in id order.
#[allow(clippy::too_many_lines)]
pub fn golden_cases() -> Vec<GoldenCase> {
    let long_pvp = inputs(
        Location::Spaceport,
        SquadMode::Solo,
        Focus::Pvp,
        PreferredRange::Long,
    );
    let flexible_dam = inputs(
        Location::Dam,
        SquadMode::Squad,
        Focus::Mixed,
        PreferredRange::Any,
    );
    let cqc_buried = inputs(
        Location::BuriedCity,
        SquadMode::Solo,
        Focus::Mixed,
        PreferredRange::Close,
    );

    vec![
        GoldenCase {
            expected_primary_pool: &["renegade", "osprey", "tempest"],
            expected_secondary_pool: &["stitcher", "venator", "anvil", "vulcano"],
            exact_pair_key: Some("renegade__anvil"),
            ..GoldenCase::new("S01", "Baseline Long-Range PVP", long_pvp.clone())
        },
        GoldenCase {
            expected_primary_pool: &["bobcat", "vulcano", "stitcher", "anvil"],
            expected_secondary_pool: &[
                "renegade", "tempest", "venator", "ferro", "vulcano", "bobcat", "anvil",
            ],
            ..GoldenCase::new(
                "S02",
                "Indoor CQC PVP",
                inputs(
                    Location::StellaMontis,
                    SquadMode::Squad,
                    Focus::Pvp,
                    PreferredRange::Close,
                ),
            )
        },
        GoldenCase {
            expected_primary_pool: &["equalizer", "jupiter", "aphelion", "hullcracker"],
            expected_secondary_pool: &["anvil", "ferro", "tempest", "renegade", "bettina"],
            ..GoldenCase::new(
                "S03",
                "ARC-Heavy Long-Range PvE",
                inputs(
                    Location::BlueGate,
                    SquadMode::Solo,
                    Focus::Pve,
                    PreferredRange::Long,
                ),
            )
        },
        GoldenCase {
            expected_primary_pool: &["tempest", "renegade", "rattler", "torrente", "anvil"],
            ..GoldenCase::new("S04", "Mixed Terrain Flexible Run", flexible_dam.clone())
        },
        GoldenCase {
            expected_primary_pool: &["stitcher", "anvil", "ferro", "iltoro"],
            expected_secondary_pool: &["rattler", "burletta", "kettle", "iltoro"],
            ..GoldenCase::new(
                "S05",
                "Common/Uncommon Economy Constraint",
                AdvisorInputs {
                    allowed_weapon_rarities: only(&[Rarity::Common, Rarity::Uncommon]),
                    ..cqc_buried.clone()
                },
            )
        },
        GoldenCase {
            expected_primary_pool: &["osprey", "renegade", "tempest", "arpeggio"],
            exact_pair_key: Some("renegade__anvil"),
            ..GoldenCase::new(
                "S06",
                "Stealth Required Wide Budget",
                AdvisorInputs {
                    stealth_important: true,
                    ..long_pvp.clone()
                },
            )
        },
        GoldenCase {
            expect_empty: true,
            ..GoldenCase::new(
                "S07",
                "Stealth + Legendary Only Empty",
                AdvisorInputs {
                    stealth_important: true,
                    allowed_weapon_rarities: only(&[Rarity::Legendary]),
                    ..long_pvp.clone()
                },
            )
        },
        GoldenCase::new(
            "S08",
            "Common/Uncommon Mid-Range Mixed",
            AdvisorInputs {
                preferred_range: PreferredRange::Mid,
                allowed_weapon_rarities: only(&[Rarity::Common, Rarity::Uncommon]),
                ..flexible_dam.clone()
            },
        ),
        GoldenCase {
            expected_primary_pool: &["anvil", "iltoro"],
            ..GoldenCase::new(
                "S09",
                "Uncommon Weapons Only",
                AdvisorInputs {
                    allowed_weapon_rarities: only(&[Rarity::Uncommon]),
                    ..cqc_buried
                },
            )
        },
        GoldenCase {
            exact_pair_key: Some("jupiter__equalizer"),
            ..GoldenCase::new(
                "S10",
                "No Slot Inclusion Legendary ARC",
                AdvisorInputs {
                    allowed_weapon_rarities: only(&[Rarity::Legendary]),
                    ..inputs(
                        Location::BlueGate,
                        SquadMode::Squad,
                        Focus::Pve,
                        PreferredRange::Long,
                    )
                },
            )
        },
        GoldenCase {
            require_tie_cycling: true,
            ..GoldenCase::new("S11", "Tie Bucket Shuffle Cycle", flexible_dam)
        },
        GoldenCase::new(
            "S12",
            "Stealth Exclusion Rules",
            AdvisorInputs {
                stealth_important: true,
                ..inputs(
                    Location::StellaMontis,
                    SquadMode::Solo,
                    Focus::Mixed,
                    PreferredRange::Close,
                )
            },
        ),
        GoldenCase::new("S13", "Same Ammo Penalty Check", long_pvp.clone()),
        GoldenCase {
            require_debug: true,
            exact_pair_key: Some("renegade__anvil"),
            require_url_round_trip: true,
            ..GoldenCase::new("S14", "URL Round Trip Shareability", long_pvp)
        },
    ]
}

/// Look up a single case by id.
pub fn find_case(id: &str) -> Option<GoldenCase> {
    golden_cases().into_iter().find(|case| case.id == id)
}
