//! Core value structs for the loadout advisor.
//!
//! Covers the catalog `Weapon` record, the questionnaire (`AdvisorInputs`),
//! score breakdowns, ranked pair recommendations, the caller-owned shuffle
//! cursor, and the result envelopes returned by the engine.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    AmmoType, EmptyStateCode, Focus, Grade, Location, PreferredRange, RangeBand, Rarity,
    SlotType, SquadMode, WeaponClass,
};
use crate::ids::{PairKey, WeaponId};

// ---------------------------------------------------------------------------
// Catalog record
// ---------------------------------------------------------------------------

/// A weapon as listed in the static catalog. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Weapon {
    /// Stable slug, unique within the catalog.
    pub id: WeaponId,
    /// Display name.
    pub name: String,
    /// Weapon class.
    pub class: WeaponClass,
    /// Ammunition pool.
    pub ammo: AmmoType,
    /// Free-form fire mode label (`"Full-Auto"`, `"Lever-Action"`, ...).
    pub fire_mode: String,
    /// Damage per shot.
    pub damage: f64,
    /// Rounds per second.
    pub rate_of_fire: f64,
    /// Nominal damage per second.
    pub dps: f64,
    /// Effective range in game units.
    pub range: f64,
    /// Attachment slots the weapon exposes. May be empty.
    pub slots: Vec<SlotType>,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Effectiveness against players.
    pub pvp: Grade,
    /// Effectiveness against ARC machines.
    pub arc: Grade,
    /// Description text.
    pub description: String,
    /// Main drawback, shown next to the description.
    pub weakness: String,
}

// ---------------------------------------------------------------------------
// Questionnaire
// ---------------------------------------------------------------------------

/// A fully populated questionnaire.
///
/// `allowed_weapon_rarities` is a set, so duplicates collapse and order is
/// irrelevant. An empty set is a real choice that filters every weapon out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AdvisorInputs {
    /// Target map.
    pub location: Location,
    /// Solo or squad play.
    pub squad: SquadMode,
    /// Expected threat mix.
    pub focus: Focus,
    /// Preferred fighting distance.
    pub preferred_range: PreferredRange,
    /// When set, only stealth-eligible weapons survive filtering.
    pub stealth_important: bool,
    /// Rarity tiers the player has unlocked.
    pub allowed_weapon_rarities: BTreeSet<Rarity>,
    /// Include raw score breakdowns in recommendations.
    pub debug: bool,
}

impl Default for AdvisorInputs {
    fn default() -> Self {
        Self {
            location: Location::Spaceport,
            squad: SquadMode::Solo,
            focus: Focus::Mixed,
            preferred_range: PreferredRange::Any,
            stealth_important: false,
            allowed_weapon_rarities: Rarity::ALL.iter().copied().collect(),
            debug: false,
        }
    }
}

/// A questionnaire as submitted by a caller: any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export, export_to = "bindings/")]
pub struct PartialAdvisorInputs {
    /// Target map.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub location: Option<Location>,
    /// Solo or squad play.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub squad: Option<SquadMode>,
    /// Expected threat mix.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub focus: Option<Focus>,
    /// Preferred fighting distance.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub preferred_range: Option<PreferredRange>,
    /// Stealth requirement.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub stealth_important: Option<bool>,
    /// Unlocked rarities; may contain duplicates. `Some(vec![])` is kept as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub allowed_weapon_rarities: Option<Vec<Rarity>>,
    /// Debug breakdowns.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub debug: Option<bool>,
}

impl From<AdvisorInputs> for PartialAdvisorInputs {
    fn from(inputs: AdvisorInputs) -> Self {
        Self {
            location: Some(inputs.location),
            squad: Some(inputs.squad),
            focus: Some(inputs.focus),
            preferred_range: Some(inputs.preferred_range),
            stealth_important: Some(inputs.stealth_important),
            allowed_weapon_rarities: Some(inputs.allowed_weapon_rarities.into_iter().collect()),
            debug: Some(inputs.debug),
        }
    }
}

// ---------------------------------------------------------------------------
// Score breakdowns
// ---------------------------------------------------------------------------

/// Stand-alone fitness of a weapon as a primary. Every field is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ScoreBreakdown {
    /// How well the class, range, and threat profile suit the map.
    pub location_fit: f64,
    /// PVP/ARC grade blend for the chosen focus.
    pub focus_fit: f64,
    /// Closeness of the weapon's range to the preferred window.
    pub range_fit: f64,
    /// Class suitability for solo or squad play.
    pub solo_squad_fit: f64,
    /// Quiet-operation bonus.
    pub stealth_preference_fit: f64,
    /// Weighted, clamped total.
    pub weighted_total: f64,
}

/// How well a secondary complements a specific primary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ComplementBreakdown {
    /// The secondary's own primary score.
    pub base_secondary_fit: f64,
    /// Ammo reserve diversity.
    pub ammo_complement: f64,
    /// Range band coverage.
    pub range_complement: f64,
    /// Role diversity.
    pub role_complement: f64,
    /// Weighted, clamped total.
    pub weighted_total: f64,
}

/// Raw breakdowns attached to a recommendation in debug mode only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PairDebug {
    /// Primary breakdown of the primary weapon.
    pub primary_breakdown: ScoreBreakdown,
    /// Primary breakdown of the secondary weapon.
    pub secondary_breakdown: ScoreBreakdown,
    /// Complement breakdown of the pair.
    pub complement_breakdown: ComplementBreakdown,
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

/// The factors that drove a pick, for callers that render their own prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PairRationale {
    /// Map the primary was picked for.
    pub location: Location,
    /// Range preference the primary was picked for.
    pub preferred_range: PreferredRange,
    /// Range band of the primary.
    pub primary_band: RangeBand,
    /// Range band of the secondary.
    pub secondary_band: RangeBand,
    /// Whether both weapons draw from the same ammo pool.
    pub shared_ammo: bool,
}

/// One ranked (primary, secondary) loadout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PairRecommendation {
    /// Dense 1-based rank.
    pub rank: usize,
    /// `primary__secondary`.
    pub pair_key: PairKey,
    /// Primary weapon.
    pub primary_weapon_id: WeaponId,
    /// Secondary weapon. Never equal to the primary.
    pub secondary_weapon_id: WeaponId,
    /// Primary score, rounded to 6 places.
    pub primary_score: f64,
    /// Secondary complement score, rounded to 6 places.
    pub secondary_score: f64,
    /// Pair score, rounded to 6 places.
    pub pair_score: f64,
    /// Groups pairs whose pair score matches to 4 places.
    pub tie_bucket_id: String,
    /// Human-readable reasons: primary fit, then secondary complement.
    pub reasons: Vec<String>,
    /// Structured form of `reasons`.
    pub rationale: PairRationale,
    /// Raw breakdowns. Absent unless debug was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub debug: Option<PairDebug>,
}

// ---------------------------------------------------------------------------
// Empty states
// ---------------------------------------------------------------------------

/// A named "no results" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AdvisorEmptyState {
    /// Which outcome.
    pub code: EmptyStateCode,
    /// User-facing explanation.
    pub message: String,
}

impl AdvisorEmptyState {
    /// Fewer than two weapons survived filtering.
    pub fn insufficient_valid_weapons() -> Self {
        Self {
            code: EmptyStateCode::InsufficientValidWeapons,
            message: "Not enough valid weapons match your current filters to build a primary + secondary recommendation.".to_owned(),
        }
    }

    /// Filtering passed but no pairs came out of the ranker.
    pub fn no_valid_pairs() -> Self {
        Self {
            code: EmptyStateCode::NoValidPairs,
            message: "Valid weapons were found, but no complementary weapon pairs could be produced.".to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Shuffle cursor
// ---------------------------------------------------------------------------

/// Caller-owned reveal cursor. Passed in and returned by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ShuffleState {
    /// Tie bucket the next draw starts from.
    pub bucket_index: usize,
    /// Pairs revealed in the current cycle.
    pub seen_pair_keys: BTreeSet<PairKey>,
    /// Number of completed cycles.
    pub cycle: u32,
}

impl ShuffleState {
    /// Compact projection used in share links.
    pub fn cursor(&self) -> ShuffleCursor {
        ShuffleCursor {
            bucket: self.bucket_index,
            offset: self.seen_pair_keys.len(),
        }
    }

    /// Rebuild a state from a cursor against the ranked list it came from.
    ///
    /// Within a cycle pairs are revealed in rank order, so the seen set is
    /// the first `offset` keys and the walk resumes in the bucket holding
    /// the next unseen pair. `cursor.bucket` is not trusted: a bucket that
    /// disagrees with the offset would reveal pairs out of rank order. An
    /// offset at or past the end of the list resumes as a fresh cycle.
    pub fn resume(ranked: &[PairRecommendation], cursor: ShuffleCursor) -> Self {
        if cursor.offset >= ranked.len() {
            return Self::default();
        }
        // Buckets are contiguous runs of the ranking.
        let bucket_index = ranked
            .iter()
            .zip(ranked.iter().skip(1))
            .take(cursor.offset)
            .filter(|(prev, next)| prev.tie_bucket_id != next.tie_bucket_id)
            .count();
        Self {
            bucket_index,
            seen_pair_keys: ranked
                .iter()
                .take(cursor.offset)
                .map(|rec| rec.pair_key.clone())
                .collect(),
            cycle: 0,
        }
    }
}

/// `bucket:offset` position carried in the `sh` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShuffleCursor {
    /// Tie bucket index. Informational on the way back in; see
    /// [`ShuffleState::resume`].
    pub bucket: usize,
    /// Pairs already revealed in the current cycle.
    pub offset: usize,
}

// ---------------------------------------------------------------------------
// Result envelopes
// ---------------------------------------------------------------------------

/// The visible batch plus the cursor for the next draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AdvisorResult {
    /// Either empty or exactly the requested batch size.
    pub recommendations: Vec<PairRecommendation>,
    /// Present iff `recommendations` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub empty_state: Option<AdvisorEmptyState>,
    /// Cursor to pass to the next call.
    pub shuffle_state: ShuffleState,
}

/// The full ranking for a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct RankedRecommendations {
    /// Normalized questionnaire the ranking was computed for.
    pub inputs: AdvisorInputs,
    /// Every pair in rank order.
    pub ranked: Vec<PairRecommendation>,
    /// Present iff `ranked` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub empty_state: Option<AdvisorEmptyState>,
}

/// Advisor state decoded from a share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AdvisorQueryState {
    /// Questionnaire, with defaults for anything missing or malformed.
    pub inputs: AdvisorInputs,
    /// Shuffle position, if the link carried a well-formed one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub shuffle: Option<ShuffleCursor>,
}
