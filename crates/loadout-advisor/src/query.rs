//! Share-link codec for the questionnaire and shuffle cursor.
//!
//! `serialize_query` writes every field under a short key; `parse_query`
//! never fails and falls back to the questionnaire default for any token it
//! cannot read. A malformed `sh` token is dropped rather than defaulted.

use std::collections::{BTreeMap, BTreeSet};

use loadout_types::{
    AdvisorInputs, AdvisorQueryState, Focus, Location, PreferredRange, Rarity, ShuffleCursor,
    SquadMode,
};
use tracing::debug;
use url::form_urlencoded;

/// Value of the fixed `tab` key.
pub const ADVISOR_TAB: &str = "advisor";

const KEY_TAB: &str = "tab";
const KEY_LOCATION: &str = "loc";
const KEY_SQUAD: &str = "sq";
const KEY_FOCUS: &str = "fc";
const KEY_RANGE: &str = "rg";
const KEY_STEALTH: &str = "st";
const KEY_RARITIES: &str = "wr";
const KEY_DEBUG: &str = "dbg";
const KEY_SHUFFLE: &str = "sh";

/// Encode `inputs` (and an optional cursor) as a query string starting
/// with `?`.
pub fn serialize_query(inputs: &AdvisorInputs, shuffle: Option<ShuffleCursor>) -> String {
    let rarities: String = inputs
        .allowed_weapon_rarities
        .iter()
        .map(|rarity| rarity.short_code().to_string())
        .collect::<Vec<_>>()
        .join(",");

    let mut out = form_urlencoded::Serializer::for_suffix(String::from("?"), 1);
    out.append_pair(KEY_TAB, ADVISOR_TAB)
        .append_pair(KEY_LOCATION, inputs.location.code())
        .append_pair(KEY_SQUAD, inputs.squad.code())
        .append_pair(KEY_FOCUS, inputs.focus.code())
        .append_pair(KEY_RANGE, inputs.preferred_range.code())
        .append_pair(KEY_STEALTH, if inputs.stealth_important { "1" } else { "0" })
        .append_pair(KEY_RARITIES, &rarities);
    if inputs.debug {
        out.append_pair(KEY_DEBUG, "1");
    }
    if let Some(cursor) = shuffle {
        out.append_pair(KEY_SHUFFLE, &format!("{}:{}", cursor.bucket, cursor.offset));
    }
    out.finish()
}

/// Decode a query string. A leading `?` is optional; the first occurrence
/// of a repeated key wins.
pub fn parse_query(query: &str) -> AdvisorQueryState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params: BTreeMap<String, String> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }

    let defaults = AdvisorInputs::default();
    let inputs = AdvisorInputs {
        location: coded(&params, KEY_LOCATION, Location::from_code).unwrap_or(defaults.location),
        squad: coded(&params, KEY_SQUAD, SquadMode::from_code).unwrap_or(defaults.squad),
        focus: coded(&params, KEY_FOCUS, Focus::from_code).unwrap_or(defaults.focus),
        preferred_range: coded(&params, KEY_RANGE, PreferredRange::from_code)
            .unwrap_or(defaults.preferred_range),
        stealth_important: flag(&params, KEY_STEALTH),
        allowed_weapon_rarities: params
            .get(KEY_RARITIES)
            .map_or(defaults.allowed_weapon_rarities, |raw| parse_rarities(raw)),
        debug: flag(&params, KEY_DEBUG),
    };
    let shuffle = params.get(KEY_SHUFFLE).and_then(|raw| {
        let cursor = parse_cursor(raw);
        if cursor.is_none() {
            debug!(value = %raw, "dropping malformed shuffle cursor");
        }
        cursor
    });

    AdvisorQueryState { inputs, shuffle }
}

fn coded<T>(
    params: &BTreeMap<String, String>,
    key: &str,
    decode: fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = params.get(key)?;
    let value = decode(raw);
    if value.is_none() {
        debug!(key, value = %raw, "ignoring unrecognized query token");
    }
    value
}

fn flag(params: &BTreeMap<String, String>, key: &str) -> bool {
    params.get(key).is_some_and(|raw| raw == "1")
}

/// `""` is the explicit empty set. A list with no recognizable code means
/// every rarity; unknown codes next to known ones are dropped.
fn parse_rarities(raw: &str) -> BTreeSet<Rarity> {
    if raw.trim().is_empty() {
        return BTreeSet::new();
    }
    let known: BTreeSet<Rarity> = raw
        .split(',')
        .filter_map(|token| {
            let mut chars = token.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(code), None) => Rarity::from_short_code(code),
                _ => None,
            }
        })
        .collect();
    if known.is_empty() {
        debug!(value = %raw, "no known rarity codes, allowing all");
        return Rarity::ALL.iter().copied().collect();
    }
    known
}

fn parse_cursor(raw: &str) -> Option<ShuffleCursor> {
    let (bucket, offset) = raw.split_once(':')?;
    Some(ShuffleCursor {
        bucket: bucket.trim().parse().ok()?,
        offset: offset.trim().parse().ok()?,
    })
}
