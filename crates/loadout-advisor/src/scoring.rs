//! Small numeric helpers shared by the scorers.

/// Clamp into `[0, 1]`.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let multiplier = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    (value * multiplier).round() / multiplier
}

/// Tie bucket id for a pair score: `score_` plus the score rounded and
/// printed to `places` decimals.
pub fn tie_bucket_id(pair_score: f64, places: u32) -> String {
    let width = usize::try_from(places).unwrap_or(usize::MAX);
    format!("score_{:.width$}", round_to(pair_score, places))
}
