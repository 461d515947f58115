//! Tuning configuration for the advisor engine.
//!
//! Every constant the scorers use lives here. [`AdvisorConfig::default`]
//! reproduces the shipped tuning exactly; `advisor-config.yaml` at the
//! project root may override any section. Lookups keyed by a closed enum
//! (weapon class, location, focus, range) are fixed-field structs with an
//! exhaustive `get`, so a missing entry is a compile error rather than a
//! runtime fallback.
//!
//! Letter-grade scores are not configurable; see
//! [`Grade::score`](loadout_types::Grade::score).

use std::path::Path;

use loadout_types::{Focus, Location, PreferredRange, WeaponClass, WeaponId};
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

/// Complete advisor tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdvisorConfig {
    /// Weights of the five primary sub-scores.
    #[serde(default)]
    pub primary_weights: PrimaryWeights,

    /// How the location sub-score blends its inputs.
    #[serde(default)]
    pub location_fit: LocationFitWeights,

    /// Per-map class, range, and threat profiles.
    #[serde(default)]
    pub locations: LocationProfiles,

    /// PVP/ARC grade blend per focus.
    #[serde(default)]
    pub focus_blends: FocusBlends,

    /// Range windows, band thresholds, and falloff.
    #[serde(default)]
    pub range: RangeConfig,

    /// Solo/squad heuristic table.
    #[serde(default)]
    pub squad_fit: SquadFitConfig,

    /// Stealth-preference sub-score.
    #[serde(default)]
    pub stealth_fit: StealthFitConfig,

    /// Seed and exclusions for the stealth-eligible set.
    #[serde(default)]
    pub stealth_set: StealthSetConfig,

    /// Fire mode keyword classifiers.
    #[serde(default)]
    pub fire_modes: FireModeConfig,

    /// Class-level role baseline.
    #[serde(default = "ClassTable::role_baselines")]
    pub role_baselines: ClassTable,

    /// Pair expansion and scoring.
    #[serde(default)]
    pub pairing: PairingConfig,

    /// Secondary complement scoring.
    #[serde(default)]
    pub complement: ComplementConfig,

    /// Reveal batch defaults.
    #[serde(default)]
    pub shuffle: ShuffleConfig,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            primary_weights: PrimaryWeights::default(),
            location_fit: LocationFitWeights::default(),
            locations: LocationProfiles::default(),
            focus_blends: FocusBlends::default(),
            range: RangeConfig::default(),
            squad_fit: SquadFitConfig::default(),
            stealth_fit: StealthFitConfig::default(),
            stealth_set: StealthSetConfig::default(),
            fire_modes: FireModeConfig::default(),
            role_baselines: ClassTable::role_baselines(),
            pairing: PairingConfig::default(),
            complement: ComplementConfig::default(),
            shuffle: ShuffleConfig::default(),
        }
    }
}

impl AdvisorConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string. An empty
    /// document yields the defaults.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.primary_weights;
        for (field, value) in [
            ("primary_weights.location", w.location),
            ("primary_weights.focus", w.focus),
            ("primary_weights.range", w.range),
            ("primary_weights.solo_squad", w.solo_squad),
            ("primary_weights.stealth_preference", w.stealth_preference),
            ("location_fit.class", self.location_fit.class),
            ("location_fit.range", self.location_fit.range),
            ("location_fit.threat", self.location_fit.threat),
            ("location_fit.threat_arc", self.location_fit.threat_arc),
            ("location_fit.threat_pvp", self.location_fit.threat_pvp),
            ("range.any_preference_fit", self.range.any_preference_fit),
            ("stealth_fit.required", self.stealth_fit.required),
            ("stealth_fit.quiet", self.stealth_fit.quiet),
            ("stealth_fit.loud", self.stealth_fit.loud),
            ("pairing.primary_weight", self.pairing.primary_weight),
            ("pairing.secondary_weight", self.pairing.secondary_weight),
        ] {
            unit(field, value)?;
        }
        self.complement.validate()?;
        self.squad_fit.validate()?;
        self.focus_blends.validate()?;
        self.locations.validate()?;
        self.role_baselines.validate("role_baselines")?;
        self.range.validate()?;

        if self.pairing.top_primary_count == 0 {
            return Err(invalid("pairing.top_primary_count", "must be at least 1"));
        }
        if self.pairing.tie_precision > 12 || self.pairing.score_precision > 12 {
            return Err(invalid("pairing", "precision must be at most 12 places"));
        }
        if self.shuffle.default_batch_size == 0 {
            return Err(invalid("shuffle.default_batch_size", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_owned(),
        reason: reason.to_owned(),
    }
}

fn unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field: field.to_owned(),
            reason: format!("{value} is not in [0, 1]"),
        })
    }
}

// ---------------------------------------------------------------------------
// Primary scoring
// ---------------------------------------------------------------------------

/// Weights of the primary sub-scores in the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrimaryWeights {
    /// Location fit.
    pub location: f64,
    /// Focus fit.
    pub focus: f64,
    /// Range fit.
    pub range: f64,
    /// Solo/squad fit.
    pub solo_squad: f64,
    /// Stealth-preference fit.
    pub stealth_preference: f64,
}

impl Default for PrimaryWeights {
    fn default() -> Self {
        Self {
            location: 0.30,
            focus: 0.27,
            range: 0.23,
            solo_squad: 0.11,
            stealth_preference: 0.09,
        }
    }
}

/// Blend of class fit, range preference, and threat inside location fit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationFitWeights {
    /// Weight of the class table entry.
    pub class: f64,
    /// Weight of the preferred-range table entry.
    pub range: f64,
    /// Weight of the threat blend.
    pub threat: f64,
    /// ARC share of the threat blend.
    pub threat_arc: f64,
    /// PVP share of the threat blend.
    pub threat_pvp: f64,
}

impl Default for LocationFitWeights {
    fn default() -> Self {
        Self {
            class: 0.5,
            range: 0.15,
            threat: 0.35,
            threat_arc: 0.55,
            threat_pvp: 0.45,
        }
    }
}

/// A value per weapon class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClassTable {
    /// Assault rifle.
    pub ar: f64,
    /// Battle rifle.
    pub br: f64,
    /// Submachine gun.
    pub smg: f64,
    /// Shotgun.
    pub sg: f64,
    /// Pistol.
    pub pistol: f64,
    /// Hand cannon.
    pub hc: f64,
    /// Light machine gun.
    pub lmg: f64,
    /// Sniper rifle.
    pub sr: f64,
    /// Special.
    pub special: f64,
}

impl ClassTable {
    /// Value for `class`.
    pub const fn get(&self, class: WeaponClass) -> f64 {
        match class {
            WeaponClass::AssaultRifle => self.ar,
            WeaponClass::BattleRifle => self.br,
            WeaponClass::Smg => self.smg,
            WeaponClass::Shotgun => self.sg,
            WeaponClass::Pistol => self.pistol,
            WeaponClass::HandCannon => self.hc,
            WeaponClass::Lmg => self.lmg,
            WeaponClass::SniperRifle => self.sr,
            WeaponClass::Special => self.special,
        }
    }

    /// Shipped class role baselines.
    pub const fn role_baselines() -> Self {
        Self {
            ar: 0.8,
            br: 0.82,
            smg: 0.72,
            sg: 0.63,
            pistol: 0.6,
            hc: 0.72,
            lmg: 0.62,
            sr: 0.7,
            special: 0.64,
        }
    }

    fn validate(&self, prefix: &str) -> Result<(), ConfigError> {
        for &class in WeaponClass::ALL {
            unit(&format!("{prefix}.{class}"), self.get(class))?;
        }
        Ok(())
    }
}

/// A value per preferred range, including `any`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RangePreferenceTable {
    /// Close preference.
    pub close: f64,
    /// Mid preference.
    pub mid: f64,
    /// Long preference.
    pub long: f64,
    /// No preference.
    pub any: f64,
}

impl RangePreferenceTable {
    /// Value for `range`.
    pub const fn get(&self, range: PreferredRange) -> f64 {
        match range {
            PreferredRange::Close => self.close,
            PreferredRange::Mid => self.mid,
            PreferredRange::Long => self.long,
            PreferredRange::Any => self.any,
        }
    }
}

/// How well a map suits each class and range, and how much it leans
/// towards ARC or player threats.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LocationProfile {
    /// Class suitability.
    pub class_weights: ClassTable,
    /// Suitability of the player's preferred range.
    pub preferred_ranges: RangePreferenceTable,
    /// Weight on the ARC grade in the threat blend.
    pub arc_bias: f64,
    /// Weight on the PVP grade in the threat blend.
    pub pvp_bias: f64,
}

impl LocationProfile {
    fn validate(&self, prefix: &str) -> Result<(), ConfigError> {
        self.class_weights.validate(&format!("{prefix}.class_weights"))?;
        for &range in PreferredRange::ALL {
            unit(
                &format!("{prefix}.preferred_ranges.{range}"),
                self.preferred_ranges.get(range),
            )?;
        }
        unit(&format!("{prefix}.arc_bias"), self.arc_bias)?;
        unit(&format!("{prefix}.pvp_bias"), self.pvp_bias)
    }
}

/// One [`LocationProfile`] per map.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationProfiles {
    /// Buried City.
    pub buried_city: LocationProfile,
    /// Spaceport.
    pub spaceport: LocationProfile,
    /// The Dam.
    pub dam: LocationProfile,
    /// Blue Gate.
    pub blue_gate: LocationProfile,
    /// Stella Montis.
    pub stella_montis: LocationProfile,
}

impl LocationProfiles {
    /// Profile for `location`.
    pub const fn get(&self, location: Location) -> &LocationProfile {
        match location {
            Location::BuriedCity => &self.buried_city,
            Location::Spaceport => &self.spaceport,
            Location::Dam => &self.dam,
            Location::BlueGate => &self.blue_gate,
            Location::StellaMontis => &self.stella_montis,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for &location in Location::ALL {
            self.get(location)
                .validate(&format!("locations.{location}"))?;
        }
        Ok(())
    }
}

const fn profile(
    [smg, sg, pistol, hc, ar, br, sr, special, lmg]: [f64; 9],
    [close, mid, long, any]: [f64; 4],
    arc_bias: f64,
    pvp_bias: f64,
) -> LocationProfile {
    LocationProfile {
        class_weights: ClassTable {
            ar,
            br,
            smg,
            sg,
            pistol,
            hc,
            lmg,
            sr,
            special,
        },
        preferred_ranges: RangePreferenceTable {
            close,
            mid,
            long,
            any,
        },
        arc_bias,
        pvp_bias,
    }
}

impl Default for LocationProfiles {
    fn default() -> Self {
        // Class order: SMG, SG, Pistol, HC, AR, BR, SR, Special, LMG.
        Self {
            buried_city: profile(
                [1.0, 1.0, 0.9, 0.9, 0.7, 0.55, 0.25, 0.45, 0.5],
                [1.0, 0.75, 0.25, 0.7],
                0.55,
                0.6,
            ),
            spaceport: profile(
                [0.42, 0.2, 0.45, 0.58, 0.85, 0.92, 1.0, 0.7, 0.65],
                [0.3, 0.75, 1.0, 0.7],
                0.6,
                0.65,
            ),
            dam: profile(
                [0.65, 0.58, 0.62, 0.7, 1.0, 0.82, 0.72, 0.65, 0.76],
                [0.62, 1.0, 0.68, 0.92],
                0.62,
                0.62,
            ),
            blue_gate: profile(
                [0.48, 0.35, 0.52, 0.72, 0.86, 0.9, 0.95, 0.8, 0.68],
                [0.45, 0.75, 1.0, 0.8],
                0.82,
                0.58,
            ),
            stella_montis: profile(
                [1.0, 0.98, 0.8, 0.88, 0.74, 0.58, 0.22, 0.48, 0.52],
                [1.0, 0.72, 0.2, 0.68],
                0.72,
                0.88,
            ),
        }
    }
}

/// PVP and ARC grade weights for one focus.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GradeBlend {
    /// Weight on the PVP grade.
    pub pvp: f64,
    /// Weight on the ARC grade.
    pub arc: f64,
}

/// One [`GradeBlend`] per focus.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FocusBlends {
    /// ARC-heavy focus.
    pub pve: GradeBlend,
    /// Player-heavy focus.
    pub pvp: GradeBlend,
    /// Even split.
    pub mixed: GradeBlend,
}

impl FocusBlends {
    /// Blend for `focus`.
    pub const fn get(&self, focus: Focus) -> GradeBlend {
        match focus {
            Focus::Pve => self.pve,
            Focus::Pvp => self.pvp,
            Focus::Mixed => self.mixed,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for &focus in Focus::ALL {
            let blend = self.get(focus);
            unit(&format!("focus_blends.{focus}.pvp"), blend.pvp)?;
            unit(&format!("focus_blends.{focus}.arc"), blend.arc)?;
        }
        Ok(())
    }
}

impl Default for FocusBlends {
    fn default() -> Self {
        Self {
            pve: GradeBlend { pvp: 0.2, arc: 0.8 },
            pvp: GradeBlend { pvp: 0.8, arc: 0.2 },
            mixed: GradeBlend { pvp: 0.5, arc: 0.5 },
        }
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// Inclusive numeric range window.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RangeWindow {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl RangeWindow {
    /// Whether `range` lies inside the window.
    pub fn contains(&self, range: f64) -> bool {
        (self.min..=self.max).contains(&range)
    }
}

/// Range targets and the band thresholds derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// Window for a `close` preference.
    pub close: RangeWindow,
    /// Window for a `mid` preference. Its bounds also split the bands:
    /// below `mid.min` is close, above `mid.max` is long.
    pub mid: RangeWindow,
    /// Window for a `long` preference.
    pub long: RangeWindow,
    /// Distance outside a window over which fit decays to zero.
    pub falloff: f64,
    /// Flat fit for an `any` preference.
    pub any_preference_fit: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            close: RangeWindow { min: 0.0, max: 38.0 },
            mid: RangeWindow {
                min: 35.0,
                max: 62.0,
            },
            long: RangeWindow {
                min: 58.0,
                max: 100.0,
            },
            falloff: 40.0,
            any_preference_fit: 0.75,
        }
    }
}

impl RangeConfig {
    /// Target window for a concrete preference. `Any` has none.
    pub const fn window(&self, range: PreferredRange) -> Option<RangeWindow> {
        match range {
            PreferredRange::Close => Some(self.close),
            PreferredRange::Mid => Some(self.mid),
            PreferredRange::Long => Some(self.long),
            PreferredRange::Any => None,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, window) in [("close", self.close), ("mid", self.mid), ("long", self.long)] {
            if window.min.is_nan() || window.max.is_nan() || window.min > window.max {
                return Err(invalid(&format!("range.{name}"), "min exceeds max"));
            }
        }
        if !(self.falloff.is_finite() && self.falloff > 0.0) {
            return Err(invalid("range.falloff", "must be positive and finite"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Squad and stealth
// ---------------------------------------------------------------------------

/// Solo/squad heuristic values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SquadFitConfig {
    /// LMG played solo.
    pub solo_lmg: f64,
    /// Special-class, special-ammo weapon played solo.
    pub solo_special: f64,
    /// SMG, AR, or pistol played solo.
    pub solo_mobile: f64,
    /// Any other class played solo.
    pub solo_default: f64,
    /// LMG in a squad.
    pub squad_lmg: f64,
    /// Special-class, special-ammo weapon in a squad.
    pub squad_special: f64,
    /// Any other class in a squad.
    pub squad_default: f64,
}

impl Default for SquadFitConfig {
    fn default() -> Self {
        Self {
            solo_lmg: 0.45,
            solo_special: 0.5,
            solo_mobile: 0.9,
            solo_default: 0.72,
            squad_lmg: 0.88,
            squad_special: 0.8,
            squad_default: 0.74,
        }
    }
}

impl SquadFitConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("squad_fit.solo_lmg", self.solo_lmg),
            ("squad_fit.solo_special", self.solo_special),
            ("squad_fit.solo_mobile", self.solo_mobile),
            ("squad_fit.solo_default", self.solo_default),
            ("squad_fit.squad_lmg", self.squad_lmg),
            ("squad_fit.squad_special", self.squad_special),
            ("squad_fit.squad_default", self.squad_default),
        ] {
            unit(field, value)?;
        }
        Ok(())
    }
}

/// Stealth-preference sub-score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StealthFitConfig {
    /// Score when stealth is a hard requirement.
    pub required: f64,
    /// Score for a weapon whose description signals quiet operation.
    pub quiet: f64,
    /// Score for every other weapon.
    pub loud: f64,
    /// Case-insensitive description keywords that signal quiet operation.
    pub quiet_keywords: Vec<String>,
}

impl Default for StealthFitConfig {
    fn default() -> Self {
        Self {
            required: 1.0,
            quiet: 0.78,
            loud: 0.55,
            quiet_keywords: vec!["silencer".to_owned(), "quiet".to_owned(), "stealth".to_owned()],
        }
    }
}

/// Inputs to the stealth-eligible set: the seed plus every
/// silencer-compatible weapon, minus the exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StealthSetConfig {
    /// Always eligible.
    pub seed: Vec<WeaponId>,
    /// Never eligible, even with a silencer.
    pub excluded: Vec<WeaponId>,
}

impl Default for StealthSetConfig {
    fn default() -> Self {
        Self {
            seed: vec![WeaponId::from("osprey")],
            excluded: ["hairpin", "iltoro", "vulcano"]
                .into_iter()
                .map(WeaponId::from)
                .collect(),
        }
    }
}

/// Case-insensitive fire mode keywords.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FireModeConfig {
    /// Any match marks the weapon burst-capable.
    pub burst_keywords: Vec<String>,
    /// Any match marks the weapon sustained-fire capable.
    pub sustained_keywords: Vec<String>,
}

impl Default for FireModeConfig {
    fn default() -> Self {
        Self {
            burst_keywords: ["semi", "bolt", "lever", "break", "burst", "single"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            sustained_keywords: vec!["full-auto".to_owned()],
        }
    }
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

/// Pair expansion and pair score weights.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// How many top primaries are expanded into pairs.
    pub top_primary_count: usize,
    /// Weight of the primary score in the pair score.
    pub primary_weight: f64,
    /// Weight of the complement score in the pair score.
    pub secondary_weight: f64,
    /// Decimal places of the tie bucket id.
    pub tie_precision: u32,
    /// Decimal places of published scores.
    pub score_precision: u32,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            top_primary_count: 8,
            primary_weight: 0.65,
            secondary_weight: 0.35,
            tie_precision: 4,
            score_precision: 6,
        }
    }
}

/// Secondary complement scoring.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComplementConfig {
    /// Weight of the secondary's own primary score.
    pub base_weight: f64,
    /// Weight of ammo diversity.
    pub ammo_weight: f64,
    /// Weight of range band coverage.
    pub range_weight: f64,
    /// Weight of role diversity.
    pub role_weight: f64,
    /// Ammo score when both weapons share an ammo type.
    pub same_ammo: f64,
    /// Ammo score when ammo types differ.
    pub different_ammo: f64,
    /// Range score for identical bands.
    pub same_band: f64,
    /// Range score for adjacent bands.
    pub different_band: f64,
    /// Range score for close paired with long.
    pub opposite_band: f64,
    /// Role score for identical bands.
    pub role_same: f64,
    /// Role score for adjacent bands.
    pub role_adjacent: f64,
    /// Role score for close paired with long.
    pub role_opposite: f64,
}

impl Default for ComplementConfig {
    fn default() -> Self {
        Self {
            base_weight: 0.55,
            ammo_weight: 0.2,
            range_weight: 0.15,
            role_weight: 0.1,
            same_ammo: 0.2,
            different_ammo: 1.0,
            same_band: 0.45,
            different_band: 1.0,
            opposite_band: 0.95,
            role_same: 0.15,
            role_adjacent: 0.65,
            role_opposite: 1.0,
        }
    }
}

impl ComplementConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("complement.base_weight", self.base_weight),
            ("complement.ammo_weight", self.ammo_weight),
            ("complement.range_weight", self.range_weight),
            ("complement.role_weight", self.role_weight),
            ("complement.same_ammo", self.same_ammo),
            ("complement.different_ammo", self.different_ammo),
            ("complement.same_band", self.same_band),
            ("complement.different_band", self.different_band),
            ("complement.opposite_band", self.opposite_band),
            ("complement.role_same", self.role_same),
            ("complement.role_adjacent", self.role_adjacent),
            ("complement.role_opposite", self.role_opposite),
        ] {
            unit(field, value)?;
        }
        Ok(())
    }
}

/// Reveal batch defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShuffleConfig {
    /// Batch size used when the caller does not pass one.
    pub default_batch_size: usize,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            default_batch_size: 2,
        }
    }
}
