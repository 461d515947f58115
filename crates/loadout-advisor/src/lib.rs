//! Primary + secondary weapon recommendation engine.
//!
//! A deterministic pipeline over an immutable catalog: normalize a partial
//! questionnaire, filter by hard constraints, score each survivor as a
//! primary, score ordered pairs for complementarity, rank them with a total
//! order, and reveal the ranking in tie-bucket aware batches. The shuffle
//! cursor is a caller-owned value; the engine keeps no session state.
//!
//! # Modules
//!
//! - [`config`] -- Tuning constants, loadable from `advisor-config.yaml`.
//! - [`features`] -- Range band, fire mode traits, role baseline, stealth
//!   eligibility.
//! - [`inputs`] -- Questionnaire normalization and hard-constraint filter.
//! - [`primary`] -- Stand-alone primary scoring.
//! - [`complement`] -- Secondary complement scoring.
//! - [`pairs`] -- Ordered pair expansion, ranking, and reasons.
//! - [`scoring`] -- Clamping, rounding, and tie bucket ids.
//! - [`shuffle`] -- Reveal batches and cycle handling.
//! - [`query`] -- Share-link encoding of questionnaire and cursor.
//! - [`engine`] -- The [`Advisor`] facade.

pub mod complement;
pub mod config;
pub mod engine;
pub mod features;
pub mod inputs;
pub mod pairs;
pub mod primary;
pub mod query;
pub mod scoring;
pub mod shuffle;

pub use config::{AdvisorConfig, ConfigError};
pub use engine::{Advisor, RecommendOptions};
pub use features::WeaponFeatures;
pub use query::{parse_query, serialize_query};
pub use shuffle::{ShuffleBatch, next_batch};
