//! Shared type definitions for the loadout advisor.
//!
//! This crate is the single source of truth for every value that crosses a
//! crate boundary: catalog records, the questionnaire, score breakdowns,
//! ranked recommendations, and the shuffle cursor. Types flow downstream to
//! `TypeScript` via `ts-rs` for the browser UI.
//!
//! # Modules
//!
//! - [`ids`] -- Slug wrappers for weapon ids and pair keys
//! - [`enums`] -- Closed enumerations (classes, grades, maps, preferences)
//! - [`structs`] -- Weapon records, inputs, breakdowns, results

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::{
    AmmoType, EmptyStateCode, Focus, Grade, Location, PreferredRange, RangeBand, Rarity,
    SlotType, SquadMode, WeaponClass,
};
pub use ids::{PAIR_KEY_SEPARATOR, PairKey, WeaponId};
pub use structs::{
    AdvisorEmptyState, AdvisorInputs, AdvisorQueryState, AdvisorResult, ComplementBreakdown,
    PairDebug, PairRationale, PairRecommendation, PartialAdvisorInputs, RankedRecommendations,
    ScoreBreakdown, ShuffleCursor, ShuffleState, Weapon,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::WeaponId::export_all();
        let _ = crate::ids::PairKey::export_all();

        // Enums
        let _ = crate::enums::WeaponClass::export_all();
        let _ = crate::enums::AmmoType::export_all();
        let _ = crate::enums::Rarity::export_all();
        let _ = crate::enums::Grade::export_all();
        let _ = crate::enums::SlotType::export_all();
        let _ = crate::enums::Location::export_all();
        let _ = crate::enums::SquadMode::export_all();
        let _ = crate::enums::Focus::export_all();
        let _ = crate::enums::PreferredRange::export_all();
        let _ = crate::enums::RangeBand::export_all();
        let _ = crate::enums::EmptyStateCode::export_all();

        // Structs
        let _ = crate::structs::Weapon::export_all();
        let _ = crate::structs::AdvisorInputs::export_all();
        let _ = crate::structs::PartialAdvisorInputs::export_all();
        let _ = crate::structs::ScoreBreakdown::export_all();
        let _ = crate::structs::ComplementBreakdown::export_all();
        let _ = crate::structs::PairDebug::export_all();
        let _ = crate::structs::PairRationale::export_all();
        let _ = crate::structs::PairRecommendation::export_all();
        let _ = crate::structs::AdvisorEmptyState::export_all();
        let _ = crate::structs::ShuffleState::export_all();
        let _ = crate::structs::ShuffleCursor::export_all();
        let _ = crate::structs::AdvisorResult::export_all();
        let _ = crate::structs::RankedRecommendations::export_all();
        let _ = crate::structs::AdvisorQueryState::export_all();
    }
}
