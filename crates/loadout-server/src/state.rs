//! Shared application state for the advisor API.

use loadout_advisor::Advisor;

/// State shared by every handler behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The recommendation engine. Read-only after startup.
    pub advisor: Advisor,
}

impl AppState {
    /// Wrap a configured advisor.
    pub const fn new(advisor: Advisor) -> Self {
        Self { advisor }
    }
}
