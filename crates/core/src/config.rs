/// Scoreboard configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Length of one period in seconds. The clock resets to this value.
    pub period_seconds: u32,
    /// Undo snapshots retained before the oldest is discarded.
    pub history_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// The game is played in halves; the period counter never passes this.
    pub const MAX_PERIOD: u8 = 2;

    /// Display name a fresh state assigns to the home side.
    pub const DEFAULT_HOME_NAME: &'static str = "Home";
    /// Display name a fresh state assigns to the guest side.
    pub const DEFAULT_GUEST_NAME: &'static str = "Guest";

    // ===== runtime-tunable defaults =====
    /// Regulation period length: 18 minutes.
    pub const DEFAULT_PERIOD_SECONDS: u32 = 18 * 60;
    pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

    pub fn new() -> Self {
        Self {
            period_seconds: Self::DEFAULT_PERIOD_SECONDS,
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
