use std::fmt;

/// One of the two sides on the scoreboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    Home,
    Guest,
}

impl Team {
    /// Returns the other side.
    pub const fn opponent(self) -> Self {
        match self {
            Team::Home => Team::Guest,
            Team::Guest => Team::Home,
        }
    }
}

/// Unique identifier for a rostered player.
///
/// Allocated sequentially by [`GameState`](super::GameState); within a
/// state lineage no two coexisting players ever share an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rostered player and their personal foul count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    /// Jersey number as entered. Numeric content by convention (up to
    /// three characters), but the core does not re-validate UI input.
    pub jersey: String,
    pub fouls: u32,
}

impl Player {
    pub fn new(id: PlayerId, jersey: impl Into<String>) -> Self {
        Self {
            id,
            jersey: jersey.into(),
            fouls: 0,
        }
    }
}

/// Per-team slice of the scoreboard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamState {
    pub name: String,
    pub score: u32,
    pub fouls: u32,
    /// Sorted ascending by numeric jersey value after every insertion.
    pub players: Vec<Player>,
}

impl TeamState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            fouls: 0,
            players: Vec::new(),
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Re-establishes the roster ordering invariant.
    ///
    /// Numeric jerseys sort ascending by value; non-numeric jerseys sort
    /// after all numeric ones, ordered among themselves by the raw string.
    pub(crate) fn sort_players(&mut self) {
        self.players
            .sort_by(|a, b| jersey_sort_key(&a.jersey).cmp(&jersey_sort_key(&b.jersey)));
    }
}

fn jersey_sort_key(jersey: &str) -> (bool, u32, &str) {
    match jersey.parse::<u32>() {
        Ok(value) => (false, value, ""),
        Err(_) => (true, 0, jersey),
    }
}

/// Countdown clock for the current period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockState {
    /// Seconds remaining, in `[0, period_seconds]`.
    pub time_left: u32,
    /// Whether the countdown is actively ticking.
    pub is_running: bool,
}

impl ClockState {
    /// A stopped clock with the given time remaining.
    pub const fn stopped(time_left: u32) -> Self {
        Self {
            time_left,
            is_running: false,
        }
    }

    pub const fn is_expired(&self) -> bool {
        self.time_left == 0
    }
}
