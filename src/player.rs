//! Players, the order every ranker relies on, and the one-shot sources
//! the online ranker drains.

use crate::RankError;
use std::cmp::Ordering;
use std::fmt;

/// Something with a level that the rankers can order.
///
/// Implementors must order consistently with `level()`: if `a < b` then
/// `a.level() <= b.level()`.  Cutoffs are reported in terms of levels.
pub trait Leveled: Ord {
    fn level(&self) -> usize;
}

/// A named player.  Two players compare by level alone; the name is along
/// for the ride so results are readable.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Player {
    pub name: String,
    pub level: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, level: usize) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

impl Leveled for Player {
    #[inline]
    fn level(&self) -> usize {
        self.level
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
    }
}

impl Eq for Player {}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level.cmp(&other.level)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.level)
    }
}

// Bare levels are handy in tests and benchmarks.
impl Leveled for usize {
    #[inline]
    fn level(&self) -> usize {
        *self
    }
}

/// A forward-only supply of players that can be read exactly once.
pub trait PlayerSource {
    type Item: Leveled;

    /// How many players are left.  Never increases.
    fn remaining(&self) -> usize;

    /// Hands out the next player, or [`RankError::Exhausted`] if there is none.
    fn next_player(&mut self) -> Result<Self::Item, RankError>;
}

/// Replays the contents of a vector, front to back.
#[derive(Debug, Clone)]
pub struct VecPlayerSource<T> {
    players: Vec<T>,
    index: usize,
}

impl<T> VecPlayerSource<T> {
    pub fn new(players: Vec<T>) -> Self {
        Self { players, index: 0 }
    }
}

impl<T> From<Vec<T>> for VecPlayerSource<T> {
    fn from(players: Vec<T>) -> Self {
        Self::new(players)
    }
}

impl<T: Leveled + Clone> PlayerSource for VecPlayerSource<T> {
    type Item = T;

    #[inline]
    fn remaining(&self) -> usize {
        self.players.len() - self.index
    }

    fn next_player(&mut self) -> Result<T, RankError> {
        let player = self.players.get(self.index).ok_or(RankError::Exhausted)?;
        self.index += 1;
        Ok(player.clone())
    }
}
