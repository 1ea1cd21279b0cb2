//! Leaderboard ranks players by level and reports the best of them.
//! It comes in two flavors, depending on how the players arrive.
//!
//! If you already have every player in memory, the [`offline`] rankers pick
//! out the top tenth and return it sorted.  [`heap_rank`] heapifies the whole
//! collection and pops off the best one at a time, stopping as soon as it
//! has a tenth of them; [`quickselect_rank`] does a single selection
//! partition at the 90% mark and only sorts what lands above it.  Both work
//! in place on the collection you hand them, so expect it to come back
//! rearranged (and, for [`heap_rank`], a tenth shorter).
//!
//! If the players arrive one at a time from a [`PlayerSource`], the
//! [`online`] ranker [`rank_incoming`] reads them exactly once and never
//! holds more than `reporting_interval` of them.  It keeps them in a
//! hand-managed min-heap, so the weakest leader is always at the root and
//! a newcomer only has to beat that one player to get on the board.
//! Along the way it notes the level you needed to be on the board after
//! every `reporting_interval` players, and once more at the end.
//!
//! Every ranker returns a [`RankingResult`]: the winners from least to
//! greatest, the cutoffs (empty for the offline rankers), and the time the
//! ranking itself took.  Time spent waiting on the source is not counted.
//!
//! Players are anything [`Leveled`]; [`Player`] is the ready-made one.
//! Two players with the same level compare equal, so when several of them
//! straddle the boundary, which of them makes the cut is up to the ranker.
//! The levels reported are the same either way.
//!
//! ```
//! use leaderboard::{Player, VecPlayerSource, rank_incoming};
//!
//! let players = (0..120).map(|i| Player::new(format!("P{i}"), i)).collect();
//! let mut source = VecPlayerSource::new(players);
//! let result = rank_incoming(&mut source, 50).unwrap();
//! assert_eq!(result.top().len(), 50);
//! assert_eq!(result.cutoffs().get(&100), Some(&50));
//! assert_eq!(result.cutoffs().get(&120), Some(&70));
//! ```
//!
//! Nothing here is thread-aware: each call owns its working state for the
//! duration and drops it on return.

mod config;
mod error;
pub mod offline;
pub mod online;
mod player;
mod result;

pub use config::{DEFAULT_REPORTING_INTERVAL, ReportingInterval};
pub use error::RankError;
pub use offline::{TOP_FRACTION_DIVISOR, heap_rank, quickselect_rank};
pub use online::{rank_incoming, replace_min};
pub use player::{Leveled, Player, PlayerSource, VecPlayerSource};
pub use result::RankingResult;
