use thiserror::Error;

/// Everything that can go wrong while ranking.
///
/// The rankers themselves never fail on well-formed input; these variants
/// describe a caller misusing a source or handing over a bad configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankError {
    /// A source was asked for a player after it ran dry.
    #[error("no more players to fetch")]
    Exhausted,

    /// Snapshots every zero players would never make progress.
    #[error("reporting interval must be at least 1")]
    ZeroInterval,
}
