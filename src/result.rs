use std::collections::BTreeMap;
use std::time::Duration;

/// What every ranker hands back: the winners in ascending order, the
/// level needed to qualify at each checkpoint, and how long the work took.
///
/// `cutoffs` maps "players consumed so far" to "minimum level on the board".
/// It is only ever filled in by [`rank_incoming`](crate::online::rank_incoming);
/// the offline rankers leave it empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankingResult<T> {
    top: Vec<T>,
    cutoffs: BTreeMap<usize, usize>,
    elapsed: Duration,
}

impl<T> RankingResult<T> {
    pub fn new(top: Vec<T>, cutoffs: BTreeMap<usize, usize>, elapsed: Duration) -> Self {
        Self {
            top,
            cutoffs,
            elapsed,
        }
    }

    /// The top players, least to greatest.
    #[inline]
    pub fn top(&self) -> &[T] {
        &self.top
    }

    #[inline]
    pub fn cutoffs(&self) -> &BTreeMap<usize, usize> {
        &self.cutoffs
    }

    /// Time spent selecting and sorting, not waiting on a source.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn into_top(self) -> Vec<T> {
        self.top
    }
}
