//! Ranking players as they stream in, one pass, bounded memory.
//!
//! The leaderboard is a plain vector of at most `reporting_interval` players.
//! Until it fills up we just append.  The moment it is full we heapify it once
//! into a min-heap, so the weakest leader sits at index 0.  From then on
//! each newcomer is compared against that root: if it is strictly greater it
//! overwrites the root and is sifted down ([`replace_min`]), otherwise it is
//! dropped.  A newcomer that merely ties the weakest leader loses, so among
//! equal levels the earliest arrivals keep their places.
//!
//! Every `reporting_interval` arrivals we note the root's level, the minimum
//! level needed to be on the board at that moment.  After the source runs dry
//! we note it once more for the final count, unless that count was just noted.
//!
//! We roll our own heap rather than use `BinaryHeap` because we need
//! replace-the-root in a single sift-down, with no push/pop churn.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use crate::{Leveled, PlayerSource, RankError, RankingResult, ReportingInterval};

/// Overwrites the root of the min-heap `heap` with `target` and sifts it
/// down until neither child is smaller.  O(log n).
///
/// `heap` must already be a min-heap (children at 2i+1 and 2i+2); it is one
/// again afterwards.  The old minimum is gone, so read it first if you need it.
/// An empty `heap` is left alone.
pub fn replace_min<T: Ord>(heap: &mut [T], target: T) {
    if let Some(root) = heap.first_mut() {
        *root = target;
        sift_down(heap, 0);
    }
}

// Moves heap[current] down until it is no larger than either child.
fn sift_down<T: Ord>(heap: &mut [T], mut current: usize) {
    let len = heap.len();
    loop {
        let left = 2 * current + 1;
        let right = left + 1;

        let mut smallest = current;
        if left < len && heap[left] < heap[smallest] {
            smallest = left;
        }
        if right < len && heap[right] < heap[smallest] {
            smallest = right;
        }

        if smallest == current {
            break;
        }
        heap.swap(current, smallest);
        current = smallest;
    }
}

// Floyd's bottom-up heapify, O(n).
fn make_min_heap<T: Ord>(heap: &mut [T]) {
    for i in (0..heap.len() / 2).rev() {
        sift_down(heap, i);
    }
}

// The current leaders.  Unordered while filling; a min-heap once full.
struct Leaders<T> {
    capacity: usize,
    players: Vec<T>,
}

impl<T: Leveled> Leaders<T> {
    fn new(capacity: usize, expected: usize) -> Self {
        Self {
            capacity,
            players: Vec::with_capacity(capacity.min(expected)),
        }
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.players.len() == self.capacity
    }

    fn offer(&mut self, player: T) {
        if !self.is_full() {
            self.players.push(player);
            if self.is_full() {
                make_min_heap(&mut self.players);
            }
        } else if self.players.first().is_some_and(|weakest| player > *weakest) {
            replace_min(&mut self.players, player);
        }
    }

    // The level needed to be on the board right now.  Before the board is
    // full it isn't a heap yet, so we have to look at everyone.
    fn min_level(&self) -> Option<usize> {
        if self.is_full() {
            self.players.first().map(Leveled::level)
        } else {
            self.players.iter().map(Leveled::level).min()
        }
    }

    fn into_sorted(mut self) -> Vec<T> {
        self.players.sort_unstable();
        self.players
    }
}

/// Drains `source`, keeping the `reporting_interval` highest-level players
/// seen and recording the cutoff level every `reporting_interval` players
/// and once more at the end.
///
/// The result's top holds min(`reporting_interval`, players read) players,
/// least to greatest.  Its elapsed time leaves out time spent inside
/// [`PlayerSource::next_player`].
///
/// For example, with 132 players and an interval of 50 the cutoffs might
/// be `{50: 239, 100: 992, 132: 994}`, and the top would hold 50 players,
/// the weakest of them at level 994.
///
/// A `reporting_interval` of 0 is rejected with [`RankError::ZeroInterval`]
/// before anything is read.  An empty source yields an empty result.
pub fn rank_incoming<S: PlayerSource>(
    source: &mut S,
    reporting_interval: usize,
) -> Result<RankingResult<S::Item>, RankError> {
    let interval = ReportingInterval::try_from(reporting_interval)?.get();

    let mut elapsed = Duration::ZERO;
    let mut leaders = Leaders::new(interval, source.remaining());
    let mut cutoffs = BTreeMap::new();
    let mut seen = 0usize;

    while source.remaining() > 0 {
        let player = source.next_player()?;
        let lap = Instant::now();

        seen += 1;
        leaders.offer(player);
        if seen % interval == 0
            && let Some(level) = leaders.min_level()
        {
            trace!(seen, level, "cutoff");
            cutoffs.insert(seen, level);
        }

        elapsed += lap.elapsed();
    }

    let lap = Instant::now();
    if let Some(level) = leaders.min_level() {
        cutoffs.entry(seen).or_insert(level);
    }
    let top = leaders.into_sorted();
    elapsed += lap.elapsed();

    debug!(seen, interval, kept = top.len(), ?elapsed, "rank_incoming finished");
    Ok(RankingResult::new(top, cutoffs, elapsed))
}
