//! Rankers for a collection that is already sitting in memory.
//!
//! Both of these pick out the top tenth of the players and return them
//! sorted least to greatest.  Both take the collection by exclusive reference
//! and leave it rearranged; don't count on its order afterwards.
//!
//! [`heap_rank`] heapifies everything and pops the maximum K times, for
//! O(N + K log N).  [`quickselect_rank`] does a single selection partition
//! around the 90% mark, for expected O(N), then sorts only the top part.
//! When several players share the level right at the boundary, the two may
//! pick different ones of them; the levels they return are the same.

use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;
use tracing::debug;

use crate::RankingResult;

/// The offline rankers return the top 1/TOP_FRACTION_DIVISOR of their input.
pub const TOP_FRACTION_DIVISOR: usize = 10;

/// Selects the top tenth of `players` with an early-stopping heapsort.
///
/// On return `players` holds the other nine tenths, in no particular order.
/// Fewer than ten players yields an empty top.
pub fn heap_rank<T: Ord>(players: &mut Vec<T>) -> RankingResult<T> {
    let start = Instant::now();
    let total = players.len();
    let top_count = total / TOP_FRACTION_DIVISOR;

    // BinaryHeap::from heapifies in place in O(N), reusing the caller's buffer.
    let mut heap = BinaryHeap::from(std::mem::take(players));
    let mut top = Vec::with_capacity(top_count);
    top.extend(std::iter::from_fn(|| heap.pop()).take(top_count));
    *players = heap.into_vec();

    top.sort_unstable();
    let elapsed = start.elapsed();
    debug!(total, selected = top.len(), ?elapsed, "heap_rank finished");
    RankingResult::new(top, BTreeMap::new(), elapsed)
}

/// Selects the top tenth of `players` with one quickselect partition.
///
/// On return `players` still holds everyone, partitioned so that the top
/// tenth sits at the end.  Fewer than ten players yields an empty top.
pub fn quickselect_rank<T: Ord + Clone>(players: &mut [T]) -> RankingResult<T> {
    let start = Instant::now();
    let total = players.len();
    let k = total - total / TOP_FRACTION_DIVISOR;

    // select_nth_unstable panics on k == len, which is exactly the empty-top case.
    if k < total {
        players.select_nth_unstable(k);
    }
    let mut top = players[k..].to_vec();

    top.sort_unstable();
    let elapsed = start.elapsed();
    debug!(total, selected = top.len(), ?elapsed, "quickselect_rank finished");
    RankingResult::new(top, BTreeMap::new(), elapsed)
}
