use crate::RankError;
use std::num::NonZeroUsize;

/// Players are reported on every this-many arrivals unless told otherwise.
pub const DEFAULT_REPORTING_INTERVAL: usize = 50;

/// How often the online ranker snapshots its cutoff.  It doubles as the
/// size of the leaderboard, so it can never be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportingInterval(NonZeroUsize);

impl ReportingInterval {
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ReportingInterval {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_REPORTING_INTERVAL).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for ReportingInterval {
    type Error = RankError;

    fn try_from(interval: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(interval)
            .map(Self)
            .ok_or(RankError::ZeroInterval)
    }
}

impl From<NonZeroUsize> for ReportingInterval {
    fn from(interval: NonZeroUsize) -> Self {
        Self(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert_eq!(ReportingInterval::try_from(0), Err(RankError::ZeroInterval));
    }

    #[test]
    fn nonzero_round_trips() {
        assert_eq!(ReportingInterval::try_from(7).map(ReportingInterval::get), Ok(7));
        assert_eq!(ReportingInterval::default().get(), DEFAULT_REPORTING_INTERVAL);
    }
}
