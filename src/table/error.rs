use crate::Position;
use crate::Rank;

/// Rejections for roster configuration and round submission.
///
/// Every variant is reported synchronously at the offending input, and the
/// failed operation leaves the session untouched. A missing rank is never
/// zero-filled: defaulting a rank would fabricate stakes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("seat count {0} outside of {min}-{max}", min = crate::MIN_SEATS, max = crate::MAX_SEATS)]
    SeatCount(usize),
    #[error("empty name at seat {0}")]
    EmptyName(Position),
    #[error("duplicate name: {0}")]
    DuplicateName(String),
    #[error("no rank submitted for {0}")]
    MissingRank(String),
    #[error("rank submitted for unseated player: {0}")]
    UnseatedPlayer(String),
    #[error("rank {1} for {0} outside of {min}-{max}", min = crate::RANK_FIRST, max = crate::RANK_LAST)]
    RankOutOfRange(String, Rank),
}
