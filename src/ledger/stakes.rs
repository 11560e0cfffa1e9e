use crate::Chips;
use crate::Rank;
use crate::RANK_FIRST;
use crate::RANK_LAST;

/// Chips the loser of one pairwise matchup owes the winner.
///
/// The base stake is the rank gap. A winner who took the round outright
/// collects double, and a loser who finished in the last seat pays double.
/// Both conditions compound: a first-place winner collecting from a
/// last-place loser is paid four times the gap.
pub fn stakes(winner: Rank, loser: Rank) -> Chips {
    debug_assert!(winner < loser);
    let base = Chips::from(loser - winner);
    let mut amount = base;
    if winner == RANK_FIRST {
        amount *= 2;
    }
    if loser == RANK_LAST {
        amount *= 2;
    }
    amount
}
