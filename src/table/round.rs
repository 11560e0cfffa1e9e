use std::collections::HashMap;

use crate::table::error::TableError;
use crate::table::roster::Roster;
use crate::Position;
use crate::Rank;
use crate::RANK_FIRST;
use crate::RANK_LAST;

/// One completed game: a rank per seat, aligned with the roster order.
///
/// Ranks are seat placements of the underlying 8-seat game, so they range
/// over 1..8 regardless of how many players are being settled, and they need
/// not form a permutation: ties are legal and contribute no stakes. A round
/// is immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    ranks: Vec<Rank>,
}

impl TryFrom<(&Roster, &HashMap<String, Rank>)> for Round {
    type Error = TableError;
    fn try_from((roster, ranks): (&Roster, &HashMap<String, Rank>)) -> Result<Self, Self::Error> {
        for name in ranks.keys() {
            if roster.seat(name).is_none() {
                return Err(TableError::UnseatedPlayer(name.clone()));
            }
        }
        let mut seated = Vec::with_capacity(roster.seats());
        for name in roster.names() {
            let rank = *ranks
                .get(name)
                .ok_or_else(|| TableError::MissingRank(name.clone()))?;
            if !(RANK_FIRST..=RANK_LAST).contains(&rank) {
                return Err(TableError::RankOutOfRange(name.clone(), rank));
            }
            seated.push(rank);
        }
        Ok(Self { ranks: seated })
    }
}

impl Round {
    pub fn rank(&self, seat: Position) -> Rank {
        self.ranks[seat]
    }
    /// Winner/loser orientation for one seat pair, by ascending rank.
    /// None when the seats tied.
    pub fn duel(&self, i: Position, j: Position) -> Option<(Position, Position)> {
        match self.ranks[i].cmp(&self.ranks[j]) {
            std::cmp::Ordering::Less => Some((i, j)),
            std::cmp::Ordering::Greater => Some((j, i)),
            std::cmp::Ordering::Equal => None,
        }
    }
    /// A uniformly random rank assignment for `seats` players, ties included.
    pub fn roll(seats: usize) -> Self {
        Self {
            ranks: (0..seats)
                .map(|_| rand::random_range(RANK_FIRST..=RANK_LAST))
                .collect(),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (seat, rank) in self.ranks.iter().enumerate() {
            if seat > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
