use crate::table::error::TableError;
use crate::Arbitrary;
use crate::Position;
use crate::MAX_SEATS;
use crate::MIN_SEATS;

/// The configured player set, in stable first-configured order.
///
/// Seat order is part of the observable contract, not cosmetics: pairwise
/// listings, balance reports, and the greedy sweep all iterate seats in this
/// order, which is what keeps settlement output deterministic and comparable
/// across runs. The roster is fixed for the life of a settlement computation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl TryFrom<Vec<String>> for Roster {
    type Error = TableError;
    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        if names.len() < MIN_SEATS || names.len() > MAX_SEATS {
            return Err(TableError::SeatCount(names.len()));
        }
        for (seat, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(TableError::EmptyName(seat));
            }
            if names[..seat].contains(name) {
                return Err(TableError::DuplicateName(name.clone()));
            }
        }
        Ok(Self { names })
    }
}

impl Roster {
    pub fn seats(&self) -> usize {
        self.names.len()
    }
    pub fn names(&self) -> &[String] {
        &self.names
    }
    pub fn name(&self, seat: Position) -> &str {
        &self.names[seat]
    }
    pub fn seat(&self, name: &str) -> Option<Position> {
        self.names.iter().position(|n| n == name)
    }
    /// All unordered seat pairs (i, j) with i < j, in stable order.
    pub fn pairs(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let n = self.seats();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }
}

impl Arbitrary for Roster {
    fn random() -> Self {
        let seats = rand::random_range(MIN_SEATS..=MAX_SEATS);
        Self::try_from(
            ["alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi"]
                .iter()
                .take(seats)
                .map(|name| name.to_string())
                .collect::<Vec<String>>(),
        )
        .expect("name pool is valid")
    }
}
