use crate::ledger::stakes::stakes;
use crate::table::round::Round;
use crate::table::roster::Roster;
use crate::Chips;
use crate::Position;

/// Aggregation result: who owes whom, and where everyone nets out.
///
/// `owed[debtor][creditor]` accumulates strictly additively across rounds.
/// The same pair can carry chips in both directions from different rounds;
/// the net direction per pair is derived only at query time, never folded
/// into storage. Balances mirror the matrix and sum to zero for any round
/// history.
///
/// The whole structure is rebuilt from full history on every settlement
/// request rather than maintained incrementally, so nothing survives between
/// requests and no caller can contaminate a later run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    owed: Vec<Vec<Chips>>,
    balances: Vec<Chips>,
}

impl From<(&Roster, &[Round])> for Ledger {
    fn from((roster, rounds): (&Roster, &[Round])) -> Self {
        let seats = roster.seats();
        let mut ledger = Self {
            owed: vec![vec![0; seats]; seats],
            balances: vec![0; seats],
        };
        for round in rounds {
            ledger.absorb(roster, round);
        }
        debug_assert_eq!(ledger.balances.iter().sum::<Chips>(), 0);
        ledger
    }
}

impl Ledger {
    fn absorb(&mut self, roster: &Roster, round: &Round) {
        for (i, j) in roster.pairs() {
            if let Some((winner, loser)) = round.duel(i, j) {
                let amount = stakes(round.rank(winner), round.rank(loser));
                self.owed[loser][winner] += amount;
                self.balances[winner] += amount;
                self.balances[loser] -= amount;
            }
        }
    }

    /// Cumulative chips `debtor` owes `creditor`, before netting.
    pub fn owed(&self, debtor: Position, creditor: Position) -> Chips {
        self.owed[debtor][creditor]
    }
    /// Net chips `a` still owes `b`; negative when `b` owes `a` instead.
    pub fn net(&self, a: Position, b: Position) -> Chips {
        self.owed[a][b] - self.owed[b][a]
    }
    pub fn balance(&self, seat: Position) -> Chips {
        self.balances[seat]
    }
    pub fn balances(&self) -> &[Chips] {
        &self.balances
    }
}
