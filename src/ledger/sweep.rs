use crate::Chips;
use crate::Position;

/// Ephemeral greedy sweep that drains a zero-sum balance vector into a short
/// list of point-to-point transfers.
///
/// Debtors and creditors each keep their seat order from the balance vector,
/// which is the roster's stable order; that ordering is an observable part
/// of the contract. Two cursors walk the lists, always transferring the most
/// possible between the current debtor and creditor, so every emission
/// drains at least one side's entry and the plan never exceeds
/// `debtors + creditors - 1` transfers. Shorter plans exist for some balance
/// distributions (minimal-cardinality settlement is a hard combinatorial
/// problem in general); the greedy is kept for its determinism.
pub struct Sweep {
    debtors: Vec<(Position, Chips)>,
    creditors: Vec<(Position, Chips)>,
    transfers: Vec<(Position, Position, Chips)>,
}

impl From<&[Chips]> for Sweep {
    fn from(balances: &[Chips]) -> Self {
        Self {
            debtors: balances
                .iter()
                .enumerate()
                .filter(|(_, &chips)| chips < 0)
                .map(|(seat, &chips)| (seat, -chips))
                .collect(),
            creditors: balances
                .iter()
                .enumerate()
                .filter(|(_, &chips)| chips > 0)
                .map(|(seat, &chips)| (seat, chips))
                .collect(),
            transfers: Vec::new(),
        }
    }
}

impl Sweep {
    /// Drain both sides, emitting `(debtor, creditor, amount)` triples.
    /// A zero-sum input exhausts both lists together; any residue is a logic
    /// error and is surfaced, never dropped.
    pub fn settle(mut self) -> Vec<(Position, Position, Chips)> {
        let mut d = 0;
        let mut c = 0;
        while d < self.debtors.len() && c < self.creditors.len() {
            let (debtor, debt) = self.debtors[d];
            let (creditor, credit) = self.creditors[c];
            let transfer = std::cmp::min(debt, credit);
            if transfer > 0 {
                self.transfers.push((debtor, creditor, transfer));
            }
            self.debtors[d].1 -= transfer;
            self.creditors[c].1 -= transfer;
            if self.debtors[d].1 == 0 {
                d += 1;
            }
            if self.creditors[c].1 == 0 {
                c += 1;
            }
        }
        let residue = self.debtors[d..]
            .iter()
            .chain(self.creditors[c..].iter())
            .map(|(_, chips)| chips)
            .sum::<Chips>();
        if residue != 0 {
            log::error!("sweep left {} chips unsettled", residue);
            debug_assert_eq!(residue, 0);
        }
        self.transfers
    }
}
