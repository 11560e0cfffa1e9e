use std::collections::HashMap;

use crate::ledger::ledger::Ledger;
use crate::ledger::settlement::Settlement;
use crate::ledger::sweep::Sweep;
use crate::table::error::TableError;
use crate::table::round::Round;
use crate::table::roster::Roster;
use crate::Rank;

/// Single source of truth for one settlement run: the configured roster and
/// the ordered round history.
///
/// All mutation goes through the methods below and each call either fully
/// applies or fully rejects. Settlement never mutates; it recomputes the
/// ledger and the transfer plan from full history on every call.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    rounds: Vec<Round>,
}

impl Session {
    pub fn new(names: Vec<String>) -> Result<Self, TableError> {
        Ok(Self {
            roster: Roster::try_from(names)?,
            rounds: Vec::new(),
        })
    }

    /// Replace the roster. The identical name list is a no-op that keeps
    /// recorded rounds; any change invalidates them and clears the history.
    pub fn configure(&mut self, names: Vec<String>) -> Result<(), TableError> {
        let roster = Roster::try_from(names)?;
        if roster == self.roster {
            return Ok(());
        }
        if !self.rounds.is_empty() {
            log::info!(
                "roster changed, discarding {} recorded rounds",
                self.rounds.len()
            );
            self.rounds.clear();
        }
        self.roster = roster;
        Ok(())
    }

    /// Validate and append one round. The mapping must cover the roster
    /// exactly; any defect rejects the whole submission.
    pub fn submit(&mut self, ranks: &HashMap<String, Rank>) -> Result<(), TableError> {
        let round = Round::try_from((&self.roster, ranks))?;
        log::debug!("round {} recorded: {}", self.rounds.len() + 1, round);
        self.rounds.push(round);
        Ok(())
    }

    /// Remove and return the most recent round; None on an empty history.
    pub fn undo(&mut self) -> Option<Round> {
        self.rounds.pop()
    }

    /// Discard all rounds. The roster is retained.
    pub fn reset(&mut self) {
        self.rounds.clear();
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Settle the table from the full history. Zero recorded rounds is a
    /// valid state and settles to all-even with no transfers.
    pub fn settle(&self) -> Settlement {
        let ledger = Ledger::from((&self.roster, self.rounds.as_slice()));
        let transfers = Sweep::from(ledger.balances()).settle();
        Settlement::from((&self.roster, &ledger, transfers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    fn ranks(entries: &[(&str, Rank)]) -> HashMap<String, Rank> {
        entries
            .iter()
            .map(|(name, rank)| (name.to_string(), *rank))
            .collect()
    }

    fn session() -> Session {
        Session::new(names(&["alice", "bob"])).unwrap()
    }

    #[test]
    fn heads_up_round_trip() {
        let mut session = session();
        session.submit(&ranks(&[("alice", 1), ("bob", 2)])).unwrap();
        let settlement = session.settle();
        assert_eq!(settlement.balances[0].chips, 2);
        assert_eq!(settlement.balances[1].chips, -2);
        assert_eq!(settlement.transfers.len(), 1);
        assert_eq!(settlement.transfers[0].from, "bob");
        assert_eq!(settlement.transfers[0].to, "alice");
        assert_eq!(settlement.transfers[0].amount, 2);
        assert_eq!(settlement.winner().unwrap().name, "alice");
    }

    #[test]
    fn reconfigure_with_same_names_keeps_history() {
        let mut session = session();
        session.submit(&ranks(&[("alice", 1), ("bob", 2)])).unwrap();
        session.configure(names(&["alice", "bob"])).unwrap();
        assert_eq!(session.rounds().len(), 1);
    }

    #[test]
    fn reconfigure_with_new_names_clears_history() {
        let mut session = session();
        session.submit(&ranks(&[("alice", 1), ("bob", 2)])).unwrap();
        session.configure(names(&["alice", "bob", "carol"])).unwrap();
        assert_eq!(session.rounds().len(), 0);
        assert_eq!(session.roster().seats(), 3);
    }

    #[test]
    fn reordered_names_count_as_a_new_roster() {
        let mut session = session();
        session.submit(&ranks(&[("alice", 1), ("bob", 2)])).unwrap();
        session.configure(names(&["bob", "alice"])).unwrap();
        assert_eq!(session.rounds().len(), 0);
    }

    #[test]
    fn rejected_submission_leaves_history_alone() {
        let mut session = session();
        session.submit(&ranks(&[("alice", 1), ("bob", 2)])).unwrap();
        let rejected = session.submit(&ranks(&[("alice", 1)]));
        assert_eq!(rejected, Err(TableError::MissingRank("bob".to_string())));
        assert_eq!(session.rounds().len(), 1);
    }

    #[test]
    fn undo_pops_only_the_last_round() {
        let mut session = session();
        session.submit(&ranks(&[("alice", 1), ("bob", 2)])).unwrap();
        session.submit(&ranks(&[("alice", 2), ("bob", 1)])).unwrap();
        assert!(session.undo().is_some());
        assert_eq!(session.rounds().len(), 1);
        assert!(session.undo().is_some());
        assert!(session.undo().is_none());
    }

    #[test]
    fn reset_keeps_the_roster() {
        let mut session = session();
        session.submit(&ranks(&[("alice", 1), ("bob", 2)])).unwrap();
        session.reset();
        assert_eq!(session.rounds().len(), 0);
        assert_eq!(session.roster().seats(), 2);
    }

    #[test]
    fn empty_history_settles_to_even() {
        let session = session();
        let settlement = session.settle();
        assert!(settlement.transfers.is_empty());
        assert!(settlement.balances.iter().all(|b| b.chips == 0));
        assert!(settlement.pairwise.iter().all(|p| p.net == 0));
        assert!(settlement.winner().is_none());
    }

    #[test]
    fn three_rounds_settle_with_two_transfers() {
        let mut session = Session::new(names(&["a", "b", "c"])).unwrap();
        // lands on balances a: +5, b: +5, c: -10
        session.submit(&ranks(&[("a", 2), ("b", 2), ("c", 5)])).unwrap();
        session.submit(&ranks(&[("a", 3), ("b", 2), ("c", 4)])).unwrap();
        session.submit(&ranks(&[("a", 2), ("b", 3), ("c", 3)])).unwrap();
        let settlement = session.settle();
        assert_eq!(settlement.balances[0].chips, 5);
        assert_eq!(settlement.balances[1].chips, 5);
        assert_eq!(settlement.balances[2].chips, -10);
        assert_eq!(settlement.transfers.len(), 2);
        assert_eq!(settlement.transfers[0].from, "c");
        assert_eq!(settlement.transfers[0].to, "a");
        assert_eq!(settlement.transfers[0].amount, 5);
        assert_eq!(settlement.transfers[1].from, "c");
        assert_eq!(settlement.transfers[1].to, "b");
        assert_eq!(settlement.transfers[1].amount, 5);
    }

    #[test]
    fn pairwise_report_orders_by_first_configured() {
        let mut session = Session::new(names(&["a", "b", "c"])).unwrap();
        session.submit(&ranks(&[("a", 3), ("b", 1), ("c", 5)])).unwrap();
        let settlement = session.settle();
        let pairs = settlement
            .pairwise
            .iter()
            .map(|p| (p.a.as_str(), p.b.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![("a", "b"), ("a", "c"), ("b", "c")]);
        // b won the round from first place: a pays 2 * 2, c pays 4 * 2
        assert_eq!(settlement.pairwise[0].net, 4);
        assert_eq!(settlement.pairwise[1].net, -2);
        assert_eq!(settlement.pairwise[2].net, -8);
    }
}
