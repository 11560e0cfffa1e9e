use colored::Colorize;

use crate::ledger::ledger::Ledger;
use crate::ledger::transfer::Transfer;
use crate::table::roster::Roster;
use crate::Chips;
use crate::Position;

/// Net owed for one unordered pair, first-configured seat first.
/// Positive means `a` pays `b`; negative means `b` pays `a`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pairwise {
    pub a: String,
    pub b: String,
    pub net: Chips,
}

impl std::fmt::Display for Pairwise {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.net {
            n if n > 0 => write!(f, "{} pays {} {:>6}", self.a.red(), self.b.green(), n),
            n if n < 0 => write!(f, "{} pays {} {:>6}", self.b.red(), self.a.green(), -n),
            _ => write!(f, "{} and {} are square", self.a, self.b),
        }
    }
}

/// A player's cumulative net across all recorded rounds.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Balance {
    pub name: String,
    pub chips: Chips,
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let chips = match self.chips {
            c if c > 0 => format!("{:+}", c).green(),
            c if c < 0 => format!("{:+}", c).red(),
            _ => "even".normal(),
        };
        write!(f, "{:<10}{}", self.name, chips)
    }
}

/// The full settlement report: pairwise detail before netting collapses it,
/// per-seat totals, and the minimized transfer plan. Everything is resolved
/// to display names and ordered by the roster's stable order, so two runs
/// over the same history render identically.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Settlement {
    pub pairwise: Vec<Pairwise>,
    pub balances: Vec<Balance>,
    pub transfers: Vec<Transfer>,
}

impl From<(&Roster, &Ledger, Vec<(Position, Position, Chips)>)> for Settlement {
    fn from(
        (roster, ledger, sweep): (&Roster, &Ledger, Vec<(Position, Position, Chips)>),
    ) -> Self {
        Self {
            pairwise: roster
                .pairs()
                .map(|(a, b)| Pairwise {
                    a: roster.name(a).to_string(),
                    b: roster.name(b).to_string(),
                    net: ledger.net(a, b),
                })
                .collect(),
            balances: roster
                .names()
                .iter()
                .enumerate()
                .map(|(seat, name)| Balance {
                    name: name.clone(),
                    chips: ledger.balance(seat),
                })
                .collect(),
            transfers: sweep
                .into_iter()
                .map(|(from, to, amount)| Transfer {
                    from: roster.name(from).to_string(),
                    to: roster.name(to).to_string(),
                    amount,
                })
                .collect(),
        }
    }
}

impl Settlement {
    /// The largest net winner, earliest-configured on ties.
    /// None when nobody finished up.
    pub fn winner(&self) -> Option<&Balance> {
        self.balances
            .iter()
            .rev()
            .max_by_key(|balance| balance.chips)
            .filter(|balance| balance.chips > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(name: &str, chips: Chips) -> Balance {
        Balance {
            name: name.to_string(),
            chips,
        }
    }

    #[test]
    fn winner_breaks_ties_by_seat_order() {
        let settlement = Settlement {
            pairwise: vec![],
            balances: vec![balance("a", -6), balance("b", 3), balance("c", 3)],
            transfers: vec![],
        };
        assert_eq!(settlement.winner().unwrap().name, "b");
    }

    #[test]
    fn even_table_has_no_winner() {
        let settlement = Settlement {
            pairwise: vec![],
            balances: vec![balance("a", 0), balance("b", 0)],
            transfers: vec![],
        };
        assert!(settlement.winner().is_none());
    }
}
