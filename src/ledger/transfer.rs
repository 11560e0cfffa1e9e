use colored::Colorize;

use crate::Chips;

/// One point-to-point payment in the minimized plan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Chips,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} pays {} {:>6}",
            self.from.red(),
            self.to.green(),
            self.amount
        )
    }
}
