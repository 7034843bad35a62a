//! Player currency balance and affordability rules.

use serde::{Deserialize, Serialize};

use crate::config::STARTING_BALANCE;

/// The player's spendable currency balance for one level.
///
/// All mutation goes through [`credit`](Self::credit) and
/// [`debit`](Self::debit); both refuse malformed amounts, so the
/// balance can never go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    balance: i32,
}

impl Economy {
    /// Economy with the fixed per-level starting balance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            balance: STARTING_BALANCE,
        }
    }

    /// Current balance.
    #[must_use]
    pub const fn balance(&self) -> i32 {
        self.balance
    }

    /// Whether a cost could be paid right now.
    ///
    /// Negative costs are never affordable; they are malformed.
    #[must_use]
    pub const fn can_afford(&self, cost: i32) -> bool {
        cost >= 0 && self.balance >= cost
    }

    /// Add currency. Negative amounts are rejected and leave the
    /// balance unchanged. Returns whether the credit was applied.
    pub fn credit(&mut self, amount: i32) -> bool {
        if amount < 0 {
            return false;
        }
        self.balance += amount;
        true
    }

    /// Spend currency if affordable. Returns whether the debit was
    /// applied; on failure the balance is unchanged.
    ///
    /// Callers should check [`can_afford`](Self::can_afford) first and
    /// treat a `false` here as a rejected request, not an error.
    pub fn debit(&mut self, cost: i32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.balance -= cost;
        true
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_session_balance() {
        assert_eq!(Economy::new().balance(), 150);
    }

    #[test]
    fn debit_refuses_overdraft() {
        let mut eco = Economy::new();
        assert!(!eco.debit(151));
        assert_eq!(eco.balance(), 150);
        assert!(eco.debit(150));
        assert_eq!(eco.balance(), 0);
        assert!(!eco.debit(1));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut eco = Economy::new();
        assert!(!eco.credit(-25));
        assert!(!eco.debit(-25));
        assert!(!eco.can_afford(-1));
        assert_eq!(eco.balance(), 150);
    }

    #[test]
    fn credit_then_debit_sequence() {
        let mut eco = Economy::new();
        assert!(eco.credit(25));
        assert!(eco.debit(100));
        assert_eq!(eco.balance(), 75);
    }
}
