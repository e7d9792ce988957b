//! The currency contract consumed by components that must not depend on
//! the concrete [`Wallet`].
//!
//! The shop's purchase protocol needs exactly four capabilities: query the
//! balance, check affordability, spend, and add. [`CurrencyService`]
//! captures that capability set so the catalog can be exercised against a
//! test double as easily as against a real wallet.
//!
//! Failure is communicated through boolean results -- a `false` from
//! [`spend_credits`] means the balance was not touched. Callers that need
//! typed errors or the entry log use the [`Wallet`] API directly.
//!
//! [`spend_credits`]: CurrencyService::spend_credits

use crate::Wallet;

/// The capability set a currency source must provide.
///
/// All operations are total: invalid requests yield `false` or a no-op,
/// never a panic. Implementations must guarantee that a failed spend
/// leaves the balance unchanged.
pub trait CurrencyService {
    /// Return the current balance.
    fn credits(&self) -> u64;

    /// Return whether the balance covers `cost`. Pure query.
    fn can_afford(&self, cost: u64) -> bool;

    /// Deduct `amount` from the balance.
    ///
    /// Returns `true` iff `amount` was affordable at call time. On `false`
    /// the balance is unchanged -- no partial deduction.
    fn spend_credits(&mut self, amount: u64) -> bool;

    /// Add `amount` to the balance.
    ///
    /// An addition that cannot be represented is a no-op, preserving the
    /// balance rather than wrapping.
    fn add_credits(&mut self, amount: u64);
}

impl CurrencyService for Wallet {
    fn credits(&self) -> u64 {
        Self::credits(self)
    }

    fn can_afford(&self, cost: u64) -> bool {
        Self::can_afford(self, cost)
    }

    fn spend_credits(&mut self, amount: u64) -> bool {
        self.spend(amount).is_ok()
    }

    fn add_credits(&mut self, amount: u64) {
        // Overflow is rejected by `grant`; the contract makes it a no-op.
        let _ = self.grant(amount);
    }
}
