//! The credit wallet: a single balance plus an append-only movement log.
//!
//! The [`Wallet`] struct is the in-memory currency state for one game
//! session. Every successful grant or spend appends one [`CreditEntry`];
//! entries are never modified or deleted.
//!
//! # Design
//!
//! - **Checked arithmetic**: no silent overflow or underflow, ever.
//! - **Fail without mutation**: a rejected operation leaves both the
//!   balance and the log exactly as they were.
//! - **Append-only**: the log is the full history of the session.

use chrono::Utc;

use hangar_types::{CreditEntry, CreditEntryKind, EntryId};

use crate::WalletError;
use crate::audit::{self, AuditResult};

/// Reason recorded on grant entries.
pub const REASON_GRANT: &str = "GRANT";

/// Reason recorded on spend entries.
pub const REASON_SPEND: &str = "SPEND";

// ---------------------------------------------------------------------------
// Wallet
// ---------------------------------------------------------------------------

/// The credit wallet for one game session.
///
/// Created once at session start with an initial balance and destroyed with
/// the owning session. Single-threaded by design: the balance is mutated
/// only through [`grant`] and [`spend`], and correctness relies on
/// single-writer access rather than locking.
///
/// [`grant`]: Wallet::grant
/// [`spend`]: Wallet::spend
#[derive(Debug, Clone, Default)]
pub struct Wallet {
    /// The balance the session started with; the audit replay anchor.
    initial_balance: u64,
    /// Current balance.
    balance: u64,
    /// All entries, in insertion order.
    entries: Vec<CreditEntry>,
}

impl Wallet {
    /// Create a new wallet holding `initial` credits.
    pub const fn new(initial: u64) -> Self {
        Self {
            initial_balance: initial,
            balance: initial,
            entries: Vec::new(),
        }
    }

    /// Return the current balance.
    pub const fn credits(&self) -> u64 {
        self.balance
    }

    /// Return the balance the wallet was created with.
    pub const fn initial_credits(&self) -> u64 {
        self.initial_balance
    }

    /// Return whether the balance covers `cost`.
    ///
    /// Pure query, no side effect.
    pub const fn can_afford(&self, cost: u64) -> bool {
        self.balance >= cost
    }

    /// Add `amount` credits to the balance and append a `Grant` entry.
    ///
    /// Zero-amount grants succeed and are recorded.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::BalanceOverflow`] if the addition would
    /// exceed `u64::MAX`. The balance and log are unchanged on failure.
    pub fn grant(&mut self, amount: u64) -> Result<&CreditEntry, WalletError> {
        let new_balance =
            self.balance
                .checked_add(amount)
                .ok_or(WalletError::BalanceOverflow {
                    balance: self.balance,
                    amount,
                })?;

        self.balance = new_balance;
        self.record(CreditEntryKind::Grant, amount, REASON_GRANT)
    }

    /// Deduct `amount` credits from the balance and append a `Spend` entry.
    ///
    /// Zero-amount spends succeed and are recorded.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::InsufficientCredits`] if the balance does not
    /// cover `amount`. The balance and log are unchanged on failure.
    pub fn spend(&mut self, amount: u64) -> Result<&CreditEntry, WalletError> {
        let new_balance =
            self.balance
                .checked_sub(amount)
                .ok_or(WalletError::InsufficientCredits {
                    requested: amount,
                    available: self.balance,
                })?;

        self.balance = new_balance;
        tracing::debug!(amount, balance = new_balance, "credits spent");
        self.record(CreditEntryKind::Spend, amount, REASON_SPEND)
    }

    /// Append an entry reflecting the already-applied balance change.
    fn record(
        &mut self,
        kind: CreditEntryKind,
        amount: u64,
        reason: &str,
    ) -> Result<&CreditEntry, WalletError> {
        self.entries.push(CreditEntry {
            id: EntryId::new(),
            kind,
            amount,
            balance_after: self.balance,
            reason: String::from(reason),
            recorded_at: Utc::now(),
        });

        // Return a reference to the entry we just pushed.
        self.entries
            .last()
            .ok_or(WalletError::InternalError("failed to retrieve entry after append"))
    }

    /// Return the number of entries in the log.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the log has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return all entries, in insertion order.
    pub fn entries(&self) -> &[CreditEntry] {
        &self.entries
    }

    /// Replay the entry log and check it reproduces the current balance.
    ///
    /// Returns [`AuditResult::Balanced`] if the log reconciles, or
    /// [`AuditResult::Anomaly`] with details about the divergence.
    pub fn verify_audit(&self) -> AuditResult {
        audit::verify_audit(self.initial_balance, &self.entries, self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wallet_holds_initial_balance() {
        let wallet = Wallet::new(100);
        assert_eq!(wallet.credits(), 100);
        assert_eq!(wallet.initial_credits(), 100);
        assert!(wallet.is_empty());
        assert_eq!(wallet.len(), 0);
    }

    #[test]
    fn can_afford_boundaries() {
        let wallet = Wallet::new(100);
        assert!(wallet.can_afford(0));
        assert!(wallet.can_afford(99));
        assert!(wallet.can_afford(100));
        assert!(!wallet.can_afford(101));
    }

    #[test]
    fn can_afford_is_pure() {
        let wallet = Wallet::new(100);
        for _ in 0..10 {
            let _ = wallet.can_afford(50);
        }
        assert_eq!(wallet.credits(), 100);
        assert!(wallet.is_empty());
    }

    #[test]
    fn grant_increases_balance_and_records() {
        let mut wallet = Wallet::new(100);
        let result = wallet.grant(50);
        assert!(result.is_ok());
        assert_eq!(wallet.credits(), 150);
        assert_eq!(wallet.len(), 1);

        let entry = wallet.entries().first();
        assert!(entry.is_some());
        if let Some(e) = entry {
            assert_eq!(e.kind, hangar_types::CreditEntryKind::Grant);
            assert_eq!(e.amount, 50);
            assert_eq!(e.balance_after, 150);
            assert_eq!(e.reason, REASON_GRANT);
        }
    }

    #[test]
    fn spend_decreases_balance_and_records() {
        let mut wallet = Wallet::new(100);
        let result = wallet.spend(60);
        assert!(result.is_ok());
        assert_eq!(wallet.credits(), 40);

        let entry = wallet.entries().first();
        assert!(entry.is_some());
        if let Some(e) = entry {
            assert_eq!(e.kind, hangar_types::CreditEntryKind::Spend);
            assert_eq!(e.amount, 60);
            assert_eq!(e.balance_after, 40);
            assert_eq!(e.reason, REASON_SPEND);
        }
    }

    #[test]
    fn spend_exact_balance() {
        let mut wallet = Wallet::new(100);
        assert!(wallet.spend(100).is_ok());
        assert_eq!(wallet.credits(), 0);
    }

    #[test]
    fn overspend_rejected_without_mutation() {
        let mut wallet = Wallet::new(10);
        let result = wallet.spend(50);
        assert!(matches!(
            result,
            Err(WalletError::InsufficientCredits {
                requested: 50,
                available: 10,
            })
        ));
        assert_eq!(wallet.credits(), 10);
        assert!(wallet.is_empty());
    }

    #[test]
    fn spend_from_empty_wallet_rejected() {
        let mut wallet = Wallet::new(0);
        assert!(wallet.spend(1).is_err());
        assert_eq!(wallet.credits(), 0);
    }

    #[test]
    fn zero_amount_operations_succeed() {
        let mut wallet = Wallet::new(0);
        assert!(wallet.grant(0).is_ok());
        assert!(wallet.spend(0).is_ok());
        assert_eq!(wallet.credits(), 0);
        assert_eq!(wallet.len(), 2);
    }

    #[test]
    fn grant_overflow_rejected_without_mutation() {
        let mut wallet = Wallet::new(u64::MAX);
        let result = wallet.grant(1);
        assert!(matches!(result, Err(WalletError::BalanceOverflow { .. })));
        assert_eq!(wallet.credits(), u64::MAX);
        assert!(wallet.is_empty());
    }

    #[test]
    fn balance_never_underflows_across_sequences() {
        let mut wallet = Wallet::new(30);
        let _ = wallet.spend(10);
        let _ = wallet.spend(25); // rejected: only 20 left
        let _ = wallet.grant(5);
        let _ = wallet.spend(25); // succeeds: exactly 25 left
        let _ = wallet.spend(1); // rejected: empty
        assert_eq!(wallet.credits(), 0);
        assert_eq!(wallet.verify_audit(), AuditResult::Balanced);
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let mut wallet = Wallet::new(100);
        let _ = wallet.spend(10);
        let _ = wallet.grant(5);
        let _ = wallet.spend(20);

        let balances: Vec<u64> = wallet.entries().iter().map(|e| e.balance_after).collect();
        assert_eq!(balances, vec![90, 95, 75]);
    }
}
