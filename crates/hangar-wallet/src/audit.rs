//! Audit verification for the wallet entry log.
//!
//! The audit check replays the append-only log from the wallet's initial
//! balance and confirms two things for every entry:
//!
//! 1. Applying the entry's movement to the running balance never overflows
//!    or underflows.
//! 2. The running balance matches the `balance_after` the entry recorded.
//!
//! Finally, the replayed total must equal the live balance. The wallet
//! maintains all of this by construction; the check exists as
//! defense-in-depth against state corruption or future bugs. A violation
//! produces a [`WalletAnomaly`] -- the wallet's most critical integrity
//! alert.

use hangar_types::{CreditEntry, CreditEntryKind};

use crate::WalletAnomaly;

/// The result of an audit check over a wallet's entry log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditResult {
    /// The log replays cleanly to the live balance.
    Balanced,
    /// The log and the live balance disagree.
    Anomaly(WalletAnomaly),
}

/// Apply one entry's movement to a running balance.
///
/// Returns `None` if the movement overflows or underflows.
const fn apply(running: u64, entry: &CreditEntry) -> Option<u64> {
    match entry.kind {
        CreditEntryKind::Grant => running.checked_add(entry.amount),
        CreditEntryKind::Spend => running.checked_sub(entry.amount),
    }
}

/// Replay `entries` from `initial` and verify the result equals `balance`.
///
/// Returns [`AuditResult::Balanced`] if every entry applies cleanly, every
/// recorded `balance_after` matches the replay, and the final total equals
/// the live balance. Otherwise returns [`AuditResult::Anomaly`] describing
/// the first divergence found.
pub fn verify_audit(initial: u64, entries: &[CreditEntry], balance: u64) -> AuditResult {
    let mut running = initial;

    for (index, entry) in entries.iter().enumerate() {
        let Some(next) = apply(running, entry) else {
            return AuditResult::Anomaly(WalletAnomaly {
                entry_index: Some(index),
                expected: running,
                actual: entry.balance_after,
                message: format!(
                    "entry {index} ({:?} of {}) over/underflows the running balance {running}",
                    entry.kind, entry.amount
                ),
            });
        };

        if next != entry.balance_after {
            return AuditResult::Anomaly(WalletAnomaly {
                entry_index: Some(index),
                expected: next,
                actual: entry.balance_after,
                message: format!(
                    "entry {index} recorded balance_after {} but replay expected {next}",
                    entry.balance_after
                ),
            });
        }

        running = next;
    }

    if running == balance {
        AuditResult::Balanced
    } else {
        AuditResult::Anomaly(WalletAnomaly {
            entry_index: None,
            expected: running,
            actual: balance,
            message: format!("log replays to {running} but the live balance is {balance}"),
        })
    }
}
