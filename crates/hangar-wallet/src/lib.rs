//! Credit wallet for the Hangar upgrade shop.
//!
//! The wallet owns a single unsigned credit balance and an append-only log
//! of every movement. Spends that the balance cannot cover fail without
//! mutating anything; the balance can never underflow.
//!
//! # Architecture
//!
//! - [`wallet`] -- The [`Wallet`] struct: balance, entry log, grant/spend.
//! - [`audit`] -- Log replay verification and anomaly detection.
//! - [`service`] -- The [`CurrencyService`] contract consumed by callers
//!   that must not depend on the concrete wallet.
//!
//! # Invariants
//!
//! 1. The balance never underflows: a spend either succeeds in full or
//!    leaves the wallet untouched.
//! 2. All arithmetic is checked. A grant that would overflow `u64` fails
//!    rather than wrapping.
//! 3. The entry log is append-only: replaying it from the initial balance
//!    always reproduces the current balance.
//!
//! # Usage
//!
//! ```
//! use hangar_wallet::{AuditResult, Wallet};
//!
//! let mut wallet = Wallet::new(100);
//! assert!(wallet.can_afford(60));
//!
//! // Spend 60 credits.
//! wallet.spend(60).ok();
//! assert_eq!(wallet.credits(), 40);
//!
//! // A spend the balance cannot cover fails and changes nothing.
//! assert!(wallet.spend(50).is_err());
//! assert_eq!(wallet.credits(), 40);
//!
//! // The log replays cleanly.
//! assert_eq!(wallet.verify_audit(), AuditResult::Balanced);
//! ```

pub mod audit;
pub mod service;
pub mod wallet;

// Re-export primary types at crate root.
pub use audit::{AuditResult, verify_audit};
pub use service::CurrencyService;
pub use wallet::Wallet;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when mutating the wallet.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Attempted to spend more credits than the wallet holds.
    #[error("insufficient credits: wanted {requested} but only have {available}")]
    InsufficientCredits {
        /// The amount the caller attempted to spend.
        requested: u64,
        /// The current balance.
        available: u64,
    },

    /// A grant would push the balance past `u64::MAX`.
    #[error("balance overflow: adding {amount} to {balance} exceeds the representable range")]
    BalanceOverflow {
        /// The current balance.
        balance: u64,
        /// The amount the caller attempted to add.
        amount: u64,
    },

    /// An internal error that should not occur in normal operation.
    #[error("internal wallet error: {0}")]
    InternalError(&'static str),
}

// ---------------------------------------------------------------------------
// Anomaly type
// ---------------------------------------------------------------------------

/// A log replay divergence detected during audit verification.
///
/// Replay divergence means the entry log and the live balance no longer
/// agree -- the wallet's most critical integrity alert. It cannot be
/// produced through the public API; the check exists as defense-in-depth
/// against state corruption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAnomaly {
    /// Index of the entry at which replay diverged, or `None` if the log
    /// replayed cleanly but the final balance did not match.
    pub entry_index: Option<usize>,
    /// The balance the replay expected at the divergence point.
    pub expected: u64,
    /// The balance actually recorded (or held) at the divergence point.
    pub actual: u64,
    /// Human-readable description of the anomaly.
    pub message: String,
}

impl core::fmt::Display for WalletAnomaly {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message)
    }
}
