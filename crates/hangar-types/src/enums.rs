//! Enumeration types for the Hangar upgrade shop.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Credit entry kind
// ---------------------------------------------------------------------------

/// The direction of a wallet log entry.
///
/// Every balance mutation is recorded as exactly one entry of one of these
/// kinds. There is no entry kind that leaves the balance unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditEntryKind {
    /// Credits added to the balance (reward, refund, session seed).
    Grant,
    /// Credits deducted from the balance (purchase).
    Spend,
}
