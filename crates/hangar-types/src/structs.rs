//! Core entity structs for the Hangar upgrade shop.
//!
//! Covers the [`Upgrade`] record owned by the catalog and the
//! [`CreditEntry`] record appended to the wallet log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::CreditEntryKind;
use crate::ids::{EntryId, UpgradeId};

// ---------------------------------------------------------------------------
// Upgrade
// ---------------------------------------------------------------------------

/// A purchasable upgrade tracked by the catalog.
///
/// Upgrades have exactly two states -- locked and unlocked -- and the
/// transition is one-directional: once `unlocked` is true it never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    /// Unique upgrade identifier.
    pub id: UpgradeId,
    /// Display name, unique within the catalog. Lookup is case-sensitive.
    pub name: String,
    /// Purchase price in credits.
    pub cost: u64,
    /// Whether a purchase or force-unlock has occurred.
    pub unlocked: bool,
}

impl Upgrade {
    /// Create a new locked upgrade with a fresh identifier.
    pub fn new(name: impl Into<String>, cost: u64) -> Self {
        Self {
            id: UpgradeId::new(),
            name: name.into(),
            cost,
            unlocked: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Credit entry
// ---------------------------------------------------------------------------

/// One record in the wallet's append-only log.
///
/// Entries are never modified or deleted. Replaying the log from the
/// wallet's initial balance reproduces the current balance; `balance_after`
/// captures the running total at the time the entry was recorded so the
/// replay can pinpoint where a divergence began.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    /// Unique entry identifier.
    pub id: EntryId,
    /// Whether the balance went up or down.
    pub kind: CreditEntryKind,
    /// Quantity of credits moved (may be zero).
    pub amount: u64,
    /// Balance immediately after this entry was applied.
    pub balance_after: u64,
    /// Reason for the movement (e.g. `"GRANT"`, `"SPEND"`).
    pub reason: String,
    /// Real-world timestamp.
    pub recorded_at: DateTime<Utc>,
}
