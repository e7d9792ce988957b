//! The upgrade contract consumed by the host's presentation layer.
//!
//! Mirrors the capability set the orchestrator needs -- list, purchase,
//! force-unlock, lookup -- without exposing the catalog's internals or its
//! currency wiring. Failure is communicated through boolean results and
//! `None` markers; callers that need typed errors use
//! [`UpgradeCatalog`] directly.

use hangar_types::Upgrade;
use hangar_wallet::CurrencyService;

use crate::UpgradeCatalog;

/// The capability set an upgrade source must provide.
///
/// All operations are total. Records are exchanged by value: the snapshot
/// and lookup results are copies, and purchase/unlock requests are resolved
/// by name against the authoritative catalog state.
pub trait UpgradeService {
    /// Return a snapshot of every known upgrade, in catalog order.
    fn all_upgrades(&self) -> Vec<Upgrade>;

    /// Purchase the given upgrade.
    ///
    /// Returns `true` iff the upgrade was locked, affordable, and the spend
    /// succeeded. On `false` neither the balance nor the upgrade changed.
    fn purchase_upgrade(&mut self, upgrade: &Upgrade) -> bool;

    /// Force-unlock the given upgrade with no currency interaction.
    ///
    /// Idempotent; unknown upgrades are ignored.
    fn unlock_upgrade(&mut self, upgrade: &Upgrade);

    /// Look up an upgrade by name. Returns `None` if no such upgrade
    /// exists. Case-sensitive exact match.
    fn upgrade_by_name(&self, name: &str) -> Option<Upgrade>;
}

impl<C: CurrencyService> UpgradeService for UpgradeCatalog<C> {
    fn all_upgrades(&self) -> Vec<Upgrade> {
        Self::all_upgrades(self)
    }

    fn purchase_upgrade(&mut self, upgrade: &Upgrade) -> bool {
        // Requests resolve by name: the caller's record is a snapshot and
        // may be stale; the catalog copy is authoritative.
        self.purchase(&upgrade.name).is_ok()
    }

    fn unlock_upgrade(&mut self, upgrade: &Upgrade) {
        let _ = self.unlock(&upgrade.name);
    }

    fn upgrade_by_name(&self, name: &str) -> Option<Upgrade> {
        Self::upgrade_by_name(self, name).cloned()
    }
}
