//! The upgrade catalog: registration, lookup, and the purchase protocol.
//!
//! The [`UpgradeCatalog`] owns every [`Upgrade`] record for one game
//! session. Callers receive snapshots or shared references, never owned
//! mutable access -- all state transitions flow through [`purchase`] and
//! [`unlock`], which keep the one-directional locked-to-unlocked invariant.
//!
//! The catalog is generic over its currency source so tests can inject a
//! double in place of the real wallet.
//!
//! [`purchase`]: UpgradeCatalog::purchase
//! [`unlock`]: UpgradeCatalog::unlock

use hangar_types::{Upgrade, UpgradeId};
use hangar_wallet::{CurrencyService, Wallet};

use crate::ShopError;
use crate::config::ShopConfig;

// ---------------------------------------------------------------------------
// UpgradeCatalog
// ---------------------------------------------------------------------------

/// The ordered collection of upgrades for one game session.
///
/// Upgrades keep their insertion order and names are unique. The currency
/// source is injected at construction; [`purchase`] is the only path that
/// deducts credits for an upgrade.
///
/// [`purchase`]: UpgradeCatalog::purchase
#[derive(Debug)]
pub struct UpgradeCatalog<C> {
    /// The injected currency source consulted and charged by purchases.
    wallet: C,
    /// All upgrades, in registration order. Names are unique.
    upgrades: Vec<Upgrade>,
}

impl<C: CurrencyService> UpgradeCatalog<C> {
    /// Create an empty catalog backed by the given currency source.
    pub const fn new(wallet: C) -> Self {
        Self {
            wallet,
            upgrades: Vec::new(),
        }
    }

    /// Return the number of upgrades in the catalog.
    pub const fn len(&self) -> usize {
        self.upgrades.len()
    }

    /// Return whether the catalog has no upgrades.
    pub const fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    /// Return a shared reference to the injected currency source.
    pub const fn wallet(&self) -> &C {
        &self.wallet
    }

    /// Return a mutable reference to the injected currency source.
    ///
    /// The orchestrator uses this to grant session rewards through the same
    /// instance the purchases draw from.
    pub fn wallet_mut(&mut self) -> &mut C {
        &mut self.wallet
    }

    /// Register a new locked upgrade at the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::DuplicateName`] if an upgrade with this name is
    /// already registered. The catalog is unchanged on failure.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        cost: u64,
    ) -> Result<UpgradeId, ShopError> {
        let name = name.into();
        if self.upgrades.iter().any(|u| u.name == name) {
            return Err(ShopError::DuplicateName(name));
        }

        let upgrade = Upgrade::new(name, cost);
        let id = upgrade.id;
        self.upgrades.push(upgrade);
        Ok(id)
    }

    /// Return a snapshot of every upgrade, in registration order.
    ///
    /// Copy-out semantics: mutating the returned records does not affect
    /// catalog state.
    pub fn all_upgrades(&self) -> Vec<Upgrade> {
        self.upgrades.clone()
    }

    /// Look up an upgrade by name. Case-sensitive exact match.
    pub fn upgrade_by_name(&self, name: &str) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.name == name)
    }

    /// Purchase the named upgrade: validate, spend, unlock.
    ///
    /// Runs the purchase protocol in order and fails without any mutation
    /// at the first unsatisfied step. The spend happens before the unlock,
    /// so a refused deduction can never leave an unlocked-but-unpaid
    /// upgrade behind.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownUpgrade`] if no upgrade has this name,
    /// [`ShopError::AlreadyUnlocked`] on repeat purchase, or
    /// [`ShopError::InsufficientCredits`] if the currency source cannot
    /// cover the cost.
    pub fn purchase(&mut self, name: &str) -> Result<&Upgrade, ShopError> {
        let position = self
            .upgrades
            .iter()
            .position(|u| u.name == name)
            .ok_or_else(|| ShopError::UnknownUpgrade(String::from(name)))?;

        let Some(found) = self.upgrades.get(position) else {
            return Err(ShopError::Internal("resolved upgrade position out of range"));
        };
        let cost = found.cost;

        if found.unlocked {
            return Err(ShopError::AlreadyUnlocked(String::from(name)));
        }

        if !self.wallet.can_afford(cost) {
            return Err(ShopError::InsufficientCredits {
                upgrade: String::from(name),
                cost,
                available: self.wallet.credits(),
            });
        }

        // Spend, then unlock. The spend re-validates the balance itself; if
        // it refuses here the upgrade must stay locked.
        if !self.wallet.spend_credits(cost) {
            return Err(ShopError::InsufficientCredits {
                upgrade: String::from(name),
                cost,
                available: self.wallet.credits(),
            });
        }

        let Some(upgrade) = self.upgrades.get_mut(position) else {
            return Err(ShopError::Internal("resolved upgrade position out of range"));
        };
        upgrade.unlocked = true;
        tracing::debug!(name, cost, "upgrade purchased");
        Ok(&*upgrade)
    }

    /// Force-unlock the named upgrade with no currency interaction.
    ///
    /// The reward/administrative path. Idempotent: unlocking an already
    /// unlocked upgrade succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownUpgrade`] if no upgrade has this name.
    pub fn unlock(&mut self, name: &str) -> Result<&Upgrade, ShopError> {
        let upgrade = self
            .upgrades
            .iter_mut()
            .find(|u| u.name == name)
            .ok_or_else(|| ShopError::UnknownUpgrade(String::from(name)))?;

        upgrade.unlocked = true;
        Ok(&*upgrade)
    }
}

impl UpgradeCatalog<Wallet> {
    /// Build a catalog and wallet from a session configuration.
    ///
    /// The wallet starts at `starting_credits` and one locked upgrade is
    /// registered per configured definition, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::DuplicateName`] if the configuration declares
    /// two upgrades with the same name.
    pub fn from_config(config: &ShopConfig) -> Result<Self, ShopError> {
        let mut catalog = Self::new(Wallet::new(config.session.starting_credits));
        for def in &config.upgrades {
            catalog.register(def.name.clone(), def.cost)?;
        }
        Ok(catalog)
    }
}
