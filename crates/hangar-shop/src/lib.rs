//! Upgrade catalog and purchase protocol for the Hangar upgrade shop.
//!
//! The catalog owns the ordered collection of
//! [`Upgrade`](hangar_types::Upgrade) records and their
//! locked/unlocked state. It is constructed with a currency source (any
//! [`CurrencyService`](hangar_wallet::CurrencyService) implementation) and
//! coordinates the spend itself during a purchase -- callers never deduct
//! credits for an upgrade directly.
//!
//! # Architecture
//!
//! - [`catalog`] -- The [`UpgradeCatalog`]: registration, lookup, purchase,
//!   force-unlock.
//! - [`config`] -- Typed YAML configuration and the catalog's seed data.
//! - [`service`] -- The [`UpgradeService`] contract consumed by the host's
//!   presentation layer.
//!
//! # Purchase Protocol
//!
//! A purchase runs these steps in order, failing without mutation at the
//! first unsatisfied one:
//!
//! 1. Resolve the upgrade by name.
//! 2. Reject if already unlocked (no double-spend on repeat purchase).
//! 3. Reject if the currency source cannot afford the cost.
//! 4. Spend, then unlock -- never unlock-then-spend. If the spend fails at
//!    this point the upgrade stays locked.
//!
//! Once unlocked, an upgrade never reverts to locked.
//!
//! # Usage
//!
//! ```
//! use hangar_shop::UpgradeCatalog;
//! use hangar_wallet::Wallet;
//!
//! let mut shop = UpgradeCatalog::new(Wallet::new(100));
//! shop.register("Speed", 60).ok();
//!
//! // First purchase succeeds and deducts the cost.
//! assert!(shop.purchase("Speed").is_ok());
//! assert_eq!(shop.wallet().credits(), 40);
//!
//! // A repeat purchase is rejected and the balance is untouched.
//! assert!(shop.purchase("Speed").is_err());
//! assert_eq!(shop.wallet().credits(), 40);
//! ```

pub mod catalog;
pub mod config;
pub mod service;

// Re-export primary types at crate root.
pub use catalog::UpgradeCatalog;
pub use config::{ConfigError, SessionConfig, ShopConfig, UpgradeDef};
pub use service::UpgradeService;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when operating the catalog.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// No upgrade with the given name exists in the catalog.
    #[error("unknown upgrade: {0}")]
    UnknownUpgrade(String),

    /// The upgrade has already been unlocked; purchases are one-shot.
    #[error("upgrade already unlocked: {0}")]
    AlreadyUnlocked(String),

    /// The currency source cannot cover the upgrade's cost.
    #[error("insufficient credits for {upgrade}: costs {cost} but only {available} available")]
    InsufficientCredits {
        /// Name of the upgrade being purchased.
        upgrade: String,
        /// The upgrade's cost.
        cost: u64,
        /// The balance at the time of the attempt.
        available: u64,
    },

    /// An upgrade with this name is already registered.
    #[error("duplicate upgrade name: {0}")]
    DuplicateName(String),

    /// An internal error that should not occur in normal operation.
    #[error("internal catalog error: {0}")]
    Internal(&'static str),
}
