//! End-to-end purchase flow: configuration in, purchases and audits out.
//!
//! Exercises the public surface the way the host game would -- build the
//! session from YAML, drive it through the service traits, and check the
//! wallet log still reconciles afterwards.

use hangar_shop::{ShopConfig, ShopError, UpgradeCatalog, UpgradeService};
use hangar_wallet::{AuditResult, CurrencyService, Wallet};

const SESSION_YAML: &str = r#"
session:
  name: "integration"
  starting_credits: 100

upgrades:
  - name: "Speed"
    cost: 60
  - name: "Armor"
    cost: 80
"#;

fn session() -> UpgradeCatalog<Wallet> {
    let config = ShopConfig::parse(SESSION_YAML).unwrap_or_default();
    UpgradeCatalog::from_config(&config).unwrap_or_else(|_| UpgradeCatalog::new(Wallet::new(0)))
}

#[test]
fn config_seeds_wallet_and_catalog() {
    let catalog = session();
    assert_eq!(catalog.wallet().credits(), 100);
    assert_eq!(catalog.len(), 2);

    let names: Vec<String> = catalog
        .all_upgrades()
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec![String::from("Speed"), String::from("Armor")]);
}

#[test]
fn affordable_purchase_unlocks_once() {
    let mut catalog = session();

    // balance 100, cost 60: succeeds, balance 40, unlocked.
    assert!(catalog.purchase("Speed").is_ok());
    assert_eq!(catalog.wallet().credits(), 40);
    assert_eq!(
        catalog.upgrade_by_name("Speed").map(|u| u.unlocked),
        Some(true)
    );

    // Second purchase of the same upgrade: fails, balance stays 40.
    assert!(matches!(
        catalog.purchase("Speed"),
        Err(ShopError::AlreadyUnlocked(_))
    ));
    assert_eq!(catalog.wallet().credits(), 40);
}

#[test]
fn unaffordable_purchase_changes_nothing() {
    let config = ShopConfig::parse(
        r#"
session:
  starting_credits: 10
upgrades:
  - name: "Cannon"
    cost: 50
"#,
    )
    .unwrap_or_default();
    let catalog = UpgradeCatalog::from_config(&config);
    assert!(catalog.is_ok());

    if let Ok(mut catalog) = catalog {
        assert!(matches!(
            catalog.purchase("Cannon"),
            Err(ShopError::InsufficientCredits { .. })
        ));
        assert_eq!(catalog.wallet().credits(), 10);
        assert_eq!(
            catalog.upgrade_by_name("Cannon").map(|u| u.unlocked),
            Some(false)
        );
    }
}

#[test]
fn duplicate_config_names_rejected() {
    let config = ShopConfig::parse(
        r#"
upgrades:
  - name: "Speed"
    cost: 10
  - name: "Speed"
    cost: 20
"#,
    )
    .unwrap_or_default();
    let result = UpgradeCatalog::from_config(&config);
    assert!(matches!(result, Err(ShopError::DuplicateName(n)) if n == "Speed"));
}

#[test]
fn full_session_reconciles() {
    let mut catalog = session();

    let _ = catalog.purchase("Speed"); // 100 -> 40
    let _ = catalog.purchase("Armor"); // rejected, 40 < 80
    catalog.wallet_mut().add_credits(50); // 40 -> 90
    let _ = catalog.purchase("Armor"); // 90 -> 10
    let _ = catalog.unlock("Speed"); // no currency interaction

    assert_eq!(catalog.wallet().credits(), 10);
    assert_eq!(catalog.wallet().verify_audit(), AuditResult::Balanced);

    // The seed balance is part of construction, not a log entry, so the
    // log holds two spends and one grant. The rejected purchase left
    // no trace.
    assert_eq!(catalog.wallet().len(), 3);
}

#[test]
fn orchestrator_flow_through_service_traits() {
    let mut catalog = session();

    // The presentation layer checks affordability first, then purchases.
    let listed = catalog.all_upgrades();
    let speed = listed.iter().find(|u| u.name == "Speed").cloned();
    assert!(speed.is_some());

    if let Some(speed) = speed {
        assert!(catalog.wallet().can_afford(speed.cost));
        assert!(catalog.purchase_upgrade(&speed));
        assert_eq!(catalog.wallet().credits(), 40);
    }
}

// ---------------------------------------------------------------------------
// Injection seam
// ---------------------------------------------------------------------------

/// A currency double that reports affordability but refuses every spend.
///
/// Models a source whose balance moves between the affordability check and
/// the deduction. The purchase protocol must leave the upgrade locked.
struct RefusingCurrency {
    balance: u64,
    spend_attempts: usize,
}

impl CurrencyService for RefusingCurrency {
    fn credits(&self) -> u64 {
        self.balance
    }

    fn can_afford(&self, _cost: u64) -> bool {
        true
    }

    fn spend_credits(&mut self, _amount: u64) -> bool {
        self.spend_attempts = self.spend_attempts.saturating_add(1);
        false
    }

    fn add_credits(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }
}

#[test]
fn refused_spend_never_unlocks() {
    let double = RefusingCurrency {
        balance: 1_000,
        spend_attempts: 0,
    };
    let mut catalog = UpgradeCatalog::new(double);
    let _ = catalog.register("Speed", 60);

    let result = catalog.purchase("Speed");
    assert!(matches!(result, Err(ShopError::InsufficientCredits { .. })));

    // The spend was attempted exactly once and the upgrade stayed locked.
    assert_eq!(catalog.wallet().spend_attempts, 1);
    assert_eq!(
        catalog.upgrade_by_name("Speed").map(|u| u.unlocked),
        Some(false)
    );
}
