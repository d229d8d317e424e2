use minibank::account::AccountKind;
use minibank::bank::BankSystem;
use minibank::error::BankError;
use rust_decimal_macros::dec;

#[test]
fn test_multi_account_lifecycle() {
    let mut bank = BankSystem::new();
    bank.create_account("payroll", "Carol", dec!(3000.0)).unwrap();
    bank.create_account("debit", "Alice", dec!(200.0)).unwrap();
    bank.create_account("credit", "Bob", dec!(0.0)).unwrap();

    // Payroll only pays out
    assert!(bank.account("ACC0001").is_some());
    assert!(matches!(
        bank.transfer_funds("ACC0001", "ACC0002", dec!(100.0)),
        Err(BankError::UnsupportedOperation(_))
    ));

    // Alice funds Bob's credit account; the credit lands on `balance`
    assert!(bank.transfer_funds("ACC0002", "ACC0003", dec!(50.0)).unwrap());
    assert_eq!(bank.account("ACC0002").unwrap().balance, dec!(150.0));
    assert_eq!(bank.account("ACC0003").unwrap().balance, dec!(50.0));

    // Two billing periods: Alice compounds and stays active
    bank.monthly_update();
    bank.monthly_update();
    assert_eq!(bank.account("ACC0002").unwrap().balance, dec!(153.015));
    assert!(bank.account("ACC0002").unwrap().is_active());

    assert_eq!(
        bank.get_balance_report("ACC0001"),
        "Balance for Carol's PayrollAccount: 3000.0"
    );
}

#[test]
fn test_deactivated_account_blocks_transfers_both_ways() {
    let mut bank = BankSystem::new();
    bank.create_account("debit", "Alice", dec!(500.0)).unwrap();
    bank.create_account("debit", "Dave", dec!(500.0)).unwrap();

    bank.deactivate_account("ACC0001");
    assert!(!bank.transfer_funds("ACC0001", "ACC0002", dec!(10.0)).unwrap());
    assert_eq!(bank.account("ACC0001").unwrap().balance, dec!(500.0));
    assert_eq!(bank.account("ACC0002").unwrap().balance, dec!(500.0));

    // An inactive target still receives: only the source's checks run
    assert!(bank.transfer_funds("ACC0002", "ACC0001", dec!(10.0)).unwrap());
    assert_eq!(bank.account("ACC0001").unwrap().balance, dec!(510.0));

    bank.activate_account("ACC0001");
    assert!(bank.transfer_funds("ACC0001", "ACC0002", dec!(10.0)).unwrap());
    assert_eq!(bank.account("ACC0001").unwrap().balance, dec!(500.0));
    assert_eq!(bank.account("ACC0002").unwrap().balance, dec!(500.0));
}

#[test]
fn test_auto_deactivation_then_manual_reactivation() {
    let mut bank = BankSystem::new();
    bank.create_account("debit", "Dana", dec!(90.0)).unwrap();

    bank.monthly_update();
    let dana = bank.account("ACC0001").unwrap();
    assert_eq!(dana.balance, dec!(90.9));
    assert!(!dana.is_active());

    // A further update leaves the inactive account untouched
    bank.monthly_update();
    assert_eq!(bank.account("ACC0001").unwrap().balance, dec!(90.9));

    bank.activate_account("ACC0001");
    bank.monthly_update();
    let dana = bank.account("ACC0001").unwrap();
    assert_eq!(dana.balance, dec!(91.809));
    assert!(!dana.is_active());
}

#[test]
fn test_credit_interest_compounds_on_owed_only() {
    let mut bank = BankSystem::new();
    bank.create_account("credit", "Bob", dec!(0.0)).unwrap();
    bank.create_account("debit", "Alice", dec!(1000.0)).unwrap();

    // Bob draws 100 on credit, then two periods of 2% compound on the debt
    assert!(bank.transfer_funds("ACC0001", "ACC0002", dec!(100.0)).unwrap());
    bank.monthly_update();
    bank.monthly_update();

    let info = bank.get_account_info("ACC0001").unwrap();
    // `balance` never accrues interest on a credit account
    assert_eq!(info.balance, dec!(0.0));

    // A transfer in lands on Bob's `balance`; the owed credit is untouched
    assert!(bank.transfer_funds("ACC0002", "ACC0001", dec!(200.0)).unwrap());
    assert_eq!(bank.account("ACC0001").unwrap().balance, dec!(200.0));
    match &bank.account("ACC0001").unwrap().kind {
        AccountKind::Credit { credit_balance, .. } => {
            assert_eq!(*credit_balance, dec!(104.04));
        }
        other => panic!("expected a credit account, got {other:?}"),
    }
}
