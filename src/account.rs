use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AccountStatus {
    Active,
    Inactive,
}

/// Variant-specific state. The three account types form a closed set, so the
/// hierarchy is an enum matched inside each operation rather than a trait.
#[derive(Debug, PartialEq, Clone)]
pub enum AccountKind {
    Payroll,
    Debit {
        interest_rate: Decimal,
        minimum_balance: Decimal,
    },
    Credit {
        /// Amount currently owed; always within `[0, credit_limit]`.
        credit_balance: Decimal,
        credit_limit: Decimal,
        interest_rate: Decimal,
    },
}

/// A single money-holding entity with a type-specific ruleset.
///
/// `balance` holds the available funds for payroll and debit accounts. For a
/// credit account the spendable store is `credit_balance` inside the kind;
/// `balance` only receives inbound transfer credits.
#[derive(Debug, PartialEq, Clone)]
pub struct Account {
    pub number: String,
    pub owner: String,
    pub balance: Decimal,
    pub status: AccountStatus,
    pub kind: AccountKind,
}

/// Snapshot of an account's public state, serialized by the CSV writer.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AccountInfo {
    pub account_number: String,
    pub owner: String,
    pub balance: Decimal,
    pub is_active: bool,
    pub account_type: &'static str,
}

impl Account {
    fn new(number: String, owner: String, balance: Decimal, kind: AccountKind) -> Self {
        Self {
            number,
            owner,
            balance,
            status: AccountStatus::Active,
            kind,
        }
    }

    pub fn new_payroll(number: String, owner: String, balance: Decimal) -> Self {
        Self::new(number, owner, balance, AccountKind::Payroll)
    }

    pub fn new_debit(number: String, owner: String, balance: Decimal) -> Self {
        Self::new(
            number,
            owner,
            balance,
            AccountKind::Debit {
                interest_rate: dec!(0.01),
                minimum_balance: dec!(100.0),
            },
        )
    }

    pub fn new_credit(number: String, owner: String, balance: Decimal) -> Self {
        Self::new(
            number,
            owner,
            balance,
            AccountKind::Credit {
                credit_balance: Decimal::ZERO,
                credit_limit: dec!(500.0),
                interest_rate: dec!(0.02),
            },
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            AccountKind::Payroll => "PayrollAccount",
            AccountKind::Debit { .. } => "DebitAccount",
            AccountKind::Credit { .. } => "CreditAccount",
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn activate(&mut self) {
        self.status = AccountStatus::Active;
    }

    pub fn deactivate(&mut self) {
        self.status = AccountStatus::Inactive;
    }

    /// Withdraws funds. For credit accounts this draws on credit, increasing
    /// the owed `credit_balance` up to the limit.
    ///
    /// Returns `Ok(false)` without mutating on any business rejection.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<bool> {
        if !self.is_active() {
            warn!(account = %self.number, "account is inactive");
            return Ok(false);
        }
        match &mut self.kind {
            AccountKind::Payroll | AccountKind::Debit { .. } => {
                if amount > self.balance {
                    warn!(account = %self.number, %amount, "insufficient balance");
                    return Ok(false);
                }
                self.balance -= amount;
                Ok(true)
            }
            AccountKind::Credit {
                credit_balance,
                credit_limit,
                ..
            } => {
                if *credit_balance + amount > *credit_limit {
                    warn!(account = %self.number, %amount, "credit limit exceeded");
                    return Ok(false);
                }
                *credit_balance += amount;
                Ok(true)
            }
        }
    }

    /// Deposits funds. For credit accounts this repays owed credit, clamped
    /// at zero. Payroll accounts do not accept deposits at all.
    pub fn deposit(&mut self, amount: Decimal) -> Result<bool> {
        match &mut self.kind {
            AccountKind::Payroll => Err(BankError::UnsupportedOperation(
                "deposits are not allowed for payroll accounts",
            )),
            AccountKind::Debit { .. } => {
                if self.status == AccountStatus::Inactive {
                    warn!(account = %self.number, "account is inactive");
                    return Ok(false);
                }
                self.balance += amount;
                Ok(true)
            }
            AccountKind::Credit { credit_balance, .. } => {
                if self.status == AccountStatus::Inactive {
                    warn!(account = %self.number, "account is inactive");
                    return Ok(false);
                }
                *credit_balance = (*credit_balance - amount).max(Decimal::ZERO);
                Ok(true)
            }
        }
    }

    /// Moves `amount` from this account to `target`.
    ///
    /// The credit leg writes `target.balance` directly rather than going
    /// through the target's `deposit`, so a credit-account target accrues
    /// funds on `balance`, not on its owed `credit_balance`. Kept for
    /// compatibility with the system this replaces.
    pub fn transfer(&mut self, target: &mut Account, amount: Decimal) -> Result<bool> {
        if matches!(self.kind, AccountKind::Payroll) {
            return Err(BankError::UnsupportedOperation(
                "transfers are not allowed from payroll accounts",
            ));
        }
        if !self.withdraw(amount)? {
            return Ok(false);
        }
        target.balance += amount;
        Ok(true)
    }

    /// Applies one billing period: debit accounts compound interest and
    /// deactivate below their minimum balance, credit accounts compound
    /// interest on any owed credit, payroll accounts are untouched.
    pub fn apply_monthly_changes(&mut self) {
        if !self.is_active() {
            return;
        }
        match &mut self.kind {
            AccountKind::Payroll => {}
            AccountKind::Debit {
                interest_rate,
                minimum_balance,
            } => {
                self.balance *= Decimal::ONE + *interest_rate;
                if self.balance < *minimum_balance {
                    self.status = AccountStatus::Inactive;
                }
            }
            AccountKind::Credit {
                credit_balance,
                interest_rate,
                ..
            } => {
                if *credit_balance > Decimal::ZERO {
                    *credit_balance *= Decimal::ONE + *interest_rate;
                }
            }
        }
    }

    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            account_number: self.number.clone(),
            owner: self.owner.clone(),
            balance: self.balance,
            is_active: self.is_active(),
            account_type: self.type_name(),
        }
    }

    pub fn balance_report(&self) -> String {
        format!(
            "Balance for {}'s {}: {}",
            self.owner,
            self.type_name(),
            self.balance
        )
    }

    #[cfg(test)]
    pub(crate) fn credit_balance(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Credit { credit_balance, .. } => Some(credit_balance),
            _ => None,
        }
    }
}
