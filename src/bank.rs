use crate::account::{Account, AccountInfo};
use crate::command::{Command, OpType};
use crate::error::{BankError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::warn;

const NOT_FOUND: &str = "Account not found.";

/// The registry: owns every account and routes transfers, monthly updates,
/// and activation by account number.
#[derive(Default)]
pub struct BankSystem {
    accounts: HashMap<String, Account>,
}

impl BankSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account numbers are sequential over creations; accounts are never
    /// deleted, so the count is a stable 1-based index.
    fn next_account_number(&self) -> String {
        format!("ACC{:04}", self.accounts.len() + 1)
    }

    /// Creates and stores an account of the given type (`payroll`, `debit`
    /// or `credit`) and returns a reference to it.
    pub fn create_account(
        &mut self,
        account_type: &str,
        owner: &str,
        initial_balance: Decimal,
    ) -> Result<&Account> {
        let number = self.next_account_number();
        let account = match account_type {
            "payroll" => Account::new_payroll(number.clone(), owner.to_string(), initial_balance),
            "debit" => Account::new_debit(number.clone(), owner.to_string(), initial_balance),
            "credit" => Account::new_credit(number.clone(), owner.to_string(), initial_balance),
            other => return Err(BankError::InvalidAccountType(other.to_string())),
        };
        Ok(self.accounts.entry(number).or_insert(account))
    }

    /// Routes a transfer between two owned accounts. Unknown ids and
    /// self-transfers are rejected with `Ok(false)` before any mutation.
    pub fn transfer_funds(&mut self, from: &str, to: &str, amount: Decimal) -> Result<bool> {
        if !self.accounts.contains_key(from) || !self.accounts.contains_key(to) {
            warn!(from, to, "one or both accounts do not exist");
            return Ok(false);
        }
        if from == to {
            warn!(from, "transfer source and target are the same account");
            return Ok(false);
        }
        let [Some(source), Some(target)] = self.accounts.get_disjoint_mut([from, to]) else {
            return Ok(false);
        };
        source.transfer(target, amount)
    }

    /// Applies one billing period to every account. Accounts are
    /// independent, so iteration order does not matter.
    pub fn monthly_update(&mut self) {
        for account in self.accounts.values_mut() {
            account.apply_monthly_changes();
        }
    }

    pub fn activate_account(&mut self, number: &str) {
        if let Some(account) = self.accounts.get_mut(number) {
            account.activate();
        }
    }

    pub fn deactivate_account(&mut self, number: &str) {
        if let Some(account) = self.accounts.get_mut(number) {
            account.deactivate();
        }
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn get_account_info(&self, number: &str) -> Option<AccountInfo> {
        self.accounts.get(number).map(Account::info)
    }

    pub fn get_balance_report(&self, number: &str) -> String {
        match self.accounts.get(number) {
            Some(account) => account.balance_report(),
            None => NOT_FOUND.to_string(),
        }
    }

    /// Snapshots of all accounts, sorted by account number for stable
    /// output.
    pub fn account_infos(&self) -> Vec<AccountInfo> {
        let mut infos: Vec<AccountInfo> = self.accounts.values().map(Account::info).collect();
        infos.sort_by(|a, b| a.account_number.cmp(&b.account_number));
        infos
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Applies one parsed operation. Business rejections (unknown account,
    /// insufficient funds, inactive account) are logged and absorbed here;
    /// only signaled errors propagate.
    pub fn execute(&mut self, cmd: Command) -> Result<()> {
        match cmd.op {
            OpType::Create => {
                let kind = require(cmd.kind, "create is missing an account kind")?;
                let owner = require(cmd.owner, "create is missing an owner")?;
                self.create_account(&kind, &owner, cmd.amount.unwrap_or(Decimal::ZERO))?;
            }
            OpType::Deposit => {
                let number = require(cmd.account, "deposit is missing an account")?;
                let amount = require(cmd.amount, "deposit is missing an amount")?;
                match self.accounts.get_mut(&number) {
                    Some(account) => {
                        account.deposit(amount)?;
                    }
                    None => warn!(account = %number, "account does not exist"),
                }
            }
            OpType::Withdraw => {
                let number = require(cmd.account, "withdraw is missing an account")?;
                let amount = require(cmd.amount, "withdraw is missing an amount")?;
                match self.accounts.get_mut(&number) {
                    Some(account) => {
                        account.withdraw(amount)?;
                    }
                    None => warn!(account = %number, "account does not exist"),
                }
            }
            OpType::Transfer => {
                let from = require(cmd.account, "transfer is missing a source account")?;
                let to = require(cmd.target, "transfer is missing a target account")?;
                let amount = require(cmd.amount, "transfer is missing an amount")?;
                self.transfer_funds(&from, &to, amount)?;
            }
            OpType::Activate => {
                let number = require(cmd.account, "activate is missing an account")?;
                self.activate_account(&number);
            }
            OpType::Deactivate => {
                let number = require(cmd.account, "deactivate is missing an account")?;
                self.deactivate_account(&number);
            }
            OpType::MonthlyUpdate => self.monthly_update(),
        }
        Ok(())
    }
}

fn require<T>(field: Option<T>, message: &str) -> Result<T> {
    field.ok_or_else(|| BankError::InvalidCommand(message.to_string()))
}
