use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum OpType {
    Create,
    Deposit,
    Withdraw,
    Transfer,
    Activate,
    Deactivate,
    MonthlyUpdate,
}

/// One parsed row of the operations CSV. Fields are optional because each op
/// uses a different subset of columns; `BankSystem::execute` validates
/// presence.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub op: OpType,
    pub kind: Option<String>,
    pub owner: Option<String>,
    pub account: Option<String>,
    pub target: Option<String>,
    pub amount: Option<Decimal>,
}
