use tracing::{debug, info};

use crate::domain::{Account, AccountType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Withdraw,
}

/// The result of applying one action to one account.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub action: Action,
    pub amount: f64,
    pub applied: bool,
    pub description: String, // taken after the action ran
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.action, self.applied) {
            (Action::Deposit, true) => {
                write!(f, "Deposited {} to {}", self.amount, self.description)
            }
            (Action::Deposit, false) => {
                write!(f, "Failed Deposit of {} to {}", self.amount, self.description)
            }
            (Action::Withdraw, true) => {
                write!(f, "Withdrew {} from {}", self.amount, self.description)
            }
            (Action::Withdraw, false) => write!(
                f,
                "Failed Withdrawal of {} from {}",
                self.amount, self.description
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub action: Action,
    pub account_type: AccountType,
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn header(&self) -> String {
        let group = match self.account_type {
            AccountType::Basic => "",
            AccountType::Savings => "Savings ",
            AccountType::Checking => "Checking ",
            AccountType::Trust => "Trust ",
        };
        match self.action {
            Action::Deposit => format!("=== Depositing to {}Accounts {}", group, "=".repeat(33)),
            Action::Withdraw => {
                format!("=== Withdrawing from {}Accounts {}", group, "=".repeat(30))
            }
        }
    }

    pub fn applied(&self) -> usize {
        self.outcomes.iter().filter(|o| o.applied).count()
    }
}

pub fn deposit_all(account_type: AccountType, accounts: &mut [Account], amount: f64) -> BatchReport {
    apply_all(account_type, accounts, Action::Deposit, amount)
}

pub fn withdraw_all(
    account_type: AccountType,
    accounts: &mut [Account],
    amount: f64,
) -> BatchReport {
    apply_all(account_type, accounts, Action::Withdraw, amount)
}

fn apply_all(
    account_type: AccountType,
    accounts: &mut [Account],
    action: Action,
    amount: f64,
) -> BatchReport {
    let outcomes: Vec<Outcome> = accounts
        .iter_mut()
        .map(|account| {
            let applied = match action {
                Action::Deposit => account.deposit(amount),
                Action::Withdraw => account.withdraw(amount),
            };
            debug!(
                account = account.name(),
                balance = account.balance(),
                withdrawal_count = ?account.withdrawal_count(),
                applied,
                "account updated"
            );
            Outcome {
                action,
                amount,
                applied,
                description: account.describe(),
            }
        })
        .collect();

    let report = BatchReport {
        action,
        account_type,
        outcomes,
    };
    info!(
        ?action,
        ?account_type,
        amount,
        applied = report.applied(),
        total = report.outcomes.len(),
        "batch applied"
    );
    report
}
