use crate::domain::AccountType;

#[derive(Debug, Clone, PartialEq)]
pub enum OperationKind {
    Open {
        name: Option<String>,
        balance: f64,
        interest_rate: f64,
    },
    Deposit {
        amount: f64,
    },
    Withdraw {
        amount: f64,
    },
}

/// One step of a script: open an account, or apply a deposit/withdrawal to
/// every account of `account_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub account_type: AccountType,
}

impl Operation {
    pub fn open(
        account_type: AccountType,
        name: Option<&str>,
        balance: f64,
        interest_rate: f64,
    ) -> Self {
        Self {
            kind: OperationKind::Open {
                name: name.map(str::to_owned),
                balance,
                interest_rate,
            },
            account_type,
        }
    }

    pub fn deposit(account_type: AccountType, amount: f64) -> Self {
        Self {
            kind: OperationKind::Deposit { amount },
            account_type,
        }
    }

    pub fn withdraw(account_type: AccountType, amount: f64) -> Self {
        Self {
            kind: OperationKind::Withdraw { amount },
            account_type,
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            OperationKind::Open { name, balance, .. } => write!(
                f,
                "open,kind={:?},name={},balance={}",
                self.account_type,
                name.as_deref().unwrap_or("-"),
                balance
            ),
            OperationKind::Deposit { amount } => {
                write!(f, "deposit,kind={:?},amount={}", self.account_type, amount)
            }
            OperationKind::Withdraw { amount } => {
                write!(f, "withdraw,kind={:?},amount={}", self.account_type, amount)
            }
        }
    }
}
