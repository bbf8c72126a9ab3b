use std::str::FromStr;

use tracing::debug;

use crate::domain::{Error, Money, Rejection};

/// The data-less tag of an account variant, used for grouping and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Basic,
    Savings,
    Checking,
    Trust,
}

impl AccountType {
    #[cfg(test)]
    pub const ALL: [AccountType; 4] = [
        AccountType::Basic,
        AccountType::Savings,
        AccountType::Checking,
        AccountType::Trust,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Basic => "Account",
            AccountType::Savings => "Savings Account",
            AccountType::Checking => "Checking Account",
            AccountType::Trust => "Trust Account",
        }
    }

    pub fn default_name(&self) -> String {
        format!("Unnamed {}", self.label())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "account" => Ok(AccountType::Basic),
            "savings" => Ok(AccountType::Savings),
            "checking" => Ok(AccountType::Checking),
            "trust" => Ok(AccountType::Trust),
            other => Err(Error::Ingestion(format!("Invalid account kind: {}", other))),
        }
    }
}

/// Variant-specific state carried by an [`Account`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountKind {
    Basic,
    /// The rate is shown in descriptions only, no interest is ever accrued.
    Savings { interest_rate: f64 },
    Checking,
    Trust { interest_rate: f64, withdrawal_count: u32 },
}

/// Opening parameters. Unset fields fall back to an unnamed, empty, 0% account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountConfig {
    pub name: Option<String>,
    pub balance: f64,
    pub interest_rate: f64,
}

impl AccountConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_interest_rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = interest_rate;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: String,
    balance: f64,
    kind: AccountKind,
}

fn check_amount(amount: f64) -> Result<(), Rejection> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Rejection::InvalidAmount(amount));
    }
    Ok(())
}

fn ensure_covers(balance: f64, amount: f64) -> Result<(), Rejection> {
    if balance - amount < 0.0 {
        return Err(Rejection::InsufficientFunds {
            requested: amount,
            available: balance,
        });
    }
    Ok(())
}

impl Account {
    pub const CHECKING_WITHDRAWAL_FEE: f64 = 1.50;
    pub const TRUST_MAX_WITHDRAWALS: u32 = 3;
    pub const TRUST_MAX_WITHDRAWAL_PERCENTAGE: f64 = 0.20;
    pub const TRUST_BONUS_THRESHOLD: f64 = 5000.0;
    pub const TRUST_BONUS_AMOUNT: f64 = 50.0;

    pub fn open(account_type: AccountType, config: AccountConfig) -> Result<Self, Error> {
        if !config.balance.is_finite() || config.balance < 0.0 {
            return Err(Error::Engine(format!(
                "Opening balance {} must be a non-negative number",
                config.balance
            )));
        }
        if !config.interest_rate.is_finite() {
            return Err(Error::Engine(format!(
                "Interest rate {} must be a finite number",
                config.interest_rate
            )));
        }

        let kind = match account_type {
            AccountType::Basic => AccountKind::Basic,
            AccountType::Savings => AccountKind::Savings {
                interest_rate: config.interest_rate,
            },
            AccountType::Checking => AccountKind::Checking,
            AccountType::Trust => AccountKind::Trust {
                interest_rate: config.interest_rate,
                withdrawal_count: 0,
            },
        };

        Ok(Self {
            name: config.name.unwrap_or_else(|| account_type.default_name()),
            balance: config.balance,
            kind,
        })
    }

    pub fn account_type(&self) -> AccountType {
        match self.kind {
            AccountKind::Basic => AccountType::Basic,
            AccountKind::Savings { .. } => AccountType::Savings,
            AccountKind::Checking => AccountType::Checking,
            AccountKind::Trust { .. } => AccountType::Trust,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn interest_rate(&self) -> Option<f64> {
        match self.kind {
            AccountKind::Savings { interest_rate } | AccountKind::Trust { interest_rate, .. } => {
                Some(interest_rate)
            }
            _ => None,
        }
    }

    pub fn withdrawal_count(&self) -> Option<u32> {
        match self.kind {
            AccountKind::Trust {
                withdrawal_count, ..
            } => Some(withdrawal_count),
            _ => None,
        }
    }

    /// Returns whether the deposit was applied.
    pub fn deposit(&mut self, amount: f64) -> bool {
        match self.try_deposit(amount) {
            Ok(()) => true,
            Err(reason) => {
                debug!(account = %self.name, amount, %reason, "deposit rejected");
                false
            }
        }
    }

    /// Returns whether the withdrawal was applied.
    pub fn withdraw(&mut self, amount: f64) -> bool {
        match self.try_withdraw(amount) {
            Ok(()) => true,
            Err(reason) => {
                debug!(account = %self.name, amount, %reason, "withdrawal rejected");
                false
            }
        }
    }

    pub fn try_deposit(&mut self, amount: f64) -> Result<(), Rejection> {
        check_amount(amount)?;

        let bonus = match self.kind {
            AccountKind::Trust { .. } if amount >= Self::TRUST_BONUS_THRESHOLD => {
                Self::TRUST_BONUS_AMOUNT
            }
            _ => 0.0,
        };

        let credited = self.balance + amount + bonus;
        if !credited.is_finite() {
            return Err(Rejection::BalanceOverflow {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance = credited;
        Ok(())
    }

    pub fn try_withdraw(&mut self, amount: f64) -> Result<(), Rejection> {
        check_amount(amount)?;

        let balance = self.balance;
        match &mut self.kind {
            AccountKind::Basic | AccountKind::Savings { .. } => {
                ensure_covers(balance, amount)?;
                self.balance -= amount;
            }
            AccountKind::Checking => {
                // fee comes on top of the requested amount
                let total = amount + Self::CHECKING_WITHDRAWAL_FEE;
                ensure_covers(balance, total)?;
                self.balance -= total;
            }
            AccountKind::Trust {
                withdrawal_count, ..
            } => {
                if *withdrawal_count >= Self::TRUST_MAX_WITHDRAWALS {
                    return Err(Rejection::WithdrawalLimit {
                        max: Self::TRUST_MAX_WITHDRAWALS,
                    });
                }

                let cap = balance * Self::TRUST_MAX_WITHDRAWAL_PERCENTAGE;
                if amount > cap {
                    return Err(Rejection::PercentageCap {
                        requested: amount,
                        cap,
                    });
                }

                // unreachable while the cap stays below 100%
                ensure_covers(balance, amount)?;

                self.balance -= amount;
                *withdrawal_count += 1;
            }
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = self.account_type().label();
        let balance = Money(self.balance);
        match self.kind {
            AccountKind::Basic | AccountKind::Checking => {
                write!(f, "[{}: {}: {}]", label, self.name, balance)
            }
            AccountKind::Savings { interest_rate } => write!(
                f,
                "[{}: {}: {}, Interest Rate: {}%]",
                label, self.name, balance, interest_rate
            ),
            AccountKind::Trust {
                interest_rate,
                withdrawal_count,
            } => write!(
                f,
                "[{}: {}: {}, Interest Rate: {}%, Withdrawals: {}/{}]",
                label,
                self.name,
                balance,
                interest_rate,
                withdrawal_count,
                Self::TRUST_MAX_WITHDRAWALS
            ),
        }
    }
}
