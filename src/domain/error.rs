#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Engine failed with: {0}")]
    Engine(String),
}

/// Why an account refused a deposit or withdrawal.
///
/// Rejections are ordinary outcomes, callers that only care about
/// success use `Account::deposit` / `Account::withdraw` and get a `bool`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("invalid amount {0}")]
    InvalidAmount(f64),

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("deposit of {requested} would overflow balance {available}")]
    BalanceOverflow { requested: f64, available: f64 },

    #[error("withdrawal limit of {max} reached")]
    WithdrawalLimit { max: u32 },

    #[error("amount {requested} exceeds withdrawal cap of {cap}")]
    PercentageCap { requested: f64, cap: f64 },
}
