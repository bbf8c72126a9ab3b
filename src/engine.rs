use crate::batch;
use crate::domain::{
    Account, AccountConfig, AccountType, Error, Operation, OperationKind,
    traits::{DeadLetterQueue, OperationStream, OutputRepository},
};

use futures::StreamExt;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
        }
    }

    /// Drains the operation stream. Bad entries go to the DLQ, I/O failures
    /// on the transcript abort the run.
    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => match self.apply_operation(op) {
                    Ok(()) => {}
                    Err(e @ Error::IO(_)) => return Err(e),
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        debug!(operation = %op, "applying operation");
        match op.kind {
            OperationKind::Open {
                name,
                balance,
                interest_rate,
            } => {
                let config = match name {
                    Some(name) => AccountConfig::named(name),
                    None => AccountConfig::default(),
                };
                self.open(
                    op.account_type,
                    config
                        .with_balance(balance)
                        .with_interest_rate(interest_rate),
                )
            }
            OperationKind::Deposit { amount } => {
                let accounts = self.output_repository.accounts_mut(op.account_type);
                let report = batch::deposit_all(op.account_type, accounts, amount);
                self.output_repository.report_batch(&report)
            }
            OperationKind::Withdraw { amount } => {
                let accounts = self.output_repository.accounts_mut(op.account_type);
                let report = batch::withdraw_all(op.account_type, accounts, amount);
                self.output_repository.report_batch(&report)
            }
        }
    }

    fn open(&mut self, account_type: AccountType, config: AccountConfig) -> Result<(), Error> {
        let account = Account::open(account_type, config)?;
        info!(
            name = account.name(),
            balance = account.balance(),
            interest_rate = ?account.interest_rate(),
            ?account_type,
            "opened account"
        );
        self.output_repository.open_account(account);
        info!(
            ?account_type,
            group_size = self.output_repository.accounts(account_type).len(),
            "account group updated"
        );
        Ok(())
    }

    #[cfg(test)]
    pub fn output_repository(&self) -> &O {
        &self.output_repository
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.output_repository.flush()
    }

    #[cfg(test)]
    pub fn into_output_repository(self) -> O {
        self.output_repository
    }
}
