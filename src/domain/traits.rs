use futures::Stream;

use crate::batch::BatchReport;
use crate::domain::{Account, AccountType, Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait OutputRepository {
    fn open_account(&mut self, account: Account);

    /// Accounts of one variant, in the order they were opened.
    fn accounts(&self, account_type: AccountType) -> &[Account];

    fn accounts_mut(&mut self, account_type: AccountType) -> &mut [Account];

    fn report_batch(&mut self, report: &BatchReport) -> Result<(), Error>;

    fn flush(&mut self) -> Result<(), Error>;
}
