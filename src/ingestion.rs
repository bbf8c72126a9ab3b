use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{AccountType, Error, Operation};

/// Reads a script with the header `type, kind, name, amount, rate`.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    op: String,
    kind: String,
    name: Option<String>,
    amount: Option<f64>,
    rate: Option<f64>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let account_type: AccountType = row.kind.parse()?;

        match (row.op.trim().to_ascii_lowercase().as_str(), row.amount) {
            ("open", balance) => Ok(Operation::open(
                account_type,
                row.name.as_deref(),
                balance.unwrap_or(0.0),
                row.rate.unwrap_or(0.0),
            )),
            ("deposit", Some(amount)) => Ok(Operation::deposit(account_type, amount)),
            ("withdraw", Some(amount)) => Ok(Operation::withdraw(account_type, amount)),
            (op @ ("deposit" | "withdraw"), None) => Err(Error::Ingestion(format!(
                "Missing amount for {} operation",
                op
            ))),
            (other, _) => Err(Error::Ingestion(format!(
                "Invalid operation type: {}",
                other
            ))),
        }
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // The stream must own the reader to be 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;
    use futures::executor::block_on;

    use super::*;
    use crate::domain::OperationKind;

    fn parse(script: &'static str) -> Vec<Result<Operation, Error>> {
        let mut reader = CsvReader::new(script.as_bytes()).unwrap();
        block_on(reader.stream().collect::<Vec<_>>())
    }

    #[test]
    fn parses_open_deposit_and_withdraw_rows() {
        let ops = parse(
            "type, kind, name, amount, rate\n\
             open, trust, Wonderwoman2, 10000, 5.0\n\
             open, savings, , ,\n\
             Deposit, trust, , 6000,\n\
             withdraw, checking, , 2000.5,\n",
        );
        let ops: Vec<Operation> = ops.into_iter().map(Result::unwrap).collect();
        assert_eq!(
            ops,
            [
                Operation::open(AccountType::Trust, Some("Wonderwoman2"), 10000.0, 5.0),
                Operation::open(AccountType::Savings, None, 0.0, 0.0),
                Operation::deposit(AccountType::Trust, 6000.0),
                Operation::withdraw(AccountType::Checking, 2000.5),
            ]
        );
    }

    #[test]
    fn bad_rows_become_errors_without_stopping_the_stream() {
        let ops = parse(
            "type, kind, name, amount, rate\n\
             transfer, basic, , 10,\n\
             deposit, brokerage, , 10,\n\
             deposit, basic, , ,\n\
             deposit, basic, , lots,\n\
             deposit, basic, , 10,\n",
        );
        assert_eq!(ops.len(), 5);
        assert!(ops[..4].iter().all(|r| matches!(r, Err(Error::Ingestion(_)))));
        assert!(matches!(
            &ops[4],
            Ok(Operation {
                kind: OperationKind::Deposit { amount },
                account_type: AccountType::Basic,
            }) if *amount == 10.0
        ));
    }

    #[test]
    fn second_stream_is_empty() {
        let mut reader = CsvReader::new("type,kind,name,amount,rate\n".as_bytes()).unwrap();
        let _ = reader.stream();
        assert!(block_on(reader.stream().collect::<Vec<_>>()).is_empty());
    }
}
