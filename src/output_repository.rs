use std::collections::HashMap;
use std::io::Write;

use crate::batch::BatchReport;
use crate::domain::{Account, AccountType, Error, OutputRepository};

/// Keeps account groups in memory and writes the batch transcript to `W`.
#[derive(Debug)]
pub struct TranscriptOutput<W: Write> {
    accounts: HashMap<AccountType, Vec<Account>>,
    writer: W,
}

impl<W: Write> TranscriptOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            accounts: HashMap::new(),
            writer,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputRepository for TranscriptOutput<W> {
    fn open_account(&mut self, account: Account) {
        self.accounts
            .entry(account.account_type())
            .or_default()
            .push(account);
    }

    fn accounts(&self, account_type: AccountType) -> &[Account] {
        self.accounts
            .get(&account_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn accounts_mut(&mut self, account_type: AccountType) -> &mut [Account] {
        self.accounts.entry(account_type).or_default()
    }

    fn report_batch(&mut self, report: &BatchReport) -> Result<(), Error> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.header())?;
        for outcome in &report.outcomes {
            writeln!(self.writer, "{}", outcome)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
