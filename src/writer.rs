use crate::account::AccountInfo;
use crate::error::Result;
use std::io::Write;

/// Writes the final state of all accounts as CSV.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = AccountInfo>) -> Result<()> {
        for info in accounts {
            self.writer.serialize(info)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
