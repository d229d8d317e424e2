use crate::command::Command;
use crate::error::BankError;
use std::io::Read;

/// Streams `Command`s out of an operations CSV.
pub struct OpReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OpReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn commands(self) -> impl Iterator<Item = Result<Command, BankError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BankError::from))
    }
}
