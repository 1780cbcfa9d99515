use crate::domain::trading::Trade;
use crate::error::{DemoError, Result};
use std::io::Read;

/// Reads closed trades from a CSV source with the header
/// `id,symbol,created_at,profit_loss`.
///
/// `created_at` is an RFC 3339 timestamp. Whitespace around fields is trimmed.
pub struct TradeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TradeReader<R> {
    /// Creates a new `TradeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes trades, one
    /// result per row, so a bad row does not stop the rest of the file.
    pub fn trades(self) -> impl Iterator<Item = Result<Trade>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(DemoError::from))
    }
}
