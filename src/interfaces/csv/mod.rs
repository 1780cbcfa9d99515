pub mod trade_reader;
