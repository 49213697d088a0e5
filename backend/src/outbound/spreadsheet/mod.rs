//! Spreadsheet decoding adapters.

mod calamine_reader;

pub use calamine_reader::CalamineWorkbookReader;
