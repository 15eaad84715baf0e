pub mod csv;
pub mod dot;
pub mod json;
pub mod terminal;

pub use csv::CsvWriter;
pub use dot::{DotConfig, DotWriter};
pub use json::{JsonReport, JsonWriter};
pub use terminal::TerminalWriter;
