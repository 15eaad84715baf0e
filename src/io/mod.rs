pub mod facts;
pub mod output;
pub mod walker;
pub mod writers;

pub use facts::{load_facts, parse_facts, ModuleFacts};
pub use output::{OutputFormat, OutputWriter};
pub use walker::SourceWalker;
