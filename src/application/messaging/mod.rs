//! Message handling - raw text to structured skill requests

pub mod parser;

pub use parser::MessageParser;
